use std::io;
use std::num::ParseIntError;
use std::str::Utf8Error;
use derive_more::*;

/// Error produced when loading or validating a .tsx document.
/// Loading is all-or-nothing: any variant aborts the whole tileset.
#[derive(Error, Display, From, Debug)]
pub enum TsxError {
    XmlError(roxmltree::Error),
    #[display(fmt = "{_0}")]
    ParseIntError(ParseIntError),
    #[display(fmt = "{_0}")]
    Utf8Error(Utf8Error),
    #[display(fmt = "{_0}")]
    IoError(io::Error),
    #[display(fmt = "Malformed structure: {detail}")]
    #[from(ignore)]
    MalformedStructure { detail: String },
    #[display(fmt = "Unexpected value '{value}'")]
    #[from(ignore)]
    InvalidAttributeValue { value: String },
    #[display(fmt = "Property on tile {tile_id} declared as '{declared}', expected 'int'")]
    #[from(ignore)]
    TypeMismatch { tile_id: u32, declared: String },
    #[display(fmt = "Declared tilecount {declared} but found {actual} tiles")]
    #[from(ignore)]
    CountMismatch { declared: u32, actual: u32 },
    #[display(fmt = "Duplicate tile id {id}")]
    #[from(ignore)]
    DuplicateId { id: u32 },
    #[display(fmt = "Duplicate image source '{path}'")]
    #[from(ignore)]
    DuplicatePath { path: String },
    #[display(fmt = "Tile {tile_id} has invalid image dimensions {width}x{height}")]
    #[from(ignore)]
    InvalidDimension { tile_id: u32, width: i64, height: i64 },
    #[display(fmt = "Image dimensions for semantic code {code} are not related by a single integer factor")]
    #[from(ignore)]
    ScaleMismatch { code: i32 },
}
