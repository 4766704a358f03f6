use std::fs;
use std::path::Path;
use roxmltree::Document;
use crate::parse::{self, PropertyKind};
use crate::TsxError;

/// Name of the custom property carrying a tile's semantic code.
pub const SEMANTIC_PROPERTY: &str = "name";

/// A validated version of [`parse::Tileset`] such that every tile is
/// flattened into a fixed-shape [`TileEntry`].
/// Immutable once loaded; entries keep file order.
#[derive(Clone, Eq, PartialEq, Default, Debug)]
pub struct Tileset {
    pub version: String,
    pub tiled_version: String,
    pub name: String,
    pub tile_width: u32,
    pub tile_height: u32,
    pub tile_count: u32,
    pub columns: u32,
    pub grid: Option<Grid>,
    pub entries: Vec<TileEntry>,
}

/// One sprite-frame record of a collection-of-images tileset.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct TileEntry {
    /// ID of tile local to its tileset
    pub id: u32,
    /// Game-defined identity of the sprite. Opaque at this layer.
    pub semantic_code: i32,
    pub image_width: u32,
    pub image_height: u32,
    pub image_path: String,
}

impl Tileset {

    /// Parses and validates a .tsx document.
    /// All-or-nothing: no partial tileset is produced on failure.
    pub fn load(bytes: &[u8]) -> Result<Self, TsxError> {
        let source = std::str::from_utf8(bytes)?;
        let doc = Document::parse(source)?;
        let parsed = parse::Tileset::parse_doc(&doc)?;
        Self::from_parsed(parsed)
    }

    /// Reads a .tsx file from disk and loads it.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TsxError> {
        let path = path.as_ref();
        log::debug!("Reading tileset file {}", path.display());
        let bytes = fs::read(path)?;
        let tileset = Self::load(&bytes)?;
        log::info!("Loaded tileset '{}' with {} entries", tileset.name, tileset.entries.len());
        Ok(tileset)
    }

    pub fn from_parsed(parsed: parse::Tileset) -> Result<Self, TsxError> {
        if parsed.tile_count as usize != parsed.tiles.len() {
            return Err(TsxError::CountMismatch {
                declared: parsed.tile_count,
                actual: parsed.tiles.len() as u32,
            });
        }
        let mut entries: Vec<TileEntry> = Vec::with_capacity(parsed.tiles.len());
        for tile in parsed.tiles {
            let entry = TileEntry::from_parsed(tile)?;
            if entries.iter().any(|existing| existing.id == entry.id) {
                return Err(TsxError::DuplicateId { id: entry.id });
            }
            if entries.iter().any(|existing| existing.image_path == entry.image_path) {
                return Err(TsxError::DuplicatePath { path: entry.image_path });
            }
            entries.push(entry);
        }
        Ok(Self {
            version: parsed.version,
            tiled_version: parsed.tiled_version,
            name: parsed.name,
            tile_width: parsed.tile_width,
            tile_height: parsed.tile_height,
            tile_count: parsed.tile_count,
            columns: parsed.columns,
            grid: parsed.grid,
            entries,
        })
    }

    pub fn entry(&self, id: u32) -> Option<&TileEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn entry_by_code(&self, code: i32) -> Option<&TileEntry> {
        self.entries.iter().find(|entry| entry.semantic_code == code)
    }
}

impl TileEntry {
    fn from_parsed(tile: parse::Tile) -> Result<Self, TsxError> {
        let property = match tile.properties.as_slice() {
            [single] if single.name == SEMANTIC_PROPERTY => single,
            _ => return Err(TsxError::MalformedStructure {
                detail: format!("tile {} must carry exactly one '{SEMANTIC_PROPERTY}' property", tile.id),
            }),
        };
        if property.kind != PropertyKind::Int {
            return Err(TsxError::TypeMismatch {
                tile_id: tile.id,
                declared: String::from(property.kind.as_str()),
            });
        }
        let semantic_code: i32 = property.value.parse()?;

        let image = match tile.image {
            Some(image) => image,
            None => return Err(TsxError::MalformedStructure {
                detail: format!("tile {} has no image", tile.id),
            }),
        };
        if image.source.is_empty() {
            return Err(TsxError::MalformedStructure {
                detail: format!("tile {} image has no source", tile.id),
            });
        }
        let (width, height) = match (image.width, image.height) {
            (Some(width), Some(height)) => (width, height),
            _ => return Err(TsxError::MalformedStructure {
                detail: format!("tile {} image is missing width or height", tile.id),
            }),
        };
        if width <= 0 || height <= 0 {
            return Err(TsxError::InvalidDimension { tile_id: tile.id, width, height });
        }
        Ok(Self {
            id: tile.id,
            semantic_code,
            image_width: width as u32,
            image_height: height as u32,
            image_path: image.source,
        })
    }
}

/// Verifies that two tilesets are resolution variants of one logical
/// catalog: for every semantic code present in both, image dimensions
/// must be related by the same integer factor. Returns that factor.
pub fn scale_factor(high: &Tileset, low: &Tileset) -> Result<u32, TsxError> {
    let mut factor = None;
    for hi in &high.entries {
        let lo = match low.entry_by_code(hi.semantic_code) {
            Some(lo) => lo,
            None => continue,
        };
        let width_ratio = ratio(hi.image_width, lo.image_width, hi.semantic_code)?;
        let height_ratio = ratio(hi.image_height, lo.image_height, hi.semantic_code)?;
        if width_ratio != height_ratio {
            return Err(TsxError::ScaleMismatch { code: hi.semantic_code });
        }
        match factor {
            None => factor = Some(width_ratio),
            Some(factor) if factor == width_ratio => {},
            Some(_) => return Err(TsxError::ScaleMismatch { code: hi.semantic_code }),
        }
    }
    factor.ok_or_else(|| TsxError::MalformedStructure {
        detail: String::from("tilesets share no semantic codes"),
    })
}

fn ratio(hi: u32, lo: u32, code: i32) -> Result<u32, TsxError> {
    if lo == 0 || hi % lo != 0 {
        return Err(TsxError::ScaleMismatch { code });
    }
    Ok(hi / lo)
}

#[derive(Copy, Clone, Eq, PartialEq, Default, Debug)]
pub struct Grid {
    pub orientation: Orientation,
    pub width: u32,
    pub height: u32,
}

#[derive(Copy, Clone, Eq, PartialEq, Default, Debug)]
pub enum Orientation {
    #[default]
    Orthogonal,
    Isometric,
}

impl Orientation {
    pub fn parse(str: &str) -> Result<Self, TsxError> {
        match str {
            "orthogonal" => Ok(Self::Orthogonal),
            "isometric" => Ok(Self::Isometric),
            _ => Err(TsxError::InvalidAttributeValue { value: String::from(str) })
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Orthogonal => "orthogonal",
            Self::Isometric => "isometric",
        }
    }
}
