use roxmltree::{Document, Node};
use crate::{Grid, Orientation, TsxError};


/// A mostly 1:1 mapping of the TSX <tileset> document format.
/// Custom properties are kept as generic typed name/value pairs at this
/// level; validation and flattening happen in [`crate::Tileset`].
#[derive(Clone, Default, Debug)]
pub struct Tileset {
    pub version: String,
    pub tiled_version: String,
    pub name: String,
    pub tile_width: u32,
    pub tile_height: u32,
    pub tile_count: u32,
    pub columns: u32,
    pub grid: Option<Grid>,
    pub tiles: Vec<Tile>,
}

impl Tileset {

    pub fn parse_doc(doc: &Document) -> Result<Self, TsxError> {
        let mut tileset = Tileset::default();
        let mut found = false;
        let root = doc.root();
        for node in root.children() {
            match node.tag_name().name() {
                "tileset" => {
                    tileset.parse(node)?;
                    found = true;
                },
                _ => {}
            }
        }
        if !found {
            return Err(TsxError::MalformedStructure {
                detail: String::from("document has no <tileset> element"),
            });
        }
        Ok(tileset)
    }

    pub fn parse(&mut self, tileset_node: Node) -> Result<(), TsxError> {

        // Requires the attributes nothing downstream can default
        for required in ["name", "tilecount"] {
            if !tileset_node.attributes().any(|attr| attr.name() == required) {
                return Err(TsxError::MalformedStructure {
                    detail: format!("<tileset> is missing required attribute '{required}'"),
                });
            }
        }

        // Parses attributes
        for attribute in tileset_node.attributes() {
            let name = attribute.name();
            let value = attribute.value();
            match name {
                "version" => self.version = String::from(value),
                "tiledversion" => self.tiled_version = String::from(value),
                "name" => self.name = String::from(value),
                "tilewidth" => self.tile_width = value.parse()?,
                "tileheight" => self.tile_height = value.parse()?,
                "tilecount" => self.tile_count = value.parse()?,
                "columns" => self.columns = value.parse()?,
                _ => {}
            }
        }

        // Parses children
        for child in tileset_node.children() {
            let tag = child.tag_name().name();
            match tag {
                "grid" => self.grid = Some(Grid::parse(child)?),
                "tile" => self.tiles.push(Tile::parse(child)?),
                _ => {}
            }
        }
        Ok(())
    }
}

#[derive(Clone, Default, Debug)]
pub struct Tile {
    /// ID of tile local to its tileset
    pub id: u32,
    pub properties: Vec<Property>,
    pub image: Option<Image>,
}

impl Tile {
    pub fn parse(tile_node: Node) -> Result<Self, TsxError> {
        let mut tile = Tile::default();
        for attribute in tile_node.attributes() {
            match attribute.name() {
                "id" => tile.id = attribute.value().parse()?,
                _ => {}
            }
        }
        for child in tile_node.children() {
            let tag = child.tag_name().name();
            match tag {
                "properties" => {
                    for property_node in child.children() {
                        match property_node.tag_name().name() {
                            "property" => tile.properties.push(Property::parse(property_node)?),
                            _ => {}
                        }
                    }
                },
                "image" => tile.image = Some(Image::parse(child)?),
                _ => {}
            }
        }
        Ok(tile)
    }
}

/// A single <property> entry of a <properties> list.
#[derive(Clone, Eq, PartialEq, Default, Debug)]
pub struct Property {
    pub name: String,
    pub kind: PropertyKind,
    pub value: String,
}

impl Property {
    pub fn parse(property_node: Node) -> Result<Self, TsxError> {
        let mut property = Property::default();
        for attribute in property_node.attributes() {
            let value = attribute.value();
            match attribute.name() {
                "name" => property.name = String::from(value),
                "type" => property.kind = PropertyKind::parse(value)?,
                "value" => property.value = String::from(value),
                _ => {}
            }
        }
        Ok(property)
    }
}

/// Declared type of a custom property.
/// Tiled omits the attribute for string properties.
#[derive(Copy, Clone, Eq, PartialEq, Default, Debug)]
pub enum PropertyKind {
    #[default]
    String,
    Int,
    Float,
    Bool,
}

impl PropertyKind {
    pub fn parse(str: &str) -> Result<Self, TsxError> {
        match str {
            "string" => Ok(Self::String),
            "int" => Ok(Self::Int),
            "float" => Ok(Self::Float),
            "bool" => Ok(Self::Bool),
            _ => Err(TsxError::InvalidAttributeValue { value: String::from(str) })
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
        }
    }
}

#[derive(Clone, Eq, PartialEq, Default, Debug)]
pub struct Image {
    pub source: String,
    pub width: Option<i64>,
    pub height: Option<i64>,
}

impl Image {
    pub fn parse(image_node: Node) -> Result<Image, TsxError> {
        let mut image = Image::default();
        for attribute in image_node.attributes() {
            let value = attribute.value();
            match attribute.name() {
                "source" => image.source = String::from(value),
                "width" => image.width = Some(value.parse()?),
                "height" => image.height = Some(value.parse()?),
                _ => {}
            }
        }
        Ok(image)
    }
}

impl Grid {
    pub fn parse(grid_node: Node) -> Result<Self, TsxError> {
        let mut grid = Grid::default();
        for attribute in grid_node.attributes() {
            let value = attribute.value();
            match attribute.name() {
                "orientation" => grid.orientation = Orientation::parse(value)?,
                "width" => grid.width = value.parse()?,
                "height" => grid.height = value.parse()?,
                _ => {}
            }
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod test {
    use roxmltree::Document;
    use crate::{Orientation, TsxError};
    use super::{PropertyKind, Tileset};

    const SMALL_TSX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<tileset version="1.5" tiledversion="1.6.0" name="things" tilewidth="32" tileheight="32" tilecount="1" columns="0">
 <grid orientation="orthogonal" width="1" height="1"/>
 <tile id="0">
  <properties>
   <property name="name" type="int" value="257"/>
  </properties>
  <image width="16" height="48" source="thing.png"/>
 </tile>
</tileset>"#;

    #[test]
    fn parses_tileset_attributes_and_children() {
        let doc = Document::parse(SMALL_TSX).unwrap();
        let tileset = Tileset::parse_doc(&doc).unwrap();
        assert_eq!(tileset.name, "things");
        assert_eq!(tileset.version, "1.5");
        assert_eq!(tileset.tiled_version, "1.6.0");
        assert_eq!(tileset.tile_width, 32);
        assert_eq!(tileset.tile_height, 32);
        assert_eq!(tileset.tile_count, 1);
        assert_eq!(tileset.columns, 0);

        let grid = tileset.grid.unwrap();
        assert_eq!(grid.orientation, Orientation::Orthogonal);
        assert_eq!(grid.width, 1);
        assert_eq!(grid.height, 1);

        let tile = &tileset.tiles[0];
        assert_eq!(tile.id, 0);
        assert_eq!(tile.properties.len(), 1);
        assert_eq!(tile.properties[0].name, "name");
        assert_eq!(tile.properties[0].kind, PropertyKind::Int);
        assert_eq!(tile.properties[0].value, "257");

        let image = tile.image.as_ref().unwrap();
        assert_eq!(image.source, "thing.png");
        assert_eq!(image.width, Some(16));
        assert_eq!(image.height, Some(48));
    }

    #[test]
    fn skips_unknown_attributes_and_tags() {
        let source = r#"<tileset name="t" tilecount="0" mystery="7"><wobble/></tileset>"#;
        let doc = Document::parse(source).unwrap();
        let tileset = Tileset::parse_doc(&doc).unwrap();
        assert_eq!(tileset.name, "t");
        assert!(tileset.tiles.is_empty());
    }

    #[test]
    fn property_without_type_defaults_to_string() {
        let source = r#"<tileset name="t" tilecount="1">
 <tile id="0">
  <properties><property name="label" value="hi"/></properties>
  <image width="1" height="1" source="a.png"/>
 </tile>
</tileset>"#;
        let doc = Document::parse(source).unwrap();
        let tileset = Tileset::parse_doc(&doc).unwrap();
        assert_eq!(tileset.tiles[0].properties[0].kind, PropertyKind::String);
    }

    #[test]
    fn rejects_unknown_property_type() {
        let source = r#"<tileset name="t" tilecount="1">
 <tile id="0">
  <properties><property name="name" type="color" value="red"/></properties>
 </tile>
</tileset>"#;
        let doc = Document::parse(source).unwrap();
        let result = Tileset::parse_doc(&doc);
        assert!(matches!(result, Err(TsxError::InvalidAttributeValue { .. })));
    }

    #[test]
    fn rejects_non_numeric_tilecount() {
        let doc = Document::parse(r#"<tileset name="t" tilecount="many"/>"#).unwrap();
        let result = Tileset::parse_doc(&doc);
        assert!(matches!(result, Err(TsxError::ParseIntError(_))));
    }
}
