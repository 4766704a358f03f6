use crate::{Tileset, SEMANTIC_PROPERTY};

impl Tileset {
    /// Renders the tileset back to the TSX document format, matching the
    /// element shape Tiled emits. Reloading the output yields an equal value.
    pub fn to_tsx(&self) -> String {
        let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        out.push_str(&format!(
            "<tileset version=\"{}\" tiledversion=\"{}\" name=\"{}\" tilewidth=\"{}\" tileheight=\"{}\" tilecount=\"{}\" columns=\"{}\">\n",
            escape(&self.version),
            escape(&self.tiled_version),
            escape(&self.name),
            self.tile_width,
            self.tile_height,
            self.tile_count,
            self.columns,
        ));
        if let Some(grid) = &self.grid {
            out.push_str(&format!(
                " <grid orientation=\"{}\" width=\"{}\" height=\"{}\"/>\n",
                grid.orientation.as_str(),
                grid.width,
                grid.height,
            ));
        }
        for entry in &self.entries {
            out.push_str(&format!(" <tile id=\"{}\">\n", entry.id));
            out.push_str("  <properties>\n");
            out.push_str(&format!(
                "   <property name=\"{SEMANTIC_PROPERTY}\" type=\"int\" value=\"{}\"/>\n",
                entry.semantic_code,
            ));
            out.push_str("  </properties>\n");
            out.push_str(&format!(
                "  <image width=\"{}\" height=\"{}\" source=\"{}\"/>\n",
                entry.image_width,
                entry.image_height,
                escape(&entry.image_path),
            ));
            out.push_str(" </tile>\n");
        }
        out.push_str("</tileset>\n");
        out
    }
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
