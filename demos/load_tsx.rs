use anyhow::Result;
use tsx_catalog::{scale_factor, PatrolAxis, Tileset};

fn main() -> Result<()> {
    env_logger::init();

    let highres = Tileset::from_path("assets/enemies.tsx")?;
    let lowres = Tileset::from_path("assets/enemies_small.tsx")?;

    println!("tileset '{}' ({} tiles, {}x{} grid cells)",
        highres.name, highres.tile_count, highres.tile_width, highres.tile_height);
    for entry in &highres.entries {
        print!("  tile {:>2}: code {} {:>4}x{:<4} {}",
            entry.id, entry.semantic_code, entry.image_width, entry.image_height, entry.image_path);
        match entry.blueprint() {
            Some(blueprint) => {
                let axis = match blueprint.axis {
                    PatrolAxis::Horizontal => "horizontal",
                    PatrolAxis::Vertical => "vertical",
                };
                let end = if blueprint.starts_at_end { ", starts at end" } else { "" };
                println!(" -> {axis} patrol over {} cells{end}", blueprint.path_length);
            },
            None => println!(" -> no blueprint"),
        }
    }

    let factor = scale_factor(&highres, &lowres)?;
    println!("'{}' is a {factor}x downscale of '{}'", lowres.name, highres.name);
    Ok(())
}
