mod tileset;

pub use tileset::*;
