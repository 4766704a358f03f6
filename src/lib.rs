mod blueprint;
mod error;
mod tileset;
mod write;
pub mod parse;

pub use blueprint::*;
pub use error::*;
pub use tileset::*;
