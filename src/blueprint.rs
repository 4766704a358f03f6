use crate::TileEntry;

/// Patrol route encoded by an enemy tile's semantic code.
/// Codes 257-272 enumerate four path lengths per axis and travel direction.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct EnemyBlueprint {
    /// Number of cells the enemy patrols over
    pub path_length: u32,
    pub axis: PatrolAxis,
    /// Whether the enemy spawns at the far end of its route
    pub starts_at_end: bool,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum PatrolAxis {
    Horizontal,
    Vertical,
}

impl EnemyBlueprint {
    pub fn from_code(code: i32) -> Option<Self> {
        if !(257..=272).contains(&code) {
            return None;
        }
        let offset = (code - 257) as u32;
        let path_length = match offset % 4 {
            0 => 3,
            1 => 4,
            2 => 6,
            _ => 12,
        };
        let (axis, starts_at_end) = match offset / 4 {
            0 => (PatrolAxis::Vertical, false),
            1 => (PatrolAxis::Horizontal, false),
            2 => (PatrolAxis::Horizontal, true),
            _ => (PatrolAxis::Vertical, true),
        };
        Some(Self { path_length, axis, starts_at_end })
    }
}

impl TileEntry {
    /// Decodes this entry's semantic code as an enemy patrol blueprint.
    /// Returns `None` for codes outside the enemy range.
    pub fn blueprint(&self) -> Option<EnemyBlueprint> {
        EnemyBlueprint::from_code(self.semantic_code)
    }
}
