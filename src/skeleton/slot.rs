use std::fmt;
use crate::math::Vec3;

/// Identity of a slot in the skeleton: depth plus position within that depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId {
    pub level: usize,
    pub index: usize,
}

impl SlotId {
    pub const ROOT: SlotId = SlotId { level: 0, index: 0 };

    pub const fn new(level: usize, index: usize) -> Self {
        Self { level, index }
    }

    /// Parent slot id, `None` for the root level
    pub fn parent(&self) -> Option<SlotId> {
        if self.level == 0 {
            None
        } else {
            Some(SlotId::new(self.level - 1, self.index / 2))
        }
    }

    /// True when this slot belongs to a revealed level
    pub fn is_revealed_at(&self, stage: usize) -> bool {
        self.level <= stage
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.level, self.index)
    }
}

/// A fixed position in the tree
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub id: SlotId,
    pub position: Vec3,
}

impl Slot {
    /// Place a slot: `y = -(level * row_spacing) + y_offset`, `z = 0`
    pub fn place(id: SlotId, x: f32, row_spacing: f32, y_offset: f32) -> Self {
        Self {
            id,
            position: Vec3::new(x, -(id.level as f32 * row_spacing) + y_offset, 0.0),
        }
    }

    pub fn level(&self) -> usize {
        self.id.level
    }

    pub fn index(&self) -> usize {
        self.id.index
    }
}
