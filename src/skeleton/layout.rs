//! Static level/slot layout of the binary tree
//!
//! The skeleton is built once and never mutated. Nodes that are not yet
//! revealed still have a slot here; hiding is done by scaling, not removal.

use super::slot::{Slot, SlotId};
use crate::error::{RevealError, RevealResult};

/// Deepest tree accepted by the generator (the leaf row then holds 32768 slots)
pub const MAX_LEVELS: usize = 16;

/// Immutable layout of every slot in the tree, stored level by level
#[derive(Debug, Clone, PartialEq)]
pub struct TreeSkeleton {
    levels: Vec<Vec<Slot>>,
    row_spacing: f32,
    y_offset: f32,
}

impl TreeSkeleton {
    /// Generate a complete binary tree layout with `level_count` levels.
    ///
    /// The leaf row spans `spacing_x * 2^(level_count - 1)` units centered on
    /// x = 0, and every slot sits at the center of its share of that span, so
    /// each parent is centered above its two children.
    pub fn build(level_count: usize, spacing_x: f32, spacing_y: f32, y_offset: f32) -> RevealResult<Self> {
        if level_count < 1 {
            return Err(RevealError::invalid("level count must be at least 1"));
        }
        if level_count > MAX_LEVELS {
            return Err(RevealError::invalid(format!(
                "level count {} exceeds the maximum of {}",
                level_count, MAX_LEVELS
            )));
        }
        check_finite("spacing_x", spacing_x)?;
        check_spacing(spacing_y, y_offset)?;

        let span = spacing_x * (1usize << (level_count - 1)) as f32;

        let levels = (0..level_count)
            .map(|level| {
                let count = 1usize << level;
                let cell = span / count as f32;
                (0..count)
                    .map(|index| {
                        let x = (index as f32 + 0.5) * cell - span / 2.0;
                        Slot::place(SlotId::new(level, index), x, spacing_y, y_offset)
                    })
                    .collect()
            })
            .collect();

        Ok(Self {
            levels,
            row_spacing: spacing_y,
            y_offset,
        })
    }

    /// Build from explicit x-coordinates per level.
    ///
    /// The root level must hold exactly one slot and no level may hold more
    /// than twice the slots of the level above it, so every `index / 2`
    /// parent lookup lands on an existing slot.
    pub fn from_levels(levels: &[Vec<f32>], row_spacing: f32, y_offset: f32) -> RevealResult<Self> {
        if levels.is_empty() {
            return Err(RevealError::invalid("level data must contain at least one level"));
        }
        if levels.len() > MAX_LEVELS {
            return Err(RevealError::invalid(format!(
                "level count {} exceeds the maximum of {}",
                levels.len(),
                MAX_LEVELS
            )));
        }
        if levels[0].len() != 1 {
            return Err(RevealError::invalid(format!(
                "root level must hold exactly 1 slot, found {}",
                levels[0].len()
            )));
        }
        check_spacing(row_spacing, y_offset)?;

        for (level, xs) in levels.iter().enumerate().skip(1) {
            let parents = levels[level - 1].len();
            if xs.is_empty() {
                return Err(RevealError::invalid(format!("level {} has no slots", level)));
            }
            if xs.len() > parents * 2 {
                return Err(RevealError::invalid(format!(
                    "level {} has {} slots but its parent level only supports {}",
                    level,
                    xs.len(),
                    parents * 2
                )));
            }
        }

        let mut placed = Vec::with_capacity(levels.len());
        for (level, xs) in levels.iter().enumerate() {
            let mut row = Vec::with_capacity(xs.len());
            for (index, &x) in xs.iter().enumerate() {
                check_finite(&format!("x of slot {}", SlotId::new(level, index)), x)?;
                row.push(Slot::place(SlotId::new(level, index), x, row_spacing, y_offset));
            }
            placed.push(row);
        }

        Ok(Self {
            levels: placed,
            row_spacing,
            y_offset,
        })
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Highest reachable stage: the index of the deepest level
    pub fn max_stage(&self) -> usize {
        self.levels.len() - 1
    }

    pub fn slot_count(&self) -> usize {
        self.levels.iter().map(Vec::len).sum()
    }

    pub fn row_spacing(&self) -> f32 {
        self.row_spacing
    }

    pub fn y_offset(&self) -> f32 {
        self.y_offset
    }

    /// Slots of one level, empty if the level does not exist
    pub fn level(&self, level: usize) -> &[Slot] {
        self.levels.get(level).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn slot(&self, id: SlotId) -> Option<&Slot> {
        self.levels.get(id.level)?.get(id.index)
    }

    /// Parent slot of `id`, `None` for the root.
    ///
    /// Panics if `id` is not part of this skeleton's parent chain; the
    /// constructors guarantee every existing non-root slot has a parent.
    pub fn parent_of(&self, id: SlotId) -> Option<&Slot> {
        id.parent().map(|parent| &self.levels[parent.level][parent.index])
    }

    /// All slots in level-major order (root first)
    pub fn iter(&self) -> impl Iterator<Item = &Slot> + '_ {
        self.levels.iter().flatten()
    }
}

fn check_spacing(row_spacing: f32, y_offset: f32) -> RevealResult<()> {
    check_finite("row spacing", row_spacing)?;
    check_finite("y offset", y_offset)
}

fn check_finite(what: &str, value: f32) -> RevealResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(RevealError::invalid(format!("{} must be finite, got {}", what, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;

    fn sample_levels() -> Vec<Vec<f32>> {
        vec![
            vec![0.0],
            vec![-2.0, 2.0],
            vec![-3.0, -1.0, 1.0, 3.0],
            vec![-4.0, -2.0, 0.0, 2.0, 4.0],
        ]
    }

    #[test]
    fn test_build_slot_counts_double_per_level() {
        for level_count in 1..=8 {
            let skeleton = TreeSkeleton::build(level_count, 2.0, 1.5, 2.0).unwrap();
            assert_eq!(skeleton.level_count(), level_count);
            assert_eq!(skeleton.max_stage(), level_count - 1);
            for level in 0..level_count {
                assert_eq!(skeleton.level(level).len(), 1 << level);
            }
            assert_eq!(skeleton.slot_count(), (1 << level_count) - 1);
        }
    }

    #[test]
    fn test_build_rejects_zero_levels() {
        let result = TreeSkeleton::build(0, 2.0, 1.5, 2.0);
        assert!(matches!(result, Err(RevealError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_build_rejects_too_deep() {
        assert!(TreeSkeleton::build(MAX_LEVELS + 1, 2.0, 1.5, 2.0).is_err());
    }

    #[test]
    fn test_build_rejects_non_finite_spacing() {
        assert!(TreeSkeleton::build(3, f32::NAN, 1.5, 2.0).is_err());
        assert!(TreeSkeleton::build(3, 2.0, f32::INFINITY, 2.0).is_err());
    }

    #[test]
    fn test_build_matches_sample_rows() {
        let skeleton = TreeSkeleton::build(3, 2.0, 1.5, 2.0).unwrap();
        let xs: Vec<Vec<f32>> = (0..3)
            .map(|l| skeleton.level(l).iter().map(|s| s.position.x).collect())
            .collect();
        assert_eq!(xs, vec![vec![0.0], vec![-2.0, 2.0], vec![-3.0, -1.0, 1.0, 3.0]]);
    }

    #[test]
    fn test_build_centers_parent_over_children() {
        let skeleton = TreeSkeleton::build(5, 1.0, 1.0, 0.0).unwrap();
        for slot in skeleton.iter().filter(|s| s.level() > 0) {
            let parent = skeleton.parent_of(slot.id).unwrap();
            let sibling = SlotId::new(slot.level(), slot.index() ^ 1);
            let sibling = skeleton.slot(sibling).unwrap();
            let mid = (slot.position.x + sibling.position.x) / 2.0;
            assert!((mid - parent.position.x).abs() < 0.0001);
        }
    }

    #[test]
    fn test_y_follows_level() {
        let skeleton = TreeSkeleton::from_levels(&sample_levels(), 1.5, 2.0).unwrap();
        assert_eq!(skeleton.slot(SlotId::ROOT).unwrap().position, Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(skeleton.slot(SlotId::new(3, 4)).unwrap().position, Vec3::new(4.0, -2.5, 0.0));
        assert!(skeleton.iter().all(|s| s.position.z == 0.0));
    }

    #[test]
    fn test_from_levels_sample_data() {
        let skeleton = TreeSkeleton::from_levels(&sample_levels(), 1.5, 2.0).unwrap();
        assert_eq!(skeleton.level_count(), 4);
        assert_eq!(skeleton.slot_count(), 12);
        assert_eq!(skeleton.max_stage(), 3);

        // Last sample row has 5 slots; slot 4 hangs off level-2 slot 2
        let parent = skeleton.parent_of(SlotId::new(3, 4)).unwrap();
        assert_eq!(parent.id, SlotId::new(2, 2));
        assert_eq!(parent.position.x, 1.0);
    }

    #[test]
    fn test_from_levels_rejects_bad_shapes() {
        assert!(TreeSkeleton::from_levels(&[], 1.5, 2.0).is_err());
        assert!(TreeSkeleton::from_levels(&[vec![0.0, 1.0]], 1.5, 2.0).is_err());
        assert!(TreeSkeleton::from_levels(&[vec![0.0], vec![]], 1.5, 2.0).is_err());
        assert!(TreeSkeleton::from_levels(&[vec![0.0], vec![-1.0, 0.0, 1.0]], 1.5, 2.0).is_err());
        assert!(TreeSkeleton::from_levels(&[vec![f32::NAN]], 1.5, 2.0).is_err());
    }

    #[test]
    fn test_iter_is_level_major() {
        let skeleton = TreeSkeleton::from_levels(&sample_levels(), 1.5, 2.0).unwrap();
        let ids: Vec<SlotId> = skeleton.iter().map(|s| s.id).take(4).collect();
        assert_eq!(
            ids,
            vec![SlotId::ROOT, SlotId::new(1, 0), SlotId::new(1, 1), SlotId::new(2, 0)]
        );
    }

    #[test]
    fn test_missing_lookups() {
        let skeleton = TreeSkeleton::build(2, 2.0, 1.5, 2.0).unwrap();
        assert!(skeleton.slot(SlotId::new(5, 0)).is_none());
        assert!(skeleton.level(9).is_empty());
        assert!(skeleton.parent_of(SlotId::ROOT).is_none());
    }
}
