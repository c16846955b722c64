use std::collections::HashMap;
use crate::math::Vec3;
use crate::skeleton::{SlotId, TreeSkeleton};

/// Connection from a parent slot to one of its children
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeDescriptor {
    pub from: SlotId,
    pub to: SlotId,
    /// Parent position, straight from the skeleton
    pub start: Vec3,
    /// Child position, straight from the skeleton
    pub end: Vec3,
    pub visible: bool,
}

/// Resolved visibility of every node and edge at one stage
#[derive(Debug, Clone, PartialEq)]
pub struct Visibility {
    pub stage: usize,
    pub node_visible: HashMap<SlotId, bool>,
    /// One edge per non-root slot, in level-major order of the child
    pub edges: Vec<EdgeDescriptor>,
}

impl Visibility {
    pub fn is_node_visible(&self, id: SlotId) -> bool {
        self.node_visible.get(&id).copied().unwrap_or(false)
    }

    pub fn visible_node_count(&self) -> usize {
        self.node_visible.values().filter(|&&v| v).count()
    }

    pub fn visible_edges(&self) -> impl Iterator<Item = &EdgeDescriptor> + '_ {
        self.edges.iter().filter(|e| e.visible)
    }

    /// Edge ending at `child`, if any
    pub fn edge_to(&self, child: SlotId) -> Option<&EdgeDescriptor> {
        self.edges.iter().find(|e| e.to == child)
    }
}

/// Compute which nodes and edges are shown at `stage`.
///
/// A node at level `L` is visible iff `L <= stage`. The edge into a child
/// shares that exact condition, so an edge never appears without its child.
/// Pure: the same skeleton and stage always give the same result.
pub fn resolve(skeleton: &TreeSkeleton, stage: usize) -> Visibility {
    let mut node_visible = HashMap::with_capacity(skeleton.slot_count());
    let mut edges = Vec::with_capacity(skeleton.slot_count().saturating_sub(1));

    for slot in skeleton.iter() {
        let visible = slot.id.is_revealed_at(stage);
        node_visible.insert(slot.id, visible);

        if let Some(parent) = skeleton.parent_of(slot.id) {
            edges.push(EdgeDescriptor {
                from: parent.id,
                to: slot.id,
                start: parent.position,
                end: slot.position,
                visible,
            });
        }
    }

    Visibility {
        stage,
        node_visible,
        edges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_skeleton() -> TreeSkeleton {
        let levels = vec![
            vec![0.0],
            vec![-2.0, 2.0],
            vec![-3.0, -1.0, 1.0, 3.0],
            vec![-4.0, -2.0, 0.0, 2.0, 4.0],
        ];
        TreeSkeleton::from_levels(&levels, 1.5, 2.0).unwrap()
    }

    #[test]
    fn test_node_visibility_follows_level() {
        let skeleton = TreeSkeleton::build(5, 2.0, 1.5, 2.0).unwrap();
        for stage in 0..=skeleton.max_stage() {
            let vis = resolve(&skeleton, stage);
            for slot in skeleton.iter() {
                assert_eq!(vis.is_node_visible(slot.id), slot.level() <= stage);
            }
        }
    }

    #[test]
    fn test_edge_matches_child_visibility() {
        let skeleton = sample_skeleton();
        for stage in 0..=skeleton.max_stage() {
            let vis = resolve(&skeleton, stage);
            assert_eq!(vis.edges.len(), skeleton.slot_count() - 1);
            for edge in &vis.edges {
                assert_eq!(edge.from, edge.to.parent().unwrap());
                assert_eq!(edge.visible, edge.to.level <= stage);
                assert_eq!(edge.visible, vis.is_node_visible(edge.to));
            }
        }
    }

    #[test]
    fn test_stage_zero_shows_root_only() {
        let vis = resolve(&sample_skeleton(), 0);
        assert_eq!(vis.visible_node_count(), 1);
        assert!(vis.is_node_visible(SlotId::ROOT));
        assert_eq!(vis.visible_edges().count(), 0);
    }

    #[test]
    fn test_stage_one_sample() {
        let vis = resolve(&sample_skeleton(), 1);
        assert_eq!(vis.visible_node_count(), 3);

        let ends: Vec<(Vec3, Vec3)> = vis.visible_edges().map(|e| (e.start, e.end)).collect();
        assert_eq!(
            ends,
            vec![
                (Vec3::new(0.0, 2.0, 0.0), Vec3::new(-2.0, 0.5, 0.0)),
                (Vec3::new(0.0, 2.0, 0.0), Vec3::new(2.0, 0.5, 0.0)),
            ]
        );
    }

    #[test]
    fn test_stage_two_sample() {
        let vis = resolve(&sample_skeleton(), 2);
        assert_eq!(vis.visible_node_count(), 7);
        assert_eq!(vis.visible_edges().count(), 6);

        // node -3 hangs off -2, node 1 hangs off 2
        let left = vis.edge_to(SlotId::new(2, 0)).unwrap();
        assert_eq!(left.from, SlotId::new(1, 0));
        assert_eq!(left.start.x, -2.0);
        assert_eq!(left.end.x, -3.0);
        assert!(left.visible);

        let inner = vis.edge_to(SlotId::new(2, 2)).unwrap();
        assert_eq!(inner.from, SlotId::new(1, 1));
        assert_eq!(inner.start.x, 2.0);
        assert_eq!(inner.end.x, 1.0);

        assert!(vis.visible_edges().all(|e| e.to.level <= 2));
    }

    #[test]
    fn test_stage_three_reveals_everything() {
        let vis = resolve(&sample_skeleton(), 3);
        assert_eq!(vis.visible_node_count(), 12);
        assert_eq!(vis.visible_edges().count(), 11);
    }

    #[test]
    fn test_resolve_is_referentially_stable() {
        let skeleton = sample_skeleton();
        assert_eq!(resolve(&skeleton, 2), resolve(&skeleton, 2));
        assert_ne!(resolve(&skeleton, 1), resolve(&skeleton, 2));
    }

    #[test]
    fn test_edge_endpoints_come_from_skeleton() {
        let skeleton = sample_skeleton();
        let vis = resolve(&skeleton, 3);
        for edge in &vis.edges {
            assert_eq!(edge.start, skeleton.slot(edge.from).unwrap().position);
            assert_eq!(edge.end, skeleton.slot(edge.to).unwrap().position);
        }
    }
}
