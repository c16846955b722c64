use crate::math::Vec3;
use crate::skeleton::SlotId;

/// One node box to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeInstance {
    pub id: SlotId,
    pub position: Vec3,
    pub scale: f32,
    /// Fully hidden: zero target and negligible scale, safe to skip
    pub hidden: bool,
}

/// One parent-child line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeSegment {
    pub start: Vec3,
    pub end: Vec3,
    pub visible: bool,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameData {
    pub nodes: Vec<NodeInstance>,
    pub edges: Vec<EdgeSegment>,
}

impl FrameData {
    /// Nodes worth drawing this frame
    pub fn drawable_nodes(&self) -> impl Iterator<Item = &NodeInstance> + '_ {
        self.nodes.iter().filter(|n| !n.hidden)
    }

    pub fn visible_edge_count(&self) -> usize {
        self.edges.iter().filter(|e| e.visible).count()
    }

    /// Line-list vertex data for visible edges: start(3) + end(3) per edge
    pub fn line_vertices(&self) -> Vec<f32> {
        self.edges
            .iter()
            .filter(|e| e.visible)
            .flat_map(|e| {
                let [sx, sy, sz] = e.start.to_array();
                let [ex, ey, ez] = e.end.to_array();
                [sx, sy, sz, ex, ey, ez]
            })
            .collect()
    }
}
