use crate::animation::{NodeAnimator, SpringConfig};
use crate::config::SceneConfig;
use crate::error::RevealResult;
use crate::skeleton::TreeSkeleton;
use crate::stage::{StageController, StageTransition};
use crate::visibility::{resolve, Visibility};
use super::frame::{EdgeSegment, FrameData, NodeInstance};

/// The staged-reveal core: skeleton, stage, resolved visibility, and node animation
#[derive(Debug, Clone)]
pub struct TreeScene {
    skeleton: TreeSkeleton,
    controller: StageController,
    /// Resolution for the current stage; refreshed only when the stage moves
    visibility: Visibility,
    animator: NodeAnimator,
}

impl TreeScene {
    pub fn new(config: &SceneConfig) -> RevealResult<Self> {
        let skeleton = config.tree.build_skeleton()?;
        Self::with_skeleton(skeleton, config.spring)
    }

    pub fn with_skeleton(skeleton: TreeSkeleton, spring: SpringConfig) -> RevealResult<Self> {
        let controller = StageController::new(skeleton.max_stage());
        let visibility = resolve(&skeleton, controller.current_stage());
        let animator = NodeAnimator::new(spring, &visibility)?;

        Ok(Self {
            skeleton,
            controller,
            visibility,
            animator,
        })
    }

    /// "Increment Stage" command
    pub fn increment_stage(&mut self) -> StageTransition {
        let transition = self.controller.increment();
        self.refresh();
        transition
    }

    /// "Decrement Stage" command
    pub fn decrement_stage(&mut self) -> StageTransition {
        let transition = self.controller.decrement();
        self.refresh();
        transition
    }

    fn refresh(&mut self) {
        let stage = self.controller.current_stage();
        if self.visibility.stage != stage {
            self.visibility = resolve(&self.skeleton, stage);
            self.animator.retarget(&self.visibility);
        }
    }

    /// Advance node animations by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        self.animator.update(dt);
    }

    /// Snapshot of node scales and edge lines for the renderer
    pub fn frame(&self) -> FrameData {
        let nodes = self
            .skeleton
            .iter()
            .map(|slot| NodeInstance {
                id: slot.id,
                position: slot.position,
                scale: self.animator.scale(slot.id),
                hidden: self.animator.is_hidden(slot.id),
            })
            .collect();

        let edges = self
            .visibility
            .edges
            .iter()
            .map(|edge| EdgeSegment {
                start: edge.start,
                end: edge.end,
                visible: edge.visible,
            })
            .collect();

        FrameData { nodes, edges }
    }

    pub fn current_stage(&self) -> usize {
        self.controller.current_stage()
    }

    pub fn max_stage(&self) -> usize {
        self.controller.max_stage()
    }

    pub fn can_increment(&self) -> bool {
        self.controller.can_increment()
    }

    pub fn can_decrement(&self) -> bool {
        self.controller.can_decrement()
    }

    /// True once every node animation has come to rest
    pub fn is_settled(&self) -> bool {
        self.animator.is_settled()
    }

    pub fn skeleton(&self) -> &TreeSkeleton {
        &self.skeleton
    }

    pub fn visibility(&self) -> &Visibility {
        &self.visibility
    }

    pub fn animator(&self) -> &NodeAnimator {
        &self.animator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skeleton::SlotId;
    use crate::testing::init_test_logging;

    const FRAME: f32 = 1.0 / 60.0;

    fn scene() -> TreeScene {
        init_test_logging();
        TreeScene::new(&SceneConfig::default()).unwrap()
    }

    fn run(scene: &mut TreeScene, frames: usize) {
        for _ in 0..frames {
            scene.update(FRAME);
        }
    }

    #[test]
    fn test_starts_with_root_only() {
        let scene = scene();
        assert_eq!(scene.current_stage(), 0);
        assert_eq!(scene.max_stage(), 3);

        let frame = scene.frame();
        assert_eq!(frame.nodes.len(), 12);
        assert_eq!(frame.drawable_nodes().count(), 1);
        assert_eq!(frame.visible_edge_count(), 0);
        assert!(scene.is_settled());
    }

    #[test]
    fn test_increment_reveals_next_level() {
        let mut scene = scene();
        assert!(scene.increment_stage().changed());
        assert_eq!(scene.visibility().stage, 1);

        // Edges switch on immediately; nodes grow in over time
        let frame = scene.frame();
        assert_eq!(frame.visible_edge_count(), 2);
        let left = frame.nodes.iter().find(|n| n.id == SlotId::new(1, 0)).unwrap();
        assert_eq!(left.scale, 0.0);
        assert!(!left.hidden);

        run(&mut scene, 120);
        let frame = scene.frame();
        let left = frame.nodes.iter().find(|n| n.id == SlotId::new(1, 0)).unwrap();
        assert!((left.scale - 1.0).abs() < 1e-3);
        assert_eq!(frame.drawable_nodes().count(), 3);
    }

    #[test]
    fn test_sample_stage_two() {
        let mut scene = scene();
        scene.increment_stage();
        scene.increment_stage();

        let frame = scene.frame();
        assert_eq!(frame.visible_edge_count(), 6);
        assert_eq!(frame.drawable_nodes().count(), 7);
    }

    #[test]
    fn test_clamped_commands() {
        let mut scene = scene();
        for _ in 0..(scene.max_stage() + 5) {
            scene.increment_stage();
        }
        assert_eq!(scene.current_stage(), 3);
        assert!(!scene.can_increment());
        assert_eq!(scene.increment_stage(), StageTransition::AtBound);

        for _ in 0..10 {
            scene.decrement_stage();
        }
        assert_eq!(scene.current_stage(), 0);
        assert!(!scene.can_decrement());
    }

    #[test]
    fn test_decrement_mid_flight_reverses() {
        let mut scene = scene();
        scene.increment_stage();
        run(&mut scene, 6);
        let id = SlotId::new(1, 1);
        let before = scene.animator().scale(id);
        assert!(before > 0.0);

        scene.decrement_stage();
        assert_eq!(scene.frame().visible_edge_count(), 0);
        assert_eq!(scene.animator().scale(id), before);

        run(&mut scene, 180);
        assert!(scene.animator().is_hidden(id));
        assert_eq!(scene.frame().drawable_nodes().count(), 1);
        assert!(scene.is_settled());
    }

    #[test]
    fn test_bound_command_keeps_resolution() {
        let mut scene = scene();
        let before = scene.visibility().clone();
        scene.decrement_stage();
        assert_eq!(scene.visibility(), &before);
        assert!(scene.is_settled());
    }

    #[test]
    fn test_edges_never_move() {
        let mut scene = scene();
        scene.increment_stage();
        let first = scene.frame().edges;
        run(&mut scene, 10);
        assert_eq!(scene.frame().edges, first);
    }
}
