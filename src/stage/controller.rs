use tracing::debug;

/// Outcome of a stage command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageTransition {
    /// The stage moved
    Changed { from: usize, to: usize },
    /// Already at the bound in the requested direction; nothing changed
    AtBound,
}

impl StageTransition {
    pub fn changed(&self) -> bool {
        matches!(self, StageTransition::Changed { .. })
    }
}

/// Holds the current reveal stage, always within `[0, max_stage]`.
///
/// Requests past either bound are clamped rather than rejected so the UI
/// buttons can stay enabled.
#[derive(Debug, Clone)]
pub struct StageController {
    stage: usize,
    max_stage: usize,
}

impl StageController {
    /// Start at stage 0 (root only)
    pub fn new(max_stage: usize) -> Self {
        Self { stage: 0, max_stage }
    }

    /// Reveal one more level, clamped at `max_stage`
    pub fn increment(&mut self) -> StageTransition {
        let next = (self.stage + 1).min(self.max_stage);
        self.move_to(next)
    }

    /// Hide the deepest revealed level, clamped at 0
    pub fn decrement(&mut self) -> StageTransition {
        let next = self.stage.saturating_sub(1);
        self.move_to(next)
    }

    fn move_to(&mut self, next: usize) -> StageTransition {
        if next == self.stage {
            debug!(stage = self.stage, max_stage = self.max_stage, "stage already at bound");
            return StageTransition::AtBound;
        }
        let from = self.stage;
        self.stage = next;
        debug!(from, to = next, "stage changed");
        StageTransition::Changed { from, to: next }
    }

    pub fn current_stage(&self) -> usize {
        self.stage
    }

    pub fn max_stage(&self) -> usize {
        self.max_stage
    }

    pub fn can_increment(&self) -> bool {
        self.stage < self.max_stage
    }

    pub fn can_decrement(&self) -> bool {
        self.stage > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let controller = StageController::new(3);
        assert_eq!(controller.current_stage(), 0);
        assert_eq!(controller.max_stage(), 3);
    }

    #[test]
    fn test_increment_clamps_at_max() {
        let mut controller = StageController::new(3);
        for _ in 0..(3 + 5) {
            controller.increment();
        }
        assert_eq!(controller.current_stage(), 3);
    }

    #[test]
    fn test_decrement_clamps_at_zero() {
        let mut controller = StageController::new(3);
        for _ in 0..5 {
            controller.decrement();
        }
        assert_eq!(controller.current_stage(), 0);
    }

    #[test]
    fn test_transitions_report_change() {
        let mut controller = StageController::new(2);
        assert_eq!(controller.increment(), StageTransition::Changed { from: 0, to: 1 });
        assert_eq!(controller.increment(), StageTransition::Changed { from: 1, to: 2 });
        assert_eq!(controller.increment(), StageTransition::AtBound);
        assert_eq!(controller.decrement(), StageTransition::Changed { from: 2, to: 1 });
    }

    #[test]
    fn test_decrement_at_zero_is_bound() {
        let mut controller = StageController::new(2);
        let transition = controller.decrement();
        assert_eq!(transition, StageTransition::AtBound);
        assert!(!transition.changed());
    }

    #[test]
    fn test_single_level_tree_never_moves() {
        let mut controller = StageController::new(0);
        assert!(!controller.can_increment());
        assert!(!controller.can_decrement());
        assert_eq!(controller.increment(), StageTransition::AtBound);
        assert_eq!(controller.current_stage(), 0);
    }

    #[test]
    fn test_can_move_flags() {
        let mut controller = StageController::new(1);
        assert!(controller.can_increment());
        assert!(!controller.can_decrement());
        controller.increment();
        assert!(!controller.can_increment());
        assert!(controller.can_decrement());
    }
}
