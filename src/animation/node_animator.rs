//! Per-node scale animation
//!
//! Every slot owns a spring keyed by its `SlotId`. Stage changes only move
//! the targets, so an in-flight hide can turn into a show without a jump.

use std::collections::HashMap;
use tracing::trace;
use super::spring::{Spring, SpringConfig};
use crate::error::RevealResult;
use crate::skeleton::SlotId;
use crate::visibility::Visibility;

/// Scale below which a node with a zero target is treated as fully hidden
pub const HIDDEN_EPSILON: f32 = 1e-3;

/// Target and animated scale of one node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeVisualState {
    /// 1.0 when the node's level is revealed, else 0.0
    pub target_scale: f32,
    pub current_scale: f32,
}

impl NodeVisualState {
    pub fn is_hidden(&self) -> bool {
        self.target_scale == 0.0 && self.current_scale < HIDDEN_EPSILON
    }
}

/// Spring-driven scale for every node of the tree
#[derive(Debug, Clone)]
pub struct NodeAnimator {
    config: SpringConfig,
    springs: HashMap<SlotId, Spring>,
    settled: bool,
}

fn target_for(visible: bool) -> f32 {
    if visible {
        1.0
    } else {
        0.0
    }
}

impl NodeAnimator {
    /// Create springs resting at the initial visibility, so the first frame
    /// shows the starting stage without animating into it.
    pub fn new(config: SpringConfig, initial: &Visibility) -> RevealResult<Self> {
        config.validate()?;

        let springs = initial
            .node_visible
            .iter()
            .map(|(&id, &visible)| (id, Spring::at_rest(target_for(visible))))
            .collect();

        Ok(Self {
            config,
            springs,
            settled: true,
        })
    }

    /// Point each node at its new target. Current scale and velocity carry
    /// over, which is what lets a reversal stay continuous.
    ///
    /// Returns the number of nodes whose target changed.
    pub fn retarget(&mut self, visibility: &Visibility) -> usize {
        let mut changed = 0;
        for (id, &visible) in &visibility.node_visible {
            let target = target_for(visible);
            let spring = self
                .springs
                .entry(*id)
                .or_insert_with(|| Spring::at_rest(0.0));
            if spring.target != target {
                spring.retarget(target);
                changed += 1;
            }
        }
        if changed > 0 {
            self.settled = false;
        }
        changed
    }

    /// Advance every spring by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        if self.settled {
            return;
        }

        let config = self.config;
        let mut all_at_rest = true;
        for spring in self.springs.values_mut() {
            spring.advance(&config, dt);
            all_at_rest &= spring.is_at_rest();
        }

        if all_at_rest {
            trace!(nodes = self.springs.len(), "node animations settled");
            self.settled = true;
        }
    }

    /// True when no spring is moving
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Current scale of a node (0.0 for unknown slots)
    pub fn scale(&self, id: SlotId) -> f32 {
        self.springs.get(&id).map(|s| s.value).unwrap_or(0.0)
    }

    pub fn state(&self, id: SlotId) -> Option<NodeVisualState> {
        self.springs.get(&id).map(|s| NodeVisualState {
            target_scale: s.target,
            current_scale: s.value,
        })
    }

    /// Whether the node can be skipped when drawing
    pub fn is_hidden(&self, id: SlotId) -> bool {
        self.state(id).map(|s| s.is_hidden()).unwrap_or(true)
    }
}
