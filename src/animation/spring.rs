//! Damped spring used to animate node scale
//!
//! Integrated with semi-implicit Euler in fixed 1 ms sub-steps, which keeps
//! the result independent of the display frame rate.

use serde::{Deserialize, Serialize};
use crate::error::{RevealError, RevealResult};

/// Integration sub-step in seconds
pub const STEP: f32 = 0.001;
/// Longest frame delta accepted by a single update (e.g. after a background tab)
pub const MAX_FRAME_DT: f32 = 0.25;
/// Distance from target below which a slow spring is snapped to rest
pub const REST_DISTANCE: f32 = 1e-4;
/// Speed below which a spring near its target counts as at rest
pub const REST_VELOCITY: f32 = 1e-3;

/// Spring constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub tension: f32,
    pub friction: f32,
    pub mass: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            tension: 200.0,
            friction: 10.0,
            mass: 1.0,
        }
    }
}

impl SpringConfig {
    pub fn new(tension: f32, friction: f32) -> RevealResult<Self> {
        let config = Self {
            tension,
            friction,
            ..Default::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject constants that make the integrator diverge
    pub fn validate(&self) -> RevealResult<()> {
        for (name, value) in [("tension", self.tension), ("friction", self.friction), ("mass", self.mass)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(RevealError::invalid(format!(
                    "spring {} must be positive and finite, got {}",
                    name, value
                )));
            }
        }

        // Semi-implicit Euler is stable while omega * h stays well under 2
        let omega = (self.tension / self.mass).sqrt();
        if omega * STEP >= 1.0 {
            return Err(RevealError::invalid(format!(
                "spring too stiff for a {} s step (tension {}, mass {})",
                STEP, self.tension, self.mass
            )));
        }

        // The friction term alone flips the velocity sign once c/m * h reaches 1
        if self.friction / self.mass * STEP >= 1.0 {
            return Err(RevealError::invalid(format!(
                "spring friction too high for a {} s step (friction {}, mass {})",
                STEP, self.friction, self.mass
            )));
        }

        Ok(())
    }

    /// friction / (2 * sqrt(tension * mass)); below 1 the spring overshoots
    pub fn damping_ratio(&self) -> f32 {
        self.friction / (2.0 * (self.tension * self.mass).sqrt())
    }
}

/// State of one spring-driven scalar, clamped to stay non-negative
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub value: f32,
    pub velocity: f32,
    pub target: f32,
}

impl Spring {
    /// A spring resting at `value`
    pub fn at_rest(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
        }
    }

    /// Change the goal without touching the current value or velocity
    pub fn retarget(&mut self, target: f32) {
        self.target = target;
    }

    pub fn is_at_rest(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Advance by `dt` seconds. Non-finite or non-positive deltas are ignored.
    pub fn advance(&mut self, config: &SpringConfig, dt: f32) {
        if self.is_at_rest() || !dt.is_finite() || dt <= 0.0 {
            return;
        }

        let dt = dt.min(MAX_FRAME_DT);
        let steps = (dt / STEP).ceil().max(1.0) as usize;
        let h = dt / steps as f32;

        for _ in 0..steps {
            let displacement = self.value - self.target;
            let force = -config.tension * displacement - config.friction * self.velocity;
            self.velocity += force / config.mass * h;
            self.value += self.velocity * h;

            if self.value < 0.0 {
                self.value = 0.0;
                self.velocity = self.velocity.max(0.0);
            }
        }

        if (self.value - self.target).abs() < REST_DISTANCE && self.velocity.abs() < REST_VELOCITY {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }
}
