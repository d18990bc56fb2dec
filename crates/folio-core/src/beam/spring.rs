//! Damped spring filter used to smooth gradient offsets.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

/// Largest integration step. Longer frames are split into substeps.
const MAX_STEP: f64 = 1.0 / 240.0;

/// Longest delta a single tick integrates. Anything longer is cut to this,
/// which bounds the substep count.
pub const MAX_TICK: Duration = Duration::from_secs(1);

/// Spring parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    /// Spring stiffness (higher = faster)
    pub stiffness: f64,
    /// Damping coefficient
    pub damping: f64,
    pub mass: f64,
    /// Distance from target under which the spring may come to rest
    pub rest_delta: f64,
    /// Speed under which the spring may come to rest
    pub rest_speed: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 50.0,
            damping: 20.0,
            mass: 1.0,
            rest_delta: 0.01,
            rest_speed: 0.01,
        }
    }
}

impl SpringConfig {
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("stiffness", self.stiffness),
            ("damping", self.damping),
            ("mass", self.mass),
            ("rest_delta", self.rest_delta),
            ("rest_speed", self.rest_speed),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(FolioError::InvalidSpring(format!("{name} must be finite")));
            }
        }
        if self.stiffness <= 0.0 {
            return Err(FolioError::InvalidSpring("stiffness must be positive".into()));
        }
        if self.mass <= 0.0 {
            return Err(FolioError::InvalidSpring("mass must be positive".into()));
        }
        if self.damping < 0.0 || self.rest_delta < 0.0 || self.rest_speed < 0.0 {
            return Err(FolioError::InvalidSpring(
                "damping and rest thresholds must not be negative".into(),
            ));
        }
        Ok(())
    }

    /// `damping / (2·√(stiffness·mass))`; 1.0 is critical damping.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// One smoothed scalar: position and velocity chasing a target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    target: f64,
    position: f64,
    velocity: f64,
}

impl Spring {
    /// Spring at rest on `initial`.
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            target: initial,
            position: initial,
            velocity: 0.0,
        }
    }

    /// Spring with explicit filter state.
    pub fn with_state(config: SpringConfig, position: f64, velocity: f64, target: f64) -> Self {
        Self {
            config,
            target,
            position,
            velocity,
        }
    }

    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Jump to `value` and stop.
    pub fn snap_to(&mut self, value: f64) {
        self.target = value;
        self.position = value;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        self.position == self.target && self.velocity == 0.0
    }

    /// Advance by `delta` (at most [`MAX_TICK`]) and return the new position.
    pub fn tick(&mut self, delta: Duration) -> f64 {
        if self.is_settled() {
            return self.position;
        }

        let total = delta.min(MAX_TICK).as_secs_f64();
        let steps = (total / MAX_STEP).ceil().max(1.0) as u32;
        let dt = total / f64::from(steps);
        let SpringConfig {
            stiffness,
            damping,
            mass,
            ..
        } = self.config;

        for _ in 0..steps {
            // F = -kx - cv
            let displacement = self.position - self.target;
            let acceleration = (-stiffness * displacement - damping * self.velocity) / mass;
            // Semi-implicit Euler
            self.velocity += acceleration * dt;
            self.position += self.velocity * dt;
        }

        if (self.position - self.target).abs() <= self.config.rest_delta
            && self.velocity.abs() <= self.config.rest_speed
        {
            self.position = self.target;
            self.velocity = 0.0;
        }

        self.position
    }
}
