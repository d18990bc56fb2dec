//! Scroll progress → smoothed gradient offsets.

use std::time::Duration;

use super::geometry::GradientStops;
use super::mapping::StopMapping;
use super::spring::{Spring, SpringConfig};

/// Raw progress feeding three independently smoothed stop offsets.
#[derive(Clone, Debug, PartialEq)]
pub struct BeamPipeline {
    progress: f64,
    mappings: [StopMapping; 3],
    springs: [Spring; 3],
}

impl BeamPipeline {
    /// Pipeline at rest on progress 0.
    pub fn new(config: SpringConfig) -> Self {
        Self::with_mappings(config, StopMapping::BEAM)
    }

    pub fn with_mappings(config: SpringConfig, mappings: [StopMapping; 3]) -> Self {
        let springs = mappings.map(|m| Spring::new(config, m.map(0.0)));
        Self {
            progress: 0.0,
            mappings,
            springs,
        }
    }

    /// Replace the filter state of one stop (0 = start, 1 = mid, 2 = end).
    pub fn with_spring(mut self, stop: usize, spring: Spring) -> Self {
        if let Some(slot) = self.springs.get_mut(stop) {
            *slot = spring;
        }
        self
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn springs(&self) -> &[Spring; 3] {
        &self.springs
    }

    /// New raw scroll progress; retargets all springs.
    pub fn set_progress(&mut self, progress: f64) {
        self.progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        for (spring, mapping) in self.springs.iter_mut().zip(self.mappings) {
            spring.set_target(mapping.map(self.progress));
        }
    }

    /// Unsmoothed offsets for the current progress.
    pub fn targets(&self) -> [f64; 3] {
        self.mappings.map(|m| m.map(self.progress))
    }

    /// Smoothed offsets, possibly outside `[0, 1]`.
    pub fn offsets(&self) -> [f64; 3] {
        [
            self.springs[0].position(),
            self.springs[1].position(),
            self.springs[2].position(),
        ]
    }

    /// Offsets normalized for rendering.
    pub fn stops(&self) -> GradientStops {
        GradientStops::from_offsets(self.offsets())
    }

    pub fn is_settled(&self) -> bool {
        self.springs.iter().all(Spring::is_settled)
    }

    /// Advance every spring by one frame.
    pub fn tick(&mut self, delta: Duration) -> [f64; 3] {
        for spring in &mut self.springs {
            spring.tick(delta);
        }
        self.offsets()
    }
}

impl Default for BeamPipeline {
    fn default() -> Self {
        Self::new(SpringConfig::default())
    }
}
