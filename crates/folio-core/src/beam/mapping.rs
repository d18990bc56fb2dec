//! Affine maps from scroll progress to gradient stop offsets.

/// Maps progress `[0, 1]` linearly onto `[from, to]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StopMapping {
    pub from: f64,
    pub to: f64,
}

impl StopMapping {
    /// Transparent leading stop.
    pub const START: StopMapping = StopMapping::new(-0.2, 0.8);
    /// Opaque middle stop.
    pub const MID: StopMapping = StopMapping::new(0.1, 1.0);
    /// Transparent trailing stop.
    pub const END: StopMapping = StopMapping::new(0.3, 1.2);

    /// The three stops, leading to trailing.
    pub const BEAM: [StopMapping; 3] = [Self::START, Self::MID, Self::END];

    pub const fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    /// Output for `progress`, which is clamped to `[0, 1]` first.
    pub fn map(&self, progress: f64) -> f64 {
        let p = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        self.from + (self.to - self.from) * p
    }
}
