//! Guide path geometry and gradient stop normalization.

/// Width of the beam's SVG viewport.
pub const BEAM_WIDTH: f64 = 20.0;

/// Latest measured height of the tracked content.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContentHeight {
    current: f64,
}

impl ContentHeight {
    pub fn get(&self) -> f64 {
        self.current
    }

    /// Record a measurement. Returns `true` when the geometry must be rebuilt.
    pub fn observe(&mut self, height: f64) -> bool {
        let height = sanitize(height);
        if height == self.current {
            return false;
        }
        tracing::trace!(from = self.current, to = height, "beam content resized");
        self.current = height;
        true
    }

    pub fn geometry(&self) -> BeamGeometry {
        BeamGeometry::new(self.current)
    }
}

fn sanitize(height: f64) -> f64 {
    if height.is_finite() && height > 0.0 {
        height
    } else {
        0.0
    }
}

/// SVG geometry of the guide path for a given content height.
///
/// The path drops from the top, kinks right, runs down to 80% of the height,
/// kinks back left and ends at the bottom. A zero height gives a stub.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeamGeometry {
    height: f64,
}

impl BeamGeometry {
    pub fn new(height: f64) -> Self {
        Self {
            height: sanitize(height),
        }
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Where the lower kink starts.
    pub fn kink_y(&self) -> f64 {
        self.height * 0.8
    }

    pub fn is_degenerate(&self) -> bool {
        self.height == 0.0
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", BEAM_WIDTH, self.height)
    }

    pub fn path(&self) -> String {
        format!(
            "M 1 0V -36 l 18 24 V {} l -18 24V {}",
            self.kink_y(),
            self.height
        )
    }

    /// `y2` of the user-space linear gradient.
    pub fn gradient_y2(&self) -> f64 {
        self.height
    }
}

/// Three gradient stop offsets as SVG renders them.
///
/// Each offset is clamped to `[0, 1]`, and an offset smaller than an earlier
/// one is raised to it, matching SVG's stop normalization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStops {
    pub start: f64,
    pub mid: f64,
    pub end: f64,
}

impl GradientStops {
    pub fn from_offsets([start, mid, end]: [f64; 3]) -> Self {
        let start = clamp_unit(start);
        let mid = clamp_unit(mid).max(start);
        let end = clamp_unit(end).max(mid);
        Self { start, mid, end }
    }
}

fn clamp_unit(offset: f64) -> f64 {
    if offset.is_nan() {
        0.0
    } else {
        offset.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_height_is_a_stub() {
        let geometry = BeamGeometry::new(0.0);
        assert!(geometry.is_degenerate());
        assert_eq!(geometry.view_box(), "0 0 20 0");
        assert_eq!(geometry.path(), "M 1 0V -36 l 18 24 V 0 l -18 24V 0");
    }

    #[test]
    fn invalid_heights_become_zero() {
        assert!(BeamGeometry::new(f64::NAN).is_degenerate());
        assert!(BeamGeometry::new(-10.0).is_degenerate());
    }

    #[test]
    fn path_scales_with_height() {
        let geometry = BeamGeometry::new(400.0);
        assert_eq!(geometry.path(), "M 1 0V -36 l 18 24 V 320 l -18 24V 400");
        assert_eq!(geometry.gradient_y2(), 400.0);
    }

    #[test]
    fn observe_reports_changes_only() {
        let mut height = ContentHeight::default();
        assert!(!height.observe(0.0));
        assert!(height.observe(400.0));
        assert!(!height.observe(400.0));
        assert!(height.observe(800.0));
        assert_eq!(height.geometry().height(), 800.0);
    }

    #[test]
    fn stops_are_clamped() {
        let stops = GradientStops::from_offsets([-0.2, 0.1, 0.3]);
        assert_eq!(stops.start, 0.0);
        assert_eq!(stops.mid, 0.1);
        assert_eq!(stops.end, 0.3);

        let stops = GradientStops::from_offsets([0.8, 1.0, 1.2]);
        assert_eq!(stops.end, 1.0);
    }

    #[test]
    fn stops_never_invert() {
        let stops = GradientStops::from_offsets([0.6, 0.4, 0.2]);
        assert_eq!(stops.mid, 0.6);
        assert_eq!(stops.end, 0.6);
    }
}
