//! Per-pass engine options.

/// Options for one layout pass.
///
/// ```
/// use flexframe::LayoutOptions;
///
/// let options = LayoutOptions::new().with_point_scale(2.0).with_pixel_rounding(true);
/// assert!(!options.preserve_origin);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    /// Add the computed root origin to the root's existing origin instead of
    /// starting from (0, 0).
    pub preserve_origin: bool,

    /// Points per unit of the output grid. Around-gaps are split on this
    /// grid, and frames are snapped to it when `round_to_pixels` is set.
    pub point_scale: f32,

    /// Snap every written frame to the `1 / point_scale` grid.
    pub round_to_pixels: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            preserve_origin: false,
            point_scale: 1.0,
            round_to_pixels: false,
        }
    }
}

impl LayoutOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_preserve_origin(mut self, preserve: bool) -> Self {
        self.preserve_origin = preserve;
        self
    }

    pub fn with_point_scale(mut self, scale: f32) -> Self {
        self.point_scale = scale;
        self
    }

    pub fn with_pixel_rounding(mut self, round: bool) -> Self {
        self.round_to_pixels = round;
        self
    }

    /// The point scale, falling back to 1.0 when unusable.
    pub(crate) fn scale(&self) -> f32 {
        if self.point_scale.is_finite() && self.point_scale > 0.0 {
            self.point_scale
        } else {
            1.0
        }
    }
}
