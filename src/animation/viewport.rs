//! The zoom-following camera.
//!
//! For every animation frame the camera window has to keep the freshly drawn
//! tip near a fixed position inside the frame while the rest of the curve
//! scrolls past. The arithmetic below does that with three ingredients:
//!
//! - a minimum window size (20 % of the full span, floored at 1), so the view
//!   never zooms into a single point,
//! - an asymmetric x placement (60 % of the window behind the tip, 40 % ahead),
//!   so the viewer sees a bit of what comes next,
//! - clamping to the global bounds of the function, so the camera never drifts
//!   off the sampled data; a window that still collapses is expanded by ±1.
//!
//! A constant function gets a fixed band of ±1 around its value.

use crate::animation::sampler::SampledCurve;

/// fraction of the full span used as the minimum window size
const MIN_WINDOW_FRACTION: f64 = 0.2;

/// the running y-span is padded by this factor before becoming the window height
const Y_SPAN_PADDING: f64 = 1.2;

/// spans below this are treated as degenerate
const DEGENERATE_SPAN: f64 = 1e-6;

/// Camera window for one frame: the x- and y-limits the renderer applies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraWindow {
    pub x_left: f64,
    pub x_right: f64,
    pub y_lower: f64,
    pub y_upper: f64,
}

impl CameraWindow {
    pub fn width(&self) -> f64 {
        self.x_right - self.x_left
    }

    pub fn height(&self) -> f64 {
        self.y_upper - self.y_lower
    }
}

/// Plans the camera window for each frame of the animation.
///
/// Pure arithmetic over the sampled curve; owns no rendering state, so it can
/// be unit-tested frame by frame.
pub struct ViewportPlanner<'a> {
    curve: &'a SampledCurve,
    min_x_window: f64,
    min_y_window: f64,
}

impl<'a> ViewportPlanner<'a> {
    pub fn new(curve: &'a SampledCurve) -> Self {
        let x_span = curve.x_max - curve.x_min;
        let min_x_window = if x_span > 0.0 {
            x_span * MIN_WINDOW_FRACTION
        } else {
            1.0
        };
        let y_span = curve.y_span();
        let mut min_y_window = if y_span > 0.0 {
            y_span * MIN_WINDOW_FRACTION
        } else {
            1.0
        };
        if min_y_window < DEGENERATE_SPAN {
            min_y_window = 1.0;
        }
        ViewportPlanner {
            curve,
            min_x_window,
            min_y_window,
        }
    }

    /// Window for frame number `frame` (1-based), where the first `frame`
    /// samples are visible and the tip is the latest of them.
    pub fn window_for(&self, frame: usize) -> CameraWindow {
        let curve = self.curve;
        let (tip_x, raw_tip_y) = curve.tip(frame);
        // anchor on the last finite sample when the tip sits on a pole
        let tip_y = if raw_tip_y.is_finite() {
            raw_tip_y
        } else {
            curve.finite_tip_y(frame).unwrap_or(0.0)
        };

        // x window: fixed width, 60 % behind the tip, 40 % ahead, clamped to the range
        let x_window = self
            .min_x_window
            .max((curve.x_max - curve.x_min) * MIN_WINDOW_FRACTION);
        let mut x_left = tip_x - x_window * 0.6;
        let mut x_right = tip_x + x_window * 0.4;
        if x_left < curve.x_min {
            x_left = curve.x_min;
            x_right = curve.x_min + x_window;
        }
        if x_right > curve.x_max {
            x_right = curve.x_max;
            x_left = curve.x_max - x_window;
        }

        // y window: follows the running span of what has been drawn so far
        let (y_lower, y_upper) = if let Some(constant_y) = curve.constant_y {
            (constant_y - 1.0, constant_y + 1.0)
        } else {
            let running_span = curve
                .prefix_extrema(frame)
                .map(|(lo, hi)| hi - lo)
                .unwrap_or(0.0);
            let mut y_window = self.min_y_window.max(running_span * Y_SPAN_PADDING);
            if y_window < DEGENERATE_SPAN {
                y_window = 1.0;
            }
            let mut y_lower = tip_y - y_window * 0.5;
            let mut y_upper = tip_y + y_window * 0.5;
            if y_lower < curve.y_min {
                y_lower = curve.y_min;
                y_upper = curve.y_min + y_window;
            }
            if y_upper > curve.y_max {
                y_upper = curve.y_max;
                y_lower = curve.y_max - y_window;
            }
            if y_lower == y_upper {
                y_lower -= 1.0;
                y_upper += 1.0;
            }
            (y_lower, y_upper)
        };

        CameraWindow {
            x_left,
            x_right,
            y_lower,
            y_upper,
        }
    }

    /// Whole-curve window, used for the blank opening frame and for static
    /// snapshots: the full x-range and the global y-bounds with 5 % padding.
    pub fn full_window(&self) -> CameraWindow {
        let curve = self.curve;
        let (y_lower, y_upper) = if let Some(constant_y) = curve.constant_y {
            (constant_y - 1.0, constant_y + 1.0)
        } else {
            let span = curve.y_span();
            if span > 0.0 {
                (curve.y_min - span * 0.05, curve.y_max + span * 0.05)
            } else {
                (curve.y_min - 1.0, curve.y_max + 1.0)
            }
        };
        CameraWindow {
            x_left: curve.x_min,
            x_right: curve.x_max,
            y_lower,
            y_upper,
        }
    }
}
