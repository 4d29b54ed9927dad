//! Numeric sampling of a symbolic expression over an x-range.
//!
//! The equation is lambdified once and evaluated on an evenly spaced grid
//! (500 points by default). Poles and domain violations show up as NaN or
//! infinities; such samples are kept in place so the renderer can break the
//! line there, but they are excluded from the bounds the camera works with.

use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::utils::linspace;
use log::debug;

/// default number of points between x_min and x_max
pub const DEFAULT_SAMPLES: usize = 500;

/// relative tolerance of the constant-function check
const CONSTANT_TOL: f64 = 1e-9;

/// A function sampled on an evenly spaced grid, together with the global
/// bounds the zoom-following camera clamps to.
#[derive(Debug, Clone)]
pub struct SampledCurve {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub x_min: f64,
    pub x_max: f64,
    /// smallest finite sample
    pub y_min: f64,
    /// largest finite sample
    pub y_max: f64,
    /// set when every finite sample agrees with the first one
    pub constant_y: Option<f64>,
}

impl SampledCurve {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn is_constant(&self) -> bool {
        self.constant_y.is_some()
    }

    /// total span of the finite samples
    pub fn y_span(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// the animated tip after `frame` samples have been revealed (1-based)
    pub fn tip(&self, frame: usize) -> (f64, f64) {
        let idx = frame.clamp(1, self.len()) - 1;
        (self.x[idx], self.y[idx])
    }

    /// min/max over the finite part of the first `frame` samples
    pub fn prefix_extrema(&self, frame: usize) -> Option<(f64, f64)> {
        let k = frame.clamp(1, self.len());
        let mut extrema: Option<(f64, f64)> = None;
        for &y in self.y[..k].iter().filter(|y| y.is_finite()) {
            extrema = match extrema {
                None => Some((y, y)),
                Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
            };
        }
        extrema
    }

    /// the last finite sample at or before the tip of `frame`; used as the
    /// vertical camera anchor when the tip itself sits on a pole
    pub fn finite_tip_y(&self, frame: usize) -> Option<f64> {
        let k = frame.clamp(1, self.len());
        self.y[..k].iter().rev().find(|y| y.is_finite()).copied()
    }
}

/// Samples the expression on `n` evenly spaced points over [x_min, x_max].
///
/// A constant expression yields a flat curve (the scalar result is broadcast
/// over the whole grid). Returns an error when no sample is finite, since
/// neither the camera nor the renderer can do anything with such a curve.
pub fn sample_curve(expr: &Expr, x_min: f64, x_max: f64, n: usize) -> Result<SampledCurve, String> {
    if !x_min.is_finite() || !x_max.is_finite() {
        return Err("x-range must be finite".to_string());
    }
    if x_max <= x_min {
        return Err("x max must be greater than x min".to_string());
    }
    if n < 2 {
        return Err("at least two sample points are required".to_string());
    }

    let func = expr.lambdify1D();
    let x = linspace(x_min, x_max, n);
    let y: Vec<f64> = x.iter().map(|&xi| func(xi)).collect();

    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    let mut n_finite = 0usize;
    for &yi in y.iter().filter(|y| y.is_finite()) {
        y_min = y_min.min(yi);
        y_max = y_max.max(yi);
        n_finite += 1;
    }
    if n_finite == 0 {
        return Err(format!(
            "the function has no finite values on [{}, {}]",
            x_min, x_max
        ));
    }

    let first = y
        .iter()
        .copied()
        .find(|y| y.is_finite())
        .unwrap_or_default();
    let tol = CONSTANT_TOL * (1.0 + first.abs());
    let is_constant = n_finite == y.len() && y.iter().all(|&yi| (yi - first).abs() <= tol);

    debug!("sampled y = {} on [{}, {}]", expr, x_min, x_max);
    debug!("first 5 x values: {:?}", &x[..x.len().min(5)]);
    debug!("first 5 y values: {:?}", &y[..y.len().min(5)]);
    if n_finite < y.len() {
        debug!("{} of {} samples are non-finite", y.len() - n_finite, y.len());
    }

    Ok(SampledCurve {
        x,
        y,
        x_min,
        x_max,
        y_min,
        y_max,
        constant_y: if is_constant { Some(first) } else { None },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn curve_of(input: &str, x_min: f64, x_max: f64, n: usize) -> SampledCurve {
        let expr = Expr::parse_expression(input).unwrap();
        sample_curve(&expr, x_min, x_max, n).unwrap()
    }

    #[test]
    fn test_sample_linear_function() {
        let curve = curve_of("x", 0.0, 10.0, 101);
        assert_eq!(curve.len(), 101);
        assert_relative_eq!(curve.y[0], 0.0);
        assert_relative_eq!(curve.y[100], 10.0);
        assert_relative_eq!(curve.y_min, 0.0);
        assert_relative_eq!(curve.y_max, 10.0);
        assert!(!curve.is_constant());
    }

    #[test]
    fn test_sample_constant_function() {
        let curve = curve_of("2 + 2", -1.0, 1.0, 50);
        assert!(curve.is_constant());
        assert_relative_eq!(curve.constant_y.unwrap(), 4.0);
        assert_relative_eq!(curve.y_span(), 0.0);
    }

    #[test]
    fn test_sample_skips_non_finite_values_in_bounds() {
        // sqrt is NaN left of zero; bounds must come from the right half only
        let curve = curve_of("sqrt(x)", -1.0, 1.0, 201);
        assert!(curve.y[0].is_nan());
        assert_relative_eq!(curve.y_min, 0.0);
        assert_relative_eq!(curve.y_max, 1.0, max_relative = 1e-9);
        assert!(!curve.is_constant());
    }

    #[test]
    fn test_sample_rejects_fully_undefined_function() {
        let expr = Expr::parse_expression("sqrt(x)").unwrap();
        assert!(sample_curve(&expr, -2.0, -1.0, 50).is_err());
    }

    #[test]
    fn test_sample_rejects_bad_range() {
        let expr = Expr::parse_expression("x").unwrap();
        assert!(sample_curve(&expr, 1.0, 1.0, 50).is_err());
        assert!(sample_curve(&expr, 2.0, 1.0, 50).is_err());
        assert!(sample_curve(&expr, 0.0, 1.0, 1).is_err());
        assert!(sample_curve(&expr, f64::NAN, 1.0, 50).is_err());
    }

    #[test]
    fn test_tip_and_prefix_extrema() {
        let curve = curve_of("x", 0.0, 10.0, 101);
        let (tip_x, tip_y) = curve.tip(51);
        assert_relative_eq!(tip_x, 5.0);
        assert_relative_eq!(tip_y, 5.0);
        let (lo, hi) = curve.prefix_extrema(51).unwrap();
        assert_relative_eq!(lo, 0.0);
        assert_relative_eq!(hi, 5.0);
    }

    #[test]
    fn test_finite_tip_anchor_over_a_pole() {
        // 1/x blows up near zero; the anchor must fall back to a finite sample
        let curve = curve_of("1/x", -1.0, 1.0, 201);
        for frame in 1..=curve.len() {
            if curve.y[frame - 1].is_finite() {
                assert_eq!(curve.finite_tip_y(frame), Some(curve.y[frame - 1]));
            }
        }
    }
}
