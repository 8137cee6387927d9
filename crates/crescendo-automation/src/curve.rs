//! Control points and curve evaluation.
//!
//! A [`Curve`] is the immutable, sorted snapshot of a lane's points that
//! answers value-at-time queries. Lanes own mutation; the engine rebuilds the
//! curve after every point edit, so a curve in the cache is never stale.
//!
//! # Example
//!
//! ```
//! use crescendo_automation::{AutomationPoint, Curve, CurveKind};
//!
//! let curve = Curve::from_points(&[
//!     AutomationPoint::new(0.0, 0.0),
//!     AutomationPoint::new(10.0, 1.0),
//! ]);
//!
//! assert_eq!(curve.value_at(5.0), 0.5);
//! assert_eq!(curve.value_at(-100.0), 0.0); // clamps to the first point
//! assert_eq!(curve.value_at(1000.0), 1.0); // clamps to the last point
//! ```

use crescendo_core::Error;
use serde::{Deserialize, Serialize};

/// Interpolation law for the segment starting at a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CurveKind {
    /// Straight line between the two values.
    #[default]
    Linear,
    /// Geometric blend `v1 * (v2/v1)^t`. Demotes to [`CurveKind::Linear`]
    /// when the endpoints do not share a nonzero sign, where the law is
    /// undefined and would otherwise leak NaN into live parameters.
    Exponential,
    /// Cosine ease: `t' = (1 - cos(t·π)) / 2`, then a linear blend.
    Smooth,
}

impl CurveKind {
    /// Interpolate between two segment endpoints at normalized position `t`.
    ///
    /// `t` is clamped to `[0, 1]`. The result is always finite for finite
    /// inputs.
    #[inline]
    #[must_use]
    pub fn interpolate(self, v1: f32, v2: f32, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            CurveKind::Linear => v1 + (v2 - v1) * t,
            CurveKind::Exponential => {
                // The geometric blend needs a shared nonzero sign; anything
                // else (zero base, zero target, sign flip) demotes to linear.
                if v1 * v2 > 0.0 {
                    v1 * (v2 / v1).powf(t)
                } else {
                    v1 + (v2 - v1) * t
                }
            }
            CurveKind::Smooth => {
                // Eased in f64; rounding to f32 keeps the midpoint exact.
                let smooth_t =
                    ((1.0 - (f64::from(t) * std::f64::consts::PI).cos()) / 2.0) as f32;
                v1 + (v2 - v1) * smooth_t
            }
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            CurveKind::Linear => "Linear",
            CurveKind::Exponential => "Exponential",
            CurveKind::Smooth => "Smooth",
        }
    }
}

impl std::fmt::Display for CurveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single control point.
///
/// The `curve` field governs interpolation over the segment **starting** at
/// this point, up to the next point in the lane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AutomationPoint {
    /// Time position, non-negative.
    pub time: f64,
    pub value: f32,
    pub curve: CurveKind,
}

impl AutomationPoint {
    /// Point with a linear outgoing segment. Negative times clamp to zero.
    #[must_use]
    pub fn new(time: f64, value: f32) -> Self {
        Self::with_curve(time, value, CurveKind::Linear)
    }

    /// Point with an explicit outgoing curve. Negative times clamp to zero.
    #[must_use]
    pub fn with_curve(time: f64, value: f32, curve: CurveKind) -> Self {
        Self {
            time: time.max(0.0),
            value,
            curve,
        }
    }
}

/// Sorted, owned snapshot of a lane's points.
///
/// Evaluation is a pure function of `(points, time)`: identical inputs give
/// bit-identical outputs. Points with equal times keep insertion order (the
/// sort is stable) and the **last-inserted** point wins at and after the
/// shared timestamp.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Curve {
    points: Vec<AutomationPoint>,
}

impl Curve {
    /// Build a curve from a snapshot of points. The input is copied and
    /// stably sorted by time; the source order of equal-time points is kept.
    #[must_use]
    pub fn from_points(points: &[AutomationPoint]) -> Self {
        let mut points = points.to_vec();
        points.sort_by(|a, b| a.time.partial_cmp(&b.time).unwrap_or(std::cmp::Ordering::Equal));
        Self { points }
    }

    /// Two points fading from `0` to `1` over `duration`.
    #[must_use]
    pub fn fade_in(duration: f64, kind: CurveKind) -> Self {
        Self::ramp(duration, 0.0, 1.0, kind)
    }

    /// Two points fading from `1` to `0` over `duration`.
    #[must_use]
    pub fn fade_out(duration: f64, kind: CurveKind) -> Self {
        Self::ramp(duration, 1.0, 0.0, kind)
    }

    /// Two points ramping from `from` to `to` over `duration`.
    #[must_use]
    pub fn ramp(duration: f64, from: f32, to: f32, kind: CurveKind) -> Self {
        Self::from_points(&[
            AutomationPoint::with_curve(0.0, from, kind),
            AutomationPoint::new(duration, to),
        ])
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn points(&self) -> &[AutomationPoint] {
        &self.points
    }

    /// Evaluate the curve at `time`.
    ///
    /// - Empty curve: `0.0`.
    /// - Before the first point / after the last: the boundary point's value
    ///   (constant extrapolation, never beyond).
    /// - Inside a segment: interpolated with the law of the segment's left
    ///   point.
    #[must_use]
    pub fn value_at(&self, time: f64) -> f32 {
        let Some(first) = self.points.first() else {
            return 0.0;
        };

        if self.points.len() == 1 || time < first.time {
            return first.value;
        }

        // Safe: points is non-empty.
        let last = self.points[self.points.len() - 1];
        if time >= last.time {
            return last.value;
        }

        // Linear scan for the latest point with time <= query time; with
        // duplicate timestamps this anchors on the last-inserted point.
        // Point counts are tens per lane, so a scan beats the bookkeeping of
        // anything cleverer.
        let mut anchor = 0;
        for (i, p) in self.points.iter().enumerate() {
            if p.time <= time {
                anchor = i;
            } else {
                break;
            }
        }

        let p1 = self.points[anchor];
        let p2 = self.points[anchor + 1];

        // p2.time > time >= p1.time, so the span is strictly positive.
        let t = ((time - p1.time) / (p2.time - p1.time)) as f32;
        p1.curve.interpolate(p1.value, p2.value, t)
    }

    /// Evaluate with transport-loop wrapping: times at or past `loop_end`
    /// wrap back into `[loop_start, loop_end)`; times before the loop are
    /// read directly.
    pub fn value_at_looped(
        &self,
        time: f64,
        loop_start: f64,
        loop_end: f64,
    ) -> Result<f32, Error> {
        let loop_len = loop_end - loop_start;
        if loop_len <= 0.0 {
            return Err(Error::InvalidLoopRange {
                start: loop_start,
                end: loop_end,
            });
        }

        let effective = if time < loop_end {
            time
        } else {
            loop_start + ((time - loop_start) % loop_len)
        };

        Ok(self.value_at(effective))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn empty_curve_is_zero() {
        let curve = Curve::default();
        assert_eq!(curve.value_at(0.0), 0.0);
        assert_eq!(curve.value_at(123.4), 0.0);
    }

    #[test]
    fn single_point_is_constant() {
        let curve = Curve::from_points(&[AutomationPoint::new(5.0, 0.7)]);
        assert_eq!(curve.value_at(-100.0), 0.7);
        assert_eq!(curve.value_at(5.0), 0.7);
        assert_eq!(curve.value_at(1000.0), 0.7);
    }

    #[test]
    fn clamps_outside_the_defined_range() {
        let curve = Curve::from_points(&[
            AutomationPoint::new(2.0, 0.25),
            AutomationPoint::new(8.0, 0.75),
        ]);
        assert_eq!(curve.value_at(0.0), 0.25);
        assert_eq!(curve.value_at(9.0), 0.75);
    }

    #[test]
    fn linear_midpoint() {
        let curve = Curve::from_points(&[
            AutomationPoint::new(0.0, 0.0),
            AutomationPoint::new(10.0, 1.0),
        ]);
        assert_eq!(curve.value_at(5.0), 0.5);
    }

    #[test]
    fn smooth_midpoint_matches_linear() {
        // The cosine ease is symmetric, so the midpoint is exact.
        let curve = Curve::from_points(&[
            AutomationPoint::with_curve(0.0, 0.0, CurveKind::Smooth),
            AutomationPoint::new(10.0, 1.0),
        ]);
        assert_eq!(curve.value_at(5.0), 0.5);
    }

    #[test]
    fn smooth_eases_in_and_out() {
        let curve = Curve::from_points(&[
            AutomationPoint::with_curve(0.0, 0.0, CurveKind::Smooth),
            AutomationPoint::new(10.0, 1.0),
        ]);
        assert!(curve.value_at(2.5) < 0.25);
        assert!(curve.value_at(7.5) > 0.75);
    }

    #[test]
    fn exponential_follows_the_geometric_law() {
        let curve = Curve::from_points(&[
            AutomationPoint::with_curve(0.0, 1.0, CurveKind::Exponential),
            AutomationPoint::new(10.0, 4.0),
        ]);
        // 1 * (4/1)^0.5 = 2
        assert_relative_eq!(curve.value_at(5.0), 2.0, epsilon = 1e-5);
    }

    #[test]
    fn exponential_with_zero_base_demotes_to_linear() {
        let curve = Curve::from_points(&[
            AutomationPoint::with_curve(0.0, 0.0, CurveKind::Exponential),
            AutomationPoint::new(10.0, 1.0),
        ]);
        let mid = curve.value_at(5.0);
        assert!(mid.is_finite());
        assert_eq!(mid, 0.5);
    }

    #[test]
    fn exponential_with_sign_flip_stays_finite() {
        let curve = Curve::from_points(&[
            AutomationPoint::with_curve(0.0, -1.0, CurveKind::Exponential),
            AutomationPoint::new(10.0, 1.0),
        ]);
        for time in [0.0, 2.5, 5.0, 7.5, 10.0] {
            assert!(curve.value_at(time).is_finite());
        }
        assert_eq!(curve.value_at(5.0), 0.0);
    }

    #[test]
    fn segment_law_comes_from_the_left_point() {
        let curve = Curve::from_points(&[
            AutomationPoint::with_curve(0.0, 0.0, CurveKind::Smooth),
            AutomationPoint::with_curve(10.0, 1.0, CurveKind::Linear),
            AutomationPoint::new(20.0, 0.0),
        ]);
        // First segment eased, second linear.
        assert!(curve.value_at(2.5) < 0.25);
        assert_eq!(curve.value_at(15.0), 0.5);
    }

    #[test]
    fn duplicate_timestamp_last_inserted_wins() {
        let curve = Curve::from_points(&[
            AutomationPoint::new(0.0, 0.0),
            AutomationPoint::new(5.0, 0.2),
            AutomationPoint::new(5.0, 0.9),
            AutomationPoint::new(10.0, 1.0),
        ]);
        assert_eq!(curve.value_at(5.0), 0.9);
        // The later duplicate also anchors the outgoing segment.
        assert_relative_eq!(curve.value_at(7.5), 0.95);
    }

    #[test]
    fn negative_point_times_clamp_to_zero() {
        let p = AutomationPoint::new(-3.0, 0.5);
        assert_eq!(p.time, 0.0);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let curve = Curve::from_points(&[
            AutomationPoint::with_curve(0.0, 0.1, CurveKind::Smooth),
            AutomationPoint::with_curve(3.7, 0.9, CurveKind::Exponential),
            AutomationPoint::new(11.2, 0.4),
        ]);
        for time in [-1.0, 0.0, 1.3, 3.7, 9.9, 11.2, 50.0] {
            assert_eq!(curve.value_at(time).to_bits(), curve.value_at(time).to_bits());
        }
    }

    #[test]
    fn looped_evaluation_wraps() {
        // 0.0 at beat 0, 1.0 at beat 4, 0.5 at beat 8.
        let curve = Curve::from_points(&[
            AutomationPoint::new(0.0, 0.0),
            AutomationPoint::new(4.0, 1.0),
            AutomationPoint::new(8.0, 0.5),
        ]);

        // Beat 10 wraps to beat 6 inside the [4, 8) loop.
        let wrapped = curve.value_at_looped(10.0, 4.0, 8.0).unwrap();
        assert_eq!(wrapped, curve.value_at(6.0));

        // Before the loop, times are read directly.
        let before = curve.value_at_looped(2.0, 4.0, 8.0).unwrap();
        assert_eq!(before, 0.5);

        // Exactly at loop_end wraps to loop_start.
        let at_end = curve.value_at_looped(8.0, 4.0, 8.0).unwrap();
        assert_eq!(at_end, 1.0);
    }

    #[test]
    fn degenerate_loop_range_errors() {
        let curve = Curve::fade_in(4.0, CurveKind::Linear);
        assert!(curve.value_at_looped(2.0, 8.0, 4.0).is_err());
        assert!(curve.value_at_looped(2.0, 4.0, 4.0).is_err());
    }

    #[test]
    fn preset_ramp() {
        let curve = Curve::ramp(4.0, 0.2, 0.8, CurveKind::Linear);
        assert_eq!(curve.value_at(0.0), 0.2);
        assert_relative_eq!(curve.value_at(2.0), 0.5);
        assert_eq!(curve.value_at(4.0), 0.8);
    }
}
