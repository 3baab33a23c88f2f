//! Path sampler - walks a curve's parameter interval
//!
//! Sampling is one pass from `t = 0` to `t = interval` in `step_count`
//! uniform steps. The parameter accumulates (`t += step`), so the looped
//! `t` values drift slightly from exact multiples; the pass therefore
//! ends with one extra evaluation at `t = interval` exactly, which closes
//! periodic curves without a gap.

use super::{CurveKind, CurvePoint};

/// Lazy point sequence for one draw pass over a curve
///
/// Yields the loop points at `t = 0, step, 2·step, …` while `t < interval`
/// (at most `step_count` of them), then the closing point at
/// `t = interval`, then ends.
///
/// For `interval <= 0` the loop never runs and only the closing point is
/// yielded. That is defined behavior, not an error.
pub struct PathSampler {
    curve: CurveKind,
    interval: f32,
    step: f32,
    t: f32,
    emitted: u32,
    step_count: u32,
    closed: bool,
}

impl PathSampler {
    /// Create a sampler for one pass over `curve`
    ///
    /// `step_count` is clamped to at least 1 so the step width is always
    /// finite; callers validate upstream (see `RenderConfig`).
    pub fn new(curve: CurveKind, interval: f32, step_count: u32) -> Self {
        let step_count = step_count.max(1);
        Self {
            curve,
            interval,
            step: interval / step_count as f32,
            t: 0.0,
            emitted: 0,
            step_count,
            closed: false,
        }
    }

    /// Consume the sampler into a stream of line segments
    ///
    /// The previous endpoint starts at the `t = 0` anchor, so the first
    /// loop segment is zero-length. Every pass emits `step_count` loop
    /// segments plus one closing segment when `interval > 0`, and exactly
    /// one closing segment otherwise.
    pub fn segments(self) -> Segments {
        Segments {
            prev: self.curve.point_at(0.0),
            points: self,
        }
    }
}

impl Iterator for PathSampler {
    type Item = CurvePoint;

    fn next(&mut self) -> Option<CurvePoint> {
        if self.emitted < self.step_count && self.t < self.interval {
            let point = self.curve.point_at(self.t);
            self.t += self.step;
            self.emitted += 1;
            return Some(point);
        }

        if !self.closed {
            self.closed = true;
            return Some(self.curve.point_at(self.interval));
        }

        None
    }
}

/// Pairs of consecutive sampled points, ready to draw
pub struct Segments {
    prev: CurvePoint,
    points: PathSampler,
}

impl Iterator for Segments {
    type Item = (CurvePoint, CurvePoint);

    fn next(&mut self) -> Option<(CurvePoint, CurvePoint)> {
        let next = self.points.next()?;
        let segment = (self.prev, next);
        self.prev = next;
        Some(segment)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_segment_count() {
        // step_count loop segments plus one closing segment
        for steps in [1, 4, 128, 256, 777] {
            let n = PathSampler::new(CurveKind::Circle, 2.0 * PI, steps)
                .segments()
                .count();
            assert_eq!(n, steps as usize + 1);
        }
    }

    #[test]
    fn test_point_count() {
        let n = PathSampler::new(CurveKind::Astroid, 2.0 * PI, 256).count();
        assert_eq!(n, 257); // 256 loop points + closing point
    }

    #[test]
    fn test_degenerate_interval() {
        // interval <= 0: the loop never runs, only the closing segment
        for interval in [0.0, -1.0, -6.5] {
            let segments: Vec<_> = PathSampler::new(CurveKind::Circle, interval, 128)
                .segments()
                .collect();
            assert_eq!(segments.len(), 1);

            let (from, to) = segments[0];
            let anchor = CurveKind::Circle.point_at(0.0);
            let endpoint = CurveKind::Circle.point_at(interval);
            assert_relative_eq!(from.x, anchor.x);
            assert_relative_eq!(from.y, anchor.y);
            assert_relative_eq!(to.x, endpoint.x);
            assert_relative_eq!(to.y, endpoint.y);
        }
    }

    #[test]
    fn test_closing_point_is_exact_endpoint() {
        let last = PathSampler::new(CurveKind::Starfish, 6.0 * PI, 128)
            .last()
            .unwrap();
        let endpoint = CurveKind::Starfish.point_at(6.0 * PI);
        // Same evaluation, not an accumulated t that drifted past the end
        assert_eq!(last, endpoint);
    }

    #[test]
    fn test_first_segment_is_anchor() {
        let (from, to) = PathSampler::new(CurveKind::Astroid, 2.0 * PI, 64)
            .segments()
            .next()
            .unwrap();
        // Anchor and first loop point are both t = 0
        assert_relative_eq!(from.x, to.x);
        assert_relative_eq!(from.y, to.y);
        assert_relative_eq!(from.x, 2.0);
    }

    #[test]
    fn test_ellipse_quarter_steps() {
        // interval 2π in 4 steps samples t = 0, π/2, π, 3π/2, then closes at 2π
        let points: Vec<_> = PathSampler::new(CurveKind::Ellipse, 2.0 * PI, 4).collect();
        assert_eq!(points.len(), 5);

        let expected = [
            (2.0, 0.0),
            (0.0, 1.0),
            (-2.0, 0.0),
            (0.0, -1.0),
            (2.0, 0.0),
        ];
        for (point, (x, y)) in points.iter().zip(expected) {
            assert_relative_eq!(point.x, x, epsilon = 1e-4);
            assert_relative_eq!(point.y, y, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_zero_step_count_is_clamped() {
        let n = PathSampler::new(CurveKind::Line, 2.0, 0).count();
        assert_eq!(n, 2); // behaves as a single step plus the closing point
    }
}
