//! Curve catalogue - closed-form parametric plane curves
//!
//! Each `CurveKind` selects both a formula and the rendering defaults
//! (scale, interval length, step count) that apply when the curve is
//! chosen in the UI.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use super::CurvePoint;

/// Available parametric curves
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum CurveKind {
    Astroid,
    Cycloid,
    HuygensCycloid,
    HypoCycloid,
    Line,
    Circle,
    Ellipse,
    Twirly,
    Starfish,
    Cloud,
}

/// Rendering defaults applied when a curve is selected
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CurveDefaults {
    /// Curve-space to pixel-space multiplier
    pub scale: f32,
    /// Length of the parameter interval sampled per draw
    pub interval: f32,
    /// Number of uniform subdivisions of the interval
    pub step_count: u32,
}

impl CurveKind {
    /// Get all curve kinds, in UI order
    pub fn all() -> &'static [CurveKind] {
        &[
            CurveKind::Astroid,
            CurveKind::Cycloid,
            CurveKind::HuygensCycloid,
            CurveKind::HypoCycloid,
            CurveKind::Line,
            CurveKind::Circle,
            CurveKind::Ellipse,
            CurveKind::Twirly,
            CurveKind::Starfish,
            CurveKind::Cloud,
        ]
    }

    /// Get the display name of this curve (for UI)
    pub fn name(&self) -> &'static str {
        match self {
            CurveKind::Astroid => "Astroid",
            CurveKind::Cycloid => "Cycloid",
            CurveKind::HuygensCycloid => "Huygens Cycloid",
            CurveKind::HypoCycloid => "Hypo Cycloid",
            CurveKind::Line => "Line",
            CurveKind::Circle => "Circle",
            CurveKind::Ellipse => "Ellipse",
            CurveKind::Twirly => "Twirly",
            CurveKind::Starfish => "Starfish",
            CurveKind::Cloud => "Cloud",
        }
    }

    /// Rendering defaults for this curve
    ///
    /// Selecting a curve resets scale, interval and step count to these
    /// values, discarding any prior adjustment.
    pub fn defaults(&self) -> CurveDefaults {
        match self {
            CurveKind::Astroid => CurveDefaults {
                scale: 90.0,
                interval: 2.0 * PI,
                step_count: 256,
            },
            CurveKind::Cycloid => CurveDefaults {
                scale: 10.0,
                interval: 4.0 * PI,
                step_count: 128,
            },
            CurveKind::HuygensCycloid => CurveDefaults {
                scale: 12.0,
                interval: 4.0 * PI,
                step_count: 256,
            },
            CurveKind::HypoCycloid => CurveDefaults {
                scale: 40.0,
                interval: 2.0 * PI,
                step_count: 256,
            },
            CurveKind::Line => CurveDefaults {
                scale: 50.0,
                interval: 2.0,
                step_count: 128,
            },
            CurveKind::Circle => CurveDefaults {
                scale: 150.0,
                interval: 2.0 * PI,
                step_count: 256,
            },
            CurveKind::Ellipse => CurveDefaults {
                scale: 75.0,
                interval: 2.0 * PI,
                step_count: 256,
            },
            CurveKind::Twirly => CurveDefaults {
                scale: 12.0,
                interval: 12.0 * PI,
                step_count: 512,
            },
            CurveKind::Starfish => CurveDefaults {
                scale: 35.0,
                interval: 6.0 * PI,
                step_count: 128,
            },
            CurveKind::Cloud => CurveDefaults {
                scale: 14.0,
                interval: 28.0 * PI,
                step_count: 256,
            },
        }
    }

    /// Evaluate the curve at parameter `t`
    ///
    /// Pure and defined for all real `t`. Most curves are periodic;
    /// Line is affine and unbounded.
    pub fn point_at(&self, t: f32) -> CurvePoint {
        match self {
            CurveKind::Astroid => astroid(t),
            CurveKind::Cycloid => cycloid(t),
            CurveKind::HuygensCycloid => huygens(t),
            CurveKind::HypoCycloid => hypo(t),
            CurveKind::Line => line(t),
            CurveKind::Circle => circle(t),
            CurveKind::Ellipse => ellipse(t),
            CurveKind::Twirly => twirly(t),
            CurveKind::Starfish => starfish(t),
            CurveKind::Cloud => cloud(t),
        }
    }
}

/// x = 2·cos³t, y = 2·sin³t
fn astroid(t: f32) -> CurvePoint {
    let cos_t = t.cos();
    let sin_t = t.sin();
    CurvePoint::new(2.0 * cos_t.powi(3), 2.0 * sin_t.powi(3))
}

/// x = 1.5·(1 − cos t), y = 1.5·(t − sin t)
fn cycloid(t: f32) -> CurvePoint {
    CurvePoint::new(1.5 * (1.0 - t.cos()), 1.5 * (t - t.sin()))
}

/// x = 4·(3cos t − cos 3t), y = 4·(3sin t − sin 3t)
fn huygens(t: f32) -> CurvePoint {
    CurvePoint::new(
        4.0 * (3.0 * t.cos() - (3.0 * t).cos()),
        4.0 * (3.0 * t.sin() - (3.0 * t).sin()),
    )
}

/// x = 1.5·(2cos t + cos 2t), y = 1.5·(2sin t − sin 2t)
fn hypo(t: f32) -> CurvePoint {
    CurvePoint::new(
        1.5 * (2.0 * t.cos() + (2.0 * t).cos()),
        1.5 * (2.0 * t.sin() - (2.0 * t).sin()),
    )
}

fn line(t: f32) -> CurvePoint {
    CurvePoint::new(1.0 - t, 1.0 - t)
}

fn circle(t: f32) -> CurvePoint {
    CurvePoint::new(t.cos(), t.sin())
}

/// Semi-axes a = 2, b = 1
fn ellipse(t: f32) -> CurvePoint {
    let a = 2.0;
    let b = 1.0;
    CurvePoint::new(a * t.cos(), b * t.sin())
}

/// Epitrochoid-like loop, v = 11
fn twirly(t: f32) -> CurvePoint {
    let v = 11.0;
    CurvePoint::new(
        v * t.cos() - 6.0 * ((v / 6.0) * t).cos(),
        v * t.sin() - 6.0 * ((v / 6.0) * t).sin(),
    )
}

/// Hypotrochoid with R = 5, r = 3, d = 5
fn starfish(t: f32) -> CurvePoint {
    let big_r = 5.0;
    let r = 3.0;
    let d = 5.0;
    CurvePoint::new(
        (big_r - r) * t.cos() + d * (t * ((big_r - r) / r)).cos(),
        (big_r - r) * t.sin() - d * (t * ((big_r - r) / r)).sin(),
    )
}

/// Epicycloid with a = 14, b = 1
fn cloud(t: f32) -> CurvePoint {
    let a = 14.0;
    let b = 1.0;
    CurvePoint::new(
        (a + b) * (t * b / a).cos() - b * (t * (a + b) / a).cos(),
        (a + b) * (t * b / a).sin() - b * (t * (a + b) / a).sin(),
    )
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_start_points() {
        // Every curve has a known closed-form value at t = 0
        let p = CurveKind::Circle.point_at(0.0);
        assert_relative_eq!(p.x, 1.0);
        assert_relative_eq!(p.y, 0.0);

        let p = CurveKind::Astroid.point_at(0.0);
        assert_relative_eq!(p.x, 2.0);
        assert_relative_eq!(p.y, 0.0);

        let p = CurveKind::Line.point_at(0.0);
        assert_relative_eq!(p.x, 1.0);
        assert_relative_eq!(p.y, 1.0);

        let p = CurveKind::Cycloid.point_at(0.0);
        assert_relative_eq!(p.x, 0.0);
        assert_relative_eq!(p.y, 0.0);

        // Huygens: x = 4·(3 − 1) = 8
        let p = CurveKind::HuygensCycloid.point_at(0.0);
        assert_relative_eq!(p.x, 8.0);
        assert_relative_eq!(p.y, 0.0);

        // Hypo: x = 1.5·(2 + 1) = 4.5
        let p = CurveKind::HypoCycloid.point_at(0.0);
        assert_relative_eq!(p.x, 4.5);
        assert_relative_eq!(p.y, 0.0);

        let p = CurveKind::Ellipse.point_at(0.0);
        assert_relative_eq!(p.x, 2.0);
        assert_relative_eq!(p.y, 0.0);

        // Twirly: x = 11 − 6 = 5
        let p = CurveKind::Twirly.point_at(0.0);
        assert_relative_eq!(p.x, 5.0);
        assert_relative_eq!(p.y, 0.0);

        // Starfish: x = (5−3) + 5 = 7
        let p = CurveKind::Starfish.point_at(0.0);
        assert_relative_eq!(p.x, 7.0);
        assert_relative_eq!(p.y, 0.0);

        // Cloud: x = (14+1) − 1 = 14
        let p = CurveKind::Cloud.point_at(0.0);
        assert_relative_eq!(p.x, 14.0);
        assert_relative_eq!(p.y, 0.0);
    }

    #[test]
    fn test_circle_stays_on_unit_circle() {
        for i in 0..32 {
            let t = i as f32 * 0.41;
            let p = CurveKind::Circle.point_at(t);
            assert_relative_eq!(p.x * p.x + p.y * p.y, 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_line_is_diagonal() {
        for t in [-2.0_f32, 0.0, 0.5, 1.0, 3.0] {
            let p = CurveKind::Line.point_at(t);
            assert_relative_eq!(p.x, p.y);
            assert_relative_eq!(p.x, 1.0 - t);
        }
    }

    #[test]
    fn test_defaults_table() {
        let d = CurveKind::Circle.defaults();
        assert_eq!(d.step_count, 256);
        assert_relative_eq!(d.scale, 150.0);
        assert_relative_eq!(d.interval, 2.0 * PI);

        let d = CurveKind::HuygensCycloid.defaults();
        assert_eq!(d.step_count, 256);
        assert_relative_eq!(d.scale, 12.0);
        assert_relative_eq!(d.interval, 4.0 * PI);

        let d = CurveKind::Twirly.defaults();
        assert_eq!(d.step_count, 512);

        // Every curve must have a usable step count
        for kind in CurveKind::all() {
            assert!(kind.defaults().step_count >= 1);
            assert!(kind.defaults().interval > 0.0);
        }
    }

    #[test]
    fn test_all_is_complete() {
        assert_eq!(CurveKind::all().len(), 10);
    }
}
