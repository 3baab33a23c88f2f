//! Curve canvas widget
//!
//! The canvas owns the mutable `RenderConfig` and repaints the selected
//! curve each frame: background rectangle first, then the sampled line
//! segments, scaled and centered in the widget rect.

use eframe::egui::{self, Color32, Pos2, Stroke};
use thiserror::Error;

use crate::curves::{CurveKind, CurvePoint, PathSampler};

/// Errors from the validated `RenderConfig` setters
///
/// Rejected values leave the configuration unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("step count must be at least 1")]
    ZeroStepCount,

    #[error("{0} must be a finite number")]
    NonFinite(&'static str),
}

/// Mutable rendering state, owned by the canvas
///
/// Created once with Astroid defaults and mutated in place for the life
/// of the window. Scale, interval and step count go through validated
/// setters; selecting a curve overwrites all three with that curve's
/// defaults, discarding prior adjustment. Colors and stroke width are
/// free-form and survive curve switches.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    curve: CurveKind,
    scale: f32,
    interval: f32,
    step_count: u32,

    /// Stroke width in pixels
    pub stroke_width: f32,
    /// Canvas fill color
    pub background: Color32,
    /// Curve (and frame) color
    pub stroke: Color32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(CurveKind::Astroid)
    }
}

impl RenderConfig {
    /// Create a config holding `curve` with its default parameters
    pub fn new(curve: CurveKind) -> Self {
        let defaults = curve.defaults();
        Self {
            curve,
            scale: defaults.scale,
            interval: defaults.interval,
            step_count: defaults.step_count,
            stroke_width: 3.0,
            background: Color32::from_rgb(112, 112, 112),
            stroke: Color32::WHITE,
        }
    }

    pub fn curve(&self) -> CurveKind {
        self.curve
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    /// Switch to `curve` and reset scale, interval and step count to its
    /// defaults, unconditionally
    pub fn select_curve(&mut self, curve: CurveKind) {
        let defaults = curve.defaults();
        self.curve = curve;
        self.scale = defaults.scale;
        self.interval = defaults.interval;
        self.step_count = defaults.step_count;
    }

    /// Set the curve-space to pixel-space multiplier
    pub fn set_scale(&mut self, scale: f32) -> Result<(), ConfigError> {
        if !scale.is_finite() {
            return Err(ConfigError::NonFinite("scale"));
        }
        self.scale = scale;
        Ok(())
    }

    /// Set the parameter interval length
    ///
    /// Non-positive values are accepted: sampling then degenerates to the
    /// single closing segment.
    pub fn set_interval(&mut self, interval: f32) -> Result<(), ConfigError> {
        if !interval.is_finite() {
            return Err(ConfigError::NonFinite("interval"));
        }
        self.interval = interval;
        Ok(())
    }

    /// Set the number of sampling steps, at least 1
    pub fn set_step_count(&mut self, step_count: u32) -> Result<(), ConfigError> {
        if step_count == 0 {
            return Err(ConfigError::ZeroStepCount);
        }
        self.step_count = step_count;
        Ok(())
    }

    /// Sampler for one draw pass over the current configuration
    pub fn sampler(&self) -> PathSampler {
        PathSampler::new(self.curve, self.interval, self.step_count)
    }
}

/// The curve drawing surface
pub struct Canvas {
    pub config: RenderConfig,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            config: RenderConfig::default(),
        }
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Map a curve-space point to screen coordinates
    ///
    /// `pixel = point * scale + center`. Screen y grows downward and the
    /// curve-space y axis follows the same orientation.
    fn to_screen(point: CurvePoint, scale: f32, center: Pos2) -> Pos2 {
        Pos2::new(point.x * scale + center.x, point.y * scale + center.y)
    }

    /// Draw the canvas into the available space
    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let size = ui.available_size();
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let rect = response.rect;

        let stroke = Stroke::new(self.config.stroke_width, self.config.stroke);

        // Background, framed with the curve pen
        painter.rect(rect, 0.0, self.config.background, stroke);

        let center = rect.center();
        let scale = self.config.scale;

        for (from, to) in self.config.sampler().segments() {
            painter.line_segment(
                [
                    Self::to_screen(from, scale, center),
                    Self::to_screen(to, scale, center),
                ],
                stroke,
            );
        }

        response
    }
}
