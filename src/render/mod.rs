//! Render module - UI components for visualization
//!
//! This module provides:
//! - the curve canvas widget
//! - the render configuration it owns

mod canvas;

pub use canvas::{Canvas, ConfigError, RenderConfig};
