use std::path::PathBuf;

use eframe::egui;
use serde::{Deserialize, Serialize};

use crate::curves::CurveKind;
use crate::render::RenderConfig;
use crate::CurveApp;

/// Returns the path to the settings file: `~/.config/curvelab/settings.json`
fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("curvelab");
    path.push("settings.json");
    path
}

/// Persisted application settings.
///
/// Serialized as JSON to the platform config directory.
/// Fields use `#[serde(default)]` so that adding new settings
/// won't break existing config files.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    // Curve
    pub curve: CurveKind,
    pub scale: f32,
    pub interval: f32,
    pub step_count: u32,

    // Display
    pub stroke_width: f32,
    pub show_controls: bool,

    // Color (stored as u8 triples since Color32 isn't serde-friendly)
    pub stroke_r: u8,
    pub stroke_g: u8,
    pub stroke_b: u8,
    pub background_r: u8,
    pub background_g: u8,
    pub background_b: u8,
}

impl Default for AppSettings {
    fn default() -> Self {
        let config = RenderConfig::default();
        Self {
            curve: config.curve(),
            scale: config.scale(),
            interval: config.interval(),
            step_count: config.step_count(),

            stroke_width: config.stroke_width,
            show_controls: true,

            stroke_r: config.stroke.r(),
            stroke_g: config.stroke.g(),
            stroke_b: config.stroke.b(),
            background_r: config.background.r(),
            background_g: config.background.g(),
            background_b: config.background.b(),
        }
    }
}

impl AppSettings {
    /// Load settings from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = settings_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Failed to parse settings ({}), using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("No settings file found ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to disk as pretty JSON.
    pub fn save(&self) {
        let path = settings_path();
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                log::warn!("Failed to create config directory: {}", e);
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    log::warn!("Failed to write settings: {}", e);
                }
            }
            Err(e) => {
                log::warn!("Failed to serialize settings: {}", e);
            }
        }
    }

    /// Extract current settings from the running application.
    pub fn from_app(app: &CurveApp) -> Self {
        let config = &app.canvas.config;
        Self {
            curve: config.curve(),
            scale: config.scale(),
            interval: config.interval(),
            step_count: config.step_count(),

            stroke_width: config.stroke_width,
            show_controls: app.show_controls,

            stroke_r: config.stroke.r(),
            stroke_g: config.stroke.g(),
            stroke_b: config.stroke.b(),
            background_r: config.background.r(),
            background_g: config.background.g(),
            background_b: config.background.b(),
        }
    }

    /// Apply loaded settings to the running application.
    ///
    /// Numeric fields go through the validated setters, so a hand-edited
    /// settings file can't smuggle in a zero step count or a non-finite
    /// float; offenders are logged and the curve defaults kept.
    pub fn apply(&self, app: &mut CurveApp) {
        let config = &mut app.canvas.config;

        config.select_curve(self.curve);
        if let Err(e) = config.set_scale(self.scale) {
            log::warn!("Ignoring saved scale: {}", e);
        }
        if let Err(e) = config.set_interval(self.interval) {
            log::warn!("Ignoring saved interval: {}", e);
        }
        if let Err(e) = config.set_step_count(self.step_count) {
            log::warn!("Ignoring saved step count: {}", e);
        }

        config.stroke_width = self.stroke_width;
        config.stroke = egui::Color32::from_rgb(self.stroke_r, self.stroke_g, self.stroke_b);
        config.background =
            egui::Color32::from_rgb(self.background_r, self.background_g, self.background_b);

        app.show_controls = self.show_controls;
    }
}
