//! curvelab - parametric curve plotter
//!
//! Renders classic plane curves (astroid, cycloid, circle, ellipse, ...)
//! in a window. The side panel selects the curve and adjusts scale,
//! interval length, step count, stroke width and colors; the canvas
//! redraws the sampled polyline every frame.

use eframe::egui;

mod animation;
mod curves;
mod render;
mod settings;

use animation::IntervalSweep;
use curves::CurveKind;
use render::Canvas;
use settings::AppSettings;

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting curvelab");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 660.0])
            .with_min_inner_size([600.0, 600.0])
            .with_title("curvelab"),
        ..Default::default()
    };

    eframe::run_native(
        "curvelab",
        options,
        Box::new(|cc| Ok(Box::new(CurveApp::new(cc)))),
    )
}

/// Main application state
pub struct CurveApp {
    pub canvas: Canvas,
    pub show_controls: bool,

    /// Running interval sweep, if the animation is active
    pub sweep: Option<IntervalSweep>,
}

impl CurveApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self {
            canvas: Canvas::new(),
            show_controls: true,
            sweep: None,
        };
        AppSettings::load().apply(&mut app);
        app
    }

    /// Advance the running sweep by one value, if any
    fn step_sweep(&mut self, ctx: &egui::Context) {
        let Some(sweep) = &mut self.sweep else {
            return;
        };

        match sweep.next() {
            Some(interval) => {
                if let Err(e) = self.canvas.config.set_interval(interval) {
                    log::warn!("Sweep aborted: {}", e);
                    self.sweep = None;
                }
                ctx.request_repaint();
            }
            None => {
                log::info!("Sweep finished");
                self.sweep = None;
            }
        }
    }

    fn controls_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Curve");
        ui.separator();

        // Curve selection; switching resets scale, interval and steps
        let mut selected = self.canvas.config.curve();
        egui::ComboBox::from_label("Shape")
            .selected_text(selected.name())
            .show_ui(ui, |ui| {
                for kind in CurveKind::all() {
                    ui.selectable_value(&mut selected, *kind, kind.name());
                }
            });
        if selected != self.canvas.config.curve() {
            self.canvas.config.select_curve(selected);
            self.sweep = None;
        }

        ui.separator();
        ui.label("Parameters:");

        let mut scale = self.canvas.config.scale();
        if ui
            .add(
                egui::DragValue::new(&mut scale)
                    .speed(1.0)
                    .range(1.0..=500.0)
                    .prefix("Scale: "),
            )
            .changed()
        {
            if let Err(e) = self.canvas.config.set_scale(scale) {
                log::warn!("Rejected scale: {}", e);
            }
        }

        let mut interval = self.canvas.config.interval();
        if ui
            .add(
                egui::DragValue::new(&mut interval)
                    .speed(0.1)
                    .range(0.0..=100.0)
                    .prefix("Interval: "),
            )
            .changed()
        {
            if let Err(e) = self.canvas.config.set_interval(interval) {
                log::warn!("Rejected interval: {}", e);
            }
        }

        let mut step_count = self.canvas.config.step_count();
        if ui
            .add(
                egui::DragValue::new(&mut step_count)
                    .speed(1)
                    .range(1..=4096)
                    .prefix("Steps: "),
            )
            .changed()
        {
            if let Err(e) = self.canvas.config.set_step_count(step_count) {
                log::warn!("Rejected step count: {}", e);
            }
        }

        ui.separator();

        ui.collapsing("Display", |ui| {
            ui.add(
                egui::Slider::new(&mut self.canvas.config.stroke_width, 0.5..=10.0)
                    .text("Line width"),
            );
            ui.horizontal(|ui| {
                ui.color_edit_button_srgba(&mut self.canvas.config.background);
                ui.label("Background");
            });
            ui.horizontal(|ui| {
                ui.color_edit_button_srgba(&mut self.canvas.config.stroke);
                ui.label("Curve color");
            });
        });

        ui.separator();

        // Replays the curve from an empty interval up to the current one
        let animating = self.sweep.is_some();
        let button_text = if animating { "⏹ Stop" } else { "▶ Animate" };
        if ui.button(button_text).clicked() {
            if animating {
                self.sweep = None;
            } else {
                self.sweep = Some(IntervalSweep::new(self.canvas.config.interval()));
            }
        }
    }
}

impl eframe::App for CurveApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.step_sweep(ctx);

        // Top panel
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("curvelab");
                ui.separator();
                ui.toggle_value(&mut self.show_controls, "⚙ Controls");
                ui.separator();
                let config = &self.canvas.config;
                ui.label(format!(
                    "{} · interval {:.2} · {} steps",
                    config.curve().name(),
                    config.interval(),
                    config.step_count(),
                ));
            });
        });

        // Controls panel
        if self.show_controls {
            egui::SidePanel::left("controls_panel")
                .min_width(220.0)
                .show(ctx, |ui| self.controls_panel(ui));
        }

        // Main curve display
        egui::CentralPanel::default().show(ctx, |ui| {
            self.canvas.show(ui);
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        AppSettings::from_app(self).save();
        log::info!("Settings saved");
    }
}
