//! Rackit Designer.
//!
//! 2D/3D-Editor zum Zusammenstellen modularer Kleiderständer aus
//! Rohr-Fittings, mit Live-Stückliste und JSON/PNG-Export.

use eframe::egui;
use rackit_designer::{ui, AppController, AppIntent, AppState, EditorOptions};

const OPTIONS_PATH: &str = "rackit-designer.toml";

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Rackit Designer v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Rackit Designer"),
            ..Default::default()
        };

        eframe::run_native(
            "Rackit Designer",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    canvas_input: ui::canvas::CanvasInput,
    viewer_input: ui::viewer3d::Viewer3dInput,
}

impl EditorApp {
    fn new() -> Self {
        let mut state = AppState::new();
        state.options = EditorOptions::load_or_default(OPTIONS_PATH);

        Self {
            state,
            controller: AppController::new(),
            canvas_input: ui::canvas::CanvasInput::new(),
            viewer_input: ui::viewer3d::Viewer3dInput::new(),
        }
    }

    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::render_library(ctx, &self.state));
        events.extend(ui::render_side_panel(ctx, &self.state));
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));
        events.extend(ui::collect_keyboard_intents(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |panel_ui| {
                let scene = self.controller.build_render_scene(&self.state);
                if scene.mode_3d {
                    events.extend(ui::render_viewer3d(
                        panel_ui,
                        &scene,
                        &mut self.viewer_input,
                    ));
                } else {
                    events.extend(ui::render_canvas(panel_ui, &scene, &mut self.canvas_input));
                }
            });

        // Animationen laufen nur in der 3D-Ansicht
        if self.state.view.mode_3d && self.state.sync.active_animations() > 0 {
            events.push(AppIntent::FrameAdvanced {
                dt: ctx.input(|i| i.stable_dt),
            });
            ctx.request_repaint();
        }

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        self.process_events(events);
    }

    fn save(&mut self, _storage: &mut dyn eframe::Storage) {
        if let Err(e) = self.state.options.save(OPTIONS_PATH) {
            log::warn!("Optionen konnten nicht gespeichert werden: {:#}", e);
        }
    }
}
