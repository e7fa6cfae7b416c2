//! Climbing Gym Editor.
//!
//! First-Person-Editor für Kletterhallen: Bohrlöcher anvisieren,
//! Griffe aus der Galerie setzen, drehen und löschen.

use climbing_gym_editor::app::use_cases;
use climbing_gym_editor::{ui, AppController, AppEffect, AppIntent, AppState, EditorOptions};
use eframe::egui;

/// CLI-Schalter: nur Vorschaubilder erzeugen und beenden.
const GENERATE_PREVIEWS_FLAG: &str = "--generate-previews";

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

        log::info!(
            "Climbing Gym Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        if std::env::args().any(|arg| arg == GENERATE_PREVIEWS_FLAG) {
            Self::generate_previews(&editor_options);
            return Ok(());
        }

        if use_cases::previews::previews_missing(&editor_options.previews_dir()) {
            log::info!("Keine Vorschaubilder gefunden, erzeuge sie aus den Vorlagen");
            Self::generate_previews(&editor_options);
        }

        for name in ui::unknown_key_names(&editor_options.key_bindings) {
            log::warn!("Unbekannte Taste in Tastenbelegung: '{}'", name);
        }

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Climbing Gym Editor"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Climbing Gym Editor",
            options,
            Box::new(|cc| {
                egui_extras::install_image_loaders(&cc.egui_ctx);
                Ok(Box::new(EditorApp::new(editor_options)))
            }),
        )
    }

    fn generate_previews(options: &EditorOptions) {
        match use_cases::previews::generate_from_options(options) {
            Ok(report) => log::info!(
                "{} Vorschaubilder geschrieben, {} fehlgeschlagen ({})",
                report.written.len(),
                report.failed,
                options.previews_dir().display()
            ),
            Err(e) => log::error!("Vorschaubilder konnten nicht erzeugt werden: {:#}", e),
        }
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    session_started: bool,
}

impl EditorApp {
    fn new(options: EditorOptions) -> Self {
        Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
            session_started: false,
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.session_started {
            self.session_started = true;
            self.process_events(vec![AppIntent::SessionStarted]);
        }

        let events = self.collect_ui_events(ctx);
        self.process_events(events);

        let input = ui::collect_frame_input(
            ctx,
            &self.state.options.key_bindings,
            self.state.ui.pointer_locked,
        );
        let dt = ctx.input(|i| i.unstable_dt);
        match self.controller.tick(&mut self.state, &input, dt) {
            Ok(effects) => self.apply_effects(ctx, effects),
            Err(e) => log::error!("Frame-Tick fehlgeschlagen: {:#}", e),
        }

        // Ebenfalls über Effekte gemeldete Pfade landen hier (z.B. Quit-Button)
        let pending = self.state.take_effects();
        self.apply_effects(ctx, pending);

        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        // Spiel-Loop: durchgehend neu zeichnen
        ctx.request_repaint();
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::show_control_panel(ctx, &self.state));
        events.extend(ui::show_gallery(ctx, &self.state));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click());

                let scene = self.controller.build_render_scene(&self.state);
                ui::paint_scene(ui.painter(), rect, &scene);
                ui::paint_crosshair(ui.painter(), rect, scene.crosshair_highlighted);

                if response.clicked() && !self.state.ui.pointer_locked {
                    events.push(AppIntent::PointerLockRequested { locked: true });
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn apply_effects(&mut self, ctx: &egui::Context, effects: Vec<AppEffect>) {
        for effect in effects {
            match effect {
                AppEffect::SetPointerLock { locked } => {
                    let grab = if locked {
                        egui::CursorGrab::Locked
                    } else {
                        egui::CursorGrab::None
                    };
                    ctx.send_viewport_cmd(egui::ViewportCommand::CursorGrab(grab));
                    ctx.send_viewport_cmd(egui::ViewportCommand::CursorVisible(!locked));
                }
                AppEffect::ExitRequested => {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
                AppEffect::HoldSpawned {
                    hold,
                    anchor,
                    variant,
                } => log::debug!("Griff {:?} ({}) auf {:?} gesetzt", hold, variant, anchor),
                AppEffect::HoldRemoved { hold, anchor } => {
                    log::debug!("Griff {:?} von {:?} entfernt", hold, anchor)
                }
                AppEffect::GalleryOpened { anchor_name } => {
                    log::debug!("Galerie offen für {}", anchor_name)
                }
                AppEffect::GalleryClosed => log::debug!("Galerie geschlossen"),
            }
        }
    }
}
