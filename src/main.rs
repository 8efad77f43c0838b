#![windows_subsystem = "windows"]
//! npm Explorer - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod constants;
mod registry;
mod settings;
mod theme;
mod types;
mod ui;
mod utils;

use app::{App, Route};
use constants::*;
use eframe::egui;
use tracing::info;
use ui::components;
use utils::rasterize_logo;

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "npm-explorer.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,npm_explorer=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = utils::get_data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "npm Explorer starting");

    // Load saved window position/size
    let settings = settings::Settings::load(&data_dir);
    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(1280.0, 800.0)))
        .with_min_inner_size([1000.0, 660.0])
        .with_title("npm Explorer");

    // Window/taskbar icon from the logo SVG
    {
        let (rgba, width, height) = rasterize_logo(64);
        let icon = egui::IconData { rgba, width, height };
        viewport = viewport.with_icon(std::sync::Arc::new(icon));
    }

    let needs_center = win_pos.is_none();

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "npm Explorer",
        options,
        Box::new(move |cc| {
            let mut app = App::new(cc, settings, data_dir);
            app.needs_center = needs_center;
            Ok(Box::new(app))
        }),
    )
}

// ============================================================================
// MAIN UPDATE LOOP
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Press "/" to jump to the header search box
        if !ctx.wants_keyboard_input() && ctx.input(|i| i.key_pressed(egui::Key::Slash)) {
            self.focus_search = true;
        }

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        self.render_header(ctx);

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin { left: 24, right: 24, top: 12, bottom: 0 }),
            )
            .show(ctx, |ui| {
                // Store panel rect for toast positioning
                self.central_panel_rect = Some(ui.max_rect());

                match self.route.clone() {
                    Route::Home => self.render_home(ui, ctx),
                    Route::Search { .. } => self.render_search(ui, ctx),
                    Route::Package(_) => self.render_details(ui, ctx),
                }
            });

        self.render_toast(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
        self.save_settings();
    }
}

// ============================================================================
// HEADER & TOAST
// ============================================================================

impl App {
    /// Top bar shown on every view: brand, search input, nav links
    fn render_header(&mut self, ctx: &egui::Context) {
        let mut nav: Option<Route> = None;

        egui::TopBottomPanel::top("header")
            .exact_height(theme::HEADER_HEIGHT)
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_ELEVATED)
                    .inner_margin(egui::Margin::symmetric(16, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    let brand = ui.add(
                        egui::Button::new(
                            egui::RichText::new(format!(
                                "{}  npm Explorer",
                                egui_phosphor::regular::PACKAGE
                            ))
                            .size(theme::FONT_TITLE)
                            .strong()
                            .color(theme::ACCENT),
                        )
                        .frame(false),
                    );
                    if brand.clicked() {
                        nav = Some(Route::Home);
                    }

                    ui.add_space(theme::SPACING_XL);

                    ui.scope(|ui| {
                        ui.set_max_width(theme::SEARCH_INPUT_WIDTH);
                        if components::search_input(
                            ui,
                            "header_search",
                            &mut self.header_query,
                            &mut self.focus_search,
                        ) {
                            nav = Some(Route::Search {
                                query: self.header_query.trim().to_string(),
                            });
                        }
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if nav_link(ui, "Browse", matches!(self.route, Route::Search { .. })) {
                            nav = Some(Route::Search { query: String::new() });
                        }
                        if nav_link(ui, "Home", matches!(self.route, Route::Home)) {
                            nav = Some(Route::Home);
                        }
                    });
                });
            });

        if let Some(route) = nav {
            self.navigate(ctx, route);
        }
    }

    /// Toast notification (bottom-right of central panel, 3s visible with fade-out)
    fn render_toast(&mut self, ctx: &egui::Context) {
        let (Some(message), Some(start)) = (self.toast_message.clone(), self.toast_start) else {
            return;
        };

        let elapsed = start.elapsed().as_secs_f32();
        if elapsed > 3.0 {
            self.toast_message = None;
            self.toast_start = None;
            return;
        }

        let panel_rect = self.central_panel_rect.unwrap_or_else(|| ctx.screen_rect());
        let margin = 16.0;
        let alpha = if elapsed > 2.5 { 1.0 - (elapsed - 2.5) / 0.5 } else { 1.0 };

        egui::Area::new(egui::Id::new("toast"))
            .fixed_pos(egui::pos2(
                panel_rect.right() - margin,
                panel_rect.bottom() - margin,
            ))
            .pivot(egui::Align2::RIGHT_BOTTOM)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(theme::BG_SURFACE.gamma_multiply(alpha))
                    .stroke(egui::Stroke::new(
                        theme::STROKE_DEFAULT,
                        theme::BORDER_DEFAULT.gamma_multiply(alpha),
                    ))
                    .corner_radius(theme::RADIUS_DEFAULT)
                    .inner_margin(egui::Margin::symmetric(12, 8))
                    .show(ui, |ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(format!(
                                    "{}  {}",
                                    egui_phosphor::regular::CHECK,
                                    message
                                ))
                                .color(theme::TEXT_SECONDARY.gamma_multiply(alpha)),
                            )
                            .selectable(false),
                        );
                    });
            });

        // Keep the fade animating
        ctx.request_repaint();
    }
}

fn nav_link(ui: &mut egui::Ui, label: &str, active: bool) -> bool {
    let color = if active {
        theme::TEXT_PRIMARY
    } else {
        theme::TEXT_MUTED
    };
    ui.add(egui::Button::new(egui::RichText::new(label).color(color)).frame(false))
        .clicked()
}
