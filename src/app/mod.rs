//! App module - application state, routing, and view rendering

mod details;
mod fetch;
mod home;
mod search;
#[cfg(test)]
mod tests;

use std::path::PathBuf;

use eframe::egui;

use crate::registry::RegistryClient;
use crate::settings::Settings;
use crate::theme;
use details::DetailsView;
use search::SearchView;

/// Client-side route; the desktop equivalent of `/`, `/search?query=...`,
/// and `/package/{name}`
#[derive(Clone, PartialEq)]
pub enum Route {
    Home,
    Search { query: String },
    Package(String),
}

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) client: RegistryClient,
    pub(crate) runtime: tokio::runtime::Runtime,

    // Navigation
    pub(crate) route: Route,
    pub(crate) history: Vec<Route>,

    // Search input terms (the header and the home hero keep their own)
    pub(crate) header_query: String,
    pub(crate) home_query: String,
    pub(crate) focus_search: bool,

    // Views
    pub(crate) search: SearchView,
    pub(crate) details: DetailsView,

    // Branding
    pub(crate) logo_texture: Option<egui::TextureHandle>,

    // Toast notification
    pub(crate) toast_message: Option<String>,
    pub(crate) toast_start: Option<std::time::Instant>,
    pub(crate) central_panel_rect: Option<egui::Rect>,

    // Window bookkeeping
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
    pub(crate) registry_url: Option<String>,
}

// ============================================================================
// APP INITIALIZATION & NAVIGATION
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Apply theme from theme.rs
        theme::apply_visuals(&cc.egui_ctx);

        let client = RegistryClient::new(settings.registry_url_or_default());

        Self {
            client,
            runtime: tokio::runtime::Runtime::new().unwrap(),
            route: Route::Home,
            history: Vec::new(),
            header_query: String::new(),
            home_query: String::new(),
            focus_search: false,
            search: SearchView::default(),
            details: DetailsView::default(),
            logo_texture: None,
            toast_message: None,
            toast_start: None,
            central_panel_rect: None,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
            registry_url: settings.registry_url,
        }
    }

    /// Change route. Entering a route is what starts its fetch; documents
    /// are fetched per visit and discarded on navigation.
    pub fn navigate(&mut self, ctx: &egui::Context, route: Route) {
        if route == self.route {
            return;
        }
        self.history.push(std::mem::replace(&mut self.route, route));
        if self.history.len() > 32 {
            self.history.remove(0);
        }
        self.enter_current(ctx);
    }

    /// Pop the history stack; lands on the search view when there is
    /// nowhere else to go.
    pub fn go_back(&mut self, ctx: &egui::Context) {
        self.route = self.history.pop().unwrap_or_else(|| Route::Search {
            query: self.search.query.clone(),
        });
        self.enter_current(ctx);
    }

    fn enter_current(&mut self, ctx: &egui::Context) {
        match self.route.clone() {
            Route::Home => {}
            Route::Search { query } => {
                self.search.start(&query, &self.client, &self.runtime, ctx);
            }
            Route::Package(name) => {
                self.details.start(&name, &self.client, &self.runtime, ctx);
            }
        }
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast_message = Some(message.into());
        self.toast_start = Some(std::time::Instant::now());
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            registry_url: self.registry_url.clone(),
        };
        settings.save(&self.data_dir);
    }
}
