//! Search view - query-driven results list

use eframe::egui;
use tracing::warn;

use super::fetch::{new_slot, FetchState, ResultSlot};
use super::{App, Route};
use crate::constants::SEARCH_PAGE_SIZE;
use crate::registry::RegistryClient;
use crate::theme;
use crate::types::PackageSummary;
use crate::ui::components;

pub(crate) const SEARCH_ERROR: &str = "Failed to search packages. Please try again.";

#[derive(Default)]
pub struct SearchView {
    /// Query this view was entered with, verbatim
    pub query: String,
    pub state: FetchState<Vec<PackageSummary>>,
    pub(crate) inflight: Option<ResultSlot<Vec<PackageSummary>>>,
}

impl SearchView {
    /// Kick off a search for the route's query. An empty trimmed query
    /// never touches the network; it clears previous results and any
    /// prior error instead.
    pub fn start(
        &mut self,
        query: &str,
        client: &RegistryClient,
        runtime: &tokio::runtime::Runtime,
        ctx: &egui::Context,
    ) {
        self.query = query.to_string();
        let trimmed = query.trim().to_string();
        if trimmed.is_empty() {
            self.state = FetchState::Idle;
            self.inflight = None;
            return;
        }

        self.state = FetchState::Loading;
        let slot = new_slot();
        self.inflight = Some(slot.clone());

        let client = client.clone();
        let ctx = ctx.clone();
        runtime.spawn(async move {
            let result = client.search(&trimmed, SEARCH_PAGE_SIZE).await;
            *slot.lock().unwrap() = Some(result);
            ctx.request_repaint();
        });
    }

    /// Apply a completed request, if one has landed
    pub fn poll(&mut self) {
        let Some(slot) = &self.inflight else { return };
        let Some(result) = slot.lock().unwrap().take() else { return };
        self.inflight = None;
        match result {
            Ok(packages) => self.state = FetchState::Loaded(packages),
            Err(e) => {
                warn!(error = %e, query = %self.query, "Search request failed");
                self.state = FetchState::Failed(SEARCH_ERROR.to_string());
            }
        }
    }
}

// ============================================================================
// RENDERING
// ============================================================================

impl App {
    pub fn render_search(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        self.search.poll();

        let mut open_package: Option<String> = None;

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(theme::CONTENT_MAX_WIDTH);
                ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                    ui.add_space(theme::SPACING_XL);

                    let heading = if self.search.query.trim().is_empty() {
                        "Search Packages".to_string()
                    } else {
                        format!("Search Results for \"{}\"", self.search.query.trim())
                    };
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(heading)
                                .size(theme::FONT_PAGE_TITLE)
                                .strong()
                                .color(theme::TEXT_PRIMARY),
                        )
                        .selectable(false),
                    );
                    if let FetchState::Loaded(packages) = &self.search.state {
                        if !packages.is_empty() {
                            ui.add(
                                egui::Label::new(
                                    egui::RichText::new(format!("Found {} packages", packages.len()))
                                        .color(theme::TEXT_MUTED),
                                )
                                .selectable(false),
                            );
                        }
                    }
                    ui.add_space(theme::SPACING_LG);

                    match &self.search.state {
                        FetchState::Loading => {
                            render_centered_spinner(ui, "Searching packages...");
                        }
                        FetchState::Failed(msg) => {
                            render_error_card(ui, msg);
                        }
                        FetchState::Loaded(packages) if packages.is_empty() => {
                            render_centered_status(
                                ui,
                                egui_phosphor::regular::MAGNIFYING_GLASS,
                                "No packages found",
                                "Try adjusting your search terms or browse popular packages.",
                            );
                        }
                        FetchState::Loaded(packages) => {
                            for pkg in packages {
                                render_result_card(ui, pkg, &mut open_package);
                            }
                        }
                        FetchState::Idle => {
                            render_centered_status(
                                ui,
                                egui_phosphor::regular::MAGNIFYING_GLASS,
                                "Start searching",
                                "Use the search bar above to find npm packages.",
                            );
                        }
                    }

                    ui.add_space(theme::SPACING_XL);
                });
            });
        });

        if let Some(name) = open_package {
            self.navigate(ctx, Route::Package(name));
        }
    }
}

fn render_result_card(ui: &mut egui::Ui, pkg: &PackageSummary, open_package: &mut Option<String>) {
    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal_top(|ui| {
            let button_col = 120.0;
            ui.vertical(|ui| {
                ui.set_width(ui.available_width() - button_col);

                ui.horizontal(|ui| {
                    let name = components::link_label(
                        ui,
                        egui::RichText::new(&pkg.name).size(theme::FONT_TITLE).strong(),
                    );
                    if name.clicked() {
                        *open_package = Some(pkg.name.clone());
                    }
                    components::version_badge(ui, &pkg.version);
                });

                ui.add(
                    egui::Label::new(
                        egui::RichText::new(
                            pkg.description.as_deref().unwrap_or("No description available"),
                        )
                        .color(theme::TEXT_SECONDARY),
                    )
                    .selectable(false),
                );

                ui.add_space(theme::SPACING_SM);
                ui.horizontal_wrapped(|ui| {
                    if let Some(author) = &pkg.author {
                        components::meta_item(ui, egui_phosphor::regular::USER, author.name());
                    }
                    components::meta_item(
                        ui,
                        egui_phosphor::regular::CALENDAR_BLANK,
                        &components::format_date(pkg.date.as_deref()),
                    );
                    if let Some(publisher) = &pkg.publisher {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(format!("Published by {}", publisher.username))
                                    .size(theme::FONT_LABEL)
                                    .color(theme::TEXT_DIM),
                            )
                            .selectable(false),
                        );
                    }
                });

                if let Some(keywords) = &pkg.keywords {
                    if !keywords.is_empty() {
                        ui.add_space(theme::SPACING_SM);
                        ui.horizontal_wrapped(|ui| {
                            for keyword in keywords.iter().take(5) {
                                components::keyword_chip(ui, keyword);
                            }
                            if keywords.len() > 5 {
                                components::chip(
                                    ui,
                                    &format!("+{} more", keywords.len() - 5),
                                    theme::CHIP_MORE_BG,
                                    theme::CHIP_MORE_TEXT,
                                );
                            }
                        });
                    }
                }
            });

            ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                if let Some(npm) = &pkg.links.npm {
                    if ui
                        .add(theme::button_accent(format!(
                            "{}  npm",
                            egui_phosphor::regular::ARROW_SQUARE_OUT
                        )))
                        .clicked()
                    {
                        let _ = open::that(npm);
                    }
                }
                if let Some(homepage) = &pkg.links.homepage {
                    if ui
                        .add(theme::button_outline(format!(
                            "{}  Website",
                            egui_phosphor::regular::GLOBE
                        )))
                        .clicked()
                    {
                        let _ = open::that(homepage);
                    }
                }
            });
        });
    });
    ui.add_space(theme::SPACING_MD);
}

pub(crate) fn render_centered_spinner(ui: &mut egui::Ui, label: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.add(egui::Spinner::new().size(32.0).color(theme::ACCENT));
        ui.add_space(theme::SPACING_MD);
        ui.add(
            egui::Label::new(
                egui::RichText::new(label)
                    .size(theme::FONT_HEADING)
                    .color(theme::TEXT_MUTED),
            )
            .selectable(false),
        );
    });
}

pub(crate) fn render_centered_status(ui: &mut egui::Ui, icon: &str, title: &str, hint: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.add(
            egui::Label::new(egui::RichText::new(icon).size(48.0).color(theme::TEXT_DIM))
                .selectable(false),
        );
        ui.add_space(theme::SPACING_MD);
        ui.add(
            egui::Label::new(
                egui::RichText::new(title)
                    .size(theme::FONT_HEADING)
                    .color(theme::TEXT_MUTED),
            )
            .selectable(false),
        );
        ui.add_space(theme::SPACING_SM);
        ui.add(
            egui::Label::new(
                egui::RichText::new(hint)
                    .size(theme::FONT_LABEL)
                    .color(theme::TEXT_DIM),
            )
            .selectable(false),
        );
    });
}

pub(crate) fn render_error_card(ui: &mut egui::Ui, message: &str) {
    theme::error_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(egui_phosphor::regular::WARNING)
                        .size(24.0)
                        .color(theme::STATUS_ERROR),
                )
                .selectable(false),
            );
            ui.vertical(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Error")
                            .size(theme::FONT_HEADING)
                            .strong()
                            .color(theme::STATUS_ERROR),
                    )
                    .selectable(false),
                );
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(message).color(theme::TEXT_SECONDARY),
                    )
                    .selectable(false),
                );
            });
        });
    });
}
