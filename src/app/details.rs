//! Package details view

use eframe::egui;
use tracing::warn;

use super::fetch::{new_slot, FetchState, ResultSlot};
use super::search::{render_centered_spinner, render_error_card};
use super::{App, Route};
use crate::constants::NPM_PACKAGE_URL;
use crate::registry::RegistryClient;
use crate::theme;
use crate::types::PackageDetails;
use crate::ui::components;
use crate::utils::normalize_repo_url;

pub(crate) const DETAILS_ERROR: &str = "Failed to load package details. Please try again.";

#[derive(Default)]
pub struct DetailsView {
    /// Package name this view was entered with
    pub name: String,
    pub state: FetchState<PackageDetails>,
    pub(crate) inflight: Option<ResultSlot<PackageDetails>>,
}

impl DetailsView {
    pub fn start(
        &mut self,
        name: &str,
        client: &RegistryClient,
        runtime: &tokio::runtime::Runtime,
        ctx: &egui::Context,
    ) {
        self.name = name.to_string();
        self.state = FetchState::Loading;
        let slot = new_slot();
        self.inflight = Some(slot.clone());

        let client = client.clone();
        let name = name.to_string();
        let ctx = ctx.clone();
        runtime.spawn(async move {
            let result = client.fetch_package(&name).await;
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
            Ok(details) => self.state = FetchState::Loaded(details),
            Err(e) => {
                warn!(error = %e, package = %self.name, "Package lookup failed");
                self.state = FetchState::Failed(DETAILS_ERROR.to_string());
            }
        }
    }
}

// ============================================================================
// RENDERING
// ============================================================================

impl App {
    pub fn render_details(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        self.details.poll();

        let mut open_package: Option<String> = None;
        let mut go_back = false;
        let mut copied = false;

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(theme::CONTENT_MAX_WIDTH);
                ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                    ui.add_space(theme::SPACING_LG);

                    let back = ui.add(
                        egui::Button::new(
                            egui::RichText::new(format!(
                                "{}  Back to Search",
                                egui_phosphor::regular::ARROW_LEFT
                            ))
                            .color(theme::ACCENT),
                        )
                        .frame(false),
                    );
                    if back.clicked() {
                        go_back = true;
                    }
                    ui.add_space(theme::SPACING_MD);

                    match &self.details.state {
                        FetchState::Loading => {
                            render_centered_spinner(ui, "Loading package details...");
                        }
                        FetchState::Failed(msg) => {
                            theme::error_frame().show(ui, |ui| {
                                ui.set_width(ui.available_width());
                                ui.vertical_centered(|ui| {
                                    ui.add(
                                        egui::Label::new(
                                            egui::RichText::new(egui_phosphor::regular::WARNING)
                                                .size(48.0)
                                                .color(theme::STATUS_ERROR),
                                        )
                                        .selectable(false),
                                    );
                                    ui.add_space(theme::SPACING_SM);
                                    ui.add(
                                        egui::Label::new(
                                            egui::RichText::new("Package Not Found")
                                                .size(theme::FONT_PAGE_TITLE)
                                                .strong()
                                                .color(theme::STATUS_ERROR),
                                        )
                                        .selectable(false),
                                    );
                                    ui.add(
                                        egui::Label::new(
                                            egui::RichText::new(msg).color(theme::TEXT_SECONDARY),
                                        )
                                        .selectable(false),
                                    );
                                });
                            });
                        }
                        FetchState::Idle => {
                            render_error_card(ui, DETAILS_ERROR);
                        }
                        FetchState::Loaded(pkg) => {
                            render_package(ui, ctx, pkg, &mut open_package, &mut copied);
                        }
                    }

                    ui.add_space(theme::SPACING_XL);
                });
            });
        });

        if copied {
            self.show_toast("Install command copied");
        }
        if go_back {
            self.go_back(ctx);
        } else if let Some(name) = open_package {
            self.navigate(ctx, Route::Package(name));
        }
    }
}

fn render_package(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    pkg: &PackageDetails,
    open_package: &mut Option<String>,
    copied: &mut bool,
) {
    // Header card
    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.horizontal(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(&pkg.name)
                        .size(28.0)
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                )
                .selectable(false),
            );
            if let Some(version) = pkg.latest_version() {
                components::version_badge(ui, version);
            }
        });

        ui.add_space(theme::SPACING_SM);
        ui.add(
            egui::Label::new(
                egui::RichText::new(
                    pkg.description.as_deref().unwrap_or("No description available"),
                )
                .size(theme::FONT_HEADING)
                .color(theme::TEXT_SECONDARY),
            )
            .selectable(false),
        );

        ui.add_space(theme::SPACING_MD);
        ui.horizontal_wrapped(|ui| {
            if let Some(author) = &pkg.author {
                components::meta_item(ui, egui_phosphor::regular::USER, author.name());
            }
            components::meta_item(
                ui,
                egui_phosphor::regular::CALENDAR_BLANK,
                &format!("Created {}", components::format_date(pkg.created())),
            );
            components::meta_item(
                ui,
                egui_phosphor::regular::TAG,
                &format!("Updated {}", components::format_date(pkg.modified())),
            );
            if let Some(license) = &pkg.license {
                components::meta_item(ui, egui_phosphor::regular::SCALES, license);
            }
        });

        if !pkg.keywords.is_empty() {
            ui.add_space(theme::SPACING_MD);
            ui.horizontal_wrapped(|ui| {
                for keyword in &pkg.keywords {
                    components::keyword_chip(ui, keyword);
                }
            });
        }

        // Install command with copy-to-clipboard
        ui.add_space(theme::SPACING_MD);
        let install_cmd = format!("npm install {}", pkg.name);
        egui::Frame::new()
            .fill(theme::BG_TERMINAL)
            .corner_radius(theme::RADIUS_DEFAULT)
            .inner_margin(egui::Margin::symmetric(12, 8))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new("Install")
                                    .size(theme::FONT_SMALL)
                                    .color(theme::TEXT_DIM),
                            )
                            .selectable(false),
                        );
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(&install_cmd)
                                    .monospace()
                                    .color(theme::STATUS_SUCCESS),
                            )
                            .selectable(false),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let copy = ui
                            .add(
                                egui::Button::new(
                                    egui::RichText::new(egui_phosphor::regular::COPY)
                                        .color(theme::TEXT_MUTED),
                                )
                                .frame(false),
                            )
                            .on_hover_text("Copy to clipboard");
                        if copy.clicked() {
                            ctx.copy_text(install_cmd.clone());
                            *copied = true;
                        }
                    });
                });
            });

        // External links
        ui.add_space(theme::SPACING_MD);
        ui.horizontal_wrapped(|ui| {
            if ui
                .add(theme::button_accent(format!(
                    "{}  View on npm",
                    egui_phosphor::regular::ARROW_SQUARE_OUT
                )))
                .clicked()
            {
                let _ = open::that(format!("{}/{}", NPM_PACKAGE_URL, pkg.name));
            }
            if let Some(homepage) = &pkg.homepage {
                if ui
                    .add(theme::button_outline(format!(
                        "{}  Homepage",
                        egui_phosphor::regular::HOUSE
                    )))
                    .clicked()
                {
                    let _ = open::that(homepage);
                }
            }
            if let Some(repo_url) = pkg.repository.as_ref().and_then(|r| r.url()) {
                if ui
                    .add(theme::button_outline(format!(
                        "{}  Repository",
                        egui_phosphor::regular::GITHUB_LOGO
                    )))
                    .clicked()
                {
                    let _ = open::that(normalize_repo_url(repo_url));
                }
            }
            if let Some(bugs_url) = pkg.bugs.as_ref().and_then(|b| b.url()) {
                if ui
                    .add(theme::button_outline(format!(
                        "{}  Issues",
                        egui_phosphor::regular::BUG
                    )))
                    .clicked()
                {
                    let _ = open::that(bugs_url);
                }
            }
        });
    });

    ui.add_space(theme::SPACING_MD);

    ui.columns(2, |cols| {
        render_dependencies(&mut cols[0], pkg, open_package);
        render_sidebar(&mut cols[1], pkg);
    });
}

fn render_dependencies(ui: &mut egui::Ui, pkg: &PackageDetails, open_package: &mut Option<String>) {
    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.add(
            egui::Label::new(
                egui::RichText::new("Dependencies")
                    .size(theme::FONT_TITLE)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            )
            .selectable(false),
        );
        ui.add_space(theme::SPACING_SM);

        match pkg.latest_dependencies() {
            Some(deps) if !deps.is_empty() => {
                let mut entries: Vec<(&String, &String)> = deps.iter().collect();
                entries.sort_by_key(|(name, _)| *name);

                for (name, range) in entries.iter().take(10) {
                    ui.horizontal(|ui| {
                        let link = components::link_label(
                            ui,
                            egui::RichText::new(name.as_str()).size(theme::FONT_BODY),
                        );
                        if link.clicked() {
                            *open_package = Some(name.to_string());
                        }
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.add(
                                egui::Label::new(
                                    egui::RichText::new(range.as_str())
                                        .monospace()
                                        .size(theme::FONT_LABEL)
                                        .color(theme::TEXT_DIM),
                                )
                                .selectable(false),
                            );
                        });
                    });
                }
                if entries.len() > 10 {
                    ui.add_space(theme::SPACING_SM);
                    ui.vertical_centered(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(format!(
                                    "+{} more dependencies",
                                    entries.len() - 10
                                ))
                                .size(theme::FONT_LABEL)
                                .color(theme::TEXT_DIM),
                            )
                            .selectable(false),
                        );
                    });
                }
            }
            _ => {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("No runtime dependencies")
                            .size(theme::FONT_LABEL)
                            .color(theme::TEXT_DIM),
                    )
                    .selectable(false),
                );
            }
        }
    });
}

fn render_sidebar(ui: &mut egui::Ui, pkg: &PackageDetails) {
    if !pkg.maintainers.is_empty() {
        theme::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.add(
                egui::Label::new(
                    egui::RichText::new("Maintainers")
                        .size(theme::FONT_TITLE)
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                )
                .selectable(false),
            );
            ui.add_space(theme::SPACING_SM);

            for maintainer in pkg.maintainers.iter().take(5) {
                ui.horizontal(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(egui_phosphor::regular::USER)
                                .color(theme::TEXT_DIM),
                        )
                        .selectable(false),
                    );
                    ui.vertical(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(maintainer.name())
                                    .color(theme::TEXT_PRIMARY),
                            )
                            .selectable(false),
                        );
                        if let Some(email) = maintainer.email() {
                            ui.add(
                                egui::Label::new(
                                    egui::RichText::new(email)
                                        .size(theme::FONT_LABEL)
                                        .color(theme::TEXT_DIM),
                                )
                                .selectable(false),
                            );
                        }
                    });
                });
            }
        });
        ui.add_space(theme::SPACING_MD);
    }

    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.add(
            egui::Label::new(
                egui::RichText::new("Recent Versions")
                    .size(theme::FONT_TITLE)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            )
            .selectable(false),
        );
        ui.add_space(theme::SPACING_SM);

        let recent = pkg.recent_versions();
        if recent.is_empty() {
            ui.add(
                egui::Label::new(
                    egui::RichText::new("No published versions")
                        .size(theme::FONT_LABEL)
                        .color(theme::TEXT_DIM),
                )
                .selectable(false),
            );
        }
        for (version, timestamp) in recent.iter().copied().take(5) {
            ui.horizontal(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(version)
                            .monospace()
                            .size(theme::FONT_LABEL)
                            .color(theme::TEXT_SECONDARY),
                    )
                    .selectable(false),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(components::format_date(Some(timestamp)))
                                .size(theme::FONT_SMALL)
                                .color(theme::TEXT_DIM),
                        )
                        .selectable(false),
                    );
                });
            });
        }
    });
}
