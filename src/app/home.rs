//! Home view - hero, stats, and feature highlights

use eframe::egui;

use super::{App, Route};
use crate::constants::DOCS_URL;
use crate::theme;
use crate::ui::components;
use crate::utils::rasterize_logo;

impl App {
    pub fn render_home(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let mut explore = false;
        let mut submitted = false;

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(theme::CONTENT_MAX_WIDTH);

                // Hero
                ui.add_space(48.0);
                let texture = self.logo_texture.get_or_insert_with(|| {
                    let (pixels, w, h) = rasterize_logo(192);
                    ctx.load_texture(
                        "logo",
                        egui::ColorImage::from_rgba_unmultiplied(
                            [w as usize, h as usize],
                            &pixels,
                        ),
                        egui::TextureOptions::LINEAR,
                    )
                });
                ui.image(egui::load::SizedTexture::new(
                    texture.id(),
                    egui::vec2(96.0, 96.0),
                ));

                ui.add_space(theme::SPACING_XL);
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Build amazing things")
                            .size(theme::FONT_HERO)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    )
                    .selectable(false),
                );
                ui.add_space(theme::SPACING_MD);
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(
                            "Search and explore over two million packages from the \
                             world's largest software registry.",
                        )
                        .size(theme::FONT_HEADING)
                        .color(theme::TEXT_MUTED),
                    )
                    .selectable(false),
                );

                ui.add_space(theme::SPACING_XL);
                ui.allocate_ui_with_layout(
                    egui::vec2(520.0, 44.0),
                    egui::Layout::top_down(egui::Align::Min),
                    |ui| {
                        let mut focus = false;
                        if components::search_input(ui, "home_search", &mut self.home_query, &mut focus)
                        {
                            submitted = true;
                        }
                    },
                );
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Search over 2 million packages")
                            .size(theme::FONT_LABEL)
                            .color(theme::TEXT_DIM),
                    )
                    .selectable(false),
                );

                ui.add_space(theme::SPACING_XL);
                ui.allocate_ui_with_layout(
                    egui::vec2(360.0, 40.0),
                    egui::Layout::left_to_right(egui::Align::Center),
                    |ui| {
                        if ui
                            .add(theme::button_accent(format!(
                                "{}  Explore Packages",
                                egui_phosphor::regular::ROCKET_LAUNCH
                            )))
                            .clicked()
                        {
                            explore = true;
                        }
                        if ui
                            .add(theme::button_outline(format!(
                                "{}  Documentation",
                                egui_phosphor::regular::CODE
                            )))
                            .clicked()
                        {
                            let _ = open::that(DOCS_URL);
                        }
                    },
                );

                // Stats
                ui.add_space(48.0);
                ui.columns(3, |cols| {
                    render_stat(
                        &mut cols[0],
                        egui_phosphor::regular::DOWNLOAD_SIMPLE,
                        "2M+",
                        "Packages",
                    );
                    render_stat(
                        &mut cols[1],
                        egui_phosphor::regular::USERS,
                        "17M+",
                        "Developers",
                    );
                    render_stat(
                        &mut cols[2],
                        egui_phosphor::regular::GLOBE,
                        "40B+",
                        "Downloads/Month",
                    );
                });

                // Features
                ui.add_space(40.0);
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Why developers choose npm")
                            .size(theme::FONT_PAGE_TITLE)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    )
                    .selectable(false),
                );
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(
                            "The world's largest software registry with packages for every need",
                        )
                        .color(theme::TEXT_MUTED),
                    )
                    .selectable(false),
                );
                ui.add_space(theme::SPACING_XL);
                ui.columns(3, |cols| {
                    render_feature(
                        &mut cols[0],
                        egui_phosphor::regular::SHIELD_CHECK,
                        "Secure",
                        "Built-in security features and vulnerability scanning to keep your projects safe.",
                    );
                    render_feature(
                        &mut cols[1],
                        egui_phosphor::regular::ROCKET_LAUNCH,
                        "Fast",
                        "Lightning-fast package installation and dependency resolution.",
                    );
                    render_feature(
                        &mut cols[2],
                        egui_phosphor::regular::USERS,
                        "Community",
                        "Join millions of developers sharing and discovering packages.",
                    );
                });

                // Footer call-to-action
                ui.add_space(40.0);
                egui::Frame::new()
                    .fill(theme::BTN_ACCENT)
                    .corner_radius(theme::RADIUS_LARGE)
                    .inner_margin(egui::Margin::same(24))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.vertical_centered(|ui| {
                            ui.add(
                                egui::Label::new(
                                    egui::RichText::new("Ready to get started?")
                                        .size(theme::FONT_PAGE_TITLE)
                                        .strong()
                                        .color(egui::Color32::WHITE),
                                )
                                .selectable(false),
                            );
                            ui.add(
                                egui::Label::new(
                                    egui::RichText::new(
                                        "Join the millions of developers who rely on npm to \
                                         build amazing things.",
                                    )
                                    .color(egui::Color32::from_rgb(0xfe, 0xe2, 0xe2)),
                                )
                                .selectable(false),
                            );
                            ui.add_space(theme::SPACING_MD);
                            let start = ui.add(
                                egui::Button::new(
                                    egui::RichText::new(format!(
                                        "{}  Start Exploring",
                                        egui_phosphor::regular::ROCKET_LAUNCH
                                    ))
                                    .color(theme::BTN_ACCENT),
                                )
                                .fill(egui::Color32::WHITE)
                                .corner_radius(theme::RADIUS_DEFAULT),
                            );
                            if start.clicked() {
                                explore = true;
                            }
                        });
                    });

                ui.add_space(theme::SPACING_XL);
            });
        });

        if submitted {
            let query = self.home_query.trim().to_string();
            self.navigate(ctx, Route::Search { query });
        } else if explore {
            self.navigate(ctx, Route::Search { query: String::new() });
        }
    }
}

fn render_stat(ui: &mut egui::Ui, icon: &str, value: &str, label: &str) {
    ui.vertical_centered(|ui| {
        ui.add(
            egui::Label::new(egui::RichText::new(icon).size(32.0).color(theme::ACCENT))
                .selectable(false),
        );
        ui.add(
            egui::Label::new(
                egui::RichText::new(value)
                    .size(theme::FONT_PAGE_TITLE)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            )
            .selectable(false),
        );
        ui.add(
            egui::Label::new(egui::RichText::new(label).color(theme::TEXT_MUTED))
                .selectable(false),
        );
    });
}

fn render_feature(ui: &mut egui::Ui, icon: &str, title: &str, body: &str) {
    theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.add(
            egui::Label::new(egui::RichText::new(icon).size(24.0).color(theme::ACCENT))
                .selectable(false),
        );
        ui.add(
            egui::Label::new(
                egui::RichText::new(title)
                    .size(theme::FONT_HEADING)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            )
            .selectable(false),
        );
        ui.add(
            egui::Label::new(
                egui::RichText::new(body)
                    .size(theme::FONT_LABEL)
                    .color(theme::TEXT_MUTED),
            )
            .selectable(false),
        );
    });
}
