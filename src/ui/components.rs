//! Reusable UI components
//!
//! Standalone widgets shared by the header and the views: the search
//! input, chips/badges, link-styled labels, and date formatting.

use crate::theme;
use eframe::egui;

/// Search input with icon, hint text, and a submit button shown while the
/// term is non-empty. Returns true when submitted (Enter or button) with a
/// non-empty trimmed term.
pub fn search_input(
    ui: &mut egui::Ui,
    id_salt: &str,
    term: &mut String,
    focus: &mut bool,
) -> bool {
    let mut submitted = false;

    egui::Frame::new()
        .fill(theme::BG_INPUT)
        .stroke(egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_SUBTLE))
        .corner_radius(theme::RADIUS_DEFAULT)
        .inner_margin(egui::Margin::symmetric(8, 6))
        .show(ui, |ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            ui.horizontal(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(egui_phosphor::regular::MAGNIFYING_GLASS)
                            .size(14.0)
                            .color(theme::TEXT_DIM),
                    )
                    .selectable(false),
                );

                // Reserve room for the submit button while it is visible
                let button_room = if term.is_empty() { 0.0 } else { 72.0 };
                let search_id = ui.make_persistent_id(id_salt);
                let response = ui.add(
                    egui::TextEdit::singleline(term)
                        .id(search_id)
                        .hint_text("Search packages...")
                        .frame(false)
                        .desired_width(ui.available_width() - button_room),
                );
                if *focus {
                    *focus = false;
                    response.request_focus();
                }
                if response.lost_focus()
                    && ui.input(|i| i.key_pressed(egui::Key::Enter))
                    && !term.trim().is_empty()
                {
                    submitted = true;
                }

                if !term.is_empty() {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.add(theme::button_accent("Search")).clicked()
                            && !term.trim().is_empty()
                        {
                            submitted = true;
                        }
                    });
                }
            });
        });

    submitted
}

/// Small rounded pill with custom colors
pub fn chip(ui: &mut egui::Ui, text: &str, bg: egui::Color32, fg: egui::Color32) {
    egui::Frame::new()
        .fill(bg)
        .corner_radius(theme::RADIUS_CHIP)
        .inner_margin(egui::Margin::symmetric(8, 3))
        .show(ui, |ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(text)
                        .size(theme::FONT_SMALL)
                        .color(fg),
                )
                .selectable(false),
            );
        });
}

pub fn keyword_chip(ui: &mut egui::Ui, text: &str) {
    chip(ui, text, theme::CHIP_KEYWORD_BG, theme::CHIP_KEYWORD_TEXT);
}

pub fn version_badge(ui: &mut egui::Ui, version: &str) {
    chip(
        ui,
        &format!("v{version}"),
        theme::BADGE_VERSION_BG,
        theme::BADGE_VERSION_TEXT,
    );
}

/// Accent-colored clickable label, used for package-name links
pub fn link_label(ui: &mut egui::Ui, text: egui::RichText) -> egui::Response {
    let response = ui.add(
        egui::Label::new(text.color(theme::ACCENT))
            .sense(egui::Sense::click())
            .selectable(false),
    );
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response
}

/// Icon + label row in muted text, for metadata lines
pub fn meta_item(ui: &mut egui::Ui, icon: &str, text: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(format!("{icon}  {text}"))
                .size(theme::FONT_LABEL)
                .color(theme::TEXT_MUTED),
        )
        .selectable(false),
    );
}

/// Format an RFC 3339 registry timestamp as e.g. "Mar 21, 2018",
/// returning "N/A" for missing or unparseable dates
pub fn format_date(date: Option<&str>) -> String {
    date.and_then(|d| chrono::DateTime::parse_from_rfc3339(d).ok())
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}
