//! Reusable UI components
//!
//! Standalone widgets for the dashboard page: metric cards, callout
//! panels and section headings.

use crate::data::{DeltaDirection, Scorecard, TextPanel};
use crate::theme;

/// Arrow glyph and color for a scorecard delta
pub fn delta_style(direction: DeltaDirection) -> (&'static str, egui::Color32) {
    match direction {
        DeltaDirection::Up => (egui_phosphor::regular::ARROW_UP, theme::STATUS_SUCCESS),
        DeltaDirection::Down => (egui_phosphor::regular::ARROW_DOWN, theme::STATUS_ERROR),
    }
}

/// Leading marker for list item `idx` (zero-based)
pub fn list_marker(numbered: bool, idx: usize) -> String {
    if numbered {
        format!("{}.", idx + 1)
    } else {
        "•".to_string()
    }
}

/// Scorecard with label, headline value and colored delta
pub fn metric_card(ui: &mut egui::Ui, card: &Scorecard) {
    let response = theme::metric_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.add(
            egui::Label::new(
                egui::RichText::new(format!("{}  {}", card.icon, card.label))
                    .size(theme::FONT_LABEL)
                    .color(theme::TEXT_MUTED),
            )
            .selectable(false),
        );
        ui.add(
            egui::Label::new(
                egui::RichText::new(card.value)
                    .size(theme::FONT_METRIC)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            )
            .selectable(false),
        );

        let (arrow, color) = delta_style(card.direction());
        egui::Frame::new()
            .fill(egui::Color32::from_rgba_unmultiplied(
                color.r(),
                color.g(),
                color.b(),
                24,
            ))
            .corner_radius(theme::RADIUS_LARGE)
            .inner_margin(egui::Margin::symmetric(6, 2))
            .show(ui, |ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(format!("{} {}", arrow, card.delta))
                            .size(theme::FONT_SECTION)
                            .color(color),
                    )
                    .selectable(false),
                );
            });
    });

    // Left accent strip
    let rect = response.response.rect;
    let strip = egui::Rect::from_min_size(
        rect.min,
        egui::vec2(theme::CARD_ACCENT_WIDTH, rect.height()),
    );
    ui.painter().rect_filled(
        strip,
        egui::CornerRadius {
            nw: theme::RADIUS_CARD as u8,
            sw: theme::RADIUS_CARD as u8,
            ne: 0,
            se: 0,
        },
        theme::ACCENT,
    );
}

/// Info / success callout with heading and a bold-lead list
pub fn text_panel(ui: &mut egui::Ui, panel: &TextPanel) {
    theme::callout_frame(panel.tone).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.add(
            egui::Label::new(
                egui::RichText::new(format!("{}  {}", panel.icon, panel.heading))
                    .size(theme::FONT_TITLE)
                    .strong()
                    .color(theme::tone_color(panel.tone)),
            )
            .selectable(false),
        );
        ui.add_space(theme::SPACING_MD);

        for (i, point) in panel.points.iter().enumerate() {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing.x = theme::SPACING_SM;
                ui.label(
                    egui::RichText::new(list_marker(panel.numbered, i))
                        .size(theme::FONT_BODY)
                        .color(theme::TEXT_MUTED),
                );
                ui.label(
                    egui::RichText::new(format!("{}:", point.lead))
                        .size(theme::FONT_BODY)
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                );
                ui.label(
                    egui::RichText::new(point.text)
                        .size(theme::FONT_BODY)
                        .color(theme::TEXT_SECONDARY),
                );
            });
            ui.add_space(theme::SPACING_SM);
        }
    });
}

/// Section heading above a tab's content
pub fn subheader(ui: &mut egui::Ui, text: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text)
                .size(theme::FONT_TITLE)
                .strong()
                .color(theme::TEXT_PRIMARY),
        )
        .selectable(false),
    );
    ui.add_space(theme::SPACING_MD);
}

/// Full-width 1px rule with vertical breathing room
pub fn divider(ui: &mut egui::Ui) {
    ui.add_space(theme::SPACING_LG);
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 1.0),
        egui::Sense::hover(),
    );
    ui.painter().rect_filled(rect, 0.0, theme::BORDER_SUBTLE);
    ui.add_space(theme::SPACING_LG);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SCORECARDS;

    #[test]
    fn test_delta_style() {
        let (arrow, color) = delta_style(SCORECARDS[0].direction());
        assert_eq!(arrow, egui_phosphor::regular::ARROW_DOWN);
        assert_eq!(color, theme::STATUS_ERROR);

        let (arrow, color) = delta_style(SCORECARDS[3].direction());
        assert_eq!(arrow, egui_phosphor::regular::ARROW_UP);
        assert_eq!(color, theme::STATUS_SUCCESS);
    }

    #[test]
    fn test_list_marker() {
        assert_eq!(list_marker(true, 0), "1.");
        assert_eq!(list_marker(true, 4), "5.");
        assert_eq!(list_marker(false, 2), "•");
    }
}
