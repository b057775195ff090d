//! Page rendering (header, scorecards, tabs, footer)

use super::App;
use crate::chart::bar_chart;
use crate::data;
use crate::theme;
use crate::types::{Panel, Tab, TabLayout};
use crate::ui::components::{divider, metric_card, subheader, text_panel};
use eframe::egui;
use tracing::warn;

impl App {
    /// Render the whole dashboard page top to bottom
    pub(crate) fn render_page(&mut self, ui: &mut egui::Ui) {
        self.render_header(ui);
        self.render_scorecards(ui);
        divider(ui);
        self.render_tab_bar(ui);
        ui.add_space(theme::SPACING_XL);
        self.render_tab_content(ui);
        divider(ui);
        self.render_footer(ui);
    }

    fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                // Center the logo + title row by padding from the left
                let title_width = ui.fonts(|f| {
                    f.layout_no_wrap(
                        data::TITLE.to_string(),
                        egui::FontId::proportional(theme::FONT_DISPLAY),
                        theme::ACCENT,
                    )
                    .rect
                    .width()
                });
                let row_width = theme::LOGO_SIZE + theme::SPACING_LG + title_width;
                ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));

                if let Some(texture) = self.logo(ui.ctx()) {
                    let sized = egui::load::SizedTexture::new(
                        texture.id(),
                        egui::vec2(theme::LOGO_SIZE, theme::LOGO_SIZE),
                    );
                    ui.image(sized);
                    ui.add_space(theme::SPACING_LG - ui.spacing().item_spacing.x);
                }
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(data::TITLE)
                            .size(theme::FONT_DISPLAY)
                            .strong()
                            .color(theme::ACCENT),
                    )
                    .selectable(false),
                );
            });
            ui.add_space(theme::SPACING_SM);
            ui.add(
                egui::Label::new(
                    egui::RichText::new(data::SUBTITLE)
                        .size(theme::FONT_TITLE)
                        .color(theme::ACCENT_SECONDARY),
                )
                .selectable(false),
            );
        });
        ui.add_space(theme::SPACING_XXL);
    }

    fn render_scorecards(&self, ui: &mut egui::Ui) {
        ui.columns(data::SCORECARDS.len(), |cols| {
            for (col, card) in cols.iter_mut().zip(data::SCORECARDS.iter()) {
                metric_card(col, card);
            }
        });
    }

    fn render_tab_bar(&mut self, ui: &mut egui::Ui) {
        let mut clicked = None;
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = theme::SPACING_SM;
            for tab in Tab::ALL {
                if theme::tab_button(ui, tab.icon(), tab.label(), tab == self.active_tab) {
                    clicked = Some(tab);
                }
            }
        });
        if let Some(tab) = clicked {
            self.select_tab(tab);
        }

        // Underline beneath the tab row
        let y = ui.min_rect().bottom() + theme::SPACING_SM;
        ui.painter().hline(
            ui.max_rect().x_range(),
            y,
            egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_SUBTLE),
        );
        ui.add_space(theme::SPACING_SM);
    }

    fn render_tab_content(&self, ui: &mut egui::Ui) {
        let tab = self.active_tab;
        subheader(ui, tab.heading());

        let panels = tab.panels();
        match tab.layout() {
            TabLayout::TwoByTwo => {
                for row in panels.chunks(2) {
                    ui.columns(2, |cols| {
                        for (col, panel) in cols.iter_mut().zip(row) {
                            render_panel(col, *panel);
                        }
                    });
                    ui.add_space(theme::SPACING_LG);
                }
            }
            TabLayout::MainAndSide => {
                debug_assert_eq!(panels.len(), 2, "{:?} needs a main and a side panel", tab);
                let (main, side) = match panels {
                    [main, side] => (*main, *side),
                    _ => {
                        warn!(tab = ?tab, panels = panels.len(), "Main/side layout needs two panels");
                        return;
                    }
                };
                ui.horizontal_top(|ui| {
                    let gap = ui.spacing().item_spacing.x;
                    let main_width = (ui.available_width() - gap) * 2.0 / 3.0;
                    ui.allocate_ui_with_layout(
                        egui::vec2(main_width, 0.0),
                        egui::Layout::top_down(egui::Align::Min),
                        |ui| {
                            ui.set_width(main_width);
                            render_panel(ui, main);
                        },
                    );
                    let side_width = ui.available_width();
                    ui.allocate_ui_with_layout(
                        egui::vec2(side_width, 0.0),
                        egui::Layout::top_down(egui::Align::Min),
                        |ui| {
                            ui.set_width(side_width);
                            render_panel(ui, side);
                        },
                    );
                });
            }
        }
    }

    fn render_footer(&self, ui: &mut egui::Ui) {
        ui.add(
            egui::Label::new(
                egui::RichText::new(format!(
                    "{}  {}",
                    egui_phosphor::regular::PUSH_PIN,
                    data::ABOUT_HEADING
                ))
                .size(theme::FONT_TITLE)
                .strong()
                .color(theme::TEXT_PRIMARY),
            )
            .selectable(false),
        );
        ui.add_space(theme::SPACING_SM);
        ui.label(
            egui::RichText::new(data::ABOUT_TEXT)
                .size(theme::FONT_BODY)
                .color(theme::TEXT_SECONDARY),
        );
        ui.add_space(theme::SPACING_MD);
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = theme::SPACING_SM;
            let bold = |s: &str| {
                egui::RichText::new(s)
                    .size(theme::FONT_LABEL)
                    .strong()
                    .color(theme::TEXT_PRIMARY)
            };
            let plain = |s: &str| {
                egui::RichText::new(s)
                    .size(theme::FONT_LABEL)
                    .color(theme::TEXT_MUTED)
            };
            ui.label(bold("Dataset:"));
            ui.label(plain(data::DATASET_NAME));
            ui.label(plain("|"));
            ui.label(bold("Last Updated:"));
            ui.label(plain(data::LAST_UPDATED));
        });
        ui.add_space(theme::SPACING_XL);
    }
}

fn render_panel(ui: &mut egui::Ui, panel: Panel) {
    match panel {
        Panel::Chart(id) => bar_chart(ui, &id.spec()),
        Panel::Insights | Panel::Recommendations => {
            if let Some(text) = panel.text() {
                text_panel(ui, text);
            }
        }
    }
}
