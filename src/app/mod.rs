//! App module - contains the main application state

mod views;

use crate::settings::Settings;
use crate::theme;
use crate::types::Tab;
use crate::utils;
use eframe::egui;
use std::path::PathBuf;
use tracing::{debug, warn};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) active_tab: Tab,
    pub(crate) logo_texture: Option<egui::TextureHandle>,
    pub(crate) logo_failed: bool,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Apply theme from theme.rs
        theme::apply_visuals(&cc.egui_ctx);

        Self::from_settings(&settings, data_dir)
    }

    /// State restored from saved settings. Only window geometry carries
    /// over; every session opens on the Overview tab.
    fn from_settings(settings: &Settings, data_dir: PathBuf) -> Self {
        Self {
            active_tab: Tab::Overview,
            logo_texture: None,
            logo_failed: false,
            window_pos: settings.window_pos(),
            window_size: settings.window_size(),
            needs_center: false,
            data_dir,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
        };
        settings.save(&self.data_dir);
    }

    pub fn select_tab(&mut self, tab: Tab) {
        if tab != self.active_tab {
            debug!(from = ?self.active_tab, to = ?tab, "Tab switched");
            self.active_tab = tab;
        }
    }

    /// Header logo, rasterized once on first use
    pub(crate) fn logo(&mut self, ctx: &egui::Context) -> Option<&egui::TextureHandle> {
        if self.logo_texture.is_none() && !self.logo_failed {
            match utils::rasterize_logo((theme::LOGO_SIZE * 2.0) as u32) {
                Some((pixels, w, h)) => {
                    self.logo_texture = Some(ctx.load_texture(
                        "logo",
                        egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &pixels),
                        egui::TextureOptions::LINEAR,
                    ));
                }
                None => {
                    warn!("Logo unavailable, rendering header without it");
                    self.logo_failed = true;
                }
            }
        }
        self.logo_texture.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(data_dir: PathBuf) -> App {
        App::from_settings(&Settings::default(), data_dir)
    }

    #[test]
    fn test_select_tab() {
        let mut app = app(PathBuf::from("."));
        app.select_tab(Tab::Predictors);
        assert_eq!(app.active_tab, Tab::Predictors);
        app.select_tab(Tab::Predictors);
        assert_eq!(app.active_tab, Tab::Predictors);
    }

    #[test]
    fn test_save_settings_restores_geometry() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path().to_path_buf());
        app.window_pos = Some(egui::pos2(10.0, 20.0));
        app.window_size = Some(egui::vec2(1400.0, 900.0));
        app.save_settings();

        let restored = App::from_settings(&Settings::load(dir.path()), PathBuf::from("."));
        assert_eq!(restored.window_pos, Some(egui::pos2(10.0, 20.0)));
        assert_eq!(restored.window_size, Some(egui::vec2(1400.0, 900.0)));
    }

    #[test]
    fn test_new_session_opens_on_overview() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(dir.path().to_path_buf());
        app.select_tab(Tab::Predictors);
        app.save_settings();

        let restored = App::from_settings(&Settings::load(dir.path()), PathBuf::from("."));
        assert_eq!(restored.active_tab, Tab::Overview);
    }
}
