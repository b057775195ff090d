//! Centralized theme constants for the churn dashboard
//! All colors, sizes, and styling should reference these constants

use crate::data::Tone;
use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x09, 0x09, 0x0b); // zinc-950
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x18, 0x18, 0x1b); // zinc-900
pub const BG_SURFACE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const BG_HOVER: Color32 = Color32::from_rgb(0x1f, 0x1f, 0x22);

// =============================================================================
// COLORS - Accent (Indigo / Purple)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x66, 0x7e, 0xea); // title indigo
pub const ACCENT_SECONDARY: Color32 = Color32::from_rgb(0x76, 0x4b, 0xa2); // subtitle purple
pub const ACCENT_TEXT: Color32 = Color32::from_rgb(0x0b, 0x10, 0x2e); // text on accent fill

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe4, 0xe4, 0xe7); // zinc-200
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xa1, 0xa1, 0xaa); // zinc-400
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x71, 0x71, 0x7a); // zinc-500

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x27, 0x27, 0x2a); // zinc-800
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0x3f, 0x3f, 0x46); // zinc-700

// =============================================================================
// COLORS - Status
// =============================================================================
pub const STATUS_SUCCESS: Color32 = Color32::from_rgb(0x34, 0xd3, 0x99); // emerald-400
pub const STATUS_INFO: Color32 = Color32::from_rgb(0x60, 0xa5, 0xfa); // blue-400
pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71); // red-400

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_DISPLAY: f32 = 32.0;
pub const FONT_TITLE: f32 = 18.0;
pub const FONT_HEADING: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SECTION: f32 = 12.0;
pub const FONT_SMALL: f32 = 11.0;
pub const FONT_CAPTION: f32 = 10.0;
pub const FONT_METRIC: f32 = 28.0;

// =============================================================================
// DIMENSIONS - Components
// =============================================================================
pub const TAB_HEIGHT: f32 = 32.0;
pub const TAB_MIN_WIDTH: f32 = 120.0;
pub const LOGO_SIZE: f32 = 40.0;
pub const CARD_ACCENT_WIDTH: f32 = 5.0;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_SMALL: f32 = 2.0;
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_LARGE: f32 = 8.0;
pub const RADIUS_CARD: f32 = 10.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_MEDIUM: f32 = 1.5;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;
pub const SPACING_XXL: f32 = 30.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: Color32::from_rgb(0x1a, 0x1a, 0x1e),
        extreme_bg_color: BG_BASE,
        faint_bg_color: BG_ELEVATED,
        hyperlink_color: ACCENT,
        selection: egui::style::Selection {
            bg_fill: Color32::from_rgb(0x3a, 0x3a, 0x3f),
            stroke: egui::Stroke::NONE,
        },
        widgets: egui::style::Widgets {
            noninteractive: egui::style::WidgetVisuals {
                bg_fill: BG_ELEVATED,
                weak_bg_fill: BG_SURFACE,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            inactive: egui::style::WidgetVisuals {
                bg_fill: Color32::TRANSPARENT,
                weak_bg_fill: BG_ELEVATED,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_SECONDARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            hovered: egui::style::WidgetVisuals {
                bg_fill: BG_HOVER,
                weak_bg_fill: Color32::from_rgb(0x30, 0x30, 0x35),
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_MEDIUM, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            ..egui::Visuals::dark().widgets
        },
        striped: false,
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        window_stroke: egui::Stroke::new(1.0, Color32::from_rgb(0x2a, 0x2a, 0x2e)),
        window_corner_radius: egui::CornerRadius::same(8),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.scroll.bar_width = 6.0;
        style.spacing.scroll.floating = false;
    });
}

// =============================================================================
// HELPER - Card frame
// =============================================================================
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(Color32::from_rgba_unmultiplied(0x18, 0x18, 0x1b, 150))
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_LG as i8))
}

/// Metric card: elevated fill, room on the left for the accent strip
pub fn metric_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_ELEVATED)
        .corner_radius(RADIUS_CARD)
        .inner_margin(egui::Margin {
            left: (SPACING_XL + CARD_ACCENT_WIDTH) as i8,
            right: SPACING_XL as i8,
            top: SPACING_XL as i8,
            bottom: SPACING_XL as i8,
        })
}

// =============================================================================
// HELPER - Callout frame (info / success panels)
// =============================================================================

/// Accent color for a callout tone
pub fn tone_color(tone: Tone) -> Color32 {
    match tone {
        Tone::Info => STATUS_INFO,
        Tone::Success => STATUS_SUCCESS,
    }
}

pub fn callout_frame(tone: Tone) -> egui::Frame {
    let c = tone_color(tone);
    egui::Frame::new()
        .fill(Color32::from_rgba_unmultiplied(c.r(), c.g(), c.b(), 18))
        .stroke(egui::Stroke::new(
            STROKE_DEFAULT,
            Color32::from_rgba_unmultiplied(c.r(), c.g(), c.b(), 70),
        ))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(egui::Margin::same(SPACING_XL as i8))
}

// =============================================================================
// HELPER - Tab button
// =============================================================================

/// Custom-painted tab. Returns true if clicked while inactive.
pub fn tab_button(ui: &mut egui::Ui, icon: &str, label: &str, active: bool) -> bool {
    let text = format!("{}  {}", icon, label);
    let font_id = egui::FontId::proportional(FONT_BODY);
    let text_width = ui.fonts(|f| {
        f.layout_no_wrap(text.clone(), font_id.clone(), TEXT_PRIMARY)
            .rect
            .width()
    });
    let width = (text_width + 2.0 * SPACING_XL).max(TAB_MIN_WIDTH);
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(width, TAB_HEIGHT), egui::Sense::click());

    if response.hovered() && !active {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    let painter = ui.painter();
    let (fill, draw_rect) = if active {
        (ACCENT, rect)
    } else {
        button_visual(&response, BG_ELEVATED, rect)
    };
    painter.rect_filled(draw_rect, RADIUS_DEFAULT, fill);
    let text_color = if active { ACCENT_TEXT } else { TEXT_SECONDARY };
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        text,
        font_id,
        text_color,
    );

    !active && response.clicked()
}

/// Returns (fill, draw_rect) for a custom-painted button with hover/press effects.
/// Lightens on hover, slightly lightens + shrinks on press.
pub fn button_visual(
    response: &egui::Response,
    base_fill: Color32,
    rect: egui::Rect,
) -> (Color32, egui::Rect) {
    if response.is_pointer_button_down_on() {
        (lighten(base_fill, 0.06), rect.shrink(1.5))
    } else if response.hovered() {
        (lighten(base_fill, 0.12), rect)
    } else {
        (base_fill, rect)
    }
}

fn lighten(c: Color32, amount: f32) -> Color32 {
    let r = (c.r() as f32 + (255.0 - c.r() as f32) * amount) as u8;
    let g = (c.g() as f32 + (255.0 - c.g() as f32) * amount) as u8;
    let b = (c.b() as f32 + (255.0 - c.b() as f32) * amount) as u8;
    Color32::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lighten() {
        assert_eq!(lighten(Color32::BLACK, 0.0), Color32::BLACK);
        assert_eq!(lighten(Color32::BLACK, 1.0), Color32::WHITE);
        let c = lighten(Color32::from_rgb(100, 100, 100), 0.5);
        assert_eq!(c, Color32::from_rgb(177, 177, 177));
    }

    #[test]
    fn test_tone_colors_differ() {
        assert_ne!(tone_color(Tone::Info), tone_color(Tone::Success));
    }
}
