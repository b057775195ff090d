//! Bar chart definitions and rendering
//!
//! Each lookup table gets a [`ChartSpec`]. [`plot_bars`] turns a spec into
//! `egui_plot` bars; [`bar_chart`] shows them with axis labels, value text
//! and a painted colorbar.

use crate::data::{self, Table};
use crate::theme;
use crate::utils::format_count;
use egui::{Align2, Color32, FontId, Rect};
use egui_plot::{BarChart, GridInput, GridMark, Plot, PlotPoint, Text};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Categories along x, values grow upward
    Vertical,
    /// Categories along y (first bar at the bottom), values grow rightward
    Horizontal,
}

/// Text format for bar value labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// One decimal with a percent sign, e.g. `16.2%`
    Percent1,
    /// Three decimals, e.g. `0.245`
    Decimal3,
}

impl ValueFormat {
    pub fn format(self, value: f64) -> String {
        match self {
            ValueFormat::Percent1 => format!("{:.1}%", value),
            ValueFormat::Decimal3 => format!("{:.3}", value),
        }
    }
}

// =============================================================================
// COLOR SCALES
// =============================================================================

/// Sequential color scales used for continuous bar coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScale {
    /// Red-Yellow-Green, reversed (low = green, high = red)
    RdYlGnR,
    Blues,
    Purples,
    Reds,
    Greens,
    Viridis,
}

const RD_YL_GN: &[[u8; 3]] = &[
    [165, 0, 38],
    [215, 48, 39],
    [244, 109, 67],
    [253, 174, 97],
    [254, 224, 139],
    [255, 255, 191],
    [217, 239, 139],
    [166, 217, 106],
    [102, 189, 99],
    [26, 152, 80],
    [0, 104, 55],
];

const BLUES: &[[u8; 3]] = &[
    [247, 251, 255],
    [222, 235, 247],
    [198, 219, 239],
    [158, 202, 225],
    [107, 174, 214],
    [66, 146, 198],
    [33, 113, 181],
    [8, 81, 156],
    [8, 48, 107],
];

const PURPLES: &[[u8; 3]] = &[
    [252, 251, 253],
    [239, 237, 245],
    [218, 218, 235],
    [188, 189, 220],
    [158, 154, 200],
    [128, 125, 186],
    [106, 81, 163],
    [84, 39, 143],
    [63, 0, 125],
];

const REDS: &[[u8; 3]] = &[
    [255, 245, 240],
    [254, 224, 210],
    [252, 187, 161],
    [252, 146, 114],
    [251, 106, 74],
    [239, 59, 44],
    [203, 24, 29],
    [165, 15, 21],
    [103, 0, 13],
];

const GREENS: &[[u8; 3]] = &[
    [247, 252, 245],
    [229, 245, 224],
    [199, 233, 192],
    [161, 217, 155],
    [116, 196, 118],
    [65, 171, 93],
    [35, 139, 69],
    [0, 109, 44],
    [0, 68, 27],
];

const VIRIDIS: &[[u8; 3]] = &[
    [0x44, 0x01, 0x54],
    [0x48, 0x28, 0x78],
    [0x3e, 0x49, 0x89],
    [0x31, 0x68, 0x8e],
    [0x26, 0x82, 0x8e],
    [0x1f, 0x9e, 0x89],
    [0x35, 0xb7, 0x79],
    [0x6e, 0xce, 0x58],
    [0xb5, 0xde, 0x2b],
    [0xfd, 0xe7, 0x25],
];

impl ColorScale {
    fn stops(self) -> &'static [[u8; 3]] {
        match self {
            ColorScale::RdYlGnR => RD_YL_GN,
            ColorScale::Blues => BLUES,
            ColorScale::Purples => PURPLES,
            ColorScale::Reds => REDS,
            ColorScale::Greens => GREENS,
            ColorScale::Viridis => VIRIDIS,
        }
    }

    fn reversed(self) -> bool {
        matches!(self, ColorScale::RdYlGnR)
    }

    /// Color at `t` in `[0, 1]`; out-of-range input is clamped
    pub fn sample(self, t: f64) -> Color32 {
        let stops = self.stops();
        let mut t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        if self.reversed() {
            t = 1.0 - t;
        }

        let pos = t * (stops.len() - 1) as f64;
        let lo = pos.floor() as usize;
        let hi = (lo + 1).min(stops.len() - 1);
        let frac = pos - lo as f64;

        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
        let (a, b) = (stops[lo], stops[hi]);
        Color32::from_rgb(mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2]))
    }
}

// =============================================================================
// CHART SPECS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartId {
    Geography,
    AgeGroup,
    Products,
    Gender,
    CardType,
    Satisfaction,
    Tenure,
    FeatureImportance,
}

impl ChartId {
    pub const ALL: [ChartId; 8] = [
        ChartId::Geography,
        ChartId::AgeGroup,
        ChartId::Products,
        ChartId::Gender,
        ChartId::CardType,
        ChartId::Satisfaction,
        ChartId::Tenure,
        ChartId::FeatureImportance,
    ];

    pub fn spec(self) -> ChartSpec {
        use egui_phosphor::regular as ph;

        let churn = |id, icon, title, category_axis, table, color_scale| ChartSpec {
            id,
            icon,
            title,
            category_axis,
            value_axis: "Churn Rate (%)",
            table,
            color_scale,
            format: ValueFormat::Percent1,
            orientation: Orientation::Vertical,
            sort_ascending: false,
        };

        match self {
            ChartId::Geography => churn(
                self,
                ph::MAP_PIN,
                "Churn Rate by Geography",
                "Region",
                &data::GEOGRAPHY,
                ColorScale::RdYlGnR,
            ),
            ChartId::AgeGroup => churn(
                self,
                ph::USER,
                "Churn Rate by Age Group",
                "Age Group",
                &data::AGE_GROUP,
                ColorScale::Blues,
            ),
            ChartId::Products => churn(
                self,
                ph::PACKAGE,
                "Churn by Product Count",
                "Product Count",
                &data::PRODUCTS,
                ColorScale::Purples,
            ),
            ChartId::Gender => churn(
                self,
                ph::USER,
                "Churn by Gender",
                "Gender",
                &data::GENDER,
                ColorScale::Viridis,
            ),
            ChartId::CardType => churn(
                self,
                ph::CREDIT_CARD,
                "Churn by Card Type",
                "Card Type",
                &data::CARD_TYPE,
                ColorScale::Reds,
            ),
            ChartId::Satisfaction => churn(
                self,
                ph::SMILEY,
                "Satisfaction vs Churn",
                "Satisfaction Level",
                &data::SATISFACTION,
                ColorScale::RdYlGnR,
            ),
            ChartId::Tenure => churn(
                self,
                ph::HOURGLASS,
                "Churn by Tenure",
                "Customer Tenure",
                &data::TENURE,
                ColorScale::Greens,
            ),
            ChartId::FeatureImportance => ChartSpec {
                id: self,
                icon: ph::STAR,
                title: "Feature Importance for Churn Prediction",
                category_axis: "Feature",
                value_axis: "Importance Score",
                table: &data::FEATURE_IMPORTANCE,
                color_scale: ColorScale::Viridis,
                format: ValueFormat::Decimal3,
                orientation: Orientation::Horizontal,
                sort_ascending: true,
            },
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ChartSpec {
    pub id: ChartId,
    pub icon: &'static str,
    pub title: &'static str,
    pub category_axis: &'static str,
    pub value_axis: &'static str,
    pub table: &'static Table,
    pub color_scale: ColorScale,
    pub format: ValueFormat,
    pub orientation: Orientation,
    pub sort_ascending: bool,
}

/// One bar as it will be rendered
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub label: &'static str,
    pub value: f64,
    pub extra: Option<(&'static str, f64)>,
}

impl ChartSpec {
    /// Bars in render order: declared order, or ascending by value when
    /// `sort_ascending` is set (stable for ties)
    pub fn bars(&self) -> Vec<Bar> {
        let mut bars: Vec<Bar> = self
            .table
            .rows
            .iter()
            .enumerate()
            .map(|(i, r)| Bar {
                label: r.label,
                value: r.value,
                extra: self.table.extra_at(i),
            })
            .collect();
        if self.sort_ascending {
            bars.sort_by(|a, b| a.value.total_cmp(&b.value));
        }
        bars
    }

    pub fn value_range(&self) -> (f64, f64) {
        self.table
            .values()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            })
    }

    /// Continuous color for `value`, normalized over this chart's own range
    pub fn color_for(&self, value: f64) -> Color32 {
        let (lo, hi) = self.value_range();
        let t = if hi - lo > f64::EPSILON {
            (value - lo) / (hi - lo)
        } else {
            0.5
        };
        self.color_scale.sample(t)
    }

    pub fn hover_text(&self, bar: &Bar) -> String {
        let mut text = format!(
            "{}: {}\n{}: {}",
            self.category_axis,
            bar.label,
            self.value_axis,
            self.format.format(bar.value)
        );
        if let Some((name, v)) = bar.extra {
            text.push_str(&format!("\n{}: {}", name, format_count(v)));
        }
        text
    }
}

// =============================================================================
// PLOT
// =============================================================================

/// Headroom above the largest bar for the outside value text
const VALUE_HEADROOM: f64 = 1.15;
/// Fraction of each category slot filled by its bar
const BAR_WIDTH: f64 = 0.7;

pub const CHART_HEIGHT: f32 = 340.0;
const COLORBAR_WIDTH: f32 = 12.0;
const COLORBAR_AREA: f32 = 56.0;
const COLORBAR_STEPS: usize = 32;
const LABEL_GAP: f32 = 4.0;

impl ChartSpec {
    /// Upper end of the value axis
    pub fn value_axis_max(&self) -> f64 {
        let (_, hi) = self.value_range();
        if hi.is_finite() && hi > 0.0 {
            hi * VALUE_HEADROOM
        } else {
            1.0
        }
    }
}

/// Category label for an axis mark; only whole slot positions get one
pub fn category_label(labels: &[&'static str], position: f64) -> Option<&'static str> {
    let slot = position.round();
    if slot < 0.0 || (position - slot).abs() > 1e-6 {
        return None;
    }
    labels.get(slot as usize).copied()
}

/// Plot bars in render order. Slot `i` holds `spec.bars()[i]`; on a
/// horizontal chart slot 0 is the lowest on the y axis.
pub fn plot_bars(spec: &ChartSpec) -> Vec<egui_plot::Bar> {
    spec.bars()
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            let plotted = egui_plot::Bar::new(i as f64, bar.value)
                .name(bar.label)
                .width(BAR_WIDTH)
                .fill(spec.color_for(bar.value));
            match spec.orientation {
                Orientation::Vertical => plotted,
                Orientation::Horizontal => plotted.horizontal(),
            }
        })
        .collect()
}

/// Where the value text of slot `slot` goes, just past the end of its bar
pub fn value_text_position(orientation: Orientation, slot: usize, value: f64) -> (PlotPoint, Align2) {
    match orientation {
        Orientation::Vertical => (PlotPoint::new(slot as f64, value), Align2::CENTER_BOTTOM),
        Orientation::Horizontal => (PlotPoint::new(value, slot as f64), Align2::LEFT_CENTER),
    }
}

/// Card-framed bar chart with a colorbar on the right
pub fn bar_chart(ui: &mut egui::Ui, spec: &ChartSpec) {
    theme::card_frame().show(ui, |ui| {
        ui.add(
            egui::Label::new(
                egui::RichText::new(format!("{}  {}", spec.icon, spec.title))
                    .size(theme::FONT_HEADING)
                    .color(theme::TEXT_PRIMARY),
            )
            .selectable(false),
        );
        ui.add_space(theme::SPACING_MD);

        ui.horizontal_top(|ui| {
            let plot_width = (ui.available_width() - COLORBAR_AREA).max(0.0);
            show_plot(ui, spec, plot_width);
            paint_colorbar(ui, spec);
        });
    });
}

fn show_plot(ui: &mut egui::Ui, spec: &ChartSpec, width: f32) {
    let bars = spec.bars();
    let labels: Vec<&'static str> = bars.iter().map(|b| b.label).collect();
    let hovers: Vec<String> = bars.iter().map(|b| spec.hover_text(b)).collect();
    let texts: Vec<(PlotPoint, Align2, String)> = bars
        .iter()
        .enumerate()
        .map(|(i, b)| {
            let (pos, anchor) = value_text_position(spec.orientation, i, b.value);
            (pos, anchor, spec.format.format(b.value))
        })
        .collect();
    let slots = labels.len();

    let chart = BarChart::new(plot_bars(spec))
        .name(spec.title)
        .element_formatter(Box::new(move |bar: &egui_plot::Bar, _: &BarChart| {
            hovers
                .get(bar.argument.round() as usize)
                .cloned()
                .unwrap_or_else(|| bar.name.clone())
        }));

    let category_format = move |mark: GridMark, _range: &std::ops::RangeInclusive<f64>| {
        category_label(&labels, mark.value)
            .unwrap_or_default()
            .to_string()
    };
    let category_marks = move |_input: GridInput| {
        (0..slots)
            .map(|i| GridMark {
                value: i as f64,
                step_size: 1.0,
            })
            .collect::<Vec<_>>()
    };
    let value_max = spec.value_axis_max();
    let (slot_min, slot_max) = (-0.5, slots as f64 - 0.5);

    let plot = Plot::new(("churn_chart", spec.id))
        .width(width)
        .height(CHART_HEIGHT)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .show_x(false)
        .show_y(false)
        .show_background(false);

    let plot = match spec.orientation {
        Orientation::Vertical => plot
            .x_axis_label(spec.category_axis)
            .y_axis_label(spec.value_axis)
            .x_axis_formatter(category_format)
            .x_grid_spacer(category_marks)
            .include_x(slot_min)
            .include_x(slot_max)
            .include_y(0.0)
            .include_y(value_max)
            .show_grid([false, true]),
        Orientation::Horizontal => plot
            .x_axis_label(spec.value_axis)
            .y_axis_label(spec.category_axis)
            .y_axis_formatter(category_format)
            .y_grid_spacer(category_marks)
            .include_y(slot_min)
            .include_y(slot_max)
            .include_x(0.0)
            .include_x(value_max)
            .show_grid([true, false]),
    };

    plot.show(ui, |plot_ui| {
        plot_ui.bar_chart(chart);
        for (pos, anchor, text) in texts {
            plot_ui.text(
                Text::new(
                    pos,
                    egui::RichText::new(text)
                        .size(theme::FONT_LABEL)
                        .color(theme::TEXT_SECONDARY),
                )
                .anchor(anchor),
            );
        }
    });
}

fn paint_colorbar(ui: &mut egui::Ui, spec: &ChartSpec) {
    let (area, _) = ui.allocate_exact_size(
        egui::vec2(COLORBAR_AREA, CHART_HEIGHT),
        egui::Sense::hover(),
    );
    if !ui.is_rect_visible(area) {
        return;
    }

    let bar = Rect::from_min_max(
        egui::pos2(area.left() + LABEL_GAP, area.top() + theme::SPACING_XL),
        egui::pos2(
            area.left() + LABEL_GAP + COLORBAR_WIDTH,
            area.bottom() - theme::SPACING_XL * 2.0,
        ),
    );
    let painter = ui.painter();

    let step_h = bar.height() / COLORBAR_STEPS as f32;
    for i in 0..COLORBAR_STEPS {
        let t = (i as f64 + 0.5) / COLORBAR_STEPS as f64;
        let bottom = bar.bottom() - step_h * i as f32;
        let cell = Rect::from_min_max(
            egui::pos2(bar.left(), bottom - step_h),
            egui::pos2(bar.right(), bottom),
        );
        painter.rect_filled(cell, 0.0, spec.color_scale.sample(t));
    }
    painter.rect_stroke(
        bar,
        0.0,
        egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_SUBTLE),
        egui::StrokeKind::Outside,
    );

    let (lo, hi) = spec.value_range();
    let font = FontId::proportional(theme::FONT_CAPTION);
    painter.text(
        egui::pos2(bar.right() + LABEL_GAP, bar.top()),
        Align2::LEFT_CENTER,
        spec.format.format(hi),
        font.clone(),
        theme::TEXT_DIM,
    );
    painter.text(
        egui::pos2(bar.right() + LABEL_GAP, bar.bottom()),
        Align2::LEFT_CENTER,
        spec.format.format(lo),
        font,
        theme::TEXT_DIM,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(spec: &ChartSpec) -> Vec<&'static str> {
        spec.bars().iter().map(|b| b.label).collect()
    }

    #[test]
    fn test_every_chart_keeps_its_table() {
        for id in ChartId::ALL {
            let spec = id.spec();
            assert_eq!(spec.id, id);
            let mut rendered: Vec<_> = spec.bars().iter().map(|b| (b.label, b.value)).collect();
            let mut declared: Vec<_> = spec.table.rows.iter().map(|r| (r.label, r.value)).collect();
            if !spec.sort_ascending {
                assert_eq!(rendered, declared, "{:?} changed order", id);
            }
            rendered.sort_by(|a, b| a.0.cmp(b.0));
            declared.sort_by(|a, b| a.0.cmp(b.0));
            assert_eq!(rendered, declared, "{:?} lost or altered rows", id);
        }
    }

    #[test]
    fn test_chart_presentation() {
        use ColorScale::*;
        use Orientation::*;

        let churn = "Churn Rate (%)";
        let expected = [
            (ChartId::Geography, "Churn Rate by Geography", "Region", churn, RdYlGnR, Vertical),
            (ChartId::AgeGroup, "Churn Rate by Age Group", "Age Group", churn, Blues, Vertical),
            (ChartId::Products, "Churn by Product Count", "Product Count", churn, Purples, Vertical),
            (ChartId::Gender, "Churn by Gender", "Gender", churn, Viridis, Vertical),
            (ChartId::CardType, "Churn by Card Type", "Card Type", churn, Reds, Vertical),
            (ChartId::Satisfaction, "Satisfaction vs Churn", "Satisfaction Level", churn, RdYlGnR, Vertical),
            (ChartId::Tenure, "Churn by Tenure", "Customer Tenure", churn, Greens, Vertical),
            (
                ChartId::FeatureImportance,
                "Feature Importance for Churn Prediction",
                "Feature",
                "Importance Score",
                Viridis,
                Horizontal,
            ),
        ];
        assert_eq!(expected.len(), ChartId::ALL.len());

        for (id, title, category_axis, value_axis, color_scale, orientation) in expected {
            let spec = id.spec();
            assert_eq!(
                (spec.title, spec.category_axis, spec.value_axis, spec.color_scale, spec.orientation),
                (title, category_axis, value_axis, color_scale, orientation),
                "{:?}",
                id
            );
        }
    }

    #[test]
    fn test_only_feature_importance_is_sorted() {
        let sorted: Vec<_> = ChartId::ALL
            .iter()
            .filter(|id| id.spec().sort_ascending)
            .collect();
        assert_eq!(sorted, vec![&ChartId::FeatureImportance]);
    }

    #[test]
    fn test_feature_importance_sorted_ascending() {
        let spec = ChartId::FeatureImportance.spec();
        assert_eq!(
            labels(&spec),
            vec![
                "Geography",
                "Is Active Member",
                "Balance",
                "Number of Products",
                "Age"
            ]
        );
        let values: Vec<f64> = spec.bars().iter().map(|b| b.value).collect();
        assert_eq!(values, vec![0.098, 0.143, 0.156, 0.189, 0.245]);
    }

    #[test]
    fn test_feature_importance_plots_bottom_to_top() {
        let spec = ChartId::FeatureImportance.spec();
        let mut plotted = plot_bars(&spec);

        // Plot y grows upward: the lowest argument is the bottom bar
        plotted.sort_by(|a, b| a.argument.total_cmp(&b.argument));
        let bottom_to_top: Vec<_> = plotted.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(
            bottom_to_top,
            vec![
                "Geography",
                "Is Active Member",
                "Balance",
                "Number of Products",
                "Age"
            ]
        );
        assert_eq!(plotted[0].value, 0.098);
        assert_eq!(plotted[4].value, 0.245);
    }

    #[test]
    fn test_plot_bars_follow_declared_slots() {
        let spec = ChartId::Products.spec();
        let plotted = plot_bars(&spec);

        let slots: Vec<_> = plotted
            .iter()
            .map(|b| (b.argument, b.name.as_str(), b.value))
            .collect();
        assert_eq!(
            slots,
            vec![
                (0.0, "1 Product", 27.7),
                (1.0, "2 Products", 7.6),
                (2.0, "3+ Products", 82.7)
            ]
        );
        assert_eq!(plotted[2].fill, spec.color_for(82.7));
        assert_eq!(plotted[1].fill, spec.color_scale.sample(0.0));
    }

    #[test]
    fn test_category_label() {
        let labels = ["Male", "Female"];
        assert_eq!(category_label(&labels, 0.0), Some("Male"));
        assert_eq!(category_label(&labels, 1.0), Some("Female"));
        assert_eq!(category_label(&labels, 0.5), None);
        assert_eq!(category_label(&labels, 2.0), None);
        assert_eq!(category_label(&labels, -1.0), None);
    }

    #[test]
    fn test_value_text_position() {
        let (pos, anchor) = value_text_position(Orientation::Vertical, 2, 82.7);
        assert_eq!((pos.x, pos.y), (2.0, 82.7));
        assert_eq!(anchor, Align2::CENTER_BOTTOM);

        let (pos, anchor) = value_text_position(Orientation::Horizontal, 0, 0.098);
        assert_eq!((pos.x, pos.y), (0.098, 0.0));
        assert_eq!(anchor, Align2::LEFT_CENTER);
    }

    #[test]
    fn test_value_axis_leaves_headroom() {
        let spec = ChartId::Products.spec();
        assert!(spec.value_axis_max() > 82.7);
        assert!((spec.value_axis_max() - 82.7 * 1.15).abs() < 1e-9);
    }

    #[test]
    fn test_value_formats() {
        assert_eq!(ValueFormat::Percent1.format(16.2), "16.2%");
        assert_eq!(ValueFormat::Percent1.format(2.1), "2.1%");
        assert_eq!(ValueFormat::Decimal3.format(0.245), "0.245");
        assert_eq!(ValueFormat::Decimal3.format(0.098), "0.098");
    }

    #[test]
    fn test_chart_formats() {
        for id in ChartId::ALL {
            let expected = if id == ChartId::FeatureImportance {
                ValueFormat::Decimal3
            } else {
                ValueFormat::Percent1
            };
            assert_eq!(id.spec().format, expected);
        }
    }

    #[test]
    fn test_color_scale_endpoints() {
        assert_eq!(ColorScale::Blues.sample(0.0), Color32::from_rgb(247, 251, 255));
        assert_eq!(ColorScale::Blues.sample(1.0), Color32::from_rgb(8, 48, 107));
        // Reversed: low churn is green, high churn is red
        assert_eq!(ColorScale::RdYlGnR.sample(0.0), Color32::from_rgb(0, 104, 55));
        assert_eq!(ColorScale::RdYlGnR.sample(1.0), Color32::from_rgb(165, 0, 38));
        assert_eq!(ColorScale::Viridis.sample(1.0), Color32::from_rgb(0xfd, 0xe7, 0x25));
    }

    #[test]
    fn test_color_scale_clamps() {
        assert_eq!(ColorScale::Greens.sample(-3.0), ColorScale::Greens.sample(0.0));
        assert_eq!(ColorScale::Greens.sample(7.0), ColorScale::Greens.sample(1.0));
        assert_eq!(ColorScale::Reds.sample(f64::NAN), ColorScale::Reds.sample(0.0));
    }

    #[test]
    fn test_color_scale_interpolates() {
        // Halfway between the fifth and sixth Viridis stops
        assert_eq!(
            ColorScale::Viridis.sample(0.5),
            Color32::from_rgb(0x23, 0x90, 0x8c)
        );
    }

    #[test]
    fn test_bar_color_follows_value() {
        let spec = ChartId::Geography.spec();
        assert_eq!(spec.color_for(32.4), ColorScale::RdYlGnR.sample(1.0));
        assert_eq!(spec.color_for(16.2), ColorScale::RdYlGnR.sample(0.0));
    }

    #[test]
    fn test_hover_text_includes_customers() {
        let spec = ChartId::Geography.spec();
        let germany = spec.bars()[1];
        let text = spec.hover_text(&germany);
        assert!(text.contains("Region: Germany"));
        assert!(text.contains("Churn Rate (%): 32.4%"));
        assert!(text.contains("Customers: 3,200"));

        let tenure = ChartId::Tenure.spec();
        assert!(!tenure.hover_text(&tenure.bars()[0]).contains("Customers"));
    }
}
