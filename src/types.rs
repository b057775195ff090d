//! Common types and data structures

use crate::chart::ChartId;
use crate::data::{self, TextPanel};

/// Top-level dashboard tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Overview,
    DetailedAnalysis,
    Predictors,
}

/// Grid of panels inside a tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabLayout {
    /// Two equal columns, panels fill row by row
    TwoByTwo,
    /// Main panel on the left, side panel on the right, at 2:1 width
    MainAndSide,
}

/// One cell of a tab's layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Chart(ChartId),
    Insights,
    Recommendations,
}

impl Panel {
    pub fn text(self) -> Option<&'static TextPanel> {
        match self {
            Panel::Chart(_) => None,
            Panel::Insights => Some(&data::KEY_INSIGHTS),
            Panel::Recommendations => Some(&data::RECOMMENDATIONS),
        }
    }
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Overview, Tab::DetailedAnalysis, Tab::Predictors];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::DetailedAnalysis => "Detailed Analysis",
            Tab::Predictors => "Predictors",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tab::Overview => egui_phosphor::regular::CHART_BAR,
            Tab::DetailedAnalysis => egui_phosphor::regular::MAGNIFYING_GLASS,
            Tab::Predictors => egui_phosphor::regular::CHART_LINE_UP,
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Tab::Overview => "Key Churn Analysis",
            Tab::DetailedAnalysis => "Detailed Churn Analysis",
            Tab::Predictors => "Top Churn Predictors",
        }
    }

    pub fn layout(self) -> TabLayout {
        match self {
            Tab::Overview | Tab::DetailedAnalysis => TabLayout::TwoByTwo,
            Tab::Predictors => TabLayout::MainAndSide,
        }
    }

    /// Fixed panels shown by this tab, in layout order
    pub fn panels(self) -> &'static [Panel] {
        match self {
            Tab::Overview => &[
                Panel::Chart(ChartId::Geography),
                Panel::Chart(ChartId::AgeGroup),
                Panel::Chart(ChartId::Products),
                Panel::Chart(ChartId::Gender),
            ],
            Tab::DetailedAnalysis => &[
                Panel::Chart(ChartId::CardType),
                Panel::Chart(ChartId::Satisfaction),
                Panel::Chart(ChartId::Tenure),
                Panel::Insights,
            ],
            Tab::Predictors => &[
                Panel::Chart(ChartId::FeatureImportance),
                Panel::Recommendations,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_are_disjoint() {
        for (i, a) in Tab::ALL.iter().enumerate() {
            for b in &Tab::ALL[i + 1..] {
                assert!(
                    a.panels().iter().all(|p| !b.panels().contains(p)),
                    "{:?} and {:?} share a panel",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_tabs_cover_every_panel_once() {
        let all: Vec<Panel> = Tab::ALL.iter().flat_map(|t| t.panels().iter().copied()).collect();
        assert_eq!(all.len(), 10);
        for id in ChartId::ALL {
            assert_eq!(all.iter().filter(|p| **p == Panel::Chart(id)).count(), 1);
        }
        assert!(all.contains(&Panel::Insights));
        assert!(all.contains(&Panel::Recommendations));
    }

    #[test]
    fn test_tab_contents() {
        assert_eq!(
            Tab::Overview.panels(),
            &[
                Panel::Chart(ChartId::Geography),
                Panel::Chart(ChartId::AgeGroup),
                Panel::Chart(ChartId::Products),
                Panel::Chart(ChartId::Gender),
            ]
        );
        assert_eq!(Tab::DetailedAnalysis.panels()[3], Panel::Insights);
        assert_eq!(
            Tab::Predictors.panels(),
            &[Panel::Chart(ChartId::FeatureImportance), Panel::Recommendations]
        );
        assert_eq!(Tab::Predictors.layout(), TabLayout::MainAndSide);
    }

    #[test]
    fn test_layouts_match_panel_counts() {
        for tab in Tab::ALL {
            let expected = match tab.layout() {
                TabLayout::TwoByTwo => 4,
                TabLayout::MainAndSide => 2,
            };
            assert_eq!(tab.panels().len(), expected, "{:?}", tab);
        }
    }

    #[test]
    fn test_tab_labels() {
        let labels: Vec<_> = Tab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["Overview", "Detailed Analysis", "Predictors"]);
    }

    #[test]
    fn test_text_panel_lookup() {
        assert!(Panel::Chart(ChartId::Gender).text().is_none());
        assert_eq!(Panel::Insights.text().map(|p| p.heading), Some("Key Insights"));
        assert_eq!(
            Panel::Recommendations.text().map(|p| p.heading),
            Some("Recommendations")
        );
    }
}
