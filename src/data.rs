//! Fixed dashboard data: churn tables, scorecards and text panels
//!
//! Every value here is an illustrative constant. Nothing is computed,
//! loaded or mutated at runtime.

/// One (label, value) row of a lookup table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row {
    pub label: &'static str,
    pub value: f64,
}

const fn row(label: &'static str, value: f64) -> Row {
    Row { label, value }
}

/// Ordered lookup table with an optional secondary metric column
#[derive(Debug, Clone, Copy)]
pub struct Table {
    pub rows: &'static [Row],
    /// Secondary metric aligned with `rows` (name, values)
    pub extra: Option<(&'static str, &'static [f64])>,
}

impl Table {
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rows.iter().map(|r| r.label)
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(|r| r.value)
    }

    /// Secondary metric for the row at `idx`, if this table carries one
    pub fn extra_at(&self, idx: usize) -> Option<(&'static str, f64)> {
        self.extra
            .and_then(|(name, values)| values.get(idx).map(|v| (name, *v)))
    }
}

// =============================================================================
// TABLES
// =============================================================================

pub const GEOGRAPHY: Table = Table {
    rows: &[row("France", 16.2), row("Germany", 32.4), row("Spain", 16.7)],
    extra: Some(("Customers", &[2500.0, 3200.0, 2100.0])),
};

pub const AGE_GROUP: Table = Table {
    rows: &[
        row("20-30", 9.8),
        row("30-40", 17.5),
        row("40-50", 56.2),
        row("50-60", 45.8),
    ],
    extra: None,
};

pub const PRODUCTS: Table = Table {
    rows: &[
        row("1 Product", 27.7),
        row("2 Products", 7.6),
        row("3+ Products", 82.7),
    ],
    extra: None,
};

pub const GENDER: Table = Table {
    rows: &[row("Male", 19.2), row("Female", 21.8)],
    extra: None,
};

pub const CARD_TYPE: Table = Table {
    rows: &[
        row("Platinum", 12.5),
        row("Gold", 18.3),
        row("Silver", 28.1),
        row("Diamond", 25.2),
    ],
    extra: None,
};

pub const SATISFACTION: Table = Table {
    rows: &[
        row("Very Low (1)", 45.3),
        row("Low (2)", 28.7),
        row("Medium (3)", 8.2),
        row("High (4-5)", 2.1),
    ],
    extra: None,
};

pub const TENURE: Table = Table {
    rows: &[
        row("0-1 Year", 42.5),
        row("1-2 Years", 18.3),
        row("2-5 Years", 7.8),
        row("5+ Years", 2.1),
    ],
    extra: None,
};

pub const FEATURE_IMPORTANCE: Table = Table {
    rows: &[
        row("Age", 0.245),
        row("Number of Products", 0.189),
        row("Balance", 0.156),
        row("Is Active Member", 0.143),
        row("Geography", 0.098),
    ],
    extra: None,
};

// =============================================================================
// SCORECARDS
// =============================================================================

/// Direction of a scorecard delta, read from its leading sign
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaDirection {
    Up,
    Down,
}

impl DeltaDirection {
    pub fn of(delta: &str) -> Self {
        if delta.trim_start().starts_with('-') {
            DeltaDirection::Down
        } else {
            DeltaDirection::Up
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scorecard {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub delta: &'static str,
}

impl Scorecard {
    pub fn direction(&self) -> DeltaDirection {
        DeltaDirection::of(self.delta)
    }
}

pub const SCORECARDS: [Scorecard; 4] = [
    Scorecard {
        icon: egui_phosphor::regular::TREND_DOWN,
        label: "Churn Rate",
        value: "20.4%",
        delta: "-2.1%",
    },
    Scorecard {
        icon: egui_phosphor::regular::USERS,
        label: "Total Customers",
        value: "10,000",
        delta: "+500",
    },
    Scorecard {
        icon: egui_phosphor::regular::CHECK_CIRCLE,
        label: "Active Members",
        value: "51.5%",
        delta: "+3.2%",
    },
    Scorecard {
        icon: egui_phosphor::regular::CURRENCY_DOLLAR,
        label: "Avg Balance",
        value: "$76K",
        delta: "+$2K",
    },
];

// =============================================================================
// TEXT PANELS
// =============================================================================

/// Visual tone of a callout panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
}

/// A list item with a bold lead-in followed by plain text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub lead: &'static str,
    pub text: &'static str,
}

const fn point(lead: &'static str, text: &'static str) -> Point {
    Point { lead, text }
}

#[derive(Debug, Clone, Copy)]
pub struct TextPanel {
    pub icon: &'static str,
    pub heading: &'static str,
    pub tone: Tone,
    pub numbered: bool,
    pub points: &'static [Point],
}

pub const KEY_INSIGHTS: TextPanel = TextPanel {
    icon: egui_phosphor::regular::CHART_BAR,
    heading: "Key Insights",
    tone: Tone::Info,
    numbered: false,
    points: &[
        point("Highest Churn", "Customers with 3+ products (82.7%)"),
        point(
            "Lowest Satisfaction",
            "Very Low satisfaction has highest churn (45.3%)",
        ),
        point("Geographic Risk", "Germany shows highest churn (32.4%)"),
        point(
            "Tenure Impact",
            "New customers (0-1 year) most likely to churn (42.5%)",
        ),
        point("Gender", "Minimal difference between genders (19.2% vs 21.8%)"),
    ],
};

pub const RECOMMENDATIONS: TextPanel = TextPanel {
    icon: egui_phosphor::regular::TARGET,
    heading: "Recommendations",
    tone: Tone::Success,
    numbered: true,
    points: &[
        point("Focus on Age", "Strongest predictor"),
        point("Retain Active Members", "Higher activity = lower churn"),
        point("Optimize Products", "Balance is important"),
        point("Monitor Geography", "Geographic targeting needed"),
        point("Early Engagement", "Critical in first year"),
    ],
};

// =============================================================================
// PAGE TEXT
// =============================================================================

pub const TITLE: &str = "Customer Churn Analytics Dashboard";
pub const SUBTITLE: &str = "Real-time insights for data-driven decision making";

pub const ABOUT_HEADING: &str = "About This Dashboard";
pub const ABOUT_TEXT: &str = "This Customer Churn Analytics Dashboard provides actionable insights \
into customer churn patterns across multiple dimensions. Use these insights to develop targeted \
retention strategies and improve customer lifetime value.";
pub const DATASET_NAME: &str = "Customer Churn Analysis";
pub const LAST_UPDATED: &str = "November 2024";

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(table: &Table) -> Vec<(&'static str, f64)> {
        table.rows.iter().map(|r| (r.label, r.value)).collect()
    }

    #[test]
    fn test_geography_table() {
        assert_eq!(
            pairs(&GEOGRAPHY),
            vec![("France", 16.2), ("Germany", 32.4), ("Spain", 16.7)]
        );
        assert_eq!(GEOGRAPHY.extra_at(1), Some(("Customers", 3200.0)));
        assert_eq!(GEOGRAPHY.extra_at(3), None);
    }

    #[test]
    fn test_churn_tables_keep_declared_order() {
        assert_eq!(
            pairs(&AGE_GROUP),
            vec![("20-30", 9.8), ("30-40", 17.5), ("40-50", 56.2), ("50-60", 45.8)]
        );
        assert_eq!(
            pairs(&PRODUCTS),
            vec![("1 Product", 27.7), ("2 Products", 7.6), ("3+ Products", 82.7)]
        );
        assert_eq!(pairs(&GENDER), vec![("Male", 19.2), ("Female", 21.8)]);
        assert_eq!(
            pairs(&CARD_TYPE),
            vec![("Platinum", 12.5), ("Gold", 18.3), ("Silver", 28.1), ("Diamond", 25.2)]
        );
        assert_eq!(
            pairs(&SATISFACTION),
            vec![
                ("Very Low (1)", 45.3),
                ("Low (2)", 28.7),
                ("Medium (3)", 8.2),
                ("High (4-5)", 2.1)
            ]
        );
        assert_eq!(
            pairs(&TENURE),
            vec![("0-1 Year", 42.5), ("1-2 Years", 18.3), ("2-5 Years", 7.8), ("5+ Years", 2.1)]
        );
    }

    #[test]
    fn test_feature_importance_scores_are_unit_interval() {
        assert_eq!(FEATURE_IMPORTANCE.rows.len(), 5);
        assert!(FEATURE_IMPORTANCE.values().all(|v| (0.0..=1.0).contains(&v)));
        assert_eq!(FEATURE_IMPORTANCE.labels().next(), Some("Age"));
        assert!(FEATURE_IMPORTANCE.extra.is_none());
    }

    #[test]
    fn test_scorecard_literals() {
        let shown: Vec<_> = SCORECARDS.iter().map(|c| (c.value, c.delta)).collect();
        assert_eq!(
            shown,
            vec![
                ("20.4%", "-2.1%"),
                ("10,000", "+500"),
                ("51.5%", "+3.2%"),
                ("$76K", "+$2K")
            ]
        );
    }

    #[test]
    fn test_delta_direction() {
        assert_eq!(SCORECARDS[0].direction(), DeltaDirection::Down);
        assert!(SCORECARDS[1..]
            .iter()
            .all(|c| c.direction() == DeltaDirection::Up));
        assert_eq!(DeltaDirection::of("  -1"), DeltaDirection::Down);
        assert_eq!(DeltaDirection::of("0"), DeltaDirection::Up);
    }

    #[test]
    fn test_text_panels() {
        assert_eq!(KEY_INSIGHTS.points.len(), 5);
        assert_eq!(KEY_INSIGHTS.tone, Tone::Info);
        assert!(!KEY_INSIGHTS.numbered);
        assert_eq!(RECOMMENDATIONS.points[0].lead, "Focus on Age");
        assert_eq!(RECOMMENDATIONS.tone, Tone::Success);
        assert!(RECOMMENDATIONS.numbered);
    }
}
