use super::{Category, Insight};

/// Filter buttons rendered above the grid: filter value and label.
pub const CATEGORY_FILTERS: [(&str, &str); 5] = [
    ("all", "All"),
    ("currency", "Currency"),
    ("stock", "Stock"),
    ("summary", "Summary"),
    ("other", "Other"),
];

#[derive(Debug, Clone, PartialEq)]
enum FilterMode {
    Category(String),
    Search(String),
}

/// Visibility state for the card grid.
///
/// Composition policy: independent-and-last-wins. The last applied action
/// (category click or search keystroke) alone decides visibility; the two
/// filters are never intersected. Category clicks also move the button
/// highlight, which searches leave untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct InsightFilter {
    active_category: String,
    mode: FilterMode,
}

impl Default for InsightFilter {
    fn default() -> Self {
        Self {
            active_category: "all".to_string(),
            mode: FilterMode::Category("all".to_string()),
        }
    }
}

impl InsightFilter {
    pub fn select_category(&mut self, category: &str) {
        self.active_category = category.to_string();
        self.mode = FilterMode::Category(category.to_string());
    }

    /// Lower-cases the term as-is. Whitespace is not trimmed, so leading or
    /// trailing spaces take part in the match.
    pub fn search(&mut self, term: &str) {
        self.mode = FilterMode::Search(term.to_lowercase());
    }

    pub fn is_visible(&self, insight: &Insight) -> bool {
        match &self.mode {
            FilterMode::Category(category) => {
                category == "all" || insight.category.slug() == category.as_str()
            }
            FilterMode::Search(term) => {
                insight.title.to_lowercase().contains(term.as_str())
                    || insight.summary.to_lowercase().contains(term.as_str())
            }
        }
    }

    /// True for the single button matching the last selected category.
    pub fn is_button_active(&self, filter_value: &str) -> bool {
        self.active_category == filter_value
    }
}
