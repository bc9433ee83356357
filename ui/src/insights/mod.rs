//! The insight catalog: the model, the embedded demo data, and the state
//! handed to the insights view.

mod card;
pub use card::CardGrid;

mod detail;
pub use detail::DetailPanel;

mod filter;
pub use filter::{InsightFilter, CATEGORY_FILTERS};

mod toolbar;
pub use toolbar::{FilterBar, SearchBox};

use serde::Deserialize;

use crate::core::files::{FileRecord, FileStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Currency,
    Stock,
    Summary,
    Other,
}

impl Category {
    pub fn slug(self) -> &'static str {
        match self {
            Category::Currency => "currency",
            Category::Stock => "stock",
            Category::Summary => "summary",
            Category::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Outcome {
    pub fn slug(self) -> &'static str {
        match self {
            Outcome::Positive => "positive",
            Outcome::Negative => "negative",
            Outcome::Neutral => "neutral",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Positive => "Positive",
            Outcome::Negative => "Negative",
            Outcome::Neutral => "Neutral",
        }
    }
}

/// One published insight. `attachment` names a file in the page's
/// [`FileStore`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Insight {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub category: Category,
    pub date: String,
    #[serde(default)]
    pub outcome: Outcome,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub attachment: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct Catalog {
    #[serde(default)]
    spreadsheet_mode: bool,
    #[serde(default)]
    files: Vec<FileRecord>,
    #[serde(default)]
    insights: Vec<Insight>,
}

const EMBEDDED_CATALOG: &str = include_str!("../../assets/insights.json");

/// Shared state for the insights view: the catalog records, the file store
/// behind attachments, or the load error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InsightsState {
    pub records: Vec<Insight>,
    pub files: FileStore,
    pub error: Option<String>,
}

impl InsightsState {
    /// Parse the embedded catalog. The platform bootstrap calls this once and
    /// provides the result through context; it is the single owner of file
    /// data and the spreadsheet-mode flag.
    pub fn load() -> Self {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<Catalog>(raw) {
            Ok(catalog) => {
                let mut records = catalog.insights;
                records.sort_by(|a, b| b.date.cmp(&a.date));
                Self {
                    records,
                    files: FileStore::new(catalog.spreadsheet_mode, catalog.files),
                    error: None,
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "couldn't parse the insights catalog");
                Self {
                    records: Vec::new(),
                    files: FileStore::default(),
                    error: Some(format!("Couldn't load insights: {err}")),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_and_outcomes_deserialize_from_slugs() {
        assert_eq!(
            serde_json::from_str::<Category>("\"stock\"").unwrap(),
            Category::Stock
        );
        assert_eq!(
            serde_json::from_str::<Outcome>("\"negative\"").unwrap(),
            Outcome::Negative
        );
    }

    #[test]
    fn records_come_back_newest_first() {
        let state = InsightsState::from_json(
            r#"{
                "insights": [
                    {"slug": "old", "title": "Old", "summary": "", "category": "other", "date": "2025-01-01T00:00:00Z"},
                    {"slug": "new", "title": "New", "summary": "", "category": "other", "date": "2026-01-01T00:00:00Z"}
                ]
            }"#,
        );
        assert!(state.error.is_none());
        let slugs: Vec<&str> = state.records.iter().map(|r| r.slug.as_str()).collect();
        assert_eq!(slugs, vec!["new", "old"]);
    }

    #[test]
    fn a_broken_catalog_reports_instead_of_panicking() {
        let state = InsightsState::from_json("{ not json");
        assert!(state.records.is_empty());
        assert!(state.files.is_empty());
        assert!(state.error.is_some());
    }
}
