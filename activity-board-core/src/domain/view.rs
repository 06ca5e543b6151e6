use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label shown for the empty-value category sentinel
pub const ALL_CATEGORIES_LABEL: &str = "All Categories";

/// Sort mode for the rendered activity list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Lexicographic compare on activity name
    Name,
    /// Lexicographic compare on the raw schedule string.
    /// NOT chronological: "Monday" sorts after "Friday". Preserved
    /// observed behavior of the service's original client.
    Time,
}

impl SortKey {
    /// Wire value used by the sort `<select>` control
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Time => "time",
        }
    }
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::Name
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error for unrecognized sort `<select>` values
#[derive(Debug, thiserror::Error, PartialEq)]
#[error("unknown sort key: {0}")]
pub struct SortKeyParseError(pub String);

impl FromStr for SortKey {
    type Err = SortKeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortKey::Name),
            "time" => Ok(SortKey::Time),
            other => Err(SortKeyParseError(other.to_string())),
        }
    }
}

/// Current state of the filter/search/sort controls
///
/// Ephemeral view state owned by the controls; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    /// Case-insensitive substring matched against name or description;
    /// empty = no search filter
    pub search: String,

    /// Exact category match; empty = all categories
    pub category: String,

    /// Current sort mode
    pub sort: SortKey,
}

impl ViewQuery {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }
}

/// One entry of the category filter `<select>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    /// Option value ("" for the no-filter sentinel)
    pub value: String,
    /// Visible label
    pub label: String,
}

impl CategoryOption {
    /// The "no filter" sentinel, always listed first
    pub fn all() -> Self {
        CategoryOption {
            value: String::new(),
            label: ALL_CATEGORIES_LABEL.to_string(),
        }
    }

    /// Option for a concrete category
    pub fn named(category: impl Into<String>) -> Self {
        let category = category.into();
        CategoryOption {
            value: category.clone(),
            label: category,
        }
    }
}
