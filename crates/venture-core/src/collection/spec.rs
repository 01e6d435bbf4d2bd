//! Search, filter and sort selections of a collection view.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Filter value meaning "do not filter on this field".
pub const ALL_SENTINEL: &str = "all";

/// Sort direction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Apply this direction to an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            other => Err(format!("unknown sort direction: {other:?}")),
        }
    }
}

/// The active search/filter/sort choices of one collection view.
///
/// Cheap to rebuild; a view regenerates its derived list from the source
/// and this spec on every change.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSortSpec {
    /// Case-insensitive substring query over the searchable fields.
    pub search_query: String,
    /// Field name to selected value; [`ALL_SENTINEL`] disables an entry.
    pub field_filters: BTreeMap<String, String>,
    /// Field to sort by. `None` keeps source order.
    pub sort_key: Option<String>,
    pub sort_direction: SortDirection,
}

impl FilterSortSpec {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    #[must_use]
    pub fn with_filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.field_filters.insert(field.into(), value.into());
        self
    }

    #[must_use]
    pub fn sorted_by(mut self, key: impl Into<String>, direction: SortDirection) -> Self {
        self.sort_key = Some(key.into());
        self.sort_direction = direction;
        self
    }

    /// Filters that actually constrain the result (sentinel entries skipped).
    pub fn active_filters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.field_filters
            .iter()
            .filter(|(_, value)| value.as_str() != ALL_SENTINEL)
            .map(|(field, value)| (field.as_str(), value.as_str()))
    }

    /// True when the spec neither searches nor filters.
    pub fn is_unfiltered(&self) -> bool {
        self.search_query.is_empty() && self.active_filters().next().is_none()
    }
}
