//! History view models

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::transaction::{Category, Direction, Status};

/// A filter axis that is either disabled or pinned to one value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter<T> {
    All,
    Only(T),
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Filter::All
    }
}

impl<T: PartialEq> Filter<T> {
    /// Whether a record's value passes this filter
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => wanted == value,
        }
    }

    /// Like `accepts`, for optional attributes. A missing value never passes a pinned filter.
    pub fn accepts_opt(&self, value: Option<&T>) -> bool {
        match (self, value) {
            (Filter::All, _) => true,
            (Filter::Only(wanted), Some(value)) => wanted == value,
            (Filter::Only(_), None) => false,
        }
    }
}

impl<T: FromStr<Err = String>> FromStr for Filter<T> {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Filter::All)
        } else {
            s.parse::<T>().map(Filter::Only)
        }
    }
}

impl<T: fmt::Display> fmt::Display for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str("all"),
            Filter::Only(value) => value.fmt(f),
        }
    }
}

/// Time window relative to "now"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    #[default]
    All,
    Today,
    Week,
    Month,
}

impl FromStr for DateRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(DateRange::All),
            "today" => Ok(DateRange::Today),
            "week" | "7d" => Ok(DateRange::Week),
            "month" | "30d" => Ok(DateRange::Month),
            other => Err(format!("Unknown date range '{}'", other)),
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DateRange::All => "all",
            DateRange::Today => "today",
            DateRange::Week => "week",
            DateRange::Month => "month",
        })
    }
}

/// Filter axes of the history view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FilterState {
    pub direction: Filter<Direction>,
    pub status: Filter<Status>,
    pub date_range: DateRange,
    pub category: Filter<Category>,
}

/// Filters plus the free-text search box
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct HistoryQuery {
    pub filters: FilterState,
    pub search: String,
}

/// Totals shown above the history list
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct HistorySummary {
    pub incoming_total: f64,
    pub outgoing_total: f64,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_parsing() {
        assert_eq!("all".parse::<Filter<Status>>().unwrap(), Filter::All);
        assert_eq!(
            "failed".parse::<Filter<Status>>().unwrap(),
            Filter::Only(Status::Failed)
        );
        assert!("bogus".parse::<Filter<Category>>().is_err());
        assert_eq!("7d".parse::<DateRange>().unwrap(), DateRange::Week);
        assert_eq!(Filter::Only(Status::Pending).to_string(), "pending");
        assert_eq!(Filter::<Status>::All.to_string(), "all");
    }

    #[test]
    fn test_optional_values_fail_pinned_filter() {
        let food = Filter::Only(Category::Food);
        assert!(food.accepts_opt(Some(&Category::Food)));
        assert!(!food.accepts_opt(None));
        assert!(Filter::<Category>::All.accepts_opt(None));
    }
}
