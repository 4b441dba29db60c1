//! Category label index and row predicates.
//!
//! The label set is derived once from the loaded row set: every distinct
//! label across the multi-valued category column, sorted lexicographically,
//! behind a pinned [`UNCATEGORIZED_LABEL`] entry at index 0 standing in for
//! places that carry no labels at all. Selector values taken from that set
//! parse into a [`CategoryFilter`], which either matches label-less rows or
//! rows whose label sequence contains the selection exactly (never by
//! substring).

use std::collections::BTreeSet;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::PlaceRecord;

/// Selector entry standing in for places without category labels.
///
/// Pinned at index 0 of the label set. Assumed never to occur as a concrete
/// label in the data; if it does, the concrete label is dropped from the
/// index so the entry stays unique.
pub const UNCATEGORIZED_LABEL: &str = "None";

/// Distinct category labels across a row set, as offered to the selector.
///
/// A row contributes zero, one or many labels. The result holds the
/// uncategorized entry first, then every concrete label exactly once in
/// lexicographic order. An empty row set still yields the uncategorized
/// entry.
///
/// # Example
/// ```
/// use place_filter::{category_labels, PlaceRecord};
///
/// let places = vec![
///     PlaceRecord::new(51.5, -0.1).with_categories(&["Museum", "Cafe"]),
///     PlaceRecord::new(51.5, -0.2),
/// ];
/// assert_eq!(category_labels(&places), ["None", "Cafe", "Museum"]);
/// ```
pub fn category_labels(places: &[PlaceRecord]) -> Vec<String> {
    let mut distinct = BTreeSet::new();
    for place in places {
        let Some(labels) = place.categories.as_deref() else {
            continue;
        };
        for label in labels {
            if label == UNCATEGORIZED_LABEL {
                warn!("concrete label collides with the uncategorized entry; dropping it from the index");
                continue;
            }
            distinct.insert(label.clone());
        }
    }

    let mut index = Vec::with_capacity(distinct.len() + 1);
    index.push(UNCATEGORIZED_LABEL.to_string());
    index.extend(distinct);
    index
}

/// Initial selector value for a label set.
///
/// The selector widget treats the second entry as its initial value, so the
/// lexicographically first concrete label wins over the pinned uncategorized
/// entry. A set holding only the uncategorized entry falls back to it.
pub fn default_selection(labels: &[String]) -> Option<&str> {
    labels.get(1).or_else(|| labels.first()).map(String::as_str)
}

/// Row predicate built from a selector value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// Matches rows whose category field is null or empty.
    Uncategorized,
    /// Matches rows whose label sequence contains this label exactly.
    Label(String),
}

impl CategoryFilter {
    /// Parse a selector value; [`UNCATEGORIZED_LABEL`] selects the rows
    /// without labels, anything else selects by exact label membership.
    pub fn from_selection(selection: &str) -> Self {
        if selection == UNCATEGORIZED_LABEL {
            Self::Uncategorized
        } else {
            Self::Label(selection.to_string())
        }
    }

    /// Check one row against the predicate.
    ///
    /// For any fixed selection a row matches at most one of the two variants:
    /// it is either uncategorized or carries concrete labels (a multi-label
    /// row can of course match several different `Label` selections).
    pub fn matches(&self, place: &PlaceRecord) -> bool {
        match self {
            Self::Uncategorized => place.is_uncategorized(),
            Self::Label(label) => place
                .categories
                .as_deref()
                .map_or(false, |labels| labels.iter().any(|l| l == label)),
        }
    }
}

/// Select the rows matching a selector value, preserving row order.
///
/// # Example
/// ```
/// use place_filter::{filter_by_category, PlaceRecord, UNCATEGORIZED_LABEL};
///
/// let places = vec![
///     PlaceRecord::new(51.5, -0.1).with_categories(&["Cafe"]),
///     PlaceRecord::new(51.5, -0.2),
/// ];
/// assert_eq!(filter_by_category(&places, "Cafe").len(), 1);
/// assert_eq!(filter_by_category(&places, UNCATEGORIZED_LABEL).len(), 1);
/// ```
pub fn filter_by_category(places: &[PlaceRecord], selection: &str) -> Vec<PlaceRecord> {
    let filter = CategoryFilter::from_selection(selection);
    places
        .iter()
        .filter(|place| filter.matches(place))
        .cloned()
        .collect()
}
