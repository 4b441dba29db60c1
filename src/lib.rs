//! # Place Filter
//!
//! Category filtering and GeoJSON projection for a Foursquare-style
//! points-of-interest dataset, scoped to a bounding box approximating London.
//!
//! This library provides:
//! - One-time loading of a columnar (parquet) POI table restricted to a
//!   bounding box, with storage-only columns stripped
//! - A category label index with a pinned "None" entry standing in for
//!   uncategorized places
//! - Exact-label row filtering and case-insensitive label search
//! - Projection of a filtered row set into a GeoJSON `FeatureCollection`
//! - A synchronous interaction session that re-filters, re-projects and hands
//!   results to map/table render collaborators
//!
//! The map widget, table renderer and selector widgets live in the embedding
//! application; this crate only produces the plain data they render.
//!
//! ## Quick Start
//!
//! ```rust
//! use place_filter::{category_labels, filter_by_category, to_feature_collection, PlaceRecord};
//!
//! let places = vec![
//!     PlaceRecord::new(51.5036, -0.1120).with_categories(&["Cafe"]),
//!     PlaceRecord::new(51.5055, -0.0754),
//! ];
//!
//! // Index 0 is always the "None" entry for uncategorized places.
//! let labels = category_labels(&places);
//! assert_eq!(labels, vec!["None".to_string(), "Cafe".to_string()]);
//!
//! let uncategorized = filter_by_category(&places, "None");
//! assert_eq!(uncategorized.len(), 1);
//!
//! let collection = to_feature_collection(&places);
//! assert_eq!(collection.features.len(), 2);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// Unified error handling
pub mod error;
pub use error::{PlaceFilterError, Result};

// Dataset loading (parquet -> bounded row set)
pub mod loader;
pub use loader::{load_london_places, load_points, LoadConfig, EXCLUDED_COLUMNS, LONDON_BBOX};

// Category index and row predicates
pub mod categories;
pub use categories::{
    category_labels, default_selection, filter_by_category, CategoryFilter, UNCATEGORIZED_LABEL,
};

// Incremental label search for the selector widget
pub mod search;
pub use search::search_labels;

// GeoJSON feature projection for the map collaborator
pub mod features;
pub use features::to_feature_collection;

// Column aliases and count formatting for table/tooltip collaborators
pub mod display;
pub use display::{column_alias, column_aliases, column_names, place_count_label};

// Interaction session driving the filter/project/render cycle
pub mod session;
pub use session::{FilterSession, MapRenderer, MapView, SessionState, TableRenderer};

// ============================================================================
// Core Types
// ============================================================================

/// Column holding the latitude in degrees.
pub const LATITUDE_COLUMN: &str = "latitude";

/// Column holding the longitude in degrees.
pub const LONGITUDE_COLUMN: &str = "longitude";

/// Multi-valued category label column. Null or empty means "no categories".
pub const CATEGORY_COLUMN: &str = "fsq_category_labels";

/// One point-of-interest row.
///
/// `fields` is the complete ordered column→value mapping for the row as read
/// from storage (minus the dropped geometry columns) and is what table
/// renderers and feature properties consume. `latitude`, `longitude` and
/// `categories` are typed copies decoded from it for filtering; the builder
/// methods keep both representations consistent.
///
/// # Example
/// ```
/// use place_filter::PlaceRecord;
/// let place = PlaceRecord::new(51.5074, -0.1278).with_categories(&["Museum"]);
/// assert!(!place.is_uncategorized());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub latitude: f64,
    pub longitude: f64,
    /// Decoded category labels; `None` when the row has none (null, empty, or
    /// an unusable value in the category column).
    pub categories: Option<Vec<String>>,
    /// Full column→value mapping in file column order.
    pub fields: Map<String, Value>,
}

impl PlaceRecord {
    /// Create a record with just coordinates and a null category column.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        let mut fields = Map::new();
        fields.insert(LATITUDE_COLUMN.to_string(), Value::from(latitude));
        fields.insert(LONGITUDE_COLUMN.to_string(), Value::from(longitude));
        fields.insert(CATEGORY_COLUMN.to_string(), Value::Null);
        Self {
            latitude,
            longitude,
            categories: None,
            fields,
        }
    }

    /// Set the category labels, mirroring them into the raw field map.
    /// An empty slice leaves the record uncategorized.
    pub fn with_categories(mut self, labels: &[&str]) -> Self {
        let labels: Vec<String> = labels.iter().map(|l| l.to_string()).collect();
        self.fields
            .insert(CATEGORY_COLUMN.to_string(), Value::from(labels.clone()));
        self.categories = if labels.is_empty() { None } else { Some(labels) };
        self
    }

    /// Attach an additional attribute column (name, address, postcode, ...).
    pub fn with_attribute(mut self, column: &str, value: Value) -> Self {
        self.fields.insert(column.to_string(), value);
        self
    }

    /// Check if the record has plausible coordinates.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }

    /// True when the row carries no category labels at all.
    pub fn is_uncategorized(&self) -> bool {
        self.categories.as_deref().map_or(true, |c| c.is_empty())
    }
}

/// A closed-interval latitude/longitude box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    pub const fn new(min_lat: f64, max_lat: f64, min_lng: f64, max_lng: f64) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lng,
            max_lng,
        }
    }

    /// Containment check; both interval ends are inclusive.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        latitude >= self.min_lat
            && latitude <= self.max_lat
            && longitude >= self.min_lng
            && longitude <= self.max_lng
    }

    /// Center of the box as `(latitude, longitude)`.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
