//! Selection-driven filter/project/render session.
//!
//! One [`FilterSession`] owns the loaded row set, its label index and the
//! current selection, replacing ambient module-level state with an explicit
//! object any caller (event loop, web handler, test harness) can drive. The
//! session is fully synchronous: a selection event runs the whole
//! filter → project → render cycle before returning, so there is never more
//! than one cycle in flight and the latest completed selection is the one on
//! screen.
//!
//! Rendering itself lives behind the [`MapRenderer`] and [`TableRenderer`]
//! seams; this crate computes what to draw, collaborators decide how.

use geojson::FeatureCollection;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::categories::{category_labels, default_selection, filter_by_category};
use crate::error::Result;
use crate::features::to_feature_collection;
use crate::loader::{load_points, LoadConfig};
use crate::search::search_labels;
use crate::PlaceRecord;

/// Where the session is in the selection cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// The rendered output reflects the last completed selection.
    Idle,
    /// A selection was received and its filter/project/render cycle has not
    /// completed.
    Filtering,
}

/// Initial viewport for the map collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub center_lat: f64,
    pub center_lng: f64,
    pub zoom: u8,
}

impl Default for MapView {
    /// Central London, zoomed to roughly the loaded bounding box.
    fn default() -> Self {
        Self {
            center_lat: 51.5,
            center_lng: -0.06,
            zoom: 12,
        }
    }
}

/// Map-drawing collaborator.
pub trait MapRenderer {
    /// Draw the feature collection at the given viewport. `count` is the
    /// matched-row count, for captions such as
    /// [`place_count_label`](crate::place_count_label).
    fn render(
        &mut self,
        view: &MapView,
        collection: &FeatureCollection,
        count: usize,
    ) -> Result<()>;
}

/// Table-drawing collaborator; receives the filtered rows in row order.
pub trait TableRenderer {
    fn render(&mut self, places: &[PlaceRecord]) -> Result<()>;
}

/// The loaded dataset, its label index, and the selection state machine.
///
/// # Example
/// ```
/// use place_filter::{FilterSession, PlaceRecord};
///
/// let session = FilterSession::from_places(vec![
///     PlaceRecord::new(51.50, -0.10).with_categories(&["Cafe"]),
///     PlaceRecord::new(51.51, -0.12),
/// ]);
/// assert_eq!(session.labels(), ["None", "Cafe"]);
/// assert_eq!(session.default_selection(), Some("Cafe"));
/// ```
#[derive(Debug, Clone)]
pub struct FilterSession {
    places: Vec<PlaceRecord>,
    labels: Vec<String>,
    map_view: MapView,
    selection: Option<String>,
    state: SessionState,
}

impl FilterSession {
    /// Load the dataset and build a ready session.
    ///
    /// A load failure is fatal: the session is never constructed and the
    /// caller gets the error, so no UI initializes over missing data.
    pub fn load(config: &LoadConfig) -> Result<Self> {
        let places = load_points(config)?;
        Ok(Self::from_places(places))
    }

    /// Build a session over an already-loaded row set.
    pub fn from_places(places: Vec<PlaceRecord>) -> Self {
        let labels = category_labels(&places);
        info!(
            "session ready: {} places, {} selectable labels",
            places.len(),
            labels.len()
        );
        Self {
            places,
            labels,
            map_view: MapView::default(),
            selection: None,
            state: SessionState::Idle,
        }
    }

    /// Replace the initial viewport.
    pub fn with_map_view(mut self, view: MapView) -> Self {
        self.map_view = view;
        self
    }

    /// Run one selection cycle: filter the row set, project it to GeoJSON,
    /// and hand both to the render collaborators. Returns the matched-row
    /// count.
    ///
    /// The selection is recorded before rendering, so repeated calls are
    /// last-writer-wins whatever the render outcome. A collaborator's render
    /// failure is not caught here; it propagates and leaves the session in
    /// [`SessionState::Filtering`], with no claim that the screen matches the
    /// recorded selection.
    pub fn select<M, T>(&mut self, selection: &str, map: &mut M, table: &mut T) -> Result<usize>
    where
        M: MapRenderer,
        T: TableRenderer,
    {
        self.state = SessionState::Filtering;
        self.selection = Some(selection.to_string());

        let rows = filter_by_category(&self.places, selection);
        let collection = to_feature_collection(&rows);
        debug!(
            "selection {selection:?} matched {} of {} places",
            rows.len(),
            self.places.len()
        );

        map.render(&self.map_view, &collection, rows.len())?;
        table.render(&rows)?;

        self.state = SessionState::Idle;
        Ok(rows.len())
    }

    /// Narrow the label set for an incremental search query.
    ///
    /// A query matching nothing yields an empty list; that is a valid
    /// selector state, not an error.
    pub fn search(&self, query: &str) -> Vec<String> {
        search_labels(&self.labels, query)
    }

    /// The full selectable label set, uncategorized entry first.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The selector's initial value for this session's label set.
    pub fn default_selection(&self) -> Option<&str> {
        default_selection(&self.labels)
    }

    /// The most recently requested selection, rendered or not.
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Number of loaded rows (before any selection filtering).
    pub fn place_count(&self) -> usize {
        self.places.len()
    }

    /// The loaded row set.
    pub fn places(&self) -> &[PlaceRecord] {
        &self.places
    }

    /// The viewport handed to the map collaborator on every cycle.
    pub fn map_view(&self) -> &MapView {
        &self.map_view
    }
}
