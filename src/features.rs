//! GeoJSON projection of filtered rows.
//!
//! The map collaborator consumes a plain `FeatureCollection`; nothing here
//! draws anything. Every row becomes one point feature at the row's
//! coordinates with the row's full attribute map as its properties, so the
//! tooltip side of the map can show any column without a second lookup.

use geojson::{Feature, FeatureCollection, Geometry, Value};

use crate::PlaceRecord;

/// Project one row into a GeoJSON point feature.
///
/// The geometry follows the GeoJSON axis order, longitude before latitude.
/// Properties are the row's attributes verbatim, in column order.
pub fn to_feature(place: &PlaceRecord) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Point(vec![
            place.longitude,
            place.latitude,
        ]))),
        id: None,
        properties: Some(place.fields.clone()),
        foreign_members: None,
    }
}

/// Project a row set into a GeoJSON `FeatureCollection`, one feature per row
/// in row order.
///
/// An empty row set projects to an empty collection; rendering nothing is a
/// valid outcome, not an error.
///
/// # Example
/// ```
/// use place_filter::{to_feature_collection, PlaceRecord};
///
/// let places = vec![PlaceRecord::new(51.5036, -0.1120).with_categories(&["Attraction"])];
/// let collection = to_feature_collection(&places);
/// assert_eq!(collection.features.len(), 1);
/// ```
pub fn to_feature_collection(places: &[PlaceRecord]) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: places.iter().map(to_feature).collect(),
        foreign_members: None,
    }
}
