//! Dataset loading for the points-of-interest table.
//!
//! The parquet table is read exactly once at startup. Rows outside the
//! configured bounding box are dropped, and storage-only geometry columns are
//! stripped with a read-time projection so they never reach the row set.
//! File-level failures are fatal; individual rows with unusable coordinates
//! are skipped and counted instead of aborting the load.

use std::fs::File;
use std::path::{Path, PathBuf};

use log::{info, warn};
use parquet::file::reader::{FileReader, SerializedFileReader};
use parquet::schema::types::Type as SchemaType;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    BoundingBox, PlaceFilterError, PlaceRecord, Result, CATEGORY_COLUMN, LATITUDE_COLUMN,
    LONGITUDE_COLUMN,
};

/// Default dataset file: the UK subset of Foursquare Open Source Places.
pub const PLACES_DATASET: &str = "fsq-osp_uk.zstd.parquet";

/// Storage-only columns excluded from the working row set.
pub const EXCLUDED_COLUMNS: &[&str] = &["geom", "bbox"];

/// Rough coordinate box of London.
pub const LONDON_BBOX: BoundingBox = BoundingBox::new(
    51.42, 51.59, // Streatham, Tottenham (South, North)
    -0.24, 0.06, // Putney, Barking (West, East)
);

/// Configuration for the one-time dataset load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    /// Path to the parquet POI table.
    pub path: PathBuf,
    /// Rows outside this box are dropped at load time.
    pub bbox: BoundingBox,
    /// Columns stripped from the working set before decoding.
    pub excluded_columns: Vec<String>,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(PLACES_DATASET),
            bbox: LONDON_BBOX,
            excluded_columns: EXCLUDED_COLUMNS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl LoadConfig {
    /// Config for a specific file, keeping the default box and exclusions.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }
}

/// Load the point table, keeping only rows inside `config.bbox`.
///
/// Fails with [`PlaceFilterError::DataUnavailable`] when the file is missing
/// or unreadable. This is the only I/O in the crate; everything downstream
/// operates on the returned vector.
pub fn load_points(config: &LoadConfig) -> Result<Vec<PlaceRecord>> {
    let file = File::open(&config.path).map_err(|err| data_unavailable(&config.path, err))?;
    let reader =
        SerializedFileReader::new(file).map_err(|err| data_unavailable(&config.path, err))?;

    let projection = projected_schema(&reader, &config.excluded_columns)
        .map_err(|err| data_unavailable(&config.path, err))?;
    let rows = reader
        .get_row_iter(Some(projection))
        .map_err(|err| data_unavailable(&config.path, err))?;

    let mut places = Vec::new();
    let mut outside = 0usize;
    let mut unusable = 0usize;
    for row in rows {
        let row = row.map_err(|err| data_unavailable(&config.path, err))?;
        match decode_place(row.to_json_value()) {
            Some(place) if config.bbox.contains(place.latitude, place.longitude) => {
                places.push(place)
            }
            Some(_) => outside += 1,
            None => unusable += 1,
        }
    }

    if unusable > 0 {
        warn!("skipped {unusable} rows with unusable coordinates");
    }
    info!(
        "loaded {} places from {} ({} outside the bounding box)",
        places.len(),
        config.path.display(),
        outside
    );
    Ok(places)
}

/// Convenience wrapper: the default dataset restricted to [`LONDON_BBOX`].
pub fn load_london_places() -> Result<Vec<PlaceRecord>> {
    load_points(&LoadConfig::default())
}

fn data_unavailable(path: &Path, reason: impl std::fmt::Display) -> PlaceFilterError {
    PlaceFilterError::DataUnavailable {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Clone the file schema minus the excluded columns, so dropped columns are
/// never even decoded.
fn projected_schema(
    reader: &SerializedFileReader<File>,
    excluded: &[String],
) -> parquet::errors::Result<SchemaType> {
    let root = reader.metadata().file_metadata().schema_descr().root_schema();
    let fields = root
        .get_fields()
        .iter()
        .filter(|field| !excluded.iter().any(|name| name == field.name()))
        .cloned()
        .collect();
    SchemaType::group_type_builder(root.name())
        .with_fields(fields)
        .build()
}

/// Decode one JSON row into a [`PlaceRecord`].
///
/// Returns `None` when the coordinates are missing or unusable; the caller
/// counts and skips those rows. A malformed category value never rejects the
/// row — see [`decode_categories`].
fn decode_place(row: Value) -> Option<PlaceRecord> {
    let Value::Object(fields) = row else {
        return None;
    };
    let latitude = fields.get(LATITUDE_COLUMN).and_then(Value::as_f64)?;
    let longitude = fields.get(LONGITUDE_COLUMN).and_then(Value::as_f64)?;
    let categories = decode_categories(fields.get(CATEGORY_COLUMN));
    let place = PlaceRecord {
        latitude,
        longitude,
        categories,
        fields,
    };
    place.is_valid().then_some(place)
}

/// Decode the multi-valued category column.
///
/// Null and empty both mean "no categories". A value that is neither null nor
/// a sequence of strings is malformed: the row is treated as uncategorized,
/// with a warning, rather than aborting the cycle.
fn decode_categories(value: Option<&Value>) -> Option<Vec<String>> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => {
            let mut labels = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(label) => labels.push(label.clone()),
                    other => {
                        warn!("non-string category label {other}; treating row as uncategorized");
                        return None;
                    }
                }
            }
            if labels.is_empty() {
                None
            } else {
                Some(labels)
            }
        }
        Some(other) => {
            warn!("malformed category field {other}; treating row as uncategorized");
            None
        }
    }
}
