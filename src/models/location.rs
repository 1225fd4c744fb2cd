use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::coerce;
use crate::store::Document;

/// Field names in the DriverLocation / CustomerLocation collections.
pub mod fields {
    pub const LATITUDE: &str = "latitude";
    pub const LONGITUDE: &str = "longitude";
    pub const ADDRESS: &str = "address";
    pub const UPDATED_AT: &str = "updatedAt";
    pub const IS_ONLINE: &str = "isOnline";
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Reads an embedded `{latitude, longitude}` object; both coordinates
    /// must be present and numeric for the point to count.
    pub fn from_value(value: Option<&Value>) -> Option<Self> {
        let obj = value?.as_object()?;
        let latitude = coerce::numeric_field(obj, fields::LATITUDE)?;
        let longitude = coerce::numeric_field(obj, fields::LONGITUDE)?;
        Some(Self {
            latitude,
            longitude,
        })
    }
}

/// Point-in-time location as the dashboard renders it. Assembled from the
/// dedicated location collections with documented fallbacks; see
/// [`crate::live`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationSnapshot {
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub online: bool,
    pub updated_at: Option<String>,
}

impl LocationSnapshot {
    pub fn from_document(doc: &Document) -> Self {
        Self {
            latitude: coerce::numeric_field(doc, fields::LATITUDE).unwrap_or(0.0),
            longitude: coerce::numeric_field(doc, fields::LONGITUDE).unwrap_or(0.0),
            address: coerce::str_field(doc, fields::ADDRESS).unwrap_or_default(),
            online: coerce::bool_field(doc, fields::IS_ONLINE),
            updated_at: coerce::str_field(doc, fields::UPDATED_AT),
        }
    }

    pub fn from_point(point: GeoPoint, online: bool) -> Self {
        Self {
            latitude: point.latitude,
            longitude: point.longitude,
            address: String::new(),
            online,
            updated_at: None,
        }
    }

    /// Sentinel returned when neither the location collection nor the entity
    /// record can supply a position.
    pub fn unavailable() -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
            address: String::new(),
            online: false,
            updated_at: None,
        }
    }
}
