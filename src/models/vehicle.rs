use serde::Serialize;

use crate::coerce;
use crate::store::Document;

/// Field names in the VehicleDetails collection. The owning driver is
/// stored under `userID`.
pub mod fields {
    pub const DRIVER_ID: &str = "userID";
    pub const IS_APPROVED: &str = "isApproved";
    pub const MODEL: &str = "model";
    pub const PLATE_NUMBER: &str = "plateNumber";
}

/// Field names in the VehicleTypes collection.
pub mod type_fields {
    pub const NAME: &str = "name";
    pub const ICON: &str = "icon";
}

#[derive(Debug, Clone, Serialize)]
pub struct Vehicle {
    pub id: String,
    pub driver_id: Option<String>,
    pub is_approved: bool,
    pub model: Option<String>,
    pub plate_number: Option<String>,
}

impl Vehicle {
    pub fn from_document(id: String, doc: &Document) -> Self {
        Self {
            id,
            driver_id: coerce::str_field(doc, fields::DRIVER_ID),
            is_approved: coerce::bool_field(doc, fields::IS_APPROVED),
            model: coerce::str_field(doc, fields::MODEL),
            plate_number: coerce::str_field(doc, fields::PLATE_NUMBER),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VehicleType {
    pub id: String,
    pub name: Option<String>,
    pub icon: Option<String>,
}

impl VehicleType {
    pub fn from_document(id: String, doc: &Document) -> Self {
        Self {
            id,
            name: coerce::str_field(doc, type_fields::NAME),
            icon: coerce::str_field(doc, type_fields::ICON),
        }
    }
}
