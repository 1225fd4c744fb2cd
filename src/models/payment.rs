use serde::Serialize;

use crate::coerce;
use crate::store::Document;

/// Field names in the PaymentMode collection.
pub mod mode_fields {
    pub const NAME: &str = "name";
    pub const IS_ACTIVE: &str = "isActive";
}

/// Field names in the PaymentSettings collection.
pub mod setting_fields {
    pub const VEHICLE_TYPE_ID: &str = "vehicleTypeID";
    pub const PRICE_PER_KM: &str = "pricePerKm";
    pub const ADD_ON_FEE: &str = "addOnFee";
}

#[derive(Debug, Clone, Serialize)]
pub struct PaymentMode {
    pub id: String,
    pub name: Option<String>,
    pub is_active: bool,
}

impl PaymentMode {
    pub fn from_document(id: String, doc: &Document) -> Self {
        Self {
            id,
            name: coerce::str_field(doc, mode_fields::NAME),
            is_active: coerce::bool_field(doc, mode_fields::IS_ACTIVE),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PaymentSetting {
    pub id: String,
    pub vehicle_type_id: Option<String>,
    pub price_per_km: f64,
    pub add_on_fee: f64,
}

impl PaymentSetting {
    pub fn from_document(id: String, doc: &Document) -> Self {
        Self {
            id,
            vehicle_type_id: coerce::str_field(doc, setting_fields::VEHICLE_TYPE_ID),
            price_per_km: coerce::first_money(doc, &[setting_fields::PRICE_PER_KM]),
            add_on_fee: coerce::first_money(doc, &[setting_fields::ADD_ON_FEE]),
        }
    }
}
