use serde::Serialize;

use crate::coerce;
use crate::store::Document;

/// Field names in the DeliveryRequests collection. The requesting customer
/// is stored under `userID` while the driver is `driverID`; inconsistent
/// casing preserved from the live data.
pub mod fields {
    pub const DRIVER_ID: &str = "driverID";
    pub const CUSTOMER_ID: &str = "userID";
    pub const STATUS: &str = "status";
    pub const DATE_CREATED: &str = "dateCreated";
    pub const DATE_UPDATED: &str = "dateUpdated";
    pub const PICKUP_ADDRESS: &str = "pickupAddress";
    pub const DELIVERY_ADDRESS: &str = "deliveryAddress";
    pub const CUSTOMER_NAME: &str = "customerName";
    pub const RECIPIENT_NAME: &str = "recipientName";
}

/// Monetary field precedence on a trip document. The first present field
/// wins; values coerce through [`coerce::money`].
pub const AMOUNT_FIELDS: &[&str] = &["amount", "fare", "totalAmount", "price"];

/// The status enum is open-ended; statuses outside these sets fall through
/// every bucket.
pub const ACTIVE_STATUSES: &[&str] = &[
    "pending",
    "accepted",
    "picked_up",
    "in_progress",
    "started",
    "ongoing",
];
pub const COMPLETED_STATUSES: &[&str] = &["completed", "ended", "delivered"];
pub const CANCELLED_STATUSES: &[&str] = &[
    "cancelled",
    "cancelled_by_driver",
    "cancelled_by_customer",
];

pub fn is_active_status(status: &str) -> bool {
    ACTIVE_STATUSES.contains(&status)
}

pub fn is_completed_status(status: &str) -> bool {
    COMPLETED_STATUSES.contains(&status)
}

pub fn is_cancelled_status(status: &str) -> bool {
    CANCELLED_STATUSES.contains(&status)
}

/// A delivery request. `driver_id` is absent until a driver takes the job;
/// `customer_name` / `recipient_name` are denormalized copies some trip
/// documents carry and enrichment falls back to.
#[derive(Debug, Clone, Serialize)]
pub struct Trip {
    pub id: String,
    pub driver_id: Option<String>,
    pub customer_id: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub pickup_address: Option<String>,
    pub delivery_address: Option<String>,
    pub customer_name: Option<String>,
    pub recipient_name: Option<String>,
    pub amount: f64,
}

impl Trip {
    pub fn from_document(id: String, doc: &Document) -> Self {
        Self {
            id,
            driver_id: coerce::str_field(doc, fields::DRIVER_ID),
            customer_id: coerce::str_field(doc, fields::CUSTOMER_ID),
            status: coerce::str_field(doc, fields::STATUS),
            created_at: coerce::str_field(doc, fields::DATE_CREATED),
            updated_at: coerce::str_field(doc, fields::DATE_UPDATED),
            pickup_address: coerce::str_field(doc, fields::PICKUP_ADDRESS),
            delivery_address: coerce::str_field(doc, fields::DELIVERY_ADDRESS),
            customer_name: coerce::str_field(doc, fields::CUSTOMER_NAME),
            recipient_name: coerce::str_field(doc, fields::RECIPIENT_NAME),
            amount: coerce::first_money(doc, AMOUNT_FIELDS),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status.as_deref().is_some_and(is_active_status)
    }

    pub fn is_completed(&self) -> bool {
        self.status.as_deref().is_some_and(is_completed_status)
    }

    pub fn is_cancelled(&self) -> bool {
        self.status.as_deref().is_some_and(is_cancelled_status)
    }
}
