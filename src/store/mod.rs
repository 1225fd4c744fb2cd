pub mod memory;
pub mod metered;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::StoreError;

/// A raw schema-less record as the store hands it back. The store's native
/// key travels alongside, never inside, the document; readers inject it as
/// an explicit `id` field on their typed records.
pub type Document = serde_json::Map<String, Value>;

/// Collection names are fixed, case-sensitive constants. The hosted store
/// matches them exactly, so they live in one place.
pub mod collections {
    pub const DRIVERS: &str = "Drivers";
    pub const CUSTOMERS: &str = "Customers";
    pub const VEHICLE_DETAILS: &str = "VehicleDetails";
    pub const VEHICLE_TYPES: &str = "VehicleTypes";
    pub const DELIVERY_REQUESTS: &str = "DeliveryRequests";
    pub const DRIVERS_RATINGS: &str = "DriversRatings";
    pub const DRIVER_BALANCES: &str = "DriverBalances";
    pub const DRIVER_LOCATION: &str = "DriverLocation";
    pub const CUSTOMER_LOCATION: &str = "CustomerLocation";
    pub const PAYMENT_MODE: &str = "PaymentMode";
    pub const PAYMENT_SETTINGS: &str = "PaymentSettings";
    pub const FAQS: &str = "FAQs";
    pub const DRIVERS_DOCUMENTS: &str = "DriversDocuments";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Filtered query: equality terms, an optional `in` term, optional ordering
/// and an optional result cap. Everything composes with everything.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pub equals: Vec<(String, Value)>,
    pub within: Option<(String, Vec<Value>)>,
    pub order_by: Option<(String, Direction)>,
    pub limit: Option<usize>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn equal(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.equals.push((field.to_string(), value.into()));
        self
    }

    pub fn within(mut self, field: &str, values: Vec<Value>) -> Self {
        self.within = Some((field.to_string(), values));
        self
    }

    pub fn order_by(mut self, field: &str, direction: Direction) -> Self {
        self.order_by = Some((field.to_string(), direction));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Narrow contract over the hosted document database. Implementations exist
/// for the real backend (host application side) and for an in-memory map
/// ([`memory::MemoryStore`]) used in tests.
///
/// A missing document is `Ok(None)`, never an error; [`StoreError`] is
/// reserved for connection-level and backend-reported faults so callers can
/// tell "nothing there" apart from "store is down".
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError>;

    /// Unordered snapshot of a whole collection as `(id, document)` pairs.
    async fn list(&self, collection: &str) -> Result<Vec<(String, Document)>, StoreError>;

    async fn query(
        &self,
        collection: &str,
        query: &Query,
    ) -> Result<Vec<(String, Document)>, StoreError>;

    /// Creates a document under a fresh store-assigned id and returns it.
    async fn create(&self, collection: &str, data: Document) -> Result<String, StoreError>;

    /// Merges `patch` into an existing document. Updating a missing id is a
    /// backend fault, mirroring the hosted store's update semantics.
    async fn update(&self, collection: &str, id: &str, patch: Document)
        -> Result<(), StoreError>;

    /// Deleting an absent id succeeds; the hosted store reports success for
    /// delete-of-absent and this contract pins that behavior down.
    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError>;
}
