use std::sync::Arc;

use tracing::warn;

use crate::models::vehicle::fields;
use crate::models::{Vehicle, VehicleType};
use crate::store::{collections, Document, DocumentStore, Query};

pub struct VehicleReader {
    store: Arc<dyn DocumentStore>,
}

impl VehicleReader {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn all(&self) -> Vec<Vehicle> {
        match self.store.list(collections::VEHICLE_DETAILS).await {
            Ok(docs) => docs
                .into_iter()
                .map(|(id, doc)| Vehicle::from_document(id, &doc))
                .collect(),
            Err(err) => {
                warn!(error = %err, collection = collections::VEHICLE_DETAILS, "list failed; returning empty");
                Vec::new()
            }
        }
    }

    pub async fn by_id(&self, id: &str) -> Option<Vehicle> {
        match self.store.get(collections::VEHICLE_DETAILS, id).await {
            Ok(doc) => doc.map(|doc| Vehicle::from_document(id.to_string(), &doc)),
            Err(err) => {
                warn!(error = %err, vehicle_id = id, "vehicle fetch failed");
                None
            }
        }
    }

    /// The vehicle registered to a driver, if any. Drivers hold at most one
    /// active vehicle; the first match wins.
    pub async fn by_driver(&self, driver_id: &str) -> Option<Vehicle> {
        let query = Query::new().equal(fields::DRIVER_ID, driver_id).limit(1);
        match self.store.query(collections::VEHICLE_DETAILS, &query).await {
            Ok(docs) => docs
                .into_iter()
                .next()
                .map(|(id, doc)| Vehicle::from_document(id, &doc)),
            Err(err) => {
                warn!(error = %err, driver_id, "vehicle query failed");
                None
            }
        }
    }

    pub async fn update(&self, id: &str, patch: Document) -> bool {
        match self.store.update(collections::VEHICLE_DETAILS, id, patch).await {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, vehicle_id = id, "vehicle update failed");
                false
            }
        }
    }

    pub async fn delete(&self, id: &str) -> bool {
        match self.store.delete(collections::VEHICLE_DETAILS, id).await {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, vehicle_id = id, "vehicle delete failed");
                false
            }
        }
    }

    pub async fn types(&self) -> Vec<VehicleType> {
        match self.store.list(collections::VEHICLE_TYPES).await {
            Ok(docs) => docs
                .into_iter()
                .map(|(id, doc)| VehicleType::from_document(id, &doc))
                .collect(),
            Err(err) => {
                warn!(error = %err, collection = collections::VEHICLE_TYPES, "list failed; returning empty");
                Vec::new()
            }
        }
    }

    pub async fn type_by_id(&self, id: &str) -> Option<VehicleType> {
        match self.store.get(collections::VEHICLE_TYPES, id).await {
            Ok(doc) => doc.map(|doc| VehicleType::from_document(id.to_string(), &doc)),
            Err(err) => {
                warn!(error = %err, vehicle_type_id = id, "vehicle type fetch failed");
                None
            }
        }
    }
}
