use std::sync::Arc;

use tracing::warn;

use crate::models::{Balance, Driver, LocationSnapshot};
use crate::store::{collections, Document, DocumentStore};

pub struct DriverReader {
    store: Arc<dyn DocumentStore>,
}

impl DriverReader {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn all(&self) -> Vec<Driver> {
        match self.store.list(collections::DRIVERS).await {
            Ok(docs) => docs
                .into_iter()
                .map(|(id, doc)| Driver::from_document(id, &doc))
                .collect(),
            Err(err) => {
                warn!(error = %err, collection = collections::DRIVERS, "list failed; returning empty");
                Vec::new()
            }
        }
    }

    pub async fn by_id(&self, id: &str) -> Option<Driver> {
        match self.store.get(collections::DRIVERS, id).await {
            Ok(doc) => doc.map(|doc| Driver::from_document(id.to_string(), &doc)),
            Err(err) => {
                warn!(error = %err, driver_id = id, "driver fetch failed");
                None
            }
        }
    }

    pub async fn create(&self, data: Document) -> Option<String> {
        match self.store.create(collections::DRIVERS, data).await {
            Ok(id) => Some(id),
            Err(err) => {
                warn!(error = %err, "driver create failed");
                None
            }
        }
    }

    pub async fn update(&self, id: &str, patch: Document) -> bool {
        match self.store.update(collections::DRIVERS, id, patch).await {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, driver_id = id, "driver update failed");
                false
            }
        }
    }

    pub async fn delete(&self, id: &str) -> bool {
        match self.store.delete(collections::DRIVERS, id).await {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, driver_id = id, "driver delete failed");
                false
            }
        }
    }

    /// Uploaded verification documents, keyed by driver id. Returned raw:
    /// the document set varies per driver and the review page renders it
    /// as-is.
    pub async fn documents(&self, driver_id: &str) -> Option<Document> {
        match self
            .store
            .get(collections::DRIVERS_DOCUMENTS, driver_id)
            .await
        {
            Ok(doc) => doc,
            Err(err) => {
                warn!(error = %err, driver_id, "driver documents fetch failed");
                None
            }
        }
    }

    pub async fn balance(&self, driver_id: &str) -> Option<Balance> {
        match self.store.get(collections::DRIVER_BALANCES, driver_id).await {
            Ok(doc) => doc.map(|doc| Balance::from_document(driver_id.to_string(), &doc)),
            Err(err) => {
                warn!(error = %err, driver_id, "driver balance fetch failed");
                None
            }
        }
    }

    pub async fn location(&self, driver_id: &str) -> Option<LocationSnapshot> {
        match self.store.get(collections::DRIVER_LOCATION, driver_id).await {
            Ok(doc) => doc.map(|doc| LocationSnapshot::from_document(&doc)),
            Err(err) => {
                warn!(error = %err, driver_id, "driver location fetch failed");
                None
            }
        }
    }
}
