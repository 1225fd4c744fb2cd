use std::sync::Arc;

use tracing::warn;

use crate::models::trip::fields;
use crate::models::Trip;
use crate::store::{collections, Document, DocumentStore, Query};

pub struct TripReader {
    store: Arc<dyn DocumentStore>,
}

impl TripReader {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn all(&self) -> Vec<Trip> {
        match self.store.list(collections::DELIVERY_REQUESTS).await {
            Ok(docs) => docs
                .into_iter()
                .map(|(id, doc)| Trip::from_document(id, &doc))
                .collect(),
            Err(err) => {
                warn!(error = %err, collection = collections::DELIVERY_REQUESTS, "list failed; returning empty");
                Vec::new()
            }
        }
    }

    pub async fn by_id(&self, id: &str) -> Option<Trip> {
        match self.store.get(collections::DELIVERY_REQUESTS, id).await {
            Ok(doc) => doc.map(|doc| Trip::from_document(id.to_string(), &doc)),
            Err(err) => {
                warn!(error = %err, trip_id = id, "trip fetch failed");
                None
            }
        }
    }

    pub async fn for_driver(&self, driver_id: &str) -> Vec<Trip> {
        let query = Query::new().equal(fields::DRIVER_ID, driver_id);
        match self.store.query(collections::DELIVERY_REQUESTS, &query).await {
            Ok(docs) => docs
                .into_iter()
                .map(|(id, doc)| Trip::from_document(id, &doc))
                .collect(),
            Err(err) => {
                warn!(error = %err, driver_id, "trip query failed; returning empty");
                Vec::new()
            }
        }
    }

    /// Arbitrary trip linking this driver and customer, if any. Deliberately
    /// unordered with a single-result cap: there is no stored foreign key
    /// from ratings to trips, so this lookup is best-effort only and must
    /// not require a secondary sort index.
    pub async fn for_driver_and_customer(
        &self,
        driver_id: &str,
        customer_id: &str,
    ) -> Option<Trip> {
        let query = Query::new()
            .equal(fields::DRIVER_ID, driver_id)
            .equal(fields::CUSTOMER_ID, customer_id)
            .limit(1);

        match self.store.query(collections::DELIVERY_REQUESTS, &query).await {
            Ok(docs) => docs
                .into_iter()
                .next()
                .map(|(id, doc)| Trip::from_document(id, &doc)),
            Err(err) => {
                warn!(error = %err, driver_id, customer_id, "trip pair query failed");
                None
            }
        }
    }

    pub async fn update(&self, id: &str, patch: Document) -> bool {
        match self
            .store
            .update(collections::DELIVERY_REQUESTS, id, patch)
            .await
        {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, trip_id = id, "trip update failed");
                false
            }
        }
    }

    pub async fn delete(&self, id: &str) -> bool {
        match self.store.delete(collections::DELIVERY_REQUESTS, id).await {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, trip_id = id, "trip delete failed");
                false
            }
        }
    }
}
