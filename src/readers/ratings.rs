use std::sync::Arc;

use tracing::warn;

use crate::models::rating::fields;
use crate::models::Rating;
use crate::store::{collections, DocumentStore, Query};

pub struct RatingReader {
    store: Arc<dyn DocumentStore>,
}

impl RatingReader {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn all(&self) -> Vec<Rating> {
        match self.store.list(collections::DRIVERS_RATINGS).await {
            Ok(docs) => docs
                .into_iter()
                .map(|(id, doc)| Rating::from_document(id, &doc))
                .collect(),
            Err(err) => {
                warn!(error = %err, collection = collections::DRIVERS_RATINGS, "list failed; returning empty");
                Vec::new()
            }
        }
    }

    pub async fn for_driver(&self, driver_id: &str) -> Vec<Rating> {
        let query = Query::new().equal(fields::DRIVER_ID, driver_id);
        match self.store.query(collections::DRIVERS_RATINGS, &query).await {
            Ok(docs) => docs
                .into_iter()
                .map(|(id, doc)| Rating::from_document(id, &doc))
                .collect(),
            Err(err) => {
                warn!(error = %err, driver_id, "rating query failed; returning empty");
                Vec::new()
            }
        }
    }
}
