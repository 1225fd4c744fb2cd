use std::sync::Arc;

use tracing::warn;

use crate::models::{Customer, LocationSnapshot};
use crate::store::{collections, Document, DocumentStore};

pub struct CustomerReader {
    store: Arc<dyn DocumentStore>,
}

impl CustomerReader {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn all(&self) -> Vec<Customer> {
        match self.store.list(collections::CUSTOMERS).await {
            Ok(docs) => docs
                .into_iter()
                .map(|(id, doc)| Customer::from_document(id, &doc))
                .collect(),
            Err(err) => {
                warn!(error = %err, collection = collections::CUSTOMERS, "list failed; returning empty");
                Vec::new()
            }
        }
    }

    pub async fn by_id(&self, id: &str) -> Option<Customer> {
        match self.store.get(collections::CUSTOMERS, id).await {
            Ok(doc) => doc.map(|doc| Customer::from_document(id.to_string(), &doc)),
            Err(err) => {
                warn!(error = %err, customer_id = id, "customer fetch failed");
                None
            }
        }
    }

    pub async fn create(&self, data: Document) -> Option<String> {
        match self.store.create(collections::CUSTOMERS, data).await {
            Ok(id) => Some(id),
            Err(err) => {
                warn!(error = %err, "customer create failed");
                None
            }
        }
    }

    pub async fn update(&self, id: &str, patch: Document) -> bool {
        match self.store.update(collections::CUSTOMERS, id, patch).await {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, customer_id = id, "customer update failed");
                false
            }
        }
    }

    pub async fn delete(&self, id: &str) -> bool {
        match self.store.delete(collections::CUSTOMERS, id).await {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, customer_id = id, "customer delete failed");
                false
            }
        }
    }

    pub async fn location(&self, customer_id: &str) -> Option<LocationSnapshot> {
        match self
            .store
            .get(collections::CUSTOMER_LOCATION, customer_id)
            .await
        {
            Ok(doc) => doc.map(|doc| LocationSnapshot::from_document(&doc)),
            Err(err) => {
                warn!(error = %err, customer_id, "customer location fetch failed");
                None
            }
        }
    }
}
