use std::sync::Arc;

use tracing::warn;

use crate::models::{PaymentMode, PaymentSetting};
use crate::store::{collections, Document, DocumentStore};

pub struct PaymentReader {
    store: Arc<dyn DocumentStore>,
}

impl PaymentReader {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn modes(&self) -> Vec<PaymentMode> {
        match self.store.list(collections::PAYMENT_MODE).await {
            Ok(docs) => docs
                .into_iter()
                .map(|(id, doc)| PaymentMode::from_document(id, &doc))
                .collect(),
            Err(err) => {
                warn!(error = %err, collection = collections::PAYMENT_MODE, "list failed; returning empty");
                Vec::new()
            }
        }
    }

    pub async fn settings(&self) -> Vec<PaymentSetting> {
        match self.store.list(collections::PAYMENT_SETTINGS).await {
            Ok(docs) => docs
                .into_iter()
                .map(|(id, doc)| PaymentSetting::from_document(id, &doc))
                .collect(),
            Err(err) => {
                warn!(error = %err, collection = collections::PAYMENT_SETTINGS, "list failed; returning empty");
                Vec::new()
            }
        }
    }

    pub async fn create_mode(&self, data: Document) -> Option<String> {
        match self.store.create(collections::PAYMENT_MODE, data).await {
            Ok(id) => Some(id),
            Err(err) => {
                warn!(error = %err, "payment mode create failed");
                None
            }
        }
    }

    pub async fn update_mode(&self, id: &str, patch: Document) -> bool {
        match self.store.update(collections::PAYMENT_MODE, id, patch).await {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, mode_id = id, "payment mode update failed");
                false
            }
        }
    }

    pub async fn delete_mode(&self, id: &str) -> bool {
        match self.store.delete(collections::PAYMENT_MODE, id).await {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, mode_id = id, "payment mode delete failed");
                false
            }
        }
    }

    pub async fn create_setting(&self, data: Document) -> Option<String> {
        match self.store.create(collections::PAYMENT_SETTINGS, data).await {
            Ok(id) => Some(id),
            Err(err) => {
                warn!(error = %err, "payment setting create failed");
                None
            }
        }
    }

    pub async fn update_setting(&self, id: &str, patch: Document) -> bool {
        match self
            .store
            .update(collections::PAYMENT_SETTINGS, id, patch)
            .await
        {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, setting_id = id, "payment setting update failed");
                false
            }
        }
    }

    pub async fn delete_setting(&self, id: &str) -> bool {
        match self.store.delete(collections::PAYMENT_SETTINGS, id).await {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, setting_id = id, "payment setting delete failed");
                false
            }
        }
    }
}
