use std::sync::Arc;

use tracing::warn;

use crate::models::Faq;
use crate::store::{collections, Document, DocumentStore};

pub struct FaqReader {
    store: Arc<dyn DocumentStore>,
}

impl FaqReader {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn all(&self) -> Vec<Faq> {
        match self.store.list(collections::FAQS).await {
            Ok(docs) => docs
                .into_iter()
                .map(|(id, doc)| Faq::from_document(id, &doc))
                .collect(),
            Err(err) => {
                warn!(error = %err, collection = collections::FAQS, "list failed; returning empty");
                Vec::new()
            }
        }
    }

    pub async fn by_id(&self, id: &str) -> Option<Faq> {
        match self.store.get(collections::FAQS, id).await {
            Ok(doc) => doc.map(|doc| Faq::from_document(id.to_string(), &doc)),
            Err(err) => {
                warn!(error = %err, faq_id = id, "faq fetch failed");
                None
            }
        }
    }

    pub async fn create(&self, data: Document) -> Option<String> {
        match self.store.create(collections::FAQS, data).await {
            Ok(id) => Some(id),
            Err(err) => {
                warn!(error = %err, "faq create failed");
                None
            }
        }
    }

    pub async fn update(&self, id: &str, patch: Document) -> bool {
        match self.store.update(collections::FAQS, id, patch).await {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, faq_id = id, "faq update failed");
                false
            }
        }
    }

    pub async fn delete(&self, id: &str) -> bool {
        match self.store.delete(collections::FAQS, id).await {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, faq_id = id, "faq delete failed");
                false
            }
        }
    }
}
