use async_trait::async_trait;

use crate::error::StoreError;
use crate::observability::metrics::Metrics;
use crate::store::{Document, DocumentStore, Query};

/// Decorator counting every store operation by collection and outcome.
/// Behavior of the wrapped store is unchanged.
pub struct MeteredStore<S> {
    inner: S,
    metrics: Metrics,
}

impl<S: DocumentStore> MeteredStore<S> {
    pub fn new(inner: S, metrics: Metrics) -> Self {
        Self { inner, metrics }
    }

    fn record_read<T>(&self, collection: &str, result: &Result<T, StoreError>) {
        self.metrics
            .store_reads_total
            .with_label_values(&[collection, outcome(result)])
            .inc();
    }

    fn record_write<T>(&self, collection: &str, result: &Result<T, StoreError>) {
        self.metrics
            .store_writes_total
            .with_label_values(&[collection, outcome(result)])
            .inc();
    }
}

fn outcome<T>(result: &Result<T, StoreError>) -> &'static str {
    if result.is_ok() { "success" } else { "error" }
}

#[async_trait]
impl<S: DocumentStore> DocumentStore for MeteredStore<S> {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        let result = self.inner.get(collection, id).await;
        self.record_read(collection, &result);
        result
    }

    async fn list(&self, collection: &str) -> Result<Vec<(String, Document)>, StoreError> {
        let result = self.inner.list(collection).await;
        self.record_read(collection, &result);
        result
    }

    async fn query(
        &self,
        collection: &str,
        query: &Query,
    ) -> Result<Vec<(String, Document)>, StoreError> {
        let result = self.inner.query(collection, query).await;
        self.record_read(collection, &result);
        result
    }

    async fn create(&self, collection: &str, data: Document) -> Result<String, StoreError> {
        let result = self.inner.create(collection, data).await;
        self.record_write(collection, &result);
        result
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        patch: Document,
    ) -> Result<(), StoreError> {
        let result = self.inner.update(collection, id, patch).await;
        self.record_write(collection, &result);
        result
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let result = self.inner.delete(collection, id).await;
        self.record_write(collection, &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::MeteredStore;
    use crate::observability::metrics::Metrics;
    use crate::store::memory::MemoryStore;
    use crate::store::{collections, DocumentStore};

    #[tokio::test]
    async fn operations_are_counted_by_outcome() {
        let metrics = Metrics::new();
        let store = MeteredStore::new(MemoryStore::new(), metrics.clone());

        let mut doc = crate::store::Document::new();
        doc.insert("firstName".to_string(), json!("Ada"));
        let id = store.create(collections::DRIVERS, doc).await.expect("create");
        let _ = store.get(collections::DRIVERS, &id).await.expect("get");
        assert!(store
            .update(collections::DRIVERS, "missing", crate::store::Document::new())
            .await
            .is_err());

        let body = metrics.encode().expect("encode");
        assert!(body.contains("store_reads_total"));
        assert!(body.contains("store_writes_total"));
        assert!(body.contains("outcome=\"error\""));
    }
}
