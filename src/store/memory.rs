use std::cmp::Ordering;

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use uuid::Uuid;

use crate::error::StoreError;
use crate::store::{Direction, Document, DocumentStore, Query};

/// In-memory [`DocumentStore`] backed by per-collection maps. Test double
/// for the hosted backend; implements the full adapter contract including
/// filtered queries, ordering and limits.
#[derive(Default)]
pub struct MemoryStore {
    collections: DashMap<String, DashMap<String, Document>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a document under a caller-chosen id. Not part of the adapter
    /// contract; some collections (balances, locations, driver documents)
    /// are keyed by driver id, and tests need to seed them directly.
    pub fn insert(&self, collection: &str, id: &str, data: Document) {
        self.collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), data);
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        Ok(self
            .collections
            .get(collection)
            .and_then(|docs| docs.get(id).map(|doc| doc.clone())))
    }

    async fn list(&self, collection: &str) -> Result<Vec<(String, Document)>, StoreError> {
        let Some(docs) = self.collections.get(collection) else {
            return Ok(Vec::new());
        };

        Ok(docs
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect())
    }

    async fn query(
        &self,
        collection: &str,
        query: &Query,
    ) -> Result<Vec<(String, Document)>, StoreError> {
        let mut matches: Vec<(String, Document)> = self
            .list(collection)
            .await?
            .into_iter()
            .filter(|(_, doc)| matches_query(doc, query))
            .collect();

        if let Some((field, direction)) = &query.order_by {
            matches.sort_by(|(_, a), (_, b)| {
                let ordering = compare_field(a.get(field), b.get(field));
                match direction {
                    Direction::Ascending => ordering,
                    Direction::Descending => ordering.reverse(),
                }
            });
        }

        if let Some(limit) = query.limit {
            matches.truncate(limit);
        }

        Ok(matches)
    }

    async fn create(&self, collection: &str, data: Document) -> Result<String, StoreError> {
        let id = Uuid::new_v4().to_string();
        self.insert(collection, &id, data);
        Ok(id)
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        patch: Document,
    ) -> Result<(), StoreError> {
        let docs = self
            .collections
            .entry(collection.to_string())
            .or_default();

        let Some(mut doc) = docs.get_mut(id) else {
            return Err(StoreError::Backend(format!(
                "no document {id} in {collection}"
            )));
        };

        for (key, value) in patch {
            doc.insert(key, value);
        }
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        if let Some(docs) = self.collections.get(collection) {
            docs.remove(id);
        }
        // Delete-of-absent reports success, matching the hosted store.
        Ok(())
    }
}

fn matches_query(doc: &Document, query: &Query) -> bool {
    let equals_hold = query
        .equals
        .iter()
        .all(|(field, value)| doc.get(field) == Some(value));

    let within_holds = match &query.within {
        Some((field, values)) => doc
            .get(field)
            .is_some_and(|value| values.contains(value)),
        None => true,
    };

    equals_hold && within_holds
}

/// Numbers compare numerically, everything else by string form; documents
/// missing the field sort as the empty string.
fn compare_field(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    if let (Some(Value::Number(x)), Some(Value::Number(y))) = (a, b) {
        return x
            .as_f64()
            .unwrap_or(0.0)
            .total_cmp(&y.as_f64().unwrap_or(0.0));
    }

    sort_key(a).cmp(&sort_key(b))
}

fn sort_key(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}
