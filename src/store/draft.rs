use super::Bucket;
use ahash::AHashSet;
use crate::editor::ReferenceOption;
use crate::error::StoreError;
use crate::form::FormValues;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A named snapshot of one form's value trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub id: String,
    pub name: String,
    pub endpoint_id: String,
    /// RFC 3339 UTC, refreshed on every update.
    pub timestamp: String,
    #[serde(default)]
    pub data: FormValues,
}

impl Draft {
    pub fn new(endpoint_id: &str, name: &str, data: FormValues) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            endpoint_id: endpoint_id.to_string(),
            timestamp: now(),
            data,
        }
    }

    /// The option this draft contributes to the saved-categories list.
    pub fn as_reference(&self) -> ReferenceOption {
        let non_empty = |v: Option<&Value>| {
            v.and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        ReferenceOption {
            reference_key: non_empty(self.data.path_values.get("categoryKey"))
                .unwrap_or_else(|| self.name.clone()),
            display_name: non_empty(self.data.body_values.get("name"))
                .unwrap_or_else(|| self.name.clone()),
        }
    }
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Every saved draft, grouped by entity type. This is also the export document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftCollection {
    #[serde(default)]
    pub products: Vec<Draft>,
    #[serde(default)]
    pub categories: Vec<Draft>,
    #[serde(default)]
    pub hierarchies: Vec<Draft>,
}

impl DraftCollection {
    /// Parses an export document. Anything that is not an object of draft lists is rejected.
    pub fn from_json(text: &str) -> Result<Self, StoreError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| StoreError::InvalidFile(e.to_string()))?;
        if !value.is_object() {
            return Err(StoreError::InvalidFile(
                "expected an object with products, categories and hierarchies".to_string(),
            ));
        }
        serde_json::from_value(value).map_err(|e| StoreError::InvalidFile(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, StoreError> {
        serde_json::to_string_pretty(self).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    pub fn bucket(&self, bucket: Bucket) -> &[Draft] {
        match bucket {
            Bucket::Products => &self.products,
            Bucket::Categories => &self.categories,
            Bucket::Hierarchies => &self.hierarchies,
        }
    }

    pub fn bucket_mut(&mut self, bucket: Bucket) -> &mut Vec<Draft> {
        match bucket {
            Bucket::Products => &mut self.products,
            Bucket::Categories => &mut self.categories,
            Bucket::Hierarchies => &mut self.hierarchies,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Draft> {
        Bucket::ALL.into_iter().flat_map(move |b| self.bucket(b).iter())
    }

    pub fn len(&self) -> usize {
        self.products.len() + self.categories.len() + self.hierarchies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, id: &str) -> Option<&Draft> {
        self.iter().find(|d| d.id == id)
    }

    /// Drafts for one endpoint, oldest first.
    pub fn for_endpoint(&self, endpoint_id: &str) -> Vec<Draft> {
        self.bucket(Bucket::for_endpoint(endpoint_id))
            .iter()
            .filter(|d| d.endpoint_id == endpoint_id)
            .cloned()
            .collect()
    }

    pub fn insert(&mut self, draft: Draft) {
        self.bucket_mut(Bucket::for_endpoint(&draft.endpoint_id))
            .push(draft);
    }

    /// Renames a draft and replaces its data in place.
    pub fn update(&mut self, id: &str, name: &str, data: FormValues) -> Result<Draft, StoreError> {
        let draft = [
            &mut self.products,
            &mut self.categories,
            &mut self.hierarchies,
        ]
        .into_iter()
        .flat_map(|list| list.iter_mut())
        .find(|d| d.id == id)
        .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        draft.name = name.to_string();
        draft.data = data;
        draft.timestamp = now();
        Ok(draft.clone())
    }

    pub fn remove(&mut self, id: &str) -> Result<Draft, StoreError> {
        for bucket in Bucket::ALL {
            let list = self.bucket_mut(bucket);
            if let Some(pos) = list.iter().position(|d| d.id == id) {
                return Ok(list.remove(pos));
            }
        }
        Err(StoreError::NotFound(id.to_string()))
    }

    /// Adds every draft of `other` whose id is not already present in the same bucket.
    /// Returns how many were added.
    pub fn merge(&mut self, other: DraftCollection) -> usize {
        let mut merged = 0;
        for (bucket, incoming) in [
            (Bucket::Products, other.products),
            (Bucket::Categories, other.categories),
            (Bucket::Hierarchies, other.hierarchies),
        ] {
            let list = self.bucket_mut(bucket);
            let mut known: AHashSet<String> = list.iter().map(|d| d.id.clone()).collect();
            for draft in incoming {
                if known.insert(draft.id.clone()) {
                    list.push(draft);
                    merged += 1;
                }
            }
        }
        merged
    }

    /// Saved categories as picker options, in save order.
    pub fn saved_categories(&self) -> Vec<ReferenceOption> {
        self.categories.iter().map(Draft::as_reference).collect()
    }
}
