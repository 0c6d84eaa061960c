//! Content Store - reads collections from the static JSON files
//!
//! Files are read and decoded on every call; nothing is kept between
//! requests. Records that fail to decode are skipped with a warning so one
//! bad entry does not take the whole category down.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::content::category::{Category, CollectionSource, PUBLICATIONS};
use crate::content::types::{Post, ServiceRecord};

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} has no `{key}` field", .path.display())]
    MissingKey { path: PathBuf, key: &'static str },

    #[error("{} does not hold an array", .path.display())]
    NotAnArray { path: PathBuf },
}

#[derive(Debug, Clone)]
pub struct ContentStore {
    root: PathBuf,
}

impl ContentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load and decode one collection.
    pub fn load<R: DeserializeOwned>(&self, source: CollectionSource) -> Result<Vec<R>, ContentError> {
        let path = self.root.join(source.file_name);

        let raw = std::fs::read_to_string(&path).map_err(|source| ContentError::Io {
            path: path.clone(),
            source,
        })?;

        let document: Value = serde_json::from_str(&raw).map_err(|source| ContentError::Parse {
            path: path.clone(),
            source,
        })?;

        let array = match source.key {
            Some(key) => document
                .get(key)
                .ok_or_else(|| ContentError::MissingKey { path: path.clone(), key })?,
            None => &document,
        };

        let entries = array
            .as_array()
            .ok_or_else(|| ContentError::NotAnArray { path: path.clone() })?;

        let mut records = Vec::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            match R::deserialize(entry) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!("Skipping record {} in {}: {}", idx, path.display(), e);
                }
            }
        }

        tracing::debug!("Loaded {} records from {}", records.len(), path.display());
        Ok(records)
    }

    /// Like [`load`](Self::load), but a missing or malformed file becomes an
    /// empty collection. Every slug lookup against it then comes back absent.
    pub fn load_or_empty<R: DeserializeOwned>(&self, source: CollectionSource) -> Vec<R> {
        match self.load(source) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("Treating collection as empty: {}", e);
                Vec::new()
            }
        }
    }

    pub fn services(&self, category: Category) -> Vec<ServiceRecord> {
        self.load_or_empty(category.source())
    }

    pub fn posts(&self) -> Vec<Post> {
        self.load_or_empty(PUBLICATIONS)
    }
}
