//! In-memory storage collaborators
//!
//! Test doubles for the object store and catalog, keyed the same way the
//! real collaborators are.

use crate::storage::{Catalog, CrawlRecord, ObjectStore, StorageError, StorageResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory object store
#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an object under a fixed URL, as if previously uploaded
    pub fn insert(&self, url: &str, bytes: Vec<u8>) {
        self.objects
            .lock()
            .unwrap()
            .insert(url.to_string(), bytes);
    }

    /// Returns the URLs of every stored object
    pub fn urls(&self) -> Vec<String> {
        let mut urls: Vec<String> = self.objects.lock().unwrap().keys().cloned().collect();
        urls.sort();
        urls
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn get(&self, url: &str) -> StorageResult<Vec<u8>> {
        self.objects
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(url.to_string()))
    }

    async fn put(&self, key: &str, bytes: Vec<u8>, _content_type: &str) -> StorageResult<String> {
        let url = format!("memory://{}", key);
        self.objects.lock().unwrap().insert(url.clone(), bytes);
        Ok(url)
    }
}

/// In-memory document catalog
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    records: Mutex<Vec<CrawlRecord>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every saved record
    pub fn records(&self) -> Vec<CrawlRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl Catalog for MemoryCatalog {
    async fn save(&self, record: CrawlRecord) -> StorageResult<String> {
        let mut records = self.records.lock().unwrap();
        records.push(record);
        Ok(format!("record-{}", records.len()))
    }
}
