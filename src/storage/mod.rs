//! Storage seams toward the surrounding document-intake system
//!
//! The document catalog and the object store are external collaborators;
//! this module defines the record types that cross those seams, the trait
//! contracts the collaborators are consumed through, and in-memory
//! implementations for tests.

mod memory;
mod traits;

pub use memory::{MemoryCatalog, MemoryStore};
pub use traits::{Catalog, ObjectStore, StorageError, StorageResult};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A file attached to a catalog record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    pub filename: String,

    /// Object-store URL of the file's bytes
    pub url: String,

    pub size: u64,

    #[serde(rename = "type")]
    pub content_type: String,

    /// For crawled-page blobs, the page the content came from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

/// A stored document record, as read from the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub doc_id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub flags: Vec<String>,
    #[serde(default)]
    pub files: Vec<FileEntry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Per-page metadata persisted in the aggregate crawl record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSummary {
    pub url: String,
    pub title: String,
    pub depth: u32,
    pub link_count: usize,

    /// Object-store URL of the page's content blob
    pub store_url: String,
}

/// The aggregate record saved after a deep dive
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlRecord {
    pub doc_id: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub notes: String,
    pub flags: Vec<String>,
    pub original_doc_id: String,
    pub pages: Vec<PageSummary>,
    pub files: Vec<FileEntry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_entry_roundtrip() {
        let entry = FileEntry {
            filename: "report.pdf".to_string(),
            url: "https://store.example.com/report.pdf".to_string(),
            size: 12345,
            content_type: "application/pdf".to_string(),
            source_url: None,
        };

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains(r#""type":"application/pdf""#));
        assert!(!json.contains("source_url"));

        let parsed: FileEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.filename, "report.pdf");
        assert_eq!(parsed.size, 12345);
    }

    #[test]
    fn test_document_record_defaults() {
        let json = r#"{
            "doc_id": "abc",
            "name": "Report",
            "description": "Quarterly report",
            "created_at": "2025-06-01T12:00:00Z",
            "updated_at": "2025-06-01T12:00:00Z"
        }"#;

        let record: DocumentRecord = serde_json::from_str(json).unwrap();
        assert!(record.tags.is_empty());
        assert!(record.files.is_empty());
        assert!(record.notes.is_empty());
    }
}
