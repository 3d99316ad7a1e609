//! Structural PDF link extraction via lopdf
//!
//! Walks every page's annotation array for link annotations with URI
//! actions, and scans each page's extracted text with the shared URL
//! pattern to catch URLs mentioned in prose rather than linked.

use crate::pdf::text::find_urls;
use crate::ExtractError;
use lopdf::{Dictionary, Document, Object};

/// Extracts raw URL candidates from the document structure
///
/// A per-page text-extraction failure is skipped: the annotation layer has
/// already parsed at that point, so falling back to the plain-text
/// strategy would only lose links. Only a document-level parse failure
/// makes this strategy fail.
pub(crate) fn structural_links(bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
    let doc = Document::load_mem(bytes).map_err(|e| ExtractError::Parse(e.to_string()))?;

    let mut found = Vec::new();
    for (page_number, page_id) in doc.get_pages() {
        if let Ok(page) = doc.get_dictionary(page_id) {
            collect_annotation_uris(&doc, page, &mut found);
        }

        match doc.extract_text(&[page_number]) {
            Ok(text) => found.extend(find_urls(&text)),
            Err(e) => {
                tracing::debug!("text extraction failed for page {}: {}", page_number, e);
            }
        }
    }

    Ok(found)
}

/// Collects the URI targets of all link annotations on one page
fn collect_annotation_uris(doc: &Document, page: &Dictionary, out: &mut Vec<String>) {
    let annots = match page.get(b"Annots").map(|object| resolve(doc, object)) {
        Ok(Object::Array(items)) => items,
        _ => return,
    };

    for item in annots {
        let annot = match resolve(doc, item) {
            Object::Dictionary(dict) => dict,
            _ => continue,
        };

        let action = match annot.get(b"A").map(|object| resolve(doc, object)) {
            Ok(Object::Dictionary(dict)) => dict,
            _ => continue,
        };

        let is_uri_action = matches!(action.get(b"S"), Ok(Object::Name(name)) if name == b"URI");
        if !is_uri_action {
            continue;
        }

        if let Ok(Object::String(uri, _)) = action.get(b"URI").map(|object| resolve(doc, object)) {
            out.push(String::from_utf8_lossy(uri).into_owned());
        }
    }
}

/// Follows an indirect reference to its target object
fn resolve<'a>(doc: &'a Document, object: &'a Object) -> &'a Object {
    match object {
        Object::Reference(id) => doc.get_object(*id).unwrap_or(object),
        _ => object,
    }
}
