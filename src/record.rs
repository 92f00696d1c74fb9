//! Positional view over one remote object's XML payload.
//!
//! The console's API returns loosely structured XML whose only reliable
//! shape is child order. A [`Record`] captures the root's children in
//! document order: each field keeps its tag name, its full text, and the
//! text of each of its own children in order. Extractors index into this
//! with bounds-checked accessors; a truncated record degrades to
//! `MissingField` per fact, never a panic.

use crate::error::{HealthCheckError, Result};

/// One child of the record root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordField {
    /// Tag name, informational only; extraction is positional.
    pub name: String,
    /// Concatenated text of the whole field.
    pub text: String,
    /// Text of each child item, in document order.
    pub values: Vec<String>,
}

/// Ordered fields of one fetched object. Constructed per object and
/// discarded after extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: Vec<RecordField>,
}

impl Record {
    /// Parses an API response body into a positional record.
    pub fn parse(xml: &str) -> Result<Record> {
        let doc = roxmltree::Document::parse(xml).map_err(|_| HealthCheckError::MalformedInput)?;

        let fields = doc
            .root_element()
            .children()
            .filter(|node| node.is_element())
            .map(|element| RecordField {
                name: element.tag_name().name().to_string(),
                text: gather_text(element),
                values: element
                    .children()
                    .filter_map(|child| {
                        if child.is_element() {
                            Some(gather_text(child))
                        } else {
                            child
                                .text()
                                .map(str::trim)
                                .filter(|t| !t.is_empty())
                                .map(str::to_owned)
                        }
                    })
                    .collect(),
            })
            .collect();

        Ok(Record { fields })
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, slot: usize) -> Result<&RecordField> {
        self.fields
            .get(slot)
            .ok_or_else(|| HealthCheckError::missing(format!("record field {slot}")))
    }

    /// Full text of the field at `slot`.
    pub fn text_at(&self, slot: usize) -> Result<&str> {
        Ok(self.field(slot)?.text.as_str())
    }

    /// Text of child `index` of the field at `slot`.
    pub fn value_at(&self, slot: usize, index: usize) -> Result<&str> {
        let field = self.field(slot)?;
        field
            .values
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| HealthCheckError::missing(format!("record field {slot} value {index}")))
    }
}

fn gather_text(node: roxmltree::Node<'_, '_>) -> String {
    let mut out = String::new();
    for descendant in node.descendants() {
        if let Some(text) = descendant.text() {
            out.push_str(text.trim());
        }
    }
    out
}

/// Extracts the ids of a list response: the first value of each child, in
/// document order, de-duplicated.
pub fn list_ids(xml: &str) -> Result<Vec<String>> {
    let doc = roxmltree::Document::parse(xml).map_err(|_| HealthCheckError::MalformedInput)?;

    let mut ids = Vec::new();
    for element in doc.root_element().children().filter(|n| n.is_element()) {
        let id = element
            .children()
            .find(|c| c.is_element())
            .map(gather_text)
            .filter(|t| !t.is_empty());
        if let Some(id) = id {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
    }
    Ok(ids)
}

/// Number of children in a list response.
pub fn list_len(xml: &str) -> Result<usize> {
    let doc = roxmltree::Document::parse(xml).map_err(|_| HealthCheckError::MalformedInput)?;
    Ok(doc
        .root_element()
        .children()
        .filter(|n| n.is_element())
        .count())
}
