use serde_json::Value;

use crate::app::{PresswireError, Result};
use crate::domain::{Section, SectionDescriptor};

/// A category record whose description is overloaded with a JSON payload.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CategoryDescriptor {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
}

impl CategoryDescriptor {
    /// Read the known fields off a raw record. A field that is missing or
    /// not a string is `None` and never affects the others.
    pub fn from_record(record: &Value) -> Self {
        let field = |key: &str| record.get(key).and_then(Value::as_str).map(str::to_string);
        Self {
            name: field("name"),
            slug: field("slug"),
            description: field("description"),
        }
    }
}

/// Decode a section's payload from the categories endpoint's response.
pub fn parse_section<S: Section>(records: &Value) -> Result<S::Payload> {
    let descriptor = S::DESCRIPTOR;
    let payload = extract_payload(descriptor, records)?;

    serde_json::from_value(payload).map_err(|e| {
        tracing::warn!("{} payload rejected: {}", descriptor.noun, e);
        PresswireError::InvalidShape(descriptor.noun)
    })
}

/// Everything up to typed decoding: locate the record, parse its
/// description, unwrap and check the top-level shape.
fn extract_payload(descriptor: &'static SectionDescriptor, records: &Value) -> Result<Value> {
    let record = records
        .as_array()
        .and_then(|list| list.first())
        .ok_or(PresswireError::CategoryNotFound(descriptor.title))?;

    let category = CategoryDescriptor::from_record(record);
    let description = category
        .description
        .filter(|d| !d.trim().is_empty())
        .ok_or(PresswireError::EmptyDescription(descriptor.noun))?;

    let parsed: Value = serde_json::from_str(&description).map_err(|e| {
        tracing::warn!("{} description is not JSON: {}", descriptor.noun, e);
        PresswireError::InvalidJson(descriptor.noun)
    })?;
    let payload = unwrap_payload(descriptor, parsed);

    if !descriptor.shape.accepts(&payload) {
        return Err(PresswireError::InvalidShape(descriptor.noun));
    }

    Ok(payload)
}

fn unwrap_payload(descriptor: &SectionDescriptor, value: Value) -> Value {
    match (descriptor.wrapper, value) {
        (Some(key), Value::Object(mut map)) if map.contains_key(key) => {
            map.remove(key).unwrap_or(Value::Null)
        }
        (_, value) => value,
    }
}
