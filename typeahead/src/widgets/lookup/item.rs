//! Candidate trait for records that can be searched and selected in a Lookup.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use serde_json::{Map, Value};

/// A record that can appear in a [`Lookup`](super::Lookup).
///
/// Candidates expose named properties. The lookup reads the configured
/// searchable properties for matching and the descriptor property for
/// display. A property the candidate does not have is treated as empty
/// text, never as an error.
///
/// Candidates are held as `Arc<C>` and compared by identity, so two
/// records with equal contents are still distinct candidates.
///
/// # Example
///
/// ```ignore
/// struct Country {
///     code: String,
///     name: String,
/// }
///
/// impl Candidate for Country {
///     fn property(&self, name: &str) -> Option<Cow<'_, str>> {
///         match name {
///             "code" => Some(Cow::Borrowed(&self.code)),
///             "name" => Some(Cow::Borrowed(&self.name)),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Candidate {
    /// Text value of the named property, if present.
    fn property(&self, name: &str) -> Option<Cow<'_, str>>;

    /// Text value of the named property, or an empty string.
    fn property_text(&self, name: &str) -> String {
        self.property(name)
            .map(Cow::into_owned)
            .unwrap_or_default()
    }
}

fn value_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

// JSON objects: scalar fields are readable, everything else is absent
impl Candidate for Value {
    fn property(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).and_then(value_text)
    }
}

impl Candidate for Map<String, Value> {
    fn property(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).and_then(value_text)
    }
}

impl Candidate for HashMap<String, String> {
    fn property(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|s| Cow::Borrowed(s.as_str()))
    }
}

impl Candidate for BTreeMap<String, String> {
    fn property(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|s| Cow::Borrowed(s.as_str()))
    }
}
