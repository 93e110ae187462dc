use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A serialized snapshot of all form field values.
///
/// Keys are field names, values are the raw entered strings. The record is
/// rebuilt from scratch on every submit; `activity_level` is derived from
/// `lifestyle` at that point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormRecord {
    fields: BTreeMap<String, String>,
}

impl FormRecord {
    pub const LIFESTYLE: &'static str = "lifestyle";
    pub const ACTIVITY_LEVEL: &'static str = "activity_level";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.fields.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Copy `lifestyle` into the derived `activity_level` field.
    ///
    /// Missing `lifestyle` leaves the record untouched.
    pub fn derive_activity_level(&mut self) {
        if let Some(lifestyle) = self.fields.get(Self::LIFESTYLE).cloned() {
            self.fields.insert(Self::ACTIVITY_LEVEL.to_string(), lifestyle);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, String)> for FormRecord {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
