//! The element that triggers a deletion.

use std::collections::BTreeMap;

/// Attribute (without the `data-` prefix) holding the encoded identifier.
pub const ID_ATTRIBUTE: &str = "id";

/// A trigger element and its `data-*` attributes.
///
/// Keys are stored without the `data-` prefix, the way a browser's
/// `dataset` exposes them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriggerElement {
    dataset: BTreeMap<String, String>,
}

impl TriggerElement {
    /// Creates an element with no data attributes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an element whose `data-id` holds the given raw (still encoded) value.
    pub fn with_id(encoded: impl Into<String>) -> Self {
        Self::new().with_data(ID_ATTRIBUTE, encoded)
    }

    /// Adds or replaces a data attribute. A leading `data-` on `key` is ignored.
    #[must_use]
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let key = key.strip_prefix("data-").map(str::to_owned).unwrap_or(key);
        self.dataset.insert(key, value.into());
        self
    }

    /// Returns the raw value of a data attribute.
    #[must_use]
    pub fn data(&self, key: &str) -> Option<&str> {
        self.dataset.get(key).map(String::as_str)
    }
}
