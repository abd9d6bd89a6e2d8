use serde::{Deserialize, Serialize};

/// One attribute of a remotely-discovered entity schema.
///
/// Descriptors are produced fresh on every schema fetch and are plain owned
/// data; nothing in this crate caches them across render cycles. The logical
/// name identifies the attribute within its entity and is unique per fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDescriptor {
    /// Schema-unique attribute name, e.g. "emailaddress1".
    pub logical_name: String,
    /// Optional human-readable label, e.g. "Email Address".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_label: Option<String>,
}

impl AttributeDescriptor {
    pub fn new(logical_name: impl Into<String>) -> Self {
        Self {
            logical_name: logical_name.into(),
            display_label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.display_label = Some(label.into());
        self
    }

    /// Text shown to the operator for this attribute.
    ///
    /// `"{label} ({logical_name})"` when a non-empty label is present,
    /// otherwise the logical name alone.
    pub fn display_text(&self) -> String {
        match &self.display_label {
            Some(label) if !label.is_empty() => {
                format!("{} ({})", label, self.logical_name)
            }
            _ => self.logical_name.clone(),
        }
    }
}
