//! Boundary traits consumed by the mapping editor.
//!
//! The editor never talks to the remote CRM or reads feature flags directly;
//! it is handed implementations of these traits by the surrounding tool. The
//! schema fetch is consumed as a blocking call: implementors own any
//! timeout or cancellation policy and must finish or fail before returning.

use thiserror::Error;

use crate::models::AttributeDescriptor;

/// Normalized failure from a schema fetch.
///
/// Implementors catch their internal transport or client errors and convert
/// them into this single type carrying a human-readable message; no raw
/// transport error types cross the boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct SchemaFetchError {
    message: String,
}

impl SchemaFetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Supplies the attribute descriptors of a remote entity type.
pub trait SchemaProvider {
    /// Fetches the attribute list for `entity_type`, blocking until the
    /// underlying call completes or fails. An empty list is a valid return;
    /// the caller decides what to make of it.
    fn fetch_attributes(
        &self,
        entity_type: &str,
    ) -> Result<Vec<AttributeDescriptor>, SchemaFetchError>;
}

/// Reports whether contact synchronization is currently enabled.
pub trait SyncGate {
    fn synchronization_enabled(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_displays_message_verbatim() {
        let err = SchemaFetchError::new("The remote endpoint returned 401");
        assert_eq!(err.to_string(), "The remote endpoint returned 401");
        assert_eq!(err.message(), "The remote endpoint returned 401");
    }
}
