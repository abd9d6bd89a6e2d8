//! Error types for the mapping editor.

use thiserror::Error;

/// Errors that end a mapping editor render cycle.
///
/// Every variant is terminal for the current cycle: the editor surface is
/// hidden and the error's display text is shown instead. The next render
/// cycle starts over from scratch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// Contact synchronization is switched off.
    #[error("Contact synchronization is disabled.")]
    SyncDisabled,

    /// The schema provider call failed; carries the provider's message.
    #[error("{0}")]
    SchemaFetchFailed(String),

    /// The schema provider succeeded but returned no attributes.
    #[error("Unable to load contact fields. Please check the Event Log.")]
    SchemaEmpty,

    /// The persisted mapping value is not a valid mapping object.
    #[error("Stored field mapping is corrupt: {0}")]
    StoredMappingCorrupt(String),
}
