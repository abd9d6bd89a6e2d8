//! Contact Mapping Core Library
//!
//! Field-mapping editor core for CRM contact synchronization: builds option
//! catalogs from a remotely discovered entity schema, encodes and restores
//! the persisted attribute-to-field mapping, and drives the per-render
//! editor state machine behind [`SyncGate`] and [`SchemaProvider`]
//! boundaries.

pub mod catalog;
pub mod codec;
pub mod config;
pub mod editor;
pub mod error;
pub mod models;
pub mod provider;

pub use catalog::{build_option_catalog, OptionItem, NOT_MAPPED_LABEL};
pub use codec::{decode_mapping, encode_mapping, strip_whitespace};
pub use config::{Config, ConfigError, ConfigSource, ConfigValue, SyncSettings};
pub use editor::{EditorState, MappingEditor, ENTITY_CONTACT};
pub use error::MappingError;
pub use models::{AttributeDescriptor, FieldSlot};
pub use provider::{SchemaFetchError, SchemaProvider, SyncGate};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
