//! The mapping editor's per-render state machine.
//!
//! One [`MappingEditor`] is created per render cycle, makes exactly one
//! transition out of `Loading`, and is discarded when the cycle ends. There
//! is no retry and no re-entry: a failed cycle shows its error until the
//! surrounding page renders again with a fresh editor.

use crate::catalog::build_option_catalog;
use crate::codec::{decode_mapping, encode_mapping};
use crate::error::MappingError;
use crate::models::FieldSlot;
use crate::provider::{SchemaProvider, SyncGate};

/// Entity type whose schema backs the contact mapping.
pub const ENTITY_CONTACT: &str = "contact";

/// Presentation state of the editor for the current render cycle.
///
/// `Ready` shows the editor surface; `Error` hides it and shows a single
/// message instead. Both are terminal for the cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorState {
    Loading,
    Ready,
    Error(MappingError),
}

impl EditorState {
    pub fn is_ready(&self) -> bool {
        matches!(self, EditorState::Ready)
    }

    /// Whether the editor surface (the slot widgets) should be shown.
    pub fn editor_visible(&self) -> bool {
        self.is_ready()
    }

    /// The message to show on the error surface, if any.
    pub fn error_message(&self) -> Option<String> {
        match self {
            EditorState::Error(err) => Some(err.to_string()),
            _ => None,
        }
    }
}

/// Coordinates gate check, schema fetch, catalog application, and stored
/// mapping restore for one render cycle.
#[derive(Debug)]
pub struct MappingEditor {
    stored: String,
    entity_type: String,
    state: EditorState,
}

impl MappingEditor {
    /// Creates an editor in `Loading` holding the previously stored mapping
    /// value (empty string when nothing was stored yet).
    pub fn new(stored: impl Into<String>) -> Self {
        Self {
            stored: stored.into(),
            entity_type: ENTITY_CONTACT.to_string(),
            state: EditorState::Loading,
        }
    }

    /// Overrides the entity type whose schema is fetched.
    pub fn with_entity_type(mut self, entity_type: impl Into<String>) -> Self {
        self.entity_type = entity_type.into();
        self
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    /// The stored value this editor was constructed with.
    pub fn stored_value(&self) -> &str {
        &self.stored
    }

    /// Runs the render cycle: gate check, schema fetch, option catalog
    /// application, stored-mapping restore.
    ///
    /// Transitions out of `Loading` exactly once; calling again after a
    /// terminal state is reached returns that state unchanged.
    pub fn render(
        &mut self,
        gate: &impl SyncGate,
        provider: &impl SchemaProvider,
        slots: &mut [FieldSlot],
    ) -> &EditorState {
        if self.state != EditorState::Loading {
            return &self.state;
        }

        self.state = self.run_cycle(gate, provider, slots);
        &self.state
    }

    fn run_cycle(
        &self,
        gate: &impl SyncGate,
        provider: &impl SchemaProvider,
        slots: &mut [FieldSlot],
    ) -> EditorState {
        if !gate.synchronization_enabled() {
            return EditorState::Error(MappingError::SyncDisabled);
        }

        let attributes = match provider.fetch_attributes(&self.entity_type) {
            Ok(attributes) => attributes,
            Err(e) => return EditorState::Error(MappingError::SchemaFetchFailed(e.to_string())),
        };
        if attributes.is_empty() {
            return EditorState::Error(MappingError::SchemaEmpty);
        }
        tracing::info!(
            "Loaded {} attribute(s) for entity '{}'",
            attributes.len(),
            self.entity_type
        );

        let catalog = build_option_catalog(&attributes);
        for slot in slots.iter_mut() {
            slot.set_options(catalog.clone());
        }

        if let Err(e) = decode_mapping(&self.stored, slots) {
            return EditorState::Error(e);
        }

        EditorState::Ready
    }

    /// Reads the editor's value: the current selections encoded into the
    /// canonical stored form. Computed fresh on every call.
    pub fn value(&self, slots: &[FieldSlot]) -> String {
        encode_mapping(slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttributeDescriptor;
    use crate::provider::SchemaFetchError;
    use std::cell::Cell;

    struct FixedGate(bool);

    impl SyncGate for FixedGate {
        fn synchronization_enabled(&self) -> bool {
            self.0
        }
    }

    struct FakeProvider {
        result: Result<Vec<AttributeDescriptor>, SchemaFetchError>,
        invoked: Cell<bool>,
    }

    impl FakeProvider {
        fn returning(attributes: Vec<AttributeDescriptor>) -> Self {
            Self {
                result: Ok(attributes),
                invoked: Cell::new(false),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                result: Err(SchemaFetchError::new(message)),
                invoked: Cell::new(false),
            }
        }
    }

    impl SchemaProvider for FakeProvider {
        fn fetch_attributes(
            &self,
            _entity_type: &str,
        ) -> Result<Vec<AttributeDescriptor>, SchemaFetchError> {
            self.invoked.set(true);
            self.result.clone()
        }
    }

    fn contact_attributes() -> Vec<AttributeDescriptor> {
        vec![
            AttributeDescriptor::new("emailaddress1").with_label("Email"),
            AttributeDescriptor::new("firstname").with_label("First Name"),
            AttributeDescriptor::new("telephone1"),
        ]
    }

    fn contact_slots() -> Vec<FieldSlot> {
        vec![
            FieldSlot::new("EmailField"),
            FieldSlot::new("FirstNameField"),
            FieldSlot::new("PhoneField"),
        ]
    }

    #[test]
    fn test_new_editor_is_loading() {
        let editor = MappingEditor::new("");
        assert_eq!(*editor.state(), EditorState::Loading);
        assert_eq!(editor.entity_type(), ENTITY_CONTACT);
    }

    #[test]
    fn test_sync_disabled_short_circuits() {
        let gate = FixedGate(false);
        let provider = FakeProvider::returning(contact_attributes());
        let mut slots = contact_slots();

        let mut editor = MappingEditor::new("");
        editor.render(&gate, &provider, &mut slots);

        assert_eq!(
            *editor.state(),
            EditorState::Error(MappingError::SyncDisabled)
        );
        assert!(!provider.invoked.get());
        assert_eq!(
            editor.state().error_message().unwrap(),
            "Contact synchronization is disabled."
        );
    }

    #[test]
    fn test_fetch_failure_surfaces_provider_message() {
        let gate = FixedGate(true);
        let provider = FakeProvider::failing("The remote endpoint returned 401");
        let mut slots = contact_slots();

        let mut editor = MappingEditor::new("");
        editor.render(&gate, &provider, &mut slots);

        assert_eq!(
            *editor.state(),
            EditorState::Error(MappingError::SchemaFetchFailed(
                "The remote endpoint returned 401".to_string()
            ))
        );
        assert!(!editor.state().editor_visible());
    }

    #[test]
    fn test_empty_schema_is_an_error() {
        let gate = FixedGate(true);
        let provider = FakeProvider::returning(Vec::new());
        let mut slots = contact_slots();

        let mut editor = MappingEditor::new("");
        editor.render(&gate, &provider, &mut slots);

        assert_eq!(
            *editor.state(),
            EditorState::Error(MappingError::SchemaEmpty)
        );
        assert_eq!(
            editor.state().error_message().unwrap(),
            "Unable to load contact fields. Please check the Event Log."
        );
    }

    #[test]
    fn test_ready_applies_catalog_to_every_slot() {
        let gate = FixedGate(true);
        let provider = FakeProvider::returning(contact_attributes());
        let mut slots = contact_slots();

        let mut editor = MappingEditor::new("");
        editor.render(&gate, &provider, &mut slots);

        assert!(editor.state().is_ready());
        assert!(editor.state().editor_visible());
        for slot in &slots {
            // Sentinel plus one option per attribute
            assert_eq!(slot.options().len(), 4);
            assert!(slot.options()[0].is_sentinel());
        }
    }

    #[test]
    fn test_ready_restores_stored_mapping() {
        let gate = FixedGate(true);
        let provider = FakeProvider::returning(contact_attributes());
        let mut slots = contact_slots();

        let mut editor =
            MappingEditor::new(r#"{"emailaddress1":"EmailField","firstname":"FirstNameField"}"#);
        editor.render(&gate, &provider, &mut slots);

        assert!(editor.state().is_ready());
        assert_eq!(slots[0].selected_attribute(), "emailaddress1");
        assert_eq!(slots[1].selected_attribute(), "firstname");
        assert_eq!(slots[2].selected_attribute(), "");
    }

    #[test]
    fn test_stale_stored_entries_leave_slots_untouched() {
        let gate = FixedGate(true);
        let provider = FakeProvider::returning(contact_attributes());
        let mut slots = contact_slots();

        let mut editor = MappingEditor::new(r#"{"firstname":"RemovedField"}"#);
        editor.render(&gate, &provider, &mut slots);

        assert!(editor.state().is_ready());
        for slot in &slots {
            assert!(!slot.is_mapped());
        }
    }

    #[test]
    fn test_corrupt_stored_value_is_an_error() {
        let gate = FixedGate(true);
        let provider = FakeProvider::returning(contact_attributes());
        let mut slots = contact_slots();

        let mut editor = MappingEditor::new("{broken");
        editor.render(&gate, &provider, &mut slots);

        assert!(matches!(
            editor.state(),
            EditorState::Error(MappingError::StoredMappingCorrupt(_))
        ));
        assert!(!editor.state().editor_visible());
    }

    #[test]
    fn test_terminal_state_is_not_reentered() {
        let gate = FixedGate(false);
        let provider = FakeProvider::returning(contact_attributes());
        let mut slots = contact_slots();

        let mut editor = MappingEditor::new("");
        editor.render(&gate, &provider, &mut slots);
        assert_eq!(
            *editor.state(),
            EditorState::Error(MappingError::SyncDisabled)
        );

        // A second render with an open gate must not re-run the cycle.
        let open_gate = FixedGate(true);
        editor.render(&open_gate, &provider, &mut slots);
        assert_eq!(
            *editor.state(),
            EditorState::Error(MappingError::SyncDisabled)
        );
        assert!(!provider.invoked.get());
    }

    #[test]
    fn test_value_roundtrips_through_render() {
        let gate = FixedGate(true);
        let provider = FakeProvider::returning(contact_attributes());
        let mut slots = contact_slots();

        let stored = r#"{"emailaddress1":"EmailField","telephone1":"PhoneField"}"#;
        let mut editor = MappingEditor::new(stored);
        editor.render(&gate, &provider, &mut slots);

        assert_eq!(editor.value(&slots), stored);
    }

    #[test]
    fn test_value_in_error_state_encodes_current_selections() {
        let gate = FixedGate(false);
        let provider = FakeProvider::returning(contact_attributes());
        let mut slots = contact_slots();

        let mut editor = MappingEditor::new("");
        editor.render(&gate, &provider, &mut slots);

        // No catalog was applied, so nothing is selected
        assert_eq!(editor.value(&slots), "{}");
    }

    #[test]
    fn test_custom_entity_type() {
        struct EntityCheck(Cell<Option<String>>);

        impl SchemaProvider for EntityCheck {
            fn fetch_attributes(
                &self,
                entity_type: &str,
            ) -> Result<Vec<AttributeDescriptor>, SchemaFetchError> {
                self.0.set(Some(entity_type.to_string()));
                Ok(vec![AttributeDescriptor::new("name")])
            }
        }

        let gate = FixedGate(true);
        let provider = EntityCheck(Cell::new(None));
        let mut slots = vec![FieldSlot::new("NameField")];

        let mut editor = MappingEditor::new("").with_entity_type("lead");
        editor.render(&gate, &provider, &mut slots);

        assert_eq!(provider.0.take().unwrap(), "lead");
    }
}
