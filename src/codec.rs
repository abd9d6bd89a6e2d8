//! Stored-mapping codec.
//!
//! A mapping persists as a single compact JSON-object string whose keys are
//! remote attribute logical names and whose values are local field-slot
//! identifiers, e.g. `{"emailaddress1":"EmailField","firstname":"FirstNameField"}`.
//! The text is canonicalized by stripping every whitespace character, so the
//! stored form is deterministic regardless of serializer formatting. The
//! value exists only at encode/decode time; nothing caches it.

use serde_json::{Map, Value};

use crate::error::MappingError;
use crate::models::FieldSlot;

/// Encodes the current slot selections into the canonical stored form.
///
/// Slots are visited in order; every mapped slot contributes an
/// `attribute → slot id` entry. Unmapped slots are omitted. Two slots mapped
/// to the same attribute collapse to one entry with the later slot winning,
/// since entries are keyed by attribute. An all-unmapped slot list encodes
/// to `{}`.
pub fn encode_mapping(slots: &[FieldSlot]) -> String {
    let mut data = Map::new();
    for slot in slots {
        if !slot.is_mapped() {
            continue;
        }
        data.insert(
            slot.selected_attribute().to_string(),
            Value::String(slot.id().to_string()),
        );
    }

    strip_whitespace(&Value::Object(data).to_string())
}

/// Restores a stored mapping onto the given slots.
///
/// An empty `stored` value is a no-op: every slot keeps its current
/// selection. Otherwise the text must parse as a JSON object or the call
/// fails with [`MappingError::StoredMappingCorrupt`].
///
/// For each slot, the first entry (in object order) whose value equals the
/// slot's identifier provides the selection; behavior for later duplicate
/// entries naming the same slot is unspecified. Stale entries are dropped
/// silently: an entry naming an unknown slot identifier matches nothing, and
/// an entry whose attribute the slot's options no longer offer is refused by
/// the slot. Non-string entry values never match a slot.
pub fn decode_mapping(stored: &str, slots: &mut [FieldSlot]) -> Result<(), MappingError> {
    if stored.is_empty() {
        return Ok(());
    }

    let data: Map<String, Value> = serde_json::from_str(stored)
        .map_err(|e| MappingError::StoredMappingCorrupt(e.to_string()))?;

    for slot in slots.iter_mut() {
        let entry = data
            .iter()
            .find(|(_, value)| value.as_str() == Some(slot.id()));

        if let Some((attribute, _)) = entry {
            if !slot.select(attribute.clone()) {
                tracing::warn!(
                    "Dropping stored mapping entry '{}' for slot '{}': attribute not in current schema",
                    attribute,
                    slot.id()
                );
            }
        }
    }

    Ok(())
}

/// Removes every whitespace character from `text`.
///
/// Pure canonicalization step applied to the serialized mapping object.
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
