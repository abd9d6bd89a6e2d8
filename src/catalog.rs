//! Option catalogs for mapping selection widgets.
//!
//! Every field slot gets the same catalog for a render cycle: a sentinel
//! "(not mapped)" entry followed by one entry per schema attribute, in the
//! order the schema fetch returned them. No deduplication, sorting, or
//! filtering is applied; the catalog mirrors the fetch result exactly.

use serde::{Deserialize, Serialize};

use crate::models::AttributeDescriptor;

/// Display text of the sentinel option.
pub const NOT_MAPPED_LABEL: &str = "(not mapped)";

/// One selectable entry in a slot's option list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionItem {
    /// Attribute logical name, or empty for the sentinel.
    pub value: String,
    /// Text shown to the operator.
    pub text: String,
}

impl OptionItem {
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }

    /// The "(not mapped)" sentinel that heads every catalog.
    pub fn not_mapped() -> Self {
        Self::new(NOT_MAPPED_LABEL, "")
    }

    pub fn is_sentinel(&self) -> bool {
        self.value.is_empty()
    }
}

/// Builds the option catalog applied to every field slot.
pub fn build_option_catalog(attributes: &[AttributeDescriptor]) -> Vec<OptionItem> {
    let mut catalog = Vec::with_capacity(attributes.len() + 1);
    catalog.push(OptionItem::not_mapped());
    for attr in attributes {
        catalog.push(OptionItem::new(attr.display_text(), attr.logical_name.as_str()));
    }
    catalog
}
