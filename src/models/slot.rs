use crate::catalog::OptionItem;

/// One locally-defined field awaiting an attribute assignment.
///
/// A slot mirrors a single selection widget in the surrounding form: a stable
/// identifier supplied by the form layout, the option list applied for the
/// current render cycle, and the currently selected attribute logical name
/// (empty string = not mapped). Slots live for one render cycle only.
#[derive(Debug, Clone)]
pub struct FieldSlot {
    id: String,
    selected: String,
    options: Vec<OptionItem>,
}

impl FieldSlot {
    /// Creates an unmapped slot with no options applied yet.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            selected: String::new(),
            options: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The selected attribute logical name; empty when not mapped.
    pub fn selected_attribute(&self) -> &str {
        &self.selected
    }

    pub fn is_mapped(&self) -> bool {
        !self.selected.is_empty()
    }

    pub fn options(&self) -> &[OptionItem] {
        &self.options
    }

    /// Returns true if `value` is offered by the applied options.
    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|opt| opt.value == value)
    }

    /// Replaces the slot's option list for this render cycle.
    ///
    /// A selection that the new options no longer offer is reset to
    /// "not mapped", matching a selection widget rebuilt from scratch.
    pub fn set_options(&mut self, options: Vec<OptionItem>) {
        self.options = options;
        if !self.selected.is_empty() && !self.has_option(&self.selected) {
            self.selected.clear();
        }
    }

    /// Selects an attribute by logical name.
    ///
    /// The empty string always succeeds and means "not mapped". Any other
    /// value is accepted only when the applied options offer it; unknown
    /// values are refused and leave the selection unchanged. Returns whether
    /// the selection was applied.
    pub fn select(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if value.is_empty() {
            self.selected.clear();
            return true;
        }
        if self.has_option(&value) {
            self.selected = value;
            return true;
        }
        false
    }

    /// Resets the slot to "not mapped".
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }
}
