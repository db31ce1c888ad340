// src/forms/engine.rs

use std::collections::BTreeMap;
use tracing::debug;

use super::models::{FieldValue, FormFields};
use super::rules::RuleSet;
use crate::common::ValidationResult;

// ============================================================================
// Form Validation Engine
// ============================================================================

/// Per-form validation state: current values, the error map, and the
/// one-way dirty latch that gates live validation.
///
/// The latch is a two-state machine, pristine -> dirty on the first blur
/// anywhere in the form, with no way back short of `reset`. While pristine,
/// edits update values without surfacing errors; once dirty, every edit
/// validates live.
pub struct FormValidation<T: FormFields> {
    initial: T,
    values: T,
    rules: RuleSet,
    errors: BTreeMap<String, String>,
    dirty: bool,
}

impl<T: FormFields> FormValidation<T> {
    pub fn new(initial: T, rules: RuleSet) -> Self {
        Self {
            values: initial.clone(),
            initial,
            rules,
            errors: BTreeMap::new(),
            dirty: false,
        }
    }

    pub fn values(&self) -> &T {
        &self.values
    }

    /// Errors currently on display; an absent key means the field passes
    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(|message| message.as_str())
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Run the check chain for one field and update the error map:
    /// insert the message on failure, drop the key on success.
    pub fn validate_field(&mut self, name: &str, value: &FieldValue) {
        match self.rules.check(name, value) {
            Some(message) => {
                self.errors.insert(name.to_string(), message);
            }
            None => {
                self.errors.remove(name);
            }
        }
    }

    /// Store an edited value. Validates it only once the form is dirty,
    /// so the first keystrokes never flash errors.
    pub fn handle_change(&mut self, name: &str, value: FieldValue) {
        self.values.set_field(name, value.clone());
        if self.dirty {
            self.validate_field(name, &value);
        }
    }

    /// Leaving a field latches the form dirty and always validates
    pub fn handle_blur(&mut self, name: &str, value: FieldValue) {
        self.dirty = true;
        self.validate_field(name, &value);
    }

    /// Pure whole-form validity over the current values. Never touches the
    /// stored errors, so it can lead them while live validation is gated;
    /// cheap enough to recompute on every evaluation.
    pub fn computed_validity(&self) -> bool {
        self.rules
            .field_names()
            .all(|name| self.rules.check(name, &self.values.field(name)).is_none())
    }

    /// Whole-form check for submit time: recomputes every field, replaces
    /// the stored error map so fields never blurred become visible too,
    /// and returns the same boolean `computed_validity` would.
    pub fn is_valid(&mut self) -> bool {
        let mut errors = BTreeMap::new();
        for name in self.rules.field_names() {
            if let Some(message) = self.rules.check(name, &self.values.field(name)) {
                errors.insert(name.to_string(), message);
            }
        }
        self.errors = errors;

        debug!(error_count = self.errors.len(), "validated whole form");
        self.errors.is_empty()
    }

    /// Load an existing record into the form, e.g. when an edit dialog
    /// opens over a saved entry
    pub fn set_values(&mut self, values: T) {
        self.values = values;
    }

    /// Restore the initial snapshot, clear errors, and un-latch
    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.errors.clear();
        self.dirty = false;
    }

    /// Current error map in the shared aggregate shape, for submit paths
    /// that report through `ValidationResult`
    pub fn to_result(&self) -> ValidationResult {
        let mut result = ValidationResult::new();
        for (field, message) in &self.errors {
            result.add_error(field, message);
        }
        result
    }
}
