// src/forms/rules.rs

use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;

use super::models::FieldValue;

// ============================================================================
// Field Rules
// ============================================================================

type CustomCheck = Box<dyn Fn(&FieldValue) -> bool + Send + Sync>;

/// Constraints attached to a single field.
///
/// All conditions are optional and AND-combined; the first failing check
/// decides the message. Length and pattern checks only apply to textual
/// values, so a rule like `min_length(2)` silently passes a list field.
#[derive(Default)]
pub struct FieldRule {
    required: bool,
    min_length: Option<usize>,
    max_length: Option<usize>,
    pattern: Option<Regex>,
    custom: Option<CustomCheck>,
}

impl FieldRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn custom<F>(mut self, check: F) -> Self
    where
        F: Fn(&FieldValue) -> bool + Send + Sync + 'static,
    {
        self.custom = Some(Box::new(check));
        self
    }

    /// Run the check chain against a value. Returns the first failure
    /// message, or `None` when every present condition passes.
    pub fn check(&self, value: &FieldValue) -> Option<String> {
        let value = value.trimmed();

        if self.required && value.is_blank() {
            return Some("This field is required".to_string());
        }

        if let FieldValue::Text(text) = &value {
            let length = text.chars().count();

            if let Some(min) = self.min_length {
                if length < min {
                    return Some(format!("Minimum {} characters", min));
                }
            }

            if let Some(max) = self.max_length {
                if length > max {
                    return Some(format!("Maximum {} characters", max));
                }
            }

            if let Some(pattern) = &self.pattern {
                if !pattern.is_match(text) {
                    return Some("Invalid format".to_string());
                }
            }
        }

        if let Some(custom) = &self.custom {
            if !custom(&value) {
                return Some("Invalid value".to_string());
            }
        }

        None
    }
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRule")
            .field("required", &self.required)
            .field("min_length", &self.min_length)
            .field("max_length", &self.max_length)
            .field("pattern", &self.pattern.as_ref().map(|p| p.as_str()))
            .field("custom", &self.custom.is_some())
            .finish()
    }
}

// ============================================================================
// Rule Sets
// ============================================================================

/// Mapping from field name to its rule. Fields without an entry are never
/// validated and never produce errors.
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: BTreeMap<String, FieldRule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &str, rule: FieldRule) -> Self {
        self.rules.insert(name.to_string(), rule);
        self
    }

    /// Check one named field; absent rules are a no-op, not an error
    pub fn check(&self, name: &str, value: &FieldValue) -> Option<String> {
        self.rules.get(name).and_then(|rule| rule.check(value))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(|name| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
