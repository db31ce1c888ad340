// src/forms/models.rs

// ============================================================================
// Field Values
// ============================================================================

/// Value of a single form field.
///
/// Forms hold their fields as ordinary typed struct members; this enum is
/// the shape those members take while rules are being checked. `Missing`
/// covers unset optional fields and unanswered selects.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Items(Vec<String>),
    Number(f64),
    Missing,
}

impl FieldValue {
    /// Trimmed copy when textual; every other variant passes through as-is
    pub(crate) fn trimmed(&self) -> FieldValue {
        match self {
            FieldValue::Text(text) => FieldValue::Text(text.trim().to_string()),
            other => other.clone(),
        }
    }

    /// Whether `required` should reject this value
    pub(crate) fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::Items(items) => items.is_empty(),
            FieldValue::Number(_) => false,
            FieldValue::Missing => true,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::Items(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl<V: Into<FieldValue>> From<Option<V>> for FieldValue {
    fn from(value: Option<V>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => FieldValue::Missing,
        }
    }
}

// ============================================================================
// Form Field Access
// ============================================================================

/// Named-field access for a form's value struct.
///
/// Each form keeps its fields statically typed and maps them to names
/// here; the validation engine stays generic over the whole struct.
pub trait FormFields: Clone {
    /// Current value of a named field; unknown names read as `Missing`
    fn field(&self, name: &str) -> FieldValue;

    /// Overwrite a named field. Unknown names and mismatched variants
    /// are ignored rather than treated as errors.
    fn set_field(&mut self, name: &str, value: FieldValue);
}
