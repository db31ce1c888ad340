// src/profile/validators.rs

use chrono::NaiveDate;
use regex::Regex;

use crate::forms::{FieldRule, FieldValue, RuleSet};

// ============================================================================
// Profile Dialog Rule Sets
// ============================================================================

/// Rules for the profile header dialog
pub fn header_rules() -> RuleSet {
    RuleSet::new()
        .field(
            "first_name",
            FieldRule::new().required().min_length(1).max_length(50),
        )
        .field(
            "last_name",
            FieldRule::new().required().min_length(2).max_length(50),
        )
        .field("availability", FieldRule::new().required())
        .field(
            "about_me",
            FieldRule::new().required().min_length(10).max_length(500),
        )
}

/// Rules for the education entry dialog
pub fn education_rules() -> RuleSet {
    RuleSet::new()
        .field(
            "institution_name",
            FieldRule::new().required().min_length(3),
        )
        .field("degree", FieldRule::new().required())
        .field("field_of_study", FieldRule::new().required().min_length(2))
        .field("start_date", FieldRule::new().required().custom(is_iso_date))
        .field("end_date", FieldRule::new().required().custom(is_iso_date))
}

/// Rules for the experience entry dialog
pub fn experience_rules() -> RuleSet {
    RuleSet::new()
        .field(
            "previous_role",
            FieldRule::new()
                .required()
                .custom(|value| matches!(value.as_text(), Some("Tutor" | "Lab assistant"))),
        )
        .field(
            "previous_course_name",
            FieldRule::new()
                .required()
                .min_length(2)
                .max_length(50)
                .pattern(course_name_pattern()),
        )
        .field(
            "job_type",
            FieldRule::new()
                .required()
                .custom(|value| matches!(value.as_text(), Some("Full-Time" | "Part-Time"))),
        )
        .field("start_date", FieldRule::new().required())
        .field("end_date", FieldRule::new().required())
}

/// Rules for the skills picker
pub fn skills_rules() -> RuleSet {
    RuleSet::new().field(
        "skills",
        FieldRule::new()
            .required()
            .custom(|value| matches!(value, FieldValue::Items(items) if !items.is_empty())),
    )
}

// ============================================================================
// Helper Functions
// ============================================================================

fn is_iso_date(value: &FieldValue) -> bool {
    value
        .as_text()
        .map(|text| NaiveDate::parse_from_str(text, "%Y-%m-%d").is_ok())
        .unwrap_or(false)
}

fn course_name_pattern() -> Regex {
    Regex::new(r"^[a-zA-Z0-9\s]+$").expect("course name pattern compiles")
}
