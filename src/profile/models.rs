// src/profile/models.rs

use serde::{Deserialize, Serialize};

use crate::forms::{FieldValue, FormFields};
use crate::jobs::JobType;

// ============================================================================
// Profile Models
// ============================================================================

/// Top section of a tutor's profile, edited through the header dialog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileHeader {
    pub first_name: String,
    pub last_name: String,
    pub availability: Option<JobType>,
    pub about_me: String,
}

impl Default for ProfileHeader {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            availability: None,
            about_me: String::new(),
        }
    }
}

impl FormFields for ProfileHeader {
    fn field(&self, name: &str) -> FieldValue {
        match name {
            "first_name" => FieldValue::from(self.first_name.as_str()),
            "last_name" => FieldValue::from(self.last_name.as_str()),
            "availability" => FieldValue::from(self.availability.map(|a| a.label().to_string())),
            "about_me" => FieldValue::from(self.about_me.as_str()),
            _ => FieldValue::Missing,
        }
    }

    fn set_field(&mut self, name: &str, value: FieldValue) {
        match (name, value) {
            ("first_name", FieldValue::Text(text)) => self.first_name = text,
            ("last_name", FieldValue::Text(text)) => self.last_name = text,
            ("availability", FieldValue::Text(text)) => {
                self.availability = match text.as_str() {
                    "Full-Time" => Some(JobType::FullTime),
                    "Part-Time" => Some(JobType::PartTime),
                    _ => None,
                };
            }
            ("about_me", FieldValue::Text(text)) => self.about_me = text,
            _ => {}
        }
    }
}

/// One education entry; `id` is -1 until the entry is saved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub id: i64,
    pub institution_name: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: String,
    pub end_date: String,
}

impl Default for Education {
    fn default() -> Self {
        Self {
            id: -1,
            institution_name: String::new(),
            degree: "Bachelor's Degree".to_string(),
            field_of_study: String::new(),
            start_date: String::new(),
            end_date: String::new(),
        }
    }
}

impl FormFields for Education {
    fn field(&self, name: &str) -> FieldValue {
        match name {
            "institution_name" => FieldValue::from(self.institution_name.as_str()),
            "degree" => FieldValue::from(self.degree.as_str()),
            "field_of_study" => FieldValue::from(self.field_of_study.as_str()),
            "start_date" => FieldValue::from(self.start_date.as_str()),
            "end_date" => FieldValue::from(self.end_date.as_str()),
            _ => FieldValue::Missing,
        }
    }

    fn set_field(&mut self, name: &str, value: FieldValue) {
        match (name, value) {
            ("institution_name", FieldValue::Text(text)) => self.institution_name = text,
            ("degree", FieldValue::Text(text)) => self.degree = text,
            ("field_of_study", FieldValue::Text(text)) => self.field_of_study = text,
            ("start_date", FieldValue::Text(text)) => self.start_date = text,
            ("end_date", FieldValue::Text(text)) => self.end_date = text,
            _ => {}
        }
    }
}

/// One prior teaching engagement. Role and job type stay plain strings
/// so their allowed values live in the rule set, next to the dialog
/// that enforces them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub previous_role: String,
    pub previous_course_name: String,
    pub job_type: String,
    pub start_date: String,
    pub end_date: String,
}

impl Default for Experience {
    fn default() -> Self {
        Self {
            previous_role: "Tutor".to_string(),
            previous_course_name: String::new(),
            job_type: "Full-Time".to_string(),
            start_date: String::new(),
            end_date: String::new(),
        }
    }
}

impl FormFields for Experience {
    fn field(&self, name: &str) -> FieldValue {
        match name {
            "previous_role" => FieldValue::from(self.previous_role.as_str()),
            "previous_course_name" => FieldValue::from(self.previous_course_name.as_str()),
            "job_type" => FieldValue::from(self.job_type.as_str()),
            "start_date" => FieldValue::from(self.start_date.as_str()),
            "end_date" => FieldValue::from(self.end_date.as_str()),
            _ => FieldValue::Missing,
        }
    }

    fn set_field(&mut self, name: &str, value: FieldValue) {
        match (name, value) {
            ("previous_role", FieldValue::Text(text)) => self.previous_role = text,
            ("previous_course_name", FieldValue::Text(text)) => self.previous_course_name = text,
            ("job_type", FieldValue::Text(text)) => self.job_type = text,
            ("start_date", FieldValue::Text(text)) => self.start_date = text,
            ("end_date", FieldValue::Text(text)) => self.end_date = text,
            _ => {}
        }
    }
}

/// The skills picker edits a single list field
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SkillsForm {
    pub skills: Vec<String>,
}

impl FormFields for SkillsForm {
    fn field(&self, name: &str) -> FieldValue {
        match name {
            "skills" => FieldValue::from(self.skills.clone()),
            _ => FieldValue::Missing,
        }
    }

    fn set_field(&mut self, name: &str, value: FieldValue) {
        if let ("skills", FieldValue::Items(items)) = (name, value) {
            self.skills = items;
        }
    }
}
