// src/jobs/validators.rs

use super::models::JobApplication;
use crate::common::helpers::is_valid_email;
use crate::common::{Alert, ValidationResult, Validator};

// ============================================================================
// Job Application Validators
// ============================================================================

pub struct JobApplicationValidator;

impl Validator<JobApplication> for JobApplicationValidator {
    fn validate(&self, data: &JobApplication) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.first_name.trim().is_empty() {
            result.add_error("first_name", "First name is required");
        }

        if data.last_name.trim().is_empty() {
            result.add_error("last_name", "Last name is required");
        }

        if data.email.trim().is_empty() {
            result.add_error("email", "Email is required");
        } else if !is_valid_email(&data.email) {
            result.add_error("email", "Please enter a valid email address");
        }

        if data.course_code.trim().is_empty() {
            result.add_error("course_code", "Course code is required");
        }

        if data.semester.trim().is_empty() {
            result.add_error("semester", "Semester is required");
        }

        if !(2000..=2100).contains(&data.year) {
            result.add_error("year", "Invalid year");
        }

        result
    }
}

/// Alert the apply form shows after a submit attempt
pub fn submission_alert(result: &ValidationResult) -> Alert {
    if result.is_valid {
        Alert::success("Application submitted successfully!")
    } else {
        Alert::warning("Please fill out all fields before submitting")
    }
}
