// src/forms/tests.rs

#[cfg(test)]
mod tests {
    use crate::forms::{FieldRule, FieldValue, FormFields, FormValidation, RuleSet};
    use regex::Regex;

    // Fixture form mirroring a typical edit dialog: text fields, a tag
    // list, and an optional select that starts unanswered.
    #[derive(Clone, Default)]
    struct ApplicationForm {
        full_name: String,
        about: String,
        skills: Vec<String>,
        availability: Option<String>,
        rating: f64,
    }

    impl FormFields for ApplicationForm {
        fn field(&self, name: &str) -> FieldValue {
            match name {
                "full_name" => FieldValue::from(self.full_name.as_str()),
                "about" => FieldValue::from(self.about.as_str()),
                "skills" => FieldValue::from(self.skills.clone()),
                "availability" => FieldValue::from(self.availability.clone()),
                "rating" => FieldValue::from(self.rating),
                _ => FieldValue::Missing,
            }
        }

        fn set_field(&mut self, name: &str, value: FieldValue) {
            match (name, value) {
                ("full_name", FieldValue::Text(text)) => self.full_name = text,
                ("about", FieldValue::Text(text)) => self.about = text,
                ("skills", FieldValue::Items(items)) => self.skills = items,
                ("availability", FieldValue::Text(text)) => self.availability = Some(text),
                ("rating", FieldValue::Number(number)) => self.rating = number,
                _ => {}
            }
        }
    }

    fn name_rules() -> RuleSet {
        RuleSet::new().field(
            "full_name",
            FieldRule::new().required().min_length(2).max_length(50),
        )
    }

    #[test]
    fn test_required_rejects_every_blank_variant() {
        let rule = FieldRule::new().required();

        for blank in [
            FieldValue::Text(String::new()),
            FieldValue::Text("   ".to_string()),
            FieldValue::Items(Vec::new()),
            FieldValue::Missing,
        ] {
            assert_eq!(
                rule.check(&blank).as_deref(),
                Some("This field is required"),
                "expected required failure for {:?}",
                blank
            );
        }
    }

    #[test]
    fn test_required_passes_numbers_and_nonempty_values() {
        let rule = FieldRule::new().required();

        assert_eq!(rule.check(&FieldValue::Number(0.0)), None);
        assert_eq!(rule.check(&FieldValue::from("Alice")), None);
        assert_eq!(
            rule.check(&FieldValue::Items(vec!["Python".to_string()])),
            None
        );
    }

    #[test]
    fn test_length_boundaries() {
        let rule = FieldRule::new().min_length(3).max_length(5);

        assert_eq!(
            rule.check(&FieldValue::from("ab")).as_deref(),
            Some("Minimum 3 characters")
        );
        assert_eq!(rule.check(&FieldValue::from("abc")), None);
        assert_eq!(rule.check(&FieldValue::from("abcde")), None);
        assert_eq!(
            rule.check(&FieldValue::from("abcdef")).as_deref(),
            Some("Maximum 5 characters")
        );
    }

    #[test]
    fn test_values_are_trimmed_before_length_checks() {
        let rule = FieldRule::new().min_length(3);

        // Five raw characters, two after trimming
        assert_eq!(
            rule.check(&FieldValue::from("  ab ")).as_deref(),
            Some("Minimum 3 characters")
        );
    }

    #[test]
    fn test_pattern_and_custom_messages() {
        let rule = FieldRule::new()
            .pattern(Regex::new(r"^[a-zA-Z0-9\s]+$").unwrap())
            .custom(|value| value.as_text() != Some("forbidden"));

        assert_eq!(
            rule.check(&FieldValue::from("C# tutoring!")).as_deref(),
            Some("Invalid format")
        );
        assert_eq!(
            rule.check(&FieldValue::from("forbidden")).as_deref(),
            Some("Invalid value")
        );
        assert_eq!(rule.check(&FieldValue::from("Advanced Programming")), None);
    }

    #[test]
    fn test_first_failing_check_wins() {
        // An empty value violates required, min_length, and pattern at
        // once; only the required message may surface.
        let rule = FieldRule::new()
            .required()
            .min_length(4)
            .pattern(Regex::new(r"^\S+$").unwrap());

        assert_eq!(
            rule.check(&FieldValue::from("")).as_deref(),
            Some("This field is required")
        );
    }

    #[test]
    fn test_fields_without_rules_never_fail() {
        let mut form = FormValidation::new(ApplicationForm::default(), name_rules());

        form.handle_blur("about", FieldValue::from(""));
        assert!(form.error("about").is_none());

        // Error keys stay a subset of the rule set's field names
        form.is_valid();
        assert!(form.errors().keys().all(|key| key == "full_name"));
    }

    #[test]
    fn test_changes_before_first_blur_stay_silent() {
        let mut form = FormValidation::new(ApplicationForm::default(), name_rules());

        form.handle_change("full_name", FieldValue::from(""));
        form.handle_change("full_name", FieldValue::from("x"));
        assert!(form.errors().is_empty());
        assert!(!form.is_dirty());
    }

    #[test]
    fn test_blur_latches_live_validation_form_wide() {
        let rules = RuleSet::new()
            .field("full_name", FieldRule::new().required())
            .field("about", FieldRule::new().min_length(10));
        let mut form = FormValidation::new(ApplicationForm::default(), rules);

        // Blurring one field flips the latch for the whole form
        form.handle_blur("about", FieldValue::from("long enough text"));
        assert!(form.is_dirty());

        form.handle_change("full_name", FieldValue::from("  "));
        assert_eq!(form.error("full_name"), Some("This field is required"));

        // Correcting the value clears the entry
        form.handle_change("full_name", FieldValue::from("Jay"));
        assert!(form.error("full_name").is_none());
    }

    #[test]
    fn test_computed_validity_never_lags_behind_errors() {
        let mut form = FormValidation::new(ApplicationForm::default(), name_rules());

        // Pristine form: the stored errors are empty, but validity
        // already reflects the failing required field.
        assert!(form.errors().is_empty());
        assert!(!form.computed_validity());

        form.handle_change("full_name", FieldValue::from("Jay Pritchett"));
        assert!(form.computed_validity());
    }

    #[test]
    fn test_computed_validity_agrees_with_is_valid() {
        let states = ["", " ", "J", "Jay", "Jay Pritchett"];

        for state in states {
            let mut form = FormValidation::new(ApplicationForm::default(), name_rules());
            form.handle_change("full_name", FieldValue::from(state));

            let computed = form.computed_validity();
            assert_eq!(
                computed,
                form.is_valid(),
                "divergence for input {:?}",
                state
            );
        }
    }

    #[test]
    fn test_is_valid_reveals_errors_for_unblurred_fields() {
        let rules = RuleSet::new()
            .field("full_name", FieldRule::new().required())
            .field("skills", FieldRule::new().required())
            .field("availability", FieldRule::new().required());
        let mut form = FormValidation::new(ApplicationForm::default(), rules);

        // Submit on a never-touched form forces everything visible
        assert!(!form.is_valid());
        assert_eq!(form.errors().len(), 3);
        assert_eq!(form.error("availability"), Some("This field is required"));

        let result = form.to_result();
        assert!(!result.is_valid);
        assert_eq!(
            result.message_for("skills"),
            Some("This field is required")
        );
    }

    #[test]
    fn test_reset_restores_initial_snapshot() {
        let initial = ApplicationForm {
            full_name: "Phil Dunphy".to_string(),
            about: "Realtor and part-time magician".to_string(),
            skills: vec!["UI/UX".to_string()],
            availability: Some("Full-time".to_string()),
            rating: 3.0,
        };
        let mut form = FormValidation::new(initial.clone(), name_rules());

        form.handle_blur("full_name", FieldValue::from(""));
        form.handle_change("full_name", FieldValue::from(""));
        form.handle_change("skills", FieldValue::Items(Vec::new()));
        assert!(!form.errors().is_empty());

        form.reset();
        assert_eq!(form.values().full_name, initial.full_name);
        assert_eq!(form.values().skills, initial.skills);
        assert!(form.errors().is_empty());
        assert!(!form.is_dirty());
    }

    #[test]
    fn test_set_values_loads_existing_record_for_editing() {
        let mut form = FormValidation::new(ApplicationForm::default(), name_rules());

        let saved = ApplicationForm {
            full_name: "Claire Pritchett".to_string(),
            ..ApplicationForm::default()
        };
        form.set_values(saved);

        assert_eq!(form.values().full_name, "Claire Pritchett");
        assert!(form.computed_validity());
    }
}
