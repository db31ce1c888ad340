// src/tutors/models.rs

use serde::{Deserialize, Serialize};

use crate::courses::Course;

// ============================================================================
// Tutor Models
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Casual,
}

impl Availability {
    pub fn label(&self) -> &'static str {
        match self {
            Availability::FullTime => "Full-time",
            Availability::PartTime => "Part-time",
            Availability::Casual => "Casual",
        }
    }
}

/// A tutor candidate as shown in the lecturer's listing. `selected`
/// records whether a lecturer has already picked this tutor, which
/// partitions the listing into its two context views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tutor {
    pub id: u32,
    pub name: String,
    pub availability: Availability,
    pub applied_course: Course,
    pub skills: Vec<String>,
    pub rating: f64,
    pub chosen_by: u32,
    pub commented_by: u32,
    pub selected: bool,
}

/// In-memory sample collection backing the listing views
pub fn sample_tutors() -> Vec<Tutor> {
    vec![
        Tutor {
            id: 1,
            name: "Jay Pritchett".to_string(),
            availability: Availability::FullTime,
            applied_course: Course::new("COSC123", "Software Engineering"),
            skills: string_vec(&["Python", "Testing", "AWS"]),
            rating: 4.0,
            chosen_by: 3,
            commented_by: 10,
            selected: false,
        },
        Tutor {
            id: 2,
            name: "Mitchell Pritchett".to_string(),
            availability: Availability::PartTime,
            applied_course: Course::new("COSC234", "Software Testing"),
            skills: string_vec(&["Python", "UI/UX", "React"]),
            rating: 5.0,
            chosen_by: 2,
            commented_by: 5,
            selected: false,
        },
        Tutor {
            id: 3,
            name: "Claire Pritchett".to_string(),
            availability: Availability::FullTime,
            applied_course: Course::new("COSC934", "Cybersecurity Fundamentals"),
            skills: string_vec(&["Cybersecurity", "Azure", "AWS"]),
            rating: 4.0,
            chosen_by: 6,
            commented_by: 1,
            selected: false,
        },
        Tutor {
            id: 4,
            name: "Gloria Delgado-Pritchett".to_string(),
            availability: Availability::FullTime,
            applied_course: Course::new("COSC123", "Software Engineering"),
            skills: string_vec(&["Swift", "JS", "SQL", "NoSQL", "DevOps"]),
            rating: 3.0,
            chosen_by: 14,
            commented_by: 0,
            selected: true,
        },
        Tutor {
            id: 5,
            name: "Manny Delgado".to_string(),
            availability: Availability::PartTime,
            applied_course: Course::new("COSC834", "Usability Engineering"),
            skills: string_vec(&["UI/UX", "HTML", "CSS"]),
            rating: 5.0,
            chosen_by: 2,
            commented_by: 1,
            selected: true,
        },
        Tutor {
            id: 6,
            name: "Phil Dunphy".to_string(),
            availability: Availability::FullTime,
            applied_course: Course::new("COSC834", "Usability Engineering"),
            skills: string_vec(&["UI/UX", "HTML", "CSS", "JS", "C#", "Swift"]),
            rating: 3.0,
            chosen_by: 14,
            commented_by: 2,
            selected: false,
        },
        Tutor {
            id: 7,
            name: "Luke Dunphy".to_string(),
            availability: Availability::PartTime,
            applied_course: Course::new("COSC924", "Advanced Programming"),
            skills: string_vec(&["Java", "Python", "Swift", "Kotlin"]),
            rating: 3.0,
            chosen_by: 8,
            commented_by: 2,
            selected: false,
        },
    ]
}

fn string_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}
