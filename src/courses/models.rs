// src/courses/models.rs

use serde::{Deserialize, Serialize};

// ============================================================================
// Course Models
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
}

impl Course {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Autocomplete display form, e.g. "COSC123 - Software Engineering"
    pub fn display(&self) -> String {
        format!("{} - {}", self.id, self.name)
    }

    /// A course criterion is accepted in any of the three forms the
    /// picker can produce: the raw code, the full name, or the
    /// autocomplete display string.
    pub fn matches_query(&self, query: &str) -> bool {
        query == self.id || query == self.name || query == self.display()
    }
}

/// Courses offering tutor positions this semester
pub fn course_catalog() -> Vec<Course> {
    vec![
        Course::new("COSC123", "Software Engineering"),
        Course::new("COSC234", "Software Testing"),
        Course::new("COSC934", "Cybersecurity Fundamentals"),
        Course::new("COSC834", "Usability Engineering"),
        Course::new("COSC924", "Advanced Programming"),
    ]
}
