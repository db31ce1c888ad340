// src/jobs/models.rs

use serde::{Deserialize, Serialize};

// ============================================================================
// Job Posting Models
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-Time")]
    FullTime,
    #[serde(rename = "Part-Time")]
    PartTime,
}

impl JobType {
    pub fn label(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full-Time",
            JobType::PartTime => "Part-Time",
        }
    }
}

/// An open tutor / lab-assistant position attached to a course offering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoursePosting {
    pub course_code: String,
    pub course_name: String,
    pub job_type: JobType,
    pub vacancies: u32,
    pub skills_needed: Vec<String>,
    pub semester: String,
    pub year: i32,
}

/// One page of the postings table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostingPage {
    pub postings: Vec<CoursePosting>,
    pub page: usize,
    pub total_pages: usize,
    pub total: usize,
}

/// Page size used by the postings table
pub const POSTINGS_PER_PAGE: usize = 9;

impl PostingPage {
    /// Slice one page out of the full collection. Pages are 1-based;
    /// out-of-range pages clamp to the last page, and an empty
    /// collection yields a single empty page.
    pub fn slice(postings: &[CoursePosting], page: usize) -> Self {
        let total = postings.len();
        let total_pages = total.div_ceil(POSTINGS_PER_PAGE).max(1);
        let page = page.clamp(1, total_pages);
        let start = (page - 1) * POSTINGS_PER_PAGE;
        let end = (start + POSTINGS_PER_PAGE).min(total);

        Self {
            postings: postings[start..end].to_vec(),
            page,
            total_pages,
            total,
        }
    }
}

/// A submitted application for a posting
#[derive(Debug, Clone, Deserialize)]
pub struct JobApplication {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub course_code: String,
    pub job_type: JobType,
    pub semester: String,
    pub year: i32,
}

/// In-memory sample collection backing the find-a-job table
pub fn sample_postings() -> Vec<CoursePosting> {
    let postings = [
        ("COSC123", "Software Engineering", JobType::PartTime, 3),
        ("COSC123", "Software Engineering", JobType::FullTime, 1),
        ("COSC234", "Software Testing", JobType::PartTime, 2),
        ("COSC934", "Cybersecurity Fundamentals", JobType::PartTime, 2),
        ("COSC934", "Cybersecurity Fundamentals", JobType::FullTime, 1),
        ("COSC834", "Usability Engineering", JobType::PartTime, 4),
        ("COSC924", "Advanced Programming", JobType::PartTime, 2),
        ("COSC924", "Advanced Programming", JobType::FullTime, 1),
        ("COSC234", "Software Testing", JobType::FullTime, 1),
        ("COSC834", "Usability Engineering", JobType::FullTime, 2),
    ];

    postings
        .into_iter()
        .map(|(code, name, job_type, vacancies)| CoursePosting {
            course_code: code.to_string(),
            course_name: name.to_string(),
            job_type,
            vacancies,
            skills_needed: default_skills(code),
            semester: "Semester 2".to_string(),
            year: 2025,
        })
        .collect()
}

fn default_skills(course_code: &str) -> Vec<String> {
    let skills: &[&str] = match course_code {
        "COSC123" => &["Python", "Testing"],
        "COSC234" => &["Testing", "CI"],
        "COSC934" => &["Cybersecurity", "Networking"],
        "COSC834" => &["UI/UX", "HTML"],
        _ => &["Java", "Python"],
    };
    skills.iter().map(|skill| skill.to_string()).collect()
}
