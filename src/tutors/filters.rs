// src/tutors/filters.rs

use tracing::debug;

use super::models::{Availability, Tutor};

// ============================================================================
// View Context Partition
// ============================================================================

/// Which half of the collection a view shows. The partition is applied
/// before any filter: the dashboard lists tutors still available to pick,
/// the selection view lists the ones already chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewContext {
    #[default]
    Dashboard,
    Selection,
}

impl ViewContext {
    fn admits(&self, tutor: &Tutor) -> bool {
        match self {
            ViewContext::Dashboard => !tutor.selected,
            ViewContext::Selection => tutor.selected,
        }
    }
}

// ============================================================================
// Filter Criteria
// ============================================================================

/// Independently-controlled filter state. Unset or empty criteria mean
/// "no constraint", never "match nothing"; active criteria are combined
/// with logical AND.
#[derive(Debug, Clone, Default)]
pub struct TutorFilters {
    /// Case-insensitive substring match against the tutor name
    pub name_query: String,
    /// Exact availability match
    pub availability: Option<Availability>,
    /// Course criterion in any of the picker's three forms (id, name,
    /// or "id - name")
    pub course: Option<String>,
    /// The tutor's skill set must contain every listed skill
    pub skills: Vec<String>,
}

impl TutorFilters {
    fn admits(&self, tutor: &Tutor) -> bool {
        let name_match = tutor
            .name
            .to_lowercase()
            .contains(&self.name_query.to_lowercase());

        let availability_match = self
            .availability
            .map_or(true, |wanted| tutor.availability == wanted);

        let course_match = match self.course.as_deref() {
            None | Some("") => true,
            Some(query) => tutor.applied_course.matches_query(query),
        };

        let skills_match = self
            .skills
            .iter()
            .all(|skill| tutor.skills.contains(skill));

        name_match && availability_match && course_match && skills_match
    }
}

// ============================================================================
// Sort State
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Rating,
    ChosenBy,
    CommentedBy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Active sort column and direction. Starts unsorted; never resets on
/// its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: Option<SortColumn>,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: None,
            direction: SortDirection::Asc,
        }
    }
}

impl SortState {
    /// Clicking a sort control: re-selecting the active column flips the
    /// direction, selecting a different column starts over ascending
    pub fn toggle(&mut self, column: SortColumn) {
        if self.column == Some(column) {
            self.direction = match self.direction {
                SortDirection::Asc => SortDirection::Desc,
                SortDirection::Desc => SortDirection::Asc,
            };
        } else {
            self.column = Some(column);
            self.direction = SortDirection::Asc;
        }
    }
}

fn sort_key(tutor: &Tutor, column: SortColumn) -> f64 {
    match column {
        SortColumn::Rating => tutor.rating,
        SortColumn::ChosenBy => f64::from(tutor.chosen_by),
        SortColumn::CommentedBy => f64::from(tutor.commented_by),
    }
}

// ============================================================================
// Listing Pipeline
// ============================================================================

/// Produce the displayed listing: context partition first, then the
/// AND-combined filters, then the optional sort. Recomputed in full on
/// every criteria change; the sort is stable, so ties keep their
/// relative input order in either direction.
pub fn list_tutors(
    tutors: &[Tutor],
    context: ViewContext,
    filters: &TutorFilters,
    sort: SortState,
) -> Vec<Tutor> {
    let mut listed: Vec<Tutor> = tutors
        .iter()
        .filter(|tutor| context.admits(tutor))
        .filter(|tutor| filters.admits(tutor))
        .cloned()
        .collect();

    if let Some(column) = sort.column {
        listed.sort_by(|a, b| {
            let ordering = sort_key(a, column).total_cmp(&sort_key(b, column));
            match sort.direction {
                SortDirection::Asc => ordering,
                // Equal stays Equal under reverse, preserving input order
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }

    debug!(
        shown = listed.len(),
        total = tutors.len(),
        context = ?context,
        "recomputed tutor listing"
    );

    listed
}
