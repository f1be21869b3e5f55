//! Collaborator contracts for catalogs and persistence.
//!
//! The engine consumes three external collaborators: the template catalog
//! (slots, rooms, subjects), the student directory (identity validation),
//! and the schedule store. These traits are the whole contract — backends
//! (documents, SQL, remote services) adapt behind them. `memory` provides
//! a HashMap-backed implementation for tests and embedding.
//!
//! Traits are synchronous: the engine treats storage round-trips as
//! blocking calls bounding each operation, and imposes no timeouts of its
//! own.

pub mod memory;

pub use memory::InMemoryStore;

use serde::{Deserialize, Serialize};

use crate::error::ScheduleResult;
use crate::models::{Room, Schedule, ScheduleTemplate, Student, Subject};

/// Read access to schedule templates and the rooms/subjects they reference.
pub trait TemplateCatalog {
    /// Loads a template by id; `NotFound` when absent.
    fn template(&self, id: &str) -> ScheduleResult<ScheduleTemplate>;

    /// Resolves room ids to full records. Unknown ids are skipped.
    fn rooms_by_ids(&self, ids: &[String]) -> ScheduleResult<Vec<Room>>;

    /// Resolves subject ids to full records. Unknown ids are skipped.
    fn subjects_by_ids(&self, ids: &[String]) -> ScheduleResult<Vec<Subject>>;
}

/// Student identity validation.
pub trait StudentDirectory {
    /// Returns the students among `ids` that exist and hold the student
    /// role. The service treats a shorter result than the request as a
    /// validation failure.
    fn find_valid_students(&self, ids: &[String]) -> ScheduleResult<Vec<Student>>;
}

/// Schedule persistence.
pub trait ScheduleStore {
    /// Loads a schedule by id; `NotFound` when absent.
    fn load(&self, id: &str) -> ScheduleResult<Schedule>;

    /// Persists a schedule, assigning an id when it has none yet. Returns
    /// the stored value.
    fn save(&mut self, schedule: Schedule) -> ScheduleResult<Schedule>;

    /// Deletes a schedule; `NotFound` when absent.
    fn delete(&mut self, id: &str) -> ScheduleResult<()>;

    /// Lists schedules matching a filter.
    fn list(&self, filter: &ScheduleFilter) -> ScheduleResult<Vec<Schedule>>;

    /// All schedules containing at least one entry for the student.
    fn find_by_student(&self, student_id: &str) -> ScheduleResult<Vec<Schedule>>;
}

/// Query-by-example filter for schedule listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleFilter {
    /// Restrict to a given active status.
    pub is_active: Option<bool>,
    /// Restrict to schedules generated from a given template.
    pub template_id: Option<String>,
}

impl ScheduleFilter {
    /// Matches everything.
    pub fn any() -> Self {
        Self::default()
    }

    /// Restricts by active status.
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    /// Restricts by template.
    pub fn for_template(mut self, template_id: impl Into<String>) -> Self {
        self.template_id = Some(template_id.into());
        self
    }

    /// Whether a schedule matches the filter.
    pub fn matches(&self, schedule: &Schedule) -> bool {
        if let Some(active) = self.is_active {
            if schedule.is_active != active {
                return false;
            }
        }
        if let Some(ref template_id) = self.template_id {
            if &schedule.template_id != template_id {
                return false;
            }
        }
        true
    }
}
