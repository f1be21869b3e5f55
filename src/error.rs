//! Error taxonomy for engine operations.
//!
//! Every variant is a fail-fast, non-retryable caller-facing error: the
//! engine performs no internal retries and never persists partial state.
//! An embedding API layer maps these onto its own status codes.

use thiserror::Error;

/// Result alias for engine operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Errors raised by generation, regeneration, edits, and locks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// Malformed request: unknown template or student references, zero
    /// lesson counts, empty subject pool.
    #[error("invalid request: {0}")]
    Validation(String),

    /// The randomized search found no free (slot, room) pair for a student.
    #[error("unable to assign all lessons for student {student_id}")]
    Unsatisfiable {
        /// The student whose requirement could not be met.
        student_id: String,
    },

    /// A manual edit collides with another entry.
    #[error("conflict found for time slot {time_slot_number}")]
    Conflict {
        /// The time slot where the collision occurs.
        time_slot_number: u32,
    },

    /// An entry index outside the schedule's entry list.
    #[error("entry index {index} out of range (schedule has {len} entries)")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// Current number of entries.
        len: usize,
    },

    /// A referenced schedule or template does not exist.
    #[error("{entity} {id} not found")]
    NotFound {
        /// Entity kind ("schedule", "template").
        entity: &'static str,
        /// The missing identifier.
        id: String,
    },

    /// A storage collaborator failed.
    #[error("storage error: {0}")]
    Storage(String),
}

impl ScheduleError {
    /// Creates a `NotFound` for a schedule id.
    pub fn schedule_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: "schedule",
            id: id.into(),
        }
    }

    /// Creates a `NotFound` for a template id.
    pub fn template_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: "template",
            id: id.into(),
        }
    }
}
