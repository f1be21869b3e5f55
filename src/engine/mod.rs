//! Assignment engine.
//!
//! The algorithmic core: a randomized greedy search that places lessons
//! into (time slot, room) pairs, one student at a time, with a uniformly
//! random subject per placed lesson. No backtracking — once an entry is
//! placed it stays, and a student who cannot be served fails the whole run.
//!
//! The random source is injected (`R: Rng`) so tests can drive the search
//! with a seeded generator.

mod generator;
mod sampler;

pub use generator::assign_lessons;
pub use sampler::{shuffled_pairs, SlotRoomPair};

use serde::{Deserialize, Serialize};

/// How many lessons one student needs placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonRequirement {
    /// Student to place lessons for.
    pub student_id: String,
    /// Number of lessons required (must be >= 1).
    pub number_of_lessons: u32,
}

impl LessonRequirement {
    /// Creates a new requirement.
    pub fn new(student_id: impl Into<String>, number_of_lessons: u32) -> Self {
        Self {
            student_id: student_id.into(),
            number_of_lessons,
        }
    }
}

/// Input container for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Template to draw slots, rooms, and subjects from.
    pub template_id: String,
    /// Name for the produced schedule.
    pub name: String,
    /// Per-student lesson requirements.
    pub requirements: Vec<LessonRequirement>,
}

impl GenerationRequest {
    /// Creates a new request with no requirements.
    pub fn new(template_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            template_id: template_id.into(),
            name: name.into(),
            requirements: Vec::new(),
        }
    }

    /// Adds a requirement.
    pub fn with_requirement(mut self, student_id: impl Into<String>, lessons: u32) -> Self {
        self.requirements
            .push(LessonRequirement::new(student_id, lessons));
        self
    }
}
