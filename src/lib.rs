//! Lesson timetable engine.
//!
//! Assigns lesson instances to (time slot, room, subject) combinations for
//! a set of students under no-double-booking constraints, and supports
//! partial re-generation that preserves manually locked entries.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ScheduleTemplate`, `TimeSlot`, `Room`,
//!   `Subject`, `Student`, `Schedule`, `ScheduleEntry`
//! - **`engine`**: The randomized greedy assignment core — pair sampling,
//!   lesson placement, injectable random source
//! - **`validation`**: Request checks and manual-edit conflict validation
//! - **`storage`**: Collaborator trait contracts plus an in-memory backend
//! - **`service`**: `ScheduleService`, the operation boundary an API layer
//!   calls (generate, regenerate, edit, lock, queries)
//! - **`error`**: The fail-fast error taxonomy
//!
//! # Approach
//!
//! The engine runs a randomized greedy search: for every lesson it draws a
//! fresh uniformly shuffled list of (slot, room) pairs and takes the first
//! conflict-free one. There is no backtracking, so a satisfiable request
//! can still fail — callers may simply retry for a new random order.
//! Operations are atomic at the schedule level: a failed run persists
//! nothing.

pub mod engine;
pub mod error;
pub mod models;
pub mod service;
pub mod storage;
pub mod validation;

pub use engine::{GenerationRequest, LessonRequirement};
pub use error::{ScheduleError, ScheduleResult};
pub use service::{ScheduleService, ScheduleUpdate};
