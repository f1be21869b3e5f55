//! Timetabling domain models.
//!
//! Plain value types for the entities a generation run touches. Templates,
//! rooms, subjects, and students are owned by external catalogs and are
//! read-only here; schedules are owned by the engine during generation and
//! mutated by edits and locks afterwards.

mod room;
mod schedule;
mod student;
mod subject;
mod template;

pub use room::Room;
pub use schedule::{slot_is_free, Schedule, ScheduleEntry};
pub use student::Student;
pub use subject::Subject;
pub use template::{ScheduleTemplate, TimeSlot};
