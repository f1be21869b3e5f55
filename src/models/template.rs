//! Schedule template model.
//!
//! A template defines the universe a generation run may draw from: the
//! numbered time slots of a day, the candidate rooms, and the candidate
//! subjects. Templates are owned by an external catalog and are read-only
//! to the engine.

use serde::{Deserialize, Serialize};

/// A numbered lesson period.
///
/// Identity within a template is the `lesson_number`; start and end times
/// are display metadata and never enter conflict checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Lesson number, unique within the template.
    pub lesson_number: u32,
    /// Start time (e.g. "08:00").
    pub start_time: String,
    /// End time (e.g. "09:00").
    pub end_time: String,
}

impl TimeSlot {
    /// Creates a new time slot.
    pub fn new(
        lesson_number: u32,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            lesson_number,
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }
}

/// The slot/room/subject universe for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleTemplate {
    /// Unique template identifier.
    pub id: String,
    /// Template name (e.g. "Default Template").
    pub name: String,
    /// Ordered time slots available for lessons.
    pub time_slots: Vec<TimeSlot>,
    /// IDs of rooms usable under this template.
    pub rooms: Vec<String>,
    /// IDs of subjects teachable under this template.
    pub subjects: Vec<String>,
    /// Whether the template is active.
    pub is_active: bool,
}

impl ScheduleTemplate {
    /// Creates a new active template with no slots, rooms, or subjects.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            time_slots: Vec::new(),
            rooms: Vec::new(),
            subjects: Vec::new(),
            is_active: true,
        }
    }

    /// Adds a time slot.
    pub fn with_time_slot(mut self, slot: TimeSlot) -> Self {
        self.time_slots.push(slot);
        self
    }

    /// Adds `count` consecutive hourly slots starting at `first_lesson`.
    ///
    /// Convenience for tests and seeding; slot times are synthesized as
    /// "HH:00".
    pub fn with_hourly_slots(mut self, first_lesson: u32, count: u32) -> Self {
        for i in 0..count {
            let n = first_lesson + i;
            let start = format!("{:02}:00", 7 + n);
            let end = format!("{:02}:00", 8 + n);
            self.time_slots.push(TimeSlot::new(n, start, end));
        }
        self
    }

    /// Adds a candidate room id.
    pub fn with_room(mut self, room_id: impl Into<String>) -> Self {
        self.rooms.push(room_id.into());
        self
    }

    /// Adds a candidate subject id.
    pub fn with_subject(mut self, subject_id: impl Into<String>) -> Self {
        self.subjects.push(subject_id.into());
        self
    }

    /// Number of distinct (slot, room) placement combinations.
    pub fn pair_capacity(&self) -> usize {
        self.time_slots.len() * self.rooms.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hourly_slots() {
        let t = ScheduleTemplate::new("T1", "Default").with_hourly_slots(1, 3);
        assert_eq!(t.time_slots.len(), 3);
        assert_eq!(t.time_slots[0].lesson_number, 1);
        assert_eq!(t.time_slots[0].start_time, "08:00");
        assert_eq!(t.time_slots[2].lesson_number, 3);
        assert_eq!(t.time_slots[2].end_time, "11:00");
    }

    #[test]
    fn test_pair_capacity() {
        let t = ScheduleTemplate::new("T1", "Default")
            .with_hourly_slots(1, 4)
            .with_room("R1")
            .with_room("R2");
        assert_eq!(t.pair_capacity(), 8);

        let empty = ScheduleTemplate::new("T2", "Empty");
        assert_eq!(empty.pair_capacity(), 0);
    }
}
