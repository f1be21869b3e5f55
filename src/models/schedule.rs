//! Schedule model.
//!
//! A schedule is a list of concrete lesson placements (entries) produced by
//! a generation run and then mutated by manual edits and entry locks. The
//! conflict predicate lives here: two entries conflict when they share a
//! time slot and either the same student or the same room.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One concrete lesson placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Time slot number, referencing a template's `TimeSlot::lesson_number`.
    pub time_slot_number: u32,
    /// Assigned student ID.
    pub student_id: String,
    /// Assigned room ID.
    pub room_id: String,
    /// Assigned subject ID.
    pub subject_id: String,
    /// Whether the entry is immune to regeneration.
    pub is_locked: bool,
}

impl ScheduleEntry {
    /// Creates a new unlocked entry.
    pub fn new(
        time_slot_number: u32,
        student_id: impl Into<String>,
        room_id: impl Into<String>,
        subject_id: impl Into<String>,
    ) -> Self {
        Self {
            time_slot_number,
            student_id: student_id.into(),
            room_id: room_id.into(),
            subject_id: subject_id.into(),
            is_locked: false,
        }
    }

    /// Marks the entry as locked.
    pub fn locked(mut self) -> Self {
        self.is_locked = true;
        self
    }

    /// Whether this entry occupies the given (slot, student) or (slot, room).
    pub fn blocks(&self, time_slot_number: u32, student_id: &str, room_id: &str) -> bool {
        self.time_slot_number == time_slot_number
            && (self.student_id == student_id || self.room_id == room_id)
    }
}

/// Returns true if placing (`time_slot_number`, `student_id`, `room_id`)
/// would not collide with any entry in `entries`.
///
/// A collision is a shared slot with the same student ("student busy") or
/// the same room ("room busy"). O(entries) per call, no side effects.
pub fn slot_is_free(
    entries: &[ScheduleEntry],
    time_slot_number: u32,
    student_id: &str,
    room_id: &str,
) -> bool {
    !entries
        .iter()
        .any(|e| e.blocks(time_slot_number, student_id, room_id))
}

/// A complete schedule: placements for one template instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    /// Unique schedule identifier (assigned by the store on first save).
    pub id: String,
    /// Template the schedule was generated from.
    pub template_id: String,
    /// Schedule name (e.g. "Fall 2026").
    pub name: String,
    /// Lesson placements.
    pub entries: Vec<ScheduleEntry>,
    /// Whether the schedule is active.
    pub is_active: bool,
}

impl Schedule {
    /// Creates an empty active schedule.
    pub fn new(
        id: impl Into<String>,
        template_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            template_id: template_id.into(),
            name: name.into(),
            entries: Vec::new(),
            is_active: true,
        }
    }

    /// Adds an entry.
    pub fn add_entry(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }

    /// Whether the given (slot, student, room) triple is free in this
    /// schedule.
    pub fn is_slot_free(&self, time_slot_number: u32, student_id: &str, room_id: &str) -> bool {
        slot_is_free(&self.entries, time_slot_number, student_id, room_id)
    }

    /// All entries for a given student.
    pub fn entries_for_student(&self, student_id: &str) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.student_id == student_id)
            .collect()
    }

    /// Whether any entry references the student.
    pub fn involves_student(&self, student_id: &str) -> bool {
        self.entries.iter().any(|e| e.student_id == student_id)
    }

    /// The locked entries, cloned.
    pub fn locked_entries(&self) -> Vec<ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.is_locked)
            .cloned()
            .collect()
    }

    /// Lesson counts per student over the *unlocked* entries only.
    ///
    /// This is the requirement set a regeneration run must re-satisfy;
    /// students with only locked entries do not appear. BTreeMap keeps the
    /// derived requirement order stable across runs.
    pub fn unlocked_lesson_counts(&self) -> BTreeMap<String, u32> {
        let mut counts = BTreeMap::new();
        for entry in self.entries.iter().filter(|e| !e.is_locked) {
            *counts.entry(entry.student_id.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Locks the entry at `index`. Idempotent; returns false when `index`
    /// is out of range.
    pub fn lock_entry(&mut self, index: usize) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                entry.is_locked = true;
                true
            }
            None => false,
        }
    }

    /// Whether the no-double-booking invariant holds: no two entries share
    /// a slot with the same student, and no two share a slot with the same
    /// room.
    pub fn is_conflict_free(&self) -> bool {
        for (i, a) in self.entries.iter().enumerate() {
            for b in &self.entries[i + 1..] {
                if a.blocks(b.time_slot_number, &b.student_id, &b.room_id) {
                    return false;
                }
            }
        }
        true
    }

    /// Number of entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}
