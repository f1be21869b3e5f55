//! In-memory storage backend.
//!
//! A single HashMap-backed store implementing all three collaborator
//! traits. Intended for tests and lightweight embedding; a production
//! deployment adapts its own persistence behind the same traits.

use std::collections::HashMap;

use super::{ScheduleFilter, ScheduleStore, StudentDirectory, TemplateCatalog};
use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{Room, Schedule, ScheduleTemplate, Student, Subject};

/// HashMap-backed catalog, directory, and schedule store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    templates: HashMap<String, ScheduleTemplate>,
    rooms: HashMap<String, Room>,
    subjects: HashMap<String, Subject>,
    students: HashMap<String, Student>,
    schedules: HashMap<String, Schedule>,
    next_schedule_id: u64,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a template.
    pub fn with_template(mut self, template: ScheduleTemplate) -> Self {
        self.templates.insert(template.id.clone(), template);
        self
    }

    /// Seeds a room.
    pub fn with_room(mut self, room: Room) -> Self {
        self.rooms.insert(room.id.clone(), room);
        self
    }

    /// Seeds a subject.
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subjects.insert(subject.id.clone(), subject);
        self
    }

    /// Seeds a student.
    pub fn with_student(mut self, student: Student) -> Self {
        self.students.insert(student.id.clone(), student);
        self
    }

    /// Seeds a schedule under its existing id.
    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedules.insert(schedule.id.clone(), schedule);
        self
    }

    /// Number of stored schedules.
    pub fn schedule_count(&self) -> usize {
        self.schedules.len()
    }
}

impl TemplateCatalog for InMemoryStore {
    fn template(&self, id: &str) -> ScheduleResult<ScheduleTemplate> {
        self.templates
            .get(id)
            .cloned()
            .ok_or_else(|| ScheduleError::template_not_found(id))
    }

    fn rooms_by_ids(&self, ids: &[String]) -> ScheduleResult<Vec<Room>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.rooms.get(id))
            .cloned()
            .collect())
    }

    fn subjects_by_ids(&self, ids: &[String]) -> ScheduleResult<Vec<Subject>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.subjects.get(id))
            .cloned()
            .collect())
    }
}

impl StudentDirectory for InMemoryStore {
    fn find_valid_students(&self, ids: &[String]) -> ScheduleResult<Vec<Student>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.students.get(id))
            .cloned()
            .collect())
    }
}

impl ScheduleStore for InMemoryStore {
    fn load(&self, id: &str) -> ScheduleResult<Schedule> {
        self.schedules
            .get(id)
            .cloned()
            .ok_or_else(|| ScheduleError::schedule_not_found(id))
    }

    fn save(&mut self, mut schedule: Schedule) -> ScheduleResult<Schedule> {
        if schedule.id.is_empty() {
            self.next_schedule_id += 1;
            schedule.id = format!("sched-{}", self.next_schedule_id);
        }
        self.schedules
            .insert(schedule.id.clone(), schedule.clone());
        Ok(schedule)
    }

    fn delete(&mut self, id: &str) -> ScheduleResult<()> {
        self.schedules
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| ScheduleError::schedule_not_found(id))
    }

    fn list(&self, filter: &ScheduleFilter) -> ScheduleResult<Vec<Schedule>> {
        let mut found: Vec<Schedule> = self
            .schedules
            .values()
            .filter(|s| filter.matches(s))
            .cloned()
            .collect();
        found.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(found)
    }

    fn find_by_student(&self, student_id: &str) -> ScheduleResult<Vec<Schedule>> {
        let mut found: Vec<Schedule> = self
            .schedules
            .values()
            .filter(|s| s.involves_student(student_id))
            .cloned()
            .collect();
        found.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(found)
    }
}
