//! Schedule service: the boundary an API layer calls.
//!
//! Orchestrates the collaborators around the assignment engine: resolve
//! the template universe, validate students, run the randomized placement,
//! and persist — atomically at the schedule level. Every operation either
//! saves a whole consistent schedule or saves nothing.
//!
//! The service is logically single-threaded per schedule; serializing
//! concurrent operations on the same schedule id is the embedding layer's
//! responsibility.

use log::{info, warn};
use rand::Rng;

use crate::engine::{assign_lessons, GenerationRequest, LessonRequirement};
use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{Room, Schedule, ScheduleEntry, ScheduleTemplate, Subject};
use crate::storage::{ScheduleFilter, ScheduleStore, StudentDirectory, TemplateCatalog};
use crate::validation::{validate_proposed_entries, validate_requirements};

/// A manual edit: fields present in the update replace the schedule's.
#[derive(Debug, Clone, Default)]
pub struct ScheduleUpdate {
    /// Replacement entry list, conflict-checked before applying.
    pub entries: Option<Vec<ScheduleEntry>>,
    /// Replacement template reference.
    pub template_id: Option<String>,
    /// Replacement active status.
    pub is_active: Option<bool>,
}

impl ScheduleUpdate {
    /// Creates an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement entries.
    pub fn with_entries(mut self, entries: Vec<ScheduleEntry>) -> Self {
        self.entries = Some(entries);
        self
    }

    /// Sets the replacement template id.
    pub fn with_template_id(mut self, template_id: impl Into<String>) -> Self {
        self.template_id = Some(template_id.into());
        self
    }

    /// Sets the replacement active status.
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}

/// Generation, regeneration, edit, and lock operations over schedules.
pub struct ScheduleService<C, D, S> {
    catalog: C,
    students: D,
    store: S,
}

impl<C, D, S> ScheduleService<C, D, S>
where
    C: TemplateCatalog,
    D: StudentDirectory,
    S: ScheduleStore,
{
    /// Creates a service over the given collaborators.
    pub fn new(catalog: C, students: D, store: S) -> Self {
        Self {
            catalog,
            students,
            store,
        }
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Generates a schedule from a template and per-student requirements.
    ///
    /// Fails with `Validation` on unknown template or student references
    /// and with `Unsatisfiable` when the randomized search dead-ends; in
    /// both cases nothing is persisted.
    pub fn generate_schedule<R: Rng>(
        &mut self,
        request: &GenerationRequest,
        rng: &mut R,
    ) -> ScheduleResult<Schedule> {
        let (template, rooms, subjects) = self.resolve_request(request)?;

        let entries = assign_lessons(
            &template,
            &rooms,
            &subjects,
            &request.requirements,
            &[],
            rng,
        )
        .inspect_err(|e| warn!("generation failed for template {}: {e}", template.id))?;

        let mut schedule = Schedule::new("", template.id.as_str(), request.name.as_str());
        schedule.entries = entries;
        let saved = self.store.save(schedule)?;
        info!(
            "generated schedule {} ({} entries) from template {}",
            saved.id,
            saved.entry_count(),
            template.id
        );
        Ok(saved)
    }

    /// Regenerates the unlocked portion of an existing schedule.
    ///
    /// Requirements are re-derived by counting each student's unlocked
    /// entries; locked entries are carried over verbatim and act as fixed
    /// obstacles for the fresh placements. The result is a new schedule
    /// instance; on failure the original is untouched and nothing new is
    /// persisted.
    pub fn regenerate_schedule<R: Rng>(
        &mut self,
        schedule_id: &str,
        rng: &mut R,
    ) -> ScheduleResult<Schedule> {
        let existing = self.store.load(schedule_id)?;
        let locked = existing.locked_entries();

        let requirements: Vec<LessonRequirement> = existing
            .unlocked_lesson_counts()
            .into_iter()
            .map(|(student_id, count)| LessonRequirement::new(student_id, count))
            .collect();

        let mut request =
            GenerationRequest::new(existing.template_id.as_str(), existing.name.as_str());
        request.requirements = requirements;
        let (template, rooms, subjects) = self.resolve_request(&request)?;

        let fresh = assign_lessons(
            &template,
            &rooms,
            &subjects,
            &request.requirements,
            &locked,
            rng,
        )
        .inspect_err(|e| warn!("regeneration of schedule {schedule_id} failed: {e}"))?;

        let mut schedule = Schedule::new("", template.id.as_str(), existing.name.as_str());
        schedule.entries = fresh;
        schedule.entries.extend(locked);
        let saved = self.store.save(schedule)?;
        info!(
            "regenerated schedule {schedule_id} as {} ({} entries)",
            saved.id,
            saved.entry_count()
        );
        Ok(saved)
    }

    /// Applies a manual edit after conflict-checking any proposed entries.
    ///
    /// The whole edit is rejected on the first conflict; otherwise the
    /// supplied fields replace the schedule's and it is persisted.
    pub fn edit_schedule(
        &mut self,
        schedule_id: &str,
        update: &ScheduleUpdate,
    ) -> ScheduleResult<Schedule> {
        let mut schedule = self.store.load(schedule_id)?;

        if let Some(ref entries) = update.entries {
            validate_proposed_entries(&schedule.entries, entries)?;
            schedule.entries = entries.clone();
        }
        if let Some(ref template_id) = update.template_id {
            schedule.template_id = template_id.clone();
        }
        if let Some(is_active) = update.is_active {
            schedule.is_active = is_active;
        }

        self.store.save(schedule)
    }

    /// Locks the entry at `entry_index` against regeneration.
    ///
    /// Idempotent; `OutOfRange` when the index is not a valid position.
    pub fn lock_entry(
        &mut self,
        schedule_id: &str,
        entry_index: usize,
    ) -> ScheduleResult<Schedule> {
        let mut schedule = self.store.load(schedule_id)?;
        if !schedule.lock_entry(entry_index) {
            return Err(ScheduleError::OutOfRange {
                index: entry_index,
                len: schedule.entry_count(),
            });
        }
        self.store.save(schedule)
    }

    /// Lists schedules matching a filter. Pure passthrough.
    pub fn list_schedules(&self, filter: &ScheduleFilter) -> ScheduleResult<Vec<Schedule>> {
        self.store.list(filter)
    }

    /// Loads one schedule. Pure passthrough.
    pub fn get_schedule(&self, schedule_id: &str) -> ScheduleResult<Schedule> {
        self.store.load(schedule_id)
    }

    /// All schedules a student appears in. Pure passthrough.
    pub fn schedules_by_student(&self, student_id: &str) -> ScheduleResult<Vec<Schedule>> {
        self.store.find_by_student(student_id)
    }

    /// Deletes a schedule. Pure passthrough.
    pub fn delete_schedule(&mut self, schedule_id: &str) -> ScheduleResult<()> {
        self.store.delete(schedule_id)
    }

    /// Validates a generation request and resolves its template universe.
    ///
    /// An unknown template is the caller's fault here, so `NotFound` from
    /// the catalog surfaces as `Validation`.
    fn resolve_request(
        &self,
        request: &GenerationRequest,
    ) -> ScheduleResult<(ScheduleTemplate, Vec<Room>, Vec<Subject>)> {
        validate_requirements(&request.requirements)?;

        let template = self.catalog.template(&request.template_id).map_err(|e| {
            match e {
                ScheduleError::NotFound { .. } => ScheduleError::Validation(format!(
                    "template {} not found",
                    request.template_id
                )),
                other => other,
            }
        })?;

        let student_ids: Vec<String> = request
            .requirements
            .iter()
            .map(|r| r.student_id.clone())
            .collect();
        let found = self.students.find_valid_students(&student_ids)?;
        if found.len() != student_ids.len() {
            return Err(ScheduleError::Validation(
                "some students not found or are not valid students".into(),
            ));
        }

        let rooms = self.catalog.rooms_by_ids(&template.rooms)?;
        let subjects = self.catalog.subjects_by_ids(&template.subjects)?;
        Ok((template, rooms, subjects))
    }
}
