//! Greedy randomized lesson placement.
//!
//! # Algorithm
//!
//! 1. Sort requirements by lesson count, descending — the most-constrained
//!    students are served first to reduce late-stage placement failures.
//! 2. For each student, repeat until the requirement is met:
//!    draw a freshly shuffled (slot, room) pair list, take the first pair
//!    that is free against both already-placed and fixed entries, and
//!    assign a uniformly random subject.
//! 3. No free pair left for a student fails the whole run.
//!
//! # Complexity
//! O(l * p * e) where l = total lessons, p = slot×room pairs, e = entries
//! placed so far.

use log::{debug, info};
use rand::prelude::IndexedRandom;
use rand::Rng;

use super::sampler::shuffled_pairs;
use super::LessonRequirement;
use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{slot_is_free, Room, ScheduleEntry, ScheduleTemplate, Subject};

/// Places lessons for every requirement, avoiding conflicts with both the
/// entries placed during this run and the `fixed` entries supplied by the
/// caller (locked entries during regeneration; empty for a fresh run).
///
/// Returns only the freshly placed entries — `fixed` entries are obstacles,
/// not output. On `Unsatisfiable` nothing is returned, so a failed run
/// leaves no partial schedule behind.
pub fn assign_lessons<R: Rng>(
    template: &ScheduleTemplate,
    rooms: &[Room],
    subjects: &[Subject],
    requirements: &[LessonRequirement],
    fixed: &[ScheduleEntry],
    rng: &mut R,
) -> ScheduleResult<Vec<ScheduleEntry>> {
    let total_lessons: u64 = requirements.iter().map(|r| u64::from(r.number_of_lessons)).sum();
    if total_lessons > 0 && subjects.is_empty() {
        return Err(ScheduleError::Validation(
            "template has no subjects to assign".into(),
        ));
    }

    // Most-constrained students first
    let mut sorted: Vec<&LessonRequirement> = requirements.iter().collect();
    sorted.sort_by(|a, b| b.number_of_lessons.cmp(&a.number_of_lessons));

    let mut placed: Vec<ScheduleEntry> = Vec::with_capacity(total_lessons as usize);

    for requirement in sorted {
        for _ in 0..requirement.number_of_lessons {
            // Re-randomize the visiting order for every placement attempt
            let pairs = shuffled_pairs(&template.time_slots, rooms, rng);
            let pair = pairs
                .into_iter()
                .find(|p| {
                    slot_is_free(
                        &placed,
                        p.time_slot_number,
                        &requirement.student_id,
                        &p.room_id,
                    ) && slot_is_free(
                        fixed,
                        p.time_slot_number,
                        &requirement.student_id,
                        &p.room_id,
                    )
                })
                .ok_or_else(|| ScheduleError::Unsatisfiable {
                    student_id: requirement.student_id.clone(),
                })?;

            // Non-empty by the guard above
            let subject = subjects.choose(rng).ok_or_else(|| {
                ScheduleError::Validation("template has no subjects to assign".into())
            })?;

            debug!(
                "placed student {} in slot {} room {} subject {}",
                requirement.student_id, pair.time_slot_number, pair.room_id, subject.id
            );

            placed.push(ScheduleEntry::new(
                pair.time_slot_number,
                requirement.student_id.clone(),
                pair.room_id,
                subject.id.clone(),
            ));
        }
    }

    info!(
        "assigned {} lessons for {} students on template {}",
        placed.len(),
        requirements.len(),
        template.id
    );
    Ok(placed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Schedule;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn template(slots: u32, rooms: &[&str], subjects: &[&str]) -> ScheduleTemplate {
        let mut t = ScheduleTemplate::new("T1", "Default").with_hourly_slots(1, slots);
        for r in rooms {
            t = t.with_room(*r);
        }
        for s in subjects {
            t = t.with_subject(*s);
        }
        t
    }

    fn rooms(ids: &[&str]) -> Vec<Room> {
        ids.iter()
            .enumerate()
            .map(|(i, id)| Room::new(*id, format!("{}", 100 + i), 30))
            .collect()
    }

    fn subjects(ids: &[&str]) -> Vec<Subject> {
        ids.iter()
            .map(|id| Subject::new(*id, format!("Subject {id}"), format!("{id}-101")))
            .collect()
    }

    fn as_schedule(entries: Vec<ScheduleEntry>) -> Schedule {
        let mut s = Schedule::new("S1", "T1", "test");
        s.entries = entries;
        s
    }

    #[test]
    fn test_two_slots_one_room_three_lessons_fails() {
        // Only 2 slot×room combinations exist for a 3-lesson requirement
        let t = template(2, &["R1"], &["MATH"]);
        let mut rng = SmallRng::seed_from_u64(7);
        let err = assign_lessons(
            &t,
            &rooms(&["R1"]),
            &subjects(&["MATH"]),
            &[LessonRequirement::new("alice", 3)],
            &[],
            &mut rng,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ScheduleError::Unsatisfiable {
                student_id: "alice".into()
            }
        );
    }

    #[test]
    fn test_two_slots_two_rooms_two_students_succeeds() {
        let t = template(2, &["R1", "R2"], &["MATH", "PHYS"]);
        let mut rng = SmallRng::seed_from_u64(7);
        let entries = assign_lessons(
            &t,
            &rooms(&["R1", "R2"]),
            &subjects(&["MATH", "PHYS"]),
            &[
                LessonRequirement::new("alice", 2),
                LessonRequirement::new("bob", 2),
            ],
            &[],
            &mut rng,
        )
        .unwrap();

        assert_eq!(entries.len(), 4);
        let s = as_schedule(entries);
        assert!(s.is_conflict_free());
        assert_eq!(s.entries_for_student("alice").len(), 2);
        assert_eq!(s.entries_for_student("bob").len(), 2);
    }

    #[test]
    fn test_lesson_counts_match_requirements() {
        let t = template(6, &["R1", "R2", "R3"], &["MATH"]);
        let reqs = vec![
            LessonRequirement::new("alice", 4),
            LessonRequirement::new("bob", 1),
            LessonRequirement::new("carol", 3),
        ];
        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let entries = assign_lessons(
                &t,
                &rooms(&["R1", "R2", "R3"]),
                &subjects(&["MATH"]),
                &reqs,
                &[],
                &mut rng,
            )
            .unwrap();
            let s = as_schedule(entries);
            assert!(s.is_conflict_free(), "seed {seed} produced a conflict");
            for r in &reqs {
                assert_eq!(
                    s.entries_for_student(&r.student_id).len(),
                    r.number_of_lessons as usize,
                    "seed {seed}, student {}",
                    r.student_id
                );
            }
        }
    }

    #[test]
    fn test_subjects_drawn_from_template_pool() {
        let t = template(4, &["R1"], &["MATH", "PHYS"]);
        let mut rng = SmallRng::seed_from_u64(3);
        let entries = assign_lessons(
            &t,
            &rooms(&["R1"]),
            &subjects(&["MATH", "PHYS"]),
            &[LessonRequirement::new("alice", 4)],
            &[],
            &mut rng,
        )
        .unwrap();
        assert!(entries
            .iter()
            .all(|e| e.subject_id == "MATH" || e.subject_id == "PHYS"));
    }

    #[test]
    fn test_fixed_entries_block_placement() {
        // One slot, one room, and a fixed entry already occupying it
        let t = template(1, &["R1"], &["MATH"]);
        let fixed = vec![ScheduleEntry::new(1, "bob", "R1", "MATH").locked()];
        let mut rng = SmallRng::seed_from_u64(5);
        let err = assign_lessons(
            &t,
            &rooms(&["R1"]),
            &subjects(&["MATH"]),
            &[LessonRequirement::new("alice", 1)],
            &fixed,
            &mut rng,
        )
        .unwrap_err();
        assert!(matches!(err, ScheduleError::Unsatisfiable { .. }));
    }

    #[test]
    fn test_fixed_entries_not_returned() {
        let t = template(2, &["R1"], &["MATH"]);
        let fixed = vec![ScheduleEntry::new(1, "bob", "R1", "MATH").locked()];
        let mut rng = SmallRng::seed_from_u64(5);
        let entries = assign_lessons(
            &t,
            &rooms(&["R1"]),
            &subjects(&["MATH"]),
            &[LessonRequirement::new("alice", 1)],
            &fixed,
            &mut rng,
        )
        .unwrap();
        // Only alice's fresh placement, and it avoided the fixed slot
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].student_id, "alice");
        assert_eq!(entries[0].time_slot_number, 2);
        assert!(!entries[0].is_locked);
    }

    #[test]
    fn test_empty_requirements() {
        let t = template(2, &["R1"], &["MATH"]);
        let mut rng = SmallRng::seed_from_u64(1);
        let entries = assign_lessons(
            &t,
            &rooms(&["R1"]),
            &subjects(&["MATH"]),
            &[],
            &[],
            &mut rng,
        )
        .unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_no_subjects_rejected() {
        let t = template(2, &["R1"], &[]);
        let mut rng = SmallRng::seed_from_u64(1);
        let err = assign_lessons(
            &t,
            &rooms(&["R1"]),
            &[],
            &[LessonRequirement::new("alice", 1)],
            &[],
            &mut rng,
        )
        .unwrap_err();
        assert!(matches!(err, ScheduleError::Validation(_)));
    }

    #[test]
    fn test_full_capacity_saturation() {
        // 3 slots x 2 rooms = 6 pairs; two students of 3 lessons each fill
        // the grid exactly
        let t = template(3, &["R1", "R2"], &["MATH"]);
        for seed in 0..10 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let entries = assign_lessons(
                &t,
                &rooms(&["R1", "R2"]),
                &subjects(&["MATH"]),
                &[
                    LessonRequirement::new("alice", 3),
                    LessonRequirement::new("bob", 3),
                ],
                &[],
                &mut rng,
            )
            .unwrap();
            let s = as_schedule(entries);
            assert_eq!(s.entry_count(), 6);
            assert!(s.is_conflict_free(), "seed {seed}");
        }
    }
}
