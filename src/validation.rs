//! Request and edit validation.
//!
//! Two concerns:
//! - structural checks on generation requests (lesson counts, duplicate
//!   students) before any storage round-trip;
//! - conflict validation of manually edited entry lists, rejecting the
//!   whole edit on the first collision.

use crate::engine::LessonRequirement;
use crate::error::{ScheduleError, ScheduleResult};
use crate::models::ScheduleEntry;
use std::collections::HashSet;

/// Validates the requirement list of a generation request.
///
/// Rejects zero lesson counts and duplicated student ids. Template and
/// student existence are checked against the catalog collaborators by the
/// service, not here.
pub fn validate_requirements(requirements: &[LessonRequirement]) -> ScheduleResult<()> {
    let mut seen = HashSet::new();
    for r in requirements {
        if r.number_of_lessons == 0 {
            return Err(ScheduleError::Validation(format!(
                "student {} requires zero lessons",
                r.student_id
            )));
        }
        if !seen.insert(r.student_id.as_str()) {
            return Err(ScheduleError::Validation(format!(
                "duplicate requirement for student {}",
                r.student_id
            )));
        }
    }
    Ok(())
}

/// Validates a proposed entry list against the schedule it will replace.
///
/// Each proposed entry is checked two ways:
/// - against every *other* proposed entry, since the proposal becomes the
///   schedule's entire entry list and must be conflict-free on its own;
/// - against every existing entry that is not value-equal to it, so a
///   proposal colliding with current state is rejected while entries
///   carried over unchanged do not conflict with their own prior copy.
///
/// The first collision aborts the whole edit with `Conflict` naming the
/// time slot; nothing is applied.
pub fn validate_proposed_entries(
    existing: &[ScheduleEntry],
    proposed: &[ScheduleEntry],
) -> ScheduleResult<()> {
    for (i, entry) in proposed.iter().enumerate() {
        for (j, other) in proposed.iter().enumerate() {
            if i != j && other.blocks(entry.time_slot_number, &entry.student_id, &entry.room_id)
            {
                return Err(ScheduleError::Conflict {
                    time_slot_number: entry.time_slot_number,
                });
            }
        }
        for current in existing {
            if current != entry
                && current.blocks(entry.time_slot_number, &entry.student_id, &entry.room_id)
            {
                return Err(ScheduleError::Conflict {
                    time_slot_number: entry.time_slot_number,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_requirements() {
        let reqs = vec![
            LessonRequirement::new("alice", 3),
            LessonRequirement::new("bob", 1),
        ];
        assert!(validate_requirements(&reqs).is_ok());
        assert!(validate_requirements(&[]).is_ok());
    }

    #[test]
    fn test_zero_lessons_rejected() {
        let reqs = vec![LessonRequirement::new("alice", 0)];
        let err = validate_requirements(&reqs).unwrap_err();
        assert!(matches!(err, ScheduleError::Validation(_)));
    }

    #[test]
    fn test_duplicate_student_rejected() {
        let reqs = vec![
            LessonRequirement::new("alice", 2),
            LessonRequirement::new("alice", 1),
        ];
        let err = validate_requirements(&reqs).unwrap_err();
        assert!(matches!(err, ScheduleError::Validation(_)));
    }

    #[test]
    fn test_edit_against_occupied_slot_room() {
        // Existing unrelated entry already occupies slot 1 / R1
        let existing = vec![ScheduleEntry::new(1, "bob", "R1", "MATH")];
        let proposed = vec![ScheduleEntry::new(1, "alice", "R1", "PHYS")];
        let err = validate_proposed_entries(&existing, &proposed).unwrap_err();
        assert_eq!(err, ScheduleError::Conflict { time_slot_number: 1 });
    }

    #[test]
    fn test_edit_against_busy_student() {
        let existing = vec![ScheduleEntry::new(2, "alice", "R1", "MATH")];
        let proposed = vec![ScheduleEntry::new(2, "alice", "R2", "PHYS")];
        let err = validate_proposed_entries(&existing, &proposed).unwrap_err();
        assert_eq!(err, ScheduleError::Conflict { time_slot_number: 2 });
    }

    #[test]
    fn test_carried_over_entry_not_self_conflicting() {
        // Proposal carries the existing entry unchanged plus a new one
        let existing = vec![ScheduleEntry::new(1, "alice", "R1", "MATH")];
        let proposed = vec![
            ScheduleEntry::new(1, "alice", "R1", "MATH"),
            ScheduleEntry::new(2, "alice", "R1", "PHYS"),
        ];
        assert!(validate_proposed_entries(&existing, &proposed).is_ok());
    }

    #[test]
    fn test_internal_conflict_in_proposal() {
        // Two proposed entries collide on slot 3 / R1 even though the
        // schedule is currently empty
        let proposed = vec![
            ScheduleEntry::new(3, "alice", "R1", "MATH"),
            ScheduleEntry::new(3, "bob", "R1", "PHYS"),
        ];
        let err = validate_proposed_entries(&[], &proposed).unwrap_err();
        assert_eq!(err, ScheduleError::Conflict { time_slot_number: 3 });
    }

    #[test]
    fn test_non_conflicting_edit_accepted() {
        let existing = vec![ScheduleEntry::new(1, "bob", "R1", "MATH")];
        let proposed = vec![
            ScheduleEntry::new(1, "alice", "R2", "PHYS"),
            ScheduleEntry::new(2, "bob", "R1", "CHEM"),
        ];
        assert!(validate_proposed_entries(&existing, &proposed).is_ok());
    }
}
