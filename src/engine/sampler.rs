//! Slot-room pair sampler.
//!
//! Builds the full cross product of template time slots and candidate
//! rooms, then shuffles it (Fisher–Yates via `rand`). A fresh shuffle is
//! drawn for every placement attempt: re-randomizing the visiting order
//! per lesson keeps late pairs in the cross product from being
//! systematically starved.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Room, TimeSlot};

/// One candidate placement: a lesson number paired with a room id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRoomPair {
    /// The time slot's lesson number.
    pub time_slot_number: u32,
    /// The candidate room id.
    pub room_id: String,
}

/// Produces every (lesson number, room) combination exactly once, in a
/// uniformly random order.
///
/// Inputs are not mutated; the shuffle runs on the freshly built pair list.
pub fn shuffled_pairs<R: Rng>(
    time_slots: &[TimeSlot],
    rooms: &[Room],
    rng: &mut R,
) -> Vec<SlotRoomPair> {
    let mut pairs = Vec::with_capacity(time_slots.len() * rooms.len());
    for slot in time_slots {
        for room in rooms {
            pairs.push(SlotRoomPair {
                time_slot_number: slot.lesson_number,
                room_id: room.id.clone(),
            });
        }
    }
    pairs.shuffle(rng);
    pairs
}
