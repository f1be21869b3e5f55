//! Room model.
//!
//! Rooms are the physical spaces lessons are placed into. The engine treats
//! a room as an opaque capacity holder: availability and capacity are
//! catalog concerns, and callers are expected to pass only eligible rooms
//! into a generation run.

use serde::{Deserialize, Serialize};

/// A room that lessons can be assigned to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Room number (unique within the catalog, e.g. "101").
    pub number: String,
    /// Seating capacity.
    pub capacity: i32,
    /// Optional description (e.g. "Physics Lab").
    pub description: Option<String>,
    /// Whether the room is currently available for scheduling.
    pub is_available: bool,
}

impl Room {
    /// Creates a new available room.
    pub fn new(id: impl Into<String>, number: impl Into<String>, capacity: i32) -> Self {
        Self {
            id: id.into(),
            number: number.into(),
            capacity,
            description: None,
            is_available: true,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the availability flag.
    pub fn with_availability(mut self, is_available: bool) -> Self {
        self.is_available = is_available;
        self
    }
}
