//! Student model.
//!
//! The engine only needs student identity; roles, credentials, and profile
//! data live with the student directory collaborator.

use serde::{Deserialize, Serialize};

/// A student eligible for lesson placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// Unique student identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl Student {
    /// Creates a new student.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
