//! Subject model.
//!
//! Subjects carry no scheduling constraints of their own; the engine picks
//! one uniformly at random for every placed lesson.

use serde::{Deserialize, Serialize};

/// A teachable subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject identifier.
    pub id: String,
    /// Human-readable name (e.g. "Mathematics").
    pub name: String,
    /// Subject code (unique within the catalog, e.g. "MATH101").
    pub code: String,
    /// Optional description.
    pub description: Option<String>,
}

impl Subject {
    /// Creates a new subject.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            code: code.into(),
            description: None,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
