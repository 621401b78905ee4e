//! Quest records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::attribute::Attribute;

/// A recurring habit the character works on, linked to one attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    /// Unique within a save record. Assigned at creation.
    pub id: Uuid,
    /// Display label, never empty.
    pub text: String,
    /// Which attribute benefits when this quest is completed.
    pub attribute: Attribute,
    /// Set on completion, cleared at every day boundary.
    pub completed_today: bool,
    /// Consecutive days completed. Resets to 0 when a day boundary passes
    /// with the quest not completed.
    pub streak: u32,
    pub created_at: DateTime<Utc>,
}

impl Quest {
    pub fn new(text: impl Into<String>, attribute: Attribute) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            attribute,
            completed_today: false,
            streak: 0,
            created_at: Utc::now(),
        }
    }
}
