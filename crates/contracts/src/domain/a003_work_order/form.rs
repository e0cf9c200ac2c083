use serde::{Deserialize, Serialize};

use super::aggregate::{ActionTaken, ResolveWorkOrderDto};
use crate::shared::validation::{self, FieldInput, ValidationError};

/// Inputs of the technician "resolve" sheet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolveWorkOrderForm {
    pub action_taken: String,
    pub resolution_notes: String,
}

impl ResolveWorkOrderForm {
    pub fn to_dto(&self) -> Result<ResolveWorkOrderDto, ValidationError> {
        validation::require_all(&[
            FieldInput::new("actionTaken", "Action taken", &self.action_taken),
            FieldInput::new("resolutionNotes", "Resolution notes", &self.resolution_notes),
        ])?;

        let action_taken = ActionTaken::from_code(self.action_taken.trim());
        if !action_taken.is_known() || action_taken == ActionTaken::None {
            return Err(ValidationError::new("actionTaken", "Select the action taken"));
        }

        Ok(ResolveWorkOrderDto {
            action_taken,
            resolution_notes: self.resolution_notes.trim().to_string(),
        })
    }
}
