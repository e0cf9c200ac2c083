use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::aggregate::{CreateRequestDto, RequestAddress, WasteType};
use crate::shared::validation::{self, FieldInput, ValidationError};

/// Raw inputs of the "new pickup request" screen
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestForm {
    pub waste_type: String,
    pub quantity: String,
    pub street: String,
    pub city: String,
    /// `YYYY-MM-DD`
    pub preferred_date: String,
    pub latitude: String,
    pub longitude: String,
    pub notes: String,
}

impl RequestForm {
    /// Checks the form and builds the create payload. `today` bounds the
    /// preferred date from below.
    pub fn to_create_dto(&self, today: NaiveDate) -> Result<CreateRequestDto, ValidationError> {
        validation::require_all(&[
            FieldInput::new("wasteType", "Waste type", &self.waste_type),
            FieldInput::new("quantity", "Quantity", &self.quantity),
            FieldInput::new("street", "Street", &self.street),
            FieldInput::new("city", "City", &self.city),
            FieldInput::new("preferredDate", "Preferred date", &self.preferred_date),
            FieldInput::new("lat", "Latitude", &self.latitude),
            FieldInput::new("lng", "Longitude", &self.longitude),
        ])?;

        let coordinates = validation::parse_coordinates(
            FieldInput::new("lat", "Latitude", &self.latitude),
            FieldInput::new("lng", "Longitude", &self.longitude),
        )?;

        let waste_type = WasteType::from_code(self.waste_type.trim());
        if !waste_type.is_known() {
            return Err(ValidationError::new("wasteType", "Select a waste type"));
        }

        let date = NaiveDate::parse_from_str(self.preferred_date.trim(), "%Y-%m-%d")
            .map_err(|_| ValidationError::new("preferredDate", "Preferred date must be YYYY-MM-DD"))?;
        if date < today {
            return Err(ValidationError::new(
                "preferredDate",
                "Preferred date cannot be in the past",
            ));
        }
        let preferred_date = date
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc())
            .ok_or_else(|| ValidationError::new("preferredDate", "Preferred date is invalid"))?;

        let notes = self.notes.trim();
        Ok(CreateRequestDto {
            waste_type,
            quantity: self.quantity.trim().to_string(),
            address: RequestAddress {
                street: self.street.trim().to_string(),
                city: self.city.trim().to_string(),
                coordinates: Some(coordinates),
            },
            preferred_date,
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        })
    }
}
