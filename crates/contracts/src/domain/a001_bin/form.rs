use serde::{Deserialize, Serialize};

use super::aggregate::{BinLocation, BinType, CreateBinDto};
use crate::shared::validation::{self, FieldInput, ValidationError};

/// Raw inputs of the admin "add bin" screen
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BinForm {
    pub bin_id: String,
    pub bin_type: String,
    pub capacity: String,
    pub address: String,
    pub area: String,
    pub latitude: String,
    pub longitude: String,
    /// Optional initial reading
    pub fill_level: String,
    /// Optional device to bind
    pub device_id: String,
}

impl BinForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.to_create_dto().map(|_| ())
    }

    /// Rules run in order and stop at the first failure: required fields,
    /// coordinate parsing, coordinate range, fill level, capacity.
    pub fn to_create_dto(&self) -> Result<CreateBinDto, ValidationError> {
        validation::require_all(&[
            FieldInput::new("binId", "Bin ID", &self.bin_id),
            FieldInput::new("binType", "Bin type", &self.bin_type),
            FieldInput::new("capacity", "Capacity", &self.capacity),
            FieldInput::new("address", "Address", &self.address),
            FieldInput::new("area", "Area", &self.area),
            FieldInput::new("lat", "Latitude", &self.latitude),
            FieldInput::new("lng", "Longitude", &self.longitude),
        ])?;

        let coordinates = validation::parse_coordinates(
            FieldInput::new("lat", "Latitude", &self.latitude),
            FieldInput::new("lng", "Longitude", &self.longitude),
        )?;

        let fill_level = if self.fill_level.trim().is_empty() {
            None
        } else {
            let value = validation::parse_int_in_range(
                FieldInput::new("fillLevel", "Fill level", &self.fill_level),
                0,
                100,
            )?;
            Some(value as u8)
        };

        let capacity =
            validation::parse_positive_int(FieldInput::new("capacity", "Capacity", &self.capacity))?;

        let bin_type = BinType::from_code(self.bin_type.trim());
        if !bin_type.is_known() {
            return Err(ValidationError::new("binType", "Select a bin type"));
        }

        let device_id = self.device_id.trim();
        Ok(CreateBinDto {
            bin_id: self.bin_id.trim().to_string(),
            bin_type,
            capacity,
            location: BinLocation {
                address: self.address.trim().to_string(),
                area: self.area.trim().to_string(),
                coordinates,
            },
            fill_level,
            device_id: (!device_id.is_empty()).then(|| device_id.to_string()),
        })
    }
}
