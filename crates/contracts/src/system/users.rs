use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::coded_enum;
use crate::domain::common::Coordinates;
use crate::shared::display::DisplayStatus;
use crate::shared::status;
use crate::shared::validation::{self, FieldInput, ValidationError};

coded_enum! {
    /// Exactly one role per user
    pub enum Role {
        Citizen => ("citizen", "Citizen"),
        Coordinator => ("coordinator", "Coordinator"),
        Technician => ("technician", "Technician"),
        Admin => ("admin", "Admin"),
    }
}

coded_enum! {
    pub enum UserStatus {
        Active => ("active", "Active"),
        Inactive => ("inactive", "Inactive"),
        Suspended => ("suspended", "Suspended"),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAddress {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub role: Role,
    pub status: UserStatus,
    #[serde(default)]
    pub address: Option<UserAddress>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn role_display(&self) -> DisplayStatus {
        status::role(&self.role)
    }

    pub fn status_display(&self) -> DisplayStatus {
        status::user_status(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<UserAddress>,
}

/// Partial update; unset fields are left as they are on the server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<UserAddress>,
}

/// Raw inputs of the admin user form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    /// Coordinates are optional, but when one is given both are required
    pub latitude: String,
    pub longitude: String,
}

impl UserForm {
    pub fn to_create_dto(&self) -> Result<CreateUserDto, ValidationError> {
        validation::require_all(&[
            FieldInput::new("name", "Name", &self.name),
            FieldInput::new("email", "Email", &self.email),
            FieldInput::new("phone", "Phone", &self.phone),
            FieldInput::new("role", "Role", &self.role),
        ])?;

        let has_lat = !self.latitude.trim().is_empty();
        let has_lng = !self.longitude.trim().is_empty();
        let coordinates = if has_lat || has_lng {
            validation::require_all(&[
                FieldInput::new("lat", "Latitude", &self.latitude),
                FieldInput::new("lng", "Longitude", &self.longitude),
            ])?;
            Some(validation::parse_coordinates(
                FieldInput::new("lat", "Latitude", &self.latitude),
                FieldInput::new("lng", "Longitude", &self.longitude),
            )?)
        } else {
            None
        };

        validation::check_email(FieldInput::new("email", "Email", &self.email))?;

        let role = Role::from_code(self.role.trim());
        if !role.is_known() {
            return Err(ValidationError::new("role", "Select a role"));
        }

        let address = UserAddress {
            street: self.street.trim().to_string(),
            city: self.city.trim().to_string(),
            postal_code: self.postal_code.trim().to_string(),
            coordinates,
        };
        let has_address = address != UserAddress::default();

        Ok(CreateUserDto {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            phone: self.phone.trim().to_string(),
            role,
            address: has_address.then_some(address),
        })
    }
}
