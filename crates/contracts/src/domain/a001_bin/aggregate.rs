use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::coded_enum;
use crate::domain::a004_device::Device;
use crate::domain::common::Coordinates;
use crate::shared::display::{ColorToken, DisplayStatus};
use crate::shared::status;

// ============================================================================
// Enums
// ============================================================================

coded_enum! {
    /// Kind of waste a bin accepts
    pub enum BinType {
        General => ("general", "General"),
        Recyclable => ("recyclable", "Recyclable"),
        Organic => ("organic", "Organic"),
        Hazardous => ("hazardous", "Hazardous"),
    }
}

coded_enum! {
    /// Operational state of a bin
    pub enum BinStatus {
        Active => ("active", "Active"),
        Full => ("full", "Full"),
        Maintenance => ("maintenance", "Maintenance"),
        Inactive => ("inactive", "Inactive"),
    }
}

/// Fixed partition of the fill level used for triage:
/// empty `[0,20)`, low `[20,60)`, high `[60,80)`, full `[80,100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillLevelBucket {
    Empty,
    Low,
    High,
    Full,
}

impl FillLevelBucket {
    /// `None` outside `[0,100]`
    pub fn classify(fill_level: i64) -> Option<Self> {
        match fill_level {
            0..=19 => Some(FillLevelBucket::Empty),
            20..=59 => Some(FillLevelBucket::Low),
            60..=79 => Some(FillLevelBucket::High),
            80..=100 => Some(FillLevelBucket::Full),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            FillLevelBucket::Empty => "empty",
            FillLevelBucket::Low => "low",
            FillLevelBucket::High => "high",
            FillLevelBucket::Full => "full",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "empty" => Some(FillLevelBucket::Empty),
            "low" => Some(FillLevelBucket::Low),
            "high" => Some(FillLevelBucket::High),
            "full" => Some(FillLevelBucket::Full),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FillLevelBucket::Empty => "Empty (0-19%)",
            FillLevelBucket::Low => "Low (20-59%)",
            FillLevelBucket::High => "High (60-79%)",
            FillLevelBucket::Full => "Full (80-100%)",
        }
    }

    pub fn all() -> [FillLevelBucket; 4] {
        [
            FillLevelBucket::Empty,
            FillLevelBucket::Low,
            FillLevelBucket::High,
            FillLevelBucket::Full,
        ]
    }
}

// ============================================================================
// Record
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinLocation {
    pub address: String,
    #[serde(default)]
    pub area: String,
    pub coordinates: Coordinates,
}

/// Physical waste receptacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bin {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Human-assigned, immutable after creation
    pub bin_id: String,
    pub bin_type: BinType,
    pub status: BinStatus,

    /// Always within `[0,100]`, clamped on arrival; a missing reading is 0
    #[serde(default, deserialize_with = "deserialize_fill_level")]
    pub fill_level: u8,

    /// Liters
    pub capacity: u32,
    pub location: BinLocation,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(default)]
    pub collection_count: u32,

    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_emptied: Option<DateTime<Utc>>,

    // Flags computed by the backend; the client renders them as-is
    #[serde(default)]
    pub is_urgent: bool,
    #[serde(default)]
    pub needs_collection: bool,
}

fn deserialize_fill_level<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<f64>::deserialize(deserializer)? {
        Some(raw) if !raw.is_nan() => Ok(raw.round().clamp(0.0, 100.0) as u8),
        _ => Ok(0),
    }
}

impl Bin {
    pub fn fill_bucket(&self) -> FillLevelBucket {
        // fill_level is clamped, classification cannot miss
        FillLevelBucket::classify(i64::from(self.fill_level)).unwrap_or(FillLevelBucket::Full)
    }

    pub fn fill_color(&self) -> ColorToken {
        status::fill_level_color(i64::from(self.fill_level))
    }

    pub fn status_display(&self) -> DisplayStatus {
        status::bin_status(&self.status)
    }

    /// "Urgent" / "Needs collection" chips, driven only by backend flags
    pub fn badges(&self) -> Vec<DisplayStatus> {
        status::bin_badges(self.is_urgent, self.needs_collection)
    }

    /// Position for a map marker; `None` when the stored point is out of range
    pub fn map_position(&self) -> Option<Coordinates> {
        Some(self.location.coordinates).filter(Coordinates::is_valid)
    }

    /// Referential check between a bin and the device shown next to it.
    pub fn check_device_binding(&self, device: &Device) -> Result<(), BindingError> {
        if let Some(bound) = &self.device_id {
            if bound != &device.device_id {
                return Err(BindingError::DeviceMismatch {
                    bin_id: self.bin_id.clone(),
                    expected: bound.clone(),
                    found: device.device_id.clone(),
                });
            }
        }
        if let Some(back_ref) = &device.bin_id {
            if back_ref != &self.bin_id {
                return Err(BindingError::BinMismatch {
                    device_id: device.device_id.clone(),
                    expected: self.bin_id.clone(),
                    found: back_ref.clone(),
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindingError {
    #[error("Bin {bin_id} is bound to device {expected}, got {found}")]
    DeviceMismatch {
        bin_id: String,
        expected: String,
        found: String,
    },
    #[error("Device {device_id} points to bin {found}, expected {expected}")]
    BinMismatch {
        device_id: String,
        expected: String,
        found: String,
    },
}

// ============================================================================
// DTOs
// ============================================================================

/// Payload of `POST /bins`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBinDto {
    pub bin_id: String,
    pub bin_type: BinType,
    pub capacity: u32,
    pub location: BinLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
}

/// Partial payload of `PATCH /bins/{binId}`; only set fields are sent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBinDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin_type: Option<BinType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BinStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<BinLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
}

impl UpdateBinDto {
    pub fn is_empty(&self) -> bool {
        self == &UpdateBinDto::default()
    }
}
