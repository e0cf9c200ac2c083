use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::coded_enum;
use crate::shared::display::DisplayStatus;
use crate::shared::status;

coded_enum! {
    pub enum DeviceStatus {
        Active => ("active", "Active"),
        Inactive => ("inactive", "Inactive"),
        Maintenance => ("maintenance", "Maintenance"),
    }
}

/// Battery as reported by firmware: a percentage or a text like "85%" / "low"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BatteryStatus {
    Percent(f64),
    Text(String),
}

impl BatteryStatus {
    pub fn percent(&self) -> Option<f64> {
        let value = match self {
            BatteryStatus::Percent(value) => Some(*value),
            BatteryStatus::Text(text) => text.trim().trim_end_matches('%').trim().parse().ok(),
        };
        value.filter(|v: &f64| v.is_finite())
    }
}

/// Entry of the append-only maintenance log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceEntry {
    pub action: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub technician_id: Option<String>,
    #[serde(default)]
    pub work_order_id: Option<String>,
}

/// Sensor unit mounted on a bin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub device_id: String,
    #[serde(default)]
    pub device_type: String,
    pub status: DeviceStatus,
    #[serde(default)]
    pub is_online: bool,
    #[serde(default)]
    pub battery_status: Option<BatteryStatus>,

    #[serde(default)]
    pub last_signal_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub days_since_last_signal: Option<i64>,

    /// Back-reference to the bin this device is mounted on
    #[serde(default)]
    pub bin_id: Option<String>,

    /// Stored oldest first
    #[serde(default)]
    pub maintenance_history: Vec<MaintenanceEntry>,
}

impl Device {
    pub fn status_display(&self) -> DisplayStatus {
        status::device_status(&self.status)
    }

    pub fn connectivity_display(&self) -> DisplayStatus {
        status::device_connectivity(self.is_online)
    }

    pub fn battery_display(&self) -> DisplayStatus {
        status::battery(self.battery_status.as_ref().and_then(BatteryStatus::percent))
    }

    /// History for display, newest first. Entries without a date go last;
    /// the stored order is left alone.
    pub fn maintenance_history_newest_first(&self) -> Vec<&MaintenanceEntry> {
        let mut entries: Vec<(usize, &MaintenanceEntry)> =
            self.maintenance_history.iter().enumerate().collect();
        entries.sort_by(|(ia, a), (ib, b)| match (a.date, b.date) {
            (Some(da), Some(db)) => db.cmp(&da).then(ib.cmp(ia)),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => ib.cmp(ia),
        });
        entries.into_iter().map(|(_, entry)| entry).collect()
    }
}
