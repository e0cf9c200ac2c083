use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::coded_enum;
use crate::shared::date_utils;
use crate::shared::display::DisplayStatus;
use crate::shared::status;

// ============================================================================
// Enums
// ============================================================================

coded_enum! {
    pub enum IssueType {
        BatteryLow => ("battery-low", "Battery Low"),
        SensorMalfunction => ("sensor-malfunction", "Sensor Malfunction"),
        ConnectivityIssue => ("connectivity-issue", "Connectivity Issue"),
        PhysicalDamage => ("physical-damage", "Physical Damage"),
        SoftwareError => ("software-error", "Software Error"),
        Other => ("other", "Other"),
    }
}

coded_enum! {
    pub enum Priority {
        Low => ("low", "Low"),
        Medium => ("medium", "Medium"),
        High => ("high", "High"),
    }
}

coded_enum! {
    pub enum WorkOrderStatus {
        Pending => ("pending", "Pending"),
        InProgress => ("in-progress", "In Progress"),
        Completed => ("completed", "Completed"),
        Escalated => ("escalated", "Escalated"),
    }
}

coded_enum! {
    /// What the technician did; `repaired` overrides the displayed status
    pub enum ActionTaken {
        None => ("none", "None"),
        Repaired => ("repaired", "Repaired"),
        Replaced => ("replaced", "Replaced"),
        Escalated => ("escalated", "Escalated"),
    }
}

/// Technician actions on a work order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkOrderAction {
    Start,
    Resolve,
    Escalate,
}

impl WorkOrderAction {
    pub fn label(&self) -> &'static str {
        match self {
            WorkOrderAction::Start => "Start work",
            WorkOrderAction::Resolve => "Mark resolved",
            WorkOrderAction::Escalate => "Escalate",
        }
    }

    /// Status sent by the status-update call; resolving goes through its
    /// own endpoint.
    pub fn target_status(&self) -> WorkOrderStatus {
        match self {
            WorkOrderAction::Start => WorkOrderStatus::InProgress,
            WorkOrderAction::Resolve => WorkOrderStatus::Completed,
            WorkOrderAction::Escalate => WorkOrderStatus::Escalated,
        }
    }
}

// ============================================================================
// Record
// ============================================================================

/// Maintenance ticket against a device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrder {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub work_order_id: String,
    pub issue_type: IssueType,
    pub priority: Priority,
    pub status: WorkOrderStatus,
    #[serde(default)]
    pub action_taken: Option<ActionTaken>,

    pub device_id: String,
    #[serde(default)]
    pub bin_id: Option<String>,
    #[serde(default)]
    pub technician_id: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub resolution_notes: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub assigned_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub resolved_date: Option<DateTime<Utc>>,

    // Derived by the backend when it can
    #[serde(default)]
    pub days_since_created: Option<i64>,
    /// Hours from creation to resolution
    #[serde(default)]
    pub resolution_time: Option<f64>,
}

impl WorkOrder {
    pub fn is_repaired(&self) -> bool {
        self.action_taken == Some(ActionTaken::Repaired)
    }

    /// Status as shown on cards and details; a repaired order is "Resolved"
    /// whatever its stored status says.
    pub fn display_status(&self) -> DisplayStatus {
        status::work_order_display_status(&self.status, self.action_taken.as_ref())
    }

    pub fn priority_display(&self) -> DisplayStatus {
        status::priority(&self.priority)
    }

    /// Once repaired no status-changing action is offered.
    pub fn available_actions(&self) -> Vec<WorkOrderAction> {
        if self.is_repaired() {
            return Vec::new();
        }
        match self.status {
            WorkOrderStatus::Pending => vec![WorkOrderAction::Start, WorkOrderAction::Escalate],
            WorkOrderStatus::InProgress => {
                vec![WorkOrderAction::Resolve, WorkOrderAction::Escalate]
            }
            _ => Vec::new(),
        }
    }

    pub fn days_since_created(&self, now: DateTime<Utc>) -> Option<i64> {
        self.days_since_created.or_else(|| {
            self.created_at
                .map(|created| date_utils::days_between(created, now))
        })
    }

    pub fn resolution_time_hours(&self) -> Option<f64> {
        self.resolution_time.or_else(|| {
            let created = self.created_at?;
            let resolved = self.resolved_date?;
            let minutes = (resolved - created).num_minutes().max(0);
            Some((minutes as f64 / 60.0 * 10.0).round() / 10.0)
        })
    }

    pub fn created_label(&self) -> String {
        self.created_at
            .as_ref()
            .map(date_utils::format_datetime)
            .unwrap_or_default()
    }
}

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkOrderStatusDto {
    pub status: WorkOrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveWorkOrderDto {
    pub action_taken: ActionTaken,
    pub resolution_notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignWorkOrderDto {
    pub technician_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::display::ColorToken;
    use chrono::TimeZone;

    fn order(status: WorkOrderStatus, action_taken: Option<ActionTaken>) -> WorkOrder {
        WorkOrder {
            id: None,
            work_order_id: "WO-100".to_string(),
            issue_type: IssueType::SensorMalfunction,
            priority: Priority::High,
            status,
            action_taken,
            device_id: "DEV-7".to_string(),
            bin_id: Some("BIN-7".to_string()),
            technician_id: None,
            description: None,
            resolution_notes: None,
            created_at: Some(Utc.with_ymd_and_hms(2024, 4, 1, 12, 0, 0).unwrap()),
            assigned_date: None,
            updated_at: None,
            resolved_date: None,
            days_since_created: None,
            resolution_time: None,
        }
    }

    #[test]
    fn test_repaired_overrides_pending() {
        let wo = order(WorkOrderStatus::Pending, Some(ActionTaken::Repaired));
        let display = wo.display_status();
        assert_eq!(display.label, "Resolved");
        assert_eq!(display.color, ColorToken::Success);
        assert!(wo.available_actions().is_empty());
        // stored status is untouched
        assert_eq!(wo.status, WorkOrderStatus::Pending);
    }

    #[test]
    fn test_status_without_override() {
        let wo = order(WorkOrderStatus::Pending, Some(ActionTaken::Replaced));
        assert_eq!(wo.display_status().label, "Pending");
        assert_eq!(
            wo.available_actions(),
            vec![WorkOrderAction::Start, WorkOrderAction::Escalate]
        );
    }

    #[test]
    fn test_actions_per_status() {
        assert_eq!(
            order(WorkOrderStatus::InProgress, None).available_actions(),
            vec![WorkOrderAction::Resolve, WorkOrderAction::Escalate]
        );
        assert!(order(WorkOrderStatus::Completed, None).available_actions().is_empty());
        assert!(order(WorkOrderStatus::Escalated, None).available_actions().is_empty());
    }

    #[test]
    fn test_days_since_created_prefers_backend_value() {
        let now = Utc.with_ymd_and_hms(2024, 4, 4, 12, 0, 0).unwrap();
        let mut wo = order(WorkOrderStatus::Pending, None);
        assert_eq!(wo.days_since_created(now), Some(3));
        wo.days_since_created = Some(9);
        assert_eq!(wo.days_since_created(now), Some(9));
    }

    #[test]
    fn test_resolution_time_computed() {
        let mut wo = order(WorkOrderStatus::Completed, Some(ActionTaken::Replaced));
        wo.resolved_date = Some(Utc.with_ymd_and_hms(2024, 4, 1, 15, 30, 0).unwrap());
        assert_eq!(wo.resolution_time_hours(), Some(3.5));
    }

    #[test]
    fn test_missing_action_taken_parses() {
        let json = r#"{
            "workOrderId": "WO-1", "issueType": "battery-low", "priority": "medium",
            "status": "pending", "deviceId": "DEV-1"
        }"#;
        let wo: WorkOrder = serde_json::from_str(json).unwrap();
        assert_eq!(wo.action_taken, None);
        assert_eq!(wo.display_status().label, "Pending");
        assert_eq!(wo.created_label(), "");
    }
}
