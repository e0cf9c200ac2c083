use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::coded_enum;
use crate::domain::common::Coordinates;
use crate::shared::date_utils;
use crate::shared::display::DisplayStatus;
use crate::shared::status;

// ============================================================================
// Enums
// ============================================================================

coded_enum! {
    pub enum WasteType {
        Household => ("household", "Household"),
        Recyclable => ("recyclable", "Recyclable"),
        Organic => ("organic", "Organic"),
        Electronic => ("electronic", "Electronic"),
        Hazardous => ("hazardous", "Hazardous"),
    }
}

coded_enum! {
    /// Lifecycle of a pickup request. `cancelled` is reachable from every
    /// non-terminal state.
    pub enum RequestStatus {
        Pending => ("pending", "Pending"),
        Approved => ("approved", "Approved"),
        Scheduled => ("scheduled", "Scheduled"),
        InProgress => ("in-progress", "In Progress"),
        Completed => ("completed", "Completed"),
        Cancelled => ("cancelled", "Cancelled"),
        Rejected => ("rejected", "Rejected"),
    }
}

coded_enum! {
    pub enum PaymentStatus {
        Pending => ("pending", "Pending"),
        Paid => ("paid", "Paid"),
        Refunded => ("refunded", "Refunded"),
        Failed => ("failed", "Failed"),
    }
}

impl RequestStatus {
    /// Unknown statuses are treated as terminal: no action is offered on them
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RequestStatus::Completed
                | RequestStatus::Cancelled
                | RequestStatus::Rejected
                | RequestStatus::Unknown(_)
        )
    }

    pub fn can_transition_to(&self, next: &RequestStatus) -> bool {
        use RequestStatus::*;
        match (self, next) {
            (Pending, Approved) | (Pending, Rejected) => true,
            (Approved, Scheduled) => true,
            (Scheduled, InProgress) => true,
            (InProgress, Completed) => true,
            (current, Cancelled) => !current.is_terminal(),
            _ => false,
        }
    }
}

/// Coordinator actions on a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestAction {
    Approve,
    Reject,
    Schedule,
    Cancel,
}

impl RequestAction {
    pub fn target_status(&self) -> RequestStatus {
        match self {
            RequestAction::Approve => RequestStatus::Approved,
            RequestAction::Reject => RequestStatus::Rejected,
            RequestAction::Schedule => RequestStatus::Scheduled,
            RequestAction::Cancel => RequestStatus::Cancelled,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RequestAction::Approve => "Approve",
            RequestAction::Reject => "Reject",
            RequestAction::Schedule => "Schedule",
            RequestAction::Cancel => "Cancel",
        }
    }
}

// ============================================================================
// Record
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestAddress {
    pub street: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

/// Citizen-submitted pickup request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionRequest {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub tracking_id: String,
    pub waste_type: WasteType,
    pub status: RequestStatus,

    /// Free-text descriptor, e.g. "3 bags"
    #[serde(default)]
    pub quantity: String,
    pub address: RequestAddress,

    #[serde(default)]
    pub preferred_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub scheduled_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub estimated_cost: f64,
    #[serde(default)]
    pub payment_status: Option<PaymentStatus>,

    /// Owner reference
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub rejection_reason: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl CollectionRequest {
    pub fn status_display(&self) -> DisplayStatus {
        status::request_status(&self.status)
    }

    pub fn payment_display(&self) -> Option<DisplayStatus> {
        self.payment_status.as_ref().map(status::payment_status)
    }

    /// Actions a coordinator may take from the current status
    pub fn coordinator_actions(&self) -> Vec<RequestAction> {
        [
            RequestAction::Approve,
            RequestAction::Reject,
            RequestAction::Schedule,
            RequestAction::Cancel,
        ]
        .into_iter()
        .filter(|action| self.status.can_transition_to(&action.target_status()))
        .collect()
    }

    /// Days since submission; `None` when the backend sent no creation time
    pub fn days_open(&self, now: DateTime<Utc>) -> Option<i64> {
        self.created_at.map(|created| date_utils::days_between(created, now))
    }

    pub fn preferred_date_label(&self) -> String {
        self.preferred_date
            .as_ref()
            .map(date_utils::format_date)
            .unwrap_or_else(|| "Any day".to_string())
    }
}

// ============================================================================
// DTOs
// ============================================================================

/// Payload of `POST /collection-requests`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequestDto {
    pub waste_type: WasteType,
    pub quantity: String,
    pub address: RequestAddress,
    pub preferred_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Body of the coordinator action endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDecisionDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn request(status: RequestStatus) -> CollectionRequest {
        CollectionRequest {
            id: None,
            tracking_id: "REQ-2024-0001".to_string(),
            waste_type: WasteType::Household,
            status,
            quantity: "2 bags".to_string(),
            address: RequestAddress {
                street: "Gran Via 10".to_string(),
                city: "Madrid".to_string(),
                coordinates: None,
            },
            preferred_date: None,
            scheduled_date: None,
            estimated_cost: 0.0,
            payment_status: None,
            user_id: Some("u-1".to_string()),
            rejection_reason: None,
            created_at: Some(Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap()),
            updated_at: None,
        }
    }

    #[test]
    fn test_cancel_reachable_from_every_non_terminal_state() {
        for status in RequestStatus::all() {
            assert_eq!(
                status.can_transition_to(&RequestStatus::Cancelled),
                !status.is_terminal(),
                "{status}"
            );
        }
    }

    #[test]
    fn test_terminal_states_accept_nothing() {
        for terminal in [
            RequestStatus::Completed,
            RequestStatus::Cancelled,
            RequestStatus::Rejected,
        ] {
            for next in RequestStatus::all() {
                assert!(!terminal.can_transition_to(&next));
            }
        }
    }

    #[test]
    fn test_coordinator_actions_follow_lifecycle() {
        assert_eq!(
            request(RequestStatus::Pending).coordinator_actions(),
            vec![RequestAction::Approve, RequestAction::Reject, RequestAction::Cancel]
        );
        assert_eq!(
            request(RequestStatus::Approved).coordinator_actions(),
            vec![RequestAction::Schedule, RequestAction::Cancel]
        );
        assert_eq!(
            request(RequestStatus::InProgress).coordinator_actions(),
            vec![RequestAction::Cancel]
        );
        assert!(request(RequestStatus::Completed).coordinator_actions().is_empty());
        assert!(request(RequestStatus::Unknown("on-hold".into()))
            .coordinator_actions()
            .is_empty());
    }

    #[test]
    fn test_days_open() {
        let req = request(RequestStatus::Pending);
        let now = Utc.with_ymd_and_hms(2024, 5, 11, 9, 0, 0).unwrap();
        assert_eq!(req.days_open(now), Some(10));
    }

    #[test]
    fn test_preferred_date_label() {
        let mut req = request(RequestStatus::Pending);
        assert_eq!(req.preferred_date_label(), "Any day");
        req.preferred_date = Some(Utc.with_ymd_and_hms(2024, 6, 3, 0, 0, 0).unwrap());
        assert_eq!(req.preferred_date_label(), "03.06.2024");
    }

    #[test]
    fn test_request_parses_from_wire() {
        let json = r#"{
            "_id": "665f", "trackingId": "REQ-7", "wasteType": "electronic",
            "status": "in-progress", "quantity": "1 TV",
            "address": { "street": "Calle Luna 4", "city": "Madrid",
                         "coordinates": { "lat": 40.1, "lng": -3.2 } },
            "preferredDate": "2024-06-03T00:00:00.000Z",
            "estimatedCost": 12.5, "paymentStatus": "paid", "userId": "u-9"
        }"#;
        let req: CollectionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.status, RequestStatus::InProgress);
        assert_eq!(req.payment_status, Some(PaymentStatus::Paid));
        assert_eq!(req.address.coordinates, Some(Coordinates::new(40.1, -3.2)));
    }
}
