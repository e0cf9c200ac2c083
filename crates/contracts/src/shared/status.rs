//! Status derivation rules.
//!
//! Pure mappings from raw record fields to what a card renders. Every
//! function is total: values outside a table get [`DisplayStatus::fallback`]
//! (raw text, neutral color).

use crate::domain::a001_bin::BinStatus;
use crate::domain::a002_collection_request::{PaymentStatus, RequestStatus};
use crate::domain::a003_work_order::{ActionTaken, Priority, WorkOrderStatus};
use crate::domain::a004_device::DeviceStatus;
use crate::shared::display::{ColorToken, DisplayStatus, IconToken};
use crate::system::users::{Role, UserStatus};

/// `>= 80` danger, `>= 60` warning, otherwise success
pub fn fill_level_color(fill_level: i64) -> ColorToken {
    if fill_level >= 80 {
        ColorToken::Danger
    } else if fill_level >= 60 {
        ColorToken::Warning
    } else {
        ColorToken::Success
    }
}

pub fn bin_status(status: &BinStatus) -> DisplayStatus {
    let (color, icon) = match status {
        BinStatus::Active => (ColorToken::Success, IconToken::CheckCircle),
        BinStatus::Full => (ColorToken::Danger, IconToken::Trash),
        BinStatus::Maintenance => (ColorToken::Warning, IconToken::Tool),
        BinStatus::Inactive => (ColorToken::Neutral, IconToken::Slash),
        BinStatus::Unknown(raw) => return DisplayStatus::fallback(raw),
    };
    DisplayStatus::new(status.display_name(), color, icon)
}

/// Chips for backend-computed flags. Urgency is never derived from the
/// fill level here.
pub fn bin_badges(is_urgent: bool, needs_collection: bool) -> Vec<DisplayStatus> {
    let mut badges = Vec::new();
    if is_urgent {
        badges.push(DisplayStatus::new(
            "Urgent",
            ColorToken::Danger,
            IconToken::AlertTriangle,
        ));
    }
    if needs_collection {
        badges.push(DisplayStatus::new(
            "Needs collection",
            ColorToken::Warning,
            IconToken::Truck,
        ));
    }
    badges
}

/// Six-entry table; `approved` and `scheduled` are the two in-flight
/// states with their own look.
pub fn request_status(status: &RequestStatus) -> DisplayStatus {
    let (label, color, icon) = match status {
        RequestStatus::Pending => ("Pending", ColorToken::Warning, IconToken::Clock),
        RequestStatus::Approved => ("Approved", ColorToken::Info, IconToken::CheckCircle),
        RequestStatus::Scheduled => ("Scheduled", ColorToken::Primary, IconToken::Calendar),
        RequestStatus::InProgress => ("In Progress", ColorToken::Primary, IconToken::Truck),
        RequestStatus::Completed => ("Completed", ColorToken::Success, IconToken::CheckCircle),
        RequestStatus::Cancelled => ("Cancelled", ColorToken::Danger, IconToken::XCircle),
        other => return DisplayStatus::fallback(other.code()),
    };
    DisplayStatus::new(label, color, icon)
}

pub fn work_order_status(status: &WorkOrderStatus) -> DisplayStatus {
    let (color, icon) = match status {
        WorkOrderStatus::Pending => (ColorToken::Warning, IconToken::Clock),
        WorkOrderStatus::InProgress => (ColorToken::Info, IconToken::Tool),
        WorkOrderStatus::Completed => (ColorToken::Success, IconToken::CheckCircle),
        WorkOrderStatus::Escalated => (ColorToken::Danger, IconToken::AlertCircle),
        WorkOrderStatus::Unknown(raw) => return DisplayStatus::fallback(raw),
    };
    DisplayStatus::new(status.display_name(), color, icon)
}

/// `actionTaken == repaired` shows "Resolved" regardless of `status`.
pub fn work_order_display_status(
    status: &WorkOrderStatus,
    action_taken: Option<&ActionTaken>,
) -> DisplayStatus {
    if action_taken == Some(&ActionTaken::Repaired) {
        return DisplayStatus::new("Resolved", ColorToken::Success, IconToken::CheckCircle);
    }
    work_order_status(status)
}

pub fn priority(priority: &Priority) -> DisplayStatus {
    let color = match priority {
        Priority::Low => ColorToken::Success,
        Priority::Medium => ColorToken::Warning,
        Priority::High => ColorToken::Danger,
        Priority::Unknown(raw) => return DisplayStatus::fallback(raw),
    };
    DisplayStatus::new(priority.display_name(), color, IconToken::AlertCircle)
}

pub fn payment_status(status: &PaymentStatus) -> DisplayStatus {
    let (color, icon) = match status {
        PaymentStatus::Pending => (ColorToken::Warning, IconToken::Clock),
        PaymentStatus::Paid => (ColorToken::Success, IconToken::CheckCircle),
        PaymentStatus::Refunded => (ColorToken::Info, IconToken::FileText),
        PaymentStatus::Failed => (ColorToken::Danger, IconToken::XCircle),
        PaymentStatus::Unknown(raw) => return DisplayStatus::fallback(raw),
    };
    DisplayStatus::new(status.display_name(), color, icon)
}

pub fn device_status(status: &DeviceStatus) -> DisplayStatus {
    let (color, icon) = match status {
        DeviceStatus::Active => (ColorToken::Success, IconToken::Cpu),
        DeviceStatus::Inactive => (ColorToken::Neutral, IconToken::Slash),
        DeviceStatus::Maintenance => (ColorToken::Warning, IconToken::Tool),
        DeviceStatus::Unknown(raw) => return DisplayStatus::fallback(raw),
    };
    DisplayStatus::new(status.display_name(), color, icon)
}

pub fn device_connectivity(is_online: bool) -> DisplayStatus {
    if is_online {
        DisplayStatus::new("Online", ColorToken::Success, IconToken::Wifi)
    } else {
        DisplayStatus::new("Offline", ColorToken::Danger, IconToken::WifiOff)
    }
}

/// `>= 50` success, `>= 20` warning, below danger; no reading is neutral
pub fn battery(percent: Option<f64>) -> DisplayStatus {
    match percent {
        Some(p) => {
            let color = if p >= 50.0 {
                ColorToken::Success
            } else if p >= 20.0 {
                ColorToken::Warning
            } else {
                ColorToken::Danger
            };
            DisplayStatus::new(format!("{:.0}%", p), color, IconToken::Battery)
        }
        None => DisplayStatus::new("Unknown", ColorToken::Neutral, IconToken::Battery),
    }
}

pub fn role(role: &Role) -> DisplayStatus {
    let (color, icon) = match role {
        Role::Citizen => (ColorToken::Info, IconToken::User),
        Role::Coordinator => (ColorToken::Primary, IconToken::ClipboardList),
        Role::Technician => (ColorToken::Warning, IconToken::Tool),
        Role::Admin => (ColorToken::Danger, IconToken::Shield),
        Role::Unknown(raw) => return DisplayStatus::fallback(raw),
    };
    DisplayStatus::new(role.display_name(), color, icon)
}

pub fn user_status(status: &UserStatus) -> DisplayStatus {
    let (color, icon) = match status {
        UserStatus::Active => (ColorToken::Success, IconToken::CheckCircle),
        UserStatus::Inactive => (ColorToken::Neutral, IconToken::Slash),
        UserStatus::Suspended => (ColorToken::Danger, IconToken::XCircle),
        UserStatus::Unknown(raw) => return DisplayStatus::fallback(raw),
    };
    DisplayStatus::new(status.display_name(), color, icon)
}
