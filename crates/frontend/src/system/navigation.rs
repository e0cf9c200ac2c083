//! Bottom-tab shell per role.

use contracts::shared::display::IconToken;
use contracts::system::users::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tab {
    /// Route key, stable across releases
    pub key: &'static str,
    pub title: &'static str,
    pub icon: IconToken,
}

const fn tab(key: &'static str, title: &'static str, icon: IconToken) -> Tab {
    Tab { key, title, icon }
}

const HOME: Tab = tab("home", "Home", IconToken::Home);
const DASHBOARD: Tab = tab("dashboard", "Dashboard", IconToken::Grid);
const REQUESTS: Tab = tab("requests", "Requests", IconToken::ClipboardList);
const BINS: Tab = tab("bins", "Bins", IconToken::Trash);
const REPORTS: Tab = tab("reports", "Reports", IconToken::FileText);
const WORK_ORDERS: Tab = tab("work-orders", "Work orders", IconToken::Tool);
const DEVICES: Tab = tab("devices", "Devices", IconToken::Cpu);
const USERS: Tab = tab("users", "Users", IconToken::Shield);
const PROFILE: Tab = tab("profile", "Profile", IconToken::User);

/// Unknown roles only get the profile tab
pub fn tabs_for_role(role: &Role) -> Vec<Tab> {
    match role {
        Role::Citizen => vec![HOME, REQUESTS, BINS, PROFILE],
        Role::Coordinator => vec![DASHBOARD, REQUESTS, BINS, REPORTS, PROFILE],
        Role::Technician => vec![WORK_ORDERS, DEVICES, PROFILE],
        Role::Admin => vec![DASHBOARD, BINS, USERS, REPORTS, PROFILE],
        Role::Unknown(raw) => {
            log::warn!("No navigation defined for role {:?}", raw);
            vec![PROFILE]
        }
    }
}

pub fn default_tab(role: &Role) -> Tab {
    tabs_for_role(role).first().copied().unwrap_or(PROFILE)
}
