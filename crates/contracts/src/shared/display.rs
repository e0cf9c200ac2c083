use serde::{Deserialize, Serialize};

/// Semantic color of a status chip. Themes map these onto palette colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Success,
    Warning,
    Danger,
    Info,
    Primary,
    Neutral,
}

impl ColorToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorToken::Success => "success",
            ColorToken::Warning => "warning",
            ColorToken::Danger => "danger",
            ColorToken::Info => "info",
            ColorToken::Primary => "primary",
            ColorToken::Neutral => "neutral",
        }
    }
}

/// Icon names shared with the icon font of the mobile shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconToken {
    CheckCircle,
    AlertTriangle,
    AlertCircle,
    Clock,
    Calendar,
    Truck,
    Tool,
    XCircle,
    Slash,
    Wifi,
    WifiOff,
    Battery,
    User,
    Shield,
    Trash,
    Home,
    Grid,
    Cpu,
    FileText,
    ClipboardList,
    Help,
}

impl IconToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconToken::CheckCircle => "check-circle",
            IconToken::AlertTriangle => "alert-triangle",
            IconToken::AlertCircle => "alert-circle",
            IconToken::Clock => "clock",
            IconToken::Calendar => "calendar",
            IconToken::Truck => "truck",
            IconToken::Tool => "tool",
            IconToken::XCircle => "x-circle",
            IconToken::Slash => "slash",
            IconToken::Wifi => "wifi",
            IconToken::WifiOff => "wifi-off",
            IconToken::Battery => "battery",
            IconToken::User => "user",
            IconToken::Shield => "shield",
            IconToken::Trash => "trash",
            IconToken::Home => "home",
            IconToken::Grid => "grid",
            IconToken::Cpu => "cpu",
            IconToken::FileText => "file-text",
            IconToken::ClipboardList => "clipboard-list",
            IconToken::Help => "help",
        }
    }
}

/// What a card or badge renders for a status: label, color and icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayStatus {
    pub label: String,
    pub color: ColorToken,
    pub icon: IconToken,
}

impl DisplayStatus {
    pub fn new(label: impl Into<String>, color: ColorToken, icon: IconToken) -> Self {
        Self {
            label: label.into(),
            color,
            icon,
        }
    }

    /// Unmapped value: raw text on a neutral chip
    pub fn fallback(raw: &str) -> Self {
        Self::new(raw, ColorToken::Neutral, IconToken::Help)
    }
}
