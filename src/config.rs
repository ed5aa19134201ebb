/// Centralized configuration constants for wifi-doctor
use std::ops::RangeInclusive;

// UI Dimensions
pub const MAIN_WINDOW_HEIGHT: u16 = 34;
pub const MAIN_WINDOW_WIDTH: u16 = 86;

// Timing
pub const HOME_REFRESH_MS: u64 = 2000;
pub const HOME_SCAN_MS: u64 = 3000;
pub const SCAN_REFRESH_MS: u64 = 2000;
pub const SPEED_TEST_MS: u64 = 3000;
pub const SURVEY_DURATION_MS: u64 = 10_000;
pub const SURVEY_TICK_MS: u64 = 1500;
pub const EVENT_POLL_MS: u64 = 100;
pub const KEY_LOGGER_VISIBLE_SECS: u64 = 2;

// Simulation
pub const INITIAL_SIGNAL: u8 = 75;
pub const SPEED_JITTER_RATIO: f64 = 0.1;
pub const PING_JITTER_MS: i64 = 5;
pub const SURVEY_CHANNEL_CAPACITY: usize = 16;

/// 2.4GHz channels drawn in the usage chart
pub const CHART_CHANNELS: RangeInclusive<u32> = 1..=11;

// Loading animation frames
pub const LOADING_CHARS: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

// Icons - Nerd Fonts
pub mod icons {
    pub mod nerd {
        pub const WIFI: &str = "󰖩 "; // nf-md-wifi
        pub const CONNECTED: &str = "󰄬"; // nf-md-check
        pub const RECOMMENDED: &str = "󰌵"; // nf-md-lightbulb
        pub const LOCKED: &str = " "; // nf-fa-lock
        pub const OPEN: &str = " "; // nf-fa-rss
        pub const WARNING: &str = " "; // nf-fa-warning
        pub const OK: &str = " "; // nf-fa-check_circle
        pub const BAD: &str = " "; // nf-fa-times_circle
        pub const PHONE: &str = "󰏲 "; // nf-md-cellphone
        pub const LAPTOP: &str = "󰌢 "; // nf-md-laptop
        pub const TABLET: &str = "󰓶 "; // nf-md-tablet
        pub const TV: &str = "󰔂 "; // nf-md-television
        pub const UNKNOWN: &str = "󰋗 "; // nf-md-help_circle
        pub const EXPANDED: &str = "▾";
        pub const COLLAPSED: &str = "▸";
        pub const HIGHLIGHT: &str = "  ";
        pub const ENTER: &str = "󰌑"; // nf-md-keyboard_return
        pub const BAR: &str = "█";
        pub const BAR_EMPTY: &str = "░";
    }

    pub mod ascii {
        pub const WIFI: &str = "";
        pub const CONNECTED: &str = "[C]";
        pub const RECOMMENDED: &str = "[R]";
        pub const LOCKED: &str = "[*] ";
        pub const OPEN: &str = "[O] ";
        pub const WARNING: &str = "(!) ";
        pub const OK: &str = "(+) ";
        pub const BAD: &str = "(x) ";
        pub const PHONE: &str = "[ph] ";
        pub const LAPTOP: &str = "[lt] ";
        pub const TABLET: &str = "[tb] ";
        pub const TV: &str = "[tv] ";
        pub const UNKNOWN: &str = "[??] ";
        pub const EXPANDED: &str = "v";
        pub const COLLAPSED: &str = ">";
        pub const HIGHLIGHT: &str = "> ";
        pub const ENTER: &str = "Enter";
        pub const BAR: &str = "#";
        pub const BAR_EMPTY: &str = ".";
    }
}

/// Icon set to use based on configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconSet {
    #[default]
    Nerd,
    Ascii,
}

impl IconSet {
    pub fn from_flag(ascii: bool) -> Self {
        if ascii { IconSet::Ascii } else { IconSet::Nerd }
    }

    pub fn wifi(&self) -> &'static str {
        match self {
            IconSet::Nerd => icons::nerd::WIFI,
            IconSet::Ascii => icons::ascii::WIFI,
        }
    }

    pub fn connected(&self) -> &'static str {
        match self {
            IconSet::Nerd => icons::nerd::CONNECTED,
            IconSet::Ascii => icons::ascii::CONNECTED,
        }
    }

    pub fn recommended(&self) -> &'static str {
        match self {
            IconSet::Nerd => icons::nerd::RECOMMENDED,
            IconSet::Ascii => icons::ascii::RECOMMENDED,
        }
    }

    /// Lock for secured networks, broadcast icon for open ones
    pub fn security(&self, security: &str) -> &'static str {
        let open = security.eq_ignore_ascii_case("open");
        match (self, open) {
            (IconSet::Nerd, true) => icons::nerd::OPEN,
            (IconSet::Nerd, false) => icons::nerd::LOCKED,
            (IconSet::Ascii, true) => icons::ascii::OPEN,
            (IconSet::Ascii, false) => icons::ascii::LOCKED,
        }
    }

    pub fn warning(&self) -> &'static str {
        match self {
            IconSet::Nerd => icons::nerd::WARNING,
            IconSet::Ascii => icons::ascii::WARNING,
        }
    }

    pub fn check(&self, good: bool) -> &'static str {
        match (self, good) {
            (IconSet::Nerd, true) => icons::nerd::OK,
            (IconSet::Nerd, false) => icons::nerd::BAD,
            (IconSet::Ascii, true) => icons::ascii::OK,
            (IconSet::Ascii, false) => icons::ascii::BAD,
        }
    }

    pub fn device(&self, device_type: crate::doctor::DeviceType) -> &'static str {
        use crate::doctor::DeviceType;

        match self {
            IconSet::Nerd => match device_type {
                DeviceType::Phone => icons::nerd::PHONE,
                DeviceType::Laptop => icons::nerd::LAPTOP,
                DeviceType::Tablet => icons::nerd::TABLET,
                DeviceType::SmartTv => icons::nerd::TV,
                DeviceType::Unknown => icons::nerd::UNKNOWN,
            },
            IconSet::Ascii => match device_type {
                DeviceType::Phone => icons::ascii::PHONE,
                DeviceType::Laptop => icons::ascii::LAPTOP,
                DeviceType::Tablet => icons::ascii::TABLET,
                DeviceType::SmartTv => icons::ascii::TV,
                DeviceType::Unknown => icons::ascii::UNKNOWN,
            },
        }
    }

    pub fn disclosure(&self, expanded: bool) -> &'static str {
        match (self, expanded) {
            (IconSet::Nerd, true) => icons::nerd::EXPANDED,
            (IconSet::Nerd, false) => icons::nerd::COLLAPSED,
            (IconSet::Ascii, true) => icons::ascii::EXPANDED,
            (IconSet::Ascii, false) => icons::ascii::COLLAPSED,
        }
    }

    pub fn highlight(&self) -> &'static str {
        match self {
            IconSet::Nerd => icons::nerd::HIGHLIGHT,
            IconSet::Ascii => icons::ascii::HIGHLIGHT,
        }
    }

    pub fn enter(&self) -> &'static str {
        match self {
            IconSet::Nerd => icons::nerd::ENTER,
            IconSet::Ascii => icons::ascii::ENTER,
        }
    }

    /// Filled and empty cells for meters and bars
    pub fn bar(&self) -> (&'static str, &'static str) {
        match self {
            IconSet::Nerd => (icons::nerd::BAR, icons::nerd::BAR_EMPTY),
            IconSet::Ascii => (icons::ascii::BAR, icons::ascii::BAR_EMPTY),
        }
    }
}
