//! Built-in sample data.
//!
//! Nothing here is measured: the tables stand in for the scan results, device
//! lists and help content a real diagnostics backend would provide.

use crate::doctor::types::{
    Band, ConnectedDevice, DeviceType, Faq, SpeedTestResult, SurveyReading, TroubleshootingStep,
    WifiNetwork,
};
use chrono::Utc;

fn network(
    ssid: &str,
    signal_strength: u8,
    channel: u32,
    band: Band,
    security: &str,
    is_connected: bool,
) -> WifiNetwork {
    WifiNetwork {
        ssid: ssid.to_string(),
        signal_strength,
        channel,
        band,
        security: security.to_string(),
        is_connected,
        is_recommended: false,
    }
}

/// The network this machine is pretending to be attached to
pub fn current_network() -> WifiNetwork {
    network("HomeNetwork_5G", 85, 36, Band::Ghz5, "WPA2", true)
}

pub fn nearby_networks() -> Vec<WifiNetwork> {
    vec![
        current_network(),
        network("HomeNetwork_2.4G", 78, 6, Band::Ghz2_4, "WPA2", false),
        network("Neighbor_WiFi", 45, 11, Band::Ghz2_4, "WPA2", false),
        WifiNetwork {
            is_recommended: true,
            ..network("CoffeeShop_Guest", 32, 1, Band::Ghz2_4, "Open", false)
        },
    ]
}

fn device(
    id: &str,
    name: &str,
    last_octet: u8,
    mac_address: &str,
    bandwidth_usage: f64,
    device_type: DeviceType,
    last_seen: &str,
) -> ConnectedDevice {
    ConnectedDevice {
        id: id.to_string(),
        name: name.to_string(),
        ip_address: format!("192.168.1.{last_octet}"),
        mac_address: mac_address.to_string(),
        bandwidth_usage,
        device_type,
        is_unknown: device_type == DeviceType::Unknown,
        last_seen: last_seen.to_string(),
    }
}

pub fn connected_devices() -> Vec<ConnectedDevice> {
    vec![
        device("1", "iPhone 14", 101, "AA:BB:CC:DD:EE:FF", 25.5, DeviceType::Phone, "2 minutes ago"),
        device("2", "MacBook Pro", 102, "BB:CC:DD:EE:FF:AA", 45.2, DeviceType::Laptop, "Active now"),
        device("3", "Samsung Smart TV", 103, "CC:DD:EE:FF:AA:BB", 15.8, DeviceType::SmartTv, "5 minutes ago"),
        device("4", "Unknown Device", 104, "DD:EE:FF:AA:BB:CC", 8.3, DeviceType::Unknown, "1 hour ago"),
    ]
}

pub fn speed_test_result() -> SpeedTestResult {
    SpeedTestResult {
        download_mbps: 85.4,
        upload_mbps: 12.3,
        ping_ms: 15,
        timestamp: Utc::now(),
    }
}

pub const TROUBLESHOOTING_STEPS: [TroubleshootingStep; 4] = [
    TroubleshootingStep {
        id: "1",
        title: "Restart Your Router",
        description: "Unplug your router for 30 seconds, then plug it back in.",
    },
    TroubleshootingStep {
        id: "2",
        title: "Check Cable Connections",
        description: "Ensure all cables are securely connected to your router and modem.",
    },
    TroubleshootingStep {
        id: "3",
        title: "Update Router Firmware",
        description: "Check if your router firmware is up to date.",
    },
    TroubleshootingStep {
        id: "4",
        title: "Contact Your ISP",
        description: "If issues persist, contact your internet service provider.",
    },
];

pub const FAQS: [Faq; 3] = [
    Faq {
        id: "1",
        question: "Why is my internet slow?",
        answer: "Slow internet can be caused by network congestion, too many connected devices, outdated equipment, or ISP issues.",
    },
    Faq {
        id: "2",
        question: "Why does my Wi-Fi keep disconnecting?",
        answer: "Frequent disconnections can be due to interference, weak signal, outdated drivers, or router overheating.",
    },
    Faq {
        id: "3",
        question: "How can I improve my Wi-Fi signal?",
        answer: "Position your router centrally, away from obstacles, update firmware, and consider a Wi-Fi extender for large homes.",
    },
];

/// (title, advice) pairs for the help screen
pub const COMMON_ISSUES: [(&str, &str); 3] = [
    (
        "No Internet Connection",
        "Check cables, restart router, contact ISP if needed",
    ),
    (
        "Slow Internet Speed",
        "Check for interference, limit connected devices",
    ),
    (
        "Frequent Disconnections",
        "Update drivers, check router placement, reduce interference",
    ),
];

pub const SECURITY_TIPS: [&str; 3] = [
    "Regularly review connected devices and remove unknown ones",
    "Use strong, unique passwords for your Wi-Fi network",
    "Enable WPA3 security if supported by your router",
];

pub const COVERAGE_TIPS: [&str; 4] = [
    "Place your router in a central, elevated location",
    "Remove obstacles like walls and metal objects between router and devices",
    "Consider a Wi-Fi extender or mesh system for large homes",
    "Adjust router antennas (if adjustable) for better coverage",
];

/// Router placement advice; `true` marks a good practice
pub const PLACEMENT_GUIDE: [(&str, bool); 4] = [
    ("Central location", true),
    ("Elevated position", true),
    ("Near metal objects", false),
    ("In closed cabinets", false),
];

pub const CHANNEL_CHANGE_GUIDE: [&str; 5] = [
    "Open your router's admin page (usually 192.168.1.1 or 192.168.0.1)",
    "Sign in with the administrator credentials printed on the router",
    "Find the Wireless or Wi-Fi settings for the 2.4GHz band",
    "Set the channel to the recommended value instead of Auto",
    "Save the settings and wait for the router to restart",
];

/// Rooms reported at the end of a dead-zone survey
pub fn survey_readings() -> Vec<SurveyReading> {
    [
        ("Living Room", 85, "Just now"),
        ("Kitchen", 72, "1 min ago"),
        ("Bedroom", 45, "2 min ago"),
        ("Bathroom", 28, "3 min ago"),
        ("Garage", 15, "4 min ago"),
    ]
    .into_iter()
    .map(|(location, signal, timestamp)| SurveyReading {
        location: location.to_string(),
        signal,
        timestamp: timestamp.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_nearby_network_is_connected() {
        let networks = nearby_networks();
        assert_eq!(networks.iter().filter(|n| n.is_connected).count(), 1);
        assert_eq!(networks[0], current_network());
    }

    #[test]
    fn only_the_unknown_device_is_flagged() {
        let devices = connected_devices();
        let unknown: Vec<_> = devices.iter().filter(|d| d.is_unknown).collect();
        assert_eq!(unknown.len(), 1);
        assert_eq!(unknown[0].ip_address, "192.168.1.104");
    }

    #[test]
    fn survey_contains_a_dead_zone() {
        let readings = survey_readings();
        assert_eq!(readings.len(), 5);
        assert!(readings.iter().any(|r| r.signal < 20));
    }
}
