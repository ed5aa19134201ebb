use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Radio band a network is broadcasting on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Band {
    #[serde(rename = "2.4GHz")]
    Ghz2_4,
    #[serde(rename = "5GHz")]
    Ghz5,
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Band::Ghz2_4 => f.write_str("2.4GHz"),
            Band::Ghz5 => f.write_str("5GHz"),
        }
    }
}

/// Wi-Fi network as seen by a (simulated) scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WifiNetwork {
    pub ssid: String,
    pub signal_strength: u8,
    pub channel: u32,
    pub band: Band,
    pub security: String,
    pub is_connected: bool,
    #[serde(default)]
    pub is_recommended: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceType {
    Phone,
    Laptop,
    Tablet,
    SmartTv,
    Unknown,
}

impl DeviceType {
    pub fn label(&self) -> &'static str {
        match self {
            DeviceType::Phone => "Phone",
            DeviceType::Laptop => "Laptop",
            DeviceType::Tablet => "Tablet",
            DeviceType::SmartTv => "Smart TV",
            DeviceType::Unknown => "Unknown",
        }
    }
}

/// Device attached to the home network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectedDevice {
    pub id: String,
    pub name: String,
    pub ip_address: String,
    pub mac_address: String,
    /// Current usage in Mbps
    pub bandwidth_usage: f64,
    pub device_type: DeviceType,
    pub is_unknown: bool,
    pub last_seen: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedTestResult {
    pub download_mbps: f64,
    pub upload_mbps: f64,
    pub ping_ms: u32,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TroubleshootingStep {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Faq {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

/// Signal measured in one room during a dead-zone survey
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyReading {
    pub location: String,
    pub signal: u8,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_displays_like_the_scan_list() {
        assert_eq!(Band::Ghz2_4.to_string(), "2.4GHz");
        assert_eq!(Band::Ghz5.to_string(), "5GHz");
    }

    #[test]
    fn device_type_serializes_kebab_case() {
        let json = serde_json::to_string(&DeviceType::SmartTv).unwrap();
        assert_eq!(json, "\"smart-tv\"");
    }

    #[test]
    fn network_without_recommended_flag_deserializes() {
        let json = r#"{"ssid":"Lab","signal_strength":50,"channel":6,"band":"2.4GHz","security":"WPA2","is_connected":false}"#;
        let network: WifiNetwork = serde_json::from_str(json).unwrap();
        assert!(!network.is_recommended);
        assert_eq!(network.band, Band::Ghz2_4);
    }
}
