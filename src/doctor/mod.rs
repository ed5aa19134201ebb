//! Simulated diagnostics for wifi-doctor
//!
//! This module provides the fabricated measurements behind every screen:
//! sample tables, the channel recommendation, signal grading, the in-memory
//! device list and the timer-driven scans.

mod catalog;
mod channel;
mod inventory;
mod report;
mod signal;
mod simulator;
mod types;

// Re-export public API
pub use catalog::{
    CHANNEL_CHANGE_GUIDE, COMMON_ISSUES, COVERAGE_TIPS, FAQS, PLACEMENT_GUIDE, SECURITY_TIPS,
    TROUBLESHOOTING_STEPS, connected_devices, current_network, nearby_networks,
    speed_test_result, survey_readings,
};
pub use channel::{ChannelLoad, Congestion, channel_usage, recommend_channel};
pub use inventory::DeviceInventory;
pub use report::save_survey;
pub use signal::{CoverageQuality, LinkQuality, SignalTone, signal_bars};
pub use simulator::{
    SignalSampler, SurveyEvent, SurveyHandle, start_network_scan, start_speed_test, start_survey,
    start_timer,
};
pub use types::{Band, DeviceType, SpeedTestResult, SurveyReading, WifiNetwork};
