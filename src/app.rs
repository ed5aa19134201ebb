use crate::config::{self, IconSet};
use crate::doctor::{
    self, ChannelLoad, DeviceInventory, SignalSampler, SpeedTestResult, SurveyHandle,
    SurveyReading, WifiNetwork,
};
use ratatui::widgets::ListState;
use std::path::PathBuf;
use std::time::Instant;
use tokio::sync::mpsc::Receiver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Scan,
    Devices,
    DeadZones,
    Help,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Home, Tab::Scan, Tab::Devices, Tab::DeadZones, Tab::Help];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Home => "Wi-Fi Doctor",
            Tab::Scan => "Network Scan",
            Tab::Devices => "Devices",
            Tab::DeadZones => "Dead Zones",
            Tab::Help => "Troubleshooting",
        }
    }

    pub fn index(&self) -> usize {
        Tab::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn previous(&self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }

    /// Tabs are bound to the digits 1-5
    pub fn from_digit(c: char) -> Option<Tab> {
        let n = c.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| Tab::ALL.get(i)).copied()
    }
}

/// Troubleshooting shortcuts on the help screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    RestartRouter,
    UpdateFirmware,
    ContactIsp,
    RunDiagnostics,
}

impl QuickAction {
    pub const ALL: [QuickAction; 4] = [
        QuickAction::RestartRouter,
        QuickAction::UpdateFirmware,
        QuickAction::ContactIsp,
        QuickAction::RunDiagnostics,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            QuickAction::RestartRouter => "Restart Router",
            QuickAction::UpdateFirmware => "Update Firmware",
            QuickAction::ContactIsp => "Contact ISP",
            QuickAction::RunDiagnostics => "Run Diagnostics",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            QuickAction::RestartRouter => "Fix common connectivity issues",
            QuickAction::UpdateFirmware => "Keep your router up to date",
            QuickAction::ContactIsp => "Get help from your provider",
            QuickAction::RunDiagnostics => "Automated problem detection",
        }
    }
}

/// Something that waits for the user to confirm it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    BlockDevice { id: String, name: String },
    Quick(QuickAction),
}

impl PendingAction {
    pub fn title(&self) -> &'static str {
        match self {
            PendingAction::BlockDevice { .. } => "Block Device",
            PendingAction::Quick(action) => action.title(),
        }
    }

    pub fn message(&self) -> String {
        match self {
            PendingAction::BlockDevice { name, .. } => {
                format!("Are you sure you want to block {name} from your network?")
            }
            PendingAction::Quick(QuickAction::RestartRouter) => {
                "This will guide you through restarting your router. Continue?".to_string()
            }
            PendingAction::Quick(QuickAction::UpdateFirmware) => {
                "This will check for router firmware updates. Continue?".to_string()
            }
            PendingAction::Quick(QuickAction::ContactIsp) => {
                "This will help you contact your Internet Service Provider.".to_string()
            }
            PendingAction::Quick(QuickAction::RunDiagnostics) => {
                "Run an automated check of your network?".to_string()
            }
        }
    }

    pub fn confirm_label(&self) -> &'static str {
        match self {
            PendingAction::BlockDevice { .. } => "Block",
            PendingAction::Quick(_) => "Continue",
        }
    }

    pub fn is_destructive(&self) -> bool {
        matches!(self, PendingAction::BlockDevice { .. })
    }
}

/// Read-only popup with a title and a few lines of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoPopup {
    pub title: String,
    pub lines: Vec<String>,
}

/// Selectable rows of the help screen, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpItem {
    Action(QuickAction),
    Step(usize),
    Faq(usize),
}

pub fn help_items() -> Vec<HelpItem> {
    QuickAction::ALL
        .iter()
        .copied()
        .map(HelpItem::Action)
        .chain((0..doctor::TROUBLESHOOTING_STEPS.len()).map(HelpItem::Step))
        .chain((0..doctor::FAQS.len()).map(HelpItem::Faq))
        .collect()
}

#[derive(Debug)]
pub struct UiState {
    pub tab: Tab,
    pub icons: IconSet,
    pub dialog: Option<PendingAction>,
    pub info_popup: Option<InfoPopup>,
    pub error_message: Option<String>,
    pub status_message: Option<String>,
    pub loading_frame: usize,
    pub show_key_logger: bool,
    pub last_key_press: Option<(String, Instant)>,
}

#[derive(Debug)]
pub struct HomeState {
    pub network: WifiNetwork,
    pub speed: SpeedTestResult,
    pub refresh_rx: Option<Receiver<()>>,
    pub scan_rx: Option<Receiver<Vec<WifiNetwork>>>,
    pub speed_rx: Option<Receiver<SpeedTestResult>>,
}

impl HomeState {
    pub fn is_refreshing(&self) -> bool {
        self.refresh_rx.is_some()
    }

    pub fn is_scanning(&self) -> bool {
        self.scan_rx.is_some()
    }

    pub fn is_testing_speed(&self) -> bool {
        self.speed_rx.is_some()
    }
}

#[derive(Debug)]
pub struct ScanState {
    pub networks: Vec<WifiNetwork>,
    pub l_state: ListState,
    pub refresh_rx: Option<Receiver<Vec<WifiNetwork>>>,
}

impl ScanState {
    pub fn is_refreshing(&self) -> bool {
        self.refresh_rx.is_some()
    }

    pub fn observed_channels(&self) -> Vec<u32> {
        self.networks.iter().map(|n| n.channel).collect()
    }

    pub fn recommended_channel(&self) -> u32 {
        doctor::recommend_channel(&self.observed_channels())
    }

    pub fn channel_usage(&self) -> Vec<ChannelLoad> {
        let observed = self.observed_channels();
        doctor::channel_usage(&observed, doctor::recommend_channel(&observed))
    }
}

#[derive(Debug)]
pub struct DeviceState {
    pub inventory: DeviceInventory,
    pub l_state: ListState,
}

#[derive(Debug)]
pub struct SurveyState {
    pub current_signal: u8,
    pub results: Vec<SurveyReading>,
    pub handle: Option<SurveyHandle>,
    pub report_dir: PathBuf,
    pub last_saved: Option<PathBuf>,
}

impl SurveyState {
    pub fn is_scanning(&self) -> bool {
        self.handle.is_some()
    }
}

#[derive(Debug)]
pub struct HelpState {
    pub l_state: ListState,
    pub expanded_faq: Option<usize>,
}

#[derive(Debug)]
pub struct AppState {
    pub ui: UiState,
    pub home: HomeState,
    pub scan: ScanState,
    pub devices: DeviceState,
    pub survey: SurveyState,
    pub help: HelpState,
    pub sampler: SignalSampler,
}

impl AppState {
    pub fn new(
        show_key_logger: bool,
        icons: IconSet,
        sampler: SignalSampler,
        report_dir: PathBuf,
    ) -> AppState {
        AppState {
            ui: UiState {
                tab: Tab::Home,
                icons,
                dialog: None,
                info_popup: None,
                error_message: None,
                status_message: None,
                loading_frame: 0,
                show_key_logger,
                last_key_press: None,
            },
            home: HomeState {
                network: doctor::current_network(),
                speed: doctor::speed_test_result(),
                refresh_rx: None,
                scan_rx: None,
                speed_rx: None,
            },
            scan: ScanState {
                networks: doctor::nearby_networks(),
                l_state: ListState::default().with_selected(Some(0)),
                refresh_rx: None,
            },
            devices: DeviceState {
                inventory: DeviceInventory::new(doctor::connected_devices()),
                l_state: ListState::default().with_selected(Some(0)),
            },
            survey: SurveyState {
                current_signal: config::INITIAL_SIGNAL,
                results: Vec::new(),
                handle: None,
                report_dir,
                last_saved: None,
            },
            help: HelpState {
                l_state: ListState::default().with_selected(Some(0)),
                expanded_faq: None,
            },
            sampler,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.home.is_refreshing()
            || self.home.is_scanning()
            || self.home.is_testing_speed()
            || self.scan.is_refreshing()
            || self.survey.is_scanning()
    }

    /// List state and length of the list on the active tab
    fn active_list(&mut self) -> Option<(&mut ListState, usize)> {
        match self.ui.tab {
            Tab::Scan => Some((&mut self.scan.l_state, self.scan.networks.len())),
            Tab::Devices => Some((&mut self.devices.l_state, self.devices.inventory.len())),
            Tab::Help => Some((&mut self.help.l_state, help_items().len())),
            Tab::Home | Tab::DeadZones => None,
        }
    }

    pub fn next(&mut self) {
        if let Some((l_state, len)) = self.active_list() {
            let i = match l_state.selected() {
                Some(i) => {
                    if i >= len.saturating_sub(1) {
                        i
                    } else {
                        i + 1
                    }
                }
                None => 0,
            };
            l_state.select(Some(i));
        }
    }

    pub fn previous(&mut self) {
        if let Some((l_state, _)) = self.active_list() {
            let i = match l_state.selected() {
                Some(i) => i.saturating_sub(1),
                None => 0,
            };
            l_state.select(Some(i));
        }
    }

    pub fn go_to_top(&mut self) {
        if let Some((l_state, len)) = self.active_list()
            && len > 0
        {
            l_state.select(Some(0));
        }
    }

    pub fn go_to_bottom(&mut self) {
        if let Some((l_state, len)) = self.active_list()
            && len > 0
        {
            l_state.select(Some(len - 1));
        }
    }

    /// Keep the device selection inside the list after a removal
    pub fn clamp_device_selection(&mut self) {
        let len = self.devices.inventory.len();
        match self.devices.l_state.selected() {
            _ if len == 0 => self.devices.l_state.select(None),
            Some(i) if i >= len => self.devices.l_state.select(Some(len - 1)),
            None => self.devices.l_state.select(Some(0)),
            _ => {}
        }
    }

    pub fn toggle_faq(&mut self, index: usize) {
        self.help.expanded_faq = if self.help.expanded_faq == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    /// Findings of the automated check, worst first
    pub fn diagnose(&self) -> Vec<String> {
        let mut findings = Vec::new();

        let unknown = self.devices.inventory.unknown_count();
        if unknown > 0 {
            findings.push(format!(
                "{unknown} unknown device(s) on your network, review them on the Devices tab"
            ));
        }

        let dead_zones: Vec<&str> = self
            .survey
            .results
            .iter()
            .filter(|r| doctor::CoverageQuality::of(r.signal) == doctor::CoverageQuality::DeadZone)
            .map(|r| r.location.as_str())
            .collect();
        if !dead_zones.is_empty() {
            findings.push(format!("Dead zones found: {}", dead_zones.join(", ")));
        }

        let quality = doctor::LinkQuality::of(self.home.network.signal_strength);
        if matches!(quality, doctor::LinkQuality::Fair | doctor::LinkQuality::Poor) {
            findings.push(format!(
                "{} signal on {}, move closer to the router",
                quality.label(),
                self.home.network.ssid
            ));
        }

        let recommended = self.scan.recommended_channel();
        let on_2_4 = self
            .scan
            .networks
            .iter()
            .filter(|n| n.band == doctor::Band::Ghz2_4)
            .count();
        if on_2_4 > 0 {
            if config::CHART_CHANNELS.contains(&recommended) {
                findings.push(format!("Least congested 2.4GHz channel is {recommended}"));
            } else {
                findings.push(format!("Recommended channel is {recommended}"));
            }
        }

        if findings.is_empty() {
            findings.push("All systems running normally".to_string());
        }
        findings
    }
}

/// Seeded state with ASCII icons for unit tests
#[cfg(test)]
pub fn test_state() -> AppState {
    AppState::new(
        false,
        IconSet::Ascii,
        SignalSampler::new(Some(9)),
        std::env::temp_dir(),
    )
}
