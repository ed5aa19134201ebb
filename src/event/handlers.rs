use crate::app::{AppState, HelpItem, InfoPopup, PendingAction, QuickAction, Tab, help_items};
use crate::config;
use crate::doctor;
use crossterm::event::{self, KeyEvent, KeyModifiers};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Handle keyboard events while a confirmation dialog is open
pub fn handle_dialog(key: KeyEvent, state: &mut AppState) -> bool {
    match key.code {
        event::KeyCode::Enter | event::KeyCode::Char('y') => {
            if let Some(action) = state.ui.dialog.take() {
                confirm(action, state);
            }
        }
        event::KeyCode::Esc | event::KeyCode::Char('n') | event::KeyCode::Char('q') => {
            state.ui.dialog = None;
        }
        event::KeyCode::Char('[') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.ui.dialog = None;
        }
        _ => {}
    }
    false
}

/// Handle keyboard events for a read-only popup
pub fn handle_info_popup(key: KeyEvent, state: &mut AppState) -> bool {
    match key.code {
        event::KeyCode::Esc | event::KeyCode::Char('q') | event::KeyCode::Enter => {
            state.ui.info_popup = None;
        }
        event::KeyCode::Char('[') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.ui.info_popup = None;
        }
        _ => {}
    }
    false
}

/// Keys shared by every tab. Returns `None` when the key is tab-specific.
pub fn handle_global(key: KeyEvent, state: &mut AppState) -> Option<bool> {
    match key.code {
        event::KeyCode::Char('q') => Some(true),
        event::KeyCode::Tab => {
            state.ui.tab = state.ui.tab.next();
            Some(false)
        }
        event::KeyCode::BackTab => {
            state.ui.tab = state.ui.tab.previous();
            Some(false)
        }
        event::KeyCode::Char(c) if c.is_ascii_digit() => {
            if let Some(tab) = Tab::from_digit(c) {
                state.ui.tab = tab;
            }
            Some(false)
        }
        event::KeyCode::Char('j') | event::KeyCode::Down => {
            state.next();
            Some(false)
        }
        event::KeyCode::Char('k') | event::KeyCode::Up => {
            state.previous();
            Some(false)
        }
        event::KeyCode::Char('g') | event::KeyCode::Home => {
            state.go_to_top();
            Some(false)
        }
        event::KeyCode::Char('G') | event::KeyCode::End => {
            state.go_to_bottom();
            Some(false)
        }
        event::KeyCode::Esc => {
            state.ui.status_message = None;
            Some(false)
        }
        _ => None,
    }
}

/// Handle keyboard events for the home tab
pub fn handle_home(key: KeyEvent, state: &mut AppState) -> bool {
    match key.code {
        event::KeyCode::Char('r') => start_home_refresh(state),
        event::KeyCode::Char('s') | event::KeyCode::Enter => start_home_scan(state),
        event::KeyCode::Char('t') => start_speed_test(state),
        event::KeyCode::Char('d') => state.ui.tab = Tab::DeadZones,
        _ => {}
    }
    false
}

/// Handle keyboard events for the network scan tab
pub fn handle_scan(key: KeyEvent, state: &mut AppState) -> bool {
    match key.code {
        event::KeyCode::Char('r') => start_scan_refresh(state),
        event::KeyCode::Char('c') => {
            let channel = state.scan.recommended_channel();
            state.ui.info_popup = Some(InfoPopup {
                title: format!("How to Change to Channel {channel}"),
                lines: doctor::CHANNEL_CHANGE_GUIDE
                    .iter()
                    .enumerate()
                    .map(|(i, line)| format!("{}. {}", i + 1, line))
                    .collect(),
            });
        }
        _ => {}
    }
    false
}

/// Handle keyboard events for the device manager tab
pub fn handle_devices(key: KeyEvent, state: &mut AppState) -> bool {
    let selected = state
        .devices
        .l_state
        .selected()
        .and_then(|i| state.devices.inventory.get(i))
        .cloned();

    match key.code {
        event::KeyCode::Char('b') | event::KeyCode::Delete => {
            if let Some(device) = selected {
                state.ui.dialog = Some(PendingAction::BlockDevice {
                    id: device.id,
                    name: device.name,
                });
            }
        }
        event::KeyCode::Char('m') => {
            if let Some(device) = selected
                && device.is_unknown
                && state.devices.inventory.mark_known(&device.id)
            {
                state.ui.status_message = Some(format!("{} marked as known", device.name));
            }
        }
        _ => {}
    }
    false
}

/// Handle keyboard events for the dead zone finder tab
pub fn handle_dead_zones(key: KeyEvent, state: &mut AppState) -> bool {
    match key.code {
        event::KeyCode::Enter | event::KeyCode::Char(' ') => toggle_survey(state),
        event::KeyCode::Char('s') => save_results(state),
        _ => {}
    }
    false
}

/// Handle keyboard events for the troubleshooting tab
pub fn handle_help(key: KeyEvent, state: &mut AppState) -> bool {
    if let event::KeyCode::Enter | event::KeyCode::Char(' ') = key.code {
        let item = state
            .help
            .l_state
            .selected()
            .and_then(|i| help_items().get(i).copied());
        match item {
            Some(HelpItem::Action(QuickAction::RunDiagnostics)) => {
                info!("diagnostics requested");
                state.ui.info_popup = Some(InfoPopup {
                    title: "Diagnostics".to_string(),
                    lines: state.diagnose(),
                });
            }
            Some(HelpItem::Action(action)) => {
                state.ui.dialog = Some(PendingAction::Quick(action));
            }
            Some(HelpItem::Step(i)) => {
                let step = &doctor::TROUBLESHOOTING_STEPS[i];
                info!(id = step.id, step = step.title, "troubleshooting step started");
                state.ui.info_popup = Some(InfoPopup {
                    title: format!("Step {}: {}", i + 1, step.title),
                    lines: vec![step.description.to_string()],
                });
            }
            Some(HelpItem::Faq(i)) => {
                debug!(faq = doctor::FAQS[i].id, "faq toggled");
                state.toggle_faq(i);
            }
            None => {}
        }
    }
    false
}

/// Carry out an action the user just confirmed
pub fn confirm(action: PendingAction, state: &mut AppState) {
    match action {
        PendingAction::BlockDevice { id, name } => {
            if state.devices.inventory.block(&id).is_some() {
                state.clamp_device_selection();
                state.ui.status_message = Some(format!("{name} blocked"));
            }
        }
        PendingAction::Quick(action) => {
            info!(action = action.title(), "quick action confirmed");
            let lines = match action {
                QuickAction::RestartRouter => vec![
                    doctor::TROUBLESHOOTING_STEPS[0].description.to_string(),
                    "Wait until all status lights are steady before reconnecting.".to_string(),
                ],
                QuickAction::UpdateFirmware => vec![
                    doctor::TROUBLESHOOTING_STEPS[2].description.to_string(),
                    "Look for a Firmware or Administration section in the router admin page."
                        .to_string(),
                ],
                QuickAction::ContactIsp => vec![
                    doctor::TROUBLESHOOTING_STEPS[3].description.to_string(),
                    "Have your account number and the results of this app ready.".to_string(),
                ],
                QuickAction::RunDiagnostics => state.diagnose(),
            };
            state.ui.info_popup = Some(InfoPopup {
                title: action.title().to_string(),
                lines,
            });
        }
    }
}

pub fn start_home_refresh(state: &mut AppState) {
    if state.home.is_refreshing() {
        return;
    }
    state.home.refresh_rx = Some(doctor::start_timer(Duration::from_millis(
        config::HOME_REFRESH_MS,
    )));
}

/// "Scan Network" is disabled while a scan is already running
pub fn start_home_scan(state: &mut AppState) {
    if state.home.is_scanning() {
        return;
    }
    info!("network scan started from home");
    state.home.scan_rx = Some(doctor::start_network_scan(Duration::from_millis(
        config::HOME_SCAN_MS,
    )));
}

pub fn start_speed_test(state: &mut AppState) {
    if state.home.is_testing_speed() {
        return;
    }
    info!("speed test started");
    let sampler = state.sampler.fork();
    // Jitter is always relative to the sample, never the last result
    state.home.speed_rx = Some(doctor::start_speed_test(
        Duration::from_millis(config::SPEED_TEST_MS),
        doctor::speed_test_result(),
        sampler,
    ));
}

pub fn start_scan_refresh(state: &mut AppState) {
    if state.scan.is_refreshing() {
        return;
    }
    state.scan.refresh_rx = Some(doctor::start_network_scan(Duration::from_millis(
        config::SCAN_REFRESH_MS,
    )));
}

/// Start a survey, or stop the running one without publishing results
pub fn toggle_survey(state: &mut AppState) {
    if let Some(mut handle) = state.survey.handle.take() {
        handle.stop();
        return;
    }
    state.survey.results.clear();
    state.survey.last_saved = None;
    let sampler = state.sampler.fork();
    state.survey.handle = Some(doctor::start_survey(
        Duration::from_millis(config::SURVEY_DURATION_MS),
        Duration::from_millis(config::SURVEY_TICK_MS),
        sampler,
    ));
}

pub fn save_results(state: &mut AppState) {
    match doctor::save_survey(
        &state.survey.report_dir,
        &state.home.network.ssid,
        &state.survey.results,
    ) {
        Ok(path) => {
            state.ui.status_message = Some(format!("Results saved to {}", path.display()));
            state.survey.last_saved = Some(path);
        }
        Err(e) => {
            warn!(error = %e, "saving survey failed");
            state.ui.error_message = Some(e.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_state;
    use crossterm::event::KeyCode;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn blocking_requires_confirmation() {
        let mut state = test_state();
        state.ui.tab = Tab::Devices;
        state.devices.l_state.select(Some(3));

        handle_devices(key(KeyCode::Char('b')), &mut state);
        assert_eq!(state.devices.inventory.len(), 4);
        assert!(matches!(
            state.ui.dialog,
            Some(PendingAction::BlockDevice { ref id, .. }) if id == "4"
        ));

        handle_dialog(key(KeyCode::Esc), &mut state);
        assert!(state.ui.dialog.is_none());
        assert_eq!(state.devices.inventory.len(), 4);

        handle_devices(key(KeyCode::Char('b')), &mut state);
        handle_dialog(key(KeyCode::Enter), &mut state);
        assert_eq!(state.devices.inventory.len(), 3);
        assert_eq!(state.devices.inventory.unknown_count(), 0);
        assert_eq!(state.devices.l_state.selected(), Some(2));
    }

    #[test]
    fn mark_known_only_applies_to_unknown_devices() {
        let mut state = test_state();
        state.devices.l_state.select(Some(0));
        handle_devices(key(KeyCode::Char('m')), &mut state);
        assert_eq!(state.devices.inventory.devices()[0].name, "iPhone 14");

        state.devices.l_state.select(Some(3));
        handle_devices(key(KeyCode::Char('m')), &mut state);
        let device = &state.devices.inventory.devices()[3];
        assert_eq!(device.name, "Device 4");
        assert!(!device.is_unknown);
    }

    #[test]
    fn global_keys_switch_tabs_and_quit() {
        let mut state = test_state();
        assert_eq!(handle_global(key(KeyCode::Tab), &mut state), Some(false));
        assert_eq!(state.ui.tab, Tab::Scan);
        assert_eq!(handle_global(key(KeyCode::Char('5')), &mut state), Some(false));
        assert_eq!(state.ui.tab, Tab::Help);
        assert_eq!(handle_global(key(KeyCode::BackTab), &mut state), Some(false));
        assert_eq!(state.ui.tab, Tab::DeadZones);
        assert_eq!(handle_global(key(KeyCode::Char('q')), &mut state), Some(true));
        assert_eq!(handle_global(key(KeyCode::Char('x')), &mut state), None);
    }

    #[test]
    fn help_enter_toggles_faq_and_opens_dialogs() {
        let mut state = test_state();
        state.ui.tab = Tab::Help;

        handle_help(key(KeyCode::Enter), &mut state);
        assert_eq!(
            state.ui.dialog,
            Some(PendingAction::Quick(QuickAction::RestartRouter))
        );
        handle_dialog(key(KeyCode::Char('y')), &mut state);
        let popup = state.ui.info_popup.take().unwrap();
        assert_eq!(popup.title, "Restart Router");
        assert!(popup.lines[0].starts_with("Unplug your router"));

        state.help.l_state.select(Some(3));
        handle_help(key(KeyCode::Enter), &mut state);
        assert!(state.ui.dialog.is_none());
        assert_eq!(state.ui.info_popup.as_ref().unwrap().title, "Diagnostics");

        state.help.l_state.select(Some(9));
        handle_help(key(KeyCode::Enter), &mut state);
        assert_eq!(state.help.expanded_faq, Some(1));
        handle_help(key(KeyCode::Enter), &mut state);
        assert_eq!(state.help.expanded_faq, None);
    }

    #[test]
    fn channel_guide_names_the_recommendation() {
        let mut state = test_state();
        handle_scan(key(KeyCode::Char('c')), &mut state);
        let popup = state.ui.info_popup.unwrap();
        assert_eq!(popup.title, "How to Change to Channel 1");
        assert_eq!(popup.lines.len(), doctor::CHANNEL_CHANGE_GUIDE.len());
    }

    #[test]
    fn saving_without_results_shows_error() {
        let mut state = test_state();
        handle_dead_zones(key(KeyCode::Char('s')), &mut state);
        assert!(state.ui.error_message.is_some());
        assert!(state.survey.last_saved.is_none());
    }

    #[test]
    fn saving_results_writes_a_report() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut state = test_state();
        state.survey.report_dir = dir.path().to_path_buf();
        state.survey.results = doctor::survey_readings();

        handle_dead_zones(key(KeyCode::Char('s')), &mut state);
        let saved = state.survey.last_saved.clone().unwrap();
        assert!(saved.exists());
        assert!(state.ui.error_message.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn home_scan_cannot_be_restarted_while_running() {
        let mut state = test_state();
        handle_home(key(KeyCode::Char('s')), &mut state);
        assert!(state.home.is_scanning());

        tokio::time::sleep(Duration::from_millis(1000)).await;
        handle_home(key(KeyCode::Char('s')), &mut state);

        // A restarted scan would only report one second later
        tokio::time::sleep(Duration::from_millis(config::HOME_SCAN_MS - 1000 + 10)).await;
        let rx = state.home.scan_rx.as_mut().unwrap();
        assert_eq!(rx.try_recv().unwrap(), doctor::nearby_networks());
    }

    #[tokio::test(start_paused = true)]
    async fn survey_toggle_starts_and_stops() {
        let mut state = test_state();
        state.survey.results = doctor::survey_readings();

        handle_dead_zones(key(KeyCode::Enter), &mut state);
        assert!(state.survey.is_scanning());
        assert!(state.survey.results.is_empty());

        handle_dead_zones(key(KeyCode::Enter), &mut state);
        assert!(!state.survey.is_scanning());
    }
}
