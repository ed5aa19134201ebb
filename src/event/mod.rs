//! Event handling module for wifi-doctor
//!
//! This module drains the simulation channels, handles keyboard input and
//! runs the main event loop.

mod handlers;

use crate::{
    app::{AppState, Tab},
    config,
    doctor::SurveyEvent,
    error::{DoctorError, DoctorResult},
    ui::render,
};
use color_eyre::eyre::Result;
use crossterm::event::{self, Event, KeyModifiers};
use handlers::{
    handle_dead_zones, handle_devices, handle_dialog, handle_global, handle_help, handle_home,
    handle_info_popup, handle_scan,
};
use ratatui::DefaultTerminal;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{Receiver, error::TryRecvError};
use tracing::{info, warn};

/// Take the result out of a one-shot simulation channel, if it has arrived
fn poll_once<T>(slot: &mut Option<Receiver<T>>, task: &'static str) -> Option<DoctorResult<T>> {
    let rx = slot.as_mut()?;
    match rx.try_recv() {
        Ok(value) => {
            *slot = None;
            Some(Ok(value))
        }
        Err(TryRecvError::Empty) => None,
        Err(TryRecvError::Disconnected) => {
            *slot = None;
            Some(Err(DoctorError::TaskFailed { task }))
        }
    }
}

fn report_failure(state: &mut AppState, err: DoctorError) {
    warn!(error = %err, "background task failed");
    state.ui.error_message = Some(err.to_string());
}

/// Apply whatever the background simulations have produced since the last frame
pub fn process_background(state: &mut AppState) {
    match poll_once(&mut state.home.refresh_rx, "Refresh") {
        Some(Ok(())) => state.ui.status_message = Some("Network status is up to date".to_string()),
        Some(Err(e)) => report_failure(state, e),
        None => {}
    }

    match poll_once(&mut state.home.scan_rx, "Network scan") {
        Some(Ok(networks)) => {
            state.ui.status_message = Some(format!(
                "Scan complete: {} networks nearby",
                networks.len()
            ));
            state.scan.networks = networks;
        }
        Some(Err(e)) => report_failure(state, e),
        None => {}
    }

    match poll_once(&mut state.home.speed_rx, "Speed test") {
        Some(Ok(result)) => state.home.speed = result,
        Some(Err(e)) => report_failure(state, e),
        None => {}
    }

    match poll_once(&mut state.scan.refresh_rx, "Network scan") {
        Some(Ok(networks)) => {
            // Try to preserve selection
            let selected_ssid = state
                .scan
                .l_state
                .selected()
                .and_then(|i| state.scan.networks.get(i))
                .map(|n| n.ssid.clone());

            state.scan.networks = networks;
            let pos = selected_ssid
                .and_then(|ssid| state.scan.networks.iter().position(|n| n.ssid == ssid))
                .unwrap_or(0);
            state.scan.l_state.select(Some(pos));
        }
        Some(Err(e)) => report_failure(state, e),
        None => {}
    }

    let mut finished = None;
    if let Some(handle) = &mut state.survey.handle {
        loop {
            match handle.events.try_recv() {
                Ok(SurveyEvent::Reading(signal)) => state.survey.current_signal = signal,
                Ok(SurveyEvent::Finished(results)) => {
                    finished = Some(Ok(results));
                    break;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    finished = Some(Err(DoctorError::TaskFailed {
                        task: "Dead-zone survey",
                    }));
                    break;
                }
            }
        }
    }
    match finished {
        Some(Ok(results)) => {
            state.survey.handle = None;
            state.survey.results = results;
        }
        Some(Err(e)) => {
            state.survey.handle = None;
            report_failure(state, e);
        }
        None => {}
    }
}

fn describe_key(key: &event::KeyEvent) -> String {
    let mut key_str = String::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        key_str.push_str("Ctrl+");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        key_str.push_str("Alt+");
    }
    if key.modifiers.contains(KeyModifiers::SHIFT) && !matches!(key.code, event::KeyCode::Char(_)) {
        key_str.push_str("Shift+");
    }

    let code_str = match key.code {
        event::KeyCode::Char(' ') => "Space".to_string(),
        event::KeyCode::Char(c) => c.to_string(),
        event::KeyCode::Enter => "Enter".to_string(),
        event::KeyCode::Backspace => "Backspace".to_string(),
        event::KeyCode::Left => "Left".to_string(),
        event::KeyCode::Right => "Right".to_string(),
        event::KeyCode::Up => "Up".to_string(),
        event::KeyCode::Down => "Down".to_string(),
        event::KeyCode::Tab => "Tab".to_string(),
        event::KeyCode::BackTab => "Tab".to_string(),
        event::KeyCode::Delete => "Delete".to_string(),
        event::KeyCode::Home => "Home".to_string(),
        event::KeyCode::End => "End".to_string(),
        event::KeyCode::Esc => "Esc".to_string(),
        event::KeyCode::F(n) => format!("F{}", n),
        _ => format!("{:?}", key.code),
    };
    key_str.push_str(&code_str);
    key_str
}

pub async fn run(mut terminal: DefaultTerminal, state: &mut AppState) -> Result<()> {
    info!("session started");

    loop {
        terminal.draw(|frame| render(frame, state))?;

        process_background(state);

        if event::poll(Duration::from_millis(config::EVENT_POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == event::KeyEventKind::Press {
                    if state.ui.show_key_logger {
                        state.ui.last_key_press = Some((describe_key(&key), Instant::now()));
                    }

                    // Clear error message on any key press
                    if state.ui.error_message.is_some() {
                        state.ui.error_message = None;
                    }

                    // Global shortcuts
                    if key.code == event::KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        break;
                    }

                    // Route to appropriate handler
                    let should_quit = if state.ui.dialog.is_some() {
                        handle_dialog(key, state)
                    } else if state.ui.info_popup.is_some() {
                        handle_info_popup(key, state)
                    } else if let Some(quit) = handle_global(key, state) {
                        quit
                    } else {
                        match state.ui.tab {
                            Tab::Home => handle_home(key, state),
                            Tab::Scan => handle_scan(key, state),
                            Tab::Devices => handle_devices(key, state),
                            Tab::DeadZones => handle_dead_zones(key, state),
                            Tab::Help => handle_help(key, state),
                        }
                    };

                    if should_quit {
                        break;
                    }
                }
            }
        } else if state.is_busy() {
            state.ui.loading_frame = (state.ui.loading_frame + 1) % config::LOADING_CHARS.len();
        }
    }

    info!("session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_state;
    use crate::doctor;

    #[tokio::test(start_paused = true)]
    async fn scan_refresh_lands_after_delay_and_keeps_selection() {
        let mut state = test_state();
        state.scan.l_state.select(Some(2));
        handlers::start_scan_refresh(&mut state);
        assert!(state.scan.is_refreshing());

        process_background(&mut state);
        assert!(state.scan.is_refreshing());

        tokio::time::sleep(Duration::from_millis(config::SCAN_REFRESH_MS + 10)).await;
        process_background(&mut state);
        assert!(!state.scan.is_refreshing());
        assert_eq!(state.scan.networks, doctor::nearby_networks());
        assert_eq!(state.scan.l_state.selected(), Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn speed_test_replaces_the_result() {
        let mut state = test_state();
        let before = state.home.speed.clone();
        handlers::start_speed_test(&mut state);

        tokio::time::sleep(Duration::from_millis(config::SPEED_TEST_MS + 10)).await;
        process_background(&mut state);
        assert!(!state.home.is_testing_speed());
        assert!(state.home.speed.timestamp >= before.timestamp);
        assert!(state.home.speed.ping_ms >= 10 && state.home.speed.ping_ms <= 20);
    }

    #[tokio::test(start_paused = true)]
    async fn repeated_speed_tests_stay_near_the_sample() {
        let mut state = test_state();
        let sample = doctor::speed_test_result();
        for _ in 0..100 {
            handlers::start_speed_test(&mut state);
            tokio::time::sleep(Duration::from_millis(config::SPEED_TEST_MS + 10)).await;
            process_background(&mut state);
            assert!(!state.home.is_testing_speed());

            let speed = &state.home.speed;
            // Results are rounded to one decimal
            assert!(
                speed.download_mbps >= sample.download_mbps * 0.9 - 0.05
                    && speed.download_mbps <= sample.download_mbps * 1.1 + 0.05,
                "{speed:?}"
            );
            assert!(
                speed.upload_mbps >= sample.upload_mbps * 0.9 - 0.05
                    && speed.upload_mbps <= sample.upload_mbps * 1.1 + 0.05,
                "{speed:?}"
            );
            assert!(speed.ping_ms >= 10 && speed.ping_ms <= 20, "{speed:?}");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn survey_updates_signal_then_publishes_results() {
        let mut state = test_state();
        handlers::toggle_survey(&mut state);

        tokio::time::sleep(Duration::from_millis(config::SURVEY_TICK_MS + 10)).await;
        process_background(&mut state);
        assert!(state.survey.is_scanning());
        assert!(state.survey.current_signal < 100);

        tokio::time::sleep(Duration::from_millis(config::SURVEY_DURATION_MS)).await;
        process_background(&mut state);
        assert!(!state.survey.is_scanning());
        assert_eq!(state.survey.results, doctor::survey_readings());
    }

    #[tokio::test(start_paused = true)]
    async fn stopped_survey_leaves_results_empty() {
        let mut state = test_state();
        handlers::toggle_survey(&mut state);
        tokio::time::sleep(Duration::from_millis(3_000)).await;
        handlers::toggle_survey(&mut state);

        tokio::time::sleep(Duration::from_millis(config::SURVEY_DURATION_MS)).await;
        process_background(&mut state);
        assert!(state.survey.results.is_empty());
        assert!(state.ui.error_message.is_none());
    }

    #[test]
    fn dropped_sender_is_reported_as_failure() {
        let mut state = test_state();
        let (tx, rx) = tokio::sync::mpsc::channel::<()>(1);
        drop(tx);
        state.home.refresh_rx = Some(rx);

        process_background(&mut state);
        assert!(state.home.refresh_rx.is_none());
        assert_eq!(
            state.ui.error_message.as_deref(),
            Some("Refresh stopped before reporting a result")
        );
    }

    #[test]
    fn key_logger_labels() {
        let key = event::KeyEvent::new(event::KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(describe_key(&key), "Ctrl+c");
        let key = event::KeyEvent::new(event::KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(describe_key(&key), "Space");
    }
}
