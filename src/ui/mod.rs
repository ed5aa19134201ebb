//! Rendering for wifi-doctor
//!
//! `render` draws the centered main window with the tab bar and help bar,
//! delegates the body to the active tab and paints overlays (dialog, info
//! popup, error banner, key logger) on top.

mod dead_zones;
mod devices;
mod help;
mod home;
mod scan;
mod widgets;

use crate::app::{AppState, InfoPopup, PendingAction, Tab};
use crate::config;
use crate::theme;
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Tabs, Wrap},
};
use std::time::Duration;
use widgets::{centered, hint};

/// Grow `target` by one when its parity differs from `available`, so the
/// window sits exactly in the middle
fn match_parity(target: u16, available: u16) -> u16 {
    if target % 2 == available % 2 {
        target
    } else {
        target + 1
    }
}

pub fn render(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    let is_dimmed = state.ui.dialog.is_some() || state.ui.info_popup.is_some();

    // Set background color for the entire screen
    frame.render_widget(
        Block::default().style(Style::default().bg(theme::BACKGROUND).fg(theme::FOREGROUND)),
        area,
    );

    let height = match_parity(config::MAIN_WINDOW_HEIGHT, area.height);
    let width = match_parity(config::MAIN_WINDOW_WIDTH, area.width);

    // Center the main window
    let vertical_layout = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .split(area);

    let horizontal_layout = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .split(vertical_layout[1]);

    let main_area = horizontal_layout[1];

    let main_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::DIMMED))
        .title(format!(" WI-FI DOCTOR v{} ", env!("CARGO_PKG_VERSION")))
        .title_alignment(Alignment::Center)
        .title_style(
            Style::default()
                .fg(theme::PRIMARY)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(main_block, main_area);

    let inner_area = main_area.inner(Margin {
        vertical: 1,
        horizontal: 2,
    });

    let content_layout = Layout::vertical([
        Constraint::Length(1), // Tab bar
        Constraint::Min(10),   // Active tab
        Constraint::Length(1), // Status line
        Constraint::Length(2), // Help bar
    ])
    .split(inner_area);

    render_tab_bar(frame, content_layout[0], state.ui.tab, is_dimmed);

    let body = content_layout[1];
    match state.ui.tab {
        Tab::Home => home::render(frame, body, state, is_dimmed),
        Tab::Scan => scan::render(frame, body, state, is_dimmed),
        Tab::Devices => devices::render(frame, body, state, is_dimmed),
        Tab::DeadZones => dead_zones::render(frame, body, state, is_dimmed),
        Tab::Help => help::render(frame, body, state, is_dimmed),
    }

    if let Some(status) = &state.ui.status_message {
        let status_line = Paragraph::new(status.as_str())
            .style(Style::default().fg(theme::GRAY))
            .alignment(Alignment::Center);
        frame.render_widget(status_line, content_layout[2]);
    }

    render_help_bar(frame, content_layout[3], state);

    if let Some(action) = &state.ui.dialog {
        render_dialog(frame, main_area, action, state.ui.icons.enter());
    } else if let Some(popup) = &state.ui.info_popup {
        render_info_popup(frame, main_area, popup);
    }

    if let Some(error) = &state.ui.error_message {
        let error_area = Rect::new(
            area.x + 2,
            area.height.saturating_sub(4),
            area.width.saturating_sub(4),
            3.min(area.height),
        );
        let error_paragraph = Paragraph::new(error.as_str())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(theme::DANGER))
                    .title(" ERROR "),
            )
            .style(Style::default().fg(theme::DANGER).bg(theme::BACKGROUND))
            .wrap(Wrap { trim: true });
        frame.render_widget(Clear, error_area);
        frame.render_widget(error_paragraph, error_area);
    }

    if state.ui.show_key_logger
        && let Some((key, time)) = &state.ui.last_key_press
        && time.elapsed() < Duration::from_secs(config::KEY_LOGGER_VISIBLE_SECS)
    {
        let key_text = format!(" {} ", key);
        let width = key_text.len() as u16 + 2;

        // Position right below the bottom right of the main UI
        let key_area = Rect::new(
            (main_area.x + main_area.width).saturating_sub(width),
            main_area.y + main_area.height,
            width,
            3,
        )
        .intersection(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::SECONDARY))
            .style(Style::default().bg(theme::BACKGROUND));

        let paragraph = Paragraph::new(key_text)
            .block(block)
            .style(
                Style::default()
                    .fg(theme::SECONDARY)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);

        frame.render_widget(Clear, key_area);
        frame.render_widget(paragraph, key_area);
    }
}

fn render_tab_bar(frame: &mut Frame, area: Rect, active: Tab, is_dimmed: bool) {
    let titles = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| format!("{} {}", i + 1, tab.title()));

    let highlight = if is_dimmed { theme::DIMMED } else { theme::PRIMARY };

    let tabs = Tabs::new(titles)
        .select(active.index())
        .style(Style::default().fg(theme::GRAY))
        .highlight_style(
            Style::default()
                .fg(highlight)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(Span::styled("│", Style::default().fg(theme::DIMMED)));

    frame.render_widget(tabs, area);
}

fn render_help_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let enter = state.ui.icons.enter();

    let first: Vec<Span> = if state.ui.dialog.is_some() {
        [hint(enter, "confirm", false), hint("esc", "cancel", true)]
            .into_iter()
            .flatten()
            .collect()
    } else if state.ui.info_popup.is_some() {
        hint("esc", "close", true).into_iter().collect()
    } else {
        let hints: Vec<[Span; 2]> = match state.ui.tab {
            Tab::Home => vec![
                hint("s", "scan", false),
                hint("t", "speed test", false),
                hint("d", "dead zones", false),
                hint("r", "refresh", true),
            ],
            Tab::Scan => vec![
                hint("j/k", "nav", false),
                hint("r", "rescan", false),
                hint("c", "channel guide", true),
            ],
            Tab::Devices => vec![
                hint("j/k", "nav", false),
                hint("b", "block", false),
                hint("m", "mark known", true),
            ],
            Tab::DeadZones => vec![
                hint(enter, "start / stop survey", false),
                hint("s", "save results", true),
            ],
            Tab::Help => vec![hint("j/k", "nav", false), hint(enter, "open / expand", true)],
        };
        hints.into_iter().flatten().collect()
    };

    let second: Vec<Span> = [
        hint("tab / 1-5", "switch", false),
        hint("esc", "clear", false),
        hint("q", "quit", true),
    ]
    .into_iter()
    .flatten()
    .collect();

    let help_paragraph = Paragraph::new(vec![Line::from(first), Line::from(second)])
        .style(Style::default().fg(theme::DIMMED))
        .alignment(Alignment::Center);

    frame.render_widget(help_paragraph, area);
}

fn render_dialog(frame: &mut Frame, main_area: Rect, action: &PendingAction, enter: &str) {
    let popup_area = centered(main_area, 56, 8);

    let color = if action.is_destructive() {
        theme::DANGER
    } else {
        theme::PRIMARY
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .title(format!(" {} ", action.title()))
        .title_alignment(Alignment::Center)
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .padding(Padding::new(2, 2, 1, 0))
        .style(Style::default().bg(theme::BACKGROUND));

    let buttons = Line::from(vec![
        Span::styled(
            format!(" {enter} {} ", action.confirm_label()),
            Style::default().bg(color).fg(theme::BACKGROUND),
        ),
        Span::raw("   "),
        Span::styled(" esc Cancel ", Style::default().fg(theme::GRAY)),
    ])
    .alignment(Alignment::Center);

    let text = vec![
        Line::from(action.message()),
        Line::default(),
        Line::default(),
        buttons,
    ];

    let paragraph = Paragraph::new(text)
        .block(block)
        .style(Style::default().fg(theme::FOREGROUND))
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(paragraph, popup_area);
}

fn render_info_popup(frame: &mut Frame, main_area: Rect, popup: &InfoPopup) {
    let width: u16 = 66;
    let text_width = usize::from(width - 6).max(1);
    // Rough wrapped height, one extra row per overflow
    let rows: usize = popup
        .lines
        .iter()
        .map(|l| l.chars().count().div_ceil(text_width).max(1))
        .sum();
    let popup_area = centered(main_area, width, rows as u16 + 4);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::SECONDARY))
        .title(format!(" {} ", popup.title))
        .title_alignment(Alignment::Center)
        .title_style(
            Style::default()
                .fg(theme::SECONDARY)
                .add_modifier(Modifier::BOLD),
        )
        .padding(Padding::new(2, 2, 1, 1))
        .style(Style::default().bg(theme::BACKGROUND));

    let lines: Vec<Line> = popup.lines.iter().map(|l| Line::from(l.as_str())).collect();
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().fg(theme::FOREGROUND))
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(paragraph, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{QuickAction, test_state};
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(state: &mut AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn every_tab_renders() {
        let mut state = test_state();
        let expected = [
            (Tab::Home, "HomeNetwork_5G"),
            (Tab::Scan, "channel 1"),
            (Tab::Devices, "Unknown Device"),
            (Tab::DeadZones, "Current Signal"),
            (Tab::Help, "Restart Router"),
        ];
        for (tab, needle) in expected {
            state.ui.tab = tab;
            let screen = draw(&mut state, 100, 40);
            assert!(screen.contains(needle), "{tab:?} is missing {needle:?}");
        }
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut state = test_state();
        state.ui.error_message = Some("boom".to_string());
        state.ui.show_key_logger = true;
        state.ui.last_key_press = Some(("Ctrl+c".to_string(), std::time::Instant::now()));
        for tab in Tab::ALL {
            state.ui.tab = tab;
            draw(&mut state, 20, 6);
        }
    }

    #[test]
    fn dialog_and_popup_are_drawn_on_top() {
        let mut state = test_state();
        state.ui.dialog = Some(PendingAction::Quick(QuickAction::UpdateFirmware));
        let screen = draw(&mut state, 100, 40);
        assert!(screen.contains("firmware updates"));
        assert!(screen.contains("Continue"));

        state.ui.dialog = None;
        state.ui.info_popup = Some(InfoPopup {
            title: "Diagnostics".to_string(),
            lines: vec!["Router firmware is current".to_string()],
        });
        let screen = draw(&mut state, 100, 40);
        assert!(screen.contains("Router firmware is current"));
    }

    #[test]
    fn window_parity_follows_terminal() {
        assert_eq!(match_parity(34, 40), 34);
        assert_eq!(match_parity(34, 41), 35);
        assert_eq!(match_parity(85, 100), 86);
    }
}
