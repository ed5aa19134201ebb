use super::widgets::{card, detail, signal_bar_spans, spinner};
use crate::app::AppState;
use crate::doctor::LinkQuality;
use crate::theme;
use chrono::Local;
use ratatui::{prelude::*, widgets::Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &mut AppState, is_dimmed: bool) {
    let layout = Layout::vertical([
        Constraint::Length(7), // Current network
        Constraint::Length(7), // Speed + quick actions
        Constraint::Min(3),    // Alerts
    ])
    .split(area);

    render_network(frame, layout[0], state, is_dimmed);

    let middle =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(layout[1]);
    render_speed(frame, middle[0], state, is_dimmed);
    render_quick_actions(frame, middle[1], state, is_dimmed);

    render_alerts(frame, layout[2], state, is_dimmed);
}

fn render_network(frame: &mut Frame, area: Rect, state: &AppState, is_dimmed: bool) {
    let icons = state.ui.icons;
    let network = &state.home.network;
    let quality = LinkQuality::of(network.signal_strength);

    let mut title_line = vec![
        Span::styled(
            format!("{}{}", icons.wifi(), network.ssid),
            Style::default()
                .fg(theme::FOREGROUND)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];
    if network.is_connected {
        title_line.push(Span::styled(
            format!("{} Connected", icons.connected()),
            Style::default().fg(theme::SUCCESS),
        ));
    }

    let mut signal = vec![Span::raw(format!("{}% ", network.signal_strength))];
    signal.extend(signal_bar_spans(network.signal_strength, icons));
    signal.push(Span::styled(
        format!("  {}", quality.label()),
        Style::default().fg(theme::tone(quality.tone())),
    ));

    let mut lines = vec![
        Line::from(title_line),
        Line::from(
            [Span::styled("Signal: ", Style::default().fg(theme::GRAY))]
                .into_iter()
                .chain(signal)
                .collect::<Vec<_>>(),
        ),
        detail(
            "Channel",
            format!("{} • {} • {}", network.channel, network.band, network.security),
        ),
    ];

    if state.home.is_refreshing() {
        lines.push(Line::styled(
            format!("{} Refreshing network status...", spinner(state.ui.loading_frame)),
            Style::default().fg(theme::WARNING),
        ));
    }

    frame.render_widget(
        Paragraph::new(lines).block(card("Current Network", theme::PRIMARY, is_dimmed)),
        area,
    );
}

fn render_speed(frame: &mut Frame, area: Rect, state: &AppState, is_dimmed: bool) {
    let speed = &state.home.speed;

    let lines = if state.home.is_testing_speed() {
        vec![
            Line::default(),
            Line::styled(
                format!("{} Testing speed...", spinner(state.ui.loading_frame)),
                Style::default().fg(theme::WARNING),
            ),
        ]
    } else {
        vec![
            detail(
                "Download",
                Span::styled(
                    format!("{:.1} Mbps", speed.download_mbps),
                    Style::default().fg(theme::SUCCESS),
                ),
            ),
            detail(
                "Upload",
                Span::styled(
                    format!("{:.1} Mbps", speed.upload_mbps),
                    Style::default().fg(theme::PRIMARY),
                ),
            ),
            detail("Ping", format!("{} ms", speed.ping_ms)),
            Line::styled(
                format!(
                    "Tested {}",
                    speed.timestamp.with_timezone(&Local).format("%H:%M:%S")
                ),
                Style::default().fg(theme::DIMMED),
            ),
        ]
    };

    frame.render_widget(
        Paragraph::new(lines).block(card("Internet Speed", theme::SUCCESS, is_dimmed)),
        area,
    );
}

fn render_quick_actions(frame: &mut Frame, area: Rect, state: &AppState, is_dimmed: bool) {
    let key = Style::default()
        .fg(theme::PRIMARY)
        .add_modifier(Modifier::BOLD);
    let busy = Style::default().fg(theme::WARNING);
    let frame_char = spinner(state.ui.loading_frame);

    let scan = if state.home.is_scanning() {
        Line::from(vec![
            Span::styled("s ", key),
            Span::styled(format!("{frame_char} Scanning..."), busy),
        ])
    } else {
        Line::from(vec![Span::styled("s ", key), Span::raw("Scan Network")])
    };

    let speed = if state.home.is_testing_speed() {
        Line::from(vec![
            Span::styled("t ", key),
            Span::styled(format!("{frame_char} Testing..."), busy),
        ])
    } else {
        Line::from(vec![Span::styled("t ", key), Span::raw("Speed Test")])
    };

    let lines = vec![
        scan,
        speed,
        Line::from(vec![Span::styled("d ", key), Span::raw("Find Dead Zones")]),
        Line::from(vec![Span::styled("r ", key), Span::raw("Refresh Status")]),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(card("Quick Actions", theme::SECONDARY, is_dimmed)),
        area,
    );
}

fn render_alerts(frame: &mut Frame, area: Rect, state: &AppState, is_dimmed: bool) {
    let icons = state.ui.icons;
    let unknown = state.devices.inventory.unknown_count();

    let lines = if unknown > 0 {
        vec![
            Line::styled(
                format!("{}Unknown device detected", icons.warning()),
                Style::default()
                    .fg(theme::WARNING)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                format!("{unknown} unrecognized device(s) connected to your network"),
                Style::default().fg(theme::GRAY),
            ),
        ]
    } else {
        vec![Line::styled(
            format!("{}All systems running normally", icons.check(true)),
            Style::default().fg(theme::SUCCESS),
        )]
    };

    frame.render_widget(
        Paragraph::new(lines).block(card("Status Alerts", theme::WARNING, is_dimmed)),
        area,
    );
}
