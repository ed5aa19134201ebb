use super::widgets::{card, detail, meter};
use crate::app::AppState;
use crate::doctor::SECURITY_TIPS;
use crate::theme;
use ratatui::{
    prelude::*,
    widgets::{List, ListItem, Paragraph, Wrap},
};

const SHARE_METER_WIDTH: usize = 12;

pub fn render(frame: &mut Frame, area: Rect, state: &mut AppState, is_dimmed: bool) {
    let unknown = state.devices.inventory.unknown_count();
    let alert_height = if unknown > 0 { 3 } else { 0 };

    let layout = Layout::vertical([
        Constraint::Length(3),            // Overview
        Constraint::Length(alert_height), // Security alert
        Constraint::Min(4),               // Device list
        Constraint::Length(4),            // Selected device
        Constraint::Length(5),            // Tips
    ])
    .split(area);

    render_overview(frame, layout[0], state, is_dimmed);

    if unknown > 0 {
        let alert = Paragraph::new(Line::styled(
            format!(
                "{}{unknown} unknown device(s) found. Block any you don't recognise.",
                state.ui.icons.warning()
            ),
            Style::default().fg(theme::DANGER),
        ))
        .block(card("Security Alert", theme::DANGER, is_dimmed));
        frame.render_widget(alert, layout[1]);
    }

    render_device_list(frame, layout[2], state, is_dimmed);
    render_selected(frame, layout[3], state, is_dimmed);

    let tips: Vec<Line> = SECURITY_TIPS
        .iter()
        .map(|tip| Line::from(format!("• {tip}")))
        .collect();
    frame.render_widget(
        Paragraph::new(tips)
            .style(Style::default().fg(theme::GRAY))
            .wrap(Wrap { trim: true })
            .block(card("Security Tips", theme::SECONDARY, is_dimmed)),
        layout[4],
    );
}

fn render_overview(frame: &mut Frame, area: Rect, state: &AppState, is_dimmed: bool) {
    let inventory = &state.devices.inventory;
    let value = Style::default()
        .fg(theme::FOREGROUND)
        .add_modifier(Modifier::BOLD);
    let label = Style::default().fg(theme::GRAY);

    let unknown_style = if inventory.unknown_count() > 0 {
        Style::default()
            .fg(theme::DANGER)
            .add_modifier(Modifier::BOLD)
    } else {
        value
    };

    let line = Line::from(vec![
        Span::styled(inventory.len().to_string(), value),
        Span::styled(" connected   ", label),
        Span::styled(inventory.unknown_count().to_string(), unknown_style),
        Span::styled(" unknown   ", label),
        Span::styled(format!("{:.1}", inventory.total_bandwidth()), value),
        Span::styled(" Mbps total", label),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(
        Paragraph::new(line).block(card("Network Overview", theme::PRIMARY, is_dimmed)),
        area,
    );
}

fn render_device_list(frame: &mut Frame, area: Rect, state: &mut AppState, is_dimmed: bool) {
    let icons = state.ui.icons;
    let inventory = &state.devices.inventory;

    let list_items: Vec<ListItem> = inventory
        .devices()
        .iter()
        .map(|d| {
            let name_style = if d.is_unknown {
                Style::default().fg(theme::DANGER)
            } else {
                Style::default()
            };

            let mut spans = vec![
                Span::styled(icons.device(d.device_type), name_style),
                Span::styled(format!("{:<18}", d.name), name_style),
                Span::styled(
                    format!("{:<15} ", d.ip_address),
                    Style::default().fg(theme::GRAY),
                ),
            ];
            spans.extend(meter(
                inventory.bandwidth_share(d),
                SHARE_METER_WIDTH,
                theme::PRIMARY,
                icons,
            ));
            spans.push(Span::raw(format!(" {:>5.1} Mbps", d.bandwidth_usage)));
            if d.is_unknown {
                spans.push(Span::styled(
                    " Unknown",
                    Style::default()
                        .fg(theme::DANGER)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = if inventory.is_empty() {
        List::new([ListItem::new(Line::styled(
            "No devices connected",
            Style::default().fg(theme::GRAY),
        ))])
    } else {
        List::new(list_items)
    }
    .block(card("Connected Devices", theme::PRIMARY, is_dimmed))
    .highlight_symbol(icons.highlight())
    .highlight_style(
        Style::default()
            .add_modifier(Modifier::BOLD)
            .bg(if is_dimmed {
                theme::BACKGROUND
            } else {
                theme::SELECTION_BG
            }),
    );

    frame.render_stateful_widget(list, area, &mut state.devices.l_state);
}

fn render_selected(frame: &mut Frame, area: Rect, state: &AppState, is_dimmed: bool) {
    let selected = state
        .devices
        .l_state
        .selected()
        .and_then(|i| state.devices.inventory.get(i));

    let lines = match selected {
        Some(device) => vec![
            Line::from(vec![
                Span::styled("Type: ", Style::default().fg(theme::GRAY)),
                Span::raw(device.device_type.label()),
                Span::styled("   MAC: ", Style::default().fg(theme::GRAY)),
                Span::raw(device.mac_address.as_str()),
            ]),
            detail("Last seen", device.last_seen.as_str()),
        ],
        None => vec![Line::styled(
            "Nothing selected",
            Style::default().fg(theme::GRAY),
        )],
    };

    frame.render_widget(
        Paragraph::new(lines).block(card("Details", theme::SECONDARY, is_dimmed)),
        area,
    );
}
