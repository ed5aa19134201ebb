use super::widgets::{card, signal_bar_spans, spinner};
use crate::app::AppState;
use crate::doctor::{ChannelLoad, Congestion};
use crate::theme;
use ratatui::{
    prelude::*,
    widgets::{
        Bar, BarChart, BarGroup, List, ListItem, Paragraph, Scrollbar, ScrollbarOrientation,
        ScrollbarState,
    },
};

pub fn render(frame: &mut Frame, area: Rect, state: &mut AppState, is_dimmed: bool) {
    let layout = Layout::vertical([
        Constraint::Length(4),  // Recommendation
        Constraint::Min(6),     // Network list
        Constraint::Length(10), // Channel usage
    ])
    .split(area);

    let recommended = state.scan.recommended_channel();
    let icons = state.ui.icons;

    let recommendation = vec![
        Line::from(vec![
            Span::styled(
                format!("{} ", icons.recommended()),
                Style::default().fg(theme::SUCCESS),
            ),
            Span::raw("Consider switching to channel "),
            Span::styled(
                recommended.to_string(),
                Style::default()
                    .fg(theme::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" for less interference"),
        ]),
        Line::styled(
            "Press c for a step-by-step guide",
            Style::default().fg(theme::GRAY),
        ),
    ];
    frame.render_widget(
        Paragraph::new(recommendation).block(card(
            "Channel Recommendation",
            theme::SUCCESS,
            is_dimmed,
        )),
        layout[0],
    );

    render_networks(frame, layout[1], state, is_dimmed);
    render_channel_usage(frame, layout[2], &state.scan.channel_usage(), is_dimmed);
}

fn render_networks(frame: &mut Frame, area: Rect, state: &mut AppState, is_dimmed: bool) {
    let icons = state.ui.icons;

    let list_items: Vec<ListItem> = state
        .scan
        .networks
        .iter()
        .map(|n| {
            let name_style = if n.is_connected {
                Style::default()
                    .fg(theme::SUCCESS)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let mut spans = vec![
                Span::raw(icons.security(&n.security)),
                Span::styled(format!("{:<20}", n.ssid), name_style),
            ];
            spans.extend(signal_bar_spans(n.signal_strength, icons));
            spans.push(Span::styled(
                format!(
                    " {:>3}%  Ch {:<3} {:<7} {:<5}",
                    n.signal_strength,
                    n.channel,
                    n.band.to_string(),
                    n.security
                ),
                Style::default().fg(theme::GRAY),
            ));
            if n.is_connected {
                spans.push(Span::styled(
                    format!(" {} Connected", icons.connected()),
                    Style::default().fg(theme::SUCCESS),
                ));
            }
            if n.is_recommended {
                spans.push(Span::styled(
                    format!(" {} Recommended", icons.recommended()),
                    Style::default().fg(theme::PRIMARY),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let title = if state.scan.is_refreshing() {
        format!("Nearby Networks {}", spinner(state.ui.loading_frame))
    } else {
        format!("Nearby Networks ({})", state.scan.networks.len())
    };

    let list = List::new(list_items)
        .block(card(&title, theme::PRIMARY, is_dimmed))
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

    frame.render_stateful_widget(list, area, &mut state.scan.l_state);

    let viewport_height = area.height.saturating_sub(2) as usize;
    let content_len = state.scan.networks.len();

    if content_len > viewport_height {
        let mut scroll_state = ScrollbarState::new(content_len)
            .position(state.scan.l_state.selected().unwrap_or(0))
            .viewport_content_length(viewport_height);

        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None)
            .style(Style::default().fg(theme::PRIMARY));

        frame.render_stateful_widget(
            scrollbar,
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scroll_state,
        );
    }
}

fn render_channel_usage(frame: &mut Frame, area: Rect, usage: &[ChannelLoad], is_dimmed: bool) {
    let block = card("Channel Usage (2.4GHz)", theme::SECONDARY, is_dimmed);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(inner);

    let bars: Vec<Bar> = usage
        .iter()
        .map(|load| {
            let color = if load.is_recommended {
                theme::SUCCESS
            } else {
                theme::congestion(load.congestion)
            };
            Bar::default()
                .value(load.networks as u64)
                .label(Line::from(load.channel.to_string()))
                .text_value(load.networks.to_string())
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(theme::BACKGROUND).bg(color))
        })
        .collect();

    // A lone network should not fill the whole chart
    let peak = usage.iter().map(|l| l.networks as u64).max().unwrap_or(0).max(3);
    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(4)
        .bar_gap(2)
        .max(peak);
    frame.render_widget(chart, layout[0]);

    let swatch = |color: Color, label: &'static str| {
        [
            Span::styled("■ ", Style::default().fg(color)),
            Span::styled(label, Style::default().fg(theme::GRAY)),
        ]
    };
    let legend: Vec<Span> = [
        swatch(theme::SUCCESS, "Recommended   "),
        swatch(theme::congestion(Congestion::Free), "Free   "),
        swatch(theme::congestion(Congestion::Moderate), "Moderate   "),
        swatch(theme::congestion(Congestion::Congested), "Congested"),
    ]
    .into_iter()
    .flatten()
    .collect();
    frame.render_widget(
        Paragraph::new(Line::from(legend)).alignment(Alignment::Center),
        layout[1],
    );
}
