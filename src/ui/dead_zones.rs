use super::widgets::{card, signal_meter, spinner};
use crate::app::AppState;
use crate::doctor::{COVERAGE_TIPS, CoverageQuality, PLACEMENT_GUIDE, SignalTone};
use crate::theme;
use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

const SIGNAL_METER_WIDTH: usize = 40;
const RESULT_METER_WIDTH: usize = 20;

fn coverage_color(quality: CoverageQuality) -> Color {
    match quality {
        CoverageQuality::Excellent => theme::SUCCESS,
        CoverageQuality::Good => theme::WARNING,
        CoverageQuality::Poor | CoverageQuality::DeadZone => theme::DANGER,
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &mut AppState, is_dimmed: bool) {
    let layout = Layout::vertical([
        Constraint::Length(6), // Current signal
        Constraint::Min(5),    // Results
        Constraint::Length(7), // Tips + placement
    ])
    .split(area);

    render_current_signal(frame, layout[0], state, is_dimmed);
    render_results(frame, layout[1], state, is_dimmed);

    let bottom =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).split(layout[2]);

    let tips: Vec<Line> = COVERAGE_TIPS
        .iter()
        .map(|tip| Line::from(format!("• {tip}")))
        .collect();
    frame.render_widget(
        Paragraph::new(tips)
            .style(Style::default().fg(theme::GRAY))
            .wrap(Wrap { trim: true })
            .block(card("Improve Coverage", theme::SECONDARY, is_dimmed)),
        bottom[0],
    );

    let icons = state.ui.icons;
    let placement: Vec<Line> = PLACEMENT_GUIDE
        .iter()
        .map(|(spot, good)| {
            let color = if *good { theme::SUCCESS } else { theme::DANGER };
            Line::from(vec![
                Span::styled(icons.check(*good), Style::default().fg(color)),
                Span::raw(*spot),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(placement).block(card("Router Placement", theme::PRIMARY, is_dimmed)),
        bottom[1],
    );
}

fn render_current_signal(frame: &mut Frame, area: Rect, state: &AppState, is_dimmed: bool) {
    let signal = state.survey.current_signal;
    let quality = CoverageQuality::of(signal);

    let status = if state.survey.is_scanning() {
        Line::styled(
            format!(
                "{} Walk around your home... press {} to stop",
                spinner(state.ui.loading_frame),
                state.ui.icons.enter()
            ),
            Style::default().fg(theme::WARNING),
        )
    } else {
        Line::styled(
            format!("Press {} to start a survey", state.ui.icons.enter()),
            Style::default().fg(theme::GRAY),
        )
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{signal}%"),
                Style::default()
                    .fg(theme::tone(SignalTone::of(signal)))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(quality.label(), Style::default().fg(coverage_color(quality))),
        ]),
        Line::from(signal_meter(signal, SIGNAL_METER_WIDTH, state.ui.icons)),
        Line::default(),
        status,
    ];

    frame.render_widget(
        Paragraph::new(lines).block(card("Current Signal", theme::PRIMARY, is_dimmed)),
        area,
    );
}

fn render_results(frame: &mut Frame, area: Rect, state: &AppState, is_dimmed: bool) {
    let icons = state.ui.icons;
    let results = &state.survey.results;

    let lines: Vec<Line> = if results.is_empty() {
        vec![Line::styled(
            "No survey results yet",
            Style::default().fg(theme::GRAY),
        )]
    } else {
        results
            .iter()
            .map(|r| {
                let quality = CoverageQuality::of(r.signal);
                let mut spans = vec![Span::raw(format!("{:<14}", r.location))];
                spans.extend(signal_meter(r.signal, RESULT_METER_WIDTH, icons));
                spans.push(Span::raw(format!(" {:>3}%  ", r.signal)));
                let mut label = Style::default().fg(coverage_color(quality));
                if quality == CoverageQuality::DeadZone {
                    label = label.add_modifier(Modifier::BOLD);
                }
                spans.push(Span::styled(format!("{:<10}", quality.label()), label));
                spans.push(Span::styled(
                    r.timestamp.as_str(),
                    Style::default().fg(theme::DIMMED),
                ));
                Line::from(spans)
            })
            .collect()
    };

    let title = match &state.survey.last_saved {
        Some(_) => "Survey Results (saved)",
        None => "Survey Results",
    };

    frame.render_widget(
        Paragraph::new(lines).block(card(title, theme::SUCCESS, is_dimmed)),
        area,
    );
}
