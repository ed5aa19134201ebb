use crate::config::{self, IconSet};
use crate::doctor::{SignalTone, signal_bars};
use crate::theme;
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Padding},
};

/// Rounded card with a bold coloured title
pub fn card(title: &str, color: Color, dimmed: bool) -> Block<'_> {
    let color = if dimmed { theme::DIMMED } else { color };
    Block::default()
        .title(format!(" {title} "))
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .padding(Padding::new(1, 1, 0, 0))
}

/// Four-step signal indicator, e.g. `▂▄▆█`
pub fn signal_bar_spans(strength: u8, icons: IconSet) -> Vec<Span<'static>> {
    let glyphs: [&str; 4] = match icons {
        IconSet::Nerd => ["▂", "▄", "▆", "█"],
        IconSet::Ascii => ["_", "=", "#", "#"],
    };
    signal_bars(strength)
        .iter()
        .zip(glyphs)
        .map(|(bar, glyph)| match bar {
            Some(tone) => Span::styled(glyph, Style::default().fg(theme::tone(*tone))),
            None => Span::styled(glyph, Style::default().fg(theme::DIMMED)),
        })
        .collect()
}

/// Horizontal meter filled to `fraction` (0.0..=1.0) of `width` cells
pub fn meter(fraction: f64, width: usize, color: Color, icons: IconSet) -> Vec<Span<'static>> {
    let (full, empty) = icons.bar();
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    vec![
        Span::styled(full.repeat(filled), Style::default().fg(color)),
        Span::styled(empty.repeat(width - filled), Style::default().fg(theme::DIMMED)),
    ]
}

pub fn signal_meter(strength: u8, width: usize, icons: IconSet) -> Vec<Span<'static>> {
    let strength = strength.min(100);
    meter(
        f64::from(strength) / 100.0,
        width,
        theme::tone(SignalTone::of(strength)),
        icons,
    )
}

pub fn spinner(frame: usize) -> &'static str {
    config::LOADING_CHARS[frame % config::LOADING_CHARS.len()]
}

/// `label: value` pair in the details style
pub fn detail<'a>(label: &'a str, value: impl Into<Span<'a>>) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(theme::GRAY)),
        value.into(),
    ])
}

/// A key hint for the help bar: `key` bright, `action` dimmed
pub fn hint<'a>(key: &'a str, action: &'a str, last: bool) -> [Span<'a>; 2] {
    let action = if last {
        format!(" {action}")
    } else {
        format!(" {action} • ")
    };
    [
        Span::styled(key, Style::default().fg(theme::FOREGROUND)),
        Span::styled(action, Style::default().fg(theme::GRAY)),
    ]
}

/// Rectangle of the given size centered in `area`
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn meter_fills_proportionally() {
        let spans = meter(0.5, 10, theme::PRIMARY, IconSet::Ascii);
        assert_eq!(text(&spans), "#####.....");
        assert_eq!(text(&meter(2.0, 4, theme::PRIMARY, IconSet::Ascii)), "####");
        assert_eq!(text(&meter(-1.0, 4, theme::PRIMARY, IconSet::Ascii)), "....");
    }

    #[test]
    fn bars_use_dimmed_color_when_unlit() {
        let spans = signal_bar_spans(30, IconSet::Nerd);
        assert_eq!(spans.len(), 4);
        assert_eq!(spans[0].style.fg, Some(theme::DANGER));
        assert_eq!(spans[1].style.fg, Some(theme::DIMMED));
    }

    #[test]
    fn centered_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered(area, 10, 4), Rect::new(5, 3, 10, 4));
        assert_eq!(centered(area, 40, 40), area);
    }
}
