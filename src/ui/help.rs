use super::widgets::card;
use crate::app::{AppState, HelpItem, help_items};
use crate::doctor::{COMMON_ISSUES, FAQS, TROUBLESHOOTING_STEPS};
use crate::theme;
use ratatui::{
    prelude::*,
    widgets::{List, ListItem, Paragraph, Wrap},
};

/// Greedy word wrap for text inside list items, which don't wrap on their own
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

pub fn render(frame: &mut Frame, area: Rect, state: &mut AppState, is_dimmed: bool) {
    let columns =
        Layout::horizontal([Constraint::Percentage(58), Constraint::Percentage(42)]).split(area);

    render_items(frame, columns[0], state, is_dimmed);

    let side = Layout::vertical([Constraint::Min(8), Constraint::Length(5)]).split(columns[1]);

    let mut issues = Vec::new();
    for (title, advice) in COMMON_ISSUES {
        issues.push(Line::styled(
            title,
            Style::default()
                .fg(theme::FOREGROUND)
                .add_modifier(Modifier::BOLD),
        ));
        issues.push(Line::styled(advice, Style::default().fg(theme::GRAY)));
    }
    frame.render_widget(
        Paragraph::new(issues)
            .wrap(Wrap { trim: true })
            .block(card("Common Issues", theme::WARNING, is_dimmed)),
        side[0],
    );

    frame.render_widget(
        Paragraph::new("Contact your ISP or your router manufacturer's support line.")
            .style(Style::default().fg(theme::GRAY))
            .wrap(Wrap { trim: true })
            .block(card("Still Having Issues?", theme::DANGER, is_dimmed)),
        side[1],
    );
}

fn render_items(frame: &mut Frame, area: Rect, state: &mut AppState, is_dimmed: bool) {
    let icons = state.ui.icons;
    // Borders, padding and the highlight symbol
    let text_width = usize::from(area.width.saturating_sub(8)).max(10);
    let heading = Style::default()
        .fg(theme::PRIMARY)
        .add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(theme::GRAY);

    let list_items: Vec<ListItem> = help_items()
        .into_iter()
        .map(|item| match item {
            HelpItem::Action(action) => ListItem::new(Line::from(vec![
                Span::styled(action.title(), heading),
                Span::styled(format!("  {}", action.description()), muted),
            ])),
            HelpItem::Step(i) => {
                let step = &TROUBLESHOOTING_STEPS[i];
                ListItem::new(Line::from(vec![
                    Span::styled(format!("Step {} ", i + 1), Style::default().fg(theme::SECONDARY)),
                    Span::raw(step.title),
                ]))
            }
            HelpItem::Faq(i) => {
                let faq = &FAQS[i];
                let expanded = state.help.expanded_faq == Some(i);
                let mut lines = vec![Line::from(vec![
                    Span::styled(
                        format!("{} ", icons.disclosure(expanded)),
                        Style::default().fg(theme::WARNING),
                    ),
                    Span::raw(faq.question),
                ])];
                if expanded {
                    lines.extend(
                        wrap_words(faq.answer, text_width)
                            .into_iter()
                            .map(|l| Line::styled(format!("  {l}"), muted)),
                    );
                }
                ListItem::new(lines)
            }
        })
        .collect();

    let list = List::new(list_items)
        .block(card("Troubleshooting", theme::PRIMARY, is_dimmed))
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

    frame.render_stateful_widget(list, area, &mut state.help.l_state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(
            wrap_words("one two three four", 9),
            vec!["one two", "three", "four"]
        );
        assert_eq!(wrap_words("unbreakableword", 4), vec!["unbreakableword"]);
        assert!(wrap_words("   ", 10).is_empty());
    }
}
