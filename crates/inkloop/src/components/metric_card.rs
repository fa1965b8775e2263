use inkloop_core::MetricCard;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Height of one card row, borders included
pub const CARD_HEIGHT: u16 = 5;

fn trend_style(trend: f64) -> Style {
    if trend >= 0.0 {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Red)
    }
}

pub fn card_lines(card: &MetricCard) -> Vec<Line<'_>> {
    let mut value = vec![Span::styled(
        card.value.as_str(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if let (Some(trend), Some(label)) = (card.trend, card.trend_label()) {
        value.push(Span::raw("  "));
        value.push(Span::styled(label, trend_style(trend)));
    }

    let mut lines = vec![Line::from(value)];
    if let Some(subtitle) = &card.subtitle {
        lines.push(Line::from(Span::styled(
            subtitle.as_str(),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines
}

/// Lay `cards` out side by side in one row
pub fn render_card_row(frame: &mut Frame, area: Rect, cards: &[MetricCard]) {
    if cards.is_empty() {
        return;
    }

    let constraints = vec![Constraint::Ratio(1, cards.len() as u32); cards.len()];
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (card, slot) in cards.iter().zip(slots.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", card.title));
        frame.render_widget(Paragraph::new(card_lines(card)).block(block), *slot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkloop_core::{DashboardSnapshot, Range, View, view_cards};

    #[test]
    fn test_card_lines_include_trend_badge() {
        let snapshot = DashboardSnapshot::sample();
        let cards = view_cards(View::Overview, &snapshot, Range::SixMonths);

        let first: String = card_lines(&cards[0])[0]
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(first, "₹3,31,000  +48.9%");
    }
}
