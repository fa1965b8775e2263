pub mod clients;
pub mod financial;
pub mod overview;
pub mod projects;
pub mod team;

use inkloop_core::format::{NOT_AVAILABLE, format_thousands, percent_or_na};
use inkloop_core::metrics::client_type_shares;
use inkloop_core::view_cards;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, List, ListItem, Paragraph},
};

use crate::components::metric_card;
use crate::state::AppState;

/// Draw the active view's headline cards and return the area left below them
fn render_headline(frame: &mut Frame, area: Rect, state: &AppState) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(metric_card::CARD_HEIGHT),
            Constraint::Min(0),
        ])
        .split(area);

    let cards = view_cards(state.active_view(), &state.snapshot, state.range());
    metric_card::render_card_row(frame, chunks[0], &cards);
    chunks[1]
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
}

fn render_empty(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    frame.render_widget(Paragraph::new(message).block(panel(title)), area);
}

/// One bar per label in a chart, drawn in `color`
struct Series {
    values: Vec<f64>,
    color: Color,
}

/// Vertical bar chart with one group per label and one bar per series.
///
/// Negative and non-finite values draw as empty bars; `value_label` formats
/// the text printed on each bar.
fn render_series_chart(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    labels: &[&str],
    series: &[Series],
    value_label: fn(f64) -> String,
) {
    if labels.is_empty() || series.is_empty() {
        render_empty(frame, area, title, "No data in range");
        return;
    }

    let groups: Vec<BarGroup> = labels
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let bars: Vec<Bar> = series
                .iter()
                .map(|s| {
                    let value = s.values.get(index).copied().unwrap_or(0.0);
                    let height = if value.is_finite() { value.max(0.0).round() } else { 0.0 };
                    let style = Style::default().fg(s.color);
                    Bar::default()
                        .value(height as u64)
                        .text_value(value_label(value))
                        .style(style)
                        .value_style(style.reversed())
                })
                .collect();
            BarGroup::default()
                .label(Line::from(label.to_string()))
                .bars(&bars)
        })
        .collect();

    let bar_width = if series.len() == 1 { 6 } else { 5 };
    let mut chart = BarChart::default()
        .block(panel(title))
        .bar_width(bar_width)
        .bar_gap(0)
        .group_gap(2)
        .direction(Direction::Vertical);
    for group in groups {
        chart = chart.data(group);
    }

    frame.render_widget(chart, area);
}

/// Whole-number bar text for hours and counts
fn whole_label(value: f64) -> String {
    if value.is_finite() {
        format!("{}", value.round())
    } else {
        NOT_AVAILABLE.to_string()
    }
}

fn thousands_label(value: f64) -> String {
    if value.is_finite() {
        format_thousands(value)
    } else {
        NOT_AVAILABLE.to_string()
    }
}

/// Client categories with their counts and share of all categorized clients
fn render_client_mix(frame: &mut Frame, area: Rect, state: &AppState, title: &str) {
    let categories = &state.snapshot.clients.clients_by_type;
    if categories.is_empty() {
        render_empty(frame, area, title, "No client categories");
        return;
    }

    let shares = client_type_shares(&state.snapshot);
    let mut items = vec![ListItem::new(Line::from(Span::styled(
        format!("{:<16} {:>8} {:>8}", "Type", "Clients", "Share"),
        Style::default().add_modifier(Modifier::BOLD),
    )))];
    items.extend(categories.iter().zip(&shares).map(|(category, share)| {
        ListItem::new(Line::from(format!(
            "{:<16} {:>8} {:>8}",
            category.name,
            category.value,
            percent_or_na(share)
        )))
    }));

    frame.render_widget(List::new(items).block(panel(title)), area);
}

/// Split `area` into a left and right half
fn halves(area: Rect) -> [Rect; 2] {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    [chunks[0], chunks[1]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_labels() {
        assert_eq!(whole_label(214.0), "214");
        assert_eq!(whole_label(f64::NAN), NOT_AVAILABLE);
        assert_eq!(thousands_label(67_000.0), "67k");
        assert_eq!(thousands_label(f64::INFINITY), NOT_AVAILABLE);
    }
}
