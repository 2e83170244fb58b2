// Banner rendering module
//
// Renders the top header: dashboard title, the period selector and the
// countdown to the next automatic refresh.

use crate::app::{Dashboard, Period};
use crate::theme::{period_color, SLATE, SNOW_WHITE, VIOLET};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub fn render_banner(f: &mut Frame, area: Rect, app: &Dashboard) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(VIOLET));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(44)])
        .split(inner);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            " 📈 Pulseboard",
            Style::default().fg(SNOW_WHITE).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Analytics overview", Style::default().fg(SLATE)),
    ]))
    .alignment(Alignment::Left);
    f.render_widget(title, chunks[0]);

    let mut spans = period_selector(app.period());
    spans.push(Span::styled(
        format!("  ⟳ {}s ", app.next_refresh_in().as_secs()),
        Style::default().fg(SLATE),
    ));
    let selector = Paragraph::new(Line::from(spans)).alignment(Alignment::Right);
    f.render_widget(selector, chunks[1]);
}

/// Selector buttons, the active one highlighted
fn period_selector(active: Period) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (idx, period) in Period::ALL.iter().enumerate() {
        let is_active = *period == active;
        let mut style = Style::default().fg(period_color(is_active));
        if is_active {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        spans.push(Span::styled(format!("{}", idx + 1), Style::default().fg(SLATE)));
        spans.push(Span::styled(format!("[{}]", period.label()), style));
        spans.push(Span::raw(" "));
    }

    spans
}
