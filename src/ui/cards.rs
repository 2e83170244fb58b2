// Stat cards rendering module
//
// One bordered card per headline metric: label, current value and the
// change against the previous period colored by trend.

use crate::metrics::{StatCard, Trend};
use crate::theme::{trend_color, SLATE, SNOW_WHITE, VIOLET};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub fn render_stat_cards(f: &mut Frame, area: Rect, stats: &[StatCard]) {
    if stats.is_empty() {
        return;
    }

    let constraints: Vec<Constraint> = stats
        .iter()
        .map(|_| Constraint::Ratio(1, stats.len() as u32))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (card, chunk) in stats.iter().zip(chunks.iter()) {
        render_card(f, *chunk, card);
    }
}

fn render_card(f: &mut Frame, area: Rect, card: &StatCard) {
    let arrow = match card.trend {
        Trend::Positive => "▲ ",
        Trend::Negative => "▼ ",
    };
    let change_style = Style::default().fg(trend_color(card.trend));

    let text = vec![
        Line::from(Span::styled(
            card.value_text.clone(),
            Style::default().fg(SNOW_WHITE).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(arrow, change_style),
            Span::styled(card.change_text.clone(), change_style),
        ]),
    ];

    let widget = Paragraph::new(text)
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {} ", card.kind.label()),
                    Style::default().fg(SLATE),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(VIOLET)),
        )
        .alignment(Alignment::Left);

    f.render_widget(widget, area);
}
