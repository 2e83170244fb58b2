// Top pages rendering module
//
// Renders the pages table: path, views, average time and bounce rate.

use crate::metrics::format::thousands;
use crate::metrics::PageRow;
use crate::theme::{GRASS_GREEN, SKY_BLUE, SLATE, SNOW_WHITE, VIOLET};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Cell, Row, Table},
    Frame,
};

pub fn render_pages_table(f: &mut Frame, area: Rect, pages: &[PageRow]) {
    let header = Row::new(vec!["Page", "Views", "Avg. time", "Bounce rate"])
        .style(Style::default().fg(SLATE).add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows: Vec<Row> = pages
        .iter()
        .map(|page| {
            Row::new(vec![
                Cell::from(page.path).style(Style::default().fg(SKY_BLUE)),
                Cell::from(thousands(page.views)).style(Style::default().fg(SNOW_WHITE)),
                Cell::from(page.avg_time.clone()).style(Style::default().fg(SNOW_WHITE)),
                Cell::from(format!("{}%", page.bounce_rate)).style(Style::default().fg(GRASS_GREEN)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(40),
        Constraint::Percentage(20),
        Constraint::Percentage(20),
        Constraint::Percentage(20),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(Span::styled(
                " Top pages ",
                Style::default().fg(SNOW_WHITE).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(VIOLET)),
    );

    f.render_widget(table, area);
}
