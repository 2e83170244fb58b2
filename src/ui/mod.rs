// UI rendering module
//
// This module contains all UI rendering components for pulseboard.
// The main draw() function paints the particle backdrop over the whole
// terminal, then lays the dashboard panels out on top of it.

mod backdrop;
mod banner;
mod cards;
mod pages;
mod sources;
mod status_bar;
mod traffic;

use crate::app::Dashboard;
use crate::metrics::{Chart, ChartKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use backdrop::render_backdrop;
use banner::render_banner;
use cards::render_stat_cards;
use pages::render_pages_table;
use sources::render_sources_chart;
use status_bar::render_status_bar;
use traffic::render_traffic_chart;

/// Main UI drawing function
pub fn draw(f: &mut Frame, app: &Dashboard) {
    let size = f.area();

    // Backdrop first: every panel below is drawn over it
    render_backdrop(f, size, app.field());

    // Main layout: header, stat cards, charts, pages table, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Stat cards
            Constraint::Min(10),   // Charts
            Constraint::Length(9), // Pages table
            Constraint::Length(3), // Status bar
        ])
        .split(size);

    render_banner(f, chunks[0], app);
    render_stat_cards(f, chunks[1], app.metrics().stats());

    // Charts: weekly traffic + traffic sources
    let chart_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Line chart
            Constraint::Percentage(40), // Doughnut
        ])
        .split(chunks[2]);

    render_chart(f, chart_chunks[0], app.metrics().traffic());
    render_chart(f, chart_chunks[1], app.metrics().sources());

    render_pages_table(f, chunks[3], app.metrics().pages());
    render_status_bar(f, chunks[4], app);
}

/// Render a chart with the widget matching its kind
fn render_chart(f: &mut Frame, area: Rect, chart: &Chart) {
    match chart.kind() {
        ChartKind::Line => render_traffic_chart(f, area, chart),
        ChartKind::Doughnut => render_sources_chart(f, area, chart),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::event::handle_key_event;
    use crate::app::{FieldConfig, RefreshConfig};
    use crossterm::event::KeyCode;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;

    fn render_to_string(app: &Dashboard, cols: u16, rows: u16) -> String {
        let backend = TestBackend::new(cols, rows);
        let mut terminal = Terminal::new(backend).expect("test backend");
        terminal.draw(|f| draw(f, app)).expect("draw");

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn dashboard(cols: u16, rows: u16) -> Dashboard {
        Dashboard::with_parts(
            cols,
            rows,
            FieldConfig::default(),
            RefreshConfig::default(),
            StdRng::seed_from_u64(17),
            Instant::now(),
        )
    }

    #[test]
    fn test_draw_full_dashboard() {
        let mut app = dashboard(140, 45);
        app.on_frame();
        let screen = render_to_string(&app, 140, 45);

        assert!(screen.contains("Pulseboard"));
        assert!(screen.contains("24,891"));
        assert!(screen.contains("€12,847"));
        assert!(screen.contains("/products"));
        assert!(screen.contains("Traffic sources"));
        assert!(screen.contains("30d"));
    }

    #[test]
    fn test_draw_after_refresh_and_period_change() {
        let mut app = dashboard(120, 40);
        handle_key_event(&mut app, KeyCode::Char('3'));
        app.on_frame();
        let screen = render_to_string(&app, 120, 40);

        assert!(screen.contains("90d"));
        assert!(screen.contains("vs previous period"));
    }

    #[test]
    fn test_draw_tiny_terminal_does_not_panic() {
        let mut app = dashboard(20, 6);
        app.on_frame();
        render_to_string(&app, 20, 6);

        let mut app = dashboard(1, 1);
        app.on_frame();
        render_to_string(&app, 1, 1);
    }

    #[test]
    fn test_draw_with_stopped_animation() {
        let mut app = dashboard(100, 40);
        app.on_frame();
        app.toggle_animation();
        app.on_frame();
        let screen = render_to_string(&app, 100, 40);
        assert!(screen.contains("[A:OFF]"));
    }
}
