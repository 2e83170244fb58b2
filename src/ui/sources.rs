// Traffic sources rendering module
//
// Renders the doughnut chart as a braille ring (slices clockwise from the
// top) next to a legend with each slice's value and share.

use crate::metrics::Chart;
use crate::theme::{SLATE, SNOW_WHITE, VIOLET};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Paragraph,
    },
    Frame,
};
use std::f64::consts::TAU;

/// Ring radii in canvas units (outer radius is 1.0)
const RING_INNER: f64 = 0.55;
const RING_OUTER: f64 = 1.0;

/// Sampling steps used to fill the ring
const ANGLE_STEP_DEG: usize = 2;
const RADIUS_STEPS: usize = 12;

/// Slice under `angle` (radians, clockwise from the top) for the given shares
pub fn slice_at(shares: &[f64], angle: f64) -> Option<usize> {
    let turn = angle.rem_euclid(TAU) / TAU;
    let mut end = 0.0;
    for (idx, share) in shares.iter().enumerate() {
        end += share;
        if turn < end {
            return Some(idx);
        }
    }
    None
}

/// Ring sample points grouped by slice
pub fn ring_points(shares: &[f64]) -> Vec<Vec<(f64, f64)>> {
    let mut points = vec![Vec::new(); shares.len()];

    for deg in (0..360).step_by(ANGLE_STEP_DEG) {
        let angle = (deg as f64).to_radians();
        let Some(slice) = slice_at(shares, angle) else {
            continue;
        };
        for step in 0..=RADIUS_STEPS {
            let r = RING_INNER + (RING_OUTER - RING_INNER) * step as f64 / RADIUS_STEPS as f64;
            points[slice].push((r * angle.sin(), r * angle.cos()));
        }
    }

    points
}

pub fn render_sources_chart(f: &mut Frame, area: Rect, chart: &Chart) {
    let block = Block::default()
        .title(Span::styled(
            " Traffic sources ",
            Style::default().fg(SNOW_WHITE).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(VIOLET));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let shares = chart.shares();
    let colors: Vec<Color> = chart
        .datasets()
        .first()
        .map(|d| d.colors.clone())
        .unwrap_or_default();
    let slices = ring_points(&shares);

    // Cells are about twice as tall as wide; widen x so the ring stays round
    let ring_area = chunks[0];
    let aspect = if ring_area.height > 0 {
        ring_area.width as f64 / (ring_area.height as f64 * 2.0)
    } else {
        1.0
    };
    let y_extent = RING_OUTER * 1.1;
    let x_extent = y_extent * aspect.max(0.1);

    let ring = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-x_extent, x_extent])
        .y_bounds([-y_extent, y_extent])
        .paint(move |ctx| {
            for (idx, coords) in slices.iter().enumerate() {
                let color = colors.get(idx).copied().unwrap_or(SLATE);
                ctx.draw(&Points { coords, color });
            }
        });
    f.render_widget(ring, ring_area);

    f.render_widget(Paragraph::new(legend_lines(chart, &shares)), chunks[1]);
}

fn legend_lines(chart: &Chart, shares: &[f64]) -> Vec<Line<'static>> {
    let Some(dataset) = chart.datasets().first() else {
        return Vec::new();
    };

    let mut lines = vec![Line::from("")];
    for (idx, label) in chart.labels().iter().enumerate() {
        let color = dataset.colors.get(idx).copied().unwrap_or(SLATE);
        let value = dataset.data.get(idx).copied().unwrap_or(0.0);
        let share = shares.get(idx).copied().unwrap_or(0.0);
        lines.push(Line::from(vec![
            Span::styled("■ ", Style::default().fg(color)),
            Span::styled(format!("{:<9}", label), Style::default().fg(SNOW_WHITE)),
            Span::styled(
                format!("{:>3} {:>5.1}%", value as u64, share * 100.0),
                Style::default().fg(SLATE),
            ),
        ]));
    }
    lines
}
