// Weekly traffic chart rendering module
//
// Renders the line chart (one braille line per series, weekday x axis).

use crate::metrics::format::thousands;
use crate::metrics::Chart;
use crate::theme::{SLATE, SNOW_WHITE, VIOLET};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, BorderType, Borders, Chart as ChartWidget, Dataset, GraphType},
    Frame,
};

/// Y axis step the upper bound is rounded to
const Y_STEP: f64 = 1_000.0;

/// Upper y bound: 10% headroom over the largest point, rounded up to a step
pub fn y_upper_bound(max_value: f64) -> f64 {
    let padded = (max_value.max(0.0) * 1.1 / Y_STEP).ceil() * Y_STEP;
    padded.max(Y_STEP)
}

pub fn render_traffic_chart(f: &mut Frame, area: Rect, chart: &Chart) {
    let series: Vec<Vec<(f64, f64)>> = chart
        .datasets()
        .iter()
        .map(|d| {
            d.data
                .iter()
                .enumerate()
                .map(|(i, v)| (i as f64, *v))
                .collect()
        })
        .collect();

    let datasets: Vec<Dataset> = chart
        .datasets()
        .iter()
        .zip(series.iter())
        .map(|(d, points)| {
            let color = d.colors.first().copied().unwrap_or(SNOW_WHITE);
            Dataset::default()
                .name(d.label.unwrap_or_default())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(color))
                .data(points)
        })
        .collect();

    let x_max = chart.labels().len().saturating_sub(1).max(1) as f64;
    let y_max = y_upper_bound(chart.max_value());
    let axis_style = Style::default().fg(SLATE);

    let widget = ChartWidget::new(datasets)
        .block(
            Block::default()
                .title(Span::styled(
                    " Weekly traffic ",
                    Style::default().fg(SNOW_WHITE).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(VIOLET)),
        )
        .x_axis(
            Axis::default()
                .style(axis_style)
                .bounds([0.0, x_max])
                .labels(chart.labels().iter().map(|l| Line::from(*l))),
        )
        .y_axis(
            Axis::default()
                .style(axis_style)
                .bounds([0.0, y_max])
                .labels(vec![
                    Line::from("0"),
                    Line::from(thousands((y_max / 2.0) as u64)),
                    Line::from(thousands(y_max as u64)),
                ]),
        );

    f.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_y_upper_bound() {
        // Initial page views peak at 6000
        assert_eq!(y_upper_bound(6_000.0), 7_000.0);
        assert_eq!(y_upper_bound(9_000.0), 10_000.0);
        assert_eq!(y_upper_bound(0.0), 1_000.0);
        assert_eq!(y_upper_bound(-5.0), 1_000.0);
    }
}
