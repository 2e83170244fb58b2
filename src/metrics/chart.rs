// Chart models
//
// Data held by the two dashboard charts. The UI reads these every frame;
// the metrics driver replaces series and calls `update()` once per refresh.

use crate::error::DashboardError;
use crate::theme::{AMBER, GRASS_GREEN, ORCHID_PINK, SKY_BLUE, VIOLET};
use ratatui::style::Color;

/// Weekday labels for the traffic line chart
pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Traffic source labels for the doughnut chart
pub const SOURCE_LABELS: [&str; 5] = ["Google", "Direct", "Social", "Email", "Referral"];

/// Initial visitors series shown before the first refresh
pub const INITIAL_VISITORS: [f64; 7] = [1200.0, 1900.0, 3000.0, 2500.0, 2200.0, 3000.0, 2800.0];

/// Initial page views series shown before the first refresh
pub const INITIAL_PAGE_VIEWS: [f64; 7] = [2400.0, 3800.0, 6000.0, 5000.0, 4400.0, 6000.0, 5600.0];

/// Initial traffic source split shown before the first refresh
pub const INITIAL_SOURCES: [f64; 5] = [45.0, 25.0, 15.0, 10.0, 5.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Doughnut,
}

/// One data series
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Legend label (doughnut slices use the chart labels instead)
    pub label: Option<&'static str>,
    pub data: Vec<f64>,
    /// One color for a line series, one per slice for a doughnut
    pub colors: Vec<Color>,
}

#[derive(Debug, Clone)]
pub struct Chart {
    kind: ChartKind,
    labels: Vec<&'static str>,
    datasets: Vec<Dataset>,
    revision: u64,
}

impl Chart {
    /// Weekly traffic chart: visitors and page views
    pub fn traffic() -> Self {
        Self {
            kind: ChartKind::Line,
            labels: WEEKDAY_LABELS.to_vec(),
            datasets: vec![
                Dataset {
                    label: Some("Visitors"),
                    data: INITIAL_VISITORS.to_vec(),
                    colors: vec![GRASS_GREEN],
                },
                Dataset {
                    label: Some("Page views"),
                    data: INITIAL_PAGE_VIEWS.to_vec(),
                    colors: vec![SKY_BLUE],
                },
            ],
            revision: 0,
        }
    }

    /// Traffic source breakdown
    pub fn sources() -> Self {
        Self {
            kind: ChartKind::Doughnut,
            labels: SOURCE_LABELS.to_vec(),
            datasets: vec![Dataset {
                label: None,
                data: INITIAL_SOURCES.to_vec(),
                colors: vec![GRASS_GREEN, SKY_BLUE, ORCHID_PINK, AMBER, VIOLET],
            }],
            revision: 0,
        }
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn labels(&self) -> &[&'static str] {
        &self.labels
    }

    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    /// Number of `update()` calls so far
    #[cfg(test)]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the data of series `index`
    ///
    /// The new data must have one point per label. Takes effect on screen
    /// after the next `update()`.
    pub fn set_series(&mut self, index: usize, data: Vec<f64>) -> Result<(), DashboardError> {
        let len = self.datasets.len();
        let expected = self.labels.len();
        let dataset = self
            .datasets
            .get_mut(index)
            .ok_or(DashboardError::SeriesOutOfRange { index, len })?;

        if data.len() != expected {
            return Err(DashboardError::SeriesLength {
                index,
                expected,
                actual: data.len(),
            });
        }

        dataset.data = data;
        Ok(())
    }

    /// Mark the chart for redraw
    pub fn update(&mut self) {
        self.revision += 1;
        tracing::trace!(revision = self.revision, "Chart updated");
    }

    /// Largest value across all series (0.0 when empty)
    pub fn max_value(&self) -> f64 {
        self.datasets
            .iter()
            .flat_map(|d| d.data.iter().copied())
            .fold(0.0, f64::max)
    }

    /// Share of each slice in the first series, summing to 1.0
    ///
    /// Returns all zeros when the series sums to zero.
    pub fn shares(&self) -> Vec<f64> {
        let Some(first) = self.datasets.first() else {
            return Vec::new();
        };
        let total: f64 = first.data.iter().sum();
        if total <= 0.0 {
            return vec![0.0; first.data.len()];
        }
        first.data.iter().map(|v| v / total).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traffic_chart_shape() {
        let chart = Chart::traffic();
        assert_eq!(chart.kind(), ChartKind::Line);
        assert_eq!(chart.labels().len(), 7);
        assert_eq!(chart.datasets().len(), 2);
        assert!(chart.datasets().iter().all(|d| d.data.len() == 7));
        assert_eq!(chart.revision(), 0);
    }

    #[test]
    fn test_sources_chart_shape() {
        let chart = Chart::sources();
        assert_eq!(chart.kind(), ChartKind::Doughnut);
        assert_eq!(chart.datasets().len(), 1);
        assert_eq!(chart.datasets()[0].data.len(), 5);
        assert_eq!(chart.datasets()[0].colors.len(), 5);
    }

    #[test]
    fn test_set_series_rejects_bad_index() {
        let mut chart = Chart::sources();
        let err = chart.set_series(1, vec![1.0; 5]).unwrap_err();
        assert_eq!(err, DashboardError::SeriesOutOfRange { index: 1, len: 1 });
    }

    #[test]
    fn test_set_series_rejects_bad_length() {
        let mut chart = Chart::traffic();
        let err = chart.set_series(0, vec![1.0; 6]).unwrap_err();
        assert_eq!(
            err,
            DashboardError::SeriesLength {
                index: 0,
                expected: 7,
                actual: 6
            }
        );
        // Data untouched on error
        assert_eq!(chart.datasets()[0].data, INITIAL_VISITORS.to_vec());
    }

    #[test]
    fn test_set_series_then_update() {
        let mut chart = Chart::traffic();
        chart.set_series(1, vec![9.0; 7]).unwrap();
        chart.update();
        assert_eq!(chart.datasets()[1].data, vec![9.0; 7]);
        assert_eq!(chart.revision(), 1);
        assert_eq!(chart.max_value(), 9.0_f64.max(3000.0));
    }

    #[test]
    fn test_shares_sum_to_one() {
        let chart = Chart::sources();
        let shares = chart.shares();
        assert_eq!(shares.len(), 5);
        assert!((shares.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        assert!((shares[0] - 0.45).abs() < 1e-9);
    }

    #[test]
    fn test_shares_of_zero_series() {
        let mut chart = Chart::sources();
        chart.set_series(0, vec![0.0; 5]).unwrap();
        assert_eq!(chart.shares(), vec![0.0; 5]);
    }
}
