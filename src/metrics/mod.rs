// Metrics refresh driver
//
// Produces the simulated dashboard numbers: four stat cards with a
// percent-change indicator, a five-row top pages table, and the data of the
// two charts. Each refresh regenerates everything from the random source;
// nothing carries over between refreshes except the chart objects.

pub mod chart;
pub mod format;

pub use chart::{Chart, ChartKind};

use crate::app::config::Period;
use crate::error::DashboardError;
use crate::random::RandomSource;
use format::{change_text, duration_text, thousands};

/// Percent changes are drawn from [-CHANGE_SPREAD/2, CHANGE_SPREAD/2)
const CHANGE_SPREAD: f64 = 30.0;

/// Number of rows in the top pages table
pub const PAGE_ROW_COUNT: usize = 5;

/// Page paths shown in the table, with their initial figures
const INITIAL_PAGES: [(&str, u64, u64, u64, u64); PAGE_ROW_COUNT] = [
    ("/home", 15420, 2, 34, 32),
    ("/products", 9876, 3, 12, 28),
    ("/contact", 7654, 1, 45, 45),
    ("/blog", 5432, 4, 23, 22),
    ("/about", 3210, 2, 56, 38),
];

// ============================================================================
// Stat cards
// ============================================================================

/// The four headline numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    Visitors,
    PageViews,
    Conversion,
    Revenue,
}

impl StatKind {
    pub fn label(&self) -> &'static str {
        match self {
            StatKind::Visitors => "Visitors",
            StatKind::PageViews => "Page views",
            StatKind::Conversion => "Conversion rate",
            StatKind::Revenue => "Revenue",
        }
    }

    /// Draw a new value for this stat
    fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            StatKind::Visitors => rng.next_floor(15_000, 30_000) as f64,
            StatKind::PageViews => rng.next_floor(60_000, 120_000) as f64,
            StatKind::Conversion => rng.next_range(2.0, 5.0),
            StatKind::Revenue => rng.next_floor(8_000, 20_000) as f64,
        }
    }

    /// Text shown for `value`
    pub fn format_value(&self, value: f64) -> String {
        match self {
            StatKind::Visitors | StatKind::PageViews => thousands(value as u64),
            StatKind::Conversion => format!("{:.2}%", value),
            StatKind::Revenue => format!("€{}", thousands(value as u64)),
        }
    }
}

/// Direction of a percent change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Positive,
    Negative,
}

impl Trend {
    /// Zero counts as negative
    pub fn from_change(change: f64) -> Self {
        if change > 0.0 {
            Trend::Positive
        } else {
            Trend::Negative
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub kind: StatKind,
    pub value: f64,
    pub value_text: String,
    pub change: f64,
    pub change_text: String,
    pub trend: Trend,
}

impl StatCard {
    fn new(kind: StatKind, value: f64, change: f64) -> Self {
        let mut card = Self {
            kind,
            value: 0.0,
            value_text: String::new(),
            change: 0.0,
            change_text: String::new(),
            trend: Trend::Negative,
        };
        card.set_value(value);
        card.set_change(change);
        card
    }

    fn set_value(&mut self, value: f64) {
        self.value = value;
        self.value_text = self.kind.format_value(value);
    }

    fn set_change(&mut self, change: f64) {
        self.change = change;
        self.change_text = change_text(change);
        self.trend = Trend::from_change(change);
    }
}

// ============================================================================
// Pages table
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct PageRow {
    pub path: &'static str,
    pub views: u64,
    pub avg_time: String,
    pub bounce_rate: u64,
}

impl PageRow {
    /// Redraw every figure of this row, keeping the path
    fn regenerate<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        self.views = rng.next_floor(2_000, 20_000);
        let minutes = rng.next_floor(1, 6);
        let seconds = rng.next_floor(0, 60);
        self.avg_time = duration_text(minutes, seconds);
        self.bounce_rate = rng.next_floor(20, 60);
    }
}

// ============================================================================
// Driver
// ============================================================================

/// Owns the displayed metrics and regenerates them on demand
pub struct MetricsDriver {
    period: Period,
    stats: [StatCard; 4],
    pages: Vec<PageRow>,
    traffic: Chart,
    sources: Chart,
    refresh_count: u64,
}

impl MetricsDriver {
    /// Driver showing the fixed initial figures
    pub fn new() -> Self {
        Self {
            period: Period::default(),
            stats: [
                StatCard::new(StatKind::Visitors, 24_891.0, 12.5),
                StatCard::new(StatKind::PageViews, 89_432.0, 8.3),
                StatCard::new(StatKind::Conversion, 3.42, -2.1),
                StatCard::new(StatKind::Revenue, 12_847.0, 15.7),
            ],
            pages: INITIAL_PAGES
                .iter()
                .map(|&(path, views, minutes, seconds, bounce_rate)| PageRow {
                    path,
                    views,
                    avg_time: duration_text(minutes, seconds),
                    bounce_rate,
                })
                .collect(),
            traffic: Chart::traffic(),
            sources: Chart::sources(),
            refresh_count: 0,
        }
    }

    /// Regenerate stats, charts and table
    pub fn refresh<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Result<(), DashboardError> {
        self.update_stats(rng);
        self.update_charts(rng)?;
        self.update_table(rng);
        self.refresh_count += 1;

        tracing::debug!(
            period = %self.period,
            refresh_count = self.refresh_count,
            "Metrics refreshed"
        );
        Ok(())
    }

    /// Mark `period` active and refresh immediately
    ///
    /// The period only changes the selector; value ranges are the same for
    /// every period.
    pub fn select_period<R: RandomSource + ?Sized>(
        &mut self,
        period: Period,
        rng: &mut R,
    ) -> Result<(), DashboardError> {
        if period != self.period {
            tracing::info!(from = %self.period, to = %period, "Reporting period changed");
        }
        self.period = period;
        self.refresh(rng)
    }

    fn update_stats<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        for card in &mut self.stats {
            let value = card.kind.generate(rng);
            card.set_value(value);
        }
        for card in &mut self.stats {
            let change = rng.next_unit() * CHANGE_SPREAD - CHANGE_SPREAD / 2.0;
            card.set_change(change);
        }
    }

    fn update_charts<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Result<(), DashboardError> {
        let visitors: Vec<f64> = (0..chart::WEEKDAY_LABELS.len())
            .map(|_| rng.next_floor(1_000, 4_000) as f64)
            .collect();
        let page_views: Vec<f64> = visitors
            .iter()
            .map(|v| v * 2.0 + rng.next_floor(0, 500) as f64)
            .collect();

        self.traffic.set_series(0, visitors)?;
        self.traffic.set_series(1, page_views)?;
        self.traffic.update();

        let sources: Vec<f64> = (0..chart::SOURCE_LABELS.len())
            .map(|_| rng.next_floor(10, 50) as f64)
            .collect();
        self.sources.set_series(0, sources)?;
        self.sources.update();
        Ok(())
    }

    fn update_table<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        for row in &mut self.pages {
            row.regenerate(rng);
        }
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn stats(&self) -> &[StatCard] {
        &self.stats
    }

    pub fn pages(&self) -> &[PageRow] {
        &self.pages
    }

    pub fn traffic(&self) -> &Chart {
        &self.traffic
    }

    pub fn sources(&self) -> &Chart {
        &self.sources
    }

    /// Completed refreshes since construction
    pub fn refresh_count(&self) -> u64 {
        self.refresh_count
    }
}

impl Default for MetricsDriver {
    fn default() -> Self {
        Self::new()
    }
}
