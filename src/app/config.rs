// Application configuration types
//
// This module contains configuration structs and enums for:
// - Particle field geometry and density
// - Frame and metrics refresh intervals
// - Reporting periods

use crate::error::DashboardError;
use std::fmt;
use std::time::Duration;

// ============================================================================
// Constants
// ============================================================================

/// Number of particles seeded on construction and on every resize
pub const DEFAULT_PARTICLE_COUNT: usize = 80;

/// Pairs closer than this (in surface units) get a connector line
pub const LINK_DISTANCE: f64 = 100.0;

/// Surface units covered by one terminal column
pub const UNITS_PER_COLUMN: f64 = 8.0;

/// Surface units covered by one terminal row (cells are ~2x taller than wide)
pub const UNITS_PER_ROW: f64 = 16.0;

/// Default frame interval in milliseconds (~30 fps)
pub const DEFAULT_FRAME_MS: u64 = 33;

/// Automatic metrics refresh interval in milliseconds
pub const DEFAULT_REFRESH_MS: u64 = 30_000;

/// Frame time above which a frame counts as slow
pub const FRAME_TIME_THRESHOLD_MS: u128 = 100;

/// Number of consecutive slow frames before a warning is logged
pub const SLOW_FRAME_COUNT_THRESHOLD: u32 = 5;

/// Environment variable naming the log file
pub const LOG_FILE_ENV: &str = "PULSEBOARD_LOG";

/// Environment variable holding an optional RNG seed
pub const SEED_ENV: &str = "PULSEBOARD_SEED";

/// Log filter used when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "pulseboard=info";

/// Parse the optional seed value
///
/// Empty or whitespace-only values mean "no seed".
pub fn parse_seed(raw: Option<&str>) -> Result<Option<u64>, DashboardError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<u64>()
            .map(Some)
            .map_err(|_| DashboardError::InvalidSeed(value.to_string())),
    }
}

// ============================================================================
// Enums
// ============================================================================

/// Reporting period shown in the header selector
///
/// Selecting a period re-triggers a refresh; the value ranges do not depend
/// on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Period {
    Week,
    #[default]
    Month,
    Quarter,
    Year,
}

impl Period {
    /// All periods in selector order
    pub const ALL: [Period; 4] = [Period::Week, Period::Month, Period::Quarter, Period::Year];

    /// Short label used on the selector buttons
    pub fn label(&self) -> &'static str {
        match self {
            Period::Week => "7d",
            Period::Month => "30d",
            Period::Quarter => "90d",
            Period::Year => "1y",
        }
    }

    /// Period bound to a digit key ('1'..='4')
    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '1' => Some(Period::Week),
            '2' => Some(Period::Month),
            '3' => Some(Period::Quarter),
            '4' => Some(Period::Year),
            _ => None,
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|p| p == self).unwrap_or(0)
    }

    /// Next period in selector order, wrapping around
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous period in selector order, wrapping around
    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Particle field settings
#[derive(Debug, Clone)]
pub struct FieldConfig {
    /// Particles per seeding
    pub particle_count: usize,

    /// Maximum distance for connector lines (exclusive)
    pub link_distance: f64,

    /// Surface units per terminal column
    pub units_per_column: f64,

    /// Surface units per terminal row
    pub units_per_row: f64,
}

impl FieldConfig {
    /// Surface size in units for a terminal of `cols` x `rows` cells
    pub fn surface_size(&self, cols: u16, rows: u16) -> (f64, f64) {
        (
            cols as f64 * self.units_per_column,
            rows as f64 * self.units_per_row,
        )
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            link_distance: LINK_DISTANCE,
            units_per_column: UNITS_PER_COLUMN,
            units_per_row: UNITS_PER_ROW,
        }
    }
}

/// Frame and metrics refresh intervals
#[derive(Debug, Clone)]
pub struct RefreshConfig {
    /// Frame interval in milliseconds; also the input poll timeout
    pub frame_ms: u64,

    /// Automatic metrics refresh interval in milliseconds
    pub refresh_ms: u64,
}

impl RefreshConfig {
    /// Create a new RefreshConfig with default values
    pub fn new() -> Self {
        Self {
            frame_ms: DEFAULT_FRAME_MS,
            refresh_ms: DEFAULT_REFRESH_MS,
        }
    }

    /// Get frame interval as Duration
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }

    /// Get metrics refresh interval as Duration
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_ms)
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_cycle_wraps() {
        assert_eq!(Period::Year.next(), Period::Week);
        assert_eq!(Period::Week.previous(), Period::Year);
        assert_eq!(Period::Month.next(), Period::Quarter);
    }

    #[test]
    fn test_period_from_digit() {
        assert_eq!(Period::from_digit('1'), Some(Period::Week));
        assert_eq!(Period::from_digit('4'), Some(Period::Year));
        assert_eq!(Period::from_digit('5'), None);
    }

    #[test]
    fn test_default_period_is_thirty_days() {
        assert_eq!(Period::default().label(), "30d");
    }

    #[test]
    fn test_surface_size_scales_cells() {
        let config = FieldConfig::default();
        assert_eq!(config.surface_size(120, 40), (960.0, 640.0));
        assert_eq!(config.surface_size(0, 0), (0.0, 0.0));
    }

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed(None), Ok(None));
        assert_eq!(parse_seed(Some("  ")), Ok(None));
        assert_eq!(parse_seed(Some("42")), Ok(Some(42)));
        assert_eq!(
            parse_seed(Some("forty-two")),
            Err(DashboardError::InvalidSeed("forty-two".to_string()))
        );
    }

    #[test]
    fn test_refresh_intervals() {
        let config = RefreshConfig::default();
        assert_eq!(config.refresh_interval(), Duration::from_secs(30));
        assert_eq!(config.frame_interval(), Duration::from_millis(33));
    }
}
