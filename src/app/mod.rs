// Application state management
//
// This module contains the Dashboard controller, the single owner of the
// particle field, the metrics driver, the random source and the refresh
// timer. The main loop drives it through on_tick / on_frame_due / on_resize and
// the key handler in `event`.

pub mod config;
pub mod event;
pub mod timer;

// Re-export config types for convenience
pub use config::{FieldConfig, Period, RefreshConfig};

use crate::metrics::MetricsDriver;
use crate::particles::{DrawList, ParticleField};
use config::{FRAME_TIME_THRESHOLD_MS, SLOW_FRAME_COUNT_THRESHOLD};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};
use timer::RefreshTimer;

/// Main dashboard state
pub struct Dashboard {
    /// Whether the application is running
    pub running: bool,

    /// Frame and refresh intervals
    pub refresh_config: RefreshConfig,

    /// Particle backdrop
    field: ParticleField,

    /// Stat cards, charts and pages table
    metrics: MetricsDriver,

    /// Source of every random value on screen
    rng: StdRng,

    /// Fires the automatic metrics refresh
    refresh_timer: RefreshTimer,

    /// Terminal size in cells (columns, rows)
    viewport: (u16, u16),

    /// Error from the last refresh, shown in the status bar
    pub refresh_error: Option<String>,

    /// Timestamp of the last frame
    last_frame_time: Instant,

    /// Earliest time the next frame may be produced
    next_frame_at: Instant,

    /// Duration of the last frame in milliseconds
    pub last_frame_ms: u128,

    /// Counter for consecutive slow frames
    slow_frame_count: u32,

    /// Whether the slow-frame warning was already logged
    slow_frames_reported: bool,
}

impl Dashboard {
    /// Create the dashboard for a `cols` x `rows` terminal
    ///
    /// Uses `seed` for reproducible sessions, OS entropy otherwise.
    pub fn new(cols: u16, rows: u16, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_parts(
            cols,
            rows,
            FieldConfig::default(),
            RefreshConfig::default(),
            rng,
            Instant::now(),
        )
    }

    /// Create the dashboard from explicit parts
    pub fn with_parts(
        cols: u16,
        rows: u16,
        field_config: FieldConfig,
        refresh_config: RefreshConfig,
        mut rng: StdRng,
        now: Instant,
    ) -> Self {
        let (width, height) = field_config.surface_size(cols, rows);
        let field = ParticleField::new(field_config, DrawList::new(width, height), &mut rng);
        let refresh_timer = RefreshTimer::new(refresh_config.refresh_interval(), now);

        tracing::info!(
            cols,
            rows,
            particles = field.particles().len(),
            refresh_ms = refresh_config.refresh_ms,
            "Dashboard ready"
        );

        Self {
            running: true,
            refresh_config,
            field,
            metrics: MetricsDriver::new(),
            rng,
            refresh_timer,
            viewport: (cols, rows),
            refresh_error: None,
            last_frame_time: now,
            next_frame_at: now,
            last_frame_ms: 0,
            slow_frame_count: 0,
            slow_frames_reported: false,
        }
    }

    /// Check timers (called once per loop iteration)
    pub fn on_tick(&mut self) {
        self.on_tick_at(Instant::now());
    }

    /// Check timers against an explicit clock
    pub fn on_tick_at(&mut self, now: Instant) {
        if self.refresh_timer.poll(now) {
            self.refresh();
        }
    }

    /// Advance the particle backdrop by one frame
    pub fn on_frame(&mut self) -> bool {
        self.field.frame()
    }

    /// Produce a frame if one frame interval has passed since the last one
    ///
    /// Returns `true` when the interval was due. Input events wake the main
    /// loop early; they never add frames.
    pub fn on_frame_due(&mut self) -> bool {
        self.on_frame_due_at(Instant::now())
    }

    fn on_frame_due_at(&mut self, now: Instant) -> bool {
        if now < self.next_frame_at {
            return false;
        }
        self.next_frame_at = now + self.refresh_config.frame_interval();
        self.update_frame_time_at(now);
        self.on_frame();
        true
    }

    /// Time left before the next frame is due (the input poll timeout)
    pub fn until_next_frame(&self) -> Duration {
        self.next_frame_at.saturating_duration_since(Instant::now())
    }

    /// Terminal was resized to `cols` x `rows`
    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        if self.viewport == (cols, rows) {
            return;
        }
        self.viewport = (cols, rows);

        let (width, height) = self.field.config().surface_size(cols, rows);
        self.field.on_resize(width, height, &mut self.rng);
        tracing::info!(cols, rows, "Viewport resized");
    }

    /// Regenerate all metrics now, independent of the timer
    pub fn refresh(&mut self) {
        match self.metrics.refresh(&mut self.rng) {
            Ok(()) => self.refresh_error = None,
            Err(e) => {
                tracing::warn!(error = %e, "Metrics refresh failed");
                self.refresh_error = Some(e.to_string());
            }
        }
    }

    /// Mark `period` active and refresh immediately
    pub fn select_period(&mut self, period: Period) {
        match self.metrics.select_period(period, &mut self.rng) {
            Ok(()) => self.refresh_error = None,
            Err(e) => {
                tracing::warn!(error = %e, %period, "Period refresh failed");
                self.refresh_error = Some(e.to_string());
            }
        }
    }

    /// Select the period right of the active one
    pub fn select_next_period(&mut self) {
        self.select_period(self.metrics.period().next());
    }

    /// Select the period left of the active one
    pub fn select_previous_period(&mut self) {
        self.select_period(self.metrics.period().previous());
    }

    /// Stop or resume the particle animation
    pub fn toggle_animation(&mut self) {
        self.field.toggle();
    }

    /// Update frame time tracking
    ///
    /// Logs a warning once when frame time stays above
    /// FRAME_TIME_THRESHOLD_MS for SLOW_FRAME_COUNT_THRESHOLD frames in a row.
    fn update_frame_time_at(&mut self, now: Instant) {
        let frame_time = now.duration_since(self.last_frame_time).as_millis();
        self.last_frame_time = now;
        self.last_frame_ms = frame_time;

        if frame_time > FRAME_TIME_THRESHOLD_MS {
            self.slow_frame_count += 1;

            if self.slow_frame_count >= SLOW_FRAME_COUNT_THRESHOLD && !self.slow_frames_reported {
                self.slow_frames_reported = true;
                tracing::warn!(
                    frame_time_ms = frame_time,
                    slow_frame_count = self.slow_frame_count,
                    particles = self.field.particles().len(),
                    "Frames are consistently slow"
                );
            }
        } else {
            self.slow_frame_count = 0;
        }
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn metrics(&self) -> &MetricsDriver {
        &self.metrics
    }

    pub fn period(&self) -> Period {
        self.metrics.period()
    }

    #[cfg(test)]
    pub fn viewport(&self) -> (u16, u16) {
        self.viewport
    }

    /// Time left before the next automatic refresh
    pub fn next_refresh_in(&self) -> Duration {
        self.refresh_timer.remaining(Instant::now())
    }
}
