// Particle field animator
//
// Owns the decorative particle backdrop: a fixed-size set of points drifting
// across the full terminal surface, bouncing off its edges, with faint
// connector lines between nearby pairs.

pub mod surface;

pub use surface::{DrawCommand, DrawList, Surface};

use crate::app::config::FieldConfig;
use crate::random::RandomSource;

/// Radius range lower bound (size = r * SIZE_SPREAD + MIN_SIZE)
const MIN_SIZE: f64 = 1.0;
const SIZE_SPREAD: f64 = 3.0;

/// Each velocity component is (r - 0.5) * SPEED_SPREAD, i.e. within [-0.25, 0.25)
const SPEED_SPREAD: f64 = 0.5;

/// Opacity = r * OPACITY_SPREAD + MIN_OPACITY, i.e. within [0.2, 0.7)
const MIN_OPACITY: f64 = 0.2;
const OPACITY_SPREAD: f64 = 0.5;

/// Glint highlight: inner circle radius and alpha relative to the particle
const GLINT_RADIUS_RATIO: f64 = 0.3;
const GLINT_ALPHA_RATIO: f64 = 0.8;

/// Connector line alpha at distance zero
const LINK_MAX_ALPHA: f64 = 0.1;

/// Connector line stroke width
const LINK_WIDTH: f64 = 0.5;

/// A single animated point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    pub size: f64,
    pub opacity: f64,
}

impl Particle {
    /// Seed a particle at a uniformly random spot of a `width` x `height` surface
    pub fn random<R: RandomSource + ?Sized>(width: f64, height: f64, rng: &mut R) -> Self {
        Self {
            x: rng.next_unit() * width,
            y: rng.next_unit() * height,
            size: rng.next_unit() * SIZE_SPREAD + MIN_SIZE,
            speed_x: (rng.next_unit() - 0.5) * SPEED_SPREAD,
            speed_y: (rng.next_unit() - 0.5) * SPEED_SPREAD,
            opacity: rng.next_unit() * OPACITY_SPREAD + MIN_OPACITY,
        }
    }

    /// Advance one frame inside `[0, width] x [0, height]`
    ///
    /// The speed component flips on the frame the boundary is crossed,
    /// judged on the unclamped position; the position is then clamped.
    pub fn advance(&mut self, width: f64, height: f64) {
        self.x += self.speed_x;
        self.y += self.speed_y;

        if self.x < 0.0 || self.x > width {
            self.speed_x = -self.speed_x;
        }
        if self.y < 0.0 || self.y > height {
            self.speed_y = -self.speed_y;
        }

        self.x = self.x.clamp(0.0, width);
        self.y = self.y.clamp(0.0, height);
    }

    /// Euclidean distance to another particle
    pub fn distance_to(&self, other: &Particle) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Alpha of the connector line between two points `distance` apart
///
/// Returns `None` when the pair is not strictly closer than `max_distance`.
/// Closer pairs get more opaque lines, up to 0.1 at distance zero.
pub fn link_alpha(distance: f64, max_distance: f64) -> Option<f64> {
    if distance < max_distance {
        Some(LINK_MAX_ALPHA * (1.0 - distance / max_distance))
    } else {
        None
    }
}

/// Animation loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimatorState {
    #[default]
    Running,
    Stopped,
}

/// The particle backdrop animator
///
/// Construction seeds the particles and starts in `Running`; the owner
/// calls [`ParticleField::frame`] once per display frame.
pub struct ParticleField<S: Surface = DrawList> {
    config: FieldConfig,
    surface: S,
    particles: Vec<Particle>,
    state: AnimatorState,
    frames: u64,
}

impl<S: Surface> ParticleField<S> {
    /// Bind to `surface` (already sized to the viewport) and seed the field
    pub fn new<R: RandomSource + ?Sized>(config: FieldConfig, surface: S, rng: &mut R) -> Self {
        let mut field = Self {
            config,
            surface,
            particles: Vec::new(),
            state: AnimatorState::Running,
            frames: 0,
        };
        field.seed(rng);
        field
    }

    /// Replace the whole particle set with freshly randomized particles
    fn seed<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        let (width, height) = self.surface.size();
        self.particles = (0..self.config.particle_count)
            .map(|_| Particle::random(width, height, rng))
            .collect();
    }

    /// Resize the surface and re-seed every particle
    ///
    /// Previous particle state is discarded on purpose; nothing tries to
    /// map old positions into the new bounds.
    pub fn on_resize<R: RandomSource + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) {
        self.surface.resize(width, height);
        self.seed(rng);
        tracing::debug!(width, height, count = self.particles.len(), "Particle field re-seeded");
    }

    /// Run one frame step if the animator is running
    ///
    /// Returns `true` when a frame was produced.
    pub fn frame(&mut self) -> bool {
        if self.state == AnimatorState::Stopped {
            return false;
        }
        self.step();
        true
    }

    /// Unconditional frame step: clear, move, draw particles, draw links
    fn step(&mut self) {
        let (width, height) = self.surface.size();
        self.surface.clear();

        for particle in &mut self.particles {
            particle.advance(width, height);

            self.surface
                .fill_circle(particle.x, particle.y, particle.size, particle.opacity);
            self.surface.fill_circle(
                particle.x,
                particle.y,
                particle.size * GLINT_RADIUS_RATIO,
                particle.opacity * GLINT_ALPHA_RATIO,
            );
        }

        // O(n^2) over unordered pairs; 3160 checks at the default count
        let max_distance = self.config.link_distance;
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                if let Some(alpha) = link_alpha(a.distance_to(b), max_distance) {
                    self.surface
                        .stroke_line((a.x, a.y), (b.x, b.y), LINK_WIDTH, alpha);
                }
            }
        }

        self.frames += 1;
    }

    /// Stop the animation loop; the last frame stays on the surface
    pub fn stop(&mut self) {
        if self.state == AnimatorState::Running {
            self.state = AnimatorState::Stopped;
            tracing::info!(frames = self.frames, "Particle animation stopped");
        }
    }

    /// Resume the animation loop
    pub fn start(&mut self) {
        if self.state == AnimatorState::Stopped {
            self.state = AnimatorState::Running;
            tracing::info!("Particle animation resumed");
        }
    }

    /// Toggle between running and stopped
    pub fn toggle(&mut self) {
        match self.state {
            AnimatorState::Running => self.stop(),
            AnimatorState::Stopped => self.start(),
        }
    }

    pub fn state(&self) -> AnimatorState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state() == AnimatorState::Running
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Frames produced since construction
    #[cfg(test)]
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    #[cfg(test)]
    pub fn particles_mut(&mut self) -> &mut Vec<Particle> {
        &mut self.particles
    }
}
