// Backdrop rendering module
//
// Replays the particle field's recorded draw commands onto a full-screen
// braille canvas. Surface coordinates grow downward, canvas coordinates
// grow upward, so every y is flipped against the surface height.

use crate::particles::{DrawCommand, ParticleField, Surface};
use crate::theme::{composite_alpha, link_color, particle_color, BACKDROP_RGB};
use ratatui::{
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::canvas::{Canvas, Line as CanvasLine, Points},
    Frame,
};

/// A particle reduced to a single canvas dot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub x: f64,
    pub y: f64,
    pub alpha: f64,
}

/// A connector in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub alpha: f64,
}

/// Collapse circle commands into dots
///
/// A braille dot is smaller than any particle, so a particle and its glint
/// land on the same dot; stacked circles at one center are composited.
pub fn collect_dots(commands: &[DrawCommand], height: f64) -> Vec<Dot> {
    let mut dots: Vec<Dot> = Vec::new();

    for command in commands {
        if let DrawCommand::Circle { x, y, alpha, .. } = *command {
            let y = height - y;
            match dots.last_mut() {
                Some(last) if last.x == x && last.y == y => {
                    last.alpha = composite_alpha(last.alpha, alpha);
                }
                _ => dots.push(Dot { x, y, alpha }),
            }
        }
    }

    dots
}

/// Line commands in canvas coordinates
pub fn collect_segments(commands: &[DrawCommand], height: f64) -> Vec<Segment> {
    commands
        .iter()
        .filter_map(|command| match *command {
            DrawCommand::Line { from, to, alpha, .. } => Some(Segment {
                from: (from.0, height - from.1),
                to: (to.0, height - to.1),
                alpha,
            }),
            DrawCommand::Circle { .. } => None,
        })
        .collect()
}

pub fn render_backdrop(f: &mut Frame, area: Rect, field: &ParticleField) {
    let (width, height) = field.surface().size();
    if area.width == 0 || area.height == 0 || width <= 0.0 || height <= 0.0 {
        return;
    }

    let commands = field.surface().commands();
    let dots = collect_dots(commands, height);
    let segments = collect_segments(commands, height);
    let (r, g, b) = BACKDROP_RGB;

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .background_color(Color::Rgb(r, g, b))
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(move |ctx| {
            // Connectors go on the lower layer so they never recolor a particle's cell
            for segment in &segments {
                ctx.draw(&CanvasLine {
                    x1: segment.from.0,
                    y1: segment.from.1,
                    x2: segment.to.0,
                    y2: segment.to.1,
                    color: link_color(segment.alpha),
                });
            }
            ctx.layer();

            for dot in &dots {
                ctx.draw(&Points {
                    coords: &[(dot.x, dot.y)],
                    color: particle_color(dot.alpha),
                });
            }
        });

    f.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glint_merges_into_particle_dot() {
        let commands = [
            DrawCommand::Circle {
                x: 10.0,
                y: 20.0,
                radius: 2.0,
                alpha: 0.5,
            },
            DrawCommand::Circle {
                x: 10.0,
                y: 20.0,
                radius: 0.6,
                alpha: 0.4,
            },
            DrawCommand::Circle {
                x: 30.0,
                y: 40.0,
                radius: 1.5,
                alpha: 0.2,
            },
        ];

        let dots = collect_dots(&commands, 100.0);
        assert_eq!(dots.len(), 2);
        assert_eq!((dots[0].x, dots[0].y), (10.0, 80.0));
        assert!((dots[0].alpha - 0.7).abs() < 1e-9);
        assert_eq!(dots[1].alpha, 0.2);
    }

    #[test]
    fn test_segments_are_flipped() {
        let commands = [
            DrawCommand::Line {
                from: (0.0, 0.0),
                to: (50.0, 100.0),
                width: 0.5,
                alpha: 0.05,
            },
            DrawCommand::Circle {
                x: 1.0,
                y: 1.0,
                radius: 1.0,
                alpha: 0.5,
            },
        ];

        let segments = collect_segments(&commands, 100.0);
        assert_eq!(
            segments,
            vec![Segment {
                from: (0.0, 100.0),
                to: (50.0, 0.0),
                alpha: 0.05,
            }]
        );
    }

    #[test]
    fn test_empty_commands() {
        assert!(collect_dots(&[], 10.0).is_empty());
        assert!(collect_segments(&[], 10.0).is_empty());
    }
}
