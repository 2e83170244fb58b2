// Default theme functions
//
// Color helpers shared by the UI panels: alpha blending for the particle
// backdrop and trend coloring for the stat cards.

use ratatui::style::Color;

use super::{BACKDROP_RGB, GRASS_GREEN, ORCHID_PINK, PARTICLE_RGB, SKY_BLUE, SLATE};
use crate::metrics::Trend;

/// Terminal cells cannot blend, so faint connector alphas are boosted by
/// this factor before being mapped to a color
pub const LINK_ALPHA_GAIN: f32 = 4.0;

/// Interpolate between two RGB colors based on a ratio (0.0 ~ 1.0)
///
/// # Arguments
/// * `color1` - Starting color as (r, g, b) tuple
/// * `color2` - Ending color as (r, g, b) tuple
/// * `ratio` - Interpolation ratio (0.0 = color1, 1.0 = color2)
///
/// # Returns
/// Interpolated Color::Rgb value
pub fn interpolate_color(color1: (u8, u8, u8), color2: (u8, u8, u8), ratio: f32) -> Color {
    let ratio = ratio.clamp(0.0, 1.0);
    let r = (color1.0 as f32 + (color2.0 as f32 - color1.0 as f32) * ratio) as u8;
    let g = (color1.1 as f32 + (color2.1 as f32 - color1.1 as f32) * ratio) as u8;
    let b = (color1.2 as f32 + (color2.2 as f32 - color1.2 as f32) * ratio) as u8;
    Color::Rgb(r, g, b)
}

/// Color of a particle circle drawn with `alpha` over the backdrop
pub fn particle_color(alpha: f64) -> Color {
    interpolate_color(BACKDROP_RGB, PARTICLE_RGB, alpha as f32)
}

/// Alpha of two fills stacked on the same spot ("source over")
pub fn composite_alpha(below: f64, above: f64) -> f64 {
    1.0 - (1.0 - below.clamp(0.0, 1.0)) * (1.0 - above.clamp(0.0, 1.0))
}

/// Color of a connector line drawn with `alpha` over the backdrop
pub fn link_color(alpha: f64) -> Color {
    interpolate_color(BACKDROP_RGB, PARTICLE_RGB, alpha as f32 * LINK_ALPHA_GAIN)
}

/// Stat card change indicator color
pub fn trend_color(trend: Trend) -> Color {
    match trend {
        Trend::Positive => GRASS_GREEN,
        Trend::Negative => ORCHID_PINK,
    }
}

/// Color of a period selector button
pub fn period_color(active: bool) -> Color {
    if active {
        SKY_BLUE
    } else {
        SLATE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate_color_endpoints() {
        assert_eq!(
            interpolate_color((0, 0, 0), (200, 100, 50), 0.0),
            Color::Rgb(0, 0, 0)
        );
        assert_eq!(
            interpolate_color((0, 0, 0), (200, 100, 50), 1.0),
            Color::Rgb(200, 100, 50)
        );
        assert_eq!(
            interpolate_color((0, 0, 0), (200, 100, 50), 0.5),
            Color::Rgb(100, 50, 25)
        );
    }

    #[test]
    fn test_interpolate_color_clamps_ratio() {
        assert_eq!(
            interpolate_color((10, 10, 10), (20, 20, 20), 3.0),
            Color::Rgb(20, 20, 20)
        );
        assert_eq!(
            interpolate_color((10, 10, 10), (20, 20, 20), -1.0),
            Color::Rgb(10, 10, 10)
        );
    }

    #[test]
    fn test_particle_color_brightens_with_alpha() {
        let faint = particle_color(0.2);
        let bright = particle_color(0.7);
        match (faint, bright) {
            (Color::Rgb(r1, _, _), Color::Rgb(r2, _, _)) => assert!(r2 > r1),
            _ => panic!("expected RGB colors"),
        }
    }

    #[test]
    fn test_link_color_is_boosted() {
        assert_ne!(link_color(0.05), particle_color(0.05));
        assert_eq!(link_color(0.0), Color::Rgb(15, 23, 42));
    }

    #[test]
    fn test_composite_alpha() {
        assert!((composite_alpha(0.5, 0.4) - 0.7).abs() < 1e-9);
        assert_eq!(composite_alpha(0.0, 0.0), 0.0);
        assert_eq!(composite_alpha(1.0, 0.3), 1.0);
    }

    #[test]
    fn test_trend_color() {
        assert_eq!(trend_color(Trend::Positive), GRASS_GREEN);
        assert_eq!(trend_color(Trend::Negative), ORCHID_PINK);
    }
}
