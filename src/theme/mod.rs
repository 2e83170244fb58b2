// Theme module - Color constants and theme re-exports
//
// This module provides the color palette for pulseboard's dashboard:
// a dark night-sky backdrop with bright accent colors for series, slices
// and trend indicators.

pub mod default;

use ratatui::style::Color;

/// Primary series / positive trend
/// RGB: (74, 222, 128)
pub const GRASS_GREEN: Color = Color::Rgb(74, 222, 128);

/// Secondary series
/// RGB: (96, 165, 250)
pub const SKY_BLUE: Color = Color::Rgb(96, 165, 250);

/// Third slice / negative trend
/// RGB: (244, 114, 182)
pub const ORCHID_PINK: Color = Color::Rgb(244, 114, 182);

/// Fourth slice
/// RGB: (251, 191, 36)
pub const AMBER: Color = Color::Rgb(251, 191, 36);

/// Fifth slice, borders and titles
/// RGB: (167, 139, 250)
pub const VIOLET: Color = Color::Rgb(167, 139, 250);

/// Main text color
/// RGB: (241, 245, 249)
pub const SNOW_WHITE: Color = Color::Rgb(241, 245, 249);

/// Secondary text, axis labels, inactive controls
/// RGB: (148, 163, 184)
pub const SLATE: Color = Color::Rgb(148, 163, 184);

/// Backdrop the particles are blended against, as an RGB tuple
pub const BACKDROP_RGB: (u8, u8, u8) = (15, 23, 42);

/// Particle and connector color at full opacity, as an RGB tuple
pub const PARTICLE_RGB: (u8, u8, u8) = (255, 255, 255);

// Re-export theme functions for convenient access
pub use default::*;
