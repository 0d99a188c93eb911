//! Color space conversion helpers.
//!
//! Provides convenience functions for building [`Color`] values from HSV
//! (Hue, Saturation, Value) or normalized RGB, scaled to a PWM resolution.

use palette::{FromColor, Hsv, Srgb};

use crate::types::Color;

/// Scales a normalized (0.0-1.0) color to `[0, resolution]`, rounding to nearest.
#[inline]
pub fn from_normalized(color: Srgb, resolution: u16) -> Color {
    let scale = |value: f32| libm::roundf(value.clamp(0.0, 1.0) * f32::from(resolution)) as u16;
    Color::new(scale(color.red), scale(color.green), scale(color.blue))
}

/// Creates a color from HSV (Hue, Saturation, Value) components.
#[inline]
pub fn hsv(hue: f32, saturation: f32, value: f32, resolution: u16) -> Color {
    let hsv = Hsv::new(hue, saturation, value);
    from_normalized(Srgb::from_color(hsv), resolution)
}

/// Creates a color from hue only (full saturation and value).
#[inline]
pub fn hue(hue: f32, resolution: u16) -> Color {
    hsv(hue, 1.0, 1.0, resolution)
}
