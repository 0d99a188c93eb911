//! Core types shared by the queue, the scheduler and the fader.

use palette::Srgb;

/// A color in raw PWM units, each channel in `[0, resolution]`.
pub type Color = Srgb<u16>;

/// All channels off.
pub const BLACK: Color = Srgb::new(0, 0, 0);

/// Color written at construction and by `reset`.
pub const DEFAULT_COLOR: Color = Srgb::new(50, 0, 0);

/// PWM ceiling used by `FaderConfig::default`.
pub const DEFAULT_RESOLUTION: u16 = 255;

/// One of the three PWM outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// Red output.
    Red,
    /// Green output.
    Green,
    /// Blue output.
    Blue,
}

impl Channel {
    /// Channels in the order they are written.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Reads this channel's value out of `color`.
    #[inline]
    pub fn of(self, color: Color) -> u16 {
        match self {
            Channel::Red => color.red,
            Channel::Green => color.green,
            Channel::Blue => color.blue,
        }
    }
}

/// Bounds a single channel value to `[0, resolution]`.
#[inline]
pub fn clamp_channel(value: u16, resolution: u16) -> u16 {
    value.min(resolution)
}

/// Bounds every channel of `color` to `[0, resolution]`.
#[inline]
pub fn clamp_color(color: Color, resolution: u16) -> Color {
    Srgb::new(
        clamp_channel(color.red, resolution),
        clamp_channel(color.green, resolution),
        clamp_channel(color.blue, resolution),
    )
}

/// Raises a resolution of zero to one so every channel has a usable range.
#[inline]
pub fn clamp_resolution(resolution: u16) -> u16 {
    resolution.max(1)
}

/// Queue mutation errors.
///
/// Degenerate requests (zero-delta appends, pause or jump on an empty queue,
/// out-of-range jump targets) are ignored rather than reported; running out
/// of room in the fixed-capacity queue is the only failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum QueueError {
    /// Queue capacity exceeded.
    CapacityExceeded {
        /// Maximum number of commands the queue can hold.
        capacity: usize,
    },
}

impl core::fmt::Display for QueueError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            QueueError::CapacityExceeded { capacity } => {
                write!(f, "transition queue is full ({} commands)", capacity)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for QueueError {}
