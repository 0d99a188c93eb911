#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`RgbFader`**: Drives one RGB LED through a queue of timed color transitions
//! - **`TransitionQueue`**: The ordered, circular list of commands plus its cursor
//! - **`TransitionCommand`**: Target color, interpolation coefficients, steps, duration, pause
//! - **`Jump`**: Bounded loop back to an earlier command
//! - **`Cursor`** / **`Tick`**: The non-blocking scheduler and what each call did
//! - **`PwmOutput`**: Trait to implement for your PWM hardware
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`FaderAction`**: Builder operations as values, for message-driven control
//!
//! Colors are `Srgb<u16>` in raw PWM units, `0..=resolution`. Interpolation is
//! linear in those units; no gamma correction is applied.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod colors;
pub mod command;
pub mod fader;
pub mod queue;
pub mod scheduler;
pub mod time;
pub mod transition;
pub mod types;

pub use command::FaderAction;
pub use fader::{FaderConfig, PwmOutput, RgbFader};
pub use queue::TransitionQueue;
pub use scheduler::{Cursor, Tick};
#[cfg(feature = "embassy")]
pub use time::EmbassyTimeSource;
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use transition::{Jump, TransitionCommand};
pub use types::{
    BLACK, Channel, Color, DEFAULT_COLOR, DEFAULT_RESOLUTION, QueueError, clamp_channel,
    clamp_color,
};
