//! Message-based control for faders.
//!
//! Every builder operation on [`RgbFader`] has a matching [`FaderAction`], so
//! color programs can be sent over a channel or decoded from a protocol and
//! applied with [`RgbFader::handle_action`].

use crate::fader::{PwmOutput, RgbFader};
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::{Color, QueueError};

/// Actions for controlling faders.
///
/// `steps: None` selects the finest step count, like the builder methods
/// without a `_with_steps` suffix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FaderAction<D: TimeDuration> {
    /// Replace the queue with an instant change.
    ChangeColor(Color),
    /// Queue an instant change, optionally held.
    AddColor { color: Color, pause: Option<D> },
    /// Replace the queue with a fade there and back.
    Fade {
        from: Color,
        to: Color,
        steps: Option<u32>,
        duration: D,
    },
    /// Queue a fade from the last queued color.
    AddFade {
        color: Color,
        steps: Option<u32>,
        duration: D,
    },
    /// Replace the queue with a fade from black.
    FadeIn {
        color: Color,
        steps: Option<u32>,
        duration: D,
    },
    /// Replace the queue with a fade to black.
    FadeOut {
        color: Color,
        steps: Option<u32>,
        duration: D,
    },
    /// Replace the queue with a blink.
    Blink { color: Color, period: D },
    /// Hold the last queued color.
    Pause(D),
    /// Loop back from the last queued command.
    JumpTo { index: usize, times: u16 },
    /// Drop every transition.
    Clear,
    /// Drop every transition and show the default color.
    Reset,
}

impl<'t, I: TimeInstant, P: PwmOutput, T: TimeSource<I>, const N: usize>
    RgbFader<'t, I, P, T, N>
{
    /// Applies an action by dispatching to the matching builder method.
    ///
    /// # Errors
    /// * `CapacityExceeded` - The action needed more room than the queue has
    pub fn handle_action(&mut self, action: FaderAction<I::Duration>) -> Result<(), QueueError> {
        let finest = u32::from(self.resolution());

        match action {
            FaderAction::ChangeColor(color) => self.change_color(color),
            FaderAction::AddColor { color, pause } => match pause {
                Some(pause) => self.add_color_with_pause(color, pause),
                None => self.add_color(color),
            },
            FaderAction::Fade {
                from,
                to,
                steps,
                duration,
            } => self.fade_with_steps(from, to, steps.unwrap_or(finest), duration),
            FaderAction::AddFade {
                color,
                steps,
                duration,
            } => self.add_fade_with_steps(color, steps.unwrap_or(finest), duration),
            FaderAction::FadeIn {
                color,
                steps,
                duration,
            } => self.fade_in_with_steps(color, steps.unwrap_or(finest), duration),
            FaderAction::FadeOut {
                color,
                steps,
                duration,
            } => self.fade_out_with_steps(color, steps.unwrap_or(finest), duration),
            FaderAction::Blink { color, period } => self.blink(color, period),
            FaderAction::Pause(duration) => {
                self.pause(duration);
                Ok(())
            }
            FaderAction::JumpTo { index, times } => {
                self.jump_to(index, times);
                Ok(())
            }
            FaderAction::Clear => {
                self.clear();
                Ok(())
            }
            FaderAction::Reset => {
                self.reset();
                Ok(())
            }
        }
    }
}
