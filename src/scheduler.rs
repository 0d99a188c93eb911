//! Cooperative, time-driven stepping through a list of transition commands.
//!
//! [`Cursor::advance`] is the whole scheduler. It takes the current instant
//! and the commands, updates the cursor and the jump counters of the
//! commands, and reports what to emit without touching any output. It never
//! sleeps and does a constant amount of work per call, so it can be driven
//! from a busy main loop, a timer task, or a test with a synthetic clock.

use crate::time::{TimeDuration, TimeInstant};
use crate::transition::TransitionCommand;
use crate::types::Color;

/// What a single call to [`Cursor::advance`] did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick {
    /// No commands to run.
    Idle,

    /// Waiting for the next step or completion boundary.
    Hold,

    /// An interpolation step was emitted.
    Step {
        /// Index of the active command.
        command: usize,
        /// 1-based step that produced `color`.
        step: u32,
        /// Interpolated color.
        color: Color,
    },

    /// The active command finished and its target color was emitted.
    Complete {
        /// Index of the command that finished.
        command: usize,
        /// The command's target color.
        color: Color,
        /// Index of the command that runs next.
        next: usize,
        /// True if `next` was reached through the command's jump.
        jumped: bool,
    },
}

impl Tick {
    /// Color to write to the output, if this tick emitted one.
    pub fn color(&self) -> Option<Color> {
        match self {
            Tick::Step { color, .. } | Tick::Complete { color, .. } => Some(*color),
            Tick::Idle | Tick::Hold => None,
        }
    }
}

/// Execution position within a command list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<I> {
    command_index: usize,
    step_index: u32,
    segment_start: Option<I>,
}

impl<I> Default for Cursor<I> {
    fn default() -> Self {
        Self {
            command_index: 0,
            step_index: 1,
            segment_start: None,
        }
    }
}

impl<I: TimeInstant> Cursor<I> {
    /// Creates a cursor positioned before the first command.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the command currently executing.
    pub fn command_index(&self) -> usize {
        self.command_index
    }

    /// 1-based index of the next step to emit within the active command.
    pub fn step_index(&self) -> u32 {
        self.step_index
    }

    /// When the active command began, or `None` if it has not started yet.
    pub fn segment_start(&self) -> Option<I> {
        self.segment_start
    }

    /// Moves back to the first command and forgets any segment in progress.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advances execution to `now`.
    ///
    /// Updates this cursor and, when a jump fires or runs out of budget, the
    /// finishing command's jump counter.
    ///
    /// A command is complete once more than `duration + pause` milliseconds
    /// have passed since it started. Completion always emits the exact target
    /// color and takes precedence over a step falling on the same boundary.
    /// Gaps longer than the remaining time snap straight to completion.
    pub fn advance(&mut self, commands: &mut [TransitionCommand], now: I, resolution: u16) -> Tick {
        let last_index = match commands.len() {
            0 => return Tick::Idle,
            len => len - 1,
        };

        if self.command_index > last_index {
            self.reset();
        }

        let start = match self.segment_start {
            Some(start) => start,
            None => {
                self.segment_start = Some(now);
                self.step_index = 1;
                now
            }
        };
        let elapsed = now.duration_since(start).as_millis();

        let index = self.command_index;
        let command = &mut commands[index];

        if elapsed > command.total_ms() {
            let color = command.target();
            self.step_index = 1;
            self.segment_start = None;

            if let Some(jump) = command.jump_mut() {
                if jump.has_budget() {
                    jump.counter += 1;
                    self.command_index = jump.target;

                    #[cfg(feature = "defmt")]
                    defmt::trace!(
                        "command {} jumped to {} ({}/{})",
                        index,
                        jump.target,
                        jump.counter,
                        jump.repeat
                    );

                    return Tick::Complete {
                        command: index,
                        color,
                        next: jump.target,
                        jumped: true,
                    };
                }
                jump.counter = 0;
            }

            self.command_index = if index < last_index { index + 1 } else { 0 };

            #[cfg(feature = "defmt")]
            defmt::trace!("command {} complete, next {}", index, self.command_index);

            return Tick::Complete {
                command: index,
                color,
                next: self.command_index,
                jumped: false,
            };
        }

        let step = self.step_index;
        if step <= command.steps() && elapsed > command.step_interval_ms() * u64::from(step) {
            self.step_index += 1;
            return Tick::Step {
                command: index,
                step,
                color: command.color_at_step(step, resolution),
            };
        }

        Tick::Hold
    }
}
