//! A single queued color transition.
//!
//! Interpolation is linear in raw channel units. Each command carries one
//! coefficient per channel, fixed when the command is created from the color
//! it starts at, so the scheduler never has to look at neighbouring commands
//! while it runs.

use crate::types::{Channel, Color, clamp_color};

/// A bounded backward redirection of the execution cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Jump {
    /// Index of the command to continue with.
    pub target: usize,

    /// How many times the jump may fire before execution falls through.
    pub repeat: u16,

    /// How many times the jump has fired in the current pass.
    pub counter: u16,
}

impl Jump {
    /// Creates a jump with a fresh counter.
    #[inline]
    pub const fn new(target: usize, repeat: u16) -> Self {
        Self {
            target,
            repeat,
            counter: 0,
        }
    }

    /// Returns true if the jump may fire again.
    #[inline]
    pub fn has_budget(&self) -> bool {
        self.counter < self.repeat
    }
}

/// One queued transition: target color, interpolation, timing and optional jump.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionCommand {
    target: Color,
    coefficients: [f64; 3],
    steps: u32,
    duration_ms: u64,
    pause_ms: u64,
    jump: Option<Jump>,
}

impl TransitionCommand {
    /// Creates a command that moves from `reference` to `target`.
    ///
    /// `target` is clamped to `[0, resolution]`. The requested step count is
    /// capped at the largest per-channel distance, since more steps than
    /// units would only repeat values. That capped count is both the stored
    /// step count and the coefficient denominator.
    ///
    /// # Returns
    /// * `Some(command)` - At least one channel changes and `steps` is non-zero
    /// * `None` - `target` equals `reference` in every channel, or `steps` is zero
    pub fn between(
        reference: Color,
        target: Color,
        steps: u32,
        duration_ms: u64,
        pause_ms: u64,
        resolution: u16,
    ) -> Option<Self> {
        let target = clamp_color(target, resolution);
        let deltas = Channel::ALL.map(|c| i32::from(c.of(target)) - i32::from(c.of(reference)));

        let max_delta = deltas.iter().map(|d| d.unsigned_abs()).max().unwrap_or(0);
        let steps = steps.min(max_delta);
        if steps == 0 {
            return None;
        }

        let coefficients = deltas.map(|d| f64::from(d) / f64::from(steps));

        Some(Self {
            target,
            coefficients,
            steps,
            duration_ms,
            pause_ms,
            jump: None,
        })
    }

    /// Color emitted for 1-based `step`, rounding each channel up.
    ///
    /// At `step == steps()` this is exactly the target color.
    pub fn color_at_step(&self, step: u32, resolution: u16) -> Color {
        let remaining = f64::from(self.steps.saturating_sub(step));
        let [red, green, blue] = Channel::ALL.map(|c| {
            let value = libm::ceil(f64::from(c.of(self.target)) - remaining * self.coefficient(c));
            value.clamp(0.0, f64::from(resolution)) as u16
        });
        Color::new(red, green, blue)
    }

    /// Milliseconds between consecutive steps.
    #[inline]
    pub fn step_interval_ms(&self) -> u64 {
        self.duration_ms / u64::from(self.steps)
    }

    /// Milliseconds from start until the command completes.
    #[inline]
    pub fn total_ms(&self) -> u64 {
        self.duration_ms.saturating_add(self.pause_ms)
    }

    /// Target color, already clamped.
    pub fn target(&self) -> Color {
        self.target
    }

    /// Per-channel change applied by each step.
    pub fn coefficient(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Red => self.coefficients[0],
            Channel::Green => self.coefficients[1],
            Channel::Blue => self.coefficients[2],
        }
    }

    /// Number of interpolation steps (at least one).
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Time to traverse all steps.
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Hold time at the target color after the duration elapses.
    pub fn pause_ms(&self) -> u64 {
        self.pause_ms
    }

    /// Jump configured on this command, if any.
    pub fn jump(&self) -> Option<Jump> {
        self.jump
    }

    pub(crate) fn set_pause_ms(&mut self, pause_ms: u64) {
        self.pause_ms = pause_ms;
    }

    pub(crate) fn set_jump(&mut self, jump: Jump) {
        self.jump = Some(jump);
    }

    pub(crate) fn jump_mut(&mut self) -> Option<&mut Jump> {
        self.jump.as_mut()
    }
}
