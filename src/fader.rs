//! RGB fader driving three PWM channels from a transition queue.
//!
//! Provides [`RgbFader`], which owns the PWM output and a [`TransitionQueue`],
//! exposes the operations that build color programs, and writes interpolated
//! colors as [`execute`](RgbFader::execute) is called. Also defines the
//! [`PwmOutput`] trait for hardware abstraction.

use core::fmt::Write;

use crate::queue::TransitionQueue;
use crate::scheduler::Tick;
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::{
    BLACK, Channel, Color, DEFAULT_COLOR, DEFAULT_RESOLUTION, QueueError, clamp_color,
    clamp_resolution,
};

/// Trait for abstracting three-channel PWM hardware.
///
/// Implement this for your timer/PWM peripheral to let the fader drive it.
pub trait PwmOutput {
    /// Configures the PWM range so that `resolution` is full duty.
    ///
    /// Called once when the fader is created. The default does nothing, for
    /// hardware whose range is fixed elsewhere.
    fn set_range(&mut self, resolution: u16) {
        let _ = resolution;
    }

    /// Writes a duty value in `[0, resolution]` to one channel.
    ///
    /// Handle any hardware errors internally - this method cannot fail.
    fn write(&mut self, channel: Channel, value: u16);
}

/// Runtime configuration for an [`RgbFader`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaderConfig {
    /// Maximum PWM value. Zero is raised to one.
    pub resolution: u16,

    /// Color shown at construction and after [`RgbFader::reset`].
    pub default_color: Color,
}

impl Default for FaderConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            default_color: DEFAULT_COLOR,
        }
    }
}

/// Fades a single RGB LED through a queue of timed color transitions.
///
/// Builder methods replace or extend the queue; [`execute`](Self::execute)
/// must be called repeatedly (every loop iteration, or from a fast periodic
/// task) to make progress. Nothing here blocks or sleeps.
///
/// Methods that replace the queue (`change_color`, `fade*`, `blink`) discard
/// any transition in progress. Methods that extend it (`add_*`, `pause`,
/// `jump_to`) act on the most recently appended command.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `P` - PWM output implementation type
/// * `T` - Time source implementation type
/// * `N` - Maximum number of queued commands
pub struct RgbFader<'t, I: TimeInstant, P: PwmOutput, T: TimeSource<I>, const N: usize> {
    output: P,
    time_source: &'t T,
    queue: TransitionQueue<I, N>,
    current_color: Color,
    default_color: Color,
}

impl<'t, I: TimeInstant, P: PwmOutput, T: TimeSource<I>, const N: usize>
    RgbFader<'t, I, P, T, N>
{
    /// Creates a fader with the given resolution, showing [`DEFAULT_COLOR`].
    pub fn new(output: P, time_source: &'t T, resolution: u16) -> Self {
        Self::with_config(
            output,
            time_source,
            FaderConfig {
                resolution,
                ..FaderConfig::default()
            },
        )
    }

    /// Creates a fader from a full configuration.
    ///
    /// Sets the output range and writes the default color.
    pub fn with_config(mut output: P, time_source: &'t T, config: FaderConfig) -> Self {
        let resolution = clamp_resolution(config.resolution);
        output.set_range(resolution);

        let mut fader = Self {
            output,
            time_source,
            queue: TransitionQueue::new(resolution),
            current_color: BLACK,
            default_color: clamp_color(config.default_color, resolution),
        };
        fader.set_color(fader.default_color);
        fader
    }

    /// Runs one scheduler step, writing a color if one is due.
    ///
    /// Returns what the scheduler did, mostly useful for diagnostics and tests.
    pub fn execute(&mut self) -> Tick {
        let now = self.time_source.now();
        let tick = self.queue.tick(now);
        if let Some(color) = tick.color() {
            self.set_color(color);
        }
        tick
    }

    /// Queues an instant change to `color`.
    ///
    /// On an empty queue the color stays on until more transitions are added.
    /// Otherwise it shows after the previous transition, for as long as a
    /// later [`pause`](Self::pause) says.
    pub fn add_color(&mut self, color: Color) -> Result<(), QueueError> {
        self.append(color, 1, 0, 0)
    }

    /// Queues an instant change to `color`, held for `pause`.
    pub fn add_color_with_pause(&mut self, color: Color, pause: I::Duration) -> Result<(), QueueError> {
        self.append(color, 1, 0, pause.as_millis())
    }

    /// Replaces every transition with an instant change to `color`.
    pub fn change_color(&mut self, color: Color) -> Result<(), QueueError> {
        self.queue.clear();
        self.add_color(color)
    }

    /// Replaces every transition with a fade from `from` to `to` and back,
    /// using the finest step count.
    pub fn fade(&mut self, from: Color, to: Color, duration: I::Duration) -> Result<(), QueueError> {
        self.fade_with_steps(from, to, self.resolution().into(), duration)
    }

    /// Replaces every transition with a fade from `from` to `to` and back,
    /// each leg taking `duration` in `steps` steps.
    pub fn fade_with_steps(
        &mut self,
        from: Color,
        to: Color,
        steps: u32,
        duration: I::Duration,
    ) -> Result<(), QueueError> {
        self.queue.clear();
        self.set_color(from);
        self.append(to, steps, duration.as_millis(), 0)?;
        self.append(from, steps, duration.as_millis(), 0)
    }

    /// Queues a fade from the last queued color to `color`, using the finest step count.
    pub fn add_fade(&mut self, color: Color, duration: I::Duration) -> Result<(), QueueError> {
        self.add_fade_with_steps(color, self.resolution().into(), duration)
    }

    /// Queues a fade from the last queued color to `color` in `steps` steps.
    pub fn add_fade_with_steps(
        &mut self,
        color: Color,
        steps: u32,
        duration: I::Duration,
    ) -> Result<(), QueueError> {
        self.append(color, steps, duration.as_millis(), 0)
    }

    /// Replaces every transition with a fade from black to `color`.
    pub fn fade_in(&mut self, color: Color, duration: I::Duration) -> Result<(), QueueError> {
        self.fade_in_with_steps(color, self.resolution().into(), duration)
    }

    /// Replaces every transition with a fade from black to `color` in `steps` steps.
    pub fn fade_in_with_steps(
        &mut self,
        color: Color,
        steps: u32,
        duration: I::Duration,
    ) -> Result<(), QueueError> {
        self.queue.clear();
        self.set_color(BLACK);
        self.append(color, steps, duration.as_millis(), 0)
    }

    /// Replaces every transition with a fade from `color` to black.
    pub fn fade_out(&mut self, color: Color, duration: I::Duration) -> Result<(), QueueError> {
        self.fade_out_with_steps(color, self.resolution().into(), duration)
    }

    /// Replaces every transition with a fade from `color` to black in `steps` steps.
    pub fn fade_out_with_steps(
        &mut self,
        color: Color,
        steps: u32,
        duration: I::Duration,
    ) -> Result<(), QueueError> {
        self.queue.clear();
        self.set_color(color);
        self.append(BLACK, steps, duration.as_millis(), 0)
    }

    /// Replaces every transition with `color` and black alternating every `period`.
    pub fn blink(&mut self, color: Color, period: I::Duration) -> Result<(), QueueError> {
        self.queue.clear();
        self.set_color(color);
        self.append(BLACK, 1, period.as_millis(), 0)?;
        self.append(color, 1, period.as_millis(), 0)
    }

    /// Holds the last queued color for `duration` before the next transition.
    pub fn pause(&mut self, duration: I::Duration) {
        self.queue.set_pause(duration.as_millis());
    }

    /// After the last queued transition, jumps back to `index` `times` times.
    ///
    /// Ignored if `index` is not a queued command.
    pub fn jump_to(&mut self, index: usize, times: u16) {
        self.queue.set_jump(index, times);
    }

    /// Removes every transition. The LED keeps its current color.
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    /// Removes every transition and shows the default color.
    pub fn reset(&mut self) {
        self.queue.clear();
        self.set_color(self.default_color);
    }

    /// Writes one line per queued command to `sink`.
    pub fn info<W: Write>(&self, sink: &mut W) -> core::fmt::Result {
        self.queue.info(sink)
    }

    /// Returns the color currently written to the output.
    pub fn current_color(&self) -> Color {
        self.current_color
    }

    /// Returns the maximum channel value.
    pub fn resolution(&self) -> u16 {
        self.queue.resolution()
    }

    /// Returns the transition queue.
    pub fn queue(&self) -> &TransitionQueue<I, N> {
        &self.queue
    }

    /// Returns true if there is nothing to execute.
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns a reference to the PWM output.
    pub fn output(&self) -> &P {
        &self.output
    }

    fn append(&mut self, color: Color, steps: u32, duration_ms: u64, pause_ms: u64) -> Result<(), QueueError> {
        self.queue
            .append(color, steps, duration_ms, pause_ms, self.current_color)
    }

    fn set_color(&mut self, color: Color) {
        let color = clamp_color(color, self.resolution());
        for channel in Channel::ALL {
            self.output.write(channel, channel.of(color));
        }
        self.current_color = color;
    }
}
