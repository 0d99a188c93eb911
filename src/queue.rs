//! Fixed-capacity queue of transition commands plus its execution cursor.

use core::fmt::Write;

use crate::scheduler::{Cursor, Tick};
use crate::time::TimeInstant;
use crate::transition::{Jump, TransitionCommand};
use crate::types::{Color, QueueError, clamp_resolution};
use heapless::Vec;

/// An ordered, circular sequence of transition commands.
///
/// Commands are only ever appended or cleared all at once. The queue also
/// owns the cursor that [`tick`](Self::tick) moves through them.
///
/// # Type Parameters
/// * `I` - Time instant type used to mark when the active command started
/// * `N` - Maximum number of commands this queue can hold
#[derive(Debug, Clone)]
pub struct TransitionQueue<I, const N: usize> {
    commands: Vec<TransitionCommand, N>,
    cursor: Cursor<I>,
    resolution: u16,
}

impl<I: TimeInstant, const N: usize> TransitionQueue<I, N> {
    /// Creates an empty queue for channels in `[0, resolution]`.
    pub fn new(resolution: u16) -> Self {
        Self {
            commands: Vec::new(),
            cursor: Cursor::new(),
            resolution: clamp_resolution(resolution),
        }
    }

    /// Appends a transition to `target`.
    ///
    /// The transition starts from the last queued target, or from `current`
    /// (the live output color) when the queue is empty. A target equal to
    /// that starting color in every channel is dropped without error.
    ///
    /// # Errors
    /// * `CapacityExceeded` - The queue already holds `N` commands
    pub fn append(
        &mut self,
        target: Color,
        steps: u32,
        duration_ms: u64,
        pause_ms: u64,
        current: Color,
    ) -> Result<(), QueueError> {
        let reference = self.tail_color().unwrap_or(current);

        let Some(command) = TransitionCommand::between(
            reference,
            target,
            steps,
            duration_ms,
            pause_ms,
            self.resolution,
        ) else {
            #[cfg(feature = "defmt")]
            defmt::trace!("dropped transition with no color change");
            return Ok(());
        };

        self.commands.push(command).map_err(|_| {
            #[cfg(feature = "defmt")]
            defmt::warn!("transition queue full ({} commands)", N);
            QueueError::CapacityExceeded { capacity: N }
        })
    }

    /// Sets the hold time of the most recently appended command.
    ///
    /// Does nothing if the queue is empty.
    pub fn set_pause(&mut self, pause_ms: u64) {
        match self.commands.last_mut() {
            Some(command) => command.set_pause_ms(pause_ms),
            None => {
                #[cfg(feature = "defmt")]
                defmt::debug!("pause ignored: queue is empty");
            }
        }
    }

    /// Makes the most recently appended command jump back to `target`
    /// up to `repeat` times before execution continues past it.
    ///
    /// Ignored if `target` is not an index into the queue, which also covers
    /// an empty queue. Any previous jump on that command is replaced and its
    /// counter restarts.
    pub fn set_jump(&mut self, target: usize, repeat: u16) {
        if target >= self.commands.len() {
            #[cfg(feature = "defmt")]
            defmt::debug!("jump to {} ignored: queue has {} commands", target, self.commands.len());
            return;
        }

        if let Some(command) = self.commands.last_mut() {
            command.set_jump(Jump::new(target, repeat));
        }
    }

    /// Removes every command and rewinds the cursor.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.cursor.reset();
    }

    /// Advances the active command to `now`. See [`Cursor::advance`].
    pub fn tick(&mut self, now: I) -> Tick {
        self.cursor.advance(&mut self.commands, now, self.resolution)
    }

    /// Target color of the last queued command.
    pub fn tail_color(&self) -> Option<Color> {
        self.commands.last().map(TransitionCommand::target)
    }

    /// Writes one line per command: index, target color, steps, duration and pause.
    ///
    /// Reading the queue this way never affects scheduling.
    pub fn info<W: Write>(&self, sink: &mut W) -> core::fmt::Result {
        for (index, command) in self.commands.iter().enumerate() {
            let target = command.target();
            writeln!(
                sink,
                "index: {} - {}, {}, {} - {}, {} {}",
                index,
                target.red,
                target.green,
                target.blue,
                command.steps(),
                command.duration_ms(),
                command.pause_ms()
            )?;
        }
        Ok(())
    }

    /// Returns the command at `index`.
    pub fn get(&self, index: usize) -> Option<&TransitionCommand> {
        self.commands.get(index)
    }

    /// All queued commands in execution order.
    pub fn commands(&self) -> &[TransitionCommand] {
        &self.commands
    }

    /// Current execution position.
    pub fn cursor(&self) -> &Cursor<I> {
        &self.cursor
    }

    /// Number of queued commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if no commands are queued.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Maximum channel value.
    pub fn resolution(&self) -> u16 {
        self.resolution
    }

    /// Maximum number of commands.
    pub const fn capacity(&self) -> usize {
        N
    }
}
