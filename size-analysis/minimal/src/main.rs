#![no_std]
#![no_main]

use cortex_m_rt::entry;
use panic_halt as _;
use rgb_fader::{
    Channel, Color, FaderAction, PwmOutput, RgbFader, TimeDuration, TimeInstant, TimeSource,
};

// ============================================================================
// Minimal Time Types
// ============================================================================

/// Minimal 32-bit millisecond duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration32(u32);

impl TimeDuration for Duration32 {
    fn as_millis(&self) -> u64 {
        self.0 as u64
    }
}

/// Minimal 32-bit millisecond instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Instant32(u32);

impl TimeInstant for Instant32 {
    type Duration = Duration32;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        Duration32(self.0.saturating_sub(earlier.0))
    }
}

// ============================================================================
// Minimal PWM Implementation
// ============================================================================

/// Zero-size PWM implementation for measuring library overhead
pub struct MinimalPwm;

impl PwmOutput for MinimalPwm {
    fn write(&mut self, channel: Channel, value: u16) {
        core::hint::black_box((channel, value));
    }
}

// ============================================================================
// Minimal TimeSource Implementation
// ============================================================================

pub struct MinimalTimeSource;

impl TimeSource<Instant32> for MinimalTimeSource {
    fn now(&self) -> Instant32 {
        Instant32(core::hint::black_box(0))
    }
}

// This function uses the library to prevent optimizer from removing code
#[inline(never)]
fn exercise_faders() {
    let time_source = MinimalTimeSource;

    // 4-command queue driven through the builder surface
    let mut fader = RgbFader::<_, _, _, 4>::new(MinimalPwm, &time_source, 1023);
    let _ = fader.fade_in(Color::new(1023, 0, 0), Duration32(1000));
    let _ = fader.add_fade_with_steps(Color::new(0, 0, 1023), 64, Duration32(500));
    fader.pause(Duration32(250));
    fader.jump_to(0, 3);
    let _ = fader.execute();
    core::hint::black_box(&fader);

    // 16-command queue driven through actions
    let mut fader = RgbFader::<_, _, _, 16>::new(MinimalPwm, &time_source, 255);
    let _ = fader.handle_action(FaderAction::Blink {
        color: Color::new(0, 255, 0),
        period: Duration32(500),
    });
    let _ = fader.handle_action(FaderAction::Reset);
    let _ = fader.execute();
    core::hint::black_box(&fader);
}

#[entry]
fn main() -> ! {
    // Call test function to ensure all code is included
    exercise_faders();

    // Halt - this is a size analysis binary, not meant to run
    loop {
        cortex_m::asm::nop();
    }
}
