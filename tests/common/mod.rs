//! Shared test infrastructure for rgb-fader integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use rgb_fader::{Channel, Color, PwmOutput, TimeDuration, TimeInstant, TimeSource};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_millis(&self) -> u64 {
        self.0
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0.saturating_sub(earlier.0))
    }
}

// ============================================================================
// Mock PWM
// ============================================================================

/// Mock PWM that records every channel write and the resulting colors
pub struct MockPwm {
    range: Option<u16>,
    channels: [u16; 3],
    writes: heapless::Vec<(Channel, u16), 256>,
}

impl MockPwm {
    pub fn new() -> Self {
        Self {
            range: None,
            channels: [0; 3],
            writes: heapless::Vec::new(),
        }
    }

    pub fn range(&self) -> Option<u16> {
        self.range
    }

    pub fn writes(&self) -> &[(Channel, u16)] {
        &self.writes
    }

    /// Last value written to each channel, as a color
    pub fn color(&self) -> Color {
        Color::new(self.channels[0], self.channels[1], self.channels[2])
    }
}

impl PwmOutput for MockPwm {
    fn set_range(&mut self, resolution: u16) {
        self.range = Some(resolution);
    }

    fn write(&mut self, channel: Channel, value: u16) {
        let slot = match channel {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        };
        self.channels[slot] = value;
        let _ = self.writes.push((channel, value));
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Test Colors
// ============================================================================

pub const RED: Color = Color::new(255, 0, 0);
pub const GREEN: Color = Color::new(0, 255, 0);
pub const BLUE: Color = Color::new(0, 0, 255);

pub use rgb_fader::BLACK;

pub type TestFader<'t> = rgb_fader::RgbFader<'t, TestInstant, MockPwm, MockTimeSource, 8>;
