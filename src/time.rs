//! Time abstraction traits for platform-agnostic timing.
//!
//! The scheduler only ever asks two questions of the clock: "what time is it"
//! and "how many milliseconds have passed since then". The source must be
//! monotonic; a clock that steps backwards stalls the active command until it
//! catches up again.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy {
    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Implementations should saturate to zero if `earlier` is in the future.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

#[cfg(feature = "embassy")]
mod embassy {
    use super::{TimeDuration, TimeInstant, TimeSource};
    use embassy_time::{Duration, Instant};

    impl TimeDuration for Duration {
        fn as_millis(&self) -> u64 {
            Duration::as_millis(self)
        }
    }

    impl TimeInstant for Instant {
        type Duration = Duration;

        fn duration_since(&self, earlier: Self) -> Self::Duration {
            Instant::saturating_duration_since(self, earlier)
        }
    }

    /// Time source backed by the embassy time driver.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct EmbassyTimeSource;

    impl EmbassyTimeSource {
        /// Creates a new Embassy time source
        pub const fn new() -> Self {
            Self
        }
    }

    impl TimeSource<Instant> for EmbassyTimeSource {
        fn now(&self) -> Instant {
            Instant::now()
        }
    }
}

#[cfg(feature = "embassy")]
pub use embassy::EmbassyTimeSource;
