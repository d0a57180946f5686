//! # Marquee Testing
//!
//! Testing utilities for Marquee reducers:
//! - [`ReducerTest`], a Given-When-Then harness for a single reduction
//! - effect assertions and [`effects::collect_actions`] for driving effects
//!   without a store
//! - [`FixedClock`] for deterministic timestamps
//!
//! ## Example
//!
//! ```ignore
//! use marquee_testing::{assertions, ReducerTest};
//!
//! ReducerTest::new(AdminReducer::new())
//!     .with_env(env)
//!     .given_state(AdminState::default())
//!     .when_action(AdminAction::SendReminders)
//!     .then_state(|state| assert_eq!(state.alerts.len(), 1))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```

use chrono::{DateTime, Utc};
use marquee_core::environment::Clock;

mod reducer_test;

pub mod effects;

pub use reducer_test::{ReducerTest, assertions};

/// Mock implementations of environment traits
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Clock that always returns the same instant
    ///
    /// ```
    /// use marquee_testing::mocks::FixedClock;
    /// use marquee_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// assert_eq!(clock.now(), clock.now());
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a clock pinned to `time`
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Clock pinned to 2025-01-01 00:00:00 UTC
    #[must_use]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(DateTime::<Utc>::UNIX_EPOCH + chrono::Duration::days(20_089))
    }
}

pub use mocks::{FixedClock, test_clock};
