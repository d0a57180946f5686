//! # Marquee Core
//!
//! The small set of abstractions every Marquee crate is written against.
//!
//! A feature is described by four pieces:
//!
//! - **State**: the owned, in-memory view model of the feature
//! - **Action**: every input the feature reacts to, both user commands and
//!   the results that asynchronous work feeds back
//! - **Reducer**: `(State, Action, Environment) → (State, Effects)`, the only
//!   place state changes
//! - **Effect**: a description of asynchronous work for the runtime to run
//!
//! Remote services, clocks and other collaborators reach the reducer through
//! the **Environment**, so a reducer can be exercised without a network.
//!
//! ## Example
//!
//! ```ignore
//! use marquee_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! impl Reducer for GalleryReducer {
//!     type State = GalleryState;
//!     type Action = GalleryAction;
//!     type Environment = GalleryEnvironment;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut GalleryState,
//!         action: GalleryAction,
//!         env: &GalleryEnvironment,
//!     ) -> SmallVec<[Effect<GalleryAction>; 4]> {
//!         match action {
//!             GalleryAction::Refresh => {
//!                 let backend = env.backend.clone();
//!                 smallvec![Effect::Future(Box::pin(async move {
//!                     Some(GalleryAction::Loaded(backend.list().await))
//!                 }))]
//!             }
//!             GalleryAction::Loaded(items) => {
//!                 state.items = items;
//!                 SmallVec::new()
//!             }
//!         }
//!     }
//! }
//! ```

pub use chrono::{DateTime, Utc};
pub use smallvec::{SmallVec, smallvec};

/// Declarative helpers for building effects
pub mod effect_macros;

/// Reducer module - the trait that owns every state transition
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// Business logic for one feature.
    ///
    /// `reduce` runs synchronously while the runtime holds the state lock. It
    /// mutates state in place and returns descriptions of any asynchronous
    /// work; it never performs I/O itself.
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// Injected collaborators (remote clients, clocks)
        type Environment;

        /// Apply `action` to `state` and describe the follow-up work.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - descriptions of work for the runtime
pub mod effect {
    use std::future::Future;
    use std::pin::Pin;

    /// A side effect returned by a reducer.
    ///
    /// Effects are values. The store executes them after the reducer returns
    /// and feeds any action they produce back into the reducer.
    pub enum Effect<Action> {
        /// Nothing to do
        None,

        /// Arbitrary async computation.
        ///
        /// If the future resolves to `Some(action)`, that action is sent back
        /// to the store.
        Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),
    }

    // Futures are opaque, so Debug is written by hand
    impl<Action> std::fmt::Debug for Effect<Action> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Self::None => write!(f, "Effect::None"),
                Self::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Whether this effect does no work at all
        #[must_use]
        pub const fn is_noop(&self) -> bool {
            matches!(self, Self::None)
        }
    }
}

/// Environment module - collaborators injected into reducers
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Source of the current time.
    ///
    /// Reducers take the time from here instead of calling `Utc::now()` so
    /// tests can pin it.
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Wall-clock time
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }
}
