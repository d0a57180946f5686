//! Box office admin: movies, tickets and reminder emails.
//!
//! The admin screen keeps a local cache of movies (each with a lazily
//! fetched ticket list) and a selected movie, and keeps that cache in step
//! with a hosted REST database:
//!
//! - Load, create and select movies
//! - Add and delete tickets for the selected movie, refetching its list
//!   after every change
//! - Email every ticket holder of the selected movie
//!
//! All state lives in [`AdminState`] and changes only through
//! [`AdminAction`]s reduced by [`AdminReducer`]. Remote calls are effects
//! run by the store; their results come back as actions.
//!
//! # Quick Start
//!
//! ```no_run
//! use box_office::mocks::{MockBackend, MockReminderSender};
//! use box_office::{AdminAction, AdminEnvironment, AdminReducer, AdminState, AdminStore, AdminUser};
//! use marquee_core::environment::SystemClock;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let env = AdminEnvironment::new(
//!     Arc::new(MockBackend::new()),
//!     Arc::new(MockReminderSender::new()),
//!     Arc::new(SystemClock),
//! );
//! let store = AdminStore::new(AdminState::default(), AdminReducer::new(), env);
//!
//! // Sign in; waits until the movie list has been loaded
//! let user = AdminUser { email: "admin@example.com".to_string() };
//! store
//!     .send_cascading(AdminAction::Mount { user: Some(user) })
//!     .await?
//!     .wait()
//!     .await;
//!
//! let movies = store.state(|s| s.movies.len()).await;
//! println!("{movies} movies");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod console;
pub mod error;
pub mod mocks;
pub mod providers;
pub mod reducer;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use config::{Config, ReminderMode};
pub use error::{BackendError, ConfigError, ReminderError};
pub use providers::{
    ConsoleReminderSender, HttpReminderSender, MovieBackend, PostgrestBackend, ReminderSender,
};
pub use reducer::{AdminEnvironment, AdminReducer};
pub use types::{
    AdminAction, AdminState, AdminUser, Alert, AlertLevel, Movie, MovieId, Ticket, TicketId,
};

/// Store running the admin reducer
pub type AdminStore =
    marquee_runtime::Store<AdminState, AdminAction, AdminEnvironment, AdminReducer>;
