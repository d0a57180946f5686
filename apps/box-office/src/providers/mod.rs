//! Remote collaborators of the admin reducer.
//!
//! The reducer only sees these traits. The binary wires in the reqwest
//! implementations; tests use the in-memory doubles from [`crate::mocks`].
//!
//! ```text
//! AdminReducer ──► Effect::Future ──► MovieBackend    ──► /rest/v1/{movies,tickets}
//!                                └──► ReminderSender ──► /api/sendEmail
//! ```
//!
//! Methods return boxed futures so the traits stay object safe and can be
//! shared as `Arc<dyn _>` inside the environment.

mod backend;
mod console_reminder;
mod http_reminder;
mod postgrest;
mod reminder;

pub use backend::MovieBackend;
pub use console_reminder::ConsoleReminderSender;
pub use http_reminder::HttpReminderSender;
pub use postgrest::PostgrestBackend;
pub use reminder::ReminderSender;

use std::future::Future;
use std::pin::Pin;

/// Boxed future returned by provider methods
pub type ProviderFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;
