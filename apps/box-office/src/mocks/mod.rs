//! In-memory provider doubles for tests and offline runs.

pub mod backend;
pub mod reminder;

pub use backend::{BackendOp, MockBackend};
pub use reminder::MockReminderSender;
