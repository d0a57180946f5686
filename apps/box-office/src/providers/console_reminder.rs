//! Console reminder sender for development.

use super::{ProviderFuture, ReminderSender};
use crate::error::ReminderError;
use crate::types::ReminderRequest;
use tracing::info;

/// Logs reminder batches instead of sending them.
///
/// Selected with `REMINDER_MODE=console` when no mail endpoint is running.
#[derive(Clone, Debug, Default)]
pub struct ConsoleReminderSender;

impl ConsoleReminderSender {
    /// Create a new console sender.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReminderSender for ConsoleReminderSender {
    fn send_reminders(&self, request: ReminderRequest) -> ProviderFuture<'_, (), ReminderError> {
        Box::pin(async move {
            info!(
                movie = %request.movie_name,
                recipients = request.tickets.len(),
                "Reminder batch (development mode)"
            );
            for ticket in &request.tickets {
                info!(to = %ticket.email, name = %ticket.name, seats = ticket.count, "Reminder");
            }
            Ok(())
        })
    }
}
