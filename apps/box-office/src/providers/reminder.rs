//! Reminder email delivery.

use super::ProviderFuture;
use crate::error::ReminderError;
use crate::types::ReminderRequest;

/// Sends reminder emails to the holders of a movie's tickets.
pub trait ReminderSender: Send + Sync {
    /// Deliver one batch of reminders.
    ///
    /// # Errors
    ///
    /// Returns error if the endpoint can't be reached or refuses the batch.
    fn send_reminders(&self, request: ReminderRequest) -> ProviderFuture<'_, (), ReminderError>;
}
