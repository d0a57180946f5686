//! Mock reminder sender.

use crate::error::ReminderError;
use crate::providers::{ProviderFuture, ReminderSender};
use crate::types::ReminderRequest;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct Outbox {
    sent: Vec<ReminderRequest>,
    failure: Option<ReminderError>,
}

/// Mock reminder sender.
///
/// Records every batch it receives, including ones it was told to reject.
#[derive(Clone, Debug, Default)]
pub struct MockReminderSender {
    outbox: Arc<Mutex<Outbox>>,
}

impl MockReminderSender {
    /// Create a sender that accepts everything
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sender that rejects every batch with `error`
    #[must_use]
    pub fn failing(error: ReminderError) -> Self {
        let sender = Self::default();
        sender.outbox().failure = Some(error);
        sender
    }

    fn outbox(&self) -> MutexGuard<'_, Outbox> {
        self.outbox.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Batches received so far
    #[must_use]
    pub fn sent(&self) -> Vec<ReminderRequest> {
        self.outbox().sent.clone()
    }
}

impl ReminderSender for MockReminderSender {
    fn send_reminders(&self, request: ReminderRequest) -> ProviderFuture<'_, (), ReminderError> {
        let result = {
            let mut outbox = self.outbox();
            outbox.sent.push(request);
            outbox.failure.clone().map_or(Ok(()), Err)
        };
        Box::pin(async move { result })
    }
}
