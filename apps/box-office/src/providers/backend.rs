//! Movie and ticket tables.

use super::ProviderFuture;
use crate::error::BackendError;
use crate::types::{Movie, MovieId, NewMovie, NewTicket, Ticket, TicketId};

/// Access to the hosted `movies` and `tickets` tables.
pub trait MovieBackend: Send + Sync {
    /// Fetch every movie row.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the backend rejects it, or the
    /// rows can't be decoded.
    fn select_movies(&self) -> ProviderFuture<'_, Vec<Movie>, BackendError>;

    /// Insert one movie and return the stored row(s).
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the backend rejects the row.
    fn insert_movie(&self, movie: NewMovie) -> ProviderFuture<'_, Vec<Movie>, BackendError>;

    /// Fetch the tickets whose `movie_id` matches.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the backend rejects it, or the
    /// rows can't be decoded.
    fn select_tickets(&self, movie_id: MovieId) -> ProviderFuture<'_, Vec<Ticket>, BackendError>;

    /// Insert one ticket and return the stored row(s).
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the backend rejects the row.
    fn insert_ticket(&self, ticket: NewTicket) -> ProviderFuture<'_, Vec<Ticket>, BackendError>;

    /// Delete the ticket with this id. Deleting a missing id succeeds.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the backend rejects it.
    fn delete_ticket(&self, id: TicketId) -> ProviderFuture<'_, (), BackendError>;
}
