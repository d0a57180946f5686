//! Mock movie backend.

use crate::error::BackendError;
use crate::providers::{MovieBackend, ProviderFuture};
use crate::types::{Movie, MovieId, NewMovie, NewTicket, RowId, ShowTime, Ticket, TicketId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Backend operations, for call recording and failure injection
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BackendOp {
    /// `select_movies`
    SelectMovies,
    /// `insert_movie`
    InsertMovie,
    /// `select_tickets`
    SelectTickets,
    /// `insert_ticket`
    InsertTicket,
    /// `delete_ticket`
    DeleteTicket,
}

#[derive(Debug, Default)]
struct Tables {
    movies: Vec<Movie>,
    tickets: Vec<Ticket>,
    next_id: i64,
    failures: HashMap<BackendOp, BackendError>,
    calls: Vec<BackendOp>,
}

impl Tables {
    fn next_id(&mut self) -> RowId {
        self.next_id += 1;
        RowId::Int(self.next_id)
    }

    fn begin(&mut self, op: BackendOp) -> Result<(), BackendError> {
        self.calls.push(op);
        self.failures.get(&op).cloned().map_or(Ok(()), Err)
    }
}

/// Mock backend.
///
/// Holds both tables in memory and assigns integer ids starting at 1.
/// Clones share the same tables.
#[derive(Clone, Debug, Default)]
pub struct MockBackend {
    tables: Arc<Mutex<Tables>>,
}

impl MockBackend {
    /// Create an empty backend
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store a movie row directly and return its id
    pub fn seed_movie(&self, name: &str, time: &str) -> MovieId {
        let mut tables = self.tables();
        let id = MovieId(tables.next_id());
        tables.movies.push(Movie {
            id: id.clone(),
            name: name.to_string(),
            time: ShowTime(time.to_string()),
            image: None,
            locked: false,
            tickets: Vec::new(),
        });
        id
    }

    /// Store a ticket row directly and return its id
    pub fn seed_ticket(&self, movie_id: &MovieId, name: &str, email: &str, count: u32) -> TicketId {
        let mut tables = self.tables();
        let id = TicketId(tables.next_id());
        tables.tickets.push(Ticket {
            id: id.clone(),
            name: name.to_string(),
            email: email.to_string(),
            count,
            movie_id: movie_id.clone(),
        });
        id
    }

    /// Make every later call of `op` fail with `error`
    pub fn fail(&self, op: BackendOp, error: BackendError) {
        self.tables().failures.insert(op, error);
    }

    /// Let `op` succeed again
    pub fn recover(&self, op: BackendOp) {
        self.tables().failures.remove(&op);
    }

    /// Every call received so far, in order
    #[must_use]
    pub fn calls(&self) -> Vec<BackendOp> {
        self.tables().calls.clone()
    }

    /// Number of ticket rows stored for `movie_id`
    #[must_use]
    pub fn ticket_count(&self, movie_id: &MovieId) -> usize {
        self.tables()
            .tickets
            .iter()
            .filter(|ticket| &ticket.movie_id == movie_id)
            .count()
    }
}

impl MovieBackend for MockBackend {
    fn select_movies(&self) -> ProviderFuture<'_, Vec<Movie>, BackendError> {
        let result = {
            let mut tables = self.tables();
            tables
                .begin(BackendOp::SelectMovies)
                .map(|()| tables.movies.clone())
        };
        Box::pin(async move { result })
    }

    fn insert_movie(&self, movie: NewMovie) -> ProviderFuture<'_, Vec<Movie>, BackendError> {
        let result = {
            let mut tables = self.tables();
            tables.begin(BackendOp::InsertMovie).map(|()| {
                let row = Movie {
                    id: MovieId(tables.next_id()),
                    name: movie.name,
                    time: ShowTime(movie.time),
                    image: Some(movie.image),
                    locked: movie.locked,
                    tickets: Vec::new(),
                };
                tables.movies.push(row.clone());
                vec![row]
            })
        };
        Box::pin(async move { result })
    }

    fn select_tickets(&self, movie_id: MovieId) -> ProviderFuture<'_, Vec<Ticket>, BackendError> {
        let result = {
            let mut tables = self.tables();
            tables.begin(BackendOp::SelectTickets).map(|()| {
                tables
                    .tickets
                    .iter()
                    .filter(|ticket| ticket.movie_id == movie_id)
                    .cloned()
                    .collect()
            })
        };
        Box::pin(async move { result })
    }

    fn insert_ticket(&self, ticket: NewTicket) -> ProviderFuture<'_, Vec<Ticket>, BackendError> {
        let result = {
            let mut tables = self.tables();
            tables.begin(BackendOp::InsertTicket).map(|()| {
                let row = Ticket {
                    id: TicketId(tables.next_id()),
                    name: ticket.name,
                    email: ticket.email,
                    count: ticket.count,
                    movie_id: ticket.movie_id,
                };
                tables.tickets.push(row.clone());
                vec![row]
            })
        };
        Box::pin(async move { result })
    }

    fn delete_ticket(&self, id: TicketId) -> ProviderFuture<'_, (), BackendError> {
        let result = {
            let mut tables = self.tables();
            tables
                .begin(BackendOp::DeleteTicket)
                .map(|()| tables.tickets.retain(|ticket| ticket.id != id))
        };
        Box::pin(async move { result })
    }
}
