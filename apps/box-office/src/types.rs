//! Domain types for the box office admin.
//!
//! Movies and tickets are rows owned by the hosted backend. The admin keeps
//! a cached copy of them in [`AdminState`], alongside the selection, the
//! bound form fields and the alerts waiting for the operator.

use crate::error::{BackendError, ReminderError};
use chrono::{DateTime, Local, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{HashMap, VecDeque};

/// Backend-assigned row identifier.
///
/// Kept exactly as the backend sent it (JSON number or string) so it can be
/// echoed back in filters and foreign keys unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    /// Integer primary key
    Int(i64),
    /// Text or UUID primary key
    Text(String),
}

impl RowId {
    /// Parse operator input: digits become [`RowId::Int`], anything else
    /// [`RowId::Text`].
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        input
            .parse::<i64>()
            .map_or_else(|_| Self::Text(input.to_string()), Self::Int)
    }
}

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

/// Identifier of a movie row
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub RowId);

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<i64> for MovieId {
    fn from(id: i64) -> Self {
        Self(RowId::Int(id))
    }
}

/// Identifier of a ticket row
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(pub RowId);

impl std::fmt::Display for TicketId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<i64> for TicketId {
    fn from(id: i64) -> Self {
        Self(RowId::Int(id))
    }
}

/// Screening time as stored by the backend.
///
/// The raw text is kept so whatever the backend returns round-trips;
/// [`ShowTime::to_local`] interprets it for display.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShowTime(pub String);

impl ShowTime {
    const NAIVE_FORMATS: [&'static str; 3] =
        ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"];

    /// Interpret the stored value as a local date and time.
    ///
    /// Values with an offset are converted to the local zone; values without
    /// one are taken as local already. Returns `None` for anything else.
    #[must_use]
    pub fn to_local(&self) -> Option<NaiveDateTime> {
        let raw = self.0.trim();
        if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
            return Some(with_offset.with_timezone(&Local).naive_local());
        }
        Self::NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A movie row plus its locally cached tickets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Row identifier
    pub id: MovieId,
    /// Title
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Screening time
    #[serde(default, deserialize_with = "null_as_default")]
    pub time: ShowTime,
    /// Poster URL
    #[serde(default)]
    pub image: Option<String>,
    /// Stored and round-tripped; nothing reads it.
    #[serde(default, deserialize_with = "null_as_default")]
    pub locked: bool,
    /// Tickets cached for this movie. Empty until the movie is selected.
    #[serde(skip)]
    pub tickets: Vec<Ticket>,
}

impl Movie {
    /// Copy of this movie with the ticket cache emptied
    #[must_use]
    pub fn without_tickets(mut self) -> Self {
        self.tickets.clear();
        self
    }
}

/// A ticket row
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Row identifier
    pub id: TicketId,
    /// Holder name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Holder email
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    /// Number of seats
    pub count: u32,
    /// Owning movie
    pub movie_id: MovieId,
}

/// Insert payload for the movies table
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewMovie {
    /// Title
    pub name: String,
    /// Screening time as entered
    pub time: String,
    /// Poster URL as entered (may be empty)
    pub image: String,
    /// Always `false` on creation
    pub locked: bool,
}

/// Insert payload for the tickets table
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewTicket {
    /// Holder name
    pub name: String,
    /// Holder email
    pub email: String,
    /// Number of seats
    pub count: u32,
    /// Owning movie
    pub movie_id: MovieId,
}

/// Body of the reminder endpoint request
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderRequest {
    /// Movie title
    pub movie_name: String,
    /// Cached tickets for the movie at the time of sending
    pub tickets: Vec<Ticket>,
}

/// Fields of the create-movie form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovieField {
    /// Title
    Name,
    /// Screening time
    Time,
    /// Poster URL
    Image,
}

/// Bound values of the create-movie form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MovieForm {
    /// Title
    pub name: String,
    /// Screening time
    pub time: String,
    /// Poster URL
    pub image: String,
}

impl MovieForm {
    /// Update one field
    pub fn set(&mut self, field: MovieField, value: String) {
        match field {
            MovieField::Name => self.name = value,
            MovieField::Time => self.time = value,
            MovieField::Image => self.image = value,
        }
    }

    /// Insert payload for the current values. Nothing is validated.
    #[must_use]
    pub fn to_new_movie(&self) -> NewMovie {
        NewMovie {
            name: self.name.clone(),
            time: self.time.clone(),
            image: self.image.clone(),
            locked: false,
        }
    }

    /// Reset every field
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Fields of the add-ticket form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TicketField {
    /// Holder name
    Name,
    /// Holder email
    Email,
    /// Seat count, as typed
    Count,
}

/// Bound values of the add-ticket form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TicketForm {
    /// Holder name
    pub name: String,
    /// Holder email
    pub email: String,
    /// Seat count, parsed on submit
    pub count: String,
}

impl TicketForm {
    /// Update one field
    pub fn set(&mut self, field: TicketField, value: String) {
        match field {
            TicketField::Name => self.name = value,
            TicketField::Email => self.email = value,
            TicketField::Count => self.count = value,
        }
    }

    /// Build the insert payload, or `None` if a field is empty or the count
    /// is not a positive integer.
    #[must_use]
    pub fn to_new_ticket(&self, movie_id: MovieId) -> Option<NewTicket> {
        let count = self.count.trim().parse::<u32>().ok().filter(|c| *c > 0)?;
        if self.name.is_empty() || self.email.is_empty() {
            return None;
        }
        Some(NewTicket {
            name: self.name.clone(),
            email: self.email.clone(),
            count,
            movie_id,
        })
    }
}

/// Severity of an operator alert
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertLevel {
    /// Something succeeded
    Info,
    /// A precondition was not met; nothing was sent
    Warning,
    /// A remote call failed
    Error,
}

/// A message the operator has to acknowledge
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    /// Severity
    pub level: AlertLevel,
    /// Text shown to the operator
    pub message: String,
    /// When the alert was raised
    pub raised_at: DateTime<Utc>,
}

/// The signed-in operator
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminUser {
    /// Login email
    pub email: String,
}

/// View state of the admin screen
#[derive(Clone, Debug, Default)]
pub struct AdminState {
    /// Signed-in operator; nothing is loaded without one
    pub user: Option<AdminUser>,
    /// Cached movies, in backend order followed by movies created here
    pub movies: Vec<Movie>,
    /// Movie focused for ticket management and reminders
    pub selected: Option<MovieId>,
    /// Create-movie form
    pub movie_form: MovieForm,
    /// Add-ticket form
    pub ticket_form: TicketForm,
    /// Alerts waiting to be dismissed, oldest first
    pub alerts: VecDeque<Alert>,
    /// Sequence number of the latest ticket fetch issued per movie
    pub ticket_fetches: HashMap<MovieId, u64>,
}

impl AdminState {
    /// Look up a cached movie
    #[must_use]
    pub fn movie(&self, id: &MovieId) -> Option<&Movie> {
        self.movies.iter().find(|movie| &movie.id == id)
    }

    /// The selected movie, if it is in the cache
    #[must_use]
    pub fn selected_movie(&self) -> Option<&Movie> {
        self.selected.as_ref().and_then(|id| self.movie(id))
    }

    /// Whether `id` is the selected movie
    #[must_use]
    pub fn is_selected(&self, id: &MovieId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    /// Oldest alert still waiting for the operator
    #[must_use]
    pub fn current_alert(&self) -> Option<&Alert> {
        self.alerts.front()
    }
}

/// Everything the admin reducer reacts to.
///
/// The first group are operator commands; the second group are results fed
/// back by remote calls.
#[derive(Clone, Debug, PartialEq)]
pub enum AdminAction {
    // ========== Commands ==========
    /// The screen was opened, with or without a signed-in operator
    Mount {
        /// Signed-in operator
        user: Option<AdminUser>,
    },

    /// Reload every movie from the backend
    LoadMovies,

    /// Edit a create-movie form field
    EditMovieForm {
        /// Field to change
        field: MovieField,
        /// New value
        value: String,
    },

    /// Create a movie from the form
    SubmitMovie,

    /// Focus a movie and fetch its tickets
    SelectMovie {
        /// Movie to select
        id: MovieId,
    },

    /// Refresh one movie's cached tickets
    FetchTickets {
        /// Movie whose tickets to fetch
        movie_id: MovieId,
    },

    /// Edit an add-ticket form field
    EditTicketForm {
        /// Field to change
        field: TicketField,
        /// New value
        value: String,
    },

    /// Add a ticket for the selected movie from the form
    SubmitTicket,

    /// Delete a ticket row
    DeleteTicket {
        /// Ticket to delete
        id: TicketId,
    },

    /// Email every cached ticket holder of the selected movie
    SendReminders,

    /// Acknowledge the oldest alert
    DismissAlert,

    // ========== Results ==========
    /// Movie list fetched
    MoviesLoaded {
        /// Rows or failure
        result: Result<Vec<Movie>, BackendError>,
    },

    /// Movie insert finished
    MovieCreated {
        /// Inserted rows or failure
        result: Result<Vec<Movie>, BackendError>,
    },

    /// Ticket fetch finished
    TicketsLoaded {
        /// Movie the fetch was for
        movie_id: MovieId,
        /// Sequence number the fetch was issued with
        sequence: u64,
        /// Rows or failure
        result: Result<Vec<Ticket>, BackendError>,
    },

    /// Ticket insert finished
    TicketCreated {
        /// Movie the ticket was added to
        movie_id: MovieId,
        /// Inserted rows or failure
        result: Result<Vec<Ticket>, BackendError>,
    },

    /// Ticket delete finished
    TicketDeleted {
        /// Ticket that was deleted
        id: TicketId,
        /// Movie selected when the delete was issued
        movie_id: Option<MovieId>,
        /// Outcome
        result: Result<(), BackendError>,
    },

    /// Reminder request finished
    RemindersSent {
        /// Movie the reminders were for
        movie_name: String,
        /// Outcome
        result: Result<(), ReminderError>,
    },
}
