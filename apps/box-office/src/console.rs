//! Operator commands read from the console.

use crate::types::{
    AdminAction, AdminUser, MovieField, MovieId, RowId, TicketField, TicketId,
};
use thiserror::Error;

/// Help text listing every command
pub const HELP: &str = "\
Commands:
  login <email>         sign in and load movies
  movies                reload the movie list
  movie-name <text>     set the new movie's name
  movie-time <text>     set the new movie's time (e.g. 2024-01-01T20:00)
  movie-image <url>     set the new movie's poster URL
  add-movie             create the movie
  select <movie id>     select a movie and load its tickets
  ticket-name <text>    set the new ticket's holder name
  ticket-email <text>   set the new ticket's holder email
  ticket-count <n>      set the new ticket's seat count
  add-ticket            add the ticket to the selected movie
  delete-ticket <id>    delete a ticket
  remind                email every ticket holder of the selected movie
  show                  print the screen
  dismiss               dismiss the oldest alert
  help                  print this help
  quit                  exit";

/// A parsed console line
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Send an action to the store
    Dispatch(AdminAction),
    /// Print the screen
    Show,
    /// Print the help text
    Help,
    /// Exit
    Quit,
}

/// A console line that isn't a command
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Unrecognised command word
    #[error("Unknown command `{0}` (try `help`)")]
    Unknown(String),

    /// Command needs an argument
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
}

/// Parse one line. Blank lines yield `None`.
///
/// # Errors
///
/// Returns [`ParseError`] for unknown commands or missing arguments.
pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    let arg = |name: &'static str| {
        if rest.is_empty() {
            Err(ParseError::MissingArgument(name))
        } else {
            Ok(rest.to_string())
        }
    };

    let action = match word {
        "show" => return Ok(Some(Command::Show)),
        "help" => return Ok(Some(Command::Help)),
        "quit" | "exit" => return Ok(Some(Command::Quit)),
        "login" => AdminAction::Mount {
            user: Some(AdminUser {
                email: arg("login")?,
            }),
        },
        "movies" => AdminAction::LoadMovies,
        "movie-name" => AdminAction::EditMovieForm {
            field: MovieField::Name,
            value: rest.to_string(),
        },
        "movie-time" => AdminAction::EditMovieForm {
            field: MovieField::Time,
            value: rest.to_string(),
        },
        "movie-image" => AdminAction::EditMovieForm {
            field: MovieField::Image,
            value: rest.to_string(),
        },
        "add-movie" => AdminAction::SubmitMovie,
        "select" => AdminAction::SelectMovie {
            id: MovieId(RowId::parse(&arg("select")?)),
        },
        "ticket-name" => AdminAction::EditTicketForm {
            field: TicketField::Name,
            value: rest.to_string(),
        },
        "ticket-email" => AdminAction::EditTicketForm {
            field: TicketField::Email,
            value: rest.to_string(),
        },
        "ticket-count" => AdminAction::EditTicketForm {
            field: TicketField::Count,
            value: rest.to_string(),
        },
        "add-ticket" => AdminAction::SubmitTicket,
        "delete-ticket" => AdminAction::DeleteTicket {
            id: TicketId(RowId::parse(&arg("delete-ticket")?)),
        },
        "remind" => AdminAction::SendReminders,
        "dismiss" => AdminAction::DismissAlert,
        other => return Err(ParseError::Unknown(other.to_string())),
    };

    Ok(Some(Command::Dispatch(action)))
}
