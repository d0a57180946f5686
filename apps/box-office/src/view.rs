//! Plain-text rendering of the admin screen.

use crate::types::{AdminState, Movie, ShowTime};

/// Poster shown for movies without an image
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150";

/// Shown instead of the screen when nobody is signed in
pub const LOGIN_REDIRECT: &str = "Redirecting to login...";

/// Show time in the local `month/day/year, h:mm:ss AM` form, or the raw
/// stored value when it can't be parsed.
#[must_use]
pub fn format_show_time(time: &ShowTime) -> String {
    time.to_local().map_or_else(
        || time.0.clone(),
        |local| local.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
    )
}

fn poster(movie: &Movie) -> &str {
    movie
        .image
        .as_deref()
        .filter(|url| !url.is_empty())
        .unwrap_or(PLACEHOLDER_IMAGE)
}

/// Render the whole screen
#[must_use]
pub fn render(state: &AdminState) -> String {
    let Some(user) = &state.user else {
        return LOGIN_REDIRECT.to_string();
    };

    let mut lines = vec![format!("Movie Admin ({})", user.email), String::new()];

    if state.movies.is_empty() {
        lines.push("No movies yet.".to_string());
    }
    for movie in &state.movies {
        let marker = if state.is_selected(&movie.id) { '>' } else { ' ' };
        lines.push(format!("{marker} [{}] {}", movie.id, movie.name));
        lines.push(format!("    {}", format_show_time(&movie.time)));
        lines.push(format!("    {}", poster(movie)));
        lines.push(format!("    {} Tickets", movie.tickets.len()));
    }

    let form = &state.movie_form;
    lines.push(String::new());
    lines.push(format!(
        "New movie: name={:?} time={:?} image={:?}",
        form.name, form.time, form.image
    ));

    // Shown for any selection, even one missing from the loaded movies
    if state.selected.is_some() {
        let movie = state.selected_movie();
        let tickets = movie.map(|m| m.tickets.as_slice()).unwrap_or_default();
        lines.push(String::new());
        lines.push(format!(
            "Tickets for: {}",
            movie.map(|m| m.name.as_str()).unwrap_or_default()
        ));
        lines.push("ID | Name | Email | Count".to_string());
        for ticket in tickets {
            lines.push(format!(
                "{} | {} | {} | {}",
                ticket.id, ticket.name, ticket.email, ticket.count
            ));
        }

        let form = &state.ticket_form;
        lines.push(format!(
            "New ticket: name={:?} email={:?} count={:?}",
            form.name, form.email, form.count
        ));
    }

    lines.join("\n")
}
