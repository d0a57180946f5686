//! Reducer for the admin screen.
//!
//! Commands validate against the cached state and schedule remote calls as
//! `Effect::Future`s. Each call feeds back exactly one result action, which
//! patches the cache, refetches the affected tickets, or raises an alert.

use crate::error::ReminderError;
use crate::providers::{MovieBackend, ReminderSender};
use crate::types::{
    AdminAction, AdminState, Alert, AlertLevel, Movie, MovieId, ReminderRequest,
};
use marquee_core::{
    SmallVec, async_effect, effect::Effect, environment::Clock, reducer::Reducer, smallvec,
};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Alert raised when an operation needs a selected movie
pub const NO_MOVIE_SELECTED: &str = "No movie selected";
/// Alert raised when the ticket form doesn't validate
pub const INVALID_TICKET_FORM: &str = "Please fill all fields correctly.";
/// Alert raised when the reminder endpoint accepted the batch
pub const REMINDERS_SENT: &str = "Emails sent successfully";
/// Alert raised when the reminder endpoint refused the batch
pub const REMINDERS_REJECTED: &str = "Failed to send emails";
/// Alert raised when the reminder endpoint couldn't be reached
pub const REMINDERS_UNREACHABLE: &str = "An error occurred while sending emails.";

/// Collaborators of the admin reducer
#[derive(Clone)]
pub struct AdminEnvironment {
    /// Movie and ticket tables
    pub backend: Arc<dyn MovieBackend>,
    /// Reminder email delivery
    pub reminders: Arc<dyn ReminderSender>,
    /// Timestamps for alerts
    pub clock: Arc<dyn Clock>,
}

impl AdminEnvironment {
    /// Creates a new `AdminEnvironment`
    #[must_use]
    pub fn new(
        backend: Arc<dyn MovieBackend>,
        reminders: Arc<dyn ReminderSender>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            backend,
            reminders,
            clock,
        }
    }
}

/// Reducer for the admin screen
#[derive(Clone, Debug)]
pub struct AdminReducer;

impl AdminReducer {
    /// Creates a new `AdminReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn raise(state: &mut AdminState, env: &AdminEnvironment, level: AlertLevel, message: &str) {
        state.alerts.push_back(Alert {
            level,
            message: message.to_string(),
            raised_at: env.clock.now(),
        });
    }

    fn load_movies(env: &AdminEnvironment) -> Effect<AdminAction> {
        let backend = Arc::clone(&env.backend);
        async_effect! {
            let result = backend.select_movies().await;
            Some(AdminAction::MoviesLoaded { result })
        }
    }

    /// Issue a ticket fetch tagged with the next sequence number for the movie
    fn fetch_tickets(
        state: &mut AdminState,
        env: &AdminEnvironment,
        movie_id: MovieId,
    ) -> Effect<AdminAction> {
        let sequence = state.ticket_fetches.entry(movie_id.clone()).or_insert(0);
        *sequence += 1;
        let sequence = *sequence;

        let backend = Arc::clone(&env.backend);
        async_effect! {
            let result = backend.select_tickets(movie_id.clone()).await;
            Some(AdminAction::TicketsLoaded { movie_id, sequence, result })
        }
    }

    fn reminders_failed(state: &mut AdminState, env: &AdminEnvironment, err: &ReminderError) {
        match err {
            ReminderError::Rejected { status, message } => {
                error!(status, message = %message, "Reminder endpoint rejected the batch");
                Self::raise(state, env, AlertLevel::Error, REMINDERS_REJECTED);
            },
            ReminderError::Request(reason) => {
                error!(error = %reason, "Reminder request failed");
                Self::raise(state, env, AlertLevel::Error, REMINDERS_UNREACHABLE);
            },
            ReminderError::Malformed { status, reason } => {
                error!(status, error = %reason, "Reminder endpoint sent an unreadable error");
                Self::raise(state, env, AlertLevel::Error, REMINDERS_UNREACHABLE);
            },
        }
    }
}

impl Default for AdminReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for AdminReducer {
    type State = AdminState;
    type Action = AdminAction;
    type Environment = AdminEnvironment;

    #[allow(clippy::too_many_lines)] // One arm per action
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ========== Commands ==========
            AdminAction::Mount { user } => {
                state.user = user;
                match &state.user {
                    Some(user) => {
                        info!(email = %user.email, "Admin mounted");
                        smallvec![Self::load_movies(env)]
                    },
                    None => {
                        info!("No signed-in user, redirecting to login");
                        SmallVec::new()
                    },
                }
            },

            AdminAction::LoadMovies => {
                if state.user.is_none() {
                    warn!("Ignoring movie load without a signed-in user");
                    return SmallVec::new();
                }
                smallvec![Self::load_movies(env)]
            },

            AdminAction::EditMovieForm { field, value } => {
                state.movie_form.set(field, value);
                SmallVec::new()
            },

            AdminAction::SubmitMovie => {
                let movie = state.movie_form.to_new_movie();
                let backend = Arc::clone(&env.backend);
                smallvec![async_effect! {
                    let result = backend.insert_movie(movie).await;
                    Some(AdminAction::MovieCreated { result })
                }]
            },

            AdminAction::SelectMovie { id } => {
                state.selected = Some(id.clone());
                smallvec![Self::fetch_tickets(state, env, id)]
            },

            AdminAction::FetchTickets { movie_id } => {
                smallvec![Self::fetch_tickets(state, env, movie_id)]
            },

            AdminAction::EditTicketForm { field, value } => {
                state.ticket_form.set(field, value);
                SmallVec::new()
            },

            AdminAction::SubmitTicket => {
                let Some(movie_id) = state.selected.clone() else {
                    Self::raise(state, env, AlertLevel::Warning, NO_MOVIE_SELECTED);
                    return SmallVec::new();
                };
                let Some(ticket) = state.ticket_form.to_new_ticket(movie_id.clone()) else {
                    Self::raise(state, env, AlertLevel::Warning, INVALID_TICKET_FORM);
                    return SmallVec::new();
                };

                let backend = Arc::clone(&env.backend);
                smallvec![async_effect! {
                    let result = backend.insert_ticket(ticket).await;
                    Some(AdminAction::TicketCreated { movie_id, result })
                }]
            },

            AdminAction::DeleteTicket { id } => {
                let movie_id = state.selected.clone();
                let backend = Arc::clone(&env.backend);
                smallvec![async_effect! {
                    let result = backend.delete_ticket(id.clone()).await;
                    Some(AdminAction::TicketDeleted { id, movie_id, result })
                }]
            },

            AdminAction::SendReminders => {
                let Some(movie) = state.selected_movie() else {
                    Self::raise(state, env, AlertLevel::Warning, NO_MOVIE_SELECTED);
                    return SmallVec::new();
                };
                let request = ReminderRequest {
                    movie_name: movie.name.clone(),
                    tickets: movie.tickets.clone(),
                };

                let reminders = Arc::clone(&env.reminders);
                smallvec![async_effect! {
                    let movie_name = request.movie_name.clone();
                    let result = reminders.send_reminders(request).await;
                    Some(AdminAction::RemindersSent { movie_name, result })
                }]
            },

            AdminAction::DismissAlert => {
                state.alerts.pop_front();
                SmallVec::new()
            },

            // ========== Results ==========
            AdminAction::MoviesLoaded { result } => {
                match result {
                    Ok(movies) => {
                        info!(count = movies.len(), "Movies loaded");
                        state.movies = movies.into_iter().map(Movie::without_tickets).collect();
                    },
                    Err(err) => error!(error = %err, "Error fetching movies"),
                }
                SmallVec::new()
            },

            AdminAction::MovieCreated { result } => {
                match result {
                    Ok(rows) => {
                        info!(count = rows.len(), "Movie created");
                        state
                            .movies
                            .extend(rows.into_iter().map(Movie::without_tickets));
                        state.movie_form.clear();
                    },
                    Err(err) => error!(error = %err, "Error creating movie"),
                }
                SmallVec::new()
            },

            AdminAction::TicketsLoaded {
                movie_id,
                sequence,
                result,
            } => {
                let latest = state.ticket_fetches.get(&movie_id).copied().unwrap_or(0);
                if sequence < latest {
                    debug!(%movie_id, sequence, latest, "Discarding stale ticket fetch");
                    return SmallVec::new();
                }

                match result {
                    Ok(tickets) => {
                        if let Some(movie) = state.movies.iter_mut().find(|m| m.id == movie_id) {
                            debug!(%movie_id, count = tickets.len(), "Tickets loaded");
                            movie.tickets = tickets;
                        } else {
                            debug!(%movie_id, "Tickets loaded for a movie that isn't cached");
                        }
                    },
                    Err(err) => error!(%movie_id, error = %err, "Error fetching tickets"),
                }
                SmallVec::new()
            },

            AdminAction::TicketCreated { movie_id, result } => match result {
                Ok(_) => {
                    info!(%movie_id, "Ticket created");
                    smallvec![Self::fetch_tickets(state, env, movie_id)]
                },
                Err(err) => {
                    error!(%movie_id, error = %err, "Error creating ticket");
                    SmallVec::new()
                },
            },

            AdminAction::TicketDeleted {
                id,
                movie_id,
                result,
            } => match (result, movie_id) {
                (Ok(()), Some(movie_id)) => {
                    info!(ticket_id = %id, "Ticket deleted");
                    smallvec![Self::fetch_tickets(state, env, movie_id)]
                },
                (Ok(()), None) => {
                    info!(ticket_id = %id, "Ticket deleted with no movie selected");
                    SmallVec::new()
                },
                (Err(err), _) => {
                    error!(ticket_id = %id, error = %err, "Error deleting ticket");
                    SmallVec::new()
                },
            },

            AdminAction::RemindersSent { movie_name, result } => {
                match result {
                    Ok(()) => {
                        info!(movie = %movie_name, "Reminder emails sent");
                        Self::raise(state, env, AlertLevel::Info, REMINDERS_SENT);
                    },
                    Err(err) => Self::reminders_failed(state, env, &err),
                }
                SmallVec::new()
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::BackendError;
    use crate::mocks::{BackendOp, MockBackend, MockReminderSender};
    use crate::types::{
        AdminUser, MovieField, ShowTime, Ticket, TicketField, TicketForm, TicketId,
    };
    use marquee_testing::effects::collect_actions;
    use marquee_testing::{ReducerTest, assertions, test_clock};

    fn env_with(backend: MockBackend, reminders: MockReminderSender) -> AdminEnvironment {
        AdminEnvironment::new(Arc::new(backend), Arc::new(reminders), Arc::new(test_clock()))
    }

    fn env() -> AdminEnvironment {
        env_with(MockBackend::new(), MockReminderSender::new())
    }

    fn movie(id: i64, name: &str) -> Movie {
        Movie {
            id: MovieId::from(id),
            name: name.to_string(),
            time: ShowTime("2024-01-01T20:00".to_string()),
            image: None,
            locked: false,
            tickets: Vec::new(),
        }
    }

    fn ticket(id: i64, movie_id: i64, name: &str) -> Ticket {
        Ticket {
            id: TicketId::from(id),
            name: name.to_string(),
            email: format!("{}@x.com", name.to_lowercase()),
            count: 1,
            movie_id: MovieId::from(movie_id),
        }
    }

    fn signed_in() -> AdminState {
        AdminState {
            user: Some(AdminUser {
                email: "admin@x.com".to_string(),
            }),
            ..AdminState::default()
        }
    }

    fn with_movies(movies: Vec<Movie>) -> AdminState {
        AdminState {
            movies,
            ..signed_in()
        }
    }

    fn valid_ticket_form() -> TicketForm {
        TicketForm {
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            count: "2".to_string(),
        }
    }

    #[test]
    fn mount_without_user_loads_nothing() {
        ReducerTest::new(AdminReducer::new())
            .with_env(env())
            .given_state(AdminState::default())
            .when_action(AdminAction::Mount { user: None })
            .then_state(|state| assert!(state.user.is_none()))
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn mount_with_user_loads_movies() {
        ReducerTest::new(AdminReducer::new())
            .with_env(env())
            .given_state(AdminState::default())
            .when_action(AdminAction::Mount {
                user: Some(AdminUser {
                    email: "admin@x.com".to_string(),
                }),
            })
            .then_state(|state| assert!(state.user.is_some()))
            .then_effects(|effects| {
                assertions::assert_effects_count(effects, 1);
                assertions::assert_has_future_effect(effects);
            })
            .run();
    }

    #[test]
    fn load_is_ignored_when_signed_out() {
        ReducerTest::new(AdminReducer::new())
            .with_env(env())
            .given_state(AdminState::default())
            .when_action(AdminAction::LoadMovies)
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn loaded_movies_start_with_empty_ticket_lists() {
        let mut stale = movie(1, "Dune");
        stale.tickets = vec![ticket(10, 1, "Alice")];

        ReducerTest::new(AdminReducer::new())
            .with_env(env())
            .given_state(signed_in())
            .when_action(AdminAction::MoviesLoaded {
                result: Ok(vec![stale, movie(2, "Heat")]),
            })
            .then_state(|state| {
                assert_eq!(state.movies.len(), 2);
                assert!(state.movies.iter().all(|m| m.tickets.is_empty()));
            })
            .run();
    }

    #[test]
    fn failed_load_keeps_the_cache() {
        ReducerTest::new(AdminReducer::new())
            .with_env(env())
            .given_state(with_movies(vec![movie(1, "Dune")]))
            .when_action(AdminAction::MoviesLoaded {
                result: Err(BackendError::Request("offline".to_string())),
            })
            .then_state(|state| {
                assert_eq!(state.movies.len(), 1);
                assert!(state.alerts.is_empty());
            })
            .run();
    }

    #[test]
    fn created_movie_is_appended_and_form_cleared() {
        ReducerTest::new(AdminReducer::new())
            .with_env(env())
            .given_state(with_movies(vec![movie(1, "Dune")]))
            .when_action(AdminAction::EditMovieForm {
                field: MovieField::Name,
                value: "Heat".to_string(),
            })
            .when_action(AdminAction::MovieCreated {
                result: Ok(vec![movie(2, "Heat")]),
            })
            .then_state(|state| {
                let names: Vec<_> = state.movies.iter().map(|m| m.name.as_str()).collect();
                assert_eq!(names, ["Dune", "Heat"]);
                assert!(state.movie_form.name.is_empty());
            })
            .run();
    }

    #[test]
    fn failed_movie_create_keeps_the_form() {
        ReducerTest::new(AdminReducer::new())
            .with_env(env())
            .given_state(signed_in())
            .when_action(AdminAction::EditMovieForm {
                field: MovieField::Name,
                value: "Heat".to_string(),
            })
            .when_action(AdminAction::MovieCreated {
                result: Err(BackendError::Status {
                    status: 400,
                    message: "bad row".to_string(),
                }),
            })
            .then_state(|state| {
                assert_eq!(state.movie_form.name, "Heat");
                assert!(state.movies.is_empty());
            })
            .run();
    }

    #[test]
    fn selecting_tags_the_fetch_with_a_sequence() {
        ReducerTest::new(AdminReducer::new())
            .with_env(env())
            .given_state(with_movies(vec![movie(1, "Dune")]))
            .when_action(AdminAction::SelectMovie {
                id: MovieId::from(1),
            })
            .when_action(AdminAction::FetchTickets {
                movie_id: MovieId::from(1),
            })
            .then_state(|state| {
                assert!(state.is_selected(&MovieId::from(1)));
                assert_eq!(state.ticket_fetches[&MovieId::from(1)], 2);
            })
            .then_effects(assertions::assert_has_future_effect)
            .run();
    }

    #[test]
    fn tickets_replace_only_the_target_movie() {
        let mut heat = movie(2, "Heat");
        heat.tickets = vec![ticket(20, 2, "Bob")];
        let mut state = with_movies(vec![movie(1, "Dune"), heat]);
        state.ticket_fetches.insert(MovieId::from(1), 1);

        ReducerTest::new(AdminReducer::new())
            .with_env(env())
            .given_state(state)
            .when_action(AdminAction::TicketsLoaded {
                movie_id: MovieId::from(1),
                sequence: 1,
                result: Ok(vec![ticket(10, 1, "Alice")]),
            })
            .then_state(|state| {
                assert_eq!(state.movies[0].tickets.len(), 1);
                assert_eq!(state.movies[1].tickets, vec![ticket(20, 2, "Bob")]);
            })
            .run();
    }

    #[test]
    fn stale_ticket_fetch_is_discarded() {
        let mut state = with_movies(vec![movie(1, "Dune")]);
        state.ticket_fetches.insert(MovieId::from(1), 2);

        ReducerTest::new(AdminReducer::new())
            .with_env(env())
            .given_state(state)
            .when_action(AdminAction::TicketsLoaded {
                movie_id: MovieId::from(1),
                sequence: 2,
                result: Ok(vec![ticket(10, 1, "Alice"), ticket(11, 1, "Bob")]),
            })
            .when_action(AdminAction::TicketsLoaded {
                movie_id: MovieId::from(1),
                sequence: 1,
                result: Ok(Vec::new()),
            })
            .then_state(|state| assert_eq!(state.movies[0].tickets.len(), 2))
            .run();
    }

    #[test]
    fn ticket_submit_without_selection_warns() {
        ReducerTest::new(AdminReducer::new())
            .with_env(env())
            .given_state(AdminState {
                ticket_form: valid_ticket_form(),
                ..with_movies(vec![movie(1, "Dune")])
            })
            .when_action(AdminAction::SubmitTicket)
            .then_state(|state| {
                assert_eq!(state.alerts.len(), 1);
                assert_eq!(state.alerts[0].message, NO_MOVIE_SELECTED);
                assert_eq!(state.alerts[0].raised_at, test_clock().now());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn invalid_ticket_form_is_rejected_before_any_call() {
        ReducerTest::new(AdminReducer::new())
            .with_env(env())
            .given_state(AdminState {
                selected: Some(MovieId::from(1)),
                ..with_movies(vec![movie(1, "Dune")])
            })
            .when_action(AdminAction::EditTicketForm {
                field: TicketField::Name,
                value: "Alice".to_string(),
            })
            .when_action(AdminAction::EditTicketForm {
                field: TicketField::Email,
                value: "a@x.com".to_string(),
            })
            .when_action(AdminAction::EditTicketForm {
                field: TicketField::Count,
                value: "0".to_string(),
            })
            .when_action(AdminAction::SubmitTicket)
            .then_state(|state| {
                assert_eq!(state.alerts.len(), 1);
                assert_eq!(state.alerts[0].message, INVALID_TICKET_FORM);
                assert_eq!(state.alerts[0].level, AlertLevel::Warning);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn reminders_without_selection_warn_once() {
        ReducerTest::new(AdminReducer::new())
            .with_env(env())
            .given_state(with_movies(vec![movie(1, "Dune")]))
            .when_action(AdminAction::SendReminders)
            .then_state(|state| {
                assert_eq!(state.alerts.len(), 1);
                assert_eq!(state.alerts[0].message, NO_MOVIE_SELECTED);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn reminder_outcomes_become_alerts() {
        ReducerTest::new(AdminReducer::new())
            .with_env(env())
            .given_state(signed_in())
            .when_action(AdminAction::RemindersSent {
                movie_name: "Dune".to_string(),
                result: Ok(()),
            })
            .when_action(AdminAction::RemindersSent {
                movie_name: "Dune".to_string(),
                result: Err(ReminderError::Rejected {
                    status: 500,
                    message: "smtp down".to_string(),
                }),
            })
            .when_action(AdminAction::RemindersSent {
                movie_name: "Dune".to_string(),
                result: Err(ReminderError::Request("refused".to_string())),
            })
            .when_action(AdminAction::RemindersSent {
                movie_name: "Dune".to_string(),
                result: Err(ReminderError::Malformed {
                    status: 502,
                    reason: "expected value".to_string(),
                }),
            })
            .then_state(|state| {
                let messages: Vec<_> = state.alerts.iter().map(|a| a.message.as_str()).collect();
                assert_eq!(
                    messages,
                    [
                        REMINDERS_SENT,
                        REMINDERS_REJECTED,
                        REMINDERS_UNREACHABLE,
                        REMINDERS_UNREACHABLE
                    ]
                );
            })
            .run();
    }

    #[test]
    fn dismiss_pops_the_oldest_alert() {
        ReducerTest::new(AdminReducer::new())
            .with_env(env())
            .given_state(AdminState {
                selected: Some(MovieId::from(7)),
                ..signed_in()
            })
            .when_action(AdminAction::SendReminders)
            .when_action(AdminAction::SubmitTicket)
            .when_action(AdminAction::DismissAlert)
            .then_state(|state| {
                assert_eq!(state.alerts.len(), 1);
                assert_eq!(state.current_alert().unwrap().message, INVALID_TICKET_FORM);
            })
            .run();
    }

    #[test]
    fn failed_ticket_create_does_not_refetch() {
        ReducerTest::new(AdminReducer::new())
            .with_env(env())
            .given_state(signed_in())
            .when_action(AdminAction::TicketCreated {
                movie_id: MovieId::from(1),
                result: Err(BackendError::Request("offline".to_string())),
            })
            .then_state(|state| assert!(state.ticket_fetches.is_empty()))
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[tokio::test]
    async fn ticket_submit_inserts_then_reports_back() {
        let backend = MockBackend::new();
        let dune = backend.seed_movie("Dune", "2024-01-01T20:00");
        let env = env_with(backend.clone(), MockReminderSender::new());
        let mut state = AdminState {
            selected: Some(dune.clone()),
            ticket_form: valid_ticket_form(),
            ..signed_in()
        };

        let effects = AdminReducer::new().reduce(&mut state, AdminAction::SubmitTicket, &env);
        let actions = collect_actions(effects).await;

        assert_eq!(backend.calls(), vec![BackendOp::InsertTicket]);
        assert!(matches!(
            actions.as_slice(),
            [AdminAction::TicketCreated { movie_id, result: Ok(rows) }]
                if movie_id == &dune && rows.len() == 1
        ));
        // The form is left as typed
        assert_eq!(state.ticket_form, valid_ticket_form());
    }

    #[tokio::test]
    async fn deleted_ticket_refetches_the_movie_selected_at_issue_time() {
        let backend = MockBackend::new();
        let dune = backend.seed_movie("Dune", "2024-01-01T20:00");
        let alice = backend.seed_ticket(&dune, "Alice", "a@x.com", 2);
        let env = env_with(backend.clone(), MockReminderSender::new());
        let reducer = AdminReducer::new();
        let mut state = AdminState {
            selected: Some(dune.clone()),
            ..signed_in()
        };

        let effects = reducer.reduce(&mut state, AdminAction::DeleteTicket { id: alice }, &env);
        let deleted = collect_actions(effects).await;
        assert_eq!(deleted.len(), 1);

        state.selected = None;
        let effects = reducer.reduce(&mut state, deleted.into_iter().next().expect("result"), &env);
        let refetched = collect_actions(effects).await;

        assert!(matches!(
            refetched.as_slice(),
            [AdminAction::TicketsLoaded { movie_id, sequence: 1, result: Ok(rows) }]
                if movie_id == &dune && rows.is_empty()
        ));
    }

    #[tokio::test]
    async fn reminders_carry_the_cached_tickets() {
        let reminders = MockReminderSender::new();
        let env = env_with(MockBackend::new(), reminders.clone());
        let mut dune = movie(1, "Dune");
        dune.tickets = vec![ticket(10, 1, "Alice")];
        let mut state = AdminState {
            selected: Some(MovieId::from(1)),
            ..with_movies(vec![dune])
        };

        let effects = AdminReducer::new().reduce(&mut state, AdminAction::SendReminders, &env);
        let actions = collect_actions(effects).await;

        let sent = reminders.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].movie_name, "Dune");
        assert_eq!(sent[0].tickets, vec![ticket(10, 1, "Alice")]);
        assert_eq!(
            actions,
            vec![AdminAction::RemindersSent {
                movie_name: "Dune".to_string(),
                result: Ok(()),
            }]
        );
    }
}
