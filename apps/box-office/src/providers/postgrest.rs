//! REST client for the hosted tables

use super::{MovieBackend, ProviderFuture};
use crate::error::BackendError;
use crate::types::{Movie, MovieId, NewMovie, NewTicket, Ticket, TicketId};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;

const MOVIES: &str = "movies";
const TICKETS: &str = "tickets";

/// [`MovieBackend`] over a `PostgREST` endpoint (`<base>/rest/v1/<table>`).
///
/// Every request carries the anon key as `apikey` and a bearer token, which
/// is the user's access token when one is configured and the anon key
/// otherwise.
#[derive(Clone)]
pub struct PostgrestBackend {
    client: Client,
    base_url: String,
    anon_key: String,
    bearer: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl PostgrestBackend {
    /// Create a client for the project at `base_url`
    #[must_use]
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let anon_key = anon_key.into();
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            bearer: anon_key.clone(),
            anon_key,
        }
    }

    /// Authenticate as a signed-in user instead of the anon role
    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.bearer = token.into();
        self
    }

    fn request(&self, method: Method, table: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}/rest/v1/{table}", self.base_url))
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.bearer)
    }

    async fn execute(request: RequestBuilder) -> Result<Response, BackendError> {
        let response = request
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|error| error.message)
            .unwrap_or(body);

        Err(BackendError::Status {
            status: status.as_u16(),
            message,
        })
    }

    async fn rows<T: DeserializeOwned>(request: RequestBuilder) -> Result<Vec<T>, BackendError> {
        Self::execute(request)
            .await?
            .json::<Vec<T>>()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))
    }
}

impl MovieBackend for PostgrestBackend {
    fn select_movies(&self) -> ProviderFuture<'_, Vec<Movie>, BackendError> {
        let request = self.request(Method::GET, MOVIES).query(&[("select", "*")]);
        Box::pin(Self::rows::<Movie>(request))
    }

    fn insert_movie(&self, movie: NewMovie) -> ProviderFuture<'_, Vec<Movie>, BackendError> {
        let request = self
            .request(Method::POST, MOVIES)
            .header("Prefer", "return=representation")
            .json(&[movie]);
        Box::pin(Self::rows::<Movie>(request))
    }

    fn select_tickets(&self, movie_id: MovieId) -> ProviderFuture<'_, Vec<Ticket>, BackendError> {
        let request = self
            .request(Method::GET, TICKETS)
            .query(&[("select", "*".to_string()), ("movie_id", format!("eq.{movie_id}"))]);
        Box::pin(Self::rows::<Ticket>(request))
    }

    fn insert_ticket(&self, ticket: NewTicket) -> ProviderFuture<'_, Vec<Ticket>, BackendError> {
        let request = self
            .request(Method::POST, TICKETS)
            .header("Prefer", "return=representation")
            .json(&[ticket]);
        Box::pin(Self::rows::<Ticket>(request))
    }

    fn delete_ticket(&self, id: TicketId) -> ProviderFuture<'_, (), BackendError> {
        let request = self
            .request(Method::DELETE, TICKETS)
            .query(&[("id", format!("eq.{id}"))]);
        Box::pin(async move {
            Self::execute(request).await?;
            Ok(())
        })
    }
}
