use nyxfall::Card;
use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::config::ClientConfig;
use crate::error::FetchError;
use crate::protocol_types::{ErrorObject, PagedResponse};

/// A blocking client for the card endpoints of the Scryfall API.
pub struct ScryfallClient {
    http: Client,
    base_uri: String,
}

impl ScryfallClient {
    pub fn new(config: &ClientConfig) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            http,
            base_uri: config.base_uri.clone(),
        })
    }

    /// Looks up the card with exactly this name.
    ///
    /// Returns `None` when Scryfall knows no such card.
    pub fn search_exact(&self, name: &str) -> Result<Option<Card>, FetchError> {
        debug!(name, "Looking up card by exact name");
        let response = self
            .http
            .get(format!("{}named", self.base_uri))
            .query(&[("exact", name)])
            .send()?;
        match decode::<Card>(response) {
            Ok(card) => Ok(Some(card)),
            Err(FetchError::Api { status: 404, .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub fn search_random(&self) -> Result<Card, FetchError> {
        debug!("Fetching a random card");
        let response = self.http.get(format!("{}random", self.base_uri)).send()?;
        decode(response)
    }

    /// Runs a full-text search and returns the first page of results.
    ///
    /// A query that matches nothing gives an empty page rather than an error.
    pub fn search_query(&self, query: &str) -> Result<PagedResponse, FetchError> {
        debug!(query, "Searching cards");
        let response = self
            .http
            .get(format!("{}search", self.base_uri))
            .query(&[("q", query), ("page", "1")])
            .send()?;
        match decode::<PagedResponse>(response) {
            Err(FetchError::Api { status: 404, .. }) => Ok(PagedResponse::default()),
            result => result,
        }
    }

    /// Fetches the page after `page`, if there is one.
    pub fn next_page(&self, page: &PagedResponse) -> Result<Option<PagedResponse>, FetchError> {
        let uri = match (&page.next_page_uri, page.has_more) {
            (Some(uri), true) => uri,
            _ => return Ok(None),
        };
        debug!(uri, "Fetching next page of search results");
        let response = self.http.get(uri).send()?;
        decode(response).map(Some)
    }
}

fn decode<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
    let status = response.status();
    trace!(url = %response.url(), %status, "Received response");
    if status.is_success() {
        return Ok(response.json::<T>()?);
    }
    // Scryfall describes every failure with an error object, but proxies in
    // between might not
    match response.json::<ErrorObject>() {
        Ok(err) => Err(FetchError::Api {
            status: err.status,
            code: err.code,
            details: err.details,
        }),
        Err(_) => Err(FetchError::Api {
            status: status.as_u16(),
            code: String::new(),
            details: String::from(status.canonical_reason().unwrap_or("unknown error")),
        }),
    }
}
