use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::config::{Config, Credentials};
use crate::oauth::{self, Nonce, OAuthError};

const SEARCH_PATH: &str = "/1.1/search/tweets.json";
const PAGE_SIZE: usize = 100;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Search API returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Failed to sign request: {0}")]
    Signing(#[from] OAuthError),
}

/// A reply as the rest of the crate sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub id: u64,
    pub text: String,
    /// Screen name prefixed with `@`.
    pub author: String,
    pub in_reply_to: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    statuses: Vec<Status>,
}

#[derive(Debug, Deserialize)]
struct Status {
    id: u64,
    #[serde(alias = "full_text")]
    text: String,
    in_reply_to_status_id: Option<u64>,
    user: User,
}

#[derive(Debug, Deserialize)]
struct User {
    screen_name: String,
}

impl From<Status> for Reply {
    fn from(status: Status) -> Self {
        Self {
            id: status.id,
            text: status.text,
            author: format!("@{}", status.user.screen_name),
            in_reply_to: status.in_reply_to_status_id,
        }
    }
}

#[derive(Clone)]
pub struct SearchClient {
    client: Client,
    base: String,
    credentials: Credentials,
}

impl SearchClient {
    pub fn new(base: String, credentials: Credentials) -> Self {
        Self {
            client: Client::new(),
            base,
            credentials,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_base.clone(), config.credentials.clone())
    }

    /// Fetch one page of search results, newest first.
    pub async fn search_page(
        &self,
        query: &str,
        count: usize,
        max_id: Option<u64>,
    ) -> Result<Vec<Reply>, SearchError> {
        let url = format!("{}{}", self.base, SEARCH_PATH);
        let count = count.to_string();
        let max_id = max_id.map(|id| id.to_string());

        let mut params = vec![
            ("q", query),
            ("count", count.as_str()),
            ("tweet_mode", "extended"),
            ("result_type", "recent"),
        ];
        if let Some(max_id) = &max_id {
            params.push(("max_id", max_id.as_str()));
        }

        let auth = oauth::authorization_header(
            &self.credentials,
            "GET",
            &url,
            &params,
            &Nonce::generate(),
        )?;

        let response = self
            .client
            .get(&url)
            .query(&params)
            .header(reqwest::header::AUTHORIZATION, auth)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(SearchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: SearchResponse = serde_json::from_str(&body)?;
        Ok(parsed.statuses.into_iter().map(Reply::from).collect())
    }

    /// Walk the search results page by page, up to `limit` statuses.
    pub fn cursor(&self, query: &str, limit: usize) -> SearchCursor<'_> {
        SearchCursor {
            client: self,
            query: query.to_string(),
            max_id: None,
            remaining: limit,
        }
    }
}

pub struct SearchCursor<'a> {
    client: &'a SearchClient,
    query: String,
    max_id: Option<u64>,
    remaining: usize,
}

impl SearchCursor<'_> {
    /// Next page of results, or `None` once the search is exhausted or the
    /// limit is reached.
    pub async fn next_page(&mut self) -> Result<Option<Vec<Reply>>, SearchError> {
        if self.remaining == 0 {
            return Ok(None);
        }

        let count = self.remaining.min(PAGE_SIZE);
        let mut page = self
            .client
            .search_page(&self.query, count, self.max_id)
            .await?;
        if page.is_empty() {
            self.remaining = 0;
            return Ok(None);
        }

        page.truncate(self.remaining);
        self.remaining -= page.len();

        // Older results only from here on.
        match page.iter().map(|reply| reply.id).min() {
            Some(0) | None => self.remaining = 0,
            Some(lowest) => self.max_id = Some(lowest - 1),
        }

        Ok(Some(page))
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }
}
