use std::env;
use thiserror::Error;

pub const CREDENTIAL_VARS: [&str; 4] = [
    "TWITTER_CONSUMER_KEY",
    "TWITTER_CONSUMER_SECRET",
    "TWITTER_ACCESS_TOKEN",
    "TWITTER_ACCESS_TOKEN_SECRET",
];

/// The two competition tweets whose replies hold the guesses.
pub const DEFAULT_TWEET_IDS: [u64; 2] = [1007579550505734144, 1007615177842360320];
pub const DEFAULT_SEARCH_QUERY: &str = "to:@standupmaths";
pub const DEFAULT_API_BASE: &str = "https://api.twitter.com";
pub const DEFAULT_SEARCH_LIMIT: usize = 10000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variables: {}", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Clone)]
pub struct Credentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub access_token_secret: String,
}

// Secrets stay out of Debug output.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &self.consumer_key)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub api_base: String,
    pub search_query: String,
    pub tweet_ids: Vec<u64>,
    pub search_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from any variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let missing: Vec<&'static str> = CREDENTIAL_VARS
            .iter()
            .copied()
            .filter(|name| get(*name).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::MissingCredentials(missing));
        }

        let credentials = Credentials {
            consumer_key: get("TWITTER_CONSUMER_KEY").unwrap_or_default(),
            consumer_secret: get("TWITTER_CONSUMER_SECRET").unwrap_or_default(),
            access_token: get("TWITTER_ACCESS_TOKEN").unwrap_or_default(),
            access_token_secret: get("TWITTER_ACCESS_TOKEN_SECRET").unwrap_or_default(),
        };

        let tweet_ids = match get("GUESS_TWEET_IDS") {
            Some(raw) => parse_ids(&raw).ok_or(ConfigError::Invalid {
                name: "GUESS_TWEET_IDS",
                value: raw,
            })?,
            None => DEFAULT_TWEET_IDS.to_vec(),
        };

        let search_limit = match get("GUESS_SEARCH_LIMIT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                name: "GUESS_SEARCH_LIMIT",
                value: raw,
            })?,
            None => DEFAULT_SEARCH_LIMIT,
        };

        Ok(Self {
            credentials,
            api_base: get("TWITTER_API_BASE")
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            search_query: get("GUESS_SEARCH_QUERY")
                .unwrap_or_else(|| DEFAULT_SEARCH_QUERY.to_string()),
            tweet_ids,
            search_limit,
        })
    }
}

fn parse_ids(raw: &str) -> Option<Vec<u64>> {
    let ids: Vec<u64> = raw
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse().ok())
        .collect::<Option<_>>()?;
    if ids.is_empty() {
        None
    } else {
        Some(ids)
    }
}
