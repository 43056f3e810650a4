//! Clients for the services an indexed object gets registered with.
//!
//! Both services authenticate writes with HTTP basic auth, using the
//! credentials from the resolved job config. Reads go out unauthenticated.

use indexs3client_config::ServiceCredential;
use reqwest::{RequestBuilder, StatusCode};
use thiserror::Error;

pub use indexd::IndexdClient;
pub use metadata::MetadataClient;

mod indexd;
mod metadata;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Received error from the service: {0}")]
    ServerError(#[source] anyhow::Error),
    #[error("Conflict, the record was changed by someone else")]
    Conflict,
    #[error("Permission denied to perform operation")]
    Unauthorized,
    #[error("Requested record was not found")]
    NotFound,
    #[error("Failed to deserialize response")]
    Deserialization(#[from] serde_json::Error),
    #[error("Received unknown error")]
    Other(#[from] anyhow::Error),
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        if let Some(status) = value.status() {
            match status {
                StatusCode::INTERNAL_SERVER_ERROR => Self::ServerError(anyhow::anyhow!(value)),
                StatusCode::CONFLICT => Self::Conflict,
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Self::Unauthorized,
                StatusCode::NOT_FOUND => Self::NotFound,
                _ => Self::Other(anyhow::anyhow!(value)),
            }
        } else {
            Self::Other(anyhow::anyhow!(value))
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Base URL plus credentials for one service.
struct Endpoint {
    http: reqwest::Client,
    base: String,
    username: String,
    password: String,
}

impl Endpoint {
    fn new(credential: &ServiceCredential, http: reqwest::Client) -> Self {
        Self {
            http,
            base: credential.url.trim_end_matches('/').to_string(),
            username: credential.username.clone(),
            password: credential.password.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.http.get(self.url(path))
    }

    fn put(&self, path: &str) -> RequestBuilder {
        self.http
            .put(self.url(path))
            .basic_auth(&self.username, Some(&self.password))
    }
}
