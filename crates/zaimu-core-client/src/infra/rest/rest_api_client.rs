// zaimu-core-client/zaimu-core-client
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

use parking_lot::RwLock;
use reqwest::{Method, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("The server responded with status {status}.")]
    Status { status: StatusCode },
    #[error("Not authenticated against the API.")]
    NotAuthenticated,
    #[error(transparent)]
    Network(#[from] reqwest::Error),
    #[error("Unexpected response shape: {msg}")]
    Malformed { msg: String },
}

/// List endpoints either return a bare array or a paginated envelope,
/// depending on whether pagination applies to the resource.
#[derive(Deserialize)]
#[serde(untagged)]
enum ListResponse<T> {
    Paginated { results: Vec<T> },
    Plain(Vec<T>),
}

impl<T> ListResponse<T> {
    fn into_items(self) -> Vec<T> {
        match self {
            ListResponse::Paginated { results } => results,
            ListResponse::Plain(items) => items,
        }
    }
}

/// Thin wrapper around the backend's REST API. Holds the session token and
/// attaches it to every request.
pub struct RestApiClient {
    base_url: Url,
    client: reqwest::Client,
    token: RwLock<Option<Secret<String>>>,
}

impl RestApiClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
            token: RwLock::new(None),
        }
    }

    pub fn set_token(&self, token: Option<Secret<String>>) {
        *self.token.write() = token;
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        params: &[(String, String)],
    ) -> Result<T, ApiError> {
        let response = self
            .request(Method::GET, segments)?
            .query(params)
            .send()
            .await?;
        Self::check_status(&response)?;
        Ok(response.json().await?)
    }

    pub async fn get_list<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        params: &[(String, String)],
    ) -> Result<Vec<T>, ApiError> {
        Ok(self
            .get::<ListResponse<T>>(segments, params)
            .await?
            .into_items())
    }

    /// Like `get`, but treats a 404 as the resource not existing yet.
    pub async fn get_opt<T: DeserializeOwned>(
        &self,
        segments: &[&str],
    ) -> Result<Option<T>, ApiError> {
        let response = self.request(Method::GET, segments)?.send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::check_status(&response)?;
        Ok(Some(response.json().await?))
    }

    pub async fn put(&self, segments: &[&str], body: &impl Serialize) -> Result<(), ApiError> {
        let response = self
            .request(Method::PUT, segments)?
            .json(body)
            .send()
            .await?;
        Self::check_status(&response)
    }

    pub async fn post(&self, segments: &[&str], body: &impl Serialize) -> Result<(), ApiError> {
        let response = self
            .request(Method::POST, segments)?
            .json(body)
            .send()
            .await?;
        Self::check_status(&response)
    }

    /// Deleting something that is already gone is not an error.
    pub async fn delete(&self, segments: &[&str]) -> Result<(), ApiError> {
        let response = self.request(Method::DELETE, segments)?.send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(());
        }
        Self::check_status(&response)
    }

    fn request(
        &self,
        method: Method,
        segments: &[&str],
    ) -> Result<reqwest::RequestBuilder, ApiError> {
        let token = self
            .token
            .read()
            .as_ref()
            .map(|token| token.expose_secret().clone())
            .ok_or(ApiError::NotAuthenticated)?;

        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| ApiError::Malformed {
                msg: "The API base URL cannot carry path segments.".to_string(),
            })?;
            path.pop_if_empty();
            path.extend(segments);
        }

        Ok(self
            .client
            .request(method, url)
            .header("Authorization", format!("Token {token}")))
    }

    fn check_status(response: &reqwest::Response) -> Result<(), ApiError> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ApiError::NotAuthenticated);
        }
        if !status.is_success() {
            return Err(ApiError::Status { status });
        }
        Ok(())
    }
}
