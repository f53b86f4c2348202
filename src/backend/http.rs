use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{BackendError, UserBackend};
use crate::users::model::{NewUser, User, UserPage};

/// Talks to a backend exposing `/api/users` over HTTP/JSON.
#[derive(Clone)]
pub struct HttpBackend {
    http: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Result<Self, BackendError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(BackendError::InvalidArgument(format!(
                "backend url must start with http:// or https://, got {base_url:?}"
            )));
        }
        let http = Client::builder()
            .user_agent(concat!("userdesk/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| BackendError::Unreachable(e.to_string()))?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send(&self, req: reqwest::RequestBuilder) -> Result<Response, BackendError> {
        req.send()
            .await
            .map_err(|e| BackendError::Unreachable(e.to_string()))
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, BackendError> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| BackendError::Unreachable(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| BackendError::Decode(e.to_string()))
}

async fn status_error(response: Response) -> BackendError {
    let status = response.status();
    let message = response.text().await.unwrap_or_default();
    match status {
        StatusCode::CONFLICT => BackendError::AlreadyExists(message),
        StatusCode::BAD_REQUEST => BackendError::InvalidArgument(message),
        _ => BackendError::Status {
            status: status.as_u16(),
            message,
        },
    }
}

#[async_trait]
impl UserBackend for HttpBackend {
    async fn list_users(&self, page: u32, page_size: u32) -> Result<UserPage, BackendError> {
        let url = format!("{}/api/users", self.base_url);
        debug!(url = %url, page, page_size, "list users");

        let response = self
            .send(
                self.http
                    .get(&url)
                    .query(&[("page", page), ("page_size", page_size)]),
            )
            .await?;
        if !response.status().is_success() {
            return Err(status_error(response).await);
        }
        decode(response).await
    }

    async fn get_user(&self, id: u64) -> Result<Option<User>, BackendError> {
        let url = format!("{}/api/users/{}", self.base_url, id);
        debug!(url = %url, "get user");

        let response = self.send(self.http.get(&url)).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(status_error(response).await);
        }
        // a `null` body is an explicit "no such user"
        decode::<Option<User>>(response).await
    }

    async fn create_user(&self, req: &NewUser) -> Result<User, BackendError> {
        let url = format!("{}/api/users", self.base_url);
        debug!(url = %url, email = %req.email, "create user");

        let response = self.send(self.http.post(&url).json(req)).await?;
        if !response.status().is_success() {
            return Err(status_error(response).await);
        }
        decode(response).await
    }
}
