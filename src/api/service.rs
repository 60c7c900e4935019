//! Thin HTTP helpers
//!
//! `buscar`, `cadastrar` and `atualizar` issue GET, POST and PUT requests
//! and hand the decoded body to a caller supplied setter.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Per-request options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestConfig {
    /// Value of the `Authorization` header, sent verbatim
    pub authorization: Option<String>,
}

impl RequestConfig {
    /// Config carrying the session token
    pub fn authorized(token: &str) -> Self {
        Self {
            authorization: Some(token.to_string()),
        }
    }

    fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.authorization {
            Some(token) => request.header("Authorization", token.as_str()),
            None => request,
        }
    }
}

/// HTTP access to the backend base URL
#[derive(Debug, Clone)]
pub struct Service {
    client: Client,
    base_url: String,
}

impl Service {
    /// Create a service for `base_url` with a request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::Setup)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Backend base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the absolute URL for a backend path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` and pass the decoded body to `setter`
    pub async fn buscar<T, F>(
        &self,
        path: &str,
        setter: F,
        config: &RequestConfig,
    ) -> Result<(), ApiError>
    where
        T: DeserializeOwned,
        F: FnOnce(T),
    {
        let request = config.apply(self.client.get(self.url(path)));
        setter(self.send(path, request).await?);
        Ok(())
    }

    /// POST `body` to `path` and pass the decoded reply to `setter`
    pub async fn cadastrar<B, T, F>(
        &self,
        path: &str,
        body: &B,
        setter: F,
        config: &RequestConfig,
    ) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
        F: FnOnce(T),
    {
        let request = config.apply(self.client.post(self.url(path)).json(body));
        setter(self.send(path, request).await?);
        Ok(())
    }

    /// PUT `body` to `path` and pass the decoded reply to `setter`
    pub async fn atualizar<B, T, F>(
        &self,
        path: &str,
        body: &B,
        setter: F,
        config: &RequestConfig,
    ) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
        F: FnOnce(T),
    {
        let request = config.apply(self.client.put(self.url(path)).json(body));
        setter(self.send(path, request).await?);
        Ok(())
    }

    async fn send<T: DeserializeOwned>(
        &self,
        path: &str,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        tracing::debug!("request {}", path);

        let response = request.send().await.map_err(|source| ApiError::Transport {
            path: path.to_string(),
            source,
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|source| ApiError::Transport {
            path: path.to_string(),
            source,
        })?;

        if !status.is_success() {
            tracing::warn!("{} returned {}", path, status);
            return Err(ApiError::Status {
                path: path.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            path: path.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let service = Service::new("http://localhost:4000/", Duration::from_secs(5)).unwrap();
        assert_eq!(service.base_url(), "http://localhost:4000");
        assert_eq!(service.url("/temas/2"), "http://localhost:4000/temas/2");
    }

    #[test]
    fn test_authorized_config_keeps_token_verbatim() {
        let config = RequestConfig::authorized("Bearer abc.def");
        assert_eq!(config.authorization.as_deref(), Some("Bearer abc.def"));
        assert_eq!(RequestConfig::default().authorization, None);
    }
}
