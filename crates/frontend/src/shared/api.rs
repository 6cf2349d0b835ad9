//! Client for the collection endpoints of the backend.
//!
//! Screens never build requests themselves: they receive an [`ApiClient`] from
//! context (see `app.rs`), so tests can substitute a fake implementation.

use std::sync::Arc;

use async_trait::async_trait;
use contracts::shared::list_query::{CollectionPage, CollectionQuery};
use gloo_net::http::Request;
use serde_json::Value;
use thiserror::Error;

use super::api_utils::ClientConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server responded with status {status}")]
    Server { status: u16 },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("failed to encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Text shown in the screen's error placeholder
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Could not reach the server. Check your connection and try again.".to_string(),
            ApiError::Server { status } if *status >= 500 => {
                format!("The server failed to process the request ({}).", status)
            }
            ApiError::Server { status } => format!("The request was rejected ({}).", status),
            ApiError::Decode(_) | ApiError::Encode(_) => {
                "Unexpected data from the server.".to_string()
            }
        }
    }
}

#[async_trait(?Send)]
pub trait CollectionApi: Send + Sync {
    /// One page of `endpoint` for the given query
    async fn get_collection(
        &self,
        endpoint: &str,
        query: &CollectionQuery,
    ) -> Result<CollectionPage<Value>, ApiError>;

    /// Creates a record and returns the stored representation
    async fn create_record(&self, endpoint: &str, body: Value) -> Result<Value, ApiError>;
}

pub type ApiClient = Arc<dyn CollectionApi>;

/// Builds `<base><endpoint>?<query>`
pub fn collection_url(
    config: &ClientConfig,
    endpoint: &str,
    query: &CollectionQuery,
) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(query).map_err(|e| ApiError::Encode(e.to_string()))?;
    Ok(format!("{}?{}", config.url(endpoint), qs))
}

/// HTTP implementation over gloo-net
#[derive(Debug, Clone)]
pub struct HttpCollectionApi {
    config: ClientConfig,
}

impl HttpCollectionApi {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl CollectionApi for HttpCollectionApi {
    async fn get_collection(
        &self,
        endpoint: &str,
        query: &CollectionQuery,
    ) -> Result<CollectionPage<Value>, ApiError> {
        let url = collection_url(&self.config, endpoint, query)?;

        let response = Request::get(&url)
            .header("Accept", "application/json")
            .header("Cache-Control", "no-cache")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Server {
                status: response.status(),
            });
        }

        response
            .json::<CollectionPage<Value>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn create_record(&self, endpoint: &str, body: Value) -> Result<Value, ApiError> {
        let response = Request::post(&self.config.url(endpoint))
            .json(&body)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Server {
                status: response.status(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::list_query::{FilterClauseDto, FilterOperator, SortDirection};

    #[test]
    fn test_collection_url_encodes_state() {
        let config = ClientConfig::new("http://localhost:3000", 10);
        let query = CollectionQuery {
            filters: vec![FilterClauseDto {
                property: "address".into(),
                operator: FilterOperator::IsBlank,
                value: None,
            }],
            page: 2,
            page_size: 10,
            query: "smith".into(),
            sort: SortDirection::Desc,
            sort_by: "createdAt".into(),
            view: "all".into(),
        };

        let url = collection_url(&config, "/api/leads", &query).unwrap();
        assert!(url.starts_with("http://localhost:3000/api/leads?"));
        assert!(url.contains("page=2"));
        assert!(url.contains("query=smith"));
        assert!(url.contains("sort=desc"));
        assert!(url.contains("sortBy=createdAt"));
        assert!(url.contains("is-blank"));
        assert!(!url.contains("value"));
    }

    #[test]
    fn test_user_message() {
        assert!(ApiError::Server { status: 503 }.user_message().contains("503"));
        assert!(ApiError::Network("x".into()).user_message().contains("server"));
    }
}
