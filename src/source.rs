//! Collection Sources
//!
//! Transport layer for reading a resource collection. The dashboard only
//! ever issues unauthenticated GETs and never retries.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[cfg(feature = "server")]
pub use reqwest_source::HttpSource;

/// Errors that end a view in the failed phase
#[derive(Error, Debug)]
pub enum FetchError {
    /// Network, DNS or TLS failure; carries the transport's own message
    #[error("{0}")]
    Transport(String),

    /// Response arrived with a non-success status
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    /// Body was not valid JSON
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// Anything that can produce the decoded JSON payload behind a URL
#[async_trait]
pub trait CollectionSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Value, FetchError>;
}

#[cfg(feature = "server")]
mod reqwest_source {
    use async_trait::async_trait;
    use reqwest::Client;
    use serde_json::Value;
    use std::time::Duration;

    use super::{CollectionSource, FetchError};
    use crate::config::BackendConfig;

    /// reqwest-backed source used against the real backend
    #[derive(Clone)]
    pub struct HttpSource {
        client: Client,
    }

    impl HttpSource {
        /// Create a source honouring the configured request timeout
        pub fn new(backend: &BackendConfig) -> Result<Self, FetchError> {
            let mut builder = Client::builder();
            if let Some(secs) = backend.request_timeout_secs {
                builder = builder.timeout(Duration::from_secs(secs));
            }
            let client = builder
                .build()
                .map_err(|e| FetchError::Transport(e.to_string()))?;

            Ok(Self { client })
        }
    }

    #[async_trait]
    impl CollectionSource for HttpSource {
        async fn fetch(&self, url: &str) -> Result<Value, FetchError> {
            let response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Http {
                    status: status.as_u16(),
                });
            }

            let body = response
                .bytes()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;

            serde_json::from_slice(&body).map_err(|e| FetchError::Parse(e.to_string()))
        }
    }
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;
    use crate::config::BackendConfig;
    use axum::{http::StatusCode, routing::get, Json, Router};
    use serde_json::json;

    async fn spawn_backend() -> String {
        let app = Router::new()
            .route(
                "/api/activities/",
                get(|| async { Json(json!([{"name": "Run"}, {"name": "Swim"}])) }),
            )
            .route(
                "/api/teams/",
                get(|| async { Json(json!({"count": 1, "results": [{"name": "Team DC"}]})) }),
            )
            .route(
                "/api/users/",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
            )
            .route("/api/workouts/", get(|| async { "<html>not json</html>" }));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}", addr)
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FetchError::Http { status: 404 }.to_string(),
            "HTTP error! status: 404"
        );
        assert_eq!(
            FetchError::Transport("connection refused".into()).to_string(),
            "connection refused"
        );
    }

    #[tokio::test]
    async fn test_fetch_plain_array() {
        let base = spawn_backend().await;
        let source = HttpSource::new(&BackendConfig::default()).unwrap();

        let payload = source.fetch(&format!("{}/api/activities/", base)).await.unwrap();
        assert_eq!(payload, json!([{"name": "Run"}, {"name": "Swim"}]));
    }

    #[tokio::test]
    async fn test_fetch_envelope() {
        let base = spawn_backend().await;
        let source = HttpSource::new(&BackendConfig::default()).unwrap();

        let payload = source.fetch(&format!("{}/api/teams/", base)).await.unwrap();
        assert_eq!(payload["results"][0]["name"], "Team DC");
    }

    #[tokio::test]
    async fn test_fetch_http_error() {
        let base = spawn_backend().await;
        let source = HttpSource::new(&BackendConfig::default()).unwrap();

        let err = source.fetch(&format!("{}/api/users/", base)).await.unwrap_err();
        assert!(matches!(err, FetchError::Http { status: 500 }));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_fetch_not_found() {
        let base = spawn_backend().await;
        let source = HttpSource::new(&BackendConfig::default()).unwrap();

        let err = source.fetch(&format!("{}/api/nothing/", base)).await.unwrap_err();
        assert!(matches!(err, FetchError::Http { status: 404 }));
    }

    #[tokio::test]
    async fn test_fetch_invalid_json() {
        let base = spawn_backend().await;
        let source = HttpSource::new(&BackendConfig::default()).unwrap();

        let err = source.fetch(&format!("{}/api/workouts/", base)).await.unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        // Reserve a port, then free it so nothing is listening
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source = HttpSource::new(&BackendConfig::default()).unwrap();
        let err = source
            .fetch(&format!("http://{}/api/activities/", addr))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Transport(_)));
        assert!(!err.to_string().is_empty());
    }
}
