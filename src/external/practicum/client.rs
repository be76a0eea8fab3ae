use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{StatusCode, Url};
use serde_json::Value;

use super::StatusSource;
use super::error::ApiError;
use crate::config::error::ConfigError;
use crate::config::{Credentials, PracticumConfig};
use crate::external::client::HTTP_CLIENT;

/// Client for the homework statuses endpoint.
pub struct PracticumClient {
    endpoint: Url,
    api_token: String,
}

impl PracticumClient {
    /// # Errors
    /// `ConfigError::ValidationError` when the endpoint is not a valid URL.
    pub fn new(config: &PracticumConfig, credentials: &Credentials) -> Result<Self, ConfigError> {
        let endpoint = Url::parse(&config.endpoint).map_err(|e| ConfigError::ValidationError {
            field: "practicum.endpoint".to_string(),
            message: format!("Invalid endpoint '{}': {}", config.endpoint, e),
        })?;

        Ok(Self {
            endpoint,
            api_token: credentials.api_token().to_owned(),
        })
    }

    fn request_url(&self, cursor: i64) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("from_date", &cursor.to_string());
        url
    }

    fn authorization(&self) -> String {
        format!("OAuth {}", self.api_token)
    }
}

#[async_trait]
impl StatusSource for PracticumClient {
    fn name(&self) -> &'static str {
        "practicum"
    }

    async fn fetch_status(&self, cursor: i64) -> Result<Value, ApiError> {
        let url = self.request_url(cursor);
        let endpoint = self.endpoint.to_string();
        tracing::debug!(%endpoint, from_date = cursor, "Requesting homework statuses");

        let resp = HTTP_CLIENT
            .get(url)
            .header(AUTHORIZATION, self.authorization())
            .send()
            .await
            .map_err(|e: reqwest::Error| ApiError::Request {
                endpoint: endpoint.clone(),
                source: e.into(),
            })?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(ApiError::UnexpectedStatus {
                endpoint,
                status: status.as_u16(),
            });
        }

        let payload: Value = resp.json().await.map_err(|e: reqwest::Error| ApiError::Decode {
            endpoint: endpoint.clone(),
            source: e.into(),
        })?;

        tracing::debug!(%endpoint, %payload, "Homework statuses received");
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(endpoint: &str) -> PracticumClient {
        let config = PracticumConfig {
            endpoint: endpoint.to_string(),
        };
        let credentials = Credentials::new("y0_token", "123:bot", "42").unwrap();
        PracticumClient::new(&config, &credentials).expect("valid endpoint")
    }

    #[test]
    fn test_platform_name() {
        assert_eq!(client("https://example.com/api/").name(), "practicum");
    }

    #[test]
    fn test_request_url_carries_cursor() {
        let client = client("https://practicum.example/api/user_api/homework_statuses/");
        assert_eq!(
            client.request_url(1000).as_str(),
            "https://practicum.example/api/user_api/homework_statuses/?from_date=1000"
        );
        assert_eq!(client.request_url(0).query(), Some("from_date=0"));
    }

    #[test]
    fn test_request_url_keeps_existing_query() {
        let client = client("https://practicum.example/statuses?lang=en");
        assert_eq!(client.request_url(7).query(), Some("lang=en&from_date=7"));
    }

    #[test]
    fn test_authorization_header_uses_oauth_scheme() {
        assert_eq!(client("https://example.com/").authorization(), "OAuth y0_token");
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let config = PracticumConfig {
            endpoint: "not a url".to_string(),
        };
        let credentials = Credentials::new("a", "b", "c").unwrap();
        assert!(PracticumClient::new(&config, &credentials).is_err());
    }

    #[test]
    fn test_unexpected_status_carries_code() {
        let err = ApiError::UnexpectedStatus {
            endpoint: "https://example.com/".to_string(),
            status: 503,
        };
        assert_eq!(err.status(), Some(503));
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    #[ignore = "requires network access"]
    async fn test_real_api_rejects_fake_token() {
        let client = client("https://practicum.yandex.ru/api/user_api/homework_statuses/");
        let err = client.fetch_status(0).await.unwrap_err();
        assert_eq!(err.status(), Some(401));
    }
}
