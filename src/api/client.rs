use async_trait::async_trait;

use super::{ExchangeError, QueryBackend};
use crate::models::{QueryRequest, QueryResponse};

/// reqwest-backed implementation of the query exchange
pub struct HttpQueryBackend {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpQueryBackend {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl QueryBackend for HttpQueryBackend {
    async fn query(&self, request: &QueryRequest) -> Result<QueryResponse, ExchangeError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ExchangeError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
