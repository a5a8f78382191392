use crate::domain::ports::QueryClient;
use crate::utils::error::{Result, StatError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

#[derive(Debug, Deserialize)]
struct LiteratureResponse {
    hits: Hits,
}

#[derive(Debug, Deserialize)]
struct Hits {
    total: u64,
}

/// INSPIRE REST API 客戶端，只取 hits.total
#[derive(Debug, Clone)]
pub struct InspireHttpClient {
    client: Client,
    endpoint: Url,
    search_prefix: String,
}

impl InspireHttpClient {
    pub fn new(
        endpoint: &str,
        search_prefix: impl Into<String>,
        timeout_seconds: Option<u64>,
    ) -> Result<Self> {
        let endpoint = Url::parse(endpoint).map_err(|e| StatError::InvalidConfigValueError {
            field: "client.endpoint".to_string(),
            value: endpoint.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout_seconds {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        Ok(Self {
            client: builder.build()?,
            endpoint,
            search_prefix: search_prefix.into(),
        })
    }

    fn request_url(&self, search_expression: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("q", &format!("{}{}", self.search_prefix, search_expression))
            .append_pair("size", "1")
            .append_pair("fields", "control_number");
        url
    }
}

#[async_trait]
impl QueryClient for InspireHttpClient {
    async fn count(&self, search_expression: &str) -> Result<u64> {
        let url = self.request_url(search_expression);
        tracing::debug!("Making API request to: {}", url);

        let response = self.client.get(url).send().await?;
        tracing::debug!("API response status: {}", response.status());

        let bytes = response.error_for_status()?.bytes().await?;
        let body: LiteratureResponse = serde_json::from_slice(&bytes)?;
        Ok(body.hits.total)
    }

    fn describe(&self, search_expression: &str) -> String {
        format!("GET {}", self.request_url(search_expression))
    }
}
