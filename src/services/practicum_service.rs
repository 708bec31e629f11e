use reqwest::Client;
use serde_json::Value;
use tracing::error;

use crate::error::{Error, Result};

pub const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

#[derive(Clone)]
pub struct PracticumService {
    client: Client,
    endpoint: String,
    token: String,
}

impl PracticumService {
    pub fn new(token: String, endpoint: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client for Practicum API");

        Self {
            client,
            endpoint,
            token,
        }
    }

    /// Requests every homework status update since `from_date` (Unix
    /// seconds). Returns the decoded body as-is; shape validation is the
    /// caller's job.
    pub async fn fetch(&self, from_date: i64) -> Result<Value> {
        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| {
                error!("Practicum API is unreachable: {}", e);
                Error::Connection(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(
                "Practicum API returned status {} for {}",
                status, self.endpoint
            );
            return Err(Error::Endpoint {
                url: self.endpoint.clone(),
                from_date,
                reason: status.to_string(),
            });
        }

        response.json::<Value>().await.map_err(Error::Connection)
    }
}
