//! Synchronous Apify actor runs
//!
//! One POST to `acts/{actor}/run-sync-get-dataset-items` starts the actor,
//! waits for it to finish and returns its dataset items in the response body.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::core::config::ServiceConfig;
use crate::core::error::{Result, ScrapeError};

/// Apify actor identifiers
pub const LINKEDIN_ACTOR: &str = "bebity~linkedin-jobs-scraper";
pub const INDEED_ACTOR: &str = "misceres~indeed-scraper";

/// Anything able to run an actor and hand back its dataset items.
#[async_trait]
pub trait ActorRunner: Send + Sync {
    async fn invoke(&self, actor_id: &str, payload: &Value, api_key: &str) -> Result<Vec<Value>>;
}

pub struct ActorClient {
    client: Client,
    base_url: String,
}

impl ActorClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    fn endpoint(&self, actor_id: &str) -> String {
        format!(
            "{}/acts/{}/run-sync-get-dataset-items",
            self.base_url.trim_end_matches('/'),
            actor_id
        )
    }
}

#[async_trait]
impl ActorRunner for ActorClient {
    async fn invoke(&self, actor_id: &str, payload: &Value, api_key: &str) -> Result<Vec<Value>> {
        let url = self.endpoint(actor_id);
        info!(actor = actor_id, "Running Apify actor");

        let response = self
            .client
            .post(&url)
            .query(&[("token", api_key)])
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // The body is only context for the message; losing it is fine.
            let body = response.text().await.unwrap_or_default();
            warn!(actor = actor_id, status = status.as_u16(), "Apify actor run failed");
            return Err(ScrapeError::Upstream {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            });
        }

        let body = response.text().await?;
        let items: Vec<Value> = serde_json::from_str(&body)
            .map_err(|e| ScrapeError::MalformedResponse(format!("expected a JSON array ({})", e)))?;

        debug!(actor = actor_id, items = items.len(), "Apify actor returned dataset");
        Ok(items)
    }
}
