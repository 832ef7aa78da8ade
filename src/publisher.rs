//! Inventory API Publisher
//!
//! Sends the capacity record to the storage inventory API as a single JSON `PUT`.
//! Any transport failure or non-2xx status fails the run; nothing is retried.

use crate::config::{HttpConfig, TargetConfig};
use crate::error::{CollectorError, Result};
use crate::http;
use crate::record::ArrayCapacityRecord;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::{debug, info};

pub struct InventoryPublisher {
    url: String,
    http: reqwest::Client,
}

impl InventoryPublisher {
    pub fn new(config: &TargetConfig, http_config: &HttpConfig) -> Result<Self> {
        let http = http::build_client(http_config, config.verify_ssl)?;
        Ok(Self {
            url: config.url.clone(),
            http,
        })
    }

    pub async fn publish(&self, record: &ArrayCapacityRecord) -> Result<()> {
        let body = serde_json::to_string(record)?;
        info!("Publishing record to {}", self.url);

        let response = self
            .http
            .put(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(CollectorError::PublishTransport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CollectorError::PublishStatus {
                status: status.as_u16(),
                body: http::error_body(response).await,
            });
        }

        debug!("Target API accepted record with HTTP {}", status.as_u16());
        Ok(())
    }
}
