//! XtremIO REST API Client
//!
//! Fetches the cluster resource from the XtremIO Management Server (XMS) over HTTPS with
//! basic authentication. Exactly one request is made per call; there is no retry.
//!
//! # Example
//!
//! ```no_run
//! use xio_collector::config::{ArrayConfig, HttpConfig};
//! use xio_collector::xtremio::XtremIoClient;
//! use secrecy::SecretString;
//!
//! # async fn example() -> xio_collector::error::Result<()> {
//! let array = ArrayConfig {
//!     name: "xio01.example.com".to_string(),
//!     username: "admin".to_string(),
//!     password: SecretString::from("secret"),
//!     use_tls: true,
//!     verify_ssl: false,
//! };
//!
//! let client = XtremIoClient::new(array, &HttpConfig::default())?;
//! let cluster = client.fetch_cluster().await?;
//! println!("{}", cluster.serial_number);
//! # Ok(())
//! # }
//! ```

use crate::config::{ArrayConfig, HttpConfig};
use crate::error::{CollectorError, Result};
use crate::http;
use crate::xtremio::types::{Cluster, ClusterResponse};
use reqwest::StatusCode;
use secrecy::ExposeSecret;
use tracing::debug;

pub struct XtremIoClient {
    config: ArrayConfig,
    http: reqwest::Client,
}

impl XtremIoClient {
    pub fn new(config: ArrayConfig, http_config: &HttpConfig) -> Result<Self> {
        let http = http::build_client(http_config, config.verify_ssl)?;
        Ok(Self { config, http })
    }

    /// Query cluster information
    ///
    /// Failures are classified so the caller can report them precisely:
    /// - `ArrayTransport` when the XMS cannot be reached or the body cannot be read
    /// - `ArrayAuth` on HTTP 401/403
    /// - `ArrayStatus` on any other non-2xx status
    /// - `ArraySchema` when the body is not the expected JSON document
    pub async fn fetch_cluster(&self) -> Result<Cluster> {
        let url = self.config.cluster_url();
        debug!("Requesting {}", url);

        let response = self
            .http
            .get(&url)
            .basic_auth(
                &self.config.username,
                Some(self.config.password.expose_secret()),
            )
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(CollectorError::ArrayTransport)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(CollectorError::ArrayAuth(status.as_u16()));
        }
        if !status.is_success() {
            return Err(CollectorError::ArrayStatus {
                status: status.as_u16(),
                body: http::error_body(response).await,
            });
        }

        let body = response
            .text()
            .await
            .map_err(CollectorError::ArrayTransport)?;
        debug!("Cluster response received ({} bytes)", body.len());

        let parsed: ClusterResponse = serde_json::from_str(&body)
            .map_err(|e| CollectorError::ArraySchema(e.to_string()))?;
        Ok(parsed.content)
    }
}
