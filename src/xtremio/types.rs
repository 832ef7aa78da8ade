//! XtremIO REST API v2 Type Definitions
//!
//! Only the cluster resource (`/api/json/v2/types/clusters/{index}`) is modelled, and only
//! the fields the capacity record needs. Unknown fields are ignored.
//!
//! # Units
//!
//! `ud-ssd-space` and `ud-ssd-space-in-use` are reported in KiB. Depending on the XMS
//! release they arrive either as JSON numbers or as numeric strings, so both are accepted.

use serde::{Deserialize, Deserializer};

/// Envelope returned by `GET /api/json/v2/types/clusters/1`
#[derive(Debug, Deserialize, Clone)]
pub struct ClusterResponse {
    pub content: Cluster,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Cluster {
    /// Brick/size class label such as `"1X20TB"`
    #[serde(rename = "size-and-capacity")]
    pub size_and_capacity: String,
    #[serde(rename = "sys-psnt-serial-number")]
    pub serial_number: String,
    #[serde(rename = "sys-sw-version")]
    pub sw_version: String,
    #[serde(rename = "ud-ssd-space", deserialize_with = "number_or_string")]
    pub ud_ssd_space: f64,
    #[serde(rename = "ud-ssd-space-in-use", deserialize_with = "number_or_string")]
    pub ud_ssd_space_in_use: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("expected a number, got {s:?}"))),
    }
}
