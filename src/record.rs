//! Array Capacity Record
//!
//! The normalized document accepted by the storage inventory API. One record is built per
//! run from a single cluster response and is discarded once published.
//!
//! # Capacity
//!
//! - `usable_TBu` = `ud-ssd-space / 2^30`
//! - `available_TBu` = `(ud-ssd-space - ud-ssd-space-in-use) / 2^30`
//!
//! The array reports KiB, so dividing by 2^30 yields TBu (2^40 bytes). Both values are
//! rounded to three decimals, ties to even. In-use space is never negative and never
//! exceeds usable space, so `available_TBu <= usable_TBu` holds after rounding.

use crate::error::{CollectorError, Result};
use crate::xtremio::types::Cluster;
use serde::{Deserialize, Serialize};

pub const VENDOR: &str = "DellEMC";
pub const TIER: &str = "performance";
pub const MODEL_PREFIX: &str = "XtremIO";

/// KiB per TBu
const KIB_PER_TBU: f64 = (1u64 << 30) as f64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayCapacityRecord {
    pub array_name: String,
    pub serial_number: String,
    pub vendor: String,
    pub model: String,
    pub version: String,
    pub tier: String,
    pub capacity: Capacity,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Capacity {
    #[serde(rename = "available_TBu")]
    pub available_tbu: f64,
    #[serde(rename = "usable_TBu")]
    pub usable_tbu: f64,
}

impl Capacity {
    /// Derive capacity from raw KiB counters
    pub fn from_kib(usable_kib: f64, in_use_kib: f64) -> Result<Self> {
        check_space("ud-ssd-space", usable_kib)?;
        check_space("ud-ssd-space-in-use", in_use_kib)?;
        if in_use_kib > usable_kib {
            return Err(CollectorError::ArraySchema(format!(
                "ud-ssd-space-in-use ({in_use_kib}) exceeds ud-ssd-space ({usable_kib})"
            )));
        }

        Ok(Self {
            available_tbu: kib_to_tbu(usable_kib - in_use_kib),
            usable_tbu: kib_to_tbu(usable_kib),
        })
    }
}

impl ArrayCapacityRecord {
    pub fn from_cluster(array_name: &str, cluster: &Cluster) -> Result<Self> {
        let capacity = Capacity::from_kib(cluster.ud_ssd_space, cluster.ud_ssd_space_in_use)?;

        Ok(Self {
            array_name: array_name.to_string(),
            serial_number: cluster.serial_number.clone(),
            vendor: VENDOR.to_string(),
            model: format!("{} {}", MODEL_PREFIX, cluster.size_and_capacity),
            version: cluster.sw_version.clone(),
            tier: TIER.to_string(),
            capacity,
        })
    }
}

/// Convert KiB to TBu rounded to three decimals
pub fn kib_to_tbu(kib: f64) -> f64 {
    round3(kib / KIB_PER_TBU)
}

/// Half-to-even on exact ties, so 1.0625 becomes 1.062
fn round3(value: f64) -> f64 {
    (value * 1000.0).round_ties_even() / 1000.0
}

fn check_space(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CollectorError::ArraySchema(format!(
            "{field} must be a non-negative number, got {value}"
        )));
    }
    Ok(())
}
