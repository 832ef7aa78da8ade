//! Collection run
//!
//! One run is strictly sequential:
//! 1. Resolve the array hostname (no request is made if this fails)
//! 2. Fetch the cluster resource from the array
//! 3. Build the [`ArrayCapacityRecord`]
//! 4. Publish it to the inventory API
//!
//! The first failure ends the run. [`report`] is the single place that turns the outcome
//! into log output and a process exit status.

use crate::config::Config;
use crate::error::Result;
use crate::publisher::InventoryPublisher;
use crate::record::ArrayCapacityRecord;
use crate::resolve::resolve_array;
use crate::xtremio::XtremIoClient;
use tracing::{debug, error, info, info_span, Instrument};

/// Exit status of a successful run
pub const EXIT_SUCCESS: u8 = 0;

/// Collect the array's capacity and publish it. Returns the record that was sent.
pub async fn run(config: &Config) -> Result<ArrayCapacityRecord> {
    let span = info_span!("collect", array = %config.array.name);
    collect_and_publish(config).instrument(span).await
}

async fn collect_and_publish(config: &Config) -> Result<ArrayCapacityRecord> {
    resolve_array(&config.array.name, config.array.default_port()).await?;

    info!("Collecting XtremIO array information: {}", config.array.name);
    let client = XtremIoClient::new(config.array.clone(), &config.http)?;
    let cluster = client.fetch_cluster().await?;
    let record = ArrayCapacityRecord::from_cluster(&config.array.name, &cluster)?;

    debug!(
        "Getting ready to send payload to API endpoint. Here is the payload: {}",
        serde_json::to_string(&record)?
    );

    let publisher = InventoryPublisher::new(&config.target, &config.http)?;
    publisher.publish(&record).await?;

    info!(
        "Published {} (serial {}): {} TBu available of {} TBu usable",
        record.array_name,
        record.serial_number,
        record.capacity.available_tbu,
        record.capacity.usable_tbu
    );
    Ok(record)
}

/// Log the outcome of a run and return the process exit status
pub fn report<T>(outcome: &Result<T>) -> u8 {
    match outcome {
        Ok(_) => {
            info!("Collection completed successfully");
            EXIT_SUCCESS
        }
        Err(e) if e.is_critical() => {
            error!(severity = "critical", "{}", e);
            e.exit_code()
        }
        Err(e) => {
            error!("{}", e);
            e.exit_code()
        }
    }
}
