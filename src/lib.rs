//! XtremIO Capacity Collector
//!
//! Collects capacity and identity data from a Dell EMC XtremIO array and publishes it to a
//! storage inventory API.
//!
//! # Overview
//!
//! A run makes exactly two requests, in order: an authenticated `GET` of the array's cluster
//! resource, then a `PUT` of the normalized record to the inventory API. Any failure ends
//! the run with exit status 1; nothing is retried.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐   GET clusters/1    ┌──────────────┐    PUT JSON     ┌────────────┐
//! │  XtremIO    │ ◄─────────────────► │  Collector   │ ──────────────► │ Inventory  │
//! │    XMS      │   HTTPS, basic auth │              │                 │    API     │
//! └─────────────┘                     └──────────────┘                 └────────────┘
//! ```
//!
//! # Modules
//!
//! - [`xtremio`] - XMS REST client and response types
//! - [`record`] - Capacity record and unit conversion
//! - [`publisher`] - Inventory API publisher
//! - [`collector`] - Run orchestration and exit status
//! - [`resolve`] - Array hostname resolution check
//! - [`config`] - Configuration management
//! - [`logging`] - Scoped log subscriber
//! - [`error`] - Error types
//!
//! # Quick Start
//!
//! ```no_run
//! use xio_collector::{collector, config::{Config, Overrides}};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let outcome = match Config::load("config/Default.toml", &Overrides::default()) {
//!         Ok(config) => collector::run(&config).await.map(|_| ()),
//!         Err(e) => Err(e),
//!     };
//!     std::process::exit(collector::report(&outcome).into());
//! }
//! ```

pub mod collector;
pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod publisher;
pub mod record;
pub mod resolve;
pub mod xtremio;
