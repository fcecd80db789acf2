//! MCP server for National Weather Service alerts and forecasts
//!
//! Exposes two tools over the MCP stdio transport: `get_alerts` (active
//! alerts for a US state) and `get_forecast` (forecast for a coordinate
//! pair). Both are stateless fetch-parse-format pipelines; all data-path
//! failures collapse into fixed report strings rather than protocol errors.

pub mod client;
pub mod constants;
pub mod formatters;
pub mod models;
pub mod service;

pub use client::{FetchError, NwsClient, NwsConfig};
pub use service::WeatherService;
