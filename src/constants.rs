/// User agent string for HTTP requests
pub const USER_AGENT: &str = "nws-mcp-server/0.1.0";

/// National Weather Service API base URL
pub const NWS_API_BASE: &str = "https://api.weather.gov";

/// Media type the NWS API serves for alert and forecast resources
pub const GEO_JSON_ACCEPT: &str = "application/geo+json";

/// Per-request timeout in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Number of forecast periods included in a report
pub const FORECAST_PERIOD_LIMIT: usize = 5;
