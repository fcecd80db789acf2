use anyhow::Result;
use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};

use crate::client::{NwsClient, NwsConfig};
use crate::formatters::{format_alerts, format_forecast};
use crate::models::{
    AlertResponse, ForecastResponse, GetAlertsRequest, GetForecastRequest, PointsResponse,
};

/// Fallback when the alerts endpoint cannot be fetched or parsed
const ALERTS_UNAVAILABLE: &str = "Unable to fetch alerts or no alerts found.";

/// Fallback when the point-metadata lookup fails
const POINTS_UNAVAILABLE: &str = "Unable to fetch forecast data for this location.";

/// Fallback when the chained forecast fetch fails
const FORECAST_UNAVAILABLE: &str = "Unable to fetch detailed forecast.";

/// Weather service that handles MCP tool calls
pub struct WeatherService {
    client: NwsClient,
    tool_router: ToolRouter<Self>,
}

impl WeatherService {
    /// Creates a service backed by the public NWS API
    pub fn new() -> Result<Self> {
        Ok(Self::with_client(NwsClient::with_defaults()?))
    }

    /// Creates a service with a custom configuration
    pub fn with_config(config: NwsConfig) -> Result<Self> {
        Ok(Self::with_client(NwsClient::new(config)?))
    }

    /// Creates a service around an existing client
    pub fn with_client(client: NwsClient) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    /// Fetches and renders active alerts for a two-letter state code.
    ///
    /// Every failure path collapses into one of the fixed report strings;
    /// this method never surfaces an error to the caller.
    pub async fn alerts_report(&self, state: &str) -> String {
        let url = format!("{}/alerts/active/area/{}", self.client.base_url(), state);

        match self.client.fetch_json::<AlertResponse>(&url).await {
            Ok(alerts) => format_alerts(&alerts.features),
            Err(e) => {
                tracing::warn!(state = %state, error = %e, "Alert fetch failed");
                ALERTS_UNAVAILABLE.to_string()
            }
        }
    }

    /// Fetches and renders the forecast for a coordinate pair.
    ///
    /// Two dependent fetches: the point metadata names the forecast resource,
    /// which is then fetched verbatim. Each hop has its own fixed fallback
    /// string; no error is surfaced to the caller.
    pub async fn forecast_report(&self, latitude: f64, longitude: f64) -> String {
        let points_url = format!(
            "{}/points/{},{}",
            self.client.base_url(),
            latitude,
            longitude
        );

        let points = match self.client.fetch_json::<PointsResponse>(&points_url).await {
            Ok(points) => points,
            Err(e) => {
                tracing::warn!(lat = %latitude, lon = %longitude, error = %e, "Point lookup failed");
                return POINTS_UNAVAILABLE.to_string();
            }
        };

        match self
            .client
            .fetch_json::<ForecastResponse>(&points.properties.forecast)
            .await
        {
            Ok(forecast) => format_forecast(&forecast.properties.periods),
            Err(e) => {
                tracing::warn!(lat = %latitude, lon = %longitude, error = %e, "Forecast fetch failed");
                FORECAST_UNAVAILABLE.to_string()
            }
        }
    }
}

#[tool_handler]
impl ServerHandler for WeatherService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "nws-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "A weather information service powered by the National Weather Service API. \
                Provides active weather alerts and forecasts for US locations."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl WeatherService {
    /// Gets active weather alerts for a US state
    #[tool(description = "Get active weather alerts for a US state. Provide a two-letter state code (e.g., 'CA' for California, 'NY' for New York).")]
    async fn get_alerts(
        &self,
        Parameters(request): Parameters<GetAlertsRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting alerts for state: {}", request.state);

        let report = self.alerts_report(&request.state).await;

        Ok(CallToolResult::success(vec![Content::text(report)]))
    }

    /// Gets the weather forecast for a US location
    #[tool(description = "Get weather forecast for a US location. Provide latitude and longitude (e.g., latitude: 38.8894, longitude: -77.0352 for Washington, DC).")]
    async fn get_forecast(
        &self,
        Parameters(request): Parameters<GetForecastRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting forecast for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );

        let report = self
            .forecast_report(request.latitude, request.longitude)
            .await;

        Ok(CallToolResult::success(vec![Content::text(report)]))
    }
}
