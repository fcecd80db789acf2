use crate::constants::FORECAST_PERIOD_LIMIT;
use crate::models::{AlertFeature, AlertProperties, ForecastPeriod};

/// Placeholder for alert fields absent from the API payload
const UNKNOWN: &str = "Unknown";

/// Separator line between rendered blocks; never emitted after the last block
const BLOCK_SEPARATOR: &str = "\n---\n";

/// Formats active alerts into a human-readable report.
///
/// Each alert renders as a five-line block; blocks are joined with a `---`
/// line, with no separator after the last one. An empty feature list yields
/// the fixed no-alerts message.
pub fn format_alerts(features: &[AlertFeature]) -> String {
    if features.is_empty() {
        return "No active alerts for this state.".to_string();
    }

    features
        .iter()
        .map(|feature| format_alert(&feature.properties))
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

fn format_alert(props: &AlertProperties) -> String {
    format!(
        "Event: {}\nArea: {}\nSeverity: {}\nDescription: {}\nInstructions: {}",
        props.event.as_deref().unwrap_or(UNKNOWN),
        props.area_desc.as_deref().unwrap_or(UNKNOWN),
        props.severity.as_deref().unwrap_or(UNKNOWN),
        props.description.as_deref().unwrap_or(UNKNOWN),
        props.instruction.as_deref().unwrap_or(UNKNOWN),
    )
}

/// Formats the leading forecast periods into a human-readable report.
///
/// Only the first five periods are included, in their original order, joined
/// the same way as alert blocks.
pub fn format_forecast(periods: &[ForecastPeriod]) -> String {
    periods
        .iter()
        .take(FORECAST_PERIOD_LIMIT)
        .map(format_period)
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

fn format_period(period: &ForecastPeriod) -> String {
    format!(
        "{}:\nTemperature: {}\u{00b0}{}\nWind: {} {}\nForecast: {}",
        period.name,
        period.temperature,
        period.temperature_unit,
        period.wind_speed,
        period.wind_direction,
        period.detailed_forecast,
    )
}
