//! Built-in weather lookup tool.

use crate::builtins::utils::parse_args;
use crate::context::ToolContext;
use crate::tool::Tool;
use async_trait::async_trait;
use log::{error, info};
use serde::Deserialize;
use serde_json::{Value, json};
use vesper_protocol::ToolError;

/// Tool returning a one-line current-conditions summary for a city.
#[derive(Debug, Default)]
pub struct GetWeatherTool;

/// Arguments for GetWeatherTool.
#[derive(Debug, Deserialize)]
struct GetWeatherArgs {
    city: String,
}

#[async_trait]
impl Tool for GetWeatherTool {
    fn name(&self) -> &str {
        "get_weather"
    }

    fn description(&self) -> &str {
        "Fetch the current weather for a given city"
    }

    fn args_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "city": {
                    "type": "string",
                    "description": "City name to look up."
                }
            },
            "required": ["city"]
        })
    }

    async fn call(&self, ctx: &ToolContext, args: Value) -> Result<String, ToolError> {
        let input: GetWeatherArgs = parse_args(args)?;
        let city = input.city.trim();
        if city.is_empty() {
            return Err(ToolError::InvalidArguments(
                "city cannot be empty".to_string(),
            ));
        }
        let provider = ctx.services.weather.as_ref().ok_or_else(|| {
            ToolError::ExecutionFailed("weather provider not configured".to_string())
        })?;
        match provider.current(city).await {
            Ok(line) => {
                info!("weather data fetched (city={})", city);
                Ok(line)
            }
            Err(ToolError::Upstream { status }) => {
                error!("weather lookup rejected (city={}, status={})", city, status);
                Ok(format!("Could not fetch weather for {city}."))
            }
            Err(err) => {
                error!("weather lookup failed (city={}): {err}", city);
                Ok(format!(
                    "An error occurred while fetching weather for {city}."
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GetWeatherTool;
    use crate::context::{ToolContext, ToolServices};
    use crate::tool::Tool;
    use crate::weather::WeatherProvider;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Arc;
    use vesper_protocol::ToolError;

    enum Outcome {
        Line(&'static str),
        Status(u16),
        Transport,
    }

    struct FixedWeather {
        outcome: Outcome,
    }

    #[async_trait]
    impl WeatherProvider for FixedWeather {
        async fn current(&self, _city: &str) -> Result<String, ToolError> {
            match self.outcome {
                Outcome::Line(line) => Ok(line.to_string()),
                Outcome::Status(status) => Err(ToolError::Upstream { status }),
                Outcome::Transport => Err(ToolError::Timeout("deadline elapsed".to_string())),
            }
        }
    }

    fn context_with(outcome: Outcome) -> ToolContext {
        ToolContext::new(
            "David",
            Arc::new(ToolServices {
                weather: Some(Arc::new(FixedWeather { outcome })),
                ..ToolServices::default()
            }),
        )
    }

    #[tokio::test]
    async fn returns_conditions_line_on_success() {
        let ctx = context_with(Outcome::Line("London: +20\u{b0}C"));
        let result = GetWeatherTool
            .call(&ctx, json!({ "city": "London" }))
            .await
            .expect("result");
        assert_eq!(result, "London: +20\u{b0}C".to_string());
    }

    #[tokio::test]
    async fn converts_bad_status_into_failure_string() {
        let ctx = context_with(Outcome::Status(503));
        let result = GetWeatherTool
            .call(&ctx, json!({ "city": "London" }))
            .await
            .expect("result");
        assert_eq!(result, "Could not fetch weather for London.".to_string());
    }

    #[tokio::test]
    async fn converts_transport_fault_into_failure_string() {
        let ctx = context_with(Outcome::Transport);
        let result = GetWeatherTool
            .call(&ctx, json!({ "city": "London" }))
            .await
            .expect("result");
        assert_eq!(
            result,
            "An error occurred while fetching weather for London.".to_string()
        );
    }

    #[tokio::test]
    async fn rejects_empty_city() {
        let ctx = context_with(Outcome::Line("unused"));
        let err = GetWeatherTool
            .call(&ctx, json!({ "city": " " }))
            .await
            .expect_err("empty city");
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[tokio::test]
    async fn errors_without_provider() {
        let ctx = ToolContext::new("David", Arc::new(ToolServices::default()));
        let err = GetWeatherTool
            .call(&ctx, json!({ "city": "London" }))
            .await
            .expect_err("missing provider");
        let ToolError::ExecutionFailed(message) = err else {
            panic!("expected execution failed");
        };
        assert_eq!(message, "weather provider not configured");
    }
}
