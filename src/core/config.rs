use std::env;

pub const DEFAULT_LOG_FILTER: &str = "kernel_notify=info";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub log_filter: String,
    pub pretty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let log_filter =
            env::var("KERNEL_NOTIFY_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());
        let pretty = env::var("KERNEL_NOTIFY_PRETTY")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Self { log_filter, pretty }
    }
}

impl AppConfig {
    /// Render a value as JSON honoring the `pretty` setting.
    pub fn to_json<T: serde::Serialize>(&self, value: &T) -> serde_json::Result<String> {
        if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}
