use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Runtime overrides: `DEX_API_BASE` for the endpoint root,
    /// `DEX_HTTP_TIMEOUT_MS` for the request timeout.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("DEX_API_BASE")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            timeout: parse_timeout_ms(std::env::var("DEX_HTTP_TIMEOUT_MS").ok()),
        }
    }
}

fn parse_timeout_ms(raw: Option<String>) -> Duration {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_TIMEOUT)
}
