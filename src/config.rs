use std::env;
use std::time::Duration;

use tracing::info;

/// Quantum the search box waits after the last keystroke before committing
pub const DEFAULT_DEBOUNCE_MS: u64 = 400;

const DEFAULT_API_URL: &str = "https://api.letscout.ie";
const DEFAULT_REGION: &str = "Ireland";

/// Runtime configuration, read once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the listings backend; also used to absolutize
    /// relative image paths
    pub api_base_url: String,
    /// Label substituted when a record carries no usable location
    pub default_region: String,
    pub debounce: Duration,
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            api_base_url: load_var("LETSCOUT_API_URL", DEFAULT_API_URL),
            default_region: load_var("LETSCOUT_DEFAULT_REGION", DEFAULT_REGION),
            debounce: Duration::from_millis(
                load_var("LETSCOUT_DEBOUNCE_MS", &DEFAULT_DEBOUNCE_MS.to_string())
                    .parse()
                    .unwrap_or(DEFAULT_DEBOUNCE_MS),
            ),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            default_region: DEFAULT_REGION.to_string(),
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            request_timeout: Duration::from_secs(30),
        }
    }
}

fn load_var(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}
