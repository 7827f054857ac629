use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use config::{Config, ConfigError, Environment, File};
use tracing::debug;

const DEFAULT_CONFIG_FILE: &str = "config/default";
const ENV_PREFIX: &str = "APPSTORE_RATINGS";

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
    pub store: StoreConfig,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StoreConfig {
    pub base_url: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: "https://apps.apple.com".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_secs: u64,
    pub browser: BrowserProfile,
    pub headers: HashMap<String, String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        let mut headers = HashMap::new();
        headers.insert("Accept-Language".to_string(), "en-US,en;q=0.9".to_string());
        Self {
            timeout_secs: 15,
            browser: BrowserProfile::default(),
            headers,
        }
    }
}

/// Browser the HTTP client presents itself as. The store rejects stock client identities.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BrowserProfile {
    #[default]
    Chrome,
    Firefox,
    Safari,
    Edge,
}

impl BrowserProfile {
    pub fn user_agent(self) -> &'static str {
        match self {
            BrowserProfile::Chrome => concat!(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) ",
                "AppleWebKit/537.36 (KHTML, like Gecko) Chrome/133.0.0.0 Safari/537.36"
            ),
            BrowserProfile::Firefox => concat!(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:136.0) ",
                "Gecko/20100101 Firefox/136.0"
            ),
            BrowserProfile::Safari => concat!(
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) ",
                "AppleWebKit/605.1.15 (KHTML, like Gecko) Version/18.3 Safari/605.1.15"
            ),
            BrowserProfile::Edge => concat!(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) ",
                "AppleWebKit/537.36 (KHTML, like Gecko) Chrome/134.0.0.0 Safari/537.36 Edg/134.0.0.0"
            ),
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Builds settings from `path` (optional) and `APPSTORE_RATINGS_*` variables on top of the built-in defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with(path, Self::environment())
    }

    /// `APPSTORE_RATINGS_HTTP__TIMEOUT_SECS=30` sets `http.timeout_secs`.
    pub fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    pub fn load_with(path: &Path, environment: Environment) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(environment);

        let config = builder.build()?;
        let settings: Settings = config.try_deserialize()?;

        debug!(
            base_url = %settings.store.base_url,
            timeout_secs = settings.http.timeout_secs,
            browser = ?settings.http.browser,
            headers = ?settings.http.headers,
            "Loaded settings"
        );

        Ok(settings)
    }
}
