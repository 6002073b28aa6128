use std::{env, fmt, time::Duration};

use notes_core::table::{notes_table_schema, TableSchema, DEFAULT_TABLE_NAME};

/// Origins allowed to call the API when `CORS_ALLOWED_ORIGINS` is unset.
pub const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3001,http://localhost:3000";

/// Application configuration loaded from environment variables.
///
/// Built once at startup and passed by reference to the store, the bootstrap
/// and the router.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backing store connection and table settings.
    pub store: StoreConfig,
    /// Origins allowed to make credentialed cross-origin requests.
    pub allowed_origins: Vec<String>,
    /// Log output format (default: pretty).
    pub log_format: LogFormat,
    /// Values that could not be parsed and were replaced by their default.
    pub warnings: Vec<String>,
}

/// Connection settings for the key-value backend.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Table holding the notes (default: "Notes").
    pub table_name: String,
    /// AWS region (default: "us-east-1").
    pub region: String,
    /// Custom endpoint URL, e.g. DynamoDB Local on `http://localhost:8000`.
    pub endpoint_url: Option<String>,
    /// Static credentials. When `None` the SDK default chain is used.
    pub credentials: Option<StaticCredentials>,
    /// How many times to poll for the table to become active (default: 60).
    pub wait_max_attempts: u32,
    /// Delay between activation polls (default: 2s).
    pub wait_interval: Duration,
}

/// Explicit access keys for the backend.
#[derive(Clone, PartialEq, Eq)]
pub struct StaticCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
}

impl fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .field("session_token", &self.session_token.as_ref().map(|_| "** redacted **"))
            .finish()
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-field lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Some(LogFormat::Pretty),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `NOTES_TABLE_NAME` - Table name (default: "Notes")
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    /// - `AWS_ENDPOINT_URL` - Custom endpoint (default: unset)
    /// - `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY`, `AWS_SESSION_TOKEN` - Static credentials
    /// - `TABLE_WAIT_MAX_ATTEMPTS` - Activation polls (default: 60)
    /// - `TABLE_WAIT_INTERVAL_SECS` - Seconds between polls (default: 2)
    /// - `CORS_ALLOWED_ORIGINS` - Comma separated origins
    /// - `LOG_FORMAT` - "pretty" or "json" (default: "pretty")
    ///
    /// Unparseable values fall back to their default and are listed in
    /// [`Config::warnings`], to be logged once tracing is up.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut warnings = Vec::new();

        let credentials = match (var("AWS_ACCESS_KEY_ID"), var("AWS_SECRET_ACCESS_KEY")) {
            (Some(access_key_id), Some(secret_access_key)) => Some(StaticCredentials {
                access_key_id,
                secret_access_key,
                session_token: var("AWS_SESSION_TOKEN"),
            }),
            _ => None,
        };

        let store = StoreConfig {
            table_name: var("NOTES_TABLE_NAME").unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
            region: var("AWS_REGION").unwrap_or_else(|| "us-east-1".to_string()),
            endpoint_url: var("AWS_ENDPOINT_URL"),
            credentials,
            wait_max_attempts: parse_setting(
                "TABLE_WAIT_MAX_ATTEMPTS",
                var("TABLE_WAIT_MAX_ATTEMPTS"),
                |v| v.trim().parse::<u32>().ok().filter(|n| *n > 0),
                60,
                "a positive integer",
                &mut warnings,
            ),
            wait_interval: Duration::from_secs(parse_setting(
                "TABLE_WAIT_INTERVAL_SECS",
                var("TABLE_WAIT_INTERVAL_SECS"),
                |v| v.trim().parse::<u64>().ok(),
                2,
                "a whole number of seconds",
                &mut warnings,
            )),
        };

        let allowed_origins = parse_origins(
            &var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string()),
        );

        let log_format = parse_setting(
            "LOG_FORMAT",
            var("LOG_FORMAT"),
            LogFormat::parse,
            LogFormat::default(),
            "\"pretty\" or \"json\"",
            &mut warnings,
        );

        Self {
            store,
            allowed_origins,
            log_format,
            warnings,
        }
    }

    /// Schema of the notes table, under the configured name.
    pub fn table_schema(&self) -> TableSchema {
        notes_table_schema().with_table_name(&self.store.table_name)
    }
}

impl StoreConfig {
    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("DynamoDB at {}", url),
            None => format!("AWS DynamoDB (region: {})", self.region),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Parses an optional setting, recording a warning when a present value is rejected.
fn parse_setting<T: fmt::Display>(
    key: &str,
    raw: Option<String>,
    parse: impl Fn(&str) -> Option<T>,
    default: T,
    expected: &str,
    warnings: &mut Vec<String>,
) -> T {
    let Some(raw) = raw else {
        return default;
    };

    parse(&raw).unwrap_or_else(|| {
        warnings.push(format!(
            "{key}={raw:?} is not {expected}, using {default}"
        ));
        default
    })
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(|o| o.trim_end_matches('/').to_string())
        .collect()
}
