use crate::scoring::{FactorCode, FactorLabels, ScoringConfig, Thresholds};
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub scoring: ScoringConfig,
    pub analysis: AnalysisConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(&var_or("APP_ENV", "development"));

        let host = var_or("APP_HOST", "127.0.0.1");
        let port = var_or("APP_PORT", "3000")
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = var_or("APP_LOG_LEVEL", "info");
        let log_format = LogFormat::from_str(&var_or("APP_LOG_FORMAT", "compact"));

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig {
                log_level,
                format: log_format,
            },
            scoring: load_scoring()?,
            analysis: load_analysis()?,
        })
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn load_scoring() -> Result<ScoringConfig, ConfigError> {
    let defaults = Thresholds::default();
    let thresholds = Thresholds {
        buy: threshold_var("PDS_BUY_THRESHOLD", defaults.buy)?,
        consider: threshold_var("PDS_CONSIDER_THRESHOLD", defaults.consider)?,
    };
    if !thresholds.is_ordered() {
        return Err(ConfigError::InvertedThresholds {
            buy: thresholds.buy,
            consider: thresholds.consider,
        });
    }

    let mut labels = FactorLabels::default();
    for code in FactorCode::ordered() {
        if let Ok(label) = env::var(format!("PDS_LABEL_{code}")) {
            if !label.trim().is_empty() {
                labels.set(code, label.trim());
            }
        }
    }

    Ok(ScoringConfig { thresholds, labels })
}

fn threshold_var(key: &'static str, default: i16) -> Result<i16, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<i16>()
            .map_err(|_| ConfigError::InvalidThreshold { key, value: raw }),
        Err(_) => Ok(default),
    }
}

fn load_analysis() -> Result<AnalysisConfig, ConfigError> {
    let endpoint = env::var("ANALYSIS_ENDPOINT")
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty());

    let timeout = match env::var("ANALYSIS_TIMEOUT_MS") {
        Ok(raw) => match raw.trim().parse::<u64>() {
            Ok(millis) if millis > 0 => Duration::from_millis(millis),
            _ => return Err(ConfigError::InvalidTimeout { value: raw }),
        },
        Err(_) => AnalysisConfig::DEFAULT_TIMEOUT,
    };

    Ok(AnalysisConfig { endpoint, timeout })
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
}

impl LogFormat {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub format: LogFormat,
}

/// Remote analyzer wiring. Without an endpoint every request is answered by
/// the local heuristic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub endpoint: Option<String>,
    pub timeout: Duration,
}

impl AnalysisConfig {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidThreshold { key: &'static str, value: String },
    InvertedThresholds { buy: i16, consider: i16 },
    InvalidTimeout { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidThreshold { key, value } => {
                write!(f, "{key} must be an integer (got '{value}')")
            }
            ConfigError::InvertedThresholds { buy, consider } => write!(
                f,
                "PDS_CONSIDER_THRESHOLD ({consider}) must not exceed PDS_BUY_THRESHOLD ({buy})"
            ),
            ConfigError::InvalidTimeout { value } => write!(
                f,
                "ANALYSIS_TIMEOUT_MS must be a positive integer (got '{value}')"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidThreshold { .. }
            | ConfigError::InvertedThresholds { .. }
            | ConfigError::InvalidTimeout { .. } => None,
        }
    }
}
