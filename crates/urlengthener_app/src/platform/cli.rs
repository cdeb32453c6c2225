use std::time::Duration;

use clap::Parser;
use url::Url;
use urlengthener_engine::TransportSettings;

use super::logging::LogDestination;

#[derive(Parser, Debug)]
#[command(name = "urlengthener")]
#[command(author, version, about = "Terminal client for a URL lengthening service", long_about = None)]
pub struct Args {
    /// Origin of the lengthening service; result URLs are built on it
    #[arg(short, long, default_value = "http://localhost:8080")]
    pub origin: String,

    /// Seconds allowed to establish a connection (0 waits forever)
    #[arg(long, default_value = "10")]
    pub connect_timeout_secs: u64,

    /// Where log output goes
    #[arg(long, value_enum, default_value = "file")]
    pub log: LogDestination,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid origin {origin:?}: {reason}")]
    InvalidOrigin { origin: String, reason: String },
}

#[derive(Debug, Clone)]
pub struct Settings {
    /// Serialized origin, never with a trailing slash.
    pub origin: String,
    pub transport: TransportSettings,
    pub log: LogDestination,
}

impl Args {
    pub fn into_settings(self) -> Result<Settings, ConfigError> {
        let origin = normalize_origin(&self.origin)?;
        let connect_timeout = match self.connect_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };
        Ok(Settings {
            origin,
            transport: TransportSettings { connect_timeout },
            log: self.log,
        })
    }
}

fn normalize_origin(raw: &str) -> Result<String, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidOrigin {
        origin: raw.to_string(),
        reason,
    };

    let parsed = Url::parse(raw).map_err(|err| invalid(err.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("scheme must be http or https, got {}", parsed.scheme())));
    }
    if parsed.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }
    if parsed.path() != "/" || parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(invalid("must not contain a path, query or fragment".to_string()));
    }
    Ok(parsed.origin().ascii_serialization())
}
