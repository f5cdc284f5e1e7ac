use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use eyre::WrapErr;

use diseasenet_core::models::report::ReportFormat;

pub const DEFAULT_MODEL_PATH: &str = "assets/model.json";
pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";

/// Startup configuration, read once from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// `DISEASENET_MODEL`
    pub model_path: PathBuf,
    /// `DISEASENET_ADDR`
    pub addr: SocketAddr,
    /// `DISEASENET_REPORT_FORMAT`, used when a request names no format.
    pub report_format: ReportFormat,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup. Unset keys take their
    /// defaults; set but unparseable values are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let model_path = lookup("DISEASENET_MODEL")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH));

        let addr_raw = lookup("DISEASENET_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_raw
            .parse::<SocketAddr>()
            .wrap_err_with(|| format!("invalid DISEASENET_ADDR: {addr_raw}"))?;

        let report_format = match lookup("DISEASENET_REPORT_FORMAT") {
            Some(raw) => raw
                .parse::<ReportFormat>()
                .wrap_err("invalid DISEASENET_REPORT_FORMAT")?,
            None => ReportFormat::default(),
        };

        Ok(Self {
            model_path,
            addr,
            report_format,
        })
    }
}
