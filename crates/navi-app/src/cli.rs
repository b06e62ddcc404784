//! CLI argument definitions for the NaviSenpai application.
//!
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

/// NaviSenpai - a bilingual support assistant for international students.
#[derive(Parser, Debug)]
#[command(name = "navisenpai", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// API server port.
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,

    /// API server bind address.
    #[arg(long = "host")]
    pub host: Option<String>,

    /// Topic catalog file replacing the built-in one.
    #[arg(short = 'k', long = "knowledge")]
    pub knowledge: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Answer one message, print the reply as JSON, and exit.
    #[arg(long = "ask", value_name = "MESSAGE")]
    pub ask: Option<String>,

    /// Reply language for --ask (en or jp).
    #[arg(long = "lang", default_value = "en")]
    pub lang: String,

    /// Topic id from a previous reply, for --ask.
    #[arg(long = "context", requires = "ask")]
    pub context: Option<String>,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > NAVI_CONFIG env var > ~/.navisenpai/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("NAVI_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the API server port.
    ///
    /// Priority: --port flag > NAVI_PORT env var > config file value.
    pub fn resolve_port(&self, config_port: u16) -> u16 {
        if let Some(p) = self.port {
            return p;
        }
        if let Ok(val) = std::env::var("NAVI_PORT") {
            if let Ok(p) = val.parse::<u16>() {
                return p;
            }
        }
        config_port
    }

    pub fn resolve_host(&self, config_host: &str) -> String {
        self.host
            .clone()
            .unwrap_or_else(|| config_host.to_string())
    }

    /// Resolve the catalog path.
    ///
    /// Priority: --knowledge flag > NAVI_KNOWLEDGE env var > config file value.
    /// `None` means the built-in catalog.
    pub fn resolve_knowledge_path(&self, config_path: Option<&str>) -> Option<PathBuf> {
        if let Some(ref p) = self.knowledge {
            return Some(p.clone());
        }
        if let Ok(p) = std::env::var("NAVI_KNOWLEDGE") {
            if !p.is_empty() {
                return Some(PathBuf::from(p));
            }
        }
        config_path.map(PathBuf::from)
    }

    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".navisenpai").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".navisenpai").join("config.toml");
    }
    PathBuf::from("config.toml")
}
