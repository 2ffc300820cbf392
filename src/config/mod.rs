use std::time::Duration;

use crate::domain::Platform;
use crate::errors::{FeedGenError, FeedGenResult};

const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct NotebrookConfig {
    pub url: String,
    pub token: String,
    pub channel: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Platforms registered with the classifier
    pub platforms: Vec<Platform>,
    /// rss-bridge host, without scheme
    pub rss_bridge: Option<String>,
    pub fetch_timeout: Duration,
    pub notebrook: Option<NotebrookConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            platforms: Platform::ALL.to_vec(),
            rss_bridge: None,
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            notebrook: None,
        }
    }
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> FeedGenResult<Self> {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        let platforms = match std::env::var("FEEDGEN_PLATFORMS") {
            Ok(value) => parse_platforms(&value)?,
            Err(_) => Platform::ALL.to_vec(),
        };

        let rss_bridge = std::env::var("RSS_BRIDGE")
            .ok()
            .map(|host| normalize_bridge_host(&host))
            .filter(|host| !host.is_empty());

        if platforms.contains(&Platform::Instagram) && rss_bridge.is_none() {
            return Err(FeedGenError::MissingEnvVar("RSS_BRIDGE".to_string()));
        }

        let fetch_timeout = match std::env::var("FEEDGEN_FETCH_TIMEOUT") {
            Ok(value) => parse_timeout(&value)?,
            Err(_) => Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
        };

        let notebrook = match (
            std::env::var("NOTEBROOK_URL"),
            std::env::var("NOTEBROOK_TOKEN"),
        ) {
            (Ok(url), Ok(token)) => Some(NotebrookConfig {
                url,
                token,
                channel: std::env::var("NOTEBROOK_CHANNEL")
                    .unwrap_or_else(|_| "feeds".to_string()),
            }),
            _ => None,
        };

        Ok(Self {
            platforms,
            rss_bridge,
            fetch_timeout,
            notebrook,
        })
    }

    /// Notebrook settings, required only when replies are delivered there
    pub fn notebrook(&self) -> FeedGenResult<&NotebrookConfig> {
        self.notebrook.as_ref().ok_or_else(|| {
            FeedGenError::MissingEnvVar("NOTEBROOK_URL and NOTEBROOK_TOKEN".to_string())
        })
    }
}

/// Parse a comma-separated platform list such as `youtube,instagram`
pub fn parse_platforms(value: &str) -> FeedGenResult<Vec<Platform>> {
    let mut platforms = Vec::new();

    for name in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let platform: Platform = name.parse().map_err(FeedGenError::Config)?;
        if !platforms.contains(&platform) {
            platforms.push(platform);
        }
    }

    if platforms.is_empty() {
        return Err(FeedGenError::Config(
            "FEEDGEN_PLATFORMS must name at least one platform".to_string(),
        ));
    }

    Ok(platforms)
}

fn parse_timeout(value: &str) -> FeedGenResult<Duration> {
    let secs: u64 = value.trim().parse().map_err(|_| {
        FeedGenError::Config(format!("FEEDGEN_FETCH_TIMEOUT is not a number: {}", value))
    })?;

    if secs == 0 {
        return Err(FeedGenError::Config(
            "FEEDGEN_FETCH_TIMEOUT must be at least 1 second".to_string(),
        ));
    }

    Ok(Duration::from_secs(secs))
}

/// Strip scheme and trailing slashes: `https://bridge.example/` -> `bridge.example`
pub fn normalize_bridge_host(value: &str) -> String {
    let host = value.trim();
    let host = host
        .strip_prefix("https://")
        .or_else(|| host.strip_prefix("http://"))
        .unwrap_or(host);

    host.trim_end_matches('/').to_string()
}
