use crate::config::Config;
use crate::domain::Platform;
use crate::errors::{FeedGenError, FeedGenResult};
use crate::sources::fetcher::HttpFetcher;
use crate::sources::traits::FeedSource;
use crate::sources::validate::is_valid_url;
use crate::sources::{instagram::InstagramSource, youtube::YouTubeSource};

/// Outcome of classifying a raw message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Supported(Platform),
    Unrecognized,
    NotAUrl,
}

pub struct SourceRegistry {
    sources: Vec<Box<dyn FeedSource>>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Register the configured platforms in classifier priority order
    pub fn from_config(config: &Config) -> FeedGenResult<Self> {
        let mut registry = Self::new();

        for platform in Platform::ALL {
            if !config.platforms.contains(&platform) {
                continue;
            }

            match platform {
                Platform::YouTube => {
                    let fetcher = HttpFetcher::new(config.fetch_timeout)?;
                    registry.register(Box::new(YouTubeSource::new(Box::new(fetcher))));
                }
                Platform::Instagram => {
                    let bridge = config
                        .rss_bridge
                        .clone()
                        .ok_or_else(|| FeedGenError::MissingEnvVar("RSS_BRIDGE".to_string()))?;
                    registry.register(Box::new(InstagramSource::new(bridge)));
                }
            }
        }

        Ok(registry)
    }

    pub fn register(&mut self, source: Box<dyn FeedSource>) {
        self.sources.push(source);
    }

    pub fn platforms(&self) -> Vec<Platform> {
        self.sources.iter().map(|s| s.platform()).collect()
    }

    /// Decide which registered platform a raw string belongs to
    pub fn classify(&self, url: &str) -> Classification {
        if !is_valid_url(url) {
            return Classification::NotAUrl;
        }

        self.sources
            .iter()
            .find(|s| s.can_handle(url))
            .map(|s| Classification::Supported(s.platform()))
            .unwrap_or(Classification::Unrecognized)
    }

    pub fn source(&self, platform: Platform) -> Option<&dyn FeedSource> {
        self.sources
            .iter()
            .find(|s| s.platform() == platform)
            .map(|s| s.as_ref())
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
