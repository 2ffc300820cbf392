use tracing::info;
use url::Url;

use crate::domain::{ContentKind, FeedDescriptor, Platform};
use crate::errors::{FeedGenError, FeedGenResult};
use crate::sources::traits::FeedSource;

const DOMAIN_FRAGMENT: &str = "instagram.com";

/// Name of the rss-bridge bridge serving Instagram
const BRIDGE_NAME: &str = "Instagram";

pub struct InstagramSource {
    bridge_host: String,
}

impl InstagramSource {
    pub fn new(bridge_host: impl Into<String>) -> Self {
        Self {
            bridge_host: bridge_host.into(),
        }
    }

    /// Take the decoded path segment just before the last one:
    /// `/someuser/` -> `someuser`, `/explore/tags/sunset/` -> `sunset`
    fn second_to_last_segment(url: &str) -> Option<String> {
        let parsed = Url::parse(url).ok()?;
        let segments: Vec<&str> = parsed.path_segments()?.collect();

        if segments.len() < 2 {
            return None;
        }

        let segment = urlencoding::decode(segments[segments.len() - 2]).ok()?;
        Some(segment.into_owned()).filter(|s| !s.is_empty())
    }
}

impl FeedSource for InstagramSource {
    fn platform(&self) -> Platform {
        Platform::Instagram
    }

    fn can_handle(&self, url: &str) -> bool {
        url.contains(DOMAIN_FRAGMENT)
    }

    fn content_kind(&self, url: &str) -> ContentKind {
        let path = Url::parse(url)
            .map(|parsed| parsed.path().to_string())
            .unwrap_or_default();

        if path.contains("explore/tags") {
            ContentKind::Hashtag
        } else {
            ContentKind::Username
        }
    }

    fn extract_identifier(&self, url: &str, kind: ContentKind) -> FeedGenResult<String> {
        let id = Self::second_to_last_segment(url).ok_or_else(|| {
            FeedGenError::IdentifierNotFound {
                platform: Platform::Instagram,
                kind,
                url: url.to_string(),
            }
        })?;

        info!("Instagram {} '{}'", kind.label(), id);
        Ok(id)
    }

    fn render_feed(&self, identifier: &str, kind: ContentKind) -> FeedDescriptor {
        let mut params: Vec<(String, String)> = [
            ("action", "display"),
            ("media_type", "all"),
            ("format", "Atom"),
            ("bridge", BRIDGE_NAME),
            ("context", kind.label()),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        if let Some(key) = kind.bridge_key() {
            params.push((key.to_string(), identifier.to_string()));
        }

        FeedDescriptor::bridge(self.bridge_host.clone(), params)
    }
}
