use tracing::{info, warn};

use crate::domain::{FeedLink, Platform, Reply};
use crate::errors::{FeedGenError, FeedGenResult};
use crate::sources::{Classification, SourceRegistry};

pub struct LinkService {
    source_registry: SourceRegistry,
}

impl LinkService {
    pub fn new(source_registry: SourceRegistry) -> Self {
        Self { source_registry }
    }

    pub fn platforms(&self) -> Vec<Platform> {
        self.source_registry.platforms()
    }

    /// Turn one incoming message into a feed link
    pub fn generate(&self, text: &str) -> FeedGenResult<FeedLink> {
        let url = text.trim();

        let platform = match self.source_registry.classify(url) {
            Classification::Supported(platform) => platform,
            Classification::NotAUrl => {
                warn!("Not a URL {}", url);
                return Err(FeedGenError::NotAUrl(url.to_string()));
            }
            Classification::Unrecognized => {
                warn!("Could not parse link {}", url);
                return Err(FeedGenError::UnrecognizedPlatform(url.to_string()));
            }
        };

        let source = self
            .source_registry
            .source(platform)
            .ok_or_else(|| FeedGenError::UnrecognizedPlatform(url.to_string()))?;

        let kind = source.content_kind(url);
        let identifier = source.extract_identifier(url, kind)?;
        let descriptor = source.render_feed(&identifier, kind);

        Ok(FeedLink::new(platform, kind, identifier, descriptor))
    }

    /// Same as `generate`, with every outcome turned into reply text
    pub fn respond(&self, text: &str) -> Reply {
        match self.generate(text) {
            Ok(link) => Reply::success(&link),
            Err(e) => {
                match &e {
                    FeedGenError::IdentifierNotFound { .. } => info!("{}", e),
                    // already logged during classification
                    other if other.is_rejection() => {}
                    _ => warn!("Request failed: {}", e),
                }
                Reply::from_error(&e)
            }
        }
    }

    pub fn help(&self) -> Reply {
        Reply::help(&self.platforms())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContentKind;
    use crate::sources::fetcher::MockPageFetcher;
    use crate::sources::{instagram::InstagramSource, youtube::YouTubeSource};

    fn service(fetcher: MockPageFetcher) -> LinkService {
        let mut registry = SourceRegistry::new();
        registry.register(Box::new(YouTubeSource::new(Box::new(fetcher))));
        registry.register(Box::new(InstagramSource::new("bridge.example.org")));
        LinkService::new(registry)
    }

    fn offline_service() -> LinkService {
        let mut fetcher = MockPageFetcher::new();
        fetcher.expect_fetch().never();
        service(fetcher)
    }

    #[test]
    fn test_rejections_happen_before_any_fetch() {
        let service = offline_service();

        assert!(matches!(
            service.generate("not a url"),
            Err(FeedGenError::NotAUrl(_))
        ));
        assert!(matches!(
            service.generate("https://example.com"),
            Err(FeedGenError::UnrecognizedPlatform(_))
        ));
    }

    #[test]
    fn test_playlist_link() {
        let link = offline_service()
            .generate("  https://www.youtube.com/playlist?list=PL123\n")
            .unwrap();

        assert_eq!(link.platform, Platform::YouTube);
        assert_eq!(link.kind, ContentKind::Playlist);
        assert_eq!(link.identifier, "PL123");
        assert_eq!(
            link.feed_url,
            "https://www.youtube.com/feeds/videos.xml?playlist_id=PL123"
        );
    }

    #[test]
    fn test_channel_link_scrapes_page() {
        let mut fetcher = MockPageFetcher::new();
        fetcher
            .expect_fetch()
            .times(1)
            .returning(|_| Ok(r#"<meta itemprop="channelId" content="UC42">"#.to_string()));

        let reply = service(fetcher).respond("https://www.youtube.com/@somechannel");
        assert_eq!(
            reply.text,
            "Enjoy your YouTube channel RSS:\nhttps://www.youtube.com/feeds/videos.xml?channel_id=UC42"
        );
        assert!(!reply.is_error);
    }

    #[test]
    fn test_instagram_hashtag_link() {
        let link = offline_service()
            .generate("https://instagram.com/explore/tags/sunset/")
            .unwrap();

        assert_eq!(link.kind, ContentKind::Hashtag);
        assert_eq!(link.identifier, "sunset");
        assert_eq!(
            link.feed_url,
            "https://bridge.example.org/?action=display&media_type=all&format=Atom&bridge=Instagram&context=Hashtag&h=sunset"
        );
    }

    #[test]
    fn test_fetch_failure_becomes_reply_without_feed() {
        let mut fetcher = MockPageFetcher::new();
        fetcher
            .expect_fetch()
            .returning(|_| Err(FeedGenError::FetchFailed("connection refused".to_string())));
        let service = service(fetcher);

        assert!(matches!(
            service.generate("https://www.youtube.com/@somechannel"),
            Err(FeedGenError::FetchFailed(_))
        ));

        let reply = service.respond("https://www.youtube.com/@somechannel");
        assert!(reply.is_error);
        assert!(!reply.text.contains("feeds/videos.xml"));
    }

    #[test]
    fn test_missing_channel_id_reply() {
        let mut fetcher = MockPageFetcher::new();
        fetcher
            .expect_fetch()
            .returning(|_| Ok("<html><head></head></html>".to_string()));

        let reply = service(fetcher).respond("https://www.youtube.com/@somechannel");
        assert_eq!(reply.text, "Could not find a YouTube channel in that link");
    }

    #[test]
    fn test_rejection_replies() {
        let service = offline_service();

        assert_eq!(service.respond("hello").text, "Looks like this is not a URL");
        assert_eq!(
            service.respond("https://example.com").text,
            "Looks like I do not support such link"
        );
    }

    #[test]
    fn test_help_mentions_registered_platforms() {
        let help = offline_service().help();
        assert!(help.text.contains("YouTube"));
        assert!(help.text.contains("Instagram"));
    }
}
