use scraper::{Html, Selector};
use tracing::{debug, info};
use url::{form_urlencoded, Url};

use crate::domain::{ContentKind, FeedDescriptor, Platform};
use crate::errors::{FeedGenError, FeedGenResult};
use crate::sources::fetcher::PageFetcher;
use crate::sources::traits::FeedSource;

/// Domain fragments that mark a YouTube link
const DOMAIN_FRAGMENTS: &[&str] = &["youtube", "youtu.be"];

const FEED_ENDPOINT: &str = "https://www.youtube.com/feeds/videos.xml";

pub struct YouTubeSource {
    fetcher: Box<dyn PageFetcher>,
}

impl YouTubeSource {
    pub fn new(fetcher: Box<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }

    fn not_found(kind: ContentKind, url: &str) -> FeedGenError {
        FeedGenError::IdentifierNotFound {
            platform: Platform::YouTube,
            kind,
            url: url.to_string(),
        }
    }

    /// Read the `list` query parameter of a playlist URL
    fn extract_playlist_id(url: &str) -> FeedGenResult<String> {
        let parsed = Url::parse(url).map_err(|_| Self::not_found(ContentKind::Playlist, url))?;

        parsed
            .query_pairs()
            .find(|(key, _)| key == "list")
            .map(|(_, value)| value.into_owned())
            .filter(|id| !id.is_empty())
            .ok_or_else(|| Self::not_found(ContentKind::Playlist, url))
    }

    /// Fetch the channel page and read `<meta itemprop="channelId" content="...">`
    fn extract_channel_id(&self, url: &str) -> FeedGenResult<String> {
        let html = self.fetcher.fetch(url)?;
        Self::channel_id_from_html(&html).ok_or_else(|| Self::not_found(ContentKind::Channel, url))
    }

    fn channel_id_from_html(html: &str) -> Option<String> {
        let document = Html::parse_document(html);
        let meta_selector = Selector::parse("meta").ok()?;

        document
            .select(&meta_selector)
            .find(|element| element.value().attr("itemprop") == Some("channelId"))
            .and_then(|element| element.value().attr("content"))
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
    }
}

impl FeedSource for YouTubeSource {
    fn platform(&self) -> Platform {
        Platform::YouTube
    }

    fn can_handle(&self, url: &str) -> bool {
        DOMAIN_FRAGMENTS.iter().any(|fragment| url.contains(fragment))
    }

    fn content_kind(&self, url: &str) -> ContentKind {
        // A `list` parameter on a watch URL still points at the playlist
        let has_list_param = Url::parse(url)
            .map(|parsed| parsed.query_pairs().any(|(key, _)| key == "list"))
            .unwrap_or(false);

        if url.contains("playlist") || has_list_param {
            ContentKind::Playlist
        } else {
            ContentKind::Channel
        }
    }

    fn extract_identifier(&self, url: &str, kind: ContentKind) -> FeedGenResult<String> {
        let id = match kind {
            ContentKind::Playlist => Self::extract_playlist_id(url)?,
            ContentKind::Channel => self.extract_channel_id(url)?,
            other => return Err(Self::not_found(other, url)),
        };

        info!("YouTube {} id '{}'", kind, id);
        Ok(id)
    }

    fn render_feed(&self, identifier: &str, kind: ContentKind) -> FeedDescriptor {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair(&format!("{}_id", kind.as_str()), identifier)
            .finish();
        let url = format!("{}?{}", FEED_ENDPOINT, query);
        debug!(%url, "rendered YouTube feed");
        FeedDescriptor::direct(url)
    }
}
