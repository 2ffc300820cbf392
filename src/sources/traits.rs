use crate::domain::{ContentKind, FeedDescriptor, Platform};
use crate::errors::FeedGenResult;

pub trait FeedSource: Send + Sync {
    /// Identifies this platform
    fn platform(&self) -> Platform;

    /// Check if this source recognizes the given URL
    fn can_handle(&self, url: &str) -> bool;

    /// Decide the content kind from the URL shape alone.
    /// YouTube also counts a `list` query parameter as a playlist, not only the `playlist` path.
    fn content_kind(&self, url: &str) -> ContentKind;

    /// Extract the identifier the feed endpoint is keyed on
    fn extract_identifier(&self, url: &str, kind: ContentKind) -> FeedGenResult<String>;

    /// Build the feed address for an identifier
    fn render_feed(&self, identifier: &str, kind: ContentKind) -> FeedDescriptor;
}
