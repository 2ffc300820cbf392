use serde::{Deserialize, Serialize};

/// Platform-scoped sub-type of content, decided from the URL shape alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Channel,
    Playlist,
    Username,
    Hashtag,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Channel => "channel",
            ContentKind::Playlist => "playlist",
            ContentKind::Username => "username",
            ContentKind::Hashtag => "hashtag",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Channel => "Channel",
            ContentKind::Playlist => "Playlist",
            ContentKind::Username => "Username",
            ContentKind::Hashtag => "Hashtag",
        }
    }

    /// Short query key rss-bridge expects for the identifier
    pub fn bridge_key(&self) -> Option<&'static str> {
        match self {
            ContentKind::Username => Some("u"),
            ContentKind::Hashtag => Some("h"),
            ContentKind::Channel | ContentKind::Playlist => None,
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
