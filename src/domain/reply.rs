use super::{ContentKind, FeedLink, Platform};
use crate::errors::FeedGenError;

/// Plain-text message handed to a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub is_error: bool,
}

impl Reply {
    pub fn success(link: &FeedLink) -> Self {
        let text = match link.platform {
            Platform::YouTube => format!(
                "Enjoy your YouTube {} RSS:\n{}",
                link.kind.as_str(),
                link.feed_url
            ),
            Platform::Instagram => format!(
                "Enjoy your Instagram {} feed\n{}",
                link.kind.label(),
                link.feed_url
            ),
        };

        Self {
            text,
            is_error: false,
        }
    }

    pub fn from_error(error: &FeedGenError) -> Self {
        let text = match error {
            FeedGenError::NotAUrl(_) => "Looks like this is not a URL".to_string(),
            FeedGenError::UnrecognizedPlatform(_) => {
                "Looks like I do not support such link".to_string()
            }
            FeedGenError::IdentifierNotFound { platform, kind, .. } => {
                format!("Could not find a {} {} in that link", platform, kind)
            }
            FeedGenError::FetchFailed(_) => {
                "Could not load that page, please try again later".to_string()
            }
            _ => "Something went wrong, please try again later".to_string(),
        };

        Self {
            text,
            is_error: true,
        }
    }

    /// Greeting sent for /start and /help
    pub fn help(platforms: &[Platform]) -> Self {
        let mut text = String::from(
            "I can generate RSS feeds with the help of rss-bridge (https://github.com/RSS-Bridge/rss-bridge)\n\
             Now I'm able to generate feeds for\n",
        );

        for platform in platforms {
            let kinds = supported_kinds(*platform)
                .iter()
                .map(|k| format!("{}s", k.as_str()))
                .collect::<Vec<_>>()
                .join(" and ");
            text.push_str(&format!("- {}: {}\n", platform, kinds));
        }

        text.push_str(
            "I am not a feed reader! I only generate RSS feeds that you can use with another bot or your reader of choice",
        );

        Self {
            text,
            is_error: false,
        }
    }
}

fn supported_kinds(platform: Platform) -> &'static [ContentKind] {
    match platform {
        Platform::YouTube => &[ContentKind::Channel, ContentKind::Playlist],
        Platform::Instagram => &[ContentKind::Username, ContentKind::Hashtag],
    }
}

impl std::fmt::Display for Reply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
