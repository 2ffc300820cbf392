use serde::Serialize;
use url::form_urlencoded;

use super::{ContentKind, Platform};

/// Address of a feed: either the platform's own endpoint or an rss-bridge query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FeedDescriptor {
    Direct {
        url: String,
    },
    Bridge {
        host: String,
        params: Vec<(String, String)>,
    },
}

impl FeedDescriptor {
    pub fn direct(url: impl Into<String>) -> Self {
        FeedDescriptor::Direct { url: url.into() }
    }

    pub fn bridge(host: impl Into<String>, params: Vec<(String, String)>) -> Self {
        FeedDescriptor::Bridge {
            host: host.into(),
            params,
        }
    }

    /// Render as a URL the user can paste into a reader
    pub fn url(&self) -> String {
        match self {
            FeedDescriptor::Direct { url } => url.clone(),
            FeedDescriptor::Bridge { host, params } => {
                let query = form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(params.iter())
                    .finish();
                format!("https://{}/?{}", host, query)
            }
        }
    }

    pub fn params(&self) -> &[(String, String)] {
        match self {
            FeedDescriptor::Direct { .. } => &[],
            FeedDescriptor::Bridge { params, .. } => params,
        }
    }
}

/// Result of one successful request
#[derive(Debug, Clone, Serialize)]
pub struct FeedLink {
    pub platform: Platform,
    pub kind: ContentKind,
    pub identifier: String,
    pub feed_url: String,
    pub descriptor: FeedDescriptor,
}

impl FeedLink {
    pub fn new(
        platform: Platform,
        kind: ContentKind,
        identifier: String,
        descriptor: FeedDescriptor,
    ) -> Self {
        Self {
            platform,
            kind,
            identifier,
            feed_url: descriptor.url(),
            descriptor,
        }
    }
}
