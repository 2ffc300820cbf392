//! Minimal Notebrook client: posts plain-text messages to a channel by name,
//! creating the channel on first use

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Error, Debug)]
pub enum ChannelError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Invalid header value")]
    InvalidHeader,
    #[error("Payload too large")]
    PayloadTooLarge,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Channel {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct ChannelsResponse {
    channels: Vec<Channel>,
}

/// Notebrook returns ids either as numbers or as numeric strings
fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Number(id) => Ok(id),
        RawId::Text(text) => text.parse().map_err(serde::de::Error::custom),
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    pub content: String,
}

#[derive(Debug, Serialize)]
struct SendMessagePayload<'a> {
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct CreateChannelPayload<'a> {
    name: &'a str,
}

pub struct ChannelClient {
    url: String,
    client: Client,
}

impl ChannelClient {
    pub fn new(url: &str, token: &str) -> Result<Self, ChannelError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("authorization"),
            HeaderValue::from_str(token).map_err(|_| ChannelError::InvalidHeader)?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Find a channel ID by its name
    pub fn find_channel_id(&self, name: &str) -> Result<Option<i64>, ChannelError> {
        let response = self
            .client
            .get(format!("{}/channels", self.url))
            .send()?
            .error_for_status()?;

        let wrapper: ChannelsResponse = response.json()?;
        Ok(wrapper
            .channels
            .into_iter()
            .find(|c| c.name == name)
            .map(|c| c.id))
    }

    pub fn create_channel(&self, name: &str) -> Result<Channel, ChannelError> {
        let response = self
            .client
            .post(format!("{}/channels/", self.url))
            .json(&CreateChannelPayload { name })
            .send()?
            .error_for_status()?;

        Ok(response.json()?)
    }

    /// Send a message to a channel by name, creating the channel if it doesn't exist
    pub fn send_message(&self, channel_name: &str, content: &str) -> Result<Message, ChannelError> {
        let channel_id = match self.find_channel_id(channel_name)? {
            Some(id) => id,
            None => self.create_channel(channel_name)?.id,
        };

        let response = self
            .client
            .post(format!("{}/channels/{}/messages", self.url, channel_id))
            .json(&SendMessagePayload { content })
            .send()?;

        if response.status() == reqwest::StatusCode::PAYLOAD_TOO_LARGE {
            return Err(ChannelError::PayloadTooLarge);
        }

        Ok(response.error_for_status()?.json()?)
    }
}
