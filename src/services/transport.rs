use std::io::Write;

use channels::ChannelClient;
use tracing::debug;

use crate::config::NotebrookConfig;
use crate::domain::Reply;
use crate::errors::{FeedGenError, FeedGenResult};

/// Delivers replies back to whoever sent the request
#[cfg_attr(test, mockall::automock)]
pub trait ReplyTransport {
    fn deliver(&self, reply: &Reply) -> FeedGenResult<()>;
}

pub struct StdoutTransport;

impl ReplyTransport for StdoutTransport {
    fn deliver(&self, reply: &Reply) -> FeedGenResult<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", reply.text)?;
        stdout.flush()?;
        Ok(())
    }
}

pub struct NotebrookTransport {
    client: ChannelClient,
    channel: String,
}

impl NotebrookTransport {
    pub fn new(config: &NotebrookConfig) -> FeedGenResult<Self> {
        let client = ChannelClient::new(&config.url, &config.token)?;

        Ok(Self {
            client,
            channel: config.channel.clone(),
        })
    }
}

impl ReplyTransport for NotebrookTransport {
    fn deliver(&self, reply: &Reply) -> FeedGenResult<()> {
        match self.client.send_message(&self.channel, &reply.text) {
            Ok(message) => {
                debug!(id = message.id, channel = %self.channel, "reply delivered");
                Ok(())
            }
            Err(channels::ChannelError::PayloadTooLarge) => Err(FeedGenError::Channel(format!(
                "reply of {} bytes rejected by {}",
                reply.text.len(),
                self.channel
            ))),
            Err(e) => Err(e.into()),
        }
    }
}
