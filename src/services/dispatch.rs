use std::io::BufRead;

use tracing::{error, info};

use crate::errors::FeedGenResult;
use crate::services::link_service::LinkService;
use crate::services::transport::ReplyTransport;

/// Counters for one dispatch session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DispatchSummary {
    pub handled: usize,
    pub generated: usize,
    pub undelivered: usize,
}

/// Treat every non-empty line as one request and deliver its reply.
/// A failing request or delivery is logged and the loop moves on.
pub fn dispatch_lines<R: BufRead, T: ReplyTransport + ?Sized>(
    service: &LinkService,
    reader: R,
    transport: &T,
) -> FeedGenResult<DispatchSummary> {
    let mut summary = DispatchSummary::default();

    for line in reader.lines() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        let reply = service.respond(text);
        summary.handled += 1;
        if !reply.is_error {
            summary.generated += 1;
        }

        if let Err(e) = transport.deliver(&reply) {
            error!("Could not deliver reply for {}: {}", text, e);
            summary.undelivered += 1;
        }
    }

    info!(
        handled = summary.handled,
        generated = summary.generated,
        undelivered = summary.undelivered,
        "input closed"
    );

    Ok(summary)
}
