pub mod link_service;
pub mod transport;
pub mod dispatch;

pub use link_service::LinkService;
pub use transport::{NotebrookTransport, ReplyTransport, StdoutTransport};
pub use dispatch::{dispatch_lines, DispatchSummary};
