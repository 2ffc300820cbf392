pub mod platform;
pub mod content;
pub mod descriptor;
pub mod reply;

pub use platform::Platform;
pub use content::ContentKind;
pub use descriptor::{FeedDescriptor, FeedLink};
pub use reply::Reply;
