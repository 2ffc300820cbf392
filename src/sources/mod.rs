pub mod validate;
pub mod fetcher;
pub mod traits;
pub mod youtube;
pub mod instagram;
pub mod registry;

pub use validate::is_valid_url;
pub use fetcher::{HttpFetcher, PageFetcher};
pub use traits::FeedSource;
pub use registry::{Classification, SourceRegistry};
