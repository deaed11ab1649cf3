pub mod parser;
pub mod rss_service;

pub use parser::parse_entries;
pub use rss_service::{FeedSource, RssService};
