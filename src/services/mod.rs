pub mod normalizer;
pub mod query;
pub mod render;
pub mod rss;

pub use normalizer::{normalize, normalize_report, NormalizeReport};
pub use query::{select, DateOrder, Query, TagFilter};
pub use render::{render, Field, ShowFields};
pub use rss::{FeedSource, RssService};
