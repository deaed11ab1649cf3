pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use app::App;
pub use config::{Cli, Config};
pub use error::{EntryError, FieldError, UsageError};

// Re-export models
pub use models::{Article, RawEntry, RawTag};

// Re-export services selectively
pub use services::{
    normalizer::{normalize, normalize_report, NormalizeReport},
    query::{select, DateOrder, Query, TagFilter},
    render::{render, Field, ShowFields},
    rss::{parse_entries, FeedSource, RssService},
};
