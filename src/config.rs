//! Command line options and runtime configuration.
//!
//! [`Cli`] is what the user typed. [`Cli::query`] validates it into a
//! [`Query`], [`Cli::show_fields`] applies the show-everything default and
//! [`Cli::config`] collects the settings of the feed fetch.

use std::time::Duration;

use clap::Parser;
use url::Url;

use crate::error::UsageError;
use crate::services::{DateOrder, Query, ShowFields, TagFilter};

pub const DEFAULT_FEED_URL: &str = "https://www.theguardian.com/international/rss";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Parser)]
#[command(
    name = "rdian",
    version,
    about = "Show the latest Guardian headlines in the terminal",
    after_help = "If none of --show-title, --show-url, --show-date and --show-tags is given, all fields are shown."
)]
pub struct Cli {
    /// Show no more than COUNT articles
    #[arg(short, long, allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Show titles
    #[arg(short = 't', long)]
    pub show_title: bool,

    /// Show links
    #[arg(short = 'u', long)]
    pub show_url: bool,

    /// Show publish dates
    #[arg(short = 'd', long)]
    pub show_date: bool,

    /// Show tags
    #[arg(short = 'D', long)]
    pub show_tags: bool,

    /// Sort articles in alphabetical order, from A to Z
    #[arg(short, long)]
    pub sort: bool,

    /// Sort by publish date string, ascending
    #[arg(short, long)]
    pub newest: bool,

    /// Sort by publish date string, descending
    #[arg(short, long)]
    pub oldest: bool,

    /// Sort by publish date, most recent first
    #[arg(short, long)]
    pub latest: bool,

    /// Show articles with at least one tag from the list
    #[arg(short = 'T', long, num_args = 0.., value_name = "TAG")]
    pub tags: Option<Vec<String>>,

    /// Feed to read
    #[arg(long, env = "RDIAN_FEED_URL", default_value = DEFAULT_FEED_URL)]
    pub url: Url,

    /// HTTP timeout in seconds
    #[arg(long, env = "RDIAN_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
}

/// Settings of the feed fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub feed_url: Url,
    pub timeout: Duration,
}

impl Cli {
    /// Validates the selection options
    pub fn query(&self) -> Result<Query, UsageError> {
        let date_order = match (self.newest, self.oldest, self.latest) {
            (false, false, false) => None,
            (true, false, false) => Some(DateOrder::Newest),
            (false, true, false) => Some(DateOrder::Oldest),
            (false, false, true) => Some(DateOrder::Latest),
            _ => return Err(UsageError::ConflictingDateOrder),
        };

        let count = match self.count {
            None => None,
            Some(count) if count < 1 => return Err(UsageError::InvalidCount(count)),
            Some(count) => Some(usize::try_from(count).map_err(|_| UsageError::InvalidCount(count))?),
        };

        Ok(Query {
            tags: TagFilter::from_option(self.tags.clone()),
            alphabetical: self.sort,
            date_order,
            count,
        })
    }

    pub fn show_fields(&self) -> ShowFields {
        ShowFields {
            title: self.show_title,
            link: self.show_url,
            date: self.show_date,
            tags: self.show_tags,
        }
        .or_all()
    }

    pub fn config(&self) -> Config {
        Config {
            feed_url: self.url.clone(),
            timeout: Duration::from_secs(self.timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("rdian").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);

        assert_eq!(cli.query().unwrap(), Query::default());
        assert_eq!(cli.show_fields(), ShowFields::all());
        assert_eq!(cli.config().feed_url.as_str(), DEFAULT_FEED_URL);
        assert_eq!(cli.config().timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_full_query() {
        let cli = parse(&["-c", "3", "-s", "-o", "-T", "World news", "Europe"]);

        let query = cli.query().unwrap();

        assert_eq!(query.count, Some(3));
        assert!(query.alphabetical);
        assert_eq!(query.date_order, Some(DateOrder::Oldest));
        assert_eq!(
            query.tags,
            TagFilter::Tags(["World news".to_string(), "Europe".to_string()].into())
        );
    }

    #[test]
    fn test_tags_without_values_is_explicit_empty_filter() {
        assert_eq!(parse(&["-T"]).query().unwrap().tags, TagFilter::Empty);
        assert_eq!(parse(&[]).query().unwrap().tags, TagFilter::NotRequested);
    }

    #[test]
    fn test_conflicting_date_orders() {
        assert_eq!(
            parse(&["--newest", "--oldest"]).query(),
            Err(UsageError::ConflictingDateOrder)
        );
        assert_eq!(
            parse(&["-n", "-l"]).query(),
            Err(UsageError::ConflictingDateOrder)
        );
    }

    #[test]
    fn test_count_must_be_positive() {
        assert_eq!(parse(&["-c", "0"]).query(), Err(UsageError::InvalidCount(0)));
        assert_eq!(parse(&["-c", "-2"]).query(), Err(UsageError::InvalidCount(-2)));
        assert!(Cli::try_parse_from(["rdian", "-c", "many"]).is_err());
    }

    #[test]
    fn test_selected_show_fields_are_kept() {
        let fields = parse(&["-t", "-D"]).show_fields();
        assert_eq!(
            fields,
            ShowFields {
                title: true,
                tags: true,
                ..ShowFields::default()
            }
        );
    }

    #[test]
    fn test_feed_url_flag() {
        let cli = parse(&["--url", "https://example.com/feed.xml", "--timeout", "5"]);
        assert_eq!(cli.config().feed_url.as_str(), "https://example.com/feed.xml");
        assert_eq!(cli.config().timeout, Duration::from_secs(5));
    }
}
