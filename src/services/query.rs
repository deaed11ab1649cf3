use std::cmp::{Ordering, Reverse};
use std::collections::HashSet;

use crate::models::Article;

/// Which articles to keep by tag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TagFilter {
    /// No tag filter was asked for
    #[default]
    NotRequested,
    /// A tag filter was asked for without any tag; keeps everything
    Empty,
    /// Keeps articles sharing at least one tag with the set
    Tags(HashSet<String>),
}

impl TagFilter {
    /// Builds a filter from an optional tag list, keeping "absent" and
    /// "present but empty" apart
    pub fn from_option(tags: Option<Vec<String>>) -> Self {
        match tags {
            None => TagFilter::NotRequested,
            Some(tags) if tags.is_empty() => TagFilter::Empty,
            Some(tags) => TagFilter::Tags(tags.into_iter().collect()),
        }
    }

    pub fn matches(&self, article: &Article) -> bool {
        match self {
            TagFilter::NotRequested | TagFilter::Empty => true,
            TagFilter::Tags(wanted) => wanted.iter().any(|tag| article.has_tag(tag)),
        }
    }
}

/// Ordering by publish date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    /// Ascending by the date string. Despite the name this lists the oldest
    /// article first; kept for compatibility with the `--newest` flag.
    Newest,
    /// Descending by the date string
    Oldest,
    /// Most recent calendar date first, undated articles last
    Latest,
}

/// A validated selection over a set of articles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub tags: TagFilter,
    /// Sort by title, A to Z
    pub alphabetical: bool,
    pub date_order: Option<DateOrder>,
    /// Keep at most this many articles
    pub count: Option<usize>,
}

/// Filters, sorts and truncates the articles according to the query.
///
/// All sorts are stable. When both an alphabetical and a date order are
/// requested the title sort runs first, so titles break ties between equal
/// dates.
pub fn select(articles: Vec<Article>, query: &Query) -> Vec<Article> {
    let mut selected: Vec<Article> = articles
        .into_iter()
        .filter(|article| query.tags.matches(article))
        .collect();

    if query.alphabetical {
        selected.sort_by(|a, b| a.title.cmp(&b.title));
    }

    match query.date_order {
        Some(DateOrder::Newest) => selected.sort_by(|a, b| a.date.cmp(&b.date)),
        Some(DateOrder::Oldest) => selected.sort_by(|a, b| b.date.cmp(&a.date)),
        Some(DateOrder::Latest) => selected.sort_by(latest_first),
        None => {}
    }

    if let Some(count) = query.count {
        selected.truncate(count);
    }

    selected
}

fn latest_first(a: &Article, b: &Article) -> Ordering {
    // None sorts before Some, so the undated end up last once reversed
    Reverse(a.published_on()).cmp(&Reverse(b.published_on()))
}
