use chrono::NaiveDate;

/// Format of [`Article::date`] when it is set
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Represents a normalized article from the feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// Title of the article, verbatim from the feed
    pub title: String,
    /// Link to the article, verbatim from the feed
    pub link: String,
    /// Publish date as `YYYY-MM-DD`, empty when unknown
    pub date: String,
    /// Category terms of the article
    pub tags: Vec<String>,
}

impl Article {
    /// Creates an article without a date or tags
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            date: String::new(),
            tags: Vec::new(),
        }
    }

    /// Sets the canonical publish date
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Sets the tags of the article
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Returns true if the article has a specific tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// The publish date as a calendar date, if it is one
    pub fn published_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }
}
