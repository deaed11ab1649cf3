/// A feed entry as read from the document, before normalization.
///
/// Every field is optional: feeds in the wild omit or mangle any of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEntry {
    pub title: Option<String>,
    pub link: Option<String>,
    /// Publish date text in RFC 822 form
    pub published: Option<String>,
    /// `None` when the entry has no category element at all
    pub tags: Option<Vec<RawTag>>,
}

/// A category of an entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTag {
    pub term: Option<String>,
}

impl RawTag {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: Some(term.into()),
        }
    }
}

impl RawEntry {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            link: Some(link.into()),
            ..Self::default()
        }
    }

    pub fn with_published(mut self, published: impl Into<String>) -> Self {
        self.published = Some(published.into());
        self
    }

    pub fn with_tags<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(terms.into_iter().map(RawTag::new).collect());
        self
    }

    pub(crate) fn push_tag(&mut self, tag: RawTag) {
        self.tags.get_or_insert_with(Vec::new).push(tag);
    }
}
