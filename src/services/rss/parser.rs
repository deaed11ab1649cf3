use anyhow::{anyhow, Result};
use atom_syndication::Feed;
use rss::Channel;

use crate::models::{RawEntry, RawTag};

/// RFC 822 layout Atom timestamps are written back in, so the normalizer
/// sees the same shape as an RSS `pubDate`
const RFC822_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

/// Reads the entries of an RSS or Atom document without interpreting them.
///
/// RSS fields are kept exactly as the feed wrote them. A document that is
/// neither RSS nor Atom is an error.
pub fn parse_entries(content: &[u8]) -> Result<Vec<RawEntry>> {
    // Try parsing as RSS first, then Atom
    let rss_error = match Channel::read_from(content) {
        Ok(channel) => return Ok(rss_entries(&channel)),
        Err(e) => e,
    };

    if let Ok(feed) = Feed::read_from(content) {
        return Ok(atom_entries(&feed));
    }

    Err(anyhow!("Not an RSS or Atom document: {}", rss_error))
}

fn rss_entries(channel: &Channel) -> Vec<RawEntry> {
    channel
        .items()
        .iter()
        .map(|item| RawEntry {
            title: item.title().map(str::to_string),
            link: item.link().map(str::to_string),
            published: item.pub_date().map(str::to_string),
            tags: tags(item.categories().iter().map(|c| c.name())),
        })
        .collect()
}

fn atom_entries(feed: &Feed) -> Vec<RawEntry> {
    feed.entries()
        .iter()
        .map(|entry| {
            let link = entry
                .links()
                .iter()
                .find(|l| l.rel() == "alternate")
                .or_else(|| entry.links().first())
                .map(|l| l.href().to_string());
            let published = entry.published().unwrap_or_else(|| entry.updated());

            RawEntry {
                title: Some(entry.title().to_string()),
                link,
                published: Some(published.format(RFC822_FORMAT).to_string()),
                tags: tags(entry.categories().iter().map(|c| c.term())),
            }
        })
        .collect()
}

/// `None` when the entry has no category at all; an empty term marks a
/// malformed category
fn tags<'a>(terms: impl Iterator<Item = &'a str>) -> Option<Vec<RawTag>> {
    let tags: Vec<RawTag> = terms
        .map(|term| RawTag {
            term: Some(term.to_string()).filter(|t| !t.is_empty()),
        })
        .collect();
    (!tags.is_empty()).then_some(tags)
}
