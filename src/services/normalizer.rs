//! Turns raw feed entries into [`Article`]s.
//!
//! Optional fields (publish date, tags) degrade to their defaults when they
//! cannot be extracted; every such failure is reported once. Title and link
//! are never made up: an entry without them is skipped.

use log::warn;

use crate::error::{EntryError, FieldError};
use crate::models::{Article, RawEntry, RawTag};

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Character range of `"05 Jun 2023"` inside `"Mon, 05 Jun 2023 10:00:00 GMT"`
const DATE_START: usize = 5;
const DATE_LEN: usize = 11;

/// A problem found while normalizing one entry
#[derive(Debug, PartialEq)]
pub enum Issue {
    Field { title: String, error: FieldError },
    Skipped { position: usize, error: EntryError },
}

impl Issue {
    fn log(&self) {
        match self {
            Issue::Field { title, error } => warn!("{title}: {error}"),
            Issue::Skipped { position, error } => warn!("skipping entry {position}: {error}"),
        }
    }
}

/// Outcome of normalizing a batch of entries
#[derive(Debug, Default)]
pub struct NormalizeReport {
    pub articles: Vec<Article>,
    pub issues: Vec<Issue>,
}

/// Normalizes all entries, logging every recoverable issue
pub fn normalize(entries: &[RawEntry]) -> Vec<Article> {
    let report = normalize_report(entries);
    for issue in &report.issues {
        issue.log();
    }
    report.articles
}

/// Normalizes all entries and returns the issues instead of logging them
pub fn normalize_report(entries: &[RawEntry]) -> NormalizeReport {
    let mut report = NormalizeReport::default();

    for (position, entry) in entries.iter().enumerate() {
        let (title, link) = match required_fields(entry) {
            Ok(fields) => fields,
            Err(error) => {
                report.issues.push(Issue::Skipped { position, error });
                continue;
            }
        };

        let date = entry
            .published
            .as_deref()
            .ok_or(FieldError::MissingDate)
            .and_then(parse_published_date)
            .unwrap_or_else(|error| {
                report.issues.push(Issue::Field {
                    title: title.clone(),
                    error,
                });
                String::new()
            });

        let tags = extract_tags(entry.tags.as_deref()).unwrap_or_else(|error| {
            report.issues.push(Issue::Field {
                title: title.clone(),
                error,
            });
            Vec::new()
        });

        report.articles.push(Article {
            title,
            link,
            date,
            tags,
        });
    }

    report
}

fn required_fields(entry: &RawEntry) -> Result<(String, String), EntryError> {
    let title = match entry.title.as_deref() {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => return Err(EntryError::MissingTitle),
    };
    match entry.link.as_deref() {
        Some(link) if !link.is_empty() => Ok((title, link.to_string())),
        _ => Err(EntryError::MissingLink { title }),
    }
}

/// Converts an RFC 822 publish date into `YYYY-MM-DD`.
///
/// Only the day, month and year tokens at their fixed position are read.
/// The year is kept verbatim and the day is not range-checked.
pub fn parse_published_date(published: &str) -> Result<String, FieldError> {
    let window: String = published.chars().skip(DATE_START).take(DATE_LEN).collect();

    let tokens: Vec<&str> = window.split_whitespace().collect();
    let [day, month, year] = tokens[..] else {
        return Err(FieldError::DateShape(window.clone()));
    };

    let day: i64 = day.parse().map_err(|source| FieldError::Day {
        day: day.to_string(),
        source,
    })?;

    let month = month_number(month).ok_or_else(|| FieldError::Month(month.to_string()))?;

    Ok(format!("{year}-{month:02}-{day:02}"))
}

fn month_number(abbreviation: &str) -> Option<usize> {
    let abbreviation = abbreviation.to_lowercase();
    MONTHS
        .iter()
        .position(|m| *m == abbreviation)
        .map(|index| index + 1)
}

/// Collects the term of every tag, failing if any tag lacks one
pub fn extract_tags(tags: Option<&[RawTag]>) -> Result<Vec<String>, FieldError> {
    tags.ok_or(FieldError::MissingTags)?
        .iter()
        .enumerate()
        .map(|(index, tag)| tag.term.clone().ok_or(FieldError::TagTerm { index }))
        .collect()
}
