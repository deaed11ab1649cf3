use std::num::ParseIntError;

use thiserror::Error;

/// Recoverable failure while extracting one optional field of an entry.
///
/// The normalizer logs these and falls back to the field's default.
#[derive(Debug, Error, PartialEq)]
pub enum FieldError {
    #[error("entry has no publish date")]
    MissingDate,

    #[error("publish date {0:?} does not split into day, month and year")]
    DateShape(String),

    #[error("invalid day {day:?} in publish date: {source}")]
    Day {
        day: String,
        #[source]
        source: ParseIntError,
    },

    #[error("unknown month abbreviation {0:?}")]
    Month(String),

    #[error("entry has no tags")]
    MissingTags,

    #[error("tag at position {index} has no term")]
    TagTerm { index: usize },
}

/// An entry that cannot become an article at all.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntryError {
    #[error("entry has no title")]
    MissingTitle,

    #[error("entry {title:?} has no link")]
    MissingLink { title: String },
}

/// Invalid combination of command line options.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("--newest, --oldest and --latest are mutually exclusive")]
    ConflictingDateOrder,

    #[error("count must be at least 1, got {0}")]
    InvalidCount(i64),
}
