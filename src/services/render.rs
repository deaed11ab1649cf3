use crate::models::Article;

/// Resets the terminal color after a field
pub const RESET: &str = "\x1b[0m";

/// A displayable field of an article, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Link,
    Date,
    Tags,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Title, Field::Link, Field::Date, Field::Tags];

    /// ANSI color code the field is printed with
    pub const fn color(self) -> &'static str {
        match self {
            Field::Title => "\x1b[0;31m",
            Field::Link => "\x1b[0;32m",
            Field::Date => "\x1b[0;33m",
            Field::Tags => "\x1b[0;34m",
        }
    }

    fn content(self, article: &Article) -> String {
        match self {
            Field::Title => article.title.clone(),
            Field::Link => article.link.clone(),
            Field::Date => article.date.clone(),
            Field::Tags => article
                .tags
                .iter()
                .map(|tag| format!("#{tag}"))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

/// Which fields to print
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShowFields {
    pub title: bool,
    pub link: bool,
    pub date: bool,
    pub tags: bool,
}

impl ShowFields {
    pub const fn all() -> Self {
        Self {
            title: true,
            link: true,
            date: true,
            tags: true,
        }
    }

    /// Shows every field when none was picked
    pub fn or_all(self) -> Self {
        if self == Self::default() {
            Self::all()
        } else {
            self
        }
    }

    pub fn shows(&self, field: Field) -> bool {
        match field {
            Field::Title => self.title,
            Field::Link => self.link,
            Field::Date => self.date,
            Field::Tags => self.tags,
        }
    }
}

/// Renders one colored line per shown field of every article
pub fn render(articles: &[Article], fields: ShowFields) -> Vec<String> {
    articles
        .iter()
        .flat_map(|article| {
            Field::ALL
                .into_iter()
                .filter(move |field| fields.shows(*field))
                .map(move |field| format!("{}{}{}", field.color(), field.content(article), RESET))
        })
        .collect()
}
