use std::io::{self, ErrorKind, Write};

use anyhow::Result;
use log::debug;

use crate::config::{Cli, Config};
use crate::error::UsageError;
use crate::services::{normalize, render, select, FeedSource, Query, ShowFields};

/// One validated invocation: what to fetch, what to keep, what to print
#[derive(Debug, Clone)]
pub struct App {
    pub config: Config,
    pub query: Query,
    pub fields: ShowFields,
}

impl App {
    pub fn from_cli(cli: &Cli) -> Result<Self, UsageError> {
        Ok(Self {
            config: cli.config(),
            query: cli.query()?,
            fields: cli.show_fields(),
        })
    }

    /// Fetches the feed and returns the rendered lines.
    ///
    /// Nothing is produced unless the whole pipeline succeeds.
    pub async fn lines<S>(&self, source: &S) -> Result<Vec<String>>
    where
        S: FeedSource + ?Sized,
    {
        let entries = source.fetch_entries(&self.config.feed_url).await?;
        let articles = normalize(&entries);
        debug!("Normalized {} of {} entries", articles.len(), entries.len());

        let selected = select(articles, &self.query);
        debug!("Selected {} articles", selected.len());

        Ok(render(&selected, self.fields))
    }

    pub async fn run<S, W>(&self, source: &S, out: &mut W) -> Result<()>
    where
        S: FeedSource + ?Sized,
        W: Write,
    {
        let lines = self.lines(source).await?;
        write_lines(&lines, out)?;
        Ok(())
    }
}

/// Writes the rendered lines. A reader that goes away early (`rdian | head`)
/// ends the output without an error.
pub fn write_lines<W: Write>(lines: &[String], out: &mut W) -> io::Result<()> {
    let result = lines
        .iter()
        .try_for_each(|line| writeln!(out, "{}", line))
        .and_then(|()| out.flush());

    match result {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => {
            debug!("Output closed early");
            Ok(())
        }
        result => result,
    }
}
