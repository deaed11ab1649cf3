use anyhow::{bail, Result};
use async_trait::async_trait;
use clap::Parser;
use url::Url;

use rdian::{parse_entries, App, Cli, FeedSource, RawEntry, UsageError};

const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>The Guardian</title>
    <item>
      <title>Bravo</title>
      <link>https://example.com/bravo</link>
      <category>politics</category>
      <pubDate>Sat, 03 Jun 2023 09:00:00 GMT</pubDate>
    </item>
    <item>
      <title>Alpha</title>
      <link>https://example.com/alpha</link>
      <category>world</category>
      <category>politics</category>
      <pubDate>Mon, 05 Jun 2023 10:00:00 GMT</pubDate>
    </item>
    <item>
      <title>Charlie</title>
      <link>https://example.com/charlie</link>
      <pubDate>not a date</pubDate>
    </item>
    <item>
      <link>https://example.com/untitled</link>
    </item>
  </channel>
</rss>"#;

/// Serves a fixed document, as if it had been downloaded
struct StaticFeed(&'static str);

#[async_trait]
impl FeedSource for StaticFeed {
    async fn fetch_entries(&self, _url: &Url) -> Result<Vec<RawEntry>> {
        parse_entries(self.0.as_bytes())
    }
}

struct Unreachable;

#[async_trait]
impl FeedSource for Unreachable {
    async fn fetch_entries(&self, url: &Url) -> Result<Vec<RawEntry>> {
        bail!("Failed to fetch feed {}", url)
    }
}

fn app(args: &[&str]) -> Result<App, UsageError> {
    let cli = Cli::try_parse_from(std::iter::once("rdian").chain(args.iter().copied())).unwrap();
    App::from_cli(&cli)
}

async fn output(args: &[&str]) -> String {
    let mut out = Vec::new();
    app(args)
        .unwrap()
        .run(&StaticFeed(FEED), &mut out)
        .await
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn test_default_output_shows_every_field() {
    let output = output(&[]).await;

    let expected = [
        "\x1b[0;31mBravo\x1b[0m",
        "\x1b[0;32mhttps://example.com/bravo\x1b[0m",
        "\x1b[0;33m2023-06-03\x1b[0m",
        "\x1b[0;34m#politics\x1b[0m",
        "\x1b[0;31mAlpha\x1b[0m",
        "\x1b[0;32mhttps://example.com/alpha\x1b[0m",
        "\x1b[0;33m2023-06-05\x1b[0m",
        "\x1b[0;34m#world #politics\x1b[0m",
        "\x1b[0;31mCharlie\x1b[0m",
        "\x1b[0;32mhttps://example.com/charlie\x1b[0m",
        "\x1b[0;33m\x1b[0m",
        "\x1b[0;34m\x1b[0m",
    ];
    assert_eq!(output.lines().collect::<Vec<_>>(), expected);
}

#[tokio::test]
async fn test_filter_sort_and_limit() {
    let output = output(&["-t", "-s", "-T", "politics", "-c", "1"]).await;
    assert_eq!(output, "\x1b[0;31mAlpha\x1b[0m\n");
}

#[tokio::test]
async fn test_newest_keeps_literal_ascending_order() {
    let output = output(&["-t", "--newest"]).await;
    assert_eq!(
        output.lines().collect::<Vec<_>>(),
        [
            "\x1b[0;31mCharlie\x1b[0m",
            "\x1b[0;31mBravo\x1b[0m",
            "\x1b[0;31mAlpha\x1b[0m",
        ]
    );
}

#[tokio::test]
async fn test_latest_lists_most_recent_first() {
    let output = output(&["-d", "--latest"]).await;
    assert_eq!(
        output.lines().collect::<Vec<_>>(),
        [
            "\x1b[0;33m2023-06-05\x1b[0m",
            "\x1b[0;33m2023-06-03\x1b[0m",
            "\x1b[0;33m\x1b[0m",
        ]
    );
}

#[tokio::test]
async fn test_usage_errors_stop_before_output() {
    assert_eq!(
        app(&["--newest", "--oldest"]).unwrap_err(),
        UsageError::ConflictingDateOrder
    );
    assert_eq!(app(&["--count", "0"]).unwrap_err(), UsageError::InvalidCount(0));
}

#[tokio::test]
async fn test_fetch_failure_writes_nothing() {
    let mut out = Vec::new();
    let result = app(&[]).unwrap().run(&Unreachable, &mut out).await;

    assert!(result.is_err());
    assert!(out.is_empty());
}
