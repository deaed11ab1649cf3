use std::io;

use anyhow::Result;
use clap::Parser;
use log::{error, info};

use rdian::{app::write_lines, App, Cli, RssService};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Diagnostics go to stderr; warnings are on unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    // Options are checked before anything goes over the network
    let app = App::from_cli(cli)?;

    info!("Reading {}", app.config.feed_url);
    let source = RssService::new(app.config.timeout)?;

    let lines = app.lines(&source).await?;
    write_lines(&lines, &mut io::stdout().lock())?;
    Ok(())
}
