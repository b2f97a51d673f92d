use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wunderlist_geektool::{ApiClient, App, Config, FileCache};

/// Print Wunderlist lists and tasks for a desktop widget.
#[derive(Parser)]
#[command(name = "wunderlist-geektool", version, about)]
struct Cli {
    /// Wunderlist access token (defaults to the build-time value).
    access_token: Option<String>,

    /// Wunderlist client id (defaults to the build-time value).
    client_id: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // stdout belongs to the widget.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("wunderlist_geektool=warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_args(cli.access_token, cli.client_id);

    let client = ApiClient::new(&config)?;
    let app = App::new(client, FileCache::new(&config.cache_dir), config.locale);
    app.run(&mut io::stdout().lock()).await;
    Ok(())
}
