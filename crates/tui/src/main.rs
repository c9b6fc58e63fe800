mod cli;
mod logging;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use chanview_api::client::Client;
use chanview_fetch::fetcher::Fetcher;
use chanview_tui::{app::App, runner};
use clap::Parser;
use tokio::sync::mpsc;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    let _log_guard = logging::init(&args.log_file())?;
    let cfg = args.config();
    info!("chanview starting, api {}", cfg.base_url());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("chanview-fetch")
        .enable_all()
        .build()
        .context("starting fetch runtime")?;

    let https = cfg.use_https();
    let client = Arc::new(Client::new(Some(cfg)).context("building http client")?);
    let (events_tx, mut events_rx) = mpsc::channel(16);
    let mut fetcher = Fetcher::new(client, events_tx, runtime.handle().clone());
    let mut app = App::new(https);

    let mut terminal = ratatui::try_init().context("initializing terminal")?;
    let result = runner::run(&mut terminal, &mut app, &mut fetcher, &mut events_rx);
    ratatui::restore();

    drop(fetcher);
    runtime.shutdown_timeout(Duration::from_millis(200));
    info!("chanview stopped");
    result.context("terminal i/o failed")
}
