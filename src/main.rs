mod common;
mod config;
mod error;
mod network;
mod snapshot;
mod ui;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use network::{ActivityClient, HttpActivityApi};
use tokio::sync::mpsc;
use ui::ActivityApp;
use ui::state::AppState;

#[derive(Parser)]
#[command(
    name = "activity_board",
    version,
    about = "Desktop client for the school activities signup API"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Base URL of the activities API (overrides config file and environment)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Fetch the activity list once and print it as HTML (no UI)
    Snapshot,
}

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let app_config = config::load_config(&cli.config)
        .with_overrides(cli.base_url.clone(), std::env::var(config::BASE_URL_ENV).ok());

    let api = match app_config
        .base_url()
        .and_then(HttpActivityApi::new)
    {
        Ok(api) => api,
        Err(err) => {
            log::error!("Cannot use base url `{}`: {err}", app_config.base_url);
            std::process::exit(2);
        }
    };
    log::info!("Using activities API at {}", app_config.base_url);

    if cli.mode == Some(Mode::Snapshot) {
        run_snapshot(api).await;
        return Ok(());
    }

    run_full_client(api).await
}

async fn run_snapshot(api: HttpActivityApi) {
    let (event_tx, mut event_rx) = mpsc::channel(4);
    let client = ActivityClient::new(api, event_tx);
    // Failure is rendered as the fallback markup below.
    let _ = client.load_activities().await;
    drop(client);

    let mut state = AppState::new();
    while let Some(event) = event_rx.recv().await {
        state.apply(event, chrono::Utc::now());
    }

    println!("{}", snapshot::render_view(&state.list));
    if let Some(catalog) = state.catalog() {
        println!("{}", snapshot::render_options(catalog));
    }
}

async fn run_full_client(api: HttpActivityApi) -> Result<(), eframe::Error> {
    // UI -> API worker
    let (cmd_tx, cmd_rx) = mpsc::channel(100);
    // API worker -> UI
    let (event_tx, event_rx) = mpsc::channel(100);

    tokio::spawn(async move {
        ActivityClient::new(api, event_tx).run(cmd_rx).await;
    });

    let options = eframe::NativeOptions::default();
    let mut event_rx = Some(event_rx);

    eframe::run_native(
        "Activity Board",
        options,
        Box::new(move |cc| {
            let event_receiver = event_rx
                .take()
                .expect("ActivityApp should only be initialized once");

            log::info!("Client window started");

            Ok(Box::new(ActivityApp::new(cc, cmd_tx.clone(), event_receiver)))
        }),
    )
}
