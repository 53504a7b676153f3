use std::fs::File;
use std::sync::Mutex;

use tokio::sync::mpsc;
use tracing::{error, info};

use stockwatch::api::fetch_stock_detail;
use stockwatch::config::{AppConfig, fetch_config};
use stockwatch::controller::StreamController;
use stockwatch::tui::event::{spawn_event_reader, spawn_tick_timer, update};
use stockwatch::tui::{Action, App, Message, Tui, restore_terminal, setup_terminal};
use stockwatch::view::{STOCK_LIST_ID, StockList};
use stockwatch::{Result, StockwatchError};

#[tokio::main]
async fn main() -> Result<()> {
    let config = fetch_config()?;
    init_tracing(&config)?;

    let client = reqwest::Client::builder().build()?;
    let (tx, mut rx) = mpsc::unbounded_channel();

    let controller = StreamController::new(config.stream_url.clone(), StockList::new(STOCK_LIST_ID));
    let mut app = App::new(controller);

    let mut terminal = setup_terminal()?;

    app.controller.start(client.clone(), tx.clone());
    spawn_event_reader(tx.clone());
    spawn_tick_timer(tx.clone(), config.tick_ms);

    let result = run(&mut terminal, &mut app, &mut rx, &tx, &client, &config).await;

    app.controller.stop();
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        error!("Exiting with error: {e}");
    }
    result
}

/// Draws the UI and applies messages until the user quits.
async fn run(
    terminal: &mut Tui,
    app: &mut App,
    rx: &mut mpsc::UnboundedReceiver<Message>,
    tx: &mpsc::UnboundedSender<Message>,
    client: &reqwest::Client,
    config: &AppConfig,
) -> Result<()> {
    while !app.should_quit {
        terminal
            .draw(|frame| stockwatch::tui::render(frame, app))
            .map_err(|e| StockwatchError::Io(format!("failed to draw: {e}")))?;

        let Some(message) = rx.recv().await else {
            break;
        };

        if let Some(action) = update(app, message) {
            handle_action(action, tx, client, config);
        }
    }

    info!("Shutting down");
    Ok(())
}

fn handle_action(
    action: Action,
    tx: &mpsc::UnboundedSender<Message>,
    client: &reqwest::Client,
    config: &AppConfig,
) {
    match action {
        Action::FetchDetail(code) => {
            let tx = tx.clone();
            let client = client.clone();
            let api_url = config.api_url.clone();
            tokio::spawn(async move {
                let result = fetch_stock_detail(&client, &api_url, &code)
                    .await
                    .map_err(|e| e.to_string());
                let _ = tx.send(Message::Detail { code, result });
            });
        }
    }
}

/// Sends tracing output to the configured log file; the terminal is
/// owned by the TUI.
fn init_tracing(config: &AppConfig) -> Result<()> {
    let file = File::create(&config.log_file).map_err(|e| {
        StockwatchError::Io(format!(
            "failed to create log file {}: {e}",
            config.log_file.display()
        ))
    })?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(config.log_level)
        .init();

    info!(stream_url = %config.stream_url, "Starting stockwatch");
    Ok(())
}
