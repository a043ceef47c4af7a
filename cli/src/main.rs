use anyhow::Result;
use application::clock::ClockTicker;
use application::widget::ChatWidget;
use clap::{ArgAction, Parser};
use infrastructure::backend_client::BackendClient;
use infrastructure::config::Config;
use infrastructure::identity_store::IdentityStore;
use presentation::input;
use presentation::terminal::TerminalRenderer;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Terminal chat client for a conversational backend exposing
/// `POST /start` and `POST /chat`.
#[derive(Parser, Debug)]
#[command(name = "chatbox_cli")]
#[command(about = "Chat with a /start + /chat bot backend from the terminal", long_about = None)]
struct Cli {
    /// Backend base URL (overrides CHATBOX_ENDPOINT)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Forget the persisted identity pair and start fresh
    #[arg(long, action = ArgAction::SetTrue)]
    reset: bool,

    /// Do not run the window-title clock
    #[arg(long, action = ArgAction::SetTrue)]
    no_clock: bool,

    /// One-shot message (if empty, starts the interactive loop)
    #[arg(value_parser, trailing_var_arg = true)]
    message: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load();
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint;
    }

    let store = IdentityStore::new(&config.state_dir);
    if cli.reset {
        store.clear()?;
        println!("Stored identity cleared. Starting fresh.");
    }

    let render = Arc::new(TerminalRenderer::new());
    let clock = if cli.no_clock {
        None
    } else {
        Some(ClockTicker::spawn(render.clone()))
    };

    let backend = BackendClient::new(config.endpoint.clone());
    let mut widget = ChatWidget::new(backend, render, store)?;

    // First open bootstraps the session and shows the greeting.
    widget.open().await?;

    if !cli.message.is_empty() {
        widget.send(&cli.message.join(" ")).await?;
    } else {
        run_chat_loop(&mut widget).await?;
    }

    if let Some(clock) = clock {
        clock.stop();
    }

    Ok(())
}

async fn run_chat_loop(widget: &mut ChatWidget<BackendClient, TerminalRenderer>) -> Result<()> {
    loop {
        let user_input = input::ask_chat_turn()?;
        let trimmed = user_input.trim();
        if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
            break;
        }
        widget.send(&user_input).await?;
    }
    Ok(())
}
