//! Interactive terminal front end for a todo backend.

mod commands;
mod terminal;

use std::io::{Stdout, Write};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use todo_core::config::DEFAULT_BASE_URL;
use todo_core::{
    spawn_poller, ClientConfig, Dialogs, TodoApp, TodoClient, Transport, UiEvent, UreqTransport,
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use crate::commands::{Command, HELP};
use crate::terminal::{read_line, TerminalDialogs, TerminalView};

type TermApp = TodoApp<UreqTransport, TerminalView<Stdout>, TerminalDialogs>;

#[derive(Debug, Parser)]
#[command(name = "todo-term", version, about = "Keep a terminal in sync with a todo backend")]
struct Args {
    /// Backend root serving `/todos`.
    #[arg(long, env = "TODO_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Refresh period in milliseconds.
    #[arg(long, env = "TODO_POLL_MS", default_value_t = 2000)]
    poll_ms: u64,

    /// Per-request timeout in seconds.
    #[arg(long, env = "TODO_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,
}

impl Args {
    fn into_config(self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url,
            poll_interval: Duration::from_millis(self.poll_ms),
            request_timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

/// `RUST_LOG` when it parses, `info` otherwise.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();

    let config = Args::parse().into_config();
    config.validate()?;
    info!(base_url = %config.base_url, "connecting");

    let app: Arc<TermApp> = Arc::new(TodoApp::new(
        TodoClient::new(&config.base_url),
        UreqTransport::from_config(&config),
        TerminalView::new(std::io::stdout()),
        TerminalDialogs,
    ));
    let poller = spawn_poller(Arc::clone(&app), config.poll_interval);

    println!("{HELP}");
    while let Some(line) = read_line()? {
        match Command::parse(&line) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => run(&app, command).await,
            Err(err) => eprintln!("{err}; type `help` for commands"),
        }
    }

    poller.abort();
    Ok(())
}

async fn run<T, W, D>(app: &TodoApp<T, TerminalView<W>, D>, command: Command)
where
    T: Transport,
    W: Write + Send + 'static,
    D: Dialogs,
{
    match command {
        Command::Add(title) => {
            app.view().set_input(&title);
            app.dispatch(UiEvent::Submit).await;
        }
        Command::Done(id) => match app.view().row(id) {
            Some(row) => match row.mark_done {
                Some(event) => app.dispatch(event).await,
                None => println!("#{id} is already done"),
            },
            None => println!("no todo #{id} on screen"),
        },
        Command::Remove(id) => match app.view().row(id) {
            Some(row) => app.dispatch(row.delete).await,
            None => println!("no todo #{id} on screen"),
        },
        Command::List => {
            app.view().invalidate();
            app.list().await;
        }
        Command::Help => println!("{HELP}"),
        Command::Quit => {}
    }
}
