//! Wayfarer Demo Application
//!
//! Reads commands from stdin:
//! - any text: search for it
//! - `:all`    show every recommendation
//! - `:clocks` print the live clock of every shown card
//! - `:reset`  clear results and stop the clocks
//! - `:quit`   exit

use std::io::{self, Stdout, Write};
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use wayfarer_runtime::{init_tracing, Notifier, RuntimeConfig, SearchSession, TextRenderer};
use wayfarer_time::ClockDisplay;

/// Notifier that prints to the terminal
struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn status(&self, message: &str) {
        println!("· {message}");
    }

    fn alert(&self, message: &str) {
        println!("⚠️  {message}");
    }
}

enum Command<'a> {
    Search(&'a str),
    All,
    Clocks,
    Reset,
    Quit,
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Self {
        match line.trim() {
            ":all" => Command::All,
            ":clocks" => Command::Clocks,
            ":reset" => Command::Reset,
            ":quit" | ":q" => Command::Quit,
            _ => Command::Search(line),
        }
    }
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}

fn print_clocks(renderer: &TextRenderer<Stdout>) {
    let clocks = renderer.clocks();
    if clocks.is_empty() {
        println!("No clocks running");
        return;
    }
    for clock in clocks {
        println!("🕐 {}: {} [{}]", clock.country(), clock.line(), clock.zone());
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = RuntimeConfig::from_env()?;
    init_tracing(&config)?;

    println!("Wayfarer - travel recommendations");
    println!("Catalog: {}", config.source);
    println!("Type a keyword (beach, temple, mountain...), :all, :clocks, :reset or :quit");

    let renderer = Arc::new(TextRenderer::new(io::stdout()));
    let mut session = SearchSession::new(&config, renderer.clone(), Arc::new(TerminalNotifier));

    if let Err(err) = session.show_all().await {
        tracing::warn!(error = %err, "featured destinations unavailable");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt()?;

    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Command::Search(term) => {
                // Failures were already reported through the notifier
                let _ = session.search(term).await;
            }
            Command::All => {
                let _ = session.show_all().await;
            }
            Command::Clocks => print_clocks(&renderer),
            Command::Reset => session.reset(),
            Command::Quit => break,
        }
        prompt()?;
    }

    session.reset();
    Ok(())
}
