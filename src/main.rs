//! Guestbook session
//!
//! Interactive terminal session: loads the initial visitors from the data
//! source once, then reads form input from stdin and prints the rendered
//! list after every change.
//!
//! ```text
//! > name Alice
//! > message Hello there
//! > submit
//! ```

use anyhow::Context;
use clap::Parser;
use guestbook::config::{generate_default_config, Config};
use guestbook::{BootstrapLoader, BootstrapOutcome, Session, SubmitOutcome};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser)]
#[command(name = "guestbook")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Sign the guestbook from your terminal")]
#[command(long_about = "Loads the visitor list from the mock data source once, then lets you add entries.\nEntries live only for this session.")]
struct Cli {
    /// Data source URL (overrides config)
    #[arg(long)]
    source_url: Option<String>,

    /// Config file (default: standard locations, then environment)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start with an empty list instead of fetching
    #[arg(long)]
    offline: bool,

    /// Print the list as HTML markup
    #[arg(long)]
    html: bool,

    /// Print a default config file and exit
    #[arg(long)]
    print_config: bool,
}

const HELP: &str = "\
commands:
  name <text>      set the full name field
  message <text>   set the message field
  submit           add the entry (both fields required)
  list             print the list
  stats            print work done by the last render
  help             show this help
  quit             end the session";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", generate_default_config());
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load_default(),
    };
    if let Some(url) = cli.source_url {
        config.client.source_url = url;
    }

    guestbook::logging::init(&config.logging);

    let mut session = Session::new();

    if !cli.offline {
        let loader =
            BootstrapLoader::from_config(&config.client).context("building HTTP client")?;
        match session.bootstrap(&loader).await {
            BootstrapOutcome::Seeded { count, .. } => println!("Loaded {} visitors.", count),
            BootstrapOutcome::Failed(e) => println!("Could not load visitors ({}). Starting empty.", e),
        }
    }

    print_list(&mut session, cli.html);
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        let line = line.trim_end();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));

        match command {
            "name" => session.form_mut().set_full_name(rest),
            "message" => session.form_mut().set_message(rest),
            "submit" => match session.submit() {
                SubmitOutcome::Created(entry) => {
                    println!("Thanks, {}!", entry.full_name());
                    print_list(&mut session, cli.html);
                }
                SubmitOutcome::Ignored { field } => println!("({} is empty, nothing added)", field),
            },
            "list" => print_list(&mut session, cli.html),
            "stats" => println!("{}", session.render_stats()),
            "help" => println!("{}", HELP),
            "quit" | "exit" => break,
            "" => {}
            other => println!("unknown command '{}', try 'help'", other),
        }
    }

    tracing::debug!(entries = session.store().len(), "Session ended");
    Ok(())
}

fn print_list(session: &mut Session, html: bool) {
    if html {
        println!("{}", session.render_html());
        return;
    }

    let rows = session.render();
    if rows.is_empty() {
        println!("(no visitors yet)");
    }
    for row in rows {
        println!("  {}", row);
    }
}
