//! `user-console` entry point.
//!
//! Without a subcommand the interactive console takes over the terminal.
//! `list` and `show` fetch once and print to stdout.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};

use user_console::api::HttpUserResource;
use user_console::config::Config;
use user_console::logging::{self, LogTarget};
use user_console::routing::{lookup, DetailView, Route};
use user_console::store::UserStore;
use user_console::ui;
use user_console::ui::render::detail_lines;

#[derive(Parser, Debug)]
#[command(name = "user-console")]
#[command(version)]
#[command(about = "Browse, create, edit and delete users of a REST collection")]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the resource base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Log filter directive, e.g. "debug" or "user_console=trace"
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Fetch and print all users
    List,
    /// Fetch and print one user
    Show {
        /// User id, or a `/user/{id}` path
        id: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = load_config(&cli)?;

    let filter = logging::build_filter(cli.log_level.as_deref(), &config.logging.level);
    let log_path = config.log_path();
    let target = match cli.command {
        Some(_) => LogTarget::Stderr,
        None => LogTarget::File(&log_path),
    };
    logging::init(filter, target)
        .with_context(|| format!("failed to initialize logging ({})", log_path.display()))?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let resource = HttpUserResource::new(&config.api).context("failed to build HTTP client")?;
    tracing::info!(base_url = resource.base_url(), "Starting user console");
    let store = UserStore::new(Arc::new(resource));

    match cli.command {
        None => {
            let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
            ui::run(store, tick_rate, runtime.handle()).context("terminal UI failed")?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::List) => {
            runtime.block_on(store.load_users());
            if let Some(code) = report_store_error(&store) {
                return Ok(code);
            }
            print_list(&store);
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Show { id }) => {
            runtime.block_on(store.load_users());
            if let Some(code) = report_store_error(&store) {
                return Ok(code);
            }
            Ok(print_detail(&store, &id))
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
        config.validate()?;
    }
    Ok(config)
}

fn report_store_error(store: &UserStore) -> Option<ExitCode> {
    let error = store.error();
    if error.is_empty() {
        return None;
    }
    eprintln!("{error}");
    Some(ExitCode::FAILURE)
}

fn print_list(store: &UserStore) {
    println!("ID\tName\tUsername\tEmail\tPhone\tCity\tWebsite");
    for user in store.users() {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            user.id,
            user.name,
            user.username,
            user.email,
            user.phone,
            user.address.city,
            user.website
        );
    }
}

/// `show` accepts a bare id or a `/user/<id>` path.
fn detail_route(target: &str) -> Route {
    if target.starts_with('/') {
        Route::parse(target)
    } else {
        Route::Detail(target.to_string())
    }
}

fn print_detail(store: &UserStore, target: &str) -> ExitCode {
    let users = store.users();
    let view = match detail_route(target) {
        Route::Detail(raw_id) => lookup(&users, &raw_id, false),
        Route::List => DetailView::NotFound,
    };
    match view {
        DetailView::Found(user) => {
            println!("{}'s Details", user.name);
            for line in detail_lines(user).iter().skip(1) {
                let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
                println!("{}", text.trim_start());
            }
            ExitCode::SUCCESS
        }
        DetailView::NotFound | DetailView::Loading => {
            eprintln!("User not found");
            ExitCode::FAILURE
        }
    }
}
