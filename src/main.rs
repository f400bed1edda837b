//! SavePass - Local Login List
//!
//! Lists stored logins and filters them by exact service name.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, DisableFocusChange, EnableFocusChange},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

mod app;
mod db;
mod input;
mod logging;
mod logins;
mod ui;

use app::{App, AppConfig};
use db::{Database, DatabaseConfig};
use logins::{register_login, LoginListModel, NewLogin};

#[derive(Parser)]
#[command(name = "savepass", version, about = "Browse locally stored logins")]
struct Cli {
    /// Database file (defaults to the user data directory)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Log file (defaults next to the database)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new login
    Add {
        #[arg(long)]
        service: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Print stored logins, optionally only those for one service
    List {
        /// Exact service name to filter by
        #[arg(long)]
        service: Option<String>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::default();
    if let Some(path) = cli.db {
        config.db_path = path;
    }
    if let Some(path) = cli.log_file {
        config.log_path = path;
    }

    logging::init_logging(&config.log_path)?;

    let db = Database::open(DatabaseConfig::with_path(&config.db_path))
        .with_context(|| format!("open database {}", config.db_path.display()))?;

    tracing::info!(db = %db.path().display(), "savepass started");

    match cli.command {
        None => run_tui(App::new(config, db)),
        Some(Commands::Add { service, email, password }) => {
            let new = NewLogin { service_name: service, email, password };
            let login = register_login(&db, new)?;
            println!("{}", login.id);
            Ok(())
        }
        Some(Commands::List { service, json }) => print_logins(db, service, json),
    }
}

fn print_logins(db: Database, service: Option<String>, json: bool) -> Result<()> {
    let mut model = LoginListModel::new(db);
    model.reload()?;

    if let Some(service) = service {
        model.on_search_text_change(&service);
        model.submit_filter();
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(model.display_set()).context("serialize logins json")?
        );
        return Ok(());
    }

    println!("{}", model.summary());
    for login in model.display_set() {
        println!("{}\t{}\t{}", login.service_name, login.email, login.password);
    }
    Ok(())
}

fn run_tui(mut app: App<Database>) -> Result<()> {
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableFocusChange, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Restore the terminal before the default hook prints the panic
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableFocusChange, LeaveAlternateScreen);
        default_hook(info);
    }));
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<Database>,
) -> Result<()> {
    // First mount counts as a focus event
    app.on_focus();

    while !app.should_quit {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(app.config.tick_rate)? {
            app.handle_event(event::read()?);
        }
    }

    Ok(())
}
