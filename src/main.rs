//! # todo CLI
//!
//! Command-line interface for the smarttodo priority task list.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use smarttodo::{
    commands::{self, AddArgs},
    shell::Shell,
    ui, Config, Settings, TaskStore,
};

const GLOBAL_HELP: &str = "\
Configuration Files:
  ~/.config/smarttodo/config   Global configuration (optional)
  .smarttodo                   Directory configuration, searched upward (optional)

Configuration Keys:
  data_file        Task data file (default: tasks.txt)
  export_file      CSV export destination (default: tasks_export.csv)
  capacity         Maximum number of tasks (default: 1000)
  due_soon_hours   Reminder window for upcoming tasks (default: 24)

Getting Started:
  todo                                   Start the interactive menu
  todo add \"Pay rent\" -p 1 --due \"2026-11-01 09:00\"
  todo list                              Show all tasks by priority
  todo done                              Complete the most urgent task

Logging:
  Set RUST_LOG (e.g. RUST_LOG=debug) or pass --verbose for diagnostics on stderr.";

#[derive(Parser)]
#[command(name = "todo")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Prioritized to-do list with due-date reminders")]
#[command(
    long_about = "A prioritized to-do list. Tasks carry a priority from 1 (highest) to 5 \
(lowest) and an optional due date. The most urgent task is always at the top of the queue; \
overdue and soon-due tasks are flagged on startup.\n\n\
Run without a subcommand for the interactive menu. Subcommands perform one operation \
and exit, saving the task file when it changed."
)]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    /// Task data file (overrides configuration)
    #[arg(long, global = true, value_name = "PATH")]
    file: Option<String>,

    /// CSV export destination (overrides configuration)
    #[arg(long, global = true, value_name = "PATH")]
    export_file: Option<String>,

    /// Maximum number of tasks (overrides configuration)
    #[arg(long, global = true, value_name = "N")]
    capacity: Option<usize>,

    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a task
    #[command(after_help = "Examples:\n  \
todo add \"Buy milk\" --priority 3\n  \
todo add \"Submit report\" -p 1 --due \"2026-10-20 17:00\"")]
    Add {
        /// Task description
        description: String,

        /// Priority from 1 (highest) to 5 (lowest)
        #[arg(short, long, value_parser = clap::value_parser!(i32).range(1..=5))]
        priority: i32,

        /// Due date and time
        #[arg(short, long, value_name = "YYYY-MM-DD HH:MM")]
        due: Option<String>,
    },

    /// Complete (remove) the most urgent task
    Done,

    /// List all tasks sorted by priority
    List,

    /// Show the most urgent task without removing it
    Peek,

    /// Export all tasks to CSV
    Export {
        /// Output file (defaults to the configured export file)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Show overdue and soon-due tasks
    Remind,

    /// Create a documented global configuration file
    Setup,

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

fn main() {
    let cli = Cli::parse();
    install_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("{}", ui::error(&err));
        std::process::exit(1);
    }
}

fn install_tracing(verbose: bool) {
    // RUST_LOG applies unless --verbose forces debug output.
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .compact()
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let overrides = Settings {
        data_file: cli.file,
        export_file: cli.export_file,
        capacity: cli.capacity,
        due_soon_hours: None,
    };
    let mut stdout = io::stdout().lock();

    match cli.command {
        None => {
            let config = Config::load(overrides)?;
            let store = commands::open_store(&config)?;
            Shell::new(config, store, io::stdin().lock(), stdout).run()?;
            Ok(())
        }

        Some(Commands::Add {
            description,
            priority,
            due,
        }) => with_store(overrides, true, |store, _| {
            commands::add(
                store,
                &AddArgs {
                    description,
                    priority,
                    due,
                },
                &mut stdout,
            )
        }),

        Some(Commands::Done) => {
            with_store(overrides, true, |store, _| commands::complete(store, &mut stdout))
        }

        Some(Commands::List) => {
            with_store(overrides, false, |store, _| commands::list(store, &mut stdout))
        }

        Some(Commands::Peek) => {
            with_store(overrides, false, |store, _| commands::peek(store, &mut stdout))
        }

        Some(Commands::Export { output }) => with_store(overrides, false, |store, config| {
            let path = output.unwrap_or_else(|| config.export_file.clone());
            commands::export(store, &path, &mut stdout)
        }),

        Some(Commands::Remind) => {
            with_store(overrides, false, |store, _| commands::remind(store, &mut stdout))
        }

        Some(Commands::Setup) => commands::setup(&mut stdout),

        Some(Commands::Completions { shell }) => {
            commands::completions(shell, &mut Cli::command(), &mut stdout)?;
            stdout.flush()?;
            Ok(())
        }
    }
}

/// Loads the store, runs `op`, and saves afterwards when `save` is set.
fn with_store<F>(overrides: Settings, save: bool, op: F) -> Result<()>
where
    F: FnOnce(&mut TaskStore, &Config) -> Result<()>,
{
    let config = Config::load(overrides)?;
    let mut store = commands::open_store(&config)?;

    op(&mut store, &config)?;

    if save {
        commands::save_store(&store, &config)?;
    }
    Ok(())
}
