use anyhow::Result;
use clap::{Parser, Subcommand};

use outlay::audit::AuditLogger;
use outlay::config::{OutlayPaths, Settings};
use outlay::display::format_category_list;
use outlay::host::ExpenseRepository;
use outlay::storage::MemoryStore;

#[derive(Parser)]
#[command(
    name = "outlay",
    version,
    about = "Quick expense entry for the terminal",
    long_about = "Outlay records expenses from a numeric keypad: type an amount, \
                  pick a category, and undo within a few seconds if you slipped."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the entry screen (default)
    #[command(alias = "ui")]
    Tui,

    /// Write the current settings to config.json for editing
    Init,

    /// Show current configuration and paths
    Config,

    /// List the configured categories in grid order
    Categories,

    /// Show the most recent entries of the audit log
    Log {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = OutlayPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            let mut store = MemoryStore::from_settings(&settings);
            if settings.audit_enabled {
                paths.ensure_directories()?;
                store = store.with_audit(AuditLogger::new(paths.audit_log()));
            }
            outlay::tui::run_tui(store, &settings)?;
        }
        Commands::Init => {
            settings.save(&paths)?;
            println!("Wrote settings to {}", paths.settings_file().display());
            println!();
            println!("Edit the \"categories\" list there to change the category grid.");
            println!("Run 'outlay' to start entering expenses.");
        }
        Commands::Config => {
            println!("Outlay Configuration");
            println!("====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Date format:      {}", settings.long_date_format);
            println!("  Undo window:      {}s", settings.undo_window_secs);
            println!("  Audit enabled:    {}", settings.audit_enabled);
            println!("  Categories:       {}", settings.categories.len());
        }
        Commands::Categories => {
            let categories = MemoryStore::from_settings(&settings).load_categories()?;
            print!("{}", format_category_list(&categories));
        }
        Commands::Log { count } => {
            let entries = AuditLogger::new(paths.audit_log()).read_recent(count)?;
            if entries.is_empty() {
                println!("No audit entries yet.");
            }
            for entry in &entries {
                println!("{}", entry.format_human_readable());
            }
        }
    }

    Ok(())
}
