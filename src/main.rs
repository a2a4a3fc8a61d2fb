use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use budget_ledger::cli::{
    handle_audit_command, handle_demo_command, handle_run_command, AuditArgs, OutputOptions,
    RunArgs,
};
use budget_ledger::config::{LedgerPaths, Settings};

#[derive(Parser)]
#[command(
    name = "budget",
    author,
    version,
    about = "Category budgeting ledger with a text spend chart",
    long_about = "budget plays scenario files of deposits, withdrawals, and transfers \
                  against a set of budget categories, then prints each category's \
                  ledger and a chart of how total spending splits across them."
)]
struct Cli {
    /// Show more log output (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Show less log output (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    quiet: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario file and print its ledgers and spend chart
    Run(RunArgs),

    /// Run the built-in example scenario
    Demo(OutputOptions),

    /// Show recent audit log entries
    Audit(AuditArgs),

    /// Write default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(i16::from(cli.verbose) - i16::from(cli.quiet));

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Run(args)) => {
            handle_run_command(&paths, &settings, args)?;
        }
        Some(Commands::Demo(output)) => {
            handle_demo_command(&paths, &settings, output)?;
        }
        Some(Commands::Audit(args)) => {
            handle_audit_command(&paths, args)?;
        }
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!("Settings already exist at: {}", paths.settings_file().display());
            } else {
                settings.save(&paths)?;
                println!("Settings written to: {}", paths.settings_file().display());
            }
        }
        Some(Commands::Config) => {
            println!("budget-ledger Configuration");
            println!("===========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!(
                "Initialized:    {}",
                if paths.is_initialized() { "yes" } else { "no" }
            );
            println!();
            println!("Settings:");
            println!("  Audit enabled:   {}", settings.audit_enabled);
            println!("  Show summary:    {}", settings.show_summary);
            println!("  Currency symbol: {}", settings.currency_symbol);
        }
        None => {
            println!("budget - category budgeting ledger");
            println!();
            println!("Run 'budget --help' for usage information.");
            println!("Run 'budget demo' to see an example ledger and spend chart.");
        }
    }

    Ok(())
}

fn init_logging(verbosity: i16) {
    let level = level_for(verbosity);

    let main_module = env!("CARGO_PKG_NAME").replace('-', "_");
    env_logger::Builder::new()
        .filter_module(&main_module, level)
        .filter_module("budget", level)
        .parse_env(env_logger::Env::new().filter("BUDGET_LOG"))
        .init();
}

fn level_for(verbosity: i16) -> log::LevelFilter {
    match verbosity {
        i16::MIN..=-1 => log::LevelFilter::Error,
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}
