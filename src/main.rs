use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use msf_inventory::commands::{config_cmd::ConfigOptions, enumerate::EnumerateOptions};
use msf_inventory::commands::{execute_config, execute_enumerate, execute_info, info::InfoOptions};
use msf_inventory::error::AppError;
use msf_inventory::model::ItemType;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli.command) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), AppError> {
    match command {
        Commands::Enumerate(args) => {
            let options = EnumerateOptions {
                item_types: resolve_item_types(args.item_types),
                output: args.output,
                parallel: args.parallel,
            };
            execute_enumerate(options)?;
        }
        Commands::Info(args) => {
            execute_info(InfoOptions { module: args.module })?;
        }
        Commands::Config(args) => {
            let options = ConfigOptions {
                show_path: args.path,
                show: args.show,
                edit: args.edit,
                add_exclude: args.add_exclude,
            };
            execute_config(options)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

#[derive(Parser)]
#[command(
    name = "msf-inventory",
    version,
    about = "Build a filtered, categorized inventory of Metasploit modules."
)]
struct Cli {
    /// Emit debug diagnostics (parse statistics, console exit codes).
    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Query the console for every module type and write the inventory report.
    #[command(visible_alias = "en")]
    Enumerate(EnumerateArgs),
    /// Show the parsed detail record of a single module.
    Info(InfoArgs),
    /// Manage msf-inventory configuration (console, vocabularies, exclusions).
    #[command(visible_alias = "cfg")]
    Config(ConfigArgs),
}

#[derive(Args)]
struct EnumerateArgs {
    /// Restrict enumeration to specific module types (e.g. exploit, auxiliary, post).
    #[arg(short = 't', long = "type", value_name = "TYPE", action = ArgAction::Append)]
    item_types: Vec<ItemType>,

    /// Report destination; `-` writes the report to stdout.
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Query module types concurrently.
    #[arg(long, action = ArgAction::SetTrue)]
    parallel: bool,
}

#[derive(Args)]
struct InfoArgs {
    /// Full module path, e.g. exploit/windows/smb/ms17_010_eternalblue.
    #[arg(value_name = "MODULE")]
    module: String,
}

#[derive(Args)]
struct ConfigArgs {
    /// Show the configuration file path.
    #[arg(long = "path", action = ArgAction::SetTrue)]
    path: bool,

    /// Print the effective configuration, defaults included.
    #[arg(long = "show", action = ArgAction::SetTrue)]
    show: bool,

    /// Open the configuration file in $EDITOR.
    #[arg(long = "edit", action = ArgAction::SetTrue)]
    edit: bool,

    /// Exclude identifiers matching a glob pattern from future reports.
    #[arg(long = "add-exclude", value_name = "GLOB")]
    add_exclude: Option<String>,
}

fn resolve_item_types(item_types: Vec<ItemType>) -> Vec<ItemType> {
    if item_types.is_empty() { ItemType::ALL.to_vec() } else { item_types }
}
