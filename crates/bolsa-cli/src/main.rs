mod commands;
mod logging;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use logging::LogFormat;

#[derive(Parser)]
#[command(
    name = "bolsa",
    version,
    about = "Check and auto-classify bolsa appointment spreadsheets"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format
    #[arg(long, value_enum, default_value = "compact", global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a spreadsheet has the expected 10-column layout
    Check {
        /// Path to the .xlsx file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Suggest bolsa type and service from a file name
    Classify {
        /// File name (or path; only the final component is used)
        file_name: PathBuf,

        /// Bolsa type catalog (JSON); defaults to the built-in catalog
        #[arg(long, value_name = "FILE")]
        tipos: Option<PathBuf>,

        /// Service catalog (JSON); defaults to the built-in catalog
        #[arg(long, value_name = "FILE")]
        servicios: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Check structure and classify an upload in one pass
    Analyze {
        /// Path to the .xlsx file
        input_file: PathBuf,

        /// Bolsa type catalog (JSON); defaults to the built-in catalog
        #[arg(long, value_name = "FILE")]
        tipos: Option<PathBuf>,

        /// Service catalog (JSON); defaults to the built-in catalog
        #[arg(long, value_name = "FILE")]
        servicios: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Inspect reference catalogs
    Catalogs {
        #[command(subcommand)]
        action: CatalogsAction,
    },
}

#[derive(Subcommand)]
enum CatalogsAction {
    /// List built-in catalogs
    List,
    /// Print the entries of a built-in catalog
    Show {
        /// Preset name (e.g., "servicios")
        preset: String,
    },
    /// Validate a catalog file
    Validate {
        /// Path to JSON catalog file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.log_format);

    let result = match cli.command {
        Commands::Check { input_file, output } => commands::check::run(&input_file, &output),
        Commands::Classify {
            file_name,
            tipos,
            servicios,
            output,
        } => commands::classify::run(&file_name, tipos, servicios, &output),
        Commands::Analyze {
            input_file,
            tipos,
            servicios,
            output,
        } => commands::analyze::run(&input_file, tipos, servicios, &output),
        Commands::Catalogs { action } => match action {
            CatalogsAction::List => commands::catalogs::list(),
            CatalogsAction::Show { preset } => commands::catalogs::show(&preset),
            CatalogsAction::Validate { file } => commands::catalogs::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
