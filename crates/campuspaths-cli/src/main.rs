use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use campuspaths_cli::commands::buildings::handle_buildings_command;
use campuspaths_cli::commands::interactive::run_interactive;
use campuspaths_cli::commands::load_map;
use campuspaths_cli::commands::route::{handle_route_command, RouteCommandArgs};
use campuspaths_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Campus walking directions")]
struct Cli {
    /// Directory holding campus_buildings.tsv and campus_paths.tsv.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print walking directions between two buildings.
    Route {
        /// Starting building, short or long name.
        #[arg(long = "from")]
        from: String,
        /// Destination building, short or long name.
        #[arg(long = "to")]
        to: String,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List every building by short name.
    Buildings,
    /// Run the menu-driven session on standard input.
    Interactive,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let map = load_map(cli.data_dir.as_deref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Route { from, to, format } => {
            handle_route_command(&map, &RouteCommandArgs { from, to, format }, &mut out)?
        }
        Command::Buildings => handle_buildings_command(&map, &mut out)?,
        Command::Interactive => run_interactive(&map, &mut io::stdin().lock(), &mut out)
            .context("interactive session failed")?,
    }
    out.flush().context("failed to flush output")
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
