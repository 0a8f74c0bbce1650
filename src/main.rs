//! navview - encode and inspect manual navigation view strings.

mod commands;
mod render;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use commands::{SerializeArgs, ShowArgs};

/// navview CLI.
#[derive(Parser)]
#[command(name = "navview")]
#[command(about = "Encode and inspect manual navigation view strings")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack a string of 0/1 bits into a view string
    Encode {
        /// Bits, most significant first (e.g. 101101)
        bits: String,
    },

    /// Unpack a view string into 0/1 bits
    Decode {
        /// View string (a-z, 2-7)
        view: String,
    },

    /// Apply a view and toggles to a listing, print the resulting view string
    Serialize(SerializeArgs),

    /// Print what the navigation lists for a listing under a view
    Show(ShowArgs),
}

/// Initialize tracing on stderr, filtered by `RUST_LOG`.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let output = match cli.command {
        Commands::Encode { bits } => commands::encode(&bits)?,
        Commands::Decode { view } => commands::decode(&view)?,
        Commands::Serialize(args) => commands::serialize(&args)?,
        Commands::Show(args) => commands::show(&args)?,
    };

    println!("{}", output);
    Ok(())
}
