#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use command::{
    AddInput, AddStrategy, AskInput, AskStrategy, ChatStrategy, CommandStrategy, InfoStrategy,
    InitStrategy, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "faultbook")]
#[command(about = "faultbook known-issues assistant", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Chat with the knowledge base interactively
    Chat,
    /// Ask a single question and print the answer
    Ask {
        /// The question text
        #[arg(short = 'm', long)]
        message: String,
    },
    /// Add new entries through guided prompts
    Add {
        /// Number of entries to add (1-10)
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
    /// Initialize configuration
    Init,
    /// Show configuration and table statistics
    Info,
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Chat => ChatStrategy.execute(()),
        Commands::Ask { message } => AskStrategy.execute(AskInput { message }),
        Commands::Add { count } => AddStrategy.execute(AddInput { count }),
        Commands::Init => InitStrategy.execute(()),
        Commands::Info => InfoStrategy.execute(()),
        Commands::Version => VersionStrategy.execute(()),
    }
}
