//! CLI frontend for the Nook critterpedia bot.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "nook",
    about = "Nook: look up Animal Crossing fish and bugs, and chat with the bot",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every subcommand.
#[derive(Args)]
pub struct GlobalArgs {
    /// JSON config file; flags below override its values
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding fish.json and bugs.json
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Per-server settings file
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Admin list file
    #[arg(long, global = true)]
    admins: Option<PathBuf>,

    /// User ID of the bot owner
    #[arg(long, global = true)]
    owner_id: Option<u64>,

    /// Command prefix for chat messages
    #[arg(long, global = true)]
    prefix: Option<String>,

    /// Treat this month as the current one (e.g. "apr" or "April")
    #[arg(long, global = true)]
    month: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a fish's card
    Fish {
        /// Fish name (case and spacing are ignored)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Show a bug's card
    Bug {
        /// Bug name (case and spacing are ignored)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// List what is new, staying, and leaving around a month
    Month {
        /// Critter type: fish or bugs
        category: String,

        /// Hemisphere; defaults to the server's configured one
        #[arg(short = 'H', long)]
        hemisphere: Option<String>,

        /// Server whose default hemisphere to use
        #[arg(short, long)]
        server: Option<u64>,

        /// Months relative to the current one (-1 = last month)
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        offset: i32,
    },

    /// Read chat messages from stdin and print the bot's replies
    Chat {
        /// Server the messages are posted in (default: direct messages)
        #[arg(short, long)]
        server: Option<u64>,

        /// Owner of that server
        #[arg(long, default_value = "0")]
        server_owner: u64,

        /// Author of the messages
        #[arg(short, long, default_value = "0")]
        author: u64,
    },

    /// Validate both datasets and report their sizes
    Check,

    /// Validate a dataset file and install it in the data directory
    Import {
        /// Critter type: fish or bugs
        category: String,

        /// The new dataset file
        file: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    let result = commands::Context::from_args(&cli.global).and_then(|ctx| match cli.command {
        Commands::Fish { name } => {
            commands::critter::run(&ctx, nook_core::Category::Fish, &name.join(" "))
        }
        Commands::Bug { name } => {
            commands::critter::run(&ctx, nook_core::Category::Bugs, &name.join(" "))
        }
        Commands::Month {
            category,
            hemisphere,
            server,
            offset,
        } => commands::month::run(&ctx, &category, hemisphere.as_deref(), server, offset),
        Commands::Chat {
            server,
            server_owner,
            author,
        } => commands::chat::run(&ctx, server, server_owner, author),
        Commands::Check => commands::check::run(&ctx),
        Commands::Import { category, file } => commands::import::run(&ctx, &category, &file),
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
