mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "mdg", version, about = "Index a markdown vault into a linked, navigable garden")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    /// Vault directory to use instead of the configured vault_root
    #[arg(long, global = true)]
    vault: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved paths
    Doctor,

    /// Build the vault index and print statistics
    Index(IndexArgs),

    /// Print the navigation tree
    Tree(TreeArgs),

    /// Show outgoing links and backlinks of a note
    Links(LinksArgs),

    /// List tags with the number of notes carrying them
    Tags,
}

#[derive(Debug, Args)]
pub struct IndexArgs {
    /// Only keep notes with this tag
    #[arg(long)]
    pub tag: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Only keep notes with this tag
    #[arg(long)]
    pub tag: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct LinksArgs {
    /// Note identity (e.g. "posts/hello" or "posts/hello.md")
    pub note: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

fn main() {
    let cli = Cli::parse();
    let config = cli.config.as_deref();
    let profile = cli.profile.as_deref();
    let vault = cli.vault.as_deref();

    match cli.command {
        Commands::Doctor => cmd::doctor::run(config, profile, vault),
        Commands::Index(args) => cmd::index::run(config, profile, vault, &args),
        Commands::Tree(args) => cmd::tree::run(config, profile, vault, &args),
        Commands::Links(args) => cmd::links::run(config, profile, vault, &args),
        Commands::Tags => cmd::tags::run(config, profile, vault),
    }
}
