mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dockerize", about = "Generate a Dockerfile for a Node.js project")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate <DIR>/Dockerfile from package.json, .nvmrc and .env
    Generate {
        /// Project directory
        #[arg(default_value = ".")]
        dir: PathBuf,
        /// Print the Dockerfile instead of writing it
        #[arg(long)]
        stdout: bool,
    },
    /// Generate the Dockerfile, then run docker build
    Build {
        /// Project directory
        #[arg(default_value = ".")]
        dir: PathBuf,
        /// Image tag (defaults to the package name)
        #[arg(long, short = 't')]
        tag: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { dir, stdout } => commands::generate(&dir, stdout).await?,
        Commands::Build { dir, tag } => commands::build(&dir, tag.as_deref()).await?,
    }

    Ok(())
}
