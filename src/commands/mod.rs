//! Command-line front end.

pub mod init;
pub mod migrations;
pub mod serve;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Run one service, or all three in one process")]
    Serve(serve::ServeArgs),
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Inspect the schema of a service database")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Serve(args) => serve::cmd(args).await,
            Commands::Init(args) => init::cmd(args),
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}
