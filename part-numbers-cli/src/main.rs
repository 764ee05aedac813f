use anyhow::Result;
use clap::Parser;

use part_numbers_cli::cli::commands::{load, verify};
use part_numbers_cli::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    log::debug!("Parsed CLI: {:?}", cli);

    match cli.command {
        Commands::Load(args) => load::handle_load_command(args, cli.base_url).await,
        Commands::Verify(args) => verify::handle_verify_command(args, cli.base_url).await,
    }
}
