use anyhow::Result;
use bugtrack_web::cli::{self, Cli};
use bugtrack_web::{logging, App, AppConfig};
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(&cli.config)?;
    logging::init(&config.logging);

    let app = App::bootstrap(config)?;
    print!("{}", cli::run(&app, &cli.command)?);

    Ok(())
}
