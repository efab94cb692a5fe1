use anyhow::{Context as _, Result};
use clap::Parser;
use colored::Colorize;

use ghstreak::cli::args::{Cli, Commands, DashboardArgs};
use ghstreak::cli::commands::{self, Context};
use ghstreak::config::{Config, Paths};
use ghstreak::core::{parse_day, Clock, FixedClock, SystemClock};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Credentials may live in ./.env or ~/.ghstreak/.env; clap reads them from
    // the environment, so load both before parsing.
    dotenv::dotenv().ok();
    dotenv::from_path(Paths::default().env_file).ok();
    env_logger::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    config.general.color.apply();

    let format = cli.output.unwrap_or(config.general.default_output);
    let boundary = cli.day_boundary.unwrap_or(config.general.day_boundary);

    let fixed;
    let system;
    let clock: &dyn Clock = match cli.today.as_deref() {
        Some(s) => {
            fixed = FixedClock::at_date_in(parse_day(s).context("--today")?, boundary);
            &fixed
        }
        None => {
            system = SystemClock::new(boundary);
            &system
        }
    };

    let ctx = Context {
        config: &config,
        clock,
        user: cli.user,
        token: cli.token,
        input: cli.input,
        format,
    };

    let output = match cli.command {
        None => commands::dashboard(&ctx, &DashboardArgs::default())?,
        Some(Commands::Dashboard(args)) => commands::dashboard(&ctx, &args)?,
        Some(Commands::Summary) => commands::summary(&ctx)?,
        Some(Commands::Heatmap) => commands::heatmap(&ctx)?,
        Some(Commands::Commits) => commands::commits(&ctx)?,
        Some(Commands::Completions { shell }) => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
