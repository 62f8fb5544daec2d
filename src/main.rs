use anyhow::Result;
use clap::{Parser, Subcommand};
use ozkitchen::{cli::order::OrderArgs, error::AppError};

/// ozkitchen - Fresh lunchboxes, planned by the day
#[derive(Parser)]
#[command(name = "ozkitchen")]
#[command(about = "Plan a lunchbox subscription and review the order", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the meal calendar for a month
    Calendar {
        /// Month to show as YYYY-MM (defaults to the current month)
        #[arg(long)]
        month: Option<String>,
    },
    /// List the meal options
    Catalog,
    /// Run an order from plan selection to payment choice
    Order(OrderArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ozkitchen::config::Config::load(cli.config.clone())?;
    config.validate().map_err(AppError::InvalidConfig)?;

    ozkitchen::observability::init_observability(
        "ozkitchen",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    let output = match cli.command {
        Commands::Calendar { month } => {
            ozkitchen::cli::calendar::render(&config, month.as_deref())?
        }
        Commands::Catalog => ozkitchen::cli::catalog::render(&config)?,
        Commands::Order(args) => ozkitchen::cli::order::run(&config, args)?,
    };

    print!("{output}");

    Ok(())
}
