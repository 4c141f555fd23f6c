use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use peso_inflation::cli::{
    handle_convert_command, handle_table_command, handle_years_command, load_rate_table,
    ConvertArgs, TableArgs,
};
use peso_inflation::config::{paths::InflationPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "inflation",
    author = "Kaylee Beyene",
    version,
    about = "Philippine peso inflation calculator",
    long_about = "Estimate how much an amount from a past year would cost in \
                  another year using average annual inflation."
)]
struct Cli {
    /// Rate table to use instead of the built-in data (JSON or CSV)
    #[arg(long, global = true, env = "PESO_INFLATION_RATES")]
    rates: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an amount from one year to another
    #[command(alias = "calc")]
    Convert(ConvertArgs),

    /// Show average inflation by year with year-over-year changes
    Table(TableArgs),

    /// List the years in the rate table with their rates
    Years,

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = InflationPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Convert(args)) => {
            let table = load_rate_table(cli.rates.as_deref(), &settings)?;
            // The handler has already printed the message and note
            if let Err(err) = handle_convert_command(&table, &settings, args) {
                debug!(error = %err, "conversion failed");
                return Ok(ExitCode::FAILURE);
            }
        }
        Some(Commands::Table(args)) => {
            let table = load_rate_table(cli.rates.as_deref(), &settings)?;
            handle_table_command(&table, &settings, args)?;
        }
        Some(Commands::Years) => {
            let table = load_rate_table(cli.rates.as_deref(), &settings)?;
            handle_years_command(&table)?;
        }
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Settings written to {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            let table = load_rate_table(cli.rates.as_deref(), &settings)?;
            println!("peso-inflation Configuration");
            println!("============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!(
                "Initialized:      {}",
                if paths.is_initialized() { "yes" } else { "no" }
            );
            println!();
            println!("Settings:");
            println!("  Currency symbol:      {}", settings.currency_symbol);
            println!("  Decimal places:       {}", settings.decimal_places);
            println!("  Table columns:        {}", settings.table_columns);
            println!("  Strict missing rates: {}", settings.strict_missing_rates);
            match cli.rates.as_ref().or(settings.rates_file.as_ref()) {
                Some(path) => println!("  Rate table:           {}", path.display()),
                None => println!("  Rate table:           built-in"),
            }
            println!(
                "  Years:                {}-{} ({} years)",
                table.first_year(),
                table.last_year(),
                table.len()
            );
        }
        None => {
            println!("peso-inflation - Philippine peso inflation calculator");
            println!();
            println!("Run 'inflation --help' for usage information.");
            println!("Run 'inflation convert 100 --from 1990 --to 2024' to try it.");
        }
    }

    Ok(ExitCode::SUCCESS)
}
