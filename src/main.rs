use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use voltrover::application::analysis_service::BatteryAnalysisService;
use voltrover::config::Config;
use voltrover::domain::ports::SampleSource;
use voltrover::infrastructure::{JsonSampleStore, SyntheticSampleSource};
use voltrover::interfaces::report;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze battery history and print forecast, status and recommendations
    Analyze {
        /// Forecast horizon in days (overrides VOLTROVER_HORIZON)
        #[arg(long)]
        horizon: Option<usize>,

        /// Days of synthetic history to analyze (overrides VOLTROVER_HISTORY_DAYS)
        #[arg(long)]
        days: Option<usize>,

        /// Seed for the synthetic series, for reproducible demo output
        #[arg(long)]
        seed: Option<u64>,

        /// Analyze the stored on-disk history instead of a synthetic series
        #[arg(long)]
        stored: bool,
    },
    /// Generate a synthetic history and save it to the on-disk store
    Generate {
        /// Days of history to generate
        #[arg(long)]
        days: Option<usize>,

        /// Seed for reproducible generation
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn open_store(config: &Config) -> Result<JsonSampleStore> {
    match &config.data_dir {
        Some(dir) => JsonSampleStore::with_dir(dir.clone()),
        None => JsonSampleStore::new(),
    }
}

fn synthetic_source(days: usize, seed: Option<u64>) -> SyntheticSampleSource {
    match seed {
        Some(seed) => SyntheticSampleSource::with_seed(days, seed),
        None => SyntheticSampleSource::new(days),
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = Config::from_env()?;
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Analyze {
        horizon: None,
        days: None,
        seed: None,
        stored: false,
    }) {
        Command::Analyze {
            horizon,
            days,
            seed,
            stored,
        } => {
            let service = BatteryAnalysisService::new(horizon.unwrap_or(config.horizon));

            let analysis = if stored {
                let store = open_store(&config)?;
                service.analyze(&store)?
            } else {
                let source = synthetic_source(days.unwrap_or(config.history_days), seed);
                service.analyze(&source)?
            };

            print!("{}", report::render_text(&analysis));
        }
        Command::Generate { days, seed } => {
            let source = synthetic_source(days.unwrap_or(config.history_days), seed);
            let samples = source.fetch()?;

            let store = open_store(&config)?;
            store.save(&samples)?;
            info!("Battery history ready; run `voltrover analyze --stored`");
        }
    }

    Ok(())
}
