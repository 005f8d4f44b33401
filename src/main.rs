use clap::{Args, Parser, Subcommand};
use leaderboard_placer::{
    check_result,
    models::{MinScores, Placement, UserScore},
    scoring::PlacementCalculator,
    Settings,
};
use std::{fs, path::PathBuf, process};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(name = "leaderboard")]
#[clap(about = "Assign leaderboard places from user scores", long_about = None)]
struct Cli {
    /// Settings file (defaults to config/default, config/local and LEADERBOARD__* env vars)
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the placements for a JSON list of users
    Place {
        #[clap(flatten)]
        input: InputArgs,
    },

    /// Compare computed placements with an expected JSON answer
    Check {
        #[clap(flatten)]
        input: InputArgs,

        /// JSON file with the expected [{userId, place}] entries
        #[clap(short, long)]
        expected: PathBuf,
    },
}

#[derive(Args)]
struct InputArgs {
    /// JSON file with [{userId, score}] entries
    #[clap(short, long)]
    users: PathBuf,

    /// Minimum score for first place
    #[clap(long)]
    first: Option<u32>,

    /// Minimum score for second place
    #[clap(long)]
    second: Option<u32>,

    /// Minimum score for third place
    #[clap(long)]
    third: Option<u32>,
}

impl InputArgs {
    fn min_scores(&self, settings: &Settings) -> leaderboard_placer::Result<MinScores> {
        let defaults = settings.min_scores();
        MinScores::new(
            self.first.unwrap_or(defaults.first),
            self.second.unwrap_or(defaults.second),
            self.third.unwrap_or(defaults.third),
        )
    }

    fn load_users(&self) -> leaderboard_placer::Result<Vec<UserScore>> {
        let raw = fs::read_to_string(&self.users)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let loaded = match &cli.config {
        Some(path) => Settings::from_file(path),
        None => Settings::new(),
    };

    let log_level = loaded
        .as_ref()
        .map(|s| s.app.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let settings = match loaded {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load settings: {}", e);
            return Err(e.into());
        }
    };

    if let Err(e) = settings.validate() {
        error!("Invalid settings: {}", e);
        return Err(anyhow::anyhow!(e));
    }

    match cli.command {
        Commands::Place { input } => {
            let min_scores = input.min_scores(&settings)?;
            let users = input.load_users()?;
            info!("Placing {} users with thresholds {:?}", users.len(), min_scores);

            let placements = PlacementCalculator::new(min_scores).calculate(&users);
            println!("{}", serde_json::to_string_pretty(&placements)?);
        }

        Commands::Check { input, expected } => {
            let min_scores = input.min_scores(&settings)?;
            let users = input.load_users()?;
            let expected: Vec<Placement> = serde_json::from_str(&fs::read_to_string(&expected)?)?;

            let placements = PlacementCalculator::new(min_scores).calculate(&users);
            if check_result(&placements, &expected) {
                println!("PASS");
            } else {
                error!("Placements differ from the expected answer");
                println!("FAIL");
                println!("{}", serde_json::to_string_pretty(&placements)?);
                process::exit(1);
            }
        }
    }

    Ok(())
}
