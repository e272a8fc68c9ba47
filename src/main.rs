use anyhow::Result;
use clap::{ArgGroup, Parser};
use std::io;
use std::process::ExitCode;

use playfinder_lib::{
    modules::{location::Coordinate, search::CycleReport},
    shared::utils::init_logger,
    AppConfig, AppError, Category, ConsoleSink, SearchOrchestrator, Trigger,
};

/// Find playgrounds and family events near a ZIP code or the device position
#[derive(Parser, Debug)]
#[command(name = "playfinder", version, about, long_about = None)]
#[command(group(ArgGroup::new("location").required(true).args(["zip", "here", "at"])))]
struct Args {
    /// US ZIP code to search around
    zip: Option<String>,

    /// Search around the device position
    #[arg(long)]
    here: bool,

    /// Search around explicit coordinates
    #[arg(long, value_name = "LAT,LON", allow_hyphen_values = true)]
    at: Option<Coordinate>,

    /// Look for family events instead of playgrounds
    #[arg(long)]
    events: bool,

    /// Search radius in meters
    #[arg(long, value_name = "METERS")]
    radius: Option<u32>,
}

impl Args {
    fn trigger(&self) -> Trigger {
        match (&self.zip, self.at) {
            (Some(zip), _) => Trigger::ZipButton(zip.clone()),
            (None, Some(coordinate)) => Trigger::Coordinates(coordinate),
            (None, None) => Trigger::DeviceLocation,
        }
    }

    fn category(&self) -> Category {
        if self.events {
            Category::Event
        } else {
            Category::Playground
        }
    }
}

async fn run(args: Args) -> Result<CycleReport> {
    let category = args.category();
    let mut config = AppConfig::from_env()?;
    if let Some(radius_m) = args.radius {
        match category {
            Category::Playground => config.playground_radius_m = radius_m,
            Category::Event => config.event_radius_m = radius_m,
        }
    }
    log::debug!("Loaded configuration: {:?}", config);

    let orchestrator = SearchOrchestrator::from_config(&config, ConsoleSink::new(io::stdout()))?;
    Ok(orchestrator.handle(args.trigger(), category).await?)
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logger();

    // Usage errors exit with status 2
    let args = Args::parse();

    match run(args).await {
        Ok(report) => match report.outcome() {
            Some(outcome) if outcome.is_failure() => ExitCode::FAILURE,
            _ => ExitCode::SUCCESS,
        },
        Err(e) => {
            eprintln!("{}", e);
            match e.downcast_ref::<AppError>() {
                Some(app_error) if app_error.is_validation() => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}
