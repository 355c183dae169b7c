mod analyzer;
mod config;
mod error;
mod generator;
mod report;

use analyzer::{Analyzer, Measurement};
use clap::{ArgAction, Parser, ValueEnum};
use complexity_core::{Family, Scenario};
use config::{AnalysisConfig, ConfigOverrides};
use error::Result;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Family selector on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FamilyArg {
    Sorting,
    Searching,
    Queens,
    All,
}

impl FamilyArg {
    fn families(self) -> Vec<Family> {
        match self {
            FamilyArg::Sorting => vec![Family::Sorting],
            FamilyArg::Searching => vec![Family::Searching],
            FamilyArg::Queens => vec![Family::ConstraintSearch],
            FamilyArg::All => Family::all().to_vec(),
        }
    }
}

/// Compare measured operation counts with theoretical complexity
#[derive(Debug, Parser)]
#[command(name = "complexity", version, about)]
struct Cli {
    /// Algorithm family to analyze
    #[arg(long, value_enum, default_value_t = FamilyArg::All)]
    family: FamilyArg,

    /// Input sizes, comma separated (board dimensions for queens)
    #[arg(long, value_delimiter = ',')]
    sizes: Option<Vec<usize>>,

    /// Scenarios, comma separated: sorted, random, reversed, best, worst
    #[arg(long, value_delimiter = ',')]
    scenarios: Option<Vec<Scenario>>,

    /// Timed executions averaged per measurement
    #[arg(long)]
    repetitions: Option<usize>,

    /// Seed for reproducible inputs
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file listing the analyses to run instead of the family presets
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Write measurements as JSON (to the local data directory when no path is given)
    #[arg(long, num_args = 0..=1)]
    json: Option<Option<PathBuf>>,

    /// Print bar charts of operations and time against input size
    #[arg(long)]
    chart: bool,

    /// More logging: -v info, -vv debug, -vvv trace
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            sizes: self.sizes.clone(),
            scenarios: self.scenarios.clone(),
            repetitions: self.repetitions,
            seed: self.seed,
        }
    }

    /// Preset or profile plans with command-line overrides layered on top
    fn plans(&self) -> Result<Vec<AnalysisConfig>> {
        let mut plans = match &self.profile {
            Some(path) => config::load_profile(path)?,
            None => self
                .family
                .families()
                .into_iter()
                .map(AnalysisConfig::for_family)
                .collect(),
        };

        let overrides = self.overrides();
        for plan in &mut plans {
            plan.apply(&overrides);
        }
        Ok(plans)
    }
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let plans = cli.plans()?;
    for plan in &plans {
        plan.validate()?;
    }

    let mut all: Vec<Measurement> = Vec::new();
    for plan in plans {
        let mut analyzer = Analyzer::for_family(plan)?;
        let family = analyzer.config().family;
        analyzer.run()?;
        let measurements = analyzer.measurements();

        println!("{}", report::render_table(measurements));
        if cli.chart {
            println!("{}", report::render_chart(measurements, &format!("{} Analysis", family)));
        }
        all.extend_from_slice(measurements);
    }

    if let Some(target) = &cli.json {
        let path = target.clone().unwrap_or_else(report::default_export_path);
        report::export_json(&all, &path)?;
        info!(path = %path.display(), records = all.len(), "wrote measurements");
        println!("Measurements written to {}", path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
