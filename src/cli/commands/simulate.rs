//! Simulate command - run rounds against a scripted shooter

use std::{path::PathBuf, str::FromStr};

use anyhow::{Result, anyhow};
use clap::{Parser, ValueEnum};

use crate::{
    cli::output,
    engine::{DecisionEngine, EngineConfig},
    export::{self, SimulationSummary},
    round::RoundController,
    shooter::{CycleShooter, FixedShooter, Shooter, UniformShooter},
    types::Action,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShooterKind {
    /// Uniformly random shot directions
    Uniform,
    /// Always shoots left
    Left,
    /// Always shoots center
    Center,
    /// Always shoots right
    Right,
    /// Repeats the directions given via --pattern
    Cycle,
}

#[derive(Parser, Debug)]
#[command(about = "Simulate rounds against a scripted shooter")]
pub struct SimulateArgs {
    /// Shooter strategy
    #[arg(long, short = 's', value_enum, default_value_t = ShooterKind::Uniform)]
    pub shooter: ShooterKind,

    /// Shot pattern for the cycle shooter (e.g. left,right,center or l,r,c)
    #[arg(long)]
    pub pattern: Option<String>,

    /// Number of rounds to play
    #[arg(long, short = 'r', default_value_t = 1000)]
    pub rounds: u64,

    /// Random seed for reproducibility (engine and shooter)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Learning rate α
    #[arg(long, default_value_t = crate::engine::DEFAULT_LEARNING_RATE)]
    pub alpha: f64,

    /// Discount factor γ
    #[arg(long, default_value_t = crate::engine::DEFAULT_DISCOUNT_FACTOR)]
    pub gamma: f64,

    /// Exploration rate ε
    #[arg(long, default_value_t = crate::engine::DEFAULT_EPSILON)]
    pub epsilon: f64,

    /// Optional path for writing a summary JSON file
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Optional path for writing the final value table as CSV
    #[arg(long)]
    pub table: Option<PathBuf>,

    /// Show progress bar
    #[arg(long, default_value_t = true)]
    pub progress: bool,
}

fn build_shooter(args: &SimulateArgs) -> Result<Box<dyn Shooter>> {
    match args.shooter {
        ShooterKind::Uniform => Ok(Box::new(match args.seed {
            // Offset so the shooter and engine never share a stream.
            Some(seed) => UniformShooter::with_seed(seed.wrapping_add(1)),
            None => UniformShooter::new(),
        })),
        ShooterKind::Left => Ok(Box::new(FixedShooter::new(Action::Left))),
        ShooterKind::Center => Ok(Box::new(FixedShooter::new(Action::Center))),
        ShooterKind::Right => Ok(Box::new(FixedShooter::new(Action::Right))),
        ShooterKind::Cycle => {
            let raw = args
                .pattern
                .as_deref()
                .ok_or_else(|| anyhow!("--pattern is required for the cycle shooter"))?;
            let pattern = raw
                .split(',')
                .map(Action::from_str)
                .collect::<crate::Result<Vec<_>>>()?;
            Ok(Box::new(CycleShooter::new(pattern)?))
        }
    }
}

pub fn execute(args: SimulateArgs) -> Result<()> {
    let mut config = EngineConfig::new()
        .with_learning_rate(args.alpha)
        .with_discount_factor(args.gamma)
        .with_epsilon(args.epsilon);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let engine = DecisionEngine::new(config)?;
    let mut controller = RoundController::new(engine);
    let mut shooter = build_shooter(&args)?;

    let progress = args
        .progress
        .then(|| output::create_simulation_progress(args.rounds));

    for _ in 0..args.rounds {
        let shot = shooter.shoot();
        controller.play_round(shot)?;
        if let Some(pb) = &progress {
            pb.inc(1);
            pb.set_message(format!("save rate {:.1}%", controller.save_rate() * 100.0));
        }
    }
    if let Some(pb) = &progress {
        pb.finish_and_clear();
    }

    let summary = SimulationSummary {
        shooter: shooter.name().to_string(),
        rounds: controller.rounds(),
        saves: controller.saves(),
        goals: controller.goals(),
        save_rate: controller.save_rate(),
        learning_rate: controller.engine().learning_rate(),
        discount_factor: controller.engine().discount_factor(),
        epsilon: controller.engine().epsilon(),
        seed: args.seed,
    };

    output::print_section("Simulation results");
    output::print_stats_table(&[
        ("Shooter", summary.shooter.as_str()),
        ("Rounds", &summary.rounds.to_string()),
        ("Saves", &summary.saves.to_string()),
        ("Goals", &summary.goals.to_string()),
        (
            "Save rate",
            &format!("{:.1}%", summary.save_rate * 100.0),
        ),
    ]);

    output::print_section("Learned value table");
    output::print_value_table(&controller.engine().snapshot());

    if let Some(path) = &args.summary {
        export::summary_to_json_file(path, &summary)?;
        println!("\nSummary written to {}", path.display());
    }
    if let Some(path) = &args.table {
        export::snapshot_to_csv_file(path, &controller.engine().snapshot())?;
        println!("Value table written to {}", path.display());
    }

    Ok(())
}
