//! Play command - interactive rounds against the keeper

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output,
    engine::{DecisionEngine, EngineConfig},
    round::RoundController,
    types::Action,
};

#[derive(Parser, Debug)]
#[command(about = "Shoot penalties against the learning keeper")]
pub struct PlayArgs {
    /// Learning rate α
    #[arg(long, default_value_t = crate::engine::DEFAULT_LEARNING_RATE)]
    pub alpha: f64,

    /// Discount factor γ
    #[arg(long, default_value_t = crate::engine::DEFAULT_DISCOUNT_FACTOR)]
    pub gamma: f64,

    /// Exploration rate ε
    #[arg(long, default_value_t = crate::engine::DEFAULT_EPSILON)]
    pub epsilon: f64,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the value table after every round
    #[arg(long, default_value_t = false)]
    pub show_table: bool,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut config = EngineConfig::new()
        .with_learning_rate(args.alpha)
        .with_discount_factor(args.gamma)
        .with_epsilon(args.epsilon);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let engine = DecisionEngine::new(config)?;
    let mut controller = RoundController::new(engine);

    println!("Shoot with left/center/right (or l/c/r); 'quit' to stop.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("shot> ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            break;
        }

        let shot: Action = match input.parse() {
            Ok(action) => action,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };

        let outcome = controller.play_round(shot)?;
        let result = if outcome.is_save() { "SAVED!" } else { "GOAL!" };
        println!(
            "you shot {}, keeper dove {} - {} (save rate {:.1}% over {} rounds)",
            outcome.human_action,
            outcome.agent_action,
            result,
            controller.save_rate() * 100.0,
            controller.rounds(),
        );

        if args.show_table {
            output::print_value_table(&controller.engine().snapshot());
        }
    }

    output::print_section("Final standings");
    output::print_stats_table(&[
        ("Rounds", &controller.rounds().to_string()),
        ("Saves", &controller.saves().to_string()),
        ("Goals", &controller.goals().to_string()),
        (
            "Save rate",
            &format!("{:.1}%", controller.save_rate() * 100.0),
        ),
    ]);
    output::print_value_table(&controller.engine().snapshot());

    Ok(())
}
