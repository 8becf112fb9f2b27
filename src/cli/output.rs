//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    engine::ValueTableSnapshot,
    types::{Action, State},
};

/// Create a progress bar for simulation runs
pub fn create_simulation_progress(total_rounds: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_rounds);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} rounds ({msg})")
            .expect("Invalid progress bar template")
            .progress_chars("=>-"),
    );
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print statistics table
pub fn print_stats_table(stats: &[(&str, &str)]) {
    for (key, value) in stats {
        print_kv(key, value);
    }
}

/// Print the value table as a state × action grid
pub fn print_value_table(snapshot: &ValueTableSnapshot) {
    print!("{:>8}", "");
    for action in Action::ALL {
        print!("{:>10}", action.as_str());
    }
    println!();
    for state in State::ALL {
        print!("{:>8}", state.as_str());
        for action in Action::ALL {
            print!("{:>10.3}", snapshot.value(state, action));
        }
        println!();
    }
}
