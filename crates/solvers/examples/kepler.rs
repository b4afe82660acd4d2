//! Solves Kepler's equation `E - e sin E = M` across a sweep of mean anomalies.
//!
//! Compares bisection, cold-started Newton and warm-started Newton, printing
//! the eccentric anomaly and the iteration counts for each.
//!
//! # Usage
//!
//! ```text
//! cargo run --example kepler
//! cargo run --example kepler -- 0.9
//! cargo run --example kepler -- 0.5 debug
//! ```
//!
//! The first optional argument is the eccentricity, which must lie in
//! `[0, 1)`. The second is the log level (`trace`, `debug`, `info`, `warn`),
//! defaulting to `info`.

use std::{error::Error, f64::consts::TAU};

use log::info;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use strand_solvers::{
    batch,
    equation::{Solution, bisection, newton},
};

const SAMPLES: usize = 24;

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();

    let level = match args.get(2).map(String::as_str) {
        None | Some("info") => LevelFilter::Info,
        Some("trace") => LevelFilter::Trace,
        Some("debug") => LevelFilter::Debug,
        Some("warn") => LevelFilter::Warn,
        Some(other) => {
            return Err(format!("unknown log level: {other} (use trace, debug, info or warn)").into());
        }
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let eccentricity = match args.get(1) {
        Some(arg) => arg.parse::<f64>()?,
        None => 0.5,
    };
    if !(0.0..1.0).contains(&eccentricity) {
        return Err(format!("eccentricity must lie in [0, 1), got {eccentricity}").into());
    }

    #[allow(clippy::cast_precision_loss)]
    let anomalies: Vec<f64> = (1..=SAMPLES)
        .map(|i| TAU * i as f64 / (SAMPLES + 1) as f64)
        .collect();

    let kepler = |mean: f64| move |e: f64| e - eccentricity * e.sin() - mean;
    let slope = move |e: f64| 1.0 - eccentricity * e.cos();

    let bisection_config = bisection::Config::default();
    let newton_config = newton::Config::default();

    let bracketed = batch::map_ordered(&anomalies, |&mean| {
        bisection::solve_unobserved(&kepler(mean), [0.0, TAU], &bisection_config)
    })
    .into_iter()
    .collect::<Result<Vec<Solution>, _>>()?;

    let cold = batch::map_ordered(&anomalies, |&mean| {
        newton::solve_unobserved(&kepler(mean), &slope, mean, &newton_config)
    })
    .into_iter()
    .collect::<Result<Vec<Solution>, _>>()?;

    let warm = batch::warm_started(&anomalies, anomalies[0], |&mean, guess| {
        newton::solve_unobserved(&kepler(mean), &slope, guess, &newton_config)
    })?;

    println!("{:>8} {:>12} {:>6} {:>6} {:>6}", "M", "E", "bisect", "cold", "warm");
    for (i, mean) in anomalies.iter().enumerate() {
        println!(
            "{mean:>8.4} {:>12.9} {:>6} {:>6} {:>6}",
            warm[i].root, bracketed[i].iters, cold[i].iters, warm[i].iters
        );
    }

    let total = |solutions: &[Solution]| solutions.iter().map(|s| s.iters).sum::<usize>();
    info!(
        "total iterations: bisection {}, cold Newton {}, warm Newton {}",
        total(&bracketed),
        total(&cold),
        total(&warm)
    );

    Ok(())
}
