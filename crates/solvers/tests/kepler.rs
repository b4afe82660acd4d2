//! Kepler's equation `E - e sin E = M` as an end-to-end root-finding problem.

use std::f64::consts::TAU;

use approx::assert_relative_eq;
use strand_solvers::{
    batch,
    equation::{Solution, bisection, newton},
};

struct Kepler {
    eccentricity: f64,
    mean_anomaly: f64,
}

impl Kepler {
    fn residual(&self, e: f64) -> f64 {
        e - self.eccentricity * e.sin() - self.mean_anomaly
    }

    fn slope(&self, e: f64) -> f64 {
        1.0 - self.eccentricity * e.cos()
    }
}

fn anomalies() -> Vec<f64> {
    (1..=40).map(|i| 0.15 * f64::from(i)).collect()
}

fn total_iters(solutions: &[Solution]) -> usize {
    solutions.iter().map(|solution| solution.iters).sum()
}

#[test]
fn bisection_and_newton_agree() {
    let kepler = Kepler {
        eccentricity: 0.5,
        mean_anomaly: 1.5,
    };
    let residual = |e: f64| kepler.residual(e);
    let slope = |e: f64| kepler.slope(e);

    let bracketed = bisection::solve_unobserved(&residual, [0.0, TAU], &bisection::Config::default())
        .expect("bracket holds a sign change");
    let iterated = newton::solve_unobserved(&residual, &slope, 0.5, &newton::Config::default())
        .expect("derivative stays positive");

    assert!(bracketed.converged());
    assert!(iterated.converged());
    assert_relative_eq!(bracketed.root, iterated.root, epsilon = 1e-9);
    assert!(kepler.residual(iterated.root).abs() < 1e-12);
    assert!(iterated.iters < bracketed.iters);
}

#[test]
fn warm_started_sweep_beats_cold_starts() {
    let eccentricity = 0.5;
    let config = newton::Config::default();
    let anomalies = anomalies();

    let solve = |mean: f64, guess: f64| {
        let kepler = Kepler {
            eccentricity,
            mean_anomaly: mean,
        };
        newton::solve_unobserved(&|e: f64| kepler.residual(e), &|e: f64| kepler.slope(e), guess, &config)
    };

    let warm = batch::warm_started(&anomalies, 0.0, |&mean, guess| solve(mean, guess))
        .expect("every solve succeeds");
    // Cold starts use the textbook guess E = M.
    let cold: Vec<Solution> = batch::map_ordered(&anomalies, |&mean| solve(mean, mean))
        .into_iter()
        .collect::<Result<_, _>>()
        .expect("every solve succeeds");

    assert!(warm.iter().all(Solution::converged));
    assert!(cold.iter().all(Solution::converged));
    for (w, c) in warm.iter().zip(&cold) {
        assert_relative_eq!(w.root, c.root, epsilon = 1e-9);
    }
    assert!(
        total_iters(&warm) < total_iters(&cold),
        "warm {} vs cold {}",
        total_iters(&warm),
        total_iters(&cold)
    );
}

#[test]
fn roots_increase_with_mean_anomaly() {
    let config = bisection::Config::default();

    let roots: Vec<f64> = batch::map_ordered(&anomalies(), |&mean| {
        let kepler = Kepler {
            eccentricity: 0.8,
            mean_anomaly: mean,
        };
        bisection::solve_unobserved(&|e: f64| kepler.residual(e), [0.0, TAU], &config)
            .expect("bracket holds a sign change")
            .root
    });

    assert!(roots.windows(2).all(|pair| pair[0] < pair[1]));
}
