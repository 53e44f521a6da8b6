// the collection of utility functions for numerical derivative checking and logging setup

use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

/// Wires a terminal logger so `info!`/`warn!` output from the derivative
/// checks reaches the console. Safe to call more than once; later calls are
/// ignored because a global logger is already set.
pub fn init_logger(level: LevelFilter) {
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
}

pub fn linspace(start: f64, end: f64, num_values: usize) -> Vec<f64> {
    assert!(num_values > 1, "linspace needs at least two points");
    let step = (end - start) / (num_values as f64 - 1.0);
    (0..num_values).map(|i| start + i as f64 * step).collect()
}

/// Central-difference derivative of `f` at each point of `x_values` with step `h`.
pub fn numerical_derivative<F>(f: F, x_values: &[f64], h: f64) -> Vec<f64>
where
    F: Fn(f64) -> f64,
{
    x_values
        .iter()
        .map(|&x| (f(x + h) - f(x - h)) / (2.0 * h))
        .collect()
}

/// Normalized L2 distance between two equally long value vectors.
pub fn norm(x: &[f64], y: &[f64]) -> f64 {
    assert_eq!(x.len(), y.len());
    (1.0 / x.len() as f64)
        * x.iter()
            .zip(y.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt()
}
