use gridstar_gen::ScenarioGen;
use gridstar_gen::scenario::{DEFAULT_OBSTACLE_PROB, DEFAULT_SIZE};
use rand::rngs::StdRng;

/// Settings for one benchmark session.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    /// Number of random scenarios each heuristic is run on.
    pub runs: usize,
    /// Side length of the square grids.
    pub size: i32,
    /// Probability that a cell is blocked.
    pub obstacle_prob: f64,
    /// Fixed seed for reproducible sessions; `None` draws from the OS.
    pub seed: Option<u64>,
    /// Log engine internals at debug level when `RUST_LOG` is unset.
    pub verbose: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            runs: 5,
            size: DEFAULT_SIZE,
            obstacle_prob: DEFAULT_OBSTACLE_PROB,
            seed: None,
            verbose: false,
        }
    }
}

impl BenchConfig {
    /// The scenario generator this configuration asks for.
    pub fn generator(&self) -> ScenarioGen<StdRng> {
        match self.seed {
            Some(seed) => ScenarioGen::seeded(seed),
            None => ScenarioGen::from_entropy(),
        }
    }

    /// Filter directive used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
