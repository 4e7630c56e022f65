//! Timed comparison runs and their textual report.

use std::fmt::Write;
use std::time::{Duration, Instant};

use gridstar_core::{Cell, Grid};
use gridstar_gen::ScenarioGen;
use gridstar_paths::{Heuristic, SearchError, SearchResult, heuristics, search};
use rand::Rng;
use tracing::info;

use crate::config::BenchConfig;
use crate::error::BenchError;

/// Metrics of one search call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub elapsed: Duration,
    pub expansions: usize,
    /// Path length in cells; `None` when no path exists.
    pub path_len: Option<usize>,
}

/// One scenario and how each heuristic fared on it.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRecord {
    /// 1-based run number.
    pub index: usize,
    pub start: Cell,
    pub goal: Cell,
    pub measurements: Vec<(&'static str, Measurement)>,
}

/// Per-heuristic means over all runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Averages {
    pub name: &'static str,
    pub time: Duration,
    pub expansions: f64,
    /// Mean over runs that found a path; `None` if none did.
    pub path_len: Option<f64>,
}

/// Every run of a session, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Comparison {
    pub runs: Vec<RunRecord>,
}

/// Time a single search. Timing wraps the whole call, validation included.
pub fn measure(
    grid: &Grid,
    start: Cell,
    goal: Cell,
    heuristic: &dyn Heuristic,
) -> Result<(Measurement, SearchResult), SearchError> {
    let t0 = Instant::now();
    let result = search(grid, start, goal, heuristic)?;
    let elapsed = t0.elapsed();
    let m = Measurement {
        elapsed,
        expansions: result.expansions,
        path_len: result.path_len(),
    };
    Ok((m, result))
}

/// Run `config.runs` scenarios from `generator`, each searched once per
/// library heuristic.
pub fn compare<R: Rng>(config: &BenchConfig, generator: &mut ScenarioGen<R>) -> Result<Comparison, BenchError> {
    let mut runs = Vec::with_capacity(config.runs);
    for index in 1..=config.runs {
        let s = generator.scenario(config.size, config.size, config.obstacle_prob)?;
        info!(run = index, start = %s.start, goal = %s.goal, "running scenario");
        let mut measurements = Vec::new();
        for (name, h) in heuristics::all() {
            let (m, _) = measure(&s.grid, s.start, s.goal, h)?;
            measurements.push((name, m));
        }
        runs.push(RunRecord {
            index,
            start: s.start,
            goal: s.goal,
            measurements,
        });
    }
    Ok(Comparison { runs })
}

impl Comparison {
    /// Means per heuristic, in the order heuristics first appear.
    pub fn averages(&self) -> Vec<Averages> {
        let mut names: Vec<&'static str> = Vec::new();
        for run in &self.runs {
            for (name, _) in &run.measurements {
                if !names.contains(name) {
                    names.push(*name);
                }
            }
        }

        names
            .into_iter()
            .map(|name| {
                let ms: Vec<&Measurement> = self
                    .runs
                    .iter()
                    .flat_map(|r| r.measurements.iter())
                    .filter(|(n, _)| *n == name)
                    .map(|(_, m)| m)
                    .collect();
                let n = ms.len().max(1);
                let time = ms.iter().map(|m| m.elapsed).sum::<Duration>() / n as u32;
                let expansions = ms.iter().map(|m| m.expansions as f64).sum::<f64>() / n as f64;
                let lens: Vec<f64> = ms.iter().filter_map(|m| m.path_len).map(|l| l as f64).collect();
                let path_len = (!lens.is_empty()).then(|| lens.iter().sum::<f64>() / lens.len() as f64);
                Averages {
                    name,
                    time,
                    expansions,
                    path_len,
                }
            })
            .collect()
    }
}

/// Per-run block: one stanza per heuristic.
pub fn format_run(run: &RunRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "--- Run {} --- Start: {}, Goal: {}\n", run.index, run.start, run.goal);
    for (name, m) in &run.measurements {
        let _ = writeln!(out, "Heuristic: {name}");
        let _ = writeln!(out, "  Execution Time: {:.5} s", m.elapsed.as_secs_f64());
        let _ = writeln!(out, "  Nodes Explored: {}", m.expansions);
        let len = m.path_len.map_or_else(|| "None".to_string(), |l| l.to_string());
        let _ = writeln!(out, "  Path Length: {len}\n");
    }
    out
}

/// The averages table.
pub fn format_averages(averages: &[Averages]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n=== Average Metrics for Each Heuristic ===");
    let _ = writeln!(
        out,
        "{:<12}{:<20}{:<25}{:<20}",
        "Heuristic", "Average Time (s)", "Average Nodes Explored", "Average Path Length"
    );
    for a in averages {
        let len = match a.path_len {
            Some(l) => format!("{l:.2}"),
            None => "None".to_string(),
        };
        let _ = writeln!(
            out,
            "{:<12}{:<20.5}{:<25}{:<20}",
            a.name,
            a.time.as_secs_f64(),
            a.expansions as u64,
            len
        );
    }
    out
}
