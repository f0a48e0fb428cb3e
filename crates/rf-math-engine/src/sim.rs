//! Batch simulation: many rounds in parallel, aggregated into a report
//!
//! Each round gets its own [`LiveRng`] seeded from the base seed and the
//! round index, so a report depends only on the config, never on how rayon
//! schedules the rounds.

use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::evaluator::{
    BoxedEvaluator, EvaluationError, LineEvaluator, ScatterEvaluator, SlotEvaluator,
};
use crate::paytable::Paytable;
use crate::results::SlotResults;
use crate::rng::LiveRng;

/// Which evaluator a simulation runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluatorKind {
    Line,
    Scatter,
    #[default]
    Slot,
}

impl EvaluatorKind {
    pub fn evaluator(self) -> BoxedEvaluator {
        match self {
            EvaluatorKind::Line => Box::new(LineEvaluator::new()),
            EvaluatorKind::Scatter => Box::new(ScatterEvaluator::new()),
            EvaluatorKind::Slot => Box::new(SlotEvaluator::new()),
        }
    }
}

/// Configuration for simulation runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of rounds
    pub rounds: u64,
    /// Base seed
    pub seed: u64,
    pub evaluator: EvaluatorKind,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rounds: 100_000,
            seed: 0,
            evaluator: EvaluatorKind::Slot,
        }
    }
}

impl SimConfig {
    /// Quick run for CI
    pub fn quick() -> Self {
        Self {
            rounds: 10_000,
            ..Default::default()
        }
    }

    /// Long run for local analysis
    pub fn exhaustive() -> Self {
        Self {
            rounds: 10_000_000,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_evaluator(mut self, evaluator: EvaluatorKind) -> Self {
        self.evaluator = evaluator;
        self
    }
}

/// Aggregated simulation statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimReport {
    pub rounds: u64,
    pub total_value: u64,
    pub winning_rounds: u64,
    /// Result count per win source label
    pub hits_by_source: BTreeMap<String, u64>,
    /// Count per trigger tag
    pub triggers: BTreeMap<String, u64>,
}

impl SimReport {
    fn from_round(results: &SlotResults) -> Self {
        let mut report = Self {
            rounds: 1,
            total_value: results.total_value(),
            winning_rounds: u64::from(results.is_win()),
            ..Default::default()
        };
        for result in results {
            *report.hits_by_source.entry(result.source.label()).or_default() += 1;
        }
        for tag in results.triggers() {
            *report.triggers.entry(tag.to_string()).or_default() += 1;
        }
        report
    }

    fn merge(mut self, other: Self) -> Self {
        self.rounds += other.rounds;
        self.total_value = self.total_value.saturating_add(other.total_value);
        self.winning_rounds += other.winning_rounds;
        for (label, count) in other.hits_by_source {
            *self.hits_by_source.entry(label).or_default() += count;
        }
        for (tag, count) in other.triggers {
            *self.triggers.entry(tag).or_default() += count;
        }
        self
    }

    /// Fraction of rounds that paid something
    pub fn hit_rate(&self) -> f64 {
        if self.rounds > 0 {
            self.winning_rounds as f64 / self.rounds as f64
        } else {
            0.0
        }
    }

    /// Mean value per round
    pub fn mean_value(&self) -> f64 {
        if self.rounds > 0 {
            self.total_value as f64 / self.rounds as f64
        } else {
            0.0
        }
    }
}

fn round_seed(seed: u64, round: u64) -> u64 {
    seed.wrapping_add(round.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Run `config.rounds` evaluations in parallel
pub fn simulate(paytable: &Paytable, config: &SimConfig) -> Result<SimReport, EvaluationError> {
    let evaluator = config.evaluator.evaluator();
    log::info!(
        "Simulating {} rounds with the {} evaluator (seed {})",
        config.rounds,
        evaluator.name(),
        config.seed
    );

    let report = (0..config.rounds)
        .into_par_iter()
        .map(|round| -> Result<SimReport, EvaluationError> {
            let mut rng = LiveRng::seeded(round_seed(config.seed, round));
            let results = evaluator.evaluate(paytable, &mut rng)?;
            Ok(SimReport::from_round(&results))
        })
        .try_reduce(SimReport::default, |a, b| Ok(a.merge(b)))?;

    log::info!(
        "Simulation done: hit rate {:.4}, mean value {:.4}",
        report.hit_rate(),
        report.mean_value()
    );
    Ok(report)
}
