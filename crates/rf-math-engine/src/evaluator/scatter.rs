//! Scatter evaluation
//!
//! Scatter combos look at the symbol at each reel's stop as one flat
//! sequence, ignoring payline geometry.

use crate::paytable::Paytable;
use crate::results::{SlotResult, SlotResults, WinSource};
use crate::rng::RandomSource;

use super::{EvaluationError, Evaluator, ReelWindow};

#[derive(Debug, Clone, Copy, Default)]
pub struct ScatterEvaluator;

impl ScatterEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Match every scatter combo against an already drawn window.
    ///
    /// Matching is not exclusive: each satisfied combo adds its own record,
    /// even when an earlier combo matched the same symbols.
    pub fn evaluate_window(
        &self,
        paytable: &Paytable,
        window: &ReelWindow<'_>,
        results: &mut SlotResults,
    ) {
        let Some(group) = paytable.scatter_combo_group() else {
            return;
        };

        let shown = window.scatter_symbols();
        for (index, combo) in group.matches(&shown) {
            results.push(SlotResult::new(WinSource::Scatter, index, combo, &shown));
        }
    }
}

impl Evaluator for ScatterEvaluator {
    fn name(&self) -> &'static str {
        "scatter"
    }

    fn evaluate(
        &self,
        paytable: &Paytable,
        rng: &mut dyn RandomSource,
    ) -> Result<SlotResults, EvaluationError> {
        let window = ReelWindow::spin(paytable.reel_group(), rng)?;
        let mut results = SlotResults::with_stops(window.stops().to_vec());
        self.evaluate_window(paytable, &window, &mut results);

        log::debug!(
            "Scatter evaluation: stops {:?}, {} results, total {}",
            results.stops(),
            results.len(),
            results.total_value()
        );
        Ok(results)
    }
}
