//! Line evaluation

use crate::paytable::Paytable;
use crate::results::{SlotResult, SlotResults, WinSource};
use crate::rng::RandomSource;

use super::{EvaluationError, Evaluator, ReelWindow};

/// Matches the regular pay combos against every payline
#[derive(Debug, Clone, Copy, Default)]
pub struct LineEvaluator;

impl LineEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate all paylines of an already drawn window, in payline order
    pub fn evaluate_window(
        &self,
        paytable: &Paytable,
        window: &ReelWindow<'_>,
        results: &mut SlotResults,
    ) {
        let group = paytable.pay_combo_group();
        if group.is_empty() {
            return;
        }

        for (payline, line) in paytable.payline_group().paylines.iter().enumerate() {
            let shown = window.payline_symbols(line);
            for (index, combo) in group.matches(&shown) {
                let source = WinSource::Line { payline };
                results.push(SlotResult::new(source, index, combo, &shown));
            }
        }
    }
}

impl Evaluator for LineEvaluator {
    fn name(&self) -> &'static str {
        "line"
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
            "Line evaluation: stops {:?}, {} results, total {}",
            results.stops(),
            results.len(),
            results.total_value()
        );
        Ok(results)
    }
}
