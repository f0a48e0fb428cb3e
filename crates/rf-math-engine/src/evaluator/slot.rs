//! Full slot round: lines, scatters, then triggered pick tables

use crate::paytable::Paytable;
use crate::results::SlotResults;
use crate::rng::RandomSource;

use super::{EvaluationError, Evaluator, LineEvaluator, PickEvaluator, ReelWindow, ScatterEvaluator};

/// Composite evaluator for a complete round
///
/// 1. One spin of the reel window
/// 2. Line results, then scatter results, against that window
/// 3. For every result carrying a trigger tag, in result order, the pick
///    table named by the matching paytable trigger is evaluated with the
///    same random source and its results appended
///
/// Pick results never trigger further pick tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlotEvaluator {
    line: LineEvaluator,
    scatter: ScatterEvaluator,
}

impl SlotEvaluator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Evaluator for SlotEvaluator {
    fn name(&self) -> &'static str {
        "slot"
    }

    fn evaluate(
        &self,
        paytable: &Paytable,
        rng: &mut dyn RandomSource,
    ) -> Result<SlotResults, EvaluationError> {
        let window = ReelWindow::spin(paytable.reel_group(), rng)?;
        let mut results = SlotResults::with_stops(window.stops().to_vec());

        self.line.evaluate_window(paytable, &window, &mut results);
        self.scatter.evaluate_window(paytable, &window, &mut results);

        let triggered: Vec<String> = results.triggers().map(str::to_owned).collect();
        for tag in triggered {
            let Some(trigger) = paytable.trigger_group().find(&tag) else {
                log::debug!("Trigger '{}' has no paytable trigger, skipped", tag);
                continue;
            };

            let table = paytable
                .pick_table_group()
                .get(&trigger.pick_table)
                .ok_or_else(|| EvaluationError::UnknownPickTable(trigger.pick_table.clone()))?;
            let picks = PickEvaluator::evaluate_table(table, rng)?;
            results.extend(picks);
        }

        log::debug!(
            "Slot evaluation: stops {:?}, {} results, total {}",
            results.stops(),
            results.len(),
            results.total_value()
        );
        Ok(results)
    }
}
