//! Pick table evaluation

use crate::paytable::Paytable;
use crate::pick::PickTable;
use crate::results::{SlotResult, SlotResults, WinSource};
use crate::rng::{RandomSource, RngError};

use super::{EvaluationError, Evaluator};

/// Reveals items of one named pick table and matches its combos
#[derive(Debug, Clone)]
pub struct PickEvaluator {
    table: String,
}

impl PickEvaluator {
    pub fn new(table: impl Into<String>) -> Self {
        Self { table: table.into() }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Reveal `table.picks` items without replacement, then match.
    ///
    /// Each draw is bounded by the number of items still hidden. The drawn
    /// indices are recorded as the result stops.
    pub fn evaluate_table(
        table: &PickTable,
        rng: &mut dyn RandomSource,
    ) -> Result<SlotResults, RngError> {
        let mut hidden: Vec<_> = table.items.iter().collect();
        let mut drawn = Vec::with_capacity(table.picks);
        let mut revealed = Vec::with_capacity(table.picks);

        for _ in 0..table.picks.min(table.items.len()) {
            let bound = hidden.len();
            let index = rng.next(bound)?;
            if index >= bound {
                return Err(RngError::OutOfRange {
                    value: index,
                    bound,
                });
            }
            drawn.push(index);
            revealed.push(hidden.remove(index).clone());
        }

        let mut results = SlotResults::with_stops(drawn);
        for (index, combo) in table.combos.matches(&revealed) {
            results.push(SlotResult::new(
                WinSource::Pick {
                    table: table.name.clone(),
                },
                index,
                combo,
                &revealed,
            ));
        }
        Ok(results)
    }
}

impl Evaluator for PickEvaluator {
    fn name(&self) -> &'static str {
        "pick"
    }

    fn evaluate(
        &self,
        paytable: &Paytable,
        rng: &mut dyn RandomSource,
    ) -> Result<SlotResults, EvaluationError> {
        let table = paytable
            .pick_table_group()
            .get(&self.table)
            .ok_or_else(|| EvaluationError::UnknownPickTable(self.table.clone()))?;

        let results = Self::evaluate_table(table, rng)?;
        log::debug!(
            "Pick evaluation '{}': picks {:?}, {} results",
            self.table,
            results.stops(),
            results.len()
        );
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combo::{PayCombo, PayComboGroup};
    use crate::paytable::PaytableParts;
    use crate::rng::ReplayRng;
    use crate::symbols::{ReelGroup, ReelProperties, ReelStrip, Symbol};

    fn gold() -> Symbol {
        Symbol::new(20, "GOLD")
    }

    fn coal() -> Symbol {
        Symbol::new(21, "COAL")
    }

    fn paytable() -> Paytable {
        let strip = ReelStrip::new(vec![Symbol::new(0, "AA")]);
        let reels = ReelGroup::new(vec![ReelProperties::single_row(strip)]);
        let combos = PayComboGroup::exact()
            .with_pay_combo(PayCombo::repeated(gold(), 2, 250))
            .with_pay_combo(PayCombo::repeated(gold(), 1, 25));

        let mut parts = PaytableParts::new(reels);
        parts
            .pick_table_group
            .add_pick_table(PickTable::new("Chests", vec![coal(), gold(), gold()], 2, combos));
        Paytable::from_parts(parts).unwrap()
    }

    #[test]
    fn test_picks_without_replacement() {
        let paytable = paytable();
        // Pick index 1 of [COAL, GOLD, GOLD], then index 1 of [COAL, GOLD]
        let mut rng = ReplayRng::new(vec![1, 1]);
        let results = PickEvaluator::new("Chests").evaluate(&paytable, &mut rng).unwrap();

        let values: Vec<u64> = results.iter().map(|r| r.total_value).collect();
        assert_eq!(values, vec![250, 25]);
        assert_eq!(results.results()[0].symbols, vec![gold(), gold()]);
        assert_eq!(results.stops(), &[1, 1]);
        assert_eq!(
            results.results()[0].source,
            WinSource::Pick {
                table: "Chests".into()
            }
        );
    }

    #[test]
    fn test_coal_first_pays_nothing() {
        let paytable = paytable();
        let mut rng = ReplayRng::new(vec![0, 0]);
        let results = PickEvaluator::new("Chests").evaluate(&paytable, &mut rng).unwrap();
        assert!(results.is_empty());
    }

    /// Ignores the requested bound
    struct Unbounded;

    impl RandomSource for Unbounded {
        fn next(&mut self, _bound: usize) -> Result<usize, RngError> {
            Ok(99)
        }
    }

    #[test]
    fn test_out_of_range_draw_fails() {
        let paytable = paytable();
        let err = PickEvaluator::new("Chests")
            .evaluate(&paytable, &mut Unbounded)
            .unwrap_err();
        assert_eq!(
            err,
            EvaluationError::Rng(RngError::OutOfRange { value: 99, bound: 3 })
        );
    }

    #[test]
    fn test_unknown_table() {
        let paytable = paytable();
        let mut rng = ReplayRng::new(vec![0]);
        assert_eq!(
            PickEvaluator::new("Eggs").evaluate(&paytable, &mut rng).unwrap_err(),
            EvaluationError::UnknownPickTable("Eggs".into())
        );
    }
}
