//! Scatter Evaluator Integration Tests
//!
//! Three reels showing `AA`, `BB`, `CC` at fixed strip positions, a replay
//! source that always stops at position 0, and scatter groups of increasing
//! overlap.

use rf_math_engine::{
    EvaluationError, Evaluator, PayCombo, PayComboGroup, PaylineGroup, Paytable, PaytableBuilder,
    ReelGroup, ReelProperties, ReelStrip, ReplayRng, RngError, ScatterEvaluator, Symbol, WinSource,
};

fn aa() -> Symbol {
    Symbol::new(0, "AA")
}

fn bb() -> Symbol {
    Symbol::new(1, "BB")
}

fn cc() -> Symbol {
    Symbol::new(2, "CC")
}

/// Test builder: one reel per strip, scatter combos supplied by the test
struct ScatterTestBuilder {
    strips: Vec<Vec<Symbol>>,
    scatter: PayComboGroup,
}

impl ScatterTestBuilder {
    /// Every reel shows `AA` at position 0
    fn uniform(scatter: PayComboGroup) -> Self {
        Self {
            strips: vec![vec![aa(), bb(), cc()]; 3],
            scatter,
        }
    }

    /// Reels show `AA`, `BB`, `CC` at position 0, left to right
    fn staggered(scatter: PayComboGroup) -> Self {
        Self {
            strips: vec![
                vec![aa(), bb(), cc()],
                vec![bb(), cc(), aa()],
                vec![cc(), aa(), bb()],
            ],
            scatter,
        }
    }
}

impl PaytableBuilder for ScatterTestBuilder {
    fn build_reel_group(&self) -> ReelGroup {
        ReelGroup::new(
            self.strips
                .iter()
                .map(|strip| ReelProperties::new(ReelStrip::new(strip.clone()), 3))
                .collect(),
        )
    }

    fn build_payline_group(&self) -> PaylineGroup {
        PaylineGroup::straight_lines(3, 3)
    }

    fn build_pay_combo_group(&self) -> PayComboGroup {
        PayComboGroup::exact()
    }

    fn build_scatter_combo_group(&self) -> Option<PayComboGroup> {
        Some(self.scatter.clone())
    }
}

fn evaluate(paytable: &Paytable) -> Vec<u64> {
    let mut rng = ReplayRng::new(vec![0, 0, 0]);
    let results = ScatterEvaluator::new().evaluate(paytable, &mut rng).unwrap();
    assert_eq!(rng.remaining(), 0);
    results.iter().map(|r| r.total_value).collect()
}

// ═══════════════════════════════════════════════════════════════════════════════
// SCATTER SCENARIOS
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_empty_scatter_group() {
    let paytable = ScatterTestBuilder::uniform(PayComboGroup::exact()).build().unwrap();
    assert!(evaluate(&paytable).is_empty());
}

#[test]
fn test_single_scatter_combo() {
    let group = PayComboGroup::exact().with_pay_combo(PayCombo::repeated(aa(), 3, 1000));
    let paytable = ScatterTestBuilder::uniform(group).build().unwrap();
    assert_eq!(evaluate(&paytable), vec![1000]);
}

#[test]
fn test_no_cross_symbol_match() {
    let group = PayComboGroup::exact()
        .with_pay_combo(PayCombo::repeated(aa(), 3, 1000))
        .with_pay_combo(PayCombo::repeated(bb(), 3, 500))
        .with_pay_combo(PayCombo::repeated(cc(), 3, 10));
    let paytable = ScatterTestBuilder::uniform(group).build().unwrap();

    let mut rng = ReplayRng::new(vec![0, 0, 0]);
    let results = ScatterEvaluator::new().evaluate(&paytable, &mut rng).unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results.results()[0].total_value, 1000);
    assert_eq!(results.results()[0].combo_index, 0);
    assert_eq!(results.results()[0].symbols, vec![aa(), aa(), aa()]);
    assert_eq!(results.results()[0].source, WinSource::Scatter);
}

#[test]
fn test_overlapping_prefixes_all_pay() {
    let group = PayComboGroup::exact()
        .with_pay_combo(PayCombo::repeated(aa(), 1, 10))
        .with_pay_combo(PayCombo::repeated(aa(), 2, 100));
    let paytable = ScatterTestBuilder::uniform(group).build().unwrap();

    // Both prefixes match, in insertion order
    assert_eq!(evaluate(&paytable), vec![10, 100]);
}

#[test]
fn test_full_length_mixed_combo() {
    let group =
        PayComboGroup::exact().with_pay_combo(PayCombo::new(vec![aa(), bb(), cc()], 150));
    let paytable = ScatterTestBuilder::staggered(group).build().unwrap();
    assert_eq!(evaluate(&paytable), vec![150]);
}

#[test]
fn test_duplicate_length_combos_both_pay() {
    let group = PayComboGroup::exact()
        .with_pay_combo(PayCombo::repeated(aa(), 2, 100))
        .with_pay_combo(PayCombo::repeated(aa(), 2, 40));
    let paytable = ScatterTestBuilder::uniform(group).build().unwrap();
    assert_eq!(evaluate(&paytable), vec![100, 40]);
}

// ═══════════════════════════════════════════════════════════════════════════════
// RANDOM SOURCE
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_exhausted_source_fails_the_round() {
    let group = PayComboGroup::exact().with_pay_combo(PayCombo::repeated(aa(), 3, 1000));
    let paytable = ScatterTestBuilder::uniform(group).build().unwrap();

    let mut rng = ReplayRng::new(vec![0, 0]);
    let err = ScatterEvaluator::new().evaluate(&paytable, &mut rng).unwrap_err();
    assert_eq!(err, EvaluationError::Rng(RngError::Exhausted { consumed: 2 }));
}

#[test]
fn test_replay_is_deterministic() {
    let group = PayComboGroup::exact()
        .with_pay_combo(PayCombo::repeated(aa(), 1, 10))
        .with_pay_combo(PayCombo::repeated(bb(), 1, 20))
        .with_pay_combo(PayCombo::new(vec![bb(), cc()], 70));
    let paytable = ScatterTestBuilder::uniform(group).build().unwrap();

    let draws = vec![1, 1, 2];
    let first = ScatterEvaluator::new()
        .evaluate(&paytable, &mut ReplayRng::new(draws.clone()))
        .unwrap();
    let second = ScatterEvaluator::new()
        .evaluate(&paytable, &mut ReplayRng::new(draws))
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(first.stops(), &[1, 1, 2]);
    // Shown: BB, BB, CC
    let values: Vec<u64> = first.iter().map(|r| r.total_value).collect();
    assert_eq!(values, vec![20]);
}
