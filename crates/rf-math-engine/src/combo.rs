//! Pay combinations and pay combination groups

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::comparer::{self, SharedComparer, SymbolComparer};
use crate::symbols::Symbol;

/// A pay combination: required symbols, a pay amount and an optional trigger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayCombo {
    /// Required symbols, in position order
    symbols: Vec<Symbol>,
    /// Pay amount for this combination
    pay_amount: u64,
    /// Paytable trigger fired by this combination
    #[serde(default, skip_serializing_if = "Option::is_none")]
    trigger: Option<String>,
}

impl PayCombo {
    /// Combination from an explicit symbol list
    pub fn new(symbols: Vec<Symbol>, pay_amount: u64) -> Self {
        Self {
            symbols,
            pay_amount,
            trigger: None,
        }
    }

    /// `count` × the same symbol
    pub fn repeated(symbol: Symbol, count: usize, pay_amount: u64) -> Self {
        Self::new(vec![symbol; count], pay_amount)
    }

    /// Attach a trigger tag
    pub fn with_trigger(mut self, trigger: impl Into<String>) -> Self {
        self.trigger = Some(trigger.into());
        self
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn pay_amount(&self) -> u64 {
        self.pay_amount
    }

    pub fn trigger(&self) -> Option<&str> {
        self.trigger.as_deref()
    }

    /// Number of required symbols
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Check whether `candidate` satisfies this combination.
    ///
    /// A combination `{ AA, AA, AA }` needs the first three candidate
    /// symbols to match `AA` under `comparer`. Candidate symbols past the
    /// combination length are ignored. A combination longer than the
    /// candidate, or an empty combination, never matches. An empty
    /// combination is not treated as a trivial match of every candidate.
    pub fn is_match(&self, comparer: &dyn SymbolComparer, candidate: &[Symbol]) -> bool {
        if self.symbols.is_empty() || self.symbols.len() > candidate.len() {
            return false;
        }

        self.symbols
            .iter()
            .zip(candidate)
            .all(|(expected, actual)| comparer.matches(expected, actual))
    }
}

impl fmt::Display for PayCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.symbols.iter().map(|s| s.name.as_str()).collect();
        f.write_str(&names.join(", "))
    }
}

/// An ordered group of pay combinations sharing one comparer
///
/// Insertion order is evaluation order, and evaluation order is result order.
#[derive(Debug, Clone)]
pub struct PayComboGroup {
    comparer: SharedComparer,
    combos: Vec<PayCombo>,
}

impl PayComboGroup {
    pub fn new(comparer: SharedComparer) -> Self {
        Self {
            comparer,
            combos: Vec::new(),
        }
    }

    /// Group using exact symbol equality
    pub fn exact() -> Self {
        Self::new(comparer::exact())
    }

    /// Append a pay combo
    pub fn add_pay_combo(&mut self, combo: PayCombo) {
        self.combos.push(combo);
    }

    /// Builder-style append
    pub fn with_pay_combo(mut self, combo: PayCombo) -> Self {
        self.add_pay_combo(combo);
        self
    }

    pub fn comparer(&self) -> &dyn SymbolComparer {
        self.comparer.as_ref()
    }

    pub fn combos(&self) -> &[PayCombo] {
        &self.combos
    }

    pub fn len(&self) -> usize {
        self.combos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combos.is_empty()
    }

    /// Indices and combos matching `candidate`, in group order
    pub fn matches<'a>(
        &'a self,
        candidate: &'a [Symbol],
    ) -> impl Iterator<Item = (usize, &'a PayCombo)> + 'a {
        self.combos
            .iter()
            .enumerate()
            .filter(move |(_, combo)| combo.is_match(self.comparer(), candidate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparer::{ExactComparer, WildComparer};

    fn aa() -> Symbol {
        Symbol::new(0, "AA")
    }

    fn bb() -> Symbol {
        Symbol::new(1, "BB")
    }

    #[test]
    fn test_longer_combo_never_matches() {
        let combo = PayCombo::repeated(aa(), 4, 100);
        assert!(!combo.is_match(&ExactComparer, &[aa(), aa(), aa()]));
    }

    #[test]
    fn test_prefix_match_ignores_trailing_symbols() {
        let combo = PayCombo::repeated(aa(), 2, 100);
        assert!(combo.is_match(&ExactComparer, &[aa(), aa(), bb()]));
        assert!(!combo.is_match(&ExactComparer, &[aa(), bb(), aa()]));
    }

    #[test]
    fn test_empty_combo_never_matches() {
        let combo = PayCombo::new(Vec::new(), 5);
        assert!(!combo.is_match(&ExactComparer, &[aa()]));
        assert!(!combo.is_match(&ExactComparer, &[]));
    }

    #[test]
    fn test_wild_substitution() {
        let wild = Symbol::new(9, "WILD");
        let combo = PayCombo::repeated(aa(), 3, 100);
        let comparer = WildComparer::new(vec![wild.clone()]);
        assert!(combo.is_match(&comparer, &[aa(), wild.clone(), aa()]));
        assert!(!combo.is_match(&ExactComparer, &[aa(), wild, aa()]));
    }

    #[test]
    fn test_group_keeps_insertion_order_and_duplicates() {
        let mut group = PayComboGroup::exact();
        group.add_pay_combo(PayCombo::repeated(bb(), 3, 500));
        group.add_pay_combo(PayCombo::repeated(aa(), 1, 10));
        group.add_pay_combo(PayCombo::repeated(aa(), 1, 10));

        let pays: Vec<u64> = group.combos().iter().map(|c| c.pay_amount()).collect();
        assert_eq!(pays, vec![500, 10, 10]);

        let hits: Vec<usize> = group.matches(&[aa(), aa()]).map(|(i, _)| i).collect();
        assert_eq!(hits, vec![1, 2]);
    }

    #[test]
    fn test_display_and_trigger() {
        let combo = PayCombo::new(vec![aa(), bb()], 20).with_trigger("PickBonus");
        assert_eq!(combo.to_string(), "AA, BB");
        assert_eq!(combo.trigger(), Some("PickBonus"));
        assert_eq!(PayCombo::repeated(aa(), 1, 1).trigger(), None);
    }
}
