//! Evaluation results

use serde::{Deserialize, Serialize};

use crate::combo::PayCombo;
use crate::symbols::Symbol;

/// Where a win came from
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WinSource {
    /// Regular pay combo on a payline
    Line { payline: usize },
    /// Scatter pay combo
    Scatter,
    /// Pick table reveal
    Pick { table: String },
}

impl WinSource {
    /// Short label for reports ("line", "scatter", "pick:<table>")
    pub fn label(&self) -> String {
        match self {
            WinSource::Line { .. } => "line".to_string(),
            WinSource::Scatter => "scatter".to_string(),
            WinSource::Pick { table } => format!("pick:{table}"),
        }
    }
}

/// A single matched pay combo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotResult {
    pub source: WinSource,
    /// Index of the combo within its group
    pub combo_index: usize,
    /// The matched combo
    pub combo: PayCombo,
    /// Symbols the combo was matched against
    pub symbols: Vec<Symbol>,
    /// Payout contribution
    pub total_value: u64,
}

impl SlotResult {
    pub fn new(
        source: WinSource,
        combo_index: usize,
        combo: &PayCombo,
        symbols: &[Symbol],
    ) -> Self {
        Self {
            source,
            combo_index,
            combo: combo.clone(),
            symbols: symbols.to_vec(),
            total_value: combo.pay_amount(),
        }
    }

    /// Trigger tag of the matched combo
    pub fn trigger(&self) -> Option<&str> {
        self.combo.trigger()
    }
}

/// Ordered results of one evaluation round
///
/// Records appear in evaluation order: group order first, then combo order
/// within the group. Nothing is deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotResults {
    results: Vec<SlotResult>,
    /// Reel stops drawn for the round
    stops: Vec<usize>,
}

impl SlotResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_stops(stops: Vec<usize>) -> Self {
        Self {
            results: Vec::new(),
            stops,
        }
    }

    pub(crate) fn push(&mut self, result: SlotResult) {
        self.results.push(result);
    }

    pub(crate) fn extend(&mut self, other: SlotResults) {
        self.results.extend(other.results);
    }

    pub fn results(&self) -> &[SlotResult] {
        &self.results
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SlotResult> {
        self.results.iter()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Sum of all record values, saturating at `u64::MAX`
    pub fn total_value(&self) -> u64 {
        self.results
            .iter()
            .fold(0u64, |total, r| total.saturating_add(r.total_value))
    }

    /// Check if this is a winning round
    pub fn is_win(&self) -> bool {
        self.total_value() > 0
    }

    /// Trigger tags of line and scatter records, in record order
    ///
    /// Pick records never launch a bonus, so their tags are left out.
    pub fn triggers(&self) -> impl Iterator<Item = &str> {
        self.results
            .iter()
            .filter(|r| !matches!(r.source, WinSource::Pick { .. }))
            .filter_map(|r| r.trigger())
    }
}

impl<'a> IntoIterator for &'a SlotResults {
    type Item = &'a SlotResult;
    type IntoIter = std::slice::Iter<'a, SlotResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
