//! Symbol comparison policies
//!
//! A comparer decides whether the symbol found on the reels satisfies the
//! symbol a pay combo requires. Every [`PayComboGroup`](crate::PayComboGroup)
//! carries one, shared through an `Arc`.

use std::fmt::Debug;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::symbols::Symbol;

/// Symbol matching policy
pub trait SymbolComparer: Send + Sync + Debug {
    /// Does `actual` (on the reels) satisfy `expected` (in the combo)?
    fn matches(&self, expected: &Symbol, actual: &Symbol) -> bool;
}

/// Shared comparer handle
pub type SharedComparer = Arc<dyn SymbolComparer>;

/// Plain equality
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExactComparer;

impl SymbolComparer for ExactComparer {
    fn matches(&self, expected: &Symbol, actual: &Symbol) -> bool {
        expected == actual
    }
}

/// Equality, plus wild symbols on the reels substitute for anything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WildComparer {
    wilds: Vec<Symbol>,
}

impl WildComparer {
    pub fn new(wilds: Vec<Symbol>) -> Self {
        Self { wilds }
    }

    pub fn is_wild(&self, symbol: &Symbol) -> bool {
        self.wilds.contains(symbol)
    }
}

impl SymbolComparer for WildComparer {
    fn matches(&self, expected: &Symbol, actual: &Symbol) -> bool {
        expected == actual || self.is_wild(actual)
    }
}

/// Comparer selection as it appears in paytable documents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ComparerKind {
    #[default]
    Exact,
    /// Wild symbols referenced by name
    Wild { wilds: Vec<String> },
}

/// Default shared comparer (exact match)
pub fn exact() -> SharedComparer {
    Arc::new(ExactComparer)
}

/// Shared wild comparer
pub fn wild(wilds: Vec<Symbol>) -> SharedComparer {
    Arc::new(WildComparer::new(wilds))
}
