//! Pick tables and paytable triggers
//!
//! A pick table hides a list of item symbols. A round reveals a fixed number
//! of them without replacement and matches the revealed sequence against the
//! table's own pay combos.
//!
//! Pick tables are launched by triggers: a [`PayCombo`](crate::PayCombo)
//! carrying a trigger tag, resolved through the [`PaytableTriggerGroup`].

use serde::{Deserialize, Serialize};

use crate::combo::PayComboGroup;
use crate::symbols::Symbol;

/// A single pick bonus table
#[derive(Debug, Clone)]
pub struct PickTable {
    pub name: String,
    /// Hidden items
    pub items: Vec<Symbol>,
    /// How many items get revealed
    pub picks: usize,
    /// Combos matched against the revealed sequence
    pub combos: PayComboGroup,
}

impl PickTable {
    pub fn new(
        name: impl Into<String>,
        items: Vec<Symbol>,
        picks: usize,
        combos: PayComboGroup,
    ) -> Self {
        Self {
            name: name.into(),
            items,
            picks,
            combos,
        }
    }
}

/// All pick tables of a paytable, in declaration order
#[derive(Debug, Clone, Default)]
pub struct PickTableGroup {
    tables: Vec<PickTable>,
}

impl PickTableGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_pick_table(&mut self, table: PickTable) {
        self.tables.push(table);
    }

    /// Get a table by name
    pub fn get(&self, name: &str) -> Option<&PickTable> {
        self.tables.iter().find(|t| t.name == name)
    }

    pub fn tables(&self) -> &[PickTable] {
        &self.tables
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// Binds a trigger tag to the pick table it launches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaytableTrigger {
    /// Tag carried by pay combos
    pub name: String,
    /// Pick table to evaluate
    pub pick_table: String,
}

impl PaytableTrigger {
    pub fn new(name: impl Into<String>, pick_table: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pick_table: pick_table.into(),
        }
    }
}

/// Ordered set of paytable triggers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaytableTriggerGroup {
    triggers: Vec<PaytableTrigger>,
}

impl PaytableTriggerGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_trigger(&mut self, trigger: PaytableTrigger) {
        self.triggers.push(trigger);
    }

    /// Trigger with the given tag
    pub fn find(&self, name: &str) -> Option<&PaytableTrigger> {
        self.triggers.iter().find(|t| t.name == name)
    }

    pub fn triggers(&self) -> &[PaytableTrigger] {
        &self.triggers
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }
}
