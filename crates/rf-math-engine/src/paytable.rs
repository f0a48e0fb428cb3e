//! Paytable aggregate and payline geometry

use serde::{Deserialize, Serialize};

use crate::combo::PayComboGroup;
use crate::pick::{PaytableTriggerGroup, PickTableGroup};
use crate::symbols::{ReelGroup, Symbol};

/// A payline definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payline {
    /// Row positions for each reel (e.g., [0, 1, 2, 1, 0] for a "V" shape)
    pub positions: Vec<u8>,
}

impl Payline {
    pub fn new(positions: Vec<u8>) -> Self {
        Self { positions }
    }

    /// Create a straight line (same row across all reels)
    pub fn straight(row: u8, reel_count: u8) -> Self {
        Self {
            positions: vec![row; reel_count as usize],
        }
    }

    /// Create a V-shaped line
    pub fn v_shape(reel_count: u8) -> Self {
        let mid = reel_count / 2;
        let positions = (0..reel_count)
            .map(|i| if i <= mid { i } else { reel_count - 1 - i })
            .collect();
        Self { positions }
    }
}

/// Ordered set of paylines
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaylineGroup {
    pub paylines: Vec<Payline>,
}

impl PaylineGroup {
    pub fn new(paylines: Vec<Payline>) -> Self {
        Self { paylines }
    }

    /// One straight line per row, top to bottom
    pub fn straight_lines(rows: u8, reel_count: u8) -> Self {
        Self::new((0..rows).map(|row| Payline::straight(row, reel_count)).collect())
    }

    pub fn add_payline(&mut self, payline: Payline) {
        self.paylines.push(payline);
    }

    pub fn len(&self) -> usize {
        self.paylines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paylines.is_empty()
    }
}

/// Malformed paytable configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaytableError {
    #[error("Paytable has no reels")]
    NoReels,

    #[error("Reel {reel} has an empty strip")]
    EmptyReelStrip { reel: usize },

    #[error("Reel {reel} has zero visible rows")]
    ZeroHeight { reel: usize },

    #[error("Payline {payline} covers {actual} reels, expected {expected}")]
    PaylineLength {
        payline: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Payline {payline} uses row {row} on reel {reel} (height {height})")]
    PaylineRowOutOfRange {
        payline: usize,
        reel: usize,
        row: u8,
        height: u8,
    },

    #[error("Empty pay combo at index {index} in {group}")]
    EmptyCombo { group: String, index: usize },

    #[error("Symbol '{symbol}' in {group} is not available")]
    UnknownSymbol { group: String, symbol: String },

    #[error("Pick table '{0}' has no items")]
    EmptyPickTable(String),

    #[error("Pick table '{table}' reveals {picks} of {items} items")]
    InvalidPickCount {
        table: String,
        picks: usize,
        items: usize,
    },

    #[error("Pick table '{0}' is defined twice")]
    DuplicatePickTable(String),

    #[error("Trigger '{0}' is defined twice")]
    DuplicateTrigger(String),

    #[error("Trigger '{trigger}' targets unknown pick table '{pick_table}'")]
    UnknownTriggerTarget { trigger: String, pick_table: String },
}

/// Loose pieces of a paytable, before validation
#[derive(Debug, Clone)]
pub struct PaytableParts {
    pub reel_group: ReelGroup,
    pub payline_group: PaylineGroup,
    pub pay_combo_group: PayComboGroup,
    pub scatter_combo_group: Option<PayComboGroup>,
    pub pick_table_group: PickTableGroup,
    pub trigger_group: PaytableTriggerGroup,
}

impl PaytableParts {
    /// Reels only; every other group empty, no scatter group
    pub fn new(reel_group: ReelGroup) -> Self {
        Self {
            reel_group,
            payline_group: PaylineGroup::default(),
            pay_combo_group: PayComboGroup::exact(),
            scatter_combo_group: None,
            pick_table_group: PickTableGroup::default(),
            trigger_group: PaytableTriggerGroup::default(),
        }
    }
}

/// Complete, validated paytable
///
/// Built once per session and read-only afterwards; safe to share between
/// threads.
#[derive(Debug, Clone)]
pub struct Paytable {
    reel_group: ReelGroup,
    payline_group: PaylineGroup,
    pay_combo_group: PayComboGroup,
    scatter_combo_group: Option<PayComboGroup>,
    pick_table_group: PickTableGroup,
    trigger_group: PaytableTriggerGroup,
}

impl Paytable {
    /// Validate the parts and freeze them into a paytable
    pub fn from_parts(parts: PaytableParts) -> Result<Self, PaytableError> {
        validate(&parts)?;

        log::info!(
            "Paytable built: {} reels ({} symbols), {} paylines, {} pay combos, \
             {} scatter combos, {} pick tables",
            parts.reel_group.len(),
            parts.reel_group.distinct_symbols().len(),
            parts.payline_group.len(),
            parts.pay_combo_group.len(),
            parts.scatter_combo_group.as_ref().map_or(0, |g| g.len()),
            parts.pick_table_group.len(),
        );

        Ok(Self {
            reel_group: parts.reel_group,
            payline_group: parts.payline_group,
            pay_combo_group: parts.pay_combo_group,
            scatter_combo_group: parts.scatter_combo_group,
            pick_table_group: parts.pick_table_group,
            trigger_group: parts.trigger_group,
        })
    }

    pub fn reel_group(&self) -> &ReelGroup {
        &self.reel_group
    }

    pub fn payline_group(&self) -> &PaylineGroup {
        &self.payline_group
    }

    /// Regular (line) pay combos
    pub fn pay_combo_group(&self) -> &PayComboGroup {
        &self.pay_combo_group
    }

    pub fn scatter_combo_group(&self) -> Option<&PayComboGroup> {
        self.scatter_combo_group.as_ref()
    }

    pub fn pick_table_group(&self) -> &PickTableGroup {
        &self.pick_table_group
    }

    pub fn trigger_group(&self) -> &PaytableTriggerGroup {
        &self.trigger_group
    }
}

fn validate(parts: &PaytableParts) -> Result<(), PaytableError> {
    let reels = &parts.reel_group.reels;
    if reels.is_empty() {
        return Err(PaytableError::NoReels);
    }

    for (reel, props) in reels.iter().enumerate() {
        if props.reel_strip.is_empty() {
            return Err(PaytableError::EmptyReelStrip { reel });
        }
        if props.height == 0 {
            return Err(PaytableError::ZeroHeight { reel });
        }
    }

    for (payline, line) in parts.payline_group.paylines.iter().enumerate() {
        if line.positions.len() != reels.len() {
            return Err(PaytableError::PaylineLength {
                payline,
                expected: reels.len(),
                actual: line.positions.len(),
            });
        }
        for (reel, (&row, props)) in line.positions.iter().zip(reels).enumerate() {
            if row >= props.height {
                return Err(PaytableError::PaylineRowOutOfRange {
                    payline,
                    reel,
                    row,
                    height: props.height,
                });
            }
        }
    }

    let on_reels = |s: &Symbol| parts.reel_group.contains_symbol(s);
    validate_combos("pay combo group", &parts.pay_combo_group, on_reels)?;
    if let Some(scatter) = &parts.scatter_combo_group {
        if scatter.is_empty() {
            log::warn!("Scatter combo group is present but empty");
        }
        validate_combos("scatter combo group", scatter, on_reels)?;
    }

    let mut seen: Vec<&str> = Vec::new();
    for table in parts.pick_table_group.tables() {
        if seen.contains(&table.name.as_str()) {
            return Err(PaytableError::DuplicatePickTable(table.name.clone()));
        }
        seen.push(&table.name);

        if table.items.is_empty() {
            return Err(PaytableError::EmptyPickTable(table.name.clone()));
        }
        if table.picks == 0 || table.picks > table.items.len() {
            return Err(PaytableError::InvalidPickCount {
                table: table.name.clone(),
                picks: table.picks,
                items: table.items.len(),
            });
        }
        validate_combos(&format!("pick table '{}'", table.name), &table.combos, |s| {
            table.items.contains(s)
        })?;
    }

    let mut seen: Vec<&str> = Vec::new();
    for trigger in parts.trigger_group.triggers() {
        if seen.contains(&trigger.name.as_str()) {
            return Err(PaytableError::DuplicateTrigger(trigger.name.clone()));
        }
        seen.push(&trigger.name);

        if parts.pick_table_group.get(&trigger.pick_table).is_none() {
            return Err(PaytableError::UnknownTriggerTarget {
                trigger: trigger.name.clone(),
                pick_table: trigger.pick_table.clone(),
            });
        }
    }

    let tagged = parts
        .pay_combo_group
        .combos()
        .iter()
        .chain(parts.scatter_combo_group.iter().flat_map(|g| g.combos()))
        .filter_map(|c| c.trigger());
    for tag in tagged {
        if parts.trigger_group.find(tag).is_none() {
            log::warn!("Pay combo trigger '{}' has no paytable trigger", tag);
        }
    }

    Ok(())
}

fn validate_combos(
    group: &str,
    combos: &PayComboGroup,
    known: impl Fn(&Symbol) -> bool,
) -> Result<(), PaytableError> {
    for (index, combo) in combos.combos().iter().enumerate() {
        if combo.is_empty() {
            return Err(PaytableError::EmptyCombo {
                group: group.to_string(),
                index,
            });
        }
        if let Some(unknown) = combo.symbols().iter().find(|s| !known(s)) {
            return Err(PaytableError::UnknownSymbol {
                group: group.to_string(),
                symbol: unknown.name.clone(),
            });
        }
    }
    Ok(())
}
