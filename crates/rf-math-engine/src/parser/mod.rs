//! Paytable documents: load paytables from JSON or YAML
//!
//! Documents reference symbols by name. Parsing happens in three steps:
//!
//! 1. Deserialize into a [`PaytableDocument`]
//! 2. Check it against [`DocumentLimits`]
//! 3. Resolve names into a [`DocumentBuilder`], which builds the [`Paytable`]
//!
//! ## Usage
//!
//! ```rust,ignore
//! let parser = DocumentParser::new();
//! let paytable = parser.load("games/classic.yaml")?;
//! ```
//!
//! ## Format
//!
//! ```yaml
//! symbols:
//!   - { id: 0, name: AA }
//!   - { id: 1, name: BB }
//! reels:
//!   - { strip: [AA, BB], height: 1 }
//! paylines: [[0]]
//! pay_combos:
//!   - { symbols: [AA], pay: 10 }
//! scatter:
//!   combos:
//!     - { symbols: [BB], count: 3, pay: 100, trigger: Bonus }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::builder::PaytableBuilder;
use crate::combo::{PayCombo, PayComboGroup};
use crate::comparer::{self, ComparerKind, SharedComparer};
use crate::paytable::{Payline, PaylineGroup, Paytable, PaytableError};
use crate::pick::{PaytableTrigger, PaytableTriggerGroup, PickTable, PickTableGroup};
use crate::symbols::{ReelGroup, ReelProperties, ReelStrip, Symbol};

/// Document parser
pub struct DocumentParser {
    /// Validation limits
    pub limits: DocumentLimits,
}

/// Parsing limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentLimits {
    pub max_name_length: usize,
    pub max_symbols: usize,
    pub max_reels: usize,
    pub max_rows: u8,
    pub max_strip_length: usize,
    pub max_paylines: usize,
    pub max_combos: usize,
    pub max_pick_items: usize,
    /// Largest pay amount a single combo may carry
    pub max_pay_value: u64,
}

impl Default for DocumentLimits {
    fn default() -> Self {
        Self {
            max_name_length: 256,
            max_symbols: 64,
            max_reels: 10,
            max_rows: 10,
            max_strip_length: 1000,
            max_paylines: 100,
            max_combos: 500,
            max_pick_items: 100,
            max_pay_value: 1_000_000_000,
        }
    }
}

impl Default for DocumentParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self {
            limits: DocumentLimits::default(),
        }
    }

    /// Create parser with custom limits
    pub fn with_limits(limits: DocumentLimits) -> Self {
        Self { limits }
    }

    /// Parse and validate a JSON document
    pub fn parse_json(&self, json: &str) -> Result<PaytableDocument, ParseError> {
        let doc: PaytableDocument =
            serde_json::from_str(json).map_err(|e| ParseError::JsonError(e.to_string()))?;
        self.validate(&doc)?;
        Ok(doc)
    }

    /// Parse and validate a YAML document
    pub fn parse_yaml(&self, yaml: &str) -> Result<PaytableDocument, ParseError> {
        let doc: PaytableDocument =
            serde_yml::from_str(yaml).map_err(|e| ParseError::YamlError(e.to_string()))?;
        self.validate(&doc)?;
        Ok(doc)
    }

    /// Parse a JSON document straight into a paytable
    pub fn paytable_from_json(&self, json: &str) -> Result<Paytable, ParseError> {
        Ok(self.parse_json(json)?.resolve()?.build()?)
    }

    /// Parse a YAML document straight into a paytable
    pub fn paytable_from_yaml(&self, yaml: &str) -> Result<Paytable, ParseError> {
        Ok(self.parse_yaml(yaml)?.resolve()?.build()?)
    }

    /// Load a paytable file; format chosen by extension (`.json`, `.yaml`, `.yml`)
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Paytable, ParseError> {
        let path = path.as_ref();
        let format = match path.extension().and_then(|e| e.to_str()) {
            Some(ext @ ("json" | "yaml" | "yml")) => ext,
            other => {
                return Err(ParseError::UnsupportedFormat(
                    other.unwrap_or_default().to_string(),
                ));
            }
        };

        let text = std::fs::read_to_string(path)?;
        let paytable = if format == "json" {
            self.paytable_from_json(&text)?
        } else {
            self.paytable_from_yaml(&text)?
        };

        log::info!("Loaded paytable document {:?}", path);
        Ok(paytable)
    }

    /// Validate a document against the parser limits
    pub fn validate(&self, doc: &PaytableDocument) -> Result<(), ParseError> {
        let limits = &self.limits;

        if doc.name.len() > limits.max_name_length {
            return Err(ParseError::ValidationError(format!(
                "Paytable name too long: {} > {}",
                doc.name.len(),
                limits.max_name_length
            )));
        }

        if doc.symbols.len() > limits.max_symbols {
            return Err(ParseError::ValidationError(format!(
                "Too many symbols: {} > {}",
                doc.symbols.len(),
                limits.max_symbols
            )));
        }

        for (i, symbol) in doc.symbols.iter().enumerate() {
            if symbol.name.is_empty() || symbol.name.len() > limits.max_name_length {
                return Err(ParseError::ValidationError(format!(
                    "Invalid symbol name length for id {}",
                    symbol.id
                )));
            }
            let duplicate = doc.symbols[..i]
                .iter()
                .any(|s| s.id == symbol.id || s.name == symbol.name);
            if duplicate {
                return Err(ParseError::ValidationError(format!(
                    "Duplicate symbol: {} ({})",
                    symbol.name, symbol.id
                )));
            }
        }

        if doc.reels.len() > limits.max_reels {
            return Err(ParseError::ValidationError(format!(
                "Too many reels: {} > {}",
                doc.reels.len(),
                limits.max_reels
            )));
        }

        for (i, reel) in doc.reels.iter().enumerate() {
            if reel.strip.len() > limits.max_strip_length {
                return Err(ParseError::ValidationError(format!(
                    "Reel {} strip too long: {} > {}",
                    i,
                    reel.strip.len(),
                    limits.max_strip_length
                )));
            }
            if reel.height > limits.max_rows {
                return Err(ParseError::ValidationError(format!(
                    "Reel {} too tall: {} > {}",
                    i, reel.height, limits.max_rows
                )));
            }
        }

        if doc.paylines.len() > limits.max_paylines {
            return Err(ParseError::ValidationError(format!(
                "Too many paylines: {} > {}",
                doc.paylines.len(),
                limits.max_paylines
            )));
        }

        let combo_count = doc.pay_combos.len()
            + doc.scatter.as_ref().map_or(0, |s| s.combos.len())
            + doc.pick_tables.iter().map(|t| t.combos.len()).sum::<usize>();
        if combo_count > limits.max_combos {
            return Err(ParseError::ValidationError(format!(
                "Too many pay combos: {} > {}",
                combo_count, limits.max_combos
            )));
        }

        let pays = doc
            .pay_combos
            .iter()
            .chain(doc.scatter.iter().flat_map(|s| s.combos.iter()))
            .chain(doc.pick_tables.iter().flat_map(|t| t.combos.iter()))
            .map(|c| c.pay);
        for pay in pays {
            if pay > limits.max_pay_value {
                return Err(ParseError::ValidationError(format!(
                    "Pay value too large: {} > {}",
                    pay, limits.max_pay_value
                )));
            }
        }

        for table in &doc.pick_tables {
            if table.items.len() > limits.max_pick_items {
                return Err(ParseError::ValidationError(format!(
                    "Pick table '{}' has too many items: {} > {}",
                    table.name,
                    table.items.len(),
                    limits.max_pick_items
                )));
            }
        }

        Ok(())
    }
}

/// Parse error
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("JSON parse error: {0}")]
    JsonError(String),

    #[error("YAML parse error: {0}")]
    YamlError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported document format: {0:?}")]
    UnsupportedFormat(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),

    #[error("Invalid paytable: {0}")]
    Paytable(#[from] PaytableError),
}

// ═══════════════════════════════════════════════════════════════════════════════
// DOCUMENT SCHEMA
// ═══════════════════════════════════════════════════════════════════════════════

/// Serialized paytable
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaytableDocument {
    #[serde(default)]
    pub name: String,
    pub symbols: Vec<SymbolDef>,
    pub reels: Vec<ReelDef>,
    /// Row index per reel, one entry per payline
    #[serde(default)]
    pub paylines: Vec<Vec<u8>>,
    /// Comparer of the regular pay combos
    #[serde(default)]
    pub comparer: ComparerKind,
    #[serde(default)]
    pub pay_combos: Vec<ComboDef>,
    #[serde(default)]
    pub scatter: Option<ScatterDef>,
    #[serde(default)]
    pub pick_tables: Vec<PickTableDef>,
    #[serde(default)]
    pub triggers: Vec<PaytableTrigger>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolDef {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReelDef {
    /// Symbol names in strip order
    pub strip: Vec<String>,
    #[serde(default = "default_height")]
    pub height: u8,
}

fn default_height() -> u8 {
    1
}

/// A pay combo; `count` repeats a single symbol
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComboDef {
    pub symbols: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    pub pay: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScatterDef {
    #[serde(default)]
    pub comparer: ComparerKind,
    #[serde(default)]
    pub combos: Vec<ComboDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickTableDef {
    pub name: String,
    /// Hidden item symbol names
    pub items: Vec<String>,
    pub picks: usize,
    #[serde(default)]
    pub combos: Vec<ComboDef>,
}

impl PaytableDocument {
    /// Resolve symbol names into a builder
    pub fn resolve(&self) -> Result<DocumentBuilder, ParseError> {
        let reels = self
            .reels
            .iter()
            .map(|reel| -> Result<ReelProperties, ParseError> {
                let symbols = reel
                    .strip
                    .iter()
                    .map(|name| self.symbol(name))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(ReelProperties::new(ReelStrip::new(symbols), reel.height))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let paylines = self.paylines.iter().cloned().map(Payline::new).collect();

        let pay_combos = self.combo_group(self.comparer(&self.comparer)?, &self.pay_combos)?;

        let scatter_combos = match &self.scatter {
            Some(scatter) => {
                let comparer = self.comparer(&scatter.comparer)?;
                Some(self.combo_group(comparer, &scatter.combos)?)
            }
            None => None,
        };

        let mut pick_tables = PickTableGroup::new();
        for table in &self.pick_tables {
            let items = table
                .items
                .iter()
                .map(|name| self.symbol(name))
                .collect::<Result<Vec<_>, _>>()?;
            let combos = self.combo_group(comparer::exact(), &table.combos)?;
            pick_tables.add_pick_table(PickTable::new(
                table.name.clone(),
                items,
                table.picks,
                combos,
            ));
        }

        let mut triggers = PaytableTriggerGroup::new();
        for trigger in &self.triggers {
            triggers.add_trigger(trigger.clone());
        }

        Ok(DocumentBuilder {
            reel_group: ReelGroup::new(reels),
            payline_group: PaylineGroup::new(paylines),
            pay_combos,
            scatter_combos,
            pick_tables,
            triggers,
        })
    }

    fn symbol(&self, name: &str) -> Result<Symbol, ParseError> {
        self.symbols
            .iter()
            .find(|s| s.name == name)
            .map(|s| Symbol::new(s.id, s.name.clone()))
            .ok_or_else(|| ParseError::UnknownSymbol(name.to_string()))
    }

    fn comparer(&self, kind: &ComparerKind) -> Result<SharedComparer, ParseError> {
        match kind {
            ComparerKind::Exact => Ok(comparer::exact()),
            ComparerKind::Wild { wilds } => {
                let wilds = wilds
                    .iter()
                    .map(|name| self.symbol(name))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(comparer::wild(wilds))
            }
        }
    }

    fn combo_group(
        &self,
        comparer: SharedComparer,
        defs: &[ComboDef],
    ) -> Result<PayComboGroup, ParseError> {
        let mut group = PayComboGroup::new(comparer);
        for def in defs {
            let symbols = def
                .symbols
                .iter()
                .map(|name| self.symbol(name))
                .collect::<Result<Vec<_>, _>>()?;

            let mut combo = match def.count {
                None => PayCombo::new(symbols, def.pay),
                Some(count) if symbols.len() == 1 => {
                    PayCombo::repeated(symbols[0].clone(), count, def.pay)
                }
                Some(_) => {
                    return Err(ParseError::ValidationError(format!(
                        "Combo with count needs exactly one symbol, got {}",
                        symbols.len()
                    )));
                }
            };
            if let Some(trigger) = &def.trigger {
                combo = combo.with_trigger(trigger.clone());
            }
            group.add_pay_combo(combo);
        }
        Ok(group)
    }
}

/// Resolved document groups, ready to build
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    reel_group: ReelGroup,
    payline_group: PaylineGroup,
    pay_combos: PayComboGroup,
    scatter_combos: Option<PayComboGroup>,
    pick_tables: PickTableGroup,
    triggers: PaytableTriggerGroup,
}

impl PaytableBuilder for DocumentBuilder {
    fn build_reel_group(&self) -> ReelGroup {
        self.reel_group.clone()
    }

    fn build_payline_group(&self) -> PaylineGroup {
        self.payline_group.clone()
    }

    fn build_pay_combo_group(&self) -> PayComboGroup {
        self.pay_combos.clone()
    }

    fn build_scatter_combo_group(&self) -> Option<PayComboGroup> {
        self.scatter_combos.clone()
    }

    fn build_pick_table_group(&self) -> PickTableGroup {
        self.pick_tables.clone()
    }

    fn build_paytable_trigger_group(&self) -> PaytableTriggerGroup {
        self.triggers.clone()
    }
}
