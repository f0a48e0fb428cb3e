//! Symbol definitions and reel strips

use std::fmt;

use serde::{Deserialize, Serialize};

/// A game symbol
///
/// Two symbols are equal when both id and name are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol {
    /// Symbol ID
    pub id: u32,
    /// Symbol name (e.g., "AA", "WILD", "SCATTER")
    pub name: String,
}

impl Symbol {
    /// Create a symbol
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A physical reel strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReelStrip {
    /// Symbols in strip order
    pub symbols: Vec<Symbol>,
}

impl ReelStrip {
    /// Create a new reel strip
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    /// Get symbol at position (wraps around)
    pub fn symbol_at(&self, position: usize) -> Option<&Symbol> {
        if self.symbols.is_empty() {
            return None;
        }
        self.symbols.get(position % self.symbols.len())
    }

    /// Get total strip length
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Check whether the strip carries the given symbol
    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.symbols.contains(symbol)
    }
}

/// A reel: its strip plus the number of rows shown after a stop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReelProperties {
    pub reel_strip: ReelStrip,
    /// Visible rows (1 = single-line reel)
    pub height: u8,
}

impl ReelProperties {
    pub fn new(reel_strip: ReelStrip, height: u8) -> Self {
        Self { reel_strip, height }
    }

    /// Single visible row
    pub fn single_row(reel_strip: ReelStrip) -> Self {
        Self::new(reel_strip, 1)
    }
}

/// All reels of a game, left to right
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReelGroup {
    pub reels: Vec<ReelProperties>,
}

impl ReelGroup {
    pub fn new(reels: Vec<ReelProperties>) -> Self {
        Self { reels }
    }

    /// Add a reel to the right end
    pub fn add_reel(&mut self, reel: ReelProperties) {
        self.reels.push(reel);
    }

    /// Number of reels
    pub fn len(&self) -> usize {
        self.reels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reels.is_empty()
    }

    /// Check whether any reel carries the given symbol
    pub fn contains_symbol(&self, symbol: &Symbol) -> bool {
        self.reels.iter().any(|r| r.reel_strip.contains(symbol))
    }

    /// Distinct symbols across all strips, in first-seen order
    pub fn distinct_symbols(&self) -> Vec<Symbol> {
        let mut seen: Vec<Symbol> = Vec::new();
        for symbol in self.reels.iter().flat_map(|r| r.reel_strip.symbols.iter()) {
            if !seen.contains(symbol) {
                seen.push(symbol.clone());
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(names: &[&str]) -> ReelStrip {
        ReelStrip::new(
            names
                .iter()
                .enumerate()
                .map(|(i, n)| Symbol::new(i as u32, *n))
                .collect(),
        )
    }

    #[test]
    fn test_symbol_equality_uses_id_and_name() {
        assert_eq!(Symbol::new(0, "AA"), Symbol::new(0, "AA"));
        assert_ne!(Symbol::new(0, "AA"), Symbol::new(1, "AA"));
        assert_ne!(Symbol::new(0, "AA"), Symbol::new(0, "BB"));
        assert_eq!(Symbol::new(3, "WILD").to_string(), "WILD");
    }

    #[test]
    fn test_reel_strip_wrap() {
        let strip = strip(&["AA", "BB", "CC", "DD", "EE"]);
        assert_eq!(strip.symbol_at(0).map(|s| s.name.as_str()), Some("AA"));
        assert_eq!(strip.symbol_at(5).map(|s| s.name.as_str()), Some("AA")); // Wraps
        assert_eq!(strip.symbol_at(7).map(|s| s.name.as_str()), Some("CC")); // Wraps
        assert!(ReelStrip::new(Vec::new()).symbol_at(0).is_none());
    }

    #[test]
    fn test_distinct_symbols_keep_first_seen_order() {
        let group = ReelGroup::new(vec![
            ReelProperties::single_row(strip(&["AA", "BB"])),
            ReelProperties::single_row(ReelStrip::new(vec![
                Symbol::new(1, "BB"),
                Symbol::new(2, "CC"),
            ])),
        ]);
        let names: Vec<_> = group.distinct_symbols().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["AA", "BB", "CC"]);
        assert!(group.contains_symbol(&Symbol::new(2, "CC")));
        assert!(!group.contains_symbol(&Symbol::new(9, "ZZ")));
    }
}
