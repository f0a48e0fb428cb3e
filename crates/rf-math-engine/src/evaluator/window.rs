//! Reel window: the symbols showing after one spin

use crate::paytable::Payline;
use crate::rng::{RandomSource, RngError};
use crate::symbols::{ReelGroup, Symbol};

/// Stops drawn for every reel of a reel group
#[derive(Debug, Clone)]
pub struct ReelWindow<'a> {
    reel_group: &'a ReelGroup,
    stops: Vec<usize>,
}

impl<'a> ReelWindow<'a> {
    /// Draw one stop per reel, left to right, bounded by each strip length
    pub fn spin(reel_group: &'a ReelGroup, rng: &mut dyn RandomSource) -> Result<Self, RngError> {
        let stops = reel_group
            .reels
            .iter()
            .map(|reel| rng.next(reel.reel_strip.len()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { reel_group, stops })
    }

    /// Window at fixed stops (forced outcomes, tests)
    pub fn from_stops(reel_group: &'a ReelGroup, stops: Vec<usize>) -> Self {
        Self { reel_group, stops }
    }

    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Symbol shown on `reel` at visible `row` (row 0 = stop position)
    pub fn symbol(&self, reel: usize, row: usize) -> Option<&'a Symbol> {
        let props = self.reel_group.reels.get(reel)?;
        let stop = *self.stops.get(reel)?;
        props.reel_strip.symbol_at(stop + row)
    }

    /// One symbol per reel, at each reel's stop
    pub fn scatter_symbols(&self) -> Vec<Symbol> {
        (0..self.stops.len())
            .filter_map(|reel| self.symbol(reel, 0).cloned())
            .collect()
    }

    /// Symbols on a payline, left to right
    pub fn payline_symbols(&self, payline: &Payline) -> Vec<Symbol> {
        payline
            .positions
            .iter()
            .enumerate()
            .filter_map(|(reel, &row)| self.symbol(reel, row as usize).cloned())
            .collect()
    }
}
