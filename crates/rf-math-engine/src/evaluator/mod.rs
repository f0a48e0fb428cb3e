//! Evaluators: turn a paytable plus randomness into results
//!
//! Every evaluator implements [`Evaluator`]. They differ only in how the
//! candidate symbol sequences are assembled:
//!
//! ```text
//! LineEvaluator     payline-projected symbols  → regular pay combos
//! ScatterEvaluator  one symbol per reel        → scatter pay combos
//! PickEvaluator     revealed pick items        → pick table combos
//! SlotEvaluator     line + scatter, then triggered pick tables
//! ```

mod line;
mod pick;
mod scatter;
mod slot;
mod window;

pub use line::*;
pub use pick::*;
pub use scatter::*;
pub use slot::*;
pub use window::*;

use crate::paytable::Paytable;
use crate::results::SlotResults;
use crate::rng::{RandomSource, RngError};

/// Evaluation failure for one round
///
/// No partial results are returned alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluationError {
    #[error("Random source failed: {0}")]
    Rng(#[from] RngError),

    #[error("Pick table not found: {0}")]
    UnknownPickTable(String),
}

/// Strategy that evaluates one round
pub trait Evaluator: Send + Sync {
    /// Short evaluator name for logs and reports
    fn name(&self) -> &'static str;

    /// Evaluate one round against `paytable`, drawing from `rng`
    fn evaluate(
        &self,
        paytable: &Paytable,
        rng: &mut dyn RandomSource,
    ) -> Result<SlotResults, EvaluationError>;
}

/// Boxed evaluator for dynamic dispatch
pub type BoxedEvaluator = Box<dyn Evaluator + 'static>;
