//! # rf-math-engine: Paytable evaluation for ReelForge slot games
//!
//! Decides, for one round, which symbol combinations pay and how much.
//! The engine reads an immutable [`Paytable`] and pulls numbers from a
//! [`RandomSource`]; everything it hands back is a [`SlotResults`].
//!
//! ## Features
//!
//! - **Pay combos**: ordered symbol requirements with prefix matching
//! - **Pluggable comparers**: exact or wild-substituting symbol policies
//! - **Evaluators**: line, scatter, pick bonus and a composite slot round
//! - **Replay randomness**: deterministic sources for reproducible rounds
//! - **Documents**: paytables loaded from JSON or YAML
//! - **Simulation**: parallel batch runs for hit rate and payout stats
//!
//! ## Architecture
//!
//! ```text
//! PaytableBuilder / DocumentParser
//!     │
//!     v
//! Paytable
//!     ├── ReelGroup (strips × visible rows)
//!     ├── PaylineGroup (row per reel)
//!     ├── PayComboGroup (regular, scatter)
//!     ├── PickTableGroup
//!     └── PaytableTriggerGroup
//!           │
//!           v
//! Evaluator + RandomSource → SlotResults
//! ```

pub mod builder;
pub mod combo;
pub mod comparer;
pub mod evaluator;
pub mod parser;
pub mod paytable;
pub mod pick;
pub mod results;
pub mod rng;
pub mod sim;
pub mod symbols;

pub use builder::*;
pub use combo::*;
pub use comparer::*;
pub use evaluator::*;
pub use parser::*;
pub use paytable::*;
pub use pick::*;
pub use results::*;
pub use rng::*;
pub use sim::*;
pub use symbols::*;
