//! Paytable builders
//!
//! A builder produces each group of a paytable separately; [`PaytableBuilder::build`]
//! assembles and validates them.
//!
//! ## Usage
//!
//! ```rust
//! use rf_math_engine::{ClassicPaytableBuilder, PaytableBuilder};
//!
//! let paytable = ClassicPaytableBuilder::new().build().unwrap();
//! assert_eq!(paytable.reel_group().len(), 3);
//! ```

use crate::combo::{PayCombo, PayComboGroup};
use crate::paytable::{Payline, PaylineGroup, Paytable, PaytableError, PaytableParts};
use crate::pick::{PaytableTrigger, PaytableTriggerGroup, PickTable, PickTableGroup};
use crate::symbols::{ReelGroup, ReelProperties, ReelStrip, Symbol};

/// Produces the pieces of a paytable
pub trait PaytableBuilder {
    fn build_reel_group(&self) -> ReelGroup;

    fn build_payline_group(&self) -> PaylineGroup;

    /// Regular (line) pay combos
    fn build_pay_combo_group(&self) -> PayComboGroup;

    /// Scatter pay combos; `None` when the game has no scatters
    fn build_scatter_combo_group(&self) -> Option<PayComboGroup> {
        None
    }

    fn build_pick_table_group(&self) -> PickTableGroup {
        PickTableGroup::default()
    }

    fn build_paytable_trigger_group(&self) -> PaytableTriggerGroup {
        PaytableTriggerGroup::default()
    }

    /// Assemble and validate
    fn build(&self) -> Result<Paytable, PaytableError> {
        Paytable::from_parts(PaytableParts {
            reel_group: self.build_reel_group(),
            payline_group: self.build_payline_group(),
            pay_combo_group: self.build_pay_combo_group(),
            scatter_combo_group: self.build_scatter_combo_group(),
            pick_table_group: self.build_pick_table_group(),
            trigger_group: self.build_paytable_trigger_group(),
        })
    }
}

/// Small 3×3 reference game
///
/// Three reels with the strip `AA, BB, CC` (plus `SCAT` on the last
/// position of every strip), three visible rows, straight paylines plus a
/// V, three-of-a-kind line pays, scatter pays and a chest pick bonus
/// launched by three scatters.
#[derive(Debug, Clone, Default)]
pub struct ClassicPaytableBuilder;

impl ClassicPaytableBuilder {
    pub const AA: u32 = 0;
    pub const BB: u32 = 1;
    pub const CC: u32 = 2;
    pub const SCAT: u32 = 3;
    pub const GOLD: u32 = 10;
    pub const SILVER: u32 = 11;
    pub const COAL: u32 = 12;

    pub const PICK_TABLE: &'static str = "Chests";
    pub const PICK_TRIGGER: &'static str = "ChestBonus";

    pub fn new() -> Self {
        Self
    }

    /// Reel symbols, in strip order
    pub fn symbols() -> [Symbol; 4] {
        [
            Symbol::new(Self::AA, "AA"),
            Symbol::new(Self::BB, "BB"),
            Symbol::new(Self::CC, "CC"),
            Symbol::new(Self::SCAT, "SCAT"),
        ]
    }

    /// Hidden pick items: gold, silver, coal
    pub fn pick_symbols() -> [Symbol; 3] {
        [
            Symbol::new(Self::GOLD, "GOLD"),
            Symbol::new(Self::SILVER, "SILVER"),
            Symbol::new(Self::COAL, "COAL"),
        ]
    }
}

impl PaytableBuilder for ClassicPaytableBuilder {
    fn build_reel_group(&self) -> ReelGroup {
        let strip = ReelStrip::new(Self::symbols().to_vec());
        ReelGroup::new(vec![ReelProperties::new(strip, 3); 3])
    }

    fn build_payline_group(&self) -> PaylineGroup {
        let mut group = PaylineGroup::straight_lines(3, 3);
        group.add_payline(Payline::v_shape(3));
        group
    }

    fn build_pay_combo_group(&self) -> PayComboGroup {
        let [aa, bb, cc, _] = Self::symbols();
        PayComboGroup::exact()
            .with_pay_combo(PayCombo::repeated(aa, 3, 100))
            .with_pay_combo(PayCombo::repeated(bb, 3, 50))
            .with_pay_combo(PayCombo::repeated(cc, 3, 20))
    }

    fn build_scatter_combo_group(&self) -> Option<PayComboGroup> {
        let [.., scat] = Self::symbols();
        Some(
            PayComboGroup::exact()
                .with_pay_combo(PayCombo::repeated(scat, 3, 10).with_trigger(Self::PICK_TRIGGER)),
        )
    }

    fn build_pick_table_group(&self) -> PickTableGroup {
        let [gold, silver, coal] = Self::pick_symbols();

        let combos = PayComboGroup::exact()
            .with_pay_combo(PayCombo::repeated(gold.clone(), 2, 500))
            .with_pay_combo(PayCombo::repeated(gold.clone(), 1, 50))
            .with_pay_combo(PayCombo::repeated(silver.clone(), 1, 20));

        let mut group = PickTableGroup::new();
        group.add_pick_table(PickTable::new(
            Self::PICK_TABLE,
            vec![gold.clone(), silver.clone(), coal.clone(), gold, silver, coal],
            2,
            combos,
        ));
        group
    }

    fn build_paytable_trigger_group(&self) -> PaytableTriggerGroup {
        let mut group = PaytableTriggerGroup::new();
        group.add_trigger(PaytableTrigger::new(Self::PICK_TRIGGER, Self::PICK_TABLE));
        group
    }
}
