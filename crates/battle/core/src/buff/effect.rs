//! Effect payloads carried by buffs.

use std::fmt;

use crate::context::BattleContext;
use crate::types::UnitId;

/// How an effect is asked to apply itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct ApplyMode {
    /// Skip the effect's own timing/condition gate.
    pub forced: bool,
    /// Undo a previous application instead of applying.
    pub revert: bool,
}

impl ApplyMode {
    /// Mode used by buff attach/remove callbacks.
    pub const FORCED: Self = Self {
        forced: true,
        revert: false,
    };
}

/// A triggered effect owned by a buff.
///
/// Effects run synchronously and may re-enter the ledger operations on any
/// unit (including the one currently being processed) through `ctx`.
///
/// Effects run in ascending [`priority`](BuffEffect::priority) order; effects
/// with equal priority keep their declaration order.
pub trait BuffEffect: fmt::Debug {
    /// Returns the priority of this effect. Lower values execute first.
    /// Default priority is 0.
    fn priority(&self) -> i32 {
        0
    }

    /// Forced effects make their buff bypass block rules.
    fn is_power(&self) -> bool {
        false
    }

    /// Checks the effect's condition (unless `mode.forced`) and applies it to
    /// `unit`. Returns true if the effect did something.
    fn check_and_apply(&self, unit: UnitId, ctx: &mut dyn BattleContext, mode: ApplyMode) -> bool;
}
