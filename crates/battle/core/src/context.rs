//! Capabilities the ledger needs from the battle orchestrator.
//!
//! The ledger never holds references to other units. Whenever it must reach a
//! unit (its own ledger during a callback, or the rival when mirroring a
//! buff), it asks the orchestrator through these traits. Every access is a
//! short borrow, so effects running inside a callback are free to mutate any
//! ledger, including the one that triggered them.

use crate::ledger::BuffLedger;
use crate::types::{EffectTiming, UnitId};

/// Resolves units and their ledgers by id.
pub trait UnitProvider {
    /// Unit standing opposite `unit`, if any.
    fn rival_of(&self, unit: UnitId) -> Option<UnitId>;

    fn ledger(&self, unit: UnitId) -> Option<&BuffLedger>;

    fn ledger_mut(&mut self, unit: UnitId) -> Option<&mut BuffLedger>;
}

/// Battle-wide state consulted while resolving buffs.
pub trait BattleContext: UnitProvider {
    /// Current turn number, starting at [`BattleConfig::FIRST_TURN`].
    ///
    /// [`BattleConfig::FIRST_TURN`]: crate::config::BattleConfig::FIRST_TURN
    fn turn(&self) -> u32;

    fn phase(&self) -> EffectTiming;

    fn set_phase(&mut self, phase: EffectTiming);
}

/// Runs `f` with the battle phase switched to `phase`, restoring the previous
/// phase afterwards.
///
/// Nested calls save and restore their own value, so the outer phase is
/// intact once `f` returns regardless of what `f` did to it.
pub fn with_phase<R>(
    ctx: &mut dyn BattleContext,
    phase: EffectTiming,
    f: impl FnOnce(&mut dyn BattleContext) -> R,
) -> R {
    let saved = ctx.phase();
    ctx.set_phase(phase);
    tracing::trace!("phase {} -> {}", saved, phase);

    let result = f(&mut *ctx);

    ctx.set_phase(saved);
    tracing::trace!("phase {} restored", saved);
    result
}
