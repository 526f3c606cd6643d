//! Ledger operations that run buff callbacks.
//!
//! Every function here takes the battle context instead of a ledger
//! reference. The target ledger is looked up for each short read or write,
//! and never borrowed while effects run, so an effect may add or remove buffs
//! on any unit (including the one being processed) from inside a callback.

use std::sync::Arc;

use super::policy::{self, Resolution};
use crate::buff::{ApplyMode, Buff, BuffEffect};
use crate::config::BattleConfig;
use crate::context::{BattleContext, with_phase};
use crate::error::{AttachOutcome, BuffRejection};
use crate::types::{BuffKey, EffectTiming, UnitId};

/// Whether an attach may mirror the buff onto the rival.
///
/// Mirrored attaches always run with [`CopyTrigger::Disabled`], which bounds
/// mirroring to a single hop between two units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CopyTrigger {
    #[default]
    Enabled,
    Disabled,
}

impl CopyTrigger {
    #[inline]
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

/// Attaches `buff` to `unit`. Returns true if it was attached or merged.
///
/// See [`try_add_buff`] for the full resolution order.
pub fn add_buff(
    ctx: &mut dyn BattleContext,
    unit: UnitId,
    buff: Buff,
    copy: CopyTrigger,
) -> bool {
    try_add_buff(ctx, unit, buff, copy).is_ok()
}

/// Attaches `buff` to `unit`, reporting what happened.
///
/// Resolution order:
/// 1. With `copy` enabled, a non-power buff matching the unit's copy rules is
///    first mirrored onto the rival (copy disabled). This happens whether or
///    not the unit's own attach later succeeds.
/// 2. A non-power buff matching the unit's block rules is rejected.
/// 3. Without an active instance of the same id the buff is attached.
/// 4. Otherwise the incoming buff's [`CopyHandleType`] decides.
///
/// [`CopyHandleType`]: crate::types::CopyHandleType
pub fn try_add_buff(
    ctx: &mut dyn BattleContext,
    unit: UnitId,
    buff: Buff,
    copy: CopyTrigger,
) -> Result<AttachOutcome, BuffRejection> {
    let id = buff.id();
    let power = buff.is_power();

    let copied = ctx
        .ledger(unit)
        .ok_or(BuffRejection::UnknownUnit(unit))?
        .is_buff_copied(&buff);
    if copy.is_enabled() && copied && !power {
        mirror_to_rival(ctx, unit, &buff);
    }

    // Re-read: the mirrored attach may have run effects touching this unit.
    let ledger = ctx.ledger(unit).ok_or(BuffRejection::UnknownUnit(unit))?;
    if !power && ledger.is_buff_blocked(&buff) {
        tracing::debug!("{} blocked {}", unit, id);
        return Err(BuffRejection::Blocked { id });
    }

    let resolution = match ledger.get_buff(id) {
        Some(existing) => policy::resolve(existing, &buff),
        None => Resolution::Append,
    };

    match resolution {
        Resolution::Append => attach_new(ctx, unit, buff).map(AttachOutcome::Attached),
        Resolution::Replace(removed) => {
            remove_buff(ctx, unit, removed);
            let attached = attach_new(ctx, unit, buff)?;
            tracing::debug!("{} replaced {} {} with {}", unit, id, removed, attached);
            Ok(AttachOutcome::Replaced { removed, attached })
        }
        Resolution::Stack(key) => {
            let Some(existing) = ctx
                .ledger_mut(unit)
                .and_then(|ledger| ledger.get_buff_mut(key))
            else {
                return attach_new(ctx, unit, buff).map(AttachOutcome::Attached);
            };
            existing.value = existing.value.saturating_add(buff.value);
            let value = existing.value;
            tracing::debug!("{} stacked {} {} to {}", unit, id, key, value);

            run_callback(ctx, unit, &buff.sorted_effects(), EffectTiming::OnAddBuff);
            Ok(AttachOutcome::Stacked { key, value })
        }
        Resolution::Reject(rejection) => {
            tracing::debug!("{} rejected {}: {}", unit, id, rejection);
            Err(rejection)
        }
    }
}

/// Attaches every buff in order. Returns true if any of them stuck.
pub fn add_buffs(
    ctx: &mut dyn BattleContext,
    unit: UnitId,
    buffs: impl IntoIterator<Item = Buff>,
) -> bool {
    let mut added = false;
    for buff in buffs {
        added |= add_buff(ctx, unit, buff, CopyTrigger::Enabled);
    }
    added
}

/// Fires the remove callback of the instance `key` on `unit`, then detaches it.
///
/// Returns true if the instance was still present when detaching. Unknown
/// keys, and keys whose removal is already running further up the call stack,
/// fire nothing and return false.
pub fn remove_buff(ctx: &mut dyn BattleContext, unit: UnitId, key: BuffKey) -> bool {
    let Some(effects) = ctx
        .ledger_mut(unit)
        .and_then(|ledger| ledger.begin_removal(key))
    else {
        return false;
    };

    run_callback(ctx, unit, &effects, EffectTiming::OnRemoveBuff);

    let Some(buff) = ctx.ledger_mut(unit).and_then(|ledger| ledger.detach(key)) else {
        return false;
    };
    tracing::debug!("{} removed {} {}", unit, buff.id(), key);
    true
}

/// Removes the first active instance matching `pred`.
pub fn remove_buff_where(
    ctx: &mut dyn BattleContext,
    unit: UnitId,
    pred: impl Fn(&Buff) -> bool,
) -> bool {
    let key = ctx
        .ledger(unit)
        .and_then(|ledger| ledger.buffs().iter().find(|&buff| pred(buff)).map(Buff::key));
    key.is_some_and(|key| remove_buff(ctx, unit, key))
}

/// Removes every listed instance. Returns true if any was removed.
pub fn remove_buffs(
    ctx: &mut dyn BattleContext,
    unit: UnitId,
    keys: impl IntoIterator<Item = BuffKey>,
) -> bool {
    let mut removed = false;
    for key in keys {
        removed |= remove_buff(ctx, unit, key);
    }
    removed
}

/// Removes every active instance matching `pred` at the time of the call.
pub fn remove_buffs_where(
    ctx: &mut dyn BattleContext,
    unit: UnitId,
    pred: impl Fn(&Buff) -> bool,
) -> bool {
    let keys: Vec<BuffKey> = match ctx.ledger(unit) {
        Some(ledger) => ledger
            .buffs()
            .iter()
            .filter(|&buff| pred(buff))
            .map(Buff::key)
            .collect(),
        None => return false,
    };
    remove_buffs(ctx, unit, keys)
}

/// Turn-start sweep: ages every buff on `unit` and removes the expired ones.
///
/// Nothing ages on the opening turn.
pub fn on_turn_start(ctx: &mut dyn BattleContext, unit: UnitId) {
    if BattleConfig::is_grace_turn(ctx.turn()) {
        return;
    }

    let Some(ledger) = ctx.ledger_mut(unit) else {
        return;
    };
    let expired = ledger.tick_turns();
    if !expired.is_empty() {
        tracing::debug!("{} has {} expired buff(s)", unit, expired.len());
    }
    remove_buffs(ctx, unit, expired);
}

fn mirror_to_rival(ctx: &mut dyn BattleContext, unit: UnitId, buff: &Buff) {
    let Some(rival) = ctx.rival_of(unit) else {
        tracing::warn!("{} copies {} but has no rival", unit, buff.id());
        return;
    };

    match try_add_buff(ctx, rival, buff.clone(), CopyTrigger::Disabled) {
        Ok(outcome) => {
            tracing::debug!("{} mirrored {} onto {}: {:?}", unit, buff.id(), rival, outcome);
        }
        Err(rejection) => {
            tracing::debug!("{} could not mirror onto {}: {}", unit, rival, rejection);
        }
    }
}

fn attach_new(
    ctx: &mut dyn BattleContext,
    unit: UnitId,
    buff: Buff,
) -> Result<BuffKey, BuffRejection> {
    let id = buff.id();
    let effects = buff.sorted_effects();
    let key = ctx
        .ledger_mut(unit)
        .ok_or(BuffRejection::UnknownUnit(unit))?
        .push(buff);
    tracing::debug!("{} attached {} as {}", unit, id, key);

    run_callback(ctx, unit, &effects, EffectTiming::OnAddBuff);
    Ok(key)
}

/// Runs a snapshot of a buff's effects under `timing` in forced mode.
fn run_callback(
    ctx: &mut dyn BattleContext,
    unit: UnitId,
    effects: &[Arc<dyn BuffEffect>],
    timing: EffectTiming,
) {
    with_phase(ctx, timing, |ctx| {
        for effect in effects {
            effect.check_and_apply(unit, &mut *ctx, ApplyMode::FORCED);
        }
    });
}
