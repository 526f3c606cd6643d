//! Battle phases that gate when effects fire.

/// The battle phase currently being resolved.
///
/// The orchestrator owns the current value; the ledger switches it to
/// [`EffectTiming::OnAddBuff`] / [`EffectTiming::OnRemoveBuff`] while a buff's
/// effects run and restores the previous value afterwards.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EffectTiming {
    #[default]
    None,
    OnBattleStart,
    OnTurnStart,
    OnBeforeAttack,
    OnAttack,
    OnAfterAttack,
    OnBeforeDamage,
    OnAfterDamage,
    OnTurnEnd,
    OnAddBuff,
    OnRemoveBuff,
    OnBattleEnd,
}
