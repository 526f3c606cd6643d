//! Buff resolution and skill selection for turn-based pet battles.
//!
//! `battle-core` owns two per-combatant rule engines:
//!
//! - [`BuffLedger`] decides which status effects land on a unit, reconciles
//!   same-id conflicts, applies elemental immunities, mirrors copied buffs
//!   onto the rival, and ages buffs at turn start.
//! - [`SkillRotation`] picks a unit's default skill and lists the skills it
//!   can currently afford.
//!
//! The battle orchestrator stays outside this crate and is reached through
//! the [`BattleContext`] and [`UnitProvider`] traits. Operations that fire
//! buff callbacks live in [`ledger`] as functions over the context.
pub mod buff;
pub mod config;
pub mod context;
pub mod error;
pub mod ledger;
pub mod skill;
pub mod types;
pub mod unit;

pub use buff::{ApplyMode, Buff, BuffEffect, BuffInfo};
pub use config::BattleConfig;
pub use context::{BattleContext, UnitProvider, with_phase};
pub use error::{AttachOutcome, BuffRejection};
pub use ledger::{BuffLedger, CopyTrigger};
pub use skill::{Skill, SkillId, SkillRotation};
pub use types::{
    BuffFlags, BuffId, BuffKey, BuffTypes, CopyHandleType, EffectTiming, Element, Turns, UnitId,
};
pub use unit::Combatant;
