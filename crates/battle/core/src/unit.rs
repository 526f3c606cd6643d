//! Per-combatant bundle of the ledger and the rotation.

use crate::ledger::BuffLedger;
use crate::skill::SkillRotation;
use crate::types::{Element, UnitId};

/// One pet on the battlefield, as far as buffs and skill choice go.
///
/// Orchestrators usually keep their combatants in a collection and implement
/// [`UnitProvider`](crate::context::UnitProvider) by looking them up by id.
#[derive(Clone, Debug)]
pub struct Combatant {
    pub id: UnitId,
    pub buffs: BuffLedger,
    pub skills: SkillRotation,
}

impl Combatant {
    pub fn new(id: UnitId, element: Element, skills: SkillRotation) -> Self {
        Self {
            id,
            buffs: BuffLedger::new(element),
            skills,
        }
    }

    pub fn with_ledger(mut self, buffs: BuffLedger) -> Self {
        self.buffs = buffs;
        self
    }

    /// Returns true unless an active buff keeps the unit from acting.
    pub fn is_movable(&self) -> bool {
        self.buffs.is_movable()
    }
}
