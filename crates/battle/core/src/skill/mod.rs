//! Skills and per-unit skill rotation.
mod rotation;

pub use rotation::SkillRotation;

use std::fmt;

use crate::config::BattleConfig;

/// Catalog identifier of a skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillId(pub u32);

impl SkillId {
    /// Reserved id of the "do nothing" placeholder.
    pub const NOOP: Self = Self(BattleConfig::NOOP_SKILL_ID);

    #[inline]
    pub const fn is_noop(self) -> bool {
        self.0 == Self::NOOP.0
    }
}

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "skill#{}", self.0)
    }
}

/// A selectable action, as seen by the rotation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
    /// Anger required to use the skill.
    pub anger: u32,
    /// Already picked within the current decision context.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_selected: bool,
}

impl Skill {
    pub fn new(id: SkillId, name: impl Into<String>, anger: u32) -> Self {
        Self {
            id,
            name: name.into(),
            anger,
            is_selected: false,
        }
    }

    /// The placeholder returned when nothing else is usable.
    pub fn noop() -> Self {
        Self::new(SkillId::NOOP, "noop", 0)
    }

    #[inline]
    pub fn is_noop(&self) -> bool {
        self.id.is_noop()
    }

    /// Returns true if the skill can be picked with `anger` available.
    #[inline]
    pub fn is_usable(&self, anger: u32) -> bool {
        self.anger <= anger && !self.is_selected
    }
}
