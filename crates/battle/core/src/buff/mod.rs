//! Buff instances, their catalog metadata, and the effects they trigger.
//!
//! A [`Buff`] is one live modifier: a shared [`BuffInfo`] catalog entry plus
//! the per-instance remaining turns and magnitude. Cloning a buff yields an
//! independent instance; effect payloads are immutable and shared.
mod effect;
mod info;

pub use effect::{ApplyMode, BuffEffect};
pub use info::BuffInfo;

use std::sync::Arc;

use crate::types::{BuffId, BuffKey, BuffTypes, Turns};

/// A live modifier attached (or about to be attached) to a unit.
#[derive(Clone, Debug)]
pub struct Buff {
    info: Arc<BuffInfo>,
    effects: Vec<Arc<dyn BuffEffect>>,
    key: BuffKey,
    pub turns: Turns,
    pub value: i32,
}

impl Buff {
    /// Creates an instance with the catalog's default turns and value.
    pub fn new(info: Arc<BuffInfo>) -> Self {
        Self {
            turns: info.default_turns,
            value: info.default_value,
            effects: Vec::new(),
            key: BuffKey::default(),
            info,
        }
    }

    pub fn with_turns(mut self, turns: Turns) -> Self {
        self.turns = turns;
        self
    }

    pub fn with_value(mut self, value: i32) -> Self {
        self.value = value;
        self
    }

    pub fn with_effect(mut self, effect: Arc<dyn BuffEffect>) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn with_effects(mut self, effects: impl IntoIterator<Item = Arc<dyn BuffEffect>>) -> Self {
        self.effects.extend(effects);
        self
    }

    #[inline]
    pub fn id(&self) -> BuffId {
        self.info.id
    }

    #[inline]
    pub fn info(&self) -> &BuffInfo {
        &self.info
    }

    /// Ledger handle of this instance. Meaningful only once attached.
    #[inline]
    pub fn key(&self) -> BuffKey {
        self.key
    }

    pub(crate) fn set_key(&mut self, key: BuffKey) {
        self.key = key;
    }

    pub fn effects(&self) -> &[Arc<dyn BuffEffect>] {
        &self.effects
    }

    /// Effects in execution order: ascending priority, declaration order on ties.
    pub fn sorted_effects(&self) -> Vec<Arc<dyn BuffEffect>> {
        let mut effects = self.effects.clone();
        effects.sort_by_key(|effect| effect.priority());
        effects
    }

    /// Power buffs bypass block rules and are never mirrored.
    pub fn is_power(&self) -> bool {
        self.info.is_power() || self.effects.iter().any(|effect| effect.is_power())
    }

    pub fn is_unmovable(&self) -> bool {
        self.info.is_unmovable()
    }

    /// Returns true if this buff belongs to any category in `types`.
    pub fn is_type(&self, types: BuffTypes) -> bool {
        self.info.types.is_type(types)
    }
}
