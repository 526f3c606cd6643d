//! Per-unit buff ledger.
//!
//! [`BuffLedger`] owns a unit's active buffs together with the rules that
//! decide which buffs may land on it:
//!
//! - **Block rules** by id and by category, including the immunity granted by
//!   the unit's element.
//! - **Copy rules** by id and by category; a copied buff is mirrored onto the
//!   rival before the unit's own attach is attempted.
//!
//! Methods on the ledger itself are pure bookkeeping and never run effects.
//! The operations that fire attach/remove callbacks live in [`ops`] and
//! reach the ledger through a [`BattleContext`](crate::context::BattleContext)
//! so effects may re-enter them freely.
mod ops;
mod policy;

pub use ops::{
    CopyTrigger, add_buff, add_buffs, on_turn_start, remove_buff, remove_buff_where, remove_buffs,
    remove_buffs_where, try_add_buff,
};

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::buff::{Buff, BuffEffect};
use crate::types::{BuffId, BuffKey, BuffTypes, Element};

/// Active buffs and block/copy rules of one unit.
#[derive(Clone, Debug, Default)]
pub struct BuffLedger {
    element: Element,
    sub_element: Element,
    blocked_ids: BTreeSet<BuffId>,
    blocked_types: BuffTypes,
    copied_ids: BTreeSet<BuffId>,
    copied_types: BuffTypes,
    buffs: Vec<Buff>,
    next_key: u64,
    /// Instances whose remove callback is running.
    removing: BTreeSet<BuffKey>,
}

impl BuffLedger {
    /// Creates an empty ledger carrying `element`'s innate immunity.
    pub fn new(element: Element) -> Self {
        let mut ledger = Self::default();
        ledger.set_element(element);
        ledger
    }

    pub fn with_sub_element(mut self, sub_element: Element) -> Self {
        self.set_sub_element(sub_element);
        self
    }

    /// Attaches initial buffs without firing effects. Blocked buffs are dropped.
    pub fn with_buffs(mut self, buffs: impl IntoIterator<Item = Buff>) -> Self {
        for buff in buffs {
            self.add_buff_detached(buff);
        }
        self
    }

    // ========================================================================
    // Element
    // ========================================================================

    pub fn element(&self) -> Element {
        self.element
    }

    pub fn sub_element(&self) -> Element {
        self.sub_element
    }

    /// Switches the unit's element, swapping the old element's immunity entry
    /// for the new one's.
    pub fn set_element(&mut self, element: Element) {
        if let Some(old) = self.element.immunity_block_id() {
            self.blocked_ids.remove(&old);
        }
        if let Some(new) = element.immunity_block_id() {
            self.blocked_ids.insert(new);
        }
        self.element = element;
    }

    pub fn set_sub_element(&mut self, sub_element: Element) {
        self.sub_element = sub_element;
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Returns true if any active buff keeps the unit from acting.
    pub fn is_unmovable_effected(&self) -> bool {
        self.buffs.iter().any(Buff::is_unmovable)
    }

    pub fn is_movable(&self) -> bool {
        !self.is_unmovable_effected()
    }

    pub fn is_buff_blocked(&self, buff: &Buff) -> bool {
        self.is_buff_id_blocked(buff.id()) || buff.is_type(self.blocked_types)
    }

    pub fn is_buff_id_blocked(&self, id: BuffId) -> bool {
        self.blocked_ids.contains(&id)
    }

    pub fn is_buff_type_blocked(&self, types: BuffTypes) -> bool {
        self.blocked_types.is_type(types)
    }

    pub fn is_buff_copied(&self, buff: &Buff) -> bool {
        self.is_buff_id_copied(buff.id()) || buff.is_type(self.copied_types)
    }

    pub fn is_buff_id_copied(&self, id: BuffId) -> bool {
        self.copied_ids.contains(&id)
    }

    pub fn is_buff_type_copied(&self, types: BuffTypes) -> bool {
        self.copied_types.is_type(types)
    }

    pub fn blocked_ids(&self) -> impl Iterator<Item = BuffId> + '_ {
        self.blocked_ids.iter().copied()
    }

    pub fn copied_ids(&self) -> impl Iterator<Item = BuffId> + '_ {
        self.copied_ids.iter().copied()
    }

    /// Active buffs in attach order.
    pub fn buffs(&self) -> &[Buff] {
        &self.buffs
    }

    pub fn len(&self) -> usize {
        self.buffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffs.is_empty()
    }

    /// First active instance with the given catalog id.
    pub fn get_buff(&self, id: BuffId) -> Option<&Buff> {
        self.buffs.iter().find(|buff| buff.id() == id)
    }

    pub fn get_buff_by_key(&self, key: BuffKey) -> Option<&Buff> {
        self.buffs.iter().find(|buff| buff.key() == key)
    }

    /// Every active instance matching `pred`, in attach order.
    pub fn get_range_buff<'a, P>(&'a self, pred: P) -> impl Iterator<Item = &'a Buff> + 'a
    where
        P: Fn(&Buff) -> bool + 'a,
    {
        self.buffs.iter().filter(move |buff| pred(*buff))
    }

    // ========================================================================
    // Block / copy rules
    // ========================================================================

    pub fn block_buffs(&mut self, ids: impl IntoIterator<Item = BuffId>) {
        self.blocked_ids.extend(ids);
    }

    pub fn unblock_buffs(&mut self, ids: impl IntoIterator<Item = BuffId>) {
        for id in ids {
            self.blocked_ids.remove(&id);
        }
    }

    pub fn block_buff_types(&mut self, types: BuffTypes) {
        self.blocked_types.insert(types);
    }

    pub fn unblock_buff_types(&mut self, types: BuffTypes) {
        self.blocked_types.remove(types);
    }

    pub fn copy_buffs(&mut self, ids: impl IntoIterator<Item = BuffId>) {
        self.copied_ids.extend(ids);
    }

    pub fn uncopy_buffs(&mut self, ids: impl IntoIterator<Item = BuffId>) {
        for id in ids {
            self.copied_ids.remove(&id);
        }
    }

    pub fn copy_buff_types(&mut self, types: BuffTypes) {
        self.copied_types.insert(types);
    }

    pub fn uncopy_buff_types(&mut self, types: BuffTypes) {
        self.copied_types.remove(types);
    }

    // ========================================================================
    // Detached attach / detach (no battle context, no callbacks)
    // ========================================================================

    /// Attaches `buff` without a battle context: block rules apply, conflict
    /// policies, mirroring, and callbacks do not.
    pub fn add_buff_detached(&mut self, buff: Buff) -> bool {
        if self.is_buff_blocked(&buff) && !buff.is_power() {
            return false;
        }
        self.push(buff);
        true
    }

    /// Removes an instance without firing its remove callback.
    pub fn remove_buff_detached(&mut self, key: BuffKey) -> bool {
        self.detach(key).is_some()
    }

    pub(crate) fn get_buff_mut(&mut self, key: BuffKey) -> Option<&mut Buff> {
        self.buffs.iter_mut().find(|buff| buff.key() == key)
    }

    pub(crate) fn push(&mut self, mut buff: Buff) -> BuffKey {
        self.next_key += 1;
        let key = BuffKey(self.next_key);
        buff.set_key(key);
        self.buffs.push(buff);
        key
    }

    /// Marks `key` as being removed and returns its effects in run order.
    ///
    /// Returns `None` if the instance is gone or its removal already started.
    pub(crate) fn begin_removal(&mut self, key: BuffKey) -> Option<Vec<Arc<dyn BuffEffect>>> {
        if self.removing.contains(&key) {
            return None;
        }
        let effects = self.get_buff_by_key(key)?.sorted_effects();
        self.removing.insert(key);
        Some(effects)
    }

    pub(crate) fn detach(&mut self, key: BuffKey) -> Option<Buff> {
        self.removing.remove(&key);
        let index = self.buffs.iter().position(|buff| buff.key() == key)?;
        Some(self.buffs.remove(index))
    }

    /// Ages every buff by one turn and returns the keys now expired.
    pub(crate) fn tick_turns(&mut self) -> Vec<BuffKey> {
        for buff in &mut self.buffs {
            buff.turns.tick();
        }
        self.buffs
            .iter()
            .filter(|buff| buff.turns.is_expired())
            .map(Buff::key)
            .collect()
    }
}
