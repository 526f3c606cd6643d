//! Buff categories and capability flags.

use bitflags::bitflags;

bitflags! {
    /// Categories a buff belongs to.
    ///
    /// A buff may sit in several categories at once. Category-wide block and
    /// copy rules match when the buff shares at least one bit with the rule.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct BuffTypes: u16 {
        /// Beneficial to the holder.
        const POSITIVE     = 1 << 0;
        /// Harmful to the holder.
        const NEGATIVE     = 1 << 1;
        /// Crowd control (sleep, paralysis, fear, ...).
        const ABNORMAL     = 1 << 2;
        /// Damage over time (poison, burn, bleed, ...).
        const UNHEALTHY    = 1 << 3;
        /// Stat stage changes.
        const STAT_CHANGE  = 1 << 4;
        /// Marks placed by skills and consumed later.
        const MARK         = 1 << 5;
        /// Battlefield-wide conditions attached to a unit.
        const FIELD        = 1 << 6;
        /// Engine-internal bookkeeping buffs (immunities, counters).
        const SPECIAL      = 1 << 7;
    }
}

bitflags! {
    /// Capabilities declared by a buff's catalog entry.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct BuffFlags: u8 {
        /// Forced buff: ignores block rules and is never mirrored.
        const POWER     = 1 << 0;
        /// Holder cannot act while this buff is active.
        const UNMOVABLE = 1 << 1;
    }
}

impl BuffTypes {
    /// Returns true if any category in `other` is shared with `self`.
    #[inline]
    pub fn is_type(self, other: BuffTypes) -> bool {
        self.intersects(other)
    }
}
