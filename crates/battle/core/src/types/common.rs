use std::fmt;

use crate::config::BattleConfig;

/// Identifier of a combatant standing on the battlefield.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitId(pub u32);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unit#{}", self.0)
    }
}

/// Catalog identifier of a buff definition.
///
/// Several active instances may share one `BuffId`; individual instances are
/// addressed by [`BuffKey`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuffId(pub u32);

impl fmt::Display for BuffId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "buff#{}", self.0)
    }
}

/// Ledger-local handle of one attached buff instance.
///
/// Keys are assigned on attach and never reused by the same ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BuffKey(pub u64);

impl fmt::Display for BuffKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Remaining-turns counter of a buff.
///
/// [`Turns::PERMANENT`] marks a buff that never ages. Zero means "expires at
/// the next turn-start sweep"; other negative values are inert and never age.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turns(pub i32);

impl Turns {
    pub const PERMANENT: Self = Self(BattleConfig::PERMANENT_TURNS);
    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn is_permanent(self) -> bool {
        self.0 == BattleConfig::PERMANENT_TURNS
    }

    #[inline]
    pub const fn is_expired(self) -> bool {
        self.0 == 0
    }

    /// Ordering key used when two durations compete: permanent sorts above
    /// every finite count.
    pub const fn duration_key(self) -> i32 {
        if self.is_permanent() { i32::MAX } else { self.0 }
    }

    /// Ages the counter by one turn. Returns true if it changed.
    pub fn tick(&mut self) -> bool {
        if self.0 > 0 {
            self.0 -= 1;
            true
        } else {
            false
        }
    }
}

impl fmt::Display for Turns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_permanent() {
            f.write_str("permanent")
        } else {
            write!(f, "{} turn(s)", self.0)
        }
    }
}
