//! Rejection reasons and outcomes of buff attach attempts.
//!
//! The boolean ledger operations collapse these into `true`/`false`; the
//! `try_*` variants surface them so orchestrators can log or display why a
//! buff did not stick. None of them indicate a broken battle state: an attach
//! either fully happens or leaves everything untouched.

use crate::types::{BuffId, BuffKey, Turns, UnitId};

/// Why an incoming buff was not attached.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuffRejection {
    #[error("{0} is not on the battlefield")]
    UnknownUnit(UnitId),

    #[error("{id} is blocked on this unit")]
    Blocked { id: BuffId },

    #[error("{id} is already active and refuses duplicates")]
    Duplicate { id: BuffId },

    #[error("{id} would cut an active instance short ({existing} > {incoming})")]
    ShorterDuration {
        id: BuffId,
        existing: Turns,
        incoming: Turns,
    },

    #[error("{id} is already stacked to {value} (max {max})")]
    StackCapped { id: BuffId, value: i32, max: i32 },

    #[error("{id} value {incoming} does not exceed active value {existing}")]
    NotGreater {
        id: BuffId,
        existing: i32,
        incoming: i32,
    },

    #[error("{id} value {incoming} is not below active value {existing}")]
    NotLess {
        id: BuffId,
        existing: i32,
        incoming: i32,
    },
}

impl BuffRejection {
    /// Returns a static identifier for this rejection, useful for metrics and tests.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownUnit(_) => "UNKNOWN_UNIT",
            Self::Blocked { .. } => "BLOCKED",
            Self::Duplicate { .. } => "DUPLICATE",
            Self::ShorterDuration { .. } => "SHORTER_DURATION",
            Self::StackCapped { .. } => "STACK_CAPPED",
            Self::NotGreater { .. } => "NOT_GREATER",
            Self::NotLess { .. } => "NOT_LESS",
        }
    }

    /// Returns true if the rejection came from a same-id conflict policy
    /// rather than from block rules or a missing unit.
    pub const fn is_policy_conflict(&self) -> bool {
        !matches!(self, Self::UnknownUnit(_) | Self::Blocked { .. })
    }
}

/// What a successful attach did to the ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttachOutcome {
    /// A new instance was appended.
    Attached(BuffKey),
    /// An existing instance was removed and the incoming one appended.
    Replaced { removed: BuffKey, attached: BuffKey },
    /// The incoming value was folded into an existing instance.
    Stacked { key: BuffKey, value: i32 },
}

impl AttachOutcome {
    /// Key of the instance now carrying the incoming buff.
    pub const fn key(&self) -> BuffKey {
        match *self {
            Self::Attached(key) => key,
            Self::Replaced { attached, .. } => attached,
            Self::Stacked { key, .. } => key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_conflicts_are_told_apart_from_blocks() {
        let id = BuffId(9);
        assert!(!BuffRejection::Blocked { id }.is_policy_conflict());
        assert!(!BuffRejection::UnknownUnit(UnitId(1)).is_policy_conflict());
        assert!(BuffRejection::Duplicate { id }.is_policy_conflict());
        assert_eq!(
            BuffRejection::StackCapped { id, value: 5, max: 5 }.error_code(),
            "STACK_CAPPED"
        );
    }

    #[test]
    fn messages_name_the_buff() {
        let rejection = BuffRejection::ShorterDuration {
            id: BuffId(12),
            existing: Turns::PERMANENT,
            incoming: Turns(2),
        };
        assert_eq!(
            rejection.to_string(),
            "buff#12 would cut an active instance short (permanent > 2 turn(s))"
        );
    }
}
