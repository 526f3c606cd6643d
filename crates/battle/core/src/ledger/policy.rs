//! Same-id conflict resolution.

use crate::buff::Buff;
use crate::error::BuffRejection;
use crate::types::{BuffKey, CopyHandleType};

/// What to do with an incoming buff given the instance already active under
/// its id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Resolution {
    Append,
    Replace(BuffKey),
    Stack(BuffKey),
    Reject(BuffRejection),
}

/// Applies the incoming buff's [`CopyHandleType`] against `existing`.
pub(crate) fn resolve(existing: &Buff, incoming: &Buff) -> Resolution {
    let id = incoming.id();

    match incoming.info().copy_handle_type {
        CopyHandleType::New => Resolution::Append,
        CopyHandleType::Block => Resolution::Reject(BuffRejection::Duplicate { id }),
        CopyHandleType::Replace => {
            if existing.turns.duration_key() <= incoming.turns.duration_key() {
                Resolution::Replace(existing.key())
            } else {
                Resolution::Reject(BuffRejection::ShorterDuration {
                    id,
                    existing: existing.turns,
                    incoming: incoming.turns,
                })
            }
        }
        CopyHandleType::Stack => {
            let max = existing.info().max_value;
            if existing.value < max {
                Resolution::Stack(existing.key())
            } else {
                Resolution::Reject(BuffRejection::StackCapped {
                    id,
                    value: existing.value,
                    max,
                })
            }
        }
        CopyHandleType::Max => {
            if incoming.value > existing.value {
                Resolution::Replace(existing.key())
            } else {
                Resolution::Reject(BuffRejection::NotGreater {
                    id,
                    existing: existing.value,
                    incoming: incoming.value,
                })
            }
        }
        CopyHandleType::Min => {
            if incoming.value < existing.value {
                Resolution::Replace(existing.key())
            } else {
                Resolution::Reject(BuffRejection::NotLess {
                    id,
                    existing: existing.value,
                    incoming: incoming.value,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::buff::BuffInfo;
    use crate::types::{BuffId, Turns};

    fn pair(policy: CopyHandleType) -> (Buff, Buff) {
        let info = Arc::new(
            BuffInfo::new(BuffId(30), "contested")
                .with_policy(policy)
                .with_max_value(10),
        );
        let mut existing = Buff::new(info.clone());
        existing.set_key(BuffKey(1));
        (existing, Buff::new(info))
    }

    #[test]
    fn replace_keeps_the_longer_duration() {
        let (mut existing, mut incoming) = pair(CopyHandleType::Replace);

        existing.turns = Turns(3);
        incoming.turns = Turns(3);
        assert_eq!(resolve(&existing, &incoming), Resolution::Replace(BuffKey(1)));

        incoming.turns = Turns(2);
        assert!(matches!(
            resolve(&existing, &incoming),
            Resolution::Reject(BuffRejection::ShorterDuration { .. })
        ));

        incoming.turns = Turns::PERMANENT;
        assert_eq!(resolve(&existing, &incoming), Resolution::Replace(BuffKey(1)));

        existing.turns = Turns::PERMANENT;
        incoming.turns = Turns(50);
        assert!(matches!(resolve(&existing, &incoming), Resolution::Reject(_)));
    }

    #[test]
    fn stack_stops_at_the_existing_cap() {
        let (mut existing, incoming) = pair(CopyHandleType::Stack);

        existing.value = 9;
        assert_eq!(resolve(&existing, &incoming), Resolution::Stack(BuffKey(1)));

        existing.value = 10;
        assert_eq!(
            resolve(&existing, &incoming),
            Resolution::Reject(BuffRejection::StackCapped {
                id: BuffId(30),
                value: 10,
                max: 10,
            })
        );
    }

    #[test]
    fn max_and_min_require_strict_improvement() {
        let (mut existing, mut incoming) = pair(CopyHandleType::Max);
        existing.value = 4;
        incoming.value = 4;
        assert!(matches!(resolve(&existing, &incoming), Resolution::Reject(_)));
        incoming.value = 5;
        assert_eq!(resolve(&existing, &incoming), Resolution::Replace(BuffKey(1)));

        let (mut existing, mut incoming) = pair(CopyHandleType::Min);
        existing.value = 4;
        incoming.value = 4;
        assert!(matches!(resolve(&existing, &incoming), Resolution::Reject(_)));
        incoming.value = 3;
        assert_eq!(resolve(&existing, &incoming), Resolution::Replace(BuffKey(1)));
    }

    #[test]
    fn new_always_appends_and_block_always_rejects() {
        let (existing, incoming) = pair(CopyHandleType::New);
        assert_eq!(resolve(&existing, &incoming), Resolution::Append);

        let (existing, incoming) = pair(CopyHandleType::Block);
        assert_eq!(
            resolve(&existing, &incoming),
            Resolution::Reject(BuffRejection::Duplicate { id: BuffId(30) })
        );
    }
}
