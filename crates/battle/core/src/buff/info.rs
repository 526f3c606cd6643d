//! Static catalog metadata for buffs.

use crate::types::{BuffFlags, BuffId, BuffTypes, CopyHandleType, Turns};

/// Catalog entry describing a buff definition.
///
/// Shared read-only between every instance created from it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuffInfo {
    pub id: BuffId,
    pub name: String,
    pub types: BuffTypes,
    pub flags: BuffFlags,
    pub copy_handle_type: CopyHandleType,
    /// Stack ceiling consulted by [`CopyHandleType::Stack`].
    pub max_value: i32,
    pub default_turns: Turns,
    pub default_value: i32,
}

impl BuffInfo {
    pub fn new(id: BuffId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            types: BuffTypes::empty(),
            flags: BuffFlags::empty(),
            copy_handle_type: CopyHandleType::default(),
            max_value: i32::MAX,
            default_turns: Turns::PERMANENT,
            default_value: 0,
        }
    }

    pub fn with_types(mut self, types: BuffTypes) -> Self {
        self.types = types;
        self
    }

    pub fn with_flags(mut self, flags: BuffFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_policy(mut self, policy: CopyHandleType) -> Self {
        self.copy_handle_type = policy;
        self
    }

    pub fn with_max_value(mut self, max_value: i32) -> Self {
        self.max_value = max_value;
        self
    }

    pub fn with_turns(mut self, turns: Turns) -> Self {
        self.default_turns = turns;
        self
    }

    pub fn with_value(mut self, value: i32) -> Self {
        self.default_value = value;
        self
    }

    #[inline]
    pub fn is_power(&self) -> bool {
        self.flags.contains(BuffFlags::POWER)
    }

    #[inline]
    pub fn is_unmovable(&self) -> bool {
        self.flags.contains(BuffFlags::UNMOVABLE)
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn catalog_entries_survive_json() {
        let info = BuffInfo::new(BuffId(1000), "soaked")
            .with_types(BuffTypes::NEGATIVE | BuffTypes::ABNORMAL)
            .with_flags(BuffFlags::UNMOVABLE)
            .with_policy(CopyHandleType::Replace)
            .with_turns(Turns(2));

        let json = serde_json::to_string(&info).expect("serialize");
        let back: BuffInfo = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, info);
    }
}
