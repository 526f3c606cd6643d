//! Conflict policies for buffs that share an id.

/// What happens when a buff is added while another instance with the same id
/// is already active.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CopyHandleType {
    /// Attach another instance alongside the existing one.
    #[default]
    New,
    /// Reject the incoming buff.
    Block,
    /// Replace the existing instance unless it would outlast the incoming one.
    Replace,
    /// Fold the incoming value into the existing instance while below its cap.
    Stack,
    /// Keep whichever instance has the larger value.
    Max,
    /// Keep whichever instance has the smaller value.
    Min,
}

impl CopyHandleType {
    /// Decodes a raw catalog code.
    ///
    /// Unrecognized codes resolve to [`CopyHandleType::New`].
    pub const fn from_code(code: u8) -> Self {
        match code {
            1 => Self::Block,
            2 => Self::Replace,
            3 => Self::Stack,
            4 => Self::Max,
            5 => Self::Min,
            _ => Self::New,
        }
    }

    /// Raw catalog code of this policy.
    pub const fn code(self) -> u8 {
        match self {
            Self::New => 0,
            Self::Block => 1,
            Self::Replace => 2,
            Self::Stack => 3,
            Self::Max => 4,
            Self::Min => 5,
        }
    }
}

impl From<u8> for CopyHandleType {
    fn from(code: u8) -> Self {
        Self::from_code(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_codes_fall_back_to_new() {
        assert_eq!(CopyHandleType::from_code(0), CopyHandleType::New);
        assert_eq!(CopyHandleType::from_code(6), CopyHandleType::New);
        assert_eq!(CopyHandleType::from(255), CopyHandleType::New);
    }

    #[test]
    fn codes_are_stable() {
        for policy in [
            CopyHandleType::New,
            CopyHandleType::Block,
            CopyHandleType::Replace,
            CopyHandleType::Stack,
            CopyHandleType::Max,
            CopyHandleType::Min,
        ] {
            assert_eq!(CopyHandleType::from_code(policy.code()), policy);
        }
        assert_eq!("stack".parse::<CopyHandleType>(), Ok(CopyHandleType::Stack));
    }
}
