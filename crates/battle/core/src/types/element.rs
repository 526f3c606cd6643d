//! Elemental identity of a combatant.

use crate::config::BattleConfig;

use super::BuffId;

/// Element of a pet.
///
/// A handful of elements grant an innate immunity, expressed as a blocked buff
/// id on the unit's ledger (see [`Element::immunity_block_id`]).
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
pub enum Element {
    #[default]
    Normal,
    Grass,
    Water,
    Fire,
    Wind,
    Electric,
    Ground,
    Ice,
    Mechanical,
    Light,
    Shadow,
    Mystery,
    Dragon,
    Psychic,
}

impl Element {
    /// Buff id this element is innately immune to, if any.
    pub const fn immunity_block_id(self) -> Option<BuffId> {
        let id = match self {
            Self::Water => BattleConfig::WATER_IMMUNITY_ID,
            Self::Fire => BattleConfig::FIRE_IMMUNITY_ID,
            Self::Grass => BattleConfig::GRASS_IMMUNITY_ID,
            Self::Wind => BattleConfig::WIND_IMMUNITY_ID,
            Self::Ice => BattleConfig::ICE_IMMUNITY_ID,
            _ => return None,
        };
        Some(BuffId(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_five_elements_carry_an_immunity() {
        assert_eq!(Element::Water.immunity_block_id(), Some(BuffId(1000)));
        assert_eq!(Element::Fire.immunity_block_id(), Some(BuffId(1001)));
        assert_eq!(Element::Ice.immunity_block_id(), Some(BuffId(1002)));
        assert_eq!(Element::Grass.immunity_block_id(), Some(BuffId(1007)));
        assert_eq!(Element::Wind.immunity_block_id(), Some(BuffId(1014)));
        assert_eq!(Element::Normal.immunity_block_id(), None);
        assert_eq!(Element::Shadow.immunity_block_id(), None);
    }

    #[test]
    fn parses_snake_case_names() {
        assert_eq!("mechanical".parse::<Element>(), Ok(Element::Mechanical));
        assert_eq!("WATER".parse::<Element>(), Ok(Element::Water));
        assert_eq!(Element::Psychic.to_string(), "psychic");
    }
}
