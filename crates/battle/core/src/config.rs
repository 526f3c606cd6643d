/// Battle rule constants shared by the buff ledger and skill rotation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BattleConfig;

impl BattleConfig {
    // ===== turn bookkeeping =====
    /// Turn number of the opening turn. Buff durations do not age on it.
    pub const FIRST_TURN: u32 = 1;
    /// Remaining-turns sentinel for buffs that never expire.
    pub const PERMANENT_TURNS: i32 = -1;

    // ===== catalog ids =====
    /// Skill id reserved for the "do nothing" placeholder action.
    pub const NOOP_SKILL_ID: u32 = 0;

    // ===== elemental immunity buff ids =====
    /// Blocked on every Water unit.
    pub const WATER_IMMUNITY_ID: u32 = 1000;
    /// Blocked on every Fire unit.
    pub const FIRE_IMMUNITY_ID: u32 = 1001;
    /// Blocked on every Ice unit.
    pub const ICE_IMMUNITY_ID: u32 = 1002;
    /// Blocked on every Grass unit.
    pub const GRASS_IMMUNITY_ID: u32 = 1007;
    /// Blocked on every Wind unit.
    pub const WIND_IMMUNITY_ID: u32 = 1014;

    /// Returns true if `turn` is the startup grace turn.
    pub const fn is_grace_turn(turn: u32) -> bool {
        turn == Self::FIRST_TURN
    }
}
