//! Two-unit battle harness shared by the integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use battle_core::ledger::{self, CopyTrigger};
use battle_core::{
    ApplyMode, BattleContext, Buff, BuffEffect, BuffId, BuffInfo, BuffLedger, Combatant,
    EffectTiming, Element, SkillRotation, UnitId, UnitProvider,
};

pub const ALLY: UnitId = UnitId(1);
pub const FOE: UnitId = UnitId(2);

/// Installs a test subscriber once; set `RUST_LOG=battle_core=debug` to see
/// ledger decisions.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Minimal orchestrator: a fixed list of combatants, where every unit's
/// rival is the first other unit.
#[derive(Debug)]
pub struct Duel {
    pub units: Vec<Combatant>,
    pub turn: u32,
    pub phase: EffectTiming,
}

impl Duel {
    pub fn new(ally: Element, foe: Element) -> Self {
        init_tracing();
        Self {
            units: vec![
                Combatant::new(ALLY, ally, SkillRotation::default()),
                Combatant::new(FOE, foe, SkillRotation::default()),
            ],
            turn: 1,
            phase: EffectTiming::OnAttack,
        }
    }

    /// A battle with a single unit and therefore no rival.
    pub fn solo(element: Element) -> Self {
        init_tracing();
        Self {
            units: vec![Combatant::new(ALLY, element, SkillRotation::default())],
            turn: 1,
            phase: EffectTiming::OnAttack,
        }
    }

    pub fn unit(&self, id: UnitId) -> &BuffLedger {
        &self
            .units
            .iter()
            .find(|unit| unit.id == id)
            .expect("unit exists")
            .buffs
    }

    pub fn unit_mut(&mut self, id: UnitId) -> &mut BuffLedger {
        &mut self
            .units
            .iter_mut()
            .find(|unit| unit.id == id)
            .expect("unit exists")
            .buffs
    }

    pub fn values_of(&self, unit: UnitId, id: BuffId) -> Vec<i32> {
        self.unit(unit)
            .get_range_buff(|buff| buff.id() == id)
            .map(|buff| buff.value)
            .collect()
    }
}

impl UnitProvider for Duel {
    fn rival_of(&self, unit: UnitId) -> Option<UnitId> {
        self.units
            .iter()
            .map(|combatant| combatant.id)
            .find(|&id| id != unit)
    }

    fn ledger(&self, unit: UnitId) -> Option<&BuffLedger> {
        self.units
            .iter()
            .find(|combatant| combatant.id == unit)
            .map(|combatant| &combatant.buffs)
    }

    fn ledger_mut(&mut self, unit: UnitId) -> Option<&mut BuffLedger> {
        self.units
            .iter_mut()
            .find(|combatant| combatant.id == unit)
            .map(|combatant| &mut combatant.buffs)
    }
}

impl BattleContext for Duel {
    fn turn(&self) -> u32 {
        self.turn
    }

    fn phase(&self) -> EffectTiming {
        self.phase
    }

    fn set_phase(&mut self, phase: EffectTiming) {
        self.phase = phase;
    }
}

// ============================================================================
// Effects
// ============================================================================

/// One observed effect application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub label: &'static str,
    pub unit: UnitId,
    pub phase: EffectTiming,
}

pub type Journal = Arc<Mutex<Vec<Record>>>;

pub fn journal() -> Journal {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn entries(journal: &Journal) -> Vec<Record> {
    journal.lock().expect("journal lock").clone()
}

pub fn labels(journal: &Journal) -> Vec<&'static str> {
    entries(journal).into_iter().map(|record| record.label).collect()
}

/// Writes the unit and current phase to a journal.
#[derive(Debug)]
pub struct Recorder {
    pub label: &'static str,
    pub priority: i32,
    pub journal: Journal,
}

impl BuffEffect for Recorder {
    fn priority(&self) -> i32 {
        self.priority
    }

    fn check_and_apply(&self, unit: UnitId, ctx: &mut dyn BattleContext, mode: ApplyMode) -> bool {
        assert_eq!(mode, ApplyMode::FORCED);
        self.journal.lock().expect("journal lock").push(Record {
            label: self.label,
            unit,
            phase: ctx.phase(),
        });
        true
    }
}

pub fn recorder(label: &'static str, priority: i32, journal: &Journal) -> Arc<dyn BuffEffect> {
    Arc::new(Recorder {
        label,
        priority,
        journal: journal.clone(),
    })
}

/// Attaches another buff to the same unit while running.
#[derive(Debug)]
pub struct Grant {
    pub buff: Buff,
    pub priority: i32,
}

impl BuffEffect for Grant {
    fn priority(&self) -> i32 {
        self.priority
    }

    fn check_and_apply(&self, unit: UnitId, ctx: &mut dyn BattleContext, _: ApplyMode) -> bool {
        ledger::add_buff(ctx, unit, self.buff.clone(), CopyTrigger::Enabled)
    }
}

/// Removes every buff with the given id from the same unit while running.
#[derive(Debug)]
pub struct Strip {
    pub id: BuffId,
    pub priority: i32,
}

impl BuffEffect for Strip {
    fn priority(&self) -> i32 {
        self.priority
    }

    fn check_and_apply(&self, unit: UnitId, ctx: &mut dyn BattleContext, _: ApplyMode) -> bool {
        let id = self.id;
        ledger::remove_buffs_where(ctx, unit, |buff| buff.id() == id)
    }
}

/// Marks a buff as forced without touching its catalog flags.
#[derive(Debug)]
pub struct Forced;

impl BuffEffect for Forced {
    fn is_power(&self) -> bool {
        true
    }

    fn check_and_apply(&self, _: UnitId, _: &mut dyn BattleContext, _: ApplyMode) -> bool {
        false
    }
}

pub fn info(id: u32) -> BuffInfo {
    BuffInfo::new(BuffId(id), format!("buff-{id}"))
}

pub fn buff(info: BuffInfo) -> Buff {
    Buff::new(Arc::new(info))
}
