//! Default-skill rotation for one unit.
//!
//! A rotation is made of up to four pools:
//!
//! - **header**: played once, in order, at the start of the battle
//! - **loop**: played in order after the header, wrapping forever
//! - **normal**: the pool offered to manual selection (falls back to loop)
//! - **super**: a single high-anger skill that pre-empts everything
//!
//! The header and loop share one cursor. Once the header is exhausted it is
//! cleared and never comes back.

use super::{Skill, SkillId};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillRotation {
    cursor: usize,
    header: Vec<Skill>,
    loop_skills: Vec<Skill>,
    normal: Vec<Skill>,
    super_skill: Option<Skill>,
}

impl SkillRotation {
    /// Rotation driven only by a manual pool.
    pub fn new(normal: Vec<Skill>) -> Self {
        Self {
            normal,
            ..Self::default()
        }
    }

    /// Rotation that repeats `loop_skills`.
    pub fn from_loop(loop_skills: Vec<Skill>) -> Self {
        Self {
            loop_skills,
            ..Self::default()
        }
    }

    pub fn with_header(mut self, header: Vec<Skill>) -> Self {
        self.header = header;
        self.cursor = 0;
        self
    }

    pub fn with_loop(mut self, loop_skills: Vec<Skill>) -> Self {
        self.loop_skills = loop_skills;
        self.cursor = 0;
        self
    }

    pub fn with_normal(mut self, normal: Vec<Skill>) -> Self {
        self.normal = normal;
        self
    }

    pub fn with_super(mut self, super_skill: Skill) -> Self {
        self.super_skill = Some(super_skill);
        self
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn header(&self) -> &[Skill] {
        &self.header
    }

    pub fn loop_skills(&self) -> &[Skill] {
        &self.loop_skills
    }

    pub fn normal(&self) -> &[Skill] {
        &self.normal
    }

    pub fn super_skill(&self) -> Option<&Skill> {
        self.super_skill.as_ref()
    }

    /// Picks the skill to use when the unit acts on its own, advancing the
    /// rotation.
    ///
    /// Order of precedence:
    /// 1. the super skill, if affordable and not yet selected
    /// 2. without a loop: the first available skill (super excluded)
    /// 3. the next header skill, clearing the header once it runs out
    /// 4. the next loop skill, wrapping around
    pub fn get_default_skill(&mut self, anger: u32) -> Skill {
        if let Some(super_skill) = self.usable_super(anger) {
            return super_skill.clone();
        }

        if self.loop_skills.is_empty() {
            return self
                .get_available_skills(anger, false)
                .into_iter()
                .next()
                .unwrap_or_else(Skill::noop);
        }

        if !self.header.is_empty() {
            let index = self.cursor % self.header.len();
            let skill = self.header[index].clone();
            self.cursor = index + 1;
            if self.cursor >= self.header.len() {
                tracing::debug!("skill header exhausted, switching to loop");
                self.header.clear();
                self.cursor = 0;
            }
            return skill;
        }

        let index = self.cursor % self.loop_skills.len();
        self.cursor = (index + 1) % self.loop_skills.len();
        self.loop_skills[index].clone()
    }

    /// Skills selectable with `anger` available, in pool order.
    ///
    /// Draws from the normal pool, or the loop when the normal pool is empty.
    /// The super skill goes last when `with_super` is set. Never empty: when
    /// nothing qualifies the result is a single [`Skill::noop`].
    pub fn get_available_skills(&self, anger: u32, with_super: bool) -> Vec<Skill> {
        let pool = if self.normal.is_empty() {
            &self.loop_skills
        } else {
            &self.normal
        };

        let mut skills: Vec<Skill> = pool
            .iter()
            .filter(|skill| skill.is_usable(anger))
            .cloned()
            .collect();

        if with_super {
            if let Some(super_skill) = self.usable_super(anger) {
                skills.push(super_skill.clone());
            }
        }

        if skills.is_empty() {
            skills.push(Skill::noop());
        }
        skills
    }

    /// Marks every copy of skill `id` across all pools as (un)selected.
    pub fn set_selected(&mut self, id: SkillId, selected: bool) {
        self.skills_mut()
            .filter(|skill| skill.id == id)
            .for_each(|skill| skill.is_selected = selected);
    }

    /// Clears the selection flag on every skill.
    pub fn reset_selection(&mut self) {
        self.skills_mut().for_each(|skill| skill.is_selected = false);
    }

    fn usable_super(&self, anger: u32) -> Option<&Skill> {
        self.super_skill
            .as_ref()
            .filter(|super_skill| super_skill.is_usable(anger))
    }

    fn skills_mut(&mut self) -> impl Iterator<Item = &mut Skill> {
        self.header
            .iter_mut()
            .chain(self.loop_skills.iter_mut())
            .chain(self.normal.iter_mut())
            .chain(self.super_skill.iter_mut())
    }
}
