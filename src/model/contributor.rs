use super::{Project, Skill};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ContributorId(pub usize);

#[derive(Clone, Debug, Serialize)]
pub struct Contributor {
    #[serde(skip)]
    pub id: ContributorId,
    pub name: String,
    pub skills: BTreeMap<String, u32>,
    pub available_on: u32,
}

impl Contributor {
    pub fn new(id: ContributorId, name: impl Into<String>, skills: Vec<Skill>) -> Self {
        Self {
            id,
            name: name.into(),
            skills: skills.into_iter().map(|s| (s.name, s.level)).collect(),
            available_on: 0,
        }
    }

    /// Level in the given skill, 0 if the contributor never practiced it.
    pub fn level_in(&self, skill: &str) -> u32 {
        self.skills.get(skill).copied().unwrap_or(0)
    }

    /// Can this contributor, starting as soon as they are free, complete
    /// the project before its deadline?
    pub fn can_finish(&self, project: &Project) -> bool {
        self.available_on.saturating_add(project.duration) <= project.best_before
    }

    pub fn is_part_of(&self, chosen: &[ContributorId]) -> bool {
        chosen.contains(&self.id)
    }

    /// Raise the level in a skill by one and return the new level. Levels
    /// stop growing at `u32::MAX`.
    pub fn learn(&mut self, skill: &str) -> u32 {
        let level = self.skills.entry(skill.to_owned()).or_insert(0);
        *level = level.saturating_add(1);
        *level
    }
}

impl fmt::Display for Contributor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
