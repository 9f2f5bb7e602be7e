use super::{Contributor, ContributorId, Project, Skill};
use eyre::{Result, ensure};
use std::collections::HashMap;

/// Every contributor of an instance, addressable by id or by name.
#[derive(Debug)]
pub struct Roster {
    contributors: Vec<Contributor>,
    index: HashMap<String, ContributorId>,
}

impl Roster {
    /// Build the roster, renumbering contributors from 0 in the given order.
    pub fn new(mut contributors: Vec<Contributor>) -> Result<Roster> {
        let mut index = HashMap::with_capacity(contributors.len());
        for (idx, contributor) in contributors.iter_mut().enumerate() {
            contributor.id = ContributorId(idx);
            ensure!(
                index
                    .insert(contributor.name.clone(), contributor.id)
                    .is_none(),
                "duplicate contributor {}",
                contributor.name
            );
        }
        Ok(Roster {
            contributors,
            index,
        })
    }

    pub fn contributor(&self, ContributorId(contributor): ContributorId) -> &Contributor {
        &self.contributors[contributor]
    }

    pub fn contributor_mut(&mut self, ContributorId(contributor): ContributorId) -> &mut Contributor {
        &mut self.contributors[contributor]
    }

    pub fn contributors(&self) -> &[Contributor] {
        &self.contributors
    }

    pub fn id_of(&self, name: &str) -> Option<ContributorId> {
        self.index.get(name).copied()
    }

    pub fn all_contributors(&self) -> Vec<ContributorId> {
        (0..self.contributors.len()).map(ContributorId).collect()
    }

    pub fn len(&self) -> usize {
        self.contributors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contributors.is_empty()
    }

    pub fn name_of(&self, contributor: ContributorId) -> &str {
        &self.contributor(contributor).name
    }

    pub fn level_in(&self, contributor: ContributorId, skill: &str) -> u32 {
        self.contributor(contributor).level_in(skill)
    }

    pub fn can_finish(&self, contributor: ContributorId, project: &Project) -> bool {
        self.contributor(contributor).can_finish(project)
    }

    pub fn available_on(&self, contributor: ContributorId) -> u32 {
        self.contributor(contributor).available_on
    }

    /// Is one of the contributors already chosen able to mentor someone
    /// for this skill?
    pub fn is_mentor_available(&self, skill: &Skill, chosen: &[ContributorId]) -> bool {
        chosen
            .iter()
            .any(|&c| self.level_in(c, &skill.name) >= skill.level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        Roster::new(vec![
            Contributor::new(ContributorId(7), "Anna", vec![Skill::new("C++", 2)]),
            Contributor::new(ContributorId(3), "Bob", vec![Skill::new("HTML", 5)]),
        ])
        .unwrap()
    }

    #[test]
    fn test_renumbering() {
        let r = roster();
        assert_eq!(r.id_of("Anna"), Some(ContributorId(0)));
        assert_eq!(r.id_of("Bob"), Some(ContributorId(1)));
        assert_eq!(r.id_of("Maria"), None);
        assert_eq!(r.contributor(ContributorId(1)).id, ContributorId(1));
    }

    #[test]
    fn test_duplicates_rejected() {
        let err = Roster::new(vec![
            Contributor::new(ContributorId(0), "Anna", vec![]),
            Contributor::new(ContributorId(1), "Anna", vec![]),
        ])
        .unwrap_err();
        assert_eq!(err.to_string(), "duplicate contributor Anna");
    }

    #[test]
    fn test_mentor_available() {
        let r = roster();
        let cpp = Skill::new("C++", 2);
        assert!(!r.is_mentor_available(&cpp, &[]));
        assert!(!r.is_mentor_available(&cpp, &[ContributorId(1)]));
        assert!(r.is_mentor_available(&cpp, &[ContributorId(1), ContributorId(0)]));
        assert!(!r.is_mentor_available(&Skill::new("C++", 3), &[ContributorId(0)]));
    }
}
