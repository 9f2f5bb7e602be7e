use crate::model::{ContributorId, Project, Roster, Skill, Solution, SolutionEntry};
use tracing::{debug, instrument, trace};

/// Result of trying to staff a single project.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Staffing {
    /// One contributor per role, in role order.
    Accepted(Vec<ContributorId>),
    /// Nobody could be found for the role at this index.
    Skipped { role: usize },
    /// Even started on day 0, the project would end after its deadline.
    Late,
}

/// Single pass greedy assignment: projects are staffed one after the other,
/// each role going to the eligible contributor who is free the earliest.
pub struct Greedy<'a> {
    roster: &'a mut Roster,
    order: Vec<ContributorId>,
    level_ups: usize,
}

impl<'a> Greedy<'a> {
    pub fn new(roster: &'a mut Roster, order: Vec<ContributorId>) -> Greedy<'a> {
        Greedy {
            roster,
            order,
            level_ups: 0,
        }
    }

    /// Staff projects in the given order. Staffed projects get their start
    /// day and contributors filled in, the others are left untouched.
    #[instrument(skip_all, fields(projects = projects.len()))]
    pub fn assign(&mut self, projects: &mut [Project]) -> Solution {
        let mut solution = Solution::default();
        for project in projects.iter_mut() {
            match self.staff(project) {
                Staffing::Accepted(chosen) => {
                    self.commit(project, &chosen);
                    solution.push(SolutionEntry {
                        project: project.id,
                        project_name: project.name.clone(),
                        contributors: project.contributors.clone(),
                    });
                }
                Staffing::Skipped { role } => {
                    debug!(
                        project = %project,
                        role = %project.skills_required[role],
                        "skipped: no contributor available for role",
                    );
                }
                Staffing::Late => {
                    debug!(project = %project, "skipped: cannot end before its deadline");
                }
            }
        }
        solution
    }

    /// Choose a contributor for every role of the project without modifying
    /// anything.
    pub fn staff(&self, project: &Project) -> Staffing {
        if project.duration > project.best_before {
            return Staffing::Late;
        }
        let mut chosen = Vec::with_capacity(project.roles());
        for (role, skill) in project.skills_required.iter().enumerate() {
            let mentor_available = self.roster.is_mentor_available(skill, &chosen);
            match self.select(project, skill, &chosen, mentor_available) {
                Some(contributor) => {
                    trace!(
                        project = %project,
                        skill = %skill,
                        contributor = %self.roster.contributor(contributor),
                        mentored = self.roster.level_in(contributor, &skill.name) < skill.level,
                        "role filled",
                    );
                    chosen.push(contributor);
                }
                None => return Staffing::Skipped { role },
            }
        }
        Staffing::Accepted(chosen)
    }

    /// Pick, among the contributors not chosen yet who are skilled enough
    /// (or one level short with a mentor around) and who can still finish
    /// the project on time, the one who is free the earliest.
    fn select(
        &self,
        project: &Project,
        skill: &Skill,
        chosen: &[ContributorId],
        mentor_available: bool,
    ) -> Option<ContributorId> {
        self.order
            .iter()
            .copied()
            .filter(|&c| !self.roster.contributor(c).is_part_of(chosen))
            .filter(|&c| {
                let level = self.roster.level_in(c, &skill.name);
                level >= skill.level || (mentor_available && level + 1 == skill.level)
            })
            .filter(|&c| self.roster.can_finish(c, project))
            .min_by_key(|&c| self.roster.available_on(c))
    }

    fn commit(&mut self, project: &mut Project, chosen: &[ContributorId]) {
        project.start_day = chosen
            .iter()
            .map(|&c| self.roster.available_on(c))
            .max()
            .unwrap_or(0);
        let end_day = project.end_day();
        for (&c, skill) in chosen.iter().zip(&project.skills_required) {
            let contributor = self.roster.contributor_mut(c);
            if contributor.level_in(&skill.name) <= skill.level {
                let level = contributor.learn(&skill.name);
                self.level_ups += 1;
                trace!(contributor = %contributor, skill = %skill.name, level, "level up");
            }
            contributor.available_on = end_day;
        }
        project.contributors = chosen
            .iter()
            .map(|&c| self.roster.name_of(c).to_owned())
            .collect();
    }

    /// Number of skill levels gained so far.
    pub fn level_ups(&self) -> usize {
        self.level_ups
    }
}
