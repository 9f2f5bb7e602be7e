use super::Skill;
use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ProjectId(pub usize);

#[derive(Clone, Debug, Serialize)]
pub struct Project {
    #[serde(skip)]
    pub id: ProjectId,
    pub name: String,
    pub duration: u32,
    pub best_before: u32,
    pub completion_points: u32,
    /// Roles to fill, in order.
    pub skills_required: Vec<Skill>,
    pub start_day: u32,
    /// Names of the contributors, index-aligned with `skills_required`
    /// once the project has been staffed.
    pub contributors: Vec<String>,
}

impl Project {
    pub fn new(
        id: ProjectId,
        name: impl Into<String>,
        duration: u32,
        completion_points: u32,
        best_before: u32,
        skills_required: Vec<Skill>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            duration,
            best_before,
            completion_points,
            skills_required,
            start_day: 0,
            contributors: Vec::new(),
        }
    }

    pub fn roles(&self) -> usize {
        self.skills_required.len()
    }

    pub fn end_day(&self) -> u32 {
        self.start_day + self.duration
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Shortest projects first. The sort is stable, so projects of equal
/// duration keep their input order.
pub fn sort_by_duration(projects: &mut [Project]) {
    projects.sort_by_key(|p| p.duration);
}

#[test]
fn test_sort_by_duration() {
    let mut projects = [(5, "Long"), (1, "Short"), (3, "Medium"), (1, "Quick")]
        .into_iter()
        .enumerate()
        .map(|(id, (duration, name))| Project::new(ProjectId(id), name, duration, 10, 20, vec![]))
        .collect::<Vec<_>>();
    sort_by_duration(&mut projects);
    assert_eq!(
        projects.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
        vec!["Short", "Quick", "Medium", "Long"]
    );
}
