use crate::model::{Project, Roster, Solution};
use eyre::{Result, ensure, eyre};
use std::collections::{HashMap, HashSet};

/// Check that a solution is acceptable for the final state of the projects:
/// every role filled by a known contributor, nobody twice on the same
/// project, and every project over before its deadline.
pub fn ensure_consistent(roster: &Roster, projects: &[Project], solution: &Solution) -> Result<()> {
    let by_id = projects.iter().map(|p| (p.id, p)).collect::<HashMap<_, _>>();
    let mut seen = HashSet::new();
    for entry in &solution.entries {
        let project = by_id
            .get(&entry.project)
            .ok_or_else(|| eyre!("unknown project {}", entry.project_name))?;
        ensure!(
            project.name == entry.project_name,
            "project {} recorded as {}",
            project.name,
            entry.project_name
        );
        ensure!(
            seen.insert(project.id),
            "project {} staffed twice",
            project.name
        );
        ensure!(
            entry.contributors.len() == project.roles(),
            "project {} has {} roles but {} contributors",
            project.name,
            project.roles(),
            entry.contributors.len()
        );
        ensure!(
            entry.contributors == project.contributors,
            "project {} contributors differ from the solution",
            project.name
        );
        let mut names = HashSet::new();
        for name in &entry.contributors {
            ensure!(
                roster.id_of(name).is_some(),
                "project {} is staffed with unknown contributor {}",
                project.name,
                name
            );
            ensure!(
                names.insert(name),
                "contributor {} appears twice on project {}",
                name,
                project.name
            );
        }
        ensure!(
            project.end_day() <= project.best_before,
            "project {} ends on day {} after its deadline {}",
            project.name,
            project.end_day(),
            project.best_before
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algos::Greedy;
    use crate::model::{Contributor, ContributorId, ProjectId, Skill};

    fn staffed() -> (Roster, Vec<Project>, Solution) {
        let mut roster = Roster::new(vec![
            Contributor::new(ContributorId(0), "Anna", vec![Skill::new("C++", 2)]),
            Contributor::new(ContributorId(0), "Bob", vec![Skill::new("C++", 1)]),
        ])
        .unwrap();
        let mut projects = vec![Project::new(
            ProjectId(0),
            "Pair",
            2,
            10,
            5,
            vec![Skill::new("C++", 2), Skill::new("C++", 2)],
        )];
        let order = roster.all_contributors();
        let solution = Greedy::new(&mut roster, order).assign(&mut projects);
        (roster, projects, solution)
    }

    #[test]
    fn test_consistent() {
        let (roster, projects, solution) = staffed();
        assert_eq!(solution.len(), 1);
        ensure_consistent(&roster, &projects, &solution).unwrap();
    }

    #[test]
    fn test_late_project() {
        let (roster, mut projects, solution) = staffed();
        projects[0].start_day = 4;
        let err = ensure_consistent(&roster, &projects, &solution).unwrap_err();
        assert_eq!(err.to_string(), "project Pair ends on day 6 after its deadline 5");
    }

    #[test]
    fn test_repeated_contributor() {
        let (roster, mut projects, mut solution) = staffed();
        let names = vec!["Anna".to_owned(), "Anna".to_owned()];
        projects[0].contributors = names.clone();
        solution.entries[0].contributors = names;
        assert!(ensure_consistent(&roster, &projects, &solution).is_err());
    }

    #[test]
    fn test_missing_role() {
        let (roster, mut projects, mut solution) = staffed();
        projects[0].contributors.pop();
        solution.entries[0].contributors.pop();
        let err = ensure_consistent(&roster, &projects, &solution).unwrap_err();
        assert_eq!(err.to_string(), "project Pair has 2 roles but 1 contributors");
    }

    #[test]
    fn test_unknown_contributor() {
        let (roster, mut projects, mut solution) = staffed();
        projects[0].contributors[1] = "Maria".to_owned();
        solution.entries[0].contributors[1] = "Maria".to_owned();
        assert!(ensure_consistent(&roster, &projects, &solution).is_err());
    }
}
