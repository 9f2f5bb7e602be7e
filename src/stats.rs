use crate::model::{Project, Solution};
use std::collections::HashSet;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Statistics {
    pub accepted: usize,
    pub skipped: usize,
    /// Completion points of staffed projects. All of them finish before
    /// their deadline, so no penalty applies.
    pub score: u64,
    pub level_ups: usize,
}

pub fn statistics(projects: &[Project], solution: &Solution, level_ups: usize) -> Statistics {
    let accepted = solution.entries.iter().map(|e| e.project).collect::<HashSet<_>>();
    let score = projects
        .iter()
        .filter(|p| accepted.contains(&p.id))
        .map(|p| u64::from(p.completion_points))
        .sum();
    Statistics {
        accepted: solution.len(),
        skipped: projects.len() - solution.len(),
        score,
        level_ups,
    }
}

#[test]
fn test_statistics() {
    use crate::model::{ProjectId, SolutionEntry};
    let projects = [(10, "Logging"), (20, "WebServer"), (30, "WebChat")]
        .into_iter()
        .enumerate()
        .map(|(id, (points, name))| Project::new(ProjectId(id), name, 1, points, 10, vec![]))
        .collect::<Vec<_>>();
    let mut solution = Solution::default();
    for id in [2, 0] {
        solution.push(SolutionEntry {
            project: ProjectId(id),
            project_name: projects[id].name.clone(),
            contributors: vec![],
        });
    }
    assert_eq!(
        statistics(&projects, &solution, 3),
        Statistics {
            accepted: 2,
            skipped: 1,
            score: 40,
            level_ups: 3,
        }
    );
}
