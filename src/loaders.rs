use crate::model::{Contributor, ContributorId, Project, ProjectId, Roster, Skill};
use eyre::{Result, WrapErr, bail, ensure, eyre};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::SplitWhitespace;
use tracing::{debug, trace};

/// An instance file and the name used for its output and log files.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Instance {
    pub name: String,
    pub path: PathBuf,
}

impl Instance {
    /// `inputs/a_an_example.in.txt` is named `a_an_example`.
    pub fn from_path(path: &Path) -> Result<Instance> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| n.split('.').next())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| eyre!("cannot derive an instance name from {}", path.display()))?;
        Ok(Instance {
            name: name.to_owned(),
            path: path.to_owned(),
        })
    }
}

/// List the `.txt` files of a directory, sorted by file name.
pub fn discover(dir: &Path) -> Result<Vec<Instance>> {
    let mut paths = fs::read_dir(dir)
        .wrap_err_with(|| format!("cannot read input directory {}", dir.display()))?
        .map(|entry| Ok(entry?.path()))
        .collect::<Result<Vec<_>, std::io::Error>>()
        .wrap_err_with(|| format!("cannot read input directory {}", dir.display()))?;
    paths.retain(|p| p.is_file() && p.to_str().is_some_and(|s| s.ends_with(".txt")));
    paths.sort();
    debug!(dir = %dir.display(), instances = paths.len(), "input directory scanned");
    paths.iter().map(|p| Instance::from_path(p)).collect()
}

pub fn load(path: &Path) -> Result<(Roster, Vec<Project>)> {
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("cannot read instance file {}", path.display()))?;
    parse(&content).wrap_err_with(|| format!("cannot parse instance file {}", path.display()))
}

pub fn parse(content: &str) -> Result<(Roster, Vec<Project>)> {
    let mut tokens = Tokens(content.split_whitespace());
    let contributors_count = tokens.number("contributors count")? as usize;
    let projects_count = tokens.number("projects count")? as usize;
    let contributors = (0..contributors_count)
        .map(|idx| {
            tokens
                .contributor(ContributorId(idx))
                .wrap_err_with(|| format!("cannot load contributor #{}", idx + 1))
        })
        .collect::<Result<Vec<_>>>()?;
    let projects = (0..projects_count)
        .map(|idx| {
            tokens
                .project(ProjectId(idx))
                .wrap_err_with(|| format!("cannot load project #{}", idx + 1))
        })
        .collect::<Result<Vec<_>>>()?;
    if let Some(extra) = tokens.0.next() {
        bail!("unexpected data after the last project: {extra}");
    }
    let roster = Roster::new(contributors)?;
    Ok((roster, projects))
}

struct Tokens<'a>(SplitWhitespace<'a>);

impl<'a> Tokens<'a> {
    fn word(&mut self, what: &str) -> Result<&'a str> {
        self.0.next().ok_or_else(|| eyre!("missing {what}"))
    }

    fn number(&mut self, what: &str) -> Result<u32> {
        let word = self.word(what)?;
        word.parse()
            .wrap_err_with(|| format!("invalid {what}: {word}"))
    }

    fn skills(&mut self, count: u32) -> Result<Vec<Skill>> {
        let mut skills = Vec::with_capacity((count as usize).min(64));
        for _ in 0..count {
            let name = self.word("skill name")?;
            skills.push(Skill::new(name, self.number("skill level")?));
        }
        Ok(skills)
    }

    fn contributor(&mut self, id: ContributorId) -> Result<Contributor> {
        let name = self.word("contributor name")?;
        let count = self.number("skills count")?;
        let skills = self.skills(count).wrap_err_with(|| format!("for contributor {name}"))?;
        let mut seen = skills.iter().map(|s| &s.name).collect::<Vec<_>>();
        seen.sort();
        seen.dedup();
        ensure!(
            seen.len() == skills.len(),
            "contributor {name} lists the same skill twice"
        );
        trace!(contributor = name, skills = ?skills, "contributor loaded");
        Ok(Contributor::new(id, name, skills))
    }

    fn project(&mut self, id: ProjectId) -> Result<Project> {
        let name = self.word("project name")?;
        let duration = self.number("duration")?;
        let completion_points = self.number("completion points")?;
        let best_before = self.number("best before day")?;
        let roles = self.number("roles count")?;
        let skills = self.skills(roles).wrap_err_with(|| format!("for project {name}"))?;
        trace!(project = name, duration, best_before, skills = ?skills, "project loaded");
        Ok(Project::new(id, name, duration, completion_points, best_before, skills))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "3 3
Anna 1
C++ 2
Bob 2
HTML 5
CSS 5
Maria 1
Python 3
Logging 5 10 5 1
C++ 3
WebServer 7 10 7 2
HTML 3
C++ 2
WebChat 10 20 20 2
Python 3
HTML 3
";

    #[test]
    fn test_parse_sample() {
        let (roster, projects) = parse(SAMPLE).unwrap();
        assert_eq!(roster.len(), 3);
        let bob = roster.id_of("Bob").unwrap();
        assert_eq!(bob, ContributorId(1));
        assert_eq!(roster.level_in(bob, "CSS"), 5);
        assert_eq!(roster.available_on(bob), 0);
        assert_eq!(projects.len(), 3);
        let web_chat = &projects[2];
        assert_eq!(web_chat.id, ProjectId(2));
        assert_eq!(web_chat.name, "WebChat");
        assert_eq!(web_chat.duration, 10);
        assert_eq!(web_chat.completion_points, 20);
        assert_eq!(web_chat.best_before, 20);
        assert_eq!(
            web_chat.skills_required,
            vec![Skill::new("Python", 3), Skill::new("HTML", 3)]
        );
    }

    #[test]
    fn test_empty_instance() {
        let (roster, projects) = parse("0 0\n").unwrap();
        assert!(roster.is_empty());
        assert!(projects.is_empty());
    }

    #[test]
    fn test_truncated() {
        let err = parse("1 1\nAnna 1\nC++ 2\nLogging 5 10\n").unwrap_err();
        assert_eq!(err.to_string(), "cannot load project #1");
        assert_eq!(err.root_cause().to_string(), "missing best before day");
    }

    #[test]
    fn test_invalid_number() {
        let err = parse("1 0\nAnna two\n").unwrap_err();
        assert_eq!(err.to_string(), "cannot load contributor #1");
    }

    #[test]
    fn test_huge_skill_count() {
        let err = parse("1 0\nAnna 4000000000\n").unwrap_err();
        assert_eq!(err.root_cause().to_string(), "missing skill name");
        assert!(parse("0 1\nLogging 5 10 5 4000000000\n").is_err());
    }

    #[test]
    fn test_trailing_data() {
        assert!(parse("0 0\nAnna\n").is_err());
    }

    #[test]
    fn test_duplicate_contributor() {
        let err = parse("2 0\nAnna 0\nAnna 0\n").unwrap_err();
        assert_eq!(err.to_string(), "duplicate contributor Anna");
    }

    #[test]
    fn test_duplicate_skill() {
        assert!(parse("1 0\nAnna 2\nC++ 1\nC++ 3\n").is_err());
    }

    #[test]
    fn test_instance_name() {
        let instance = Instance::from_path(Path::new("inputs/a_an_example.in.txt")).unwrap();
        assert_eq!(instance.name, "a_an_example");
        assert_eq!(instance.path, PathBuf::from("inputs/a_an_example.in.txt"));
        assert!(Instance::from_path(Path::new("inputs/.in.txt")).is_err());
    }
}
