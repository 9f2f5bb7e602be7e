use super::ProjectId;
use serde::Serialize;
use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SolutionEntry {
    #[serde(skip)]
    pub project: ProjectId,
    pub project_name: String,
    pub contributors: Vec<String>,
}

/// Staffed projects, in the order they were accepted.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct Solution {
    pub entries: Vec<SolutionEntry>,
}

impl Solution {
    pub fn push(&mut self, entry: SolutionEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Submission format: the number of staffed projects, then for each of
/// them a line with its name and a line with its contributors.
impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.entries.len())?;
        for entry in &self.entries {
            write!(f, "\n{}\n{}", entry.project_name, entry.contributors.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: usize, name: &str, contributors: &[&str]) -> SolutionEntry {
        SolutionEntry {
            project: ProjectId(id),
            project_name: name.to_owned(),
            contributors: contributors.iter().map(|&c| c.to_owned()).collect(),
        }
    }

    #[test]
    fn test_empty_output() {
        assert_eq!(Solution::default().to_string(), "0");
    }

    #[test]
    fn test_output() {
        let mut solution = Solution::default();
        solution.push(entry(2, "WebServer", &["Bob", "Anna"]));
        solution.push(entry(0, "Logging", &["Anna"]));
        solution.push(entry(1, "WebChat", &["Maria", "Bob"]));
        assert_eq!(
            solution.to_string(),
            "3\nWebServer\nBob Anna\nLogging\nAnna\nWebChat\nMaria Bob"
        );
    }
}
