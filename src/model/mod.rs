pub use self::contributor::{Contributor, ContributorId};
pub use self::project::{Project, ProjectId, sort_by_duration};
pub use self::roster::Roster;
pub use self::skill::Skill;
pub use self::solution::{Solution, SolutionEntry};

mod contributor;
mod project;
mod roster;
mod skill;
mod solution;
