pub use self::greedy::Greedy;
pub use self::ordering::contributor_order;

mod greedy;
mod ordering;
