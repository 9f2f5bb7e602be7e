use crate::config::TieBreak;
use crate::model::{ContributorId, Roster};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::info;

/// Order in which contributors are examined by the selection rule. When
/// several candidates are free on the same day, the first one in this order
/// is picked.
pub fn contributor_order(roster: &Roster, tie_break: TieBreak, seed: Option<u64>) -> Vec<ContributorId> {
    let mut order = roster.all_contributors();
    match tie_break {
        TieBreak::Input => (),
        TieBreak::Name => order.sort_by(|&a, &b| roster.name_of(a).cmp(roster.name_of(b))),
        TieBreak::Shuffle => {
            let seed = seed.unwrap_or_else(rand::random);
            info!(seed, "shuffling contributors");
            order.shuffle(&mut StdRng::seed_from_u64(seed));
        }
    }
    order
}
