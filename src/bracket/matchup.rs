use itertools::Itertools;
use tracing::debug;

use super::{BracketQueries, TEAM_ATTRIBUTE};
use crate::document::DocumentNode;

/// A bracket popup: the teams shared by every game inside `region`.
pub(crate) struct Matchup<N> {
    pub teams: Vec<String>,
    pub region: N,
}

/// Collect every matchup popup within a bracket region.
///
/// Team identifiers come from the `data-highlightingclass` of each short
/// team span. Whatever count is found is kept as-is, even below two.
pub(crate) fn walk_matchups<N: DocumentNode>(
    bracket: &N,
    queries: &BracketQueries,
) -> Vec<Matchup<N>> {
    let matchups = bracket
        .find_all(&queries.matchup)
        .into_iter()
        .map(|region| {
            let teams = region
                .find_all(&queries.team)
                .iter()
                .filter_map(|span| {
                    let id = span.attribute(TEAM_ATTRIBUTE);
                    if id.is_none() {
                        debug!("team span without {TEAM_ATTRIBUTE}");
                    }
                    id.map(str::to_string)
                })
                .collect_vec();
            Matchup { teams, region }
        })
        .collect_vec();
    debug!(count = matchups.len(), "walked bracket matchups");
    matchups
}
