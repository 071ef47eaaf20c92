use tracing::{debug, warn};

use super::matchup::Matchup;
use super::{BracketQueries, TITLE_ATTRIBUTE};
use crate::document::DocumentNode;
use crate::error::{BracketError, Result};
use crate::model::{ExtractOptions, Game, GamePosition, MalformedGamePolicy};
use crate::normalize::normalize;

/// Extract the games of one matchup, dropping skip-marked containers.
///
/// `base` carries the bracket and matchup indices; the game index is
/// filled in per container.
pub(crate) fn extract_games<N: DocumentNode>(
    matchup: &Matchup<N>,
    queries: &BracketQueries,
    options: &ExtractOptions,
    base: GamePosition,
) -> Result<Vec<Game>> {
    let mut games = Vec::new();
    for (index, container) in matchup.region.find_all(&queries.game).iter().enumerate() {
        let position = GamePosition { game: index, ..base };
        if container.find_first(&queries.map_skip).is_some() {
            debug!(%position, "skipping unplayed map");
            continue;
        }
        match parse_game(&matchup.teams, container, queries, position) {
            Ok(game) => games.push(game),
            Err(err @ BracketError::MalformedGame { .. })
                if options.malformed_games == MalformedGamePolicy::Skip =>
            {
                warn!(%position, error = %err, "dropping malformed game");
            }
            Err(err) => return Err(err),
        }
    }
    Ok(games)
}

fn parse_game<N: DocumentNode>(
    teams: &[String],
    container: &N,
    queries: &BracketQueries,
    position: GamePosition,
) -> Result<Game> {
    let malformed = |context| BracketError::MalformedGame { position, context };

    let map_element = container
        .find_first(&queries.map)
        .ok_or_else(|| malformed("missing map element (div.bracket-popup-body-match-map)"))?;
    let map_link = map_element
        .find_first(&queries.map_link)
        .ok_or_else(|| malformed("missing map link"))?;
    let map = map_link
        .attribute(TITLE_ATTRIBUTE)
        .map(normalize)
        .ok_or_else(|| malformed("missing map title"))?;

    // One panel per team, each child is a pick
    let agents = container
        .find_all(&queries.agent_panel)
        .iter()
        .map(|panel| {
            panel
                .child_nodes()
                .iter()
                .map(|pick| {
                    pick.attribute(TITLE_ATTRIBUTE)
                        .map(normalize)
                        .ok_or_else(|| malformed("agent pick without title"))
                })
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;

    // Short tuples (TBD opponents) carry whatever panels the page has
    if teams.len() >= 2 && !agents.is_empty() && agents.len() != teams.len() {
        return Err(malformed("agent panel count does not match team count"));
    }

    Ok(Game {
        teams: teams.to_vec(),
        map,
        agents,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bracket::fixtures::*;
    use crate::document::HtmlDocument;

    fn run(html: &str, options: ExtractOptions) -> Result<Vec<Game>> {
        let document = HtmlDocument::parse(html);
        let queries = BracketQueries::new().unwrap();
        let root = document.root();
        let region = root.find_first(&queries.matchup).unwrap();
        let matchup = Matchup {
            teams: vec!["TeamA".to_string(), "TeamB".to_string()],
            region,
        };
        extract_games(&matchup, &queries, &options, GamePosition::default())
    }

    fn single(games: &[String]) -> String {
        page(&[bracket(&[matchup(&["TeamA", "TeamB"], games)])])
    }

    #[test]
    fn test_extract_game_fields() {
        let html = single(&[game("Ascent", &["Jett!", "Sova#"], &["Sage", "Omen"])]);
        let games = run(&html, ExtractOptions::default()).unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].teams, ["TeamA", "TeamB"]);
        assert_eq!(games[0].map, "ASCENT");
        assert_eq!(games[0].agents, [["JETT", "SOVA"], ["SAGE", "OMEN"]]);
    }

    #[test]
    fn test_skip_marker_does_not_shift_later_games() {
        let html = single(&[
            skipped_game(),
            game("Bind", &["Raze"], &["Viper"]),
            skipped_game(),
            game("Breeze", &["Chamber"], &["Cypher"]),
        ]);
        let games = run(&html, ExtractOptions::default()).unwrap();
        let maps: Vec<&str> = games.iter().map(|g| g.map.as_str()).collect();
        assert_eq!(maps, ["BIND", "BREEZE"]);
        assert_eq!(games[1].agents, [["CHAMBER"], ["CYPHER"]]);
    }

    #[test]
    fn test_missing_map_title() {
        let html = single(&[
            game("Bind", &["Raze"], &["Viper"]),
            game_without_map_title(&["Raze"], &["Viper"]),
        ]);
        match run(&html, ExtractOptions::default()) {
            Err(BracketError::MalformedGame { position, context }) => {
                assert_eq!(position.game, 1);
                assert_eq!(context, "missing map title");
            }
            other => panic!("expected malformed game, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_map_element() {
        let html = single(&[game_without_map(&["Raze"], &["Viper"])]);
        assert!(matches!(
            run(&html, ExtractOptions::default()),
            Err(BracketError::MalformedGame { .. })
        ));
    }

    #[test]
    fn test_lenient_policy_skips_malformed() {
        let html = single(&[
            game_without_map_title(&["Raze"], &["Viper"]),
            game("Sunset", &["Iso"], &["Clove"]),
        ]);
        let games = run(&html, ExtractOptions::lenient()).unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].map, "SUNSET");
    }

    #[test]
    fn test_agent_without_title() {
        let html = single(&[
            "<div class=\"bracket-popup-body-match-container\"><div style=\"float:left;margin-right:10px\"><span title=\"Jett\"></span><span></span></div><div class=\"bracket-popup-body-match-map\"><a title=\"Ascent\">Ascent</a></div><div style=\"float:right;margin-left:10px\"><span title=\"Sage\"></span></div></div>".to_string(),
        ]);
        match run(&html, ExtractOptions::default()) {
            Err(BracketError::MalformedGame { context, .. }) => {
                assert_eq!(context, "agent pick without title")
            }
            other => panic!("expected malformed game, got {other:?}"),
        }
    }

    #[test]
    fn test_misaligned_agent_panels() {
        let html = single(&[format!(
            "<div class=\"bracket-popup-body-match-container\">{}<div class=\"bracket-popup-body-match-map\"><a title=\"Ascent\">Ascent</a></div></div>",
            agent_panel("float:left;margin-right:10px", &["Jett"]),
        )]);
        assert!(matches!(
            run(&html, ExtractOptions::default()),
            Err(BracketError::MalformedGame { .. })
        ));
    }

    #[test]
    fn test_game_without_agent_panels() {
        let html = single(&["<div class=\"bracket-popup-body-match-container\"><div class=\"bracket-popup-body-match-map\"><a title=\"Abyss\">Abyss</a></div></div>".to_string()]);
        let games = run(&html, ExtractOptions::default()).unwrap();
        assert_eq!(games[0].map, "ABYSS");
        assert!(games[0].agents.is_empty());
    }
}
