//! Bracket page extraction: bracket regions, matchups, games.

#[cfg(test)]
pub(crate) mod fixtures;
pub(crate) mod game;
pub(crate) mod locate;
pub(crate) mod matchup;

use tracing::{debug, instrument};

use crate::document::{DocumentNode, HtmlDocument, NodeQuery};
use crate::error::{BracketError, Result};
use crate::model::{ExtractOptions, GameCollection, GamePosition};

pub(crate) const TEAM_ATTRIBUTE: &str = "data-highlightingclass";
pub(crate) const TITLE_ATTRIBUTE: &str = "title";

const AGENT_PANEL_STYLE: &str = r"float:(?:left|right);margin-(?:left|right):10px";

/// Node queries for the Liquipedia bracket popup layout, compiled once.
#[derive(Debug, Clone)]
pub(crate) struct BracketQueries {
    pub scroller: NodeQuery,
    pub matchup: NodeQuery,
    pub team: NodeQuery,
    pub game: NodeQuery,
    pub map_skip: NodeQuery,
    pub map: NodeQuery,
    pub map_link: NodeQuery,
    pub agent_panel: NodeQuery,
}

impl BracketQueries {
    pub(crate) fn new() -> Result<Self> {
        Ok(Self {
            scroller: NodeQuery::classes("div", &["bracket-scroller"])?,
            matchup: NodeQuery::classes("div", &["bracket-popup-wrapper", "bracket-popup-team"])?,
            team: NodeQuery::classes("span", &["team-template-team-short"])?,
            game: NodeQuery::classes("div", &["bracket-popup-body-match-container"])?,
            map_skip: NodeQuery::classes("div", &["bracket-popup-body-match-mapskip"])?,
            map: NodeQuery::classes("div", &["bracket-popup-body-match-map"])?,
            map_link: NodeQuery::tag("a")?,
            agent_panel: NodeQuery::pattern("div", "style", AGENT_PANEL_STYLE)?,
        })
    }
}

/// Extracts [`Game`](crate::Game) records from bracket pages.
///
/// A scraper holds no per-document state and can be shared between
/// threads extracting different pages.
///
/// # Examples
///
/// ```no_run
/// # fn example(html: &str) -> liquipedia_bracket::Result<()> {
/// use liquipedia_bracket::{BracketScraper, ExtractOptions};
///
/// let scraper = BracketScraper::with_options(ExtractOptions::lenient())?;
/// let games = scraper.extract(html)?;
/// println!("Found {} games", games.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BracketScraper {
    queries: BracketQueries,
    options: ExtractOptions,
}

impl BracketScraper {
    /// Create a scraper that aborts on the first malformed game.
    pub fn new() -> Result<Self> {
        Self::with_options(ExtractOptions::default())
    }

    pub fn with_options(options: ExtractOptions) -> Result<Self> {
        Ok(Self {
            queries: BracketQueries::new()?,
            options,
        })
    }

    /// The options this scraper was built with.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Parse the page markup and extract every game, in document order.
    ///
    /// Markup that is empty or consists only of whitespace is rejected with
    /// [`BracketError::InvalidInput`] before any parsing.
    #[instrument(skip_all, fields(len = markup.len()))]
    pub fn extract(&self, markup: &str) -> Result<GameCollection> {
        if markup.trim().is_empty() {
            return Err(BracketError::InvalidInput {
                reason: "page markup is empty",
            });
        }
        let document = HtmlDocument::parse(markup);
        self.extract_from(&document.root())
    }

    /// Like [`extract`](Self::extract), for a raw response body.
    /// Invalid UTF-8 sequences are replaced.
    pub fn extract_bytes(&self, body: &[u8]) -> Result<GameCollection> {
        self.extract(&String::from_utf8_lossy(body))
    }

    /// Extract games from an already parsed tree.
    pub fn extract_from<N: DocumentNode>(&self, root: &N) -> Result<GameCollection> {
        let brackets = locate::locate_brackets(root, &self.queries)?;
        let mut games = Vec::new();
        for (bracket_index, bracket) in brackets.iter().enumerate() {
            let matchups = matchup::walk_matchups(bracket, &self.queries);
            for (matchup_index, matchup) in matchups.iter().enumerate() {
                let position = GamePosition {
                    bracket: bracket_index,
                    matchup: matchup_index,
                    game: 0,
                };
                games.extend(game::extract_games(
                    matchup,
                    &self.queries,
                    &self.options,
                    position,
                )?);
            }
        }
        debug!(
            brackets = brackets.len(),
            games = games.len(),
            "extracted bracket games"
        );
        Ok(GameCollection::new(games))
    }
}

/// Extract games from page markup with default options.
pub fn extract(markup: &str) -> Result<GameCollection> {
    BracketScraper::new()?.extract(markup)
}
