use std::fmt::{Display, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// A single played map within a matchup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Team identifiers in matchup order.
    pub teams: Vec<String>,
    pub map: String,
    /// One pick list per team, aligned with `teams`.
    pub agents: Vec<Vec<String>>,
}

/// Ordered games extracted from one page, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameCollection(Vec<Game>);

impl GameCollection {
    pub(crate) fn new(games: Vec<Game>) -> Self {
        Self(games)
    }

    /// Consume the collection, returning the underlying games.
    pub fn into_vec(self) -> Vec<Game> {
        self.0
    }
}

impl Deref for GameCollection {
    type Target = [Game];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for GameCollection {
    type Item = Game;
    type IntoIter = std::vec::IntoIter<Game>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a GameCollection {
    type Item = &'a Game;
    type IntoIter = std::slice::Iter<'a, Game>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Zero-based location of a game container: bracket region, matchup
/// within the region, game within the matchup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GamePosition {
    pub bracket: usize,
    pub matchup: usize,
    pub game: usize,
}

impl Display for GamePosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "bracket {} / matchup {} / game {}",
            self.bracket, self.matchup, self.game
        )
    }
}
