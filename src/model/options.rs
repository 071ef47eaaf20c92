use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

/// What to do with a game container that is not skip-marked but lacks
/// its map data or agent titles.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    strum_macros::Display,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MalformedGamePolicy {
    /// Fail the whole extraction on the first malformed game.
    #[default]
    Abort,
    /// Drop the malformed game with a warning and keep going.
    Skip,
}

/// Options controlling a [`BracketScraper`](crate::BracketScraper).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    pub malformed_games: MalformedGamePolicy,
}

impl ExtractOptions {
    /// Options that drop malformed games instead of aborting.
    pub fn lenient() -> Self {
        Self {
            malformed_games: MalformedGamePolicy::Skip,
        }
    }
}
