use ::scraper::error::SelectorErrorKind;

use crate::model::GamePosition;

/// All errors that can occur while extracting games from a bracket page.
#[derive(thiserror::Error, Debug)]
pub enum BracketError {
    /// The markup handed to the extractor was empty.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: &'static str },

    /// The page has no bracket region (div.bracket-scroller).
    #[error("no bracket region found (div.bracket-scroller)")]
    MissingBracket,

    /// A game container that is not skip-marked lacks required data.
    #[error("malformed game at {position}: {context}")]
    MalformedGame {
        position: GamePosition,
        context: &'static str,
    },

    /// A node query pattern could not be compiled.
    #[error("invalid node pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A CSS selector string could not be parsed.
    #[error("invalid CSS selector: {0}")]
    Selector(String),
}

impl<'a> From<SelectorErrorKind<'a>> for BracketError {
    fn from(err: SelectorErrorKind<'a>) -> Self {
        BracketError::Selector(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BracketError>;
