//! Extract Valorant game results from Liquipedia tournament bracket pages.
//!
//! ```no_run
//! # fn example(html: &str) -> liquipedia_bracket::Result<()> {
//! let games = liquipedia_bracket::extract(html)?;
//! for game in &games {
//!     println!("{:?} on {}: {:?}", game.teams, game.map, game.agents);
//! }
//! # Ok(())
//! # }
//! ```

pub use bracket::{extract, BracketScraper};
pub use error::{BracketError, Result};
pub use model::*;
pub use normalize::normalize;

mod bracket;
pub mod document;
mod error;
mod model;
mod normalize;
