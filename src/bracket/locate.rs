use tracing::debug;

use super::BracketQueries;
use crate::document::DocumentNode;
use crate::error::{BracketError, Result};

/// All bracket regions (div.bracket-scroller) below `root`, in document order.
pub(crate) fn locate_brackets<N: DocumentNode>(
    root: &N,
    queries: &BracketQueries,
) -> Result<Vec<N>> {
    let brackets = root.find_all(&queries.scroller);
    if brackets.is_empty() {
        return Err(BracketError::MissingBracket);
    }
    debug!(count = brackets.len(), "located bracket regions");
    Ok(brackets)
}
