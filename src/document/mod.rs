//! Minimal node-tree capabilities the extractor needs from a markup parser.

mod html;

pub use html::HtmlDocument;

use itertools::Itertools;
use regex::Regex;
use scraper::Selector;

use crate::error::Result;

/// A navigable element in a parsed markup tree.
///
/// Implementations must return nodes in document order.
pub trait DocumentNode: Sized {
    fn tag_name(&self) -> &str;

    fn attribute(&self, name: &str) -> Option<&str>;

    /// Direct element children. Text and comment nodes are not included.
    fn child_nodes(&self) -> Vec<Self>;

    /// Every element below this node in pre-order, excluding the node itself.
    fn descendant_nodes(&self) -> Vec<Self>;

    fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|classes| classes.split_ascii_whitespace().any(|c| c == class))
    }

    fn find_all(&self, query: &NodeQuery) -> Vec<Self> {
        self.descendant_nodes()
            .into_iter()
            .filter(|node| query.matches(node))
            .collect()
    }

    fn find_first(&self, query: &NodeQuery) -> Option<Self> {
        self.descendant_nodes()
            .into_iter()
            .find(|node| query.matches(node))
    }
}

/// Attribute condition of a [`NodeQuery`].
#[derive(Debug, Clone)]
pub enum AttrPredicate {
    Any,
    /// All listed classes must be present on the node.
    Classes(&'static [&'static str]),
    /// The pattern must match somewhere in the attribute's value.
    Pattern {
        attribute: &'static str,
        pattern: Regex,
    },
}

/// A tag name plus an attribute predicate.
///
/// Tag and class queries also carry the equivalent CSS selector, so
/// parsers with native selector support can skip the manual walk.
#[derive(Debug, Clone)]
pub struct NodeQuery {
    pub tag: &'static str,
    pub predicate: AttrPredicate,
    css: Option<Selector>,
}

impl NodeQuery {
    pub fn tag(tag: &'static str) -> Result<Self> {
        Ok(Self {
            tag,
            predicate: AttrPredicate::Any,
            css: Some(Selector::parse(tag)?),
        })
    }

    pub fn classes(tag: &'static str, classes: &'static [&'static str]) -> Result<Self> {
        let css = format!("{tag}{}", classes.iter().map(|c| format!(".{c}")).join(""));
        let selector = Selector::parse(&css)?;
        Ok(Self {
            tag,
            predicate: AttrPredicate::Classes(classes),
            css: Some(selector),
        })
    }

    pub fn pattern(tag: &'static str, attribute: &'static str, pattern: &str) -> Result<Self> {
        Ok(Self {
            tag,
            predicate: AttrPredicate::Pattern {
                attribute,
                pattern: Regex::new(pattern)?,
            },
            css: None,
        })
    }

    /// The CSS form of this query, when one exists.
    pub fn css(&self) -> Option<&Selector> {
        self.css.as_ref()
    }

    pub fn matches<N: DocumentNode>(&self, node: &N) -> bool {
        if !node.tag_name().eq_ignore_ascii_case(self.tag) {
            return false;
        }
        match &self.predicate {
            AttrPredicate::Any => true,
            AttrPredicate::Classes(classes) => classes.iter().all(|c| node.has_class(c)),
            AttrPredicate::Pattern { attribute, pattern } => node
                .attribute(attribute)
                .is_some_and(|value| pattern.is_match(value)),
        }
    }
}
