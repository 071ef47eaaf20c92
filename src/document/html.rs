use scraper::{CaseSensitivity, ElementRef, Html};

use super::{DocumentNode, NodeQuery};

/// A parsed HTML page. Owns the node tree for the duration of extraction.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }
}

impl<'a> DocumentNode for ElementRef<'a> {
    fn tag_name(&self) -> &str {
        self.value().name()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }

    fn child_nodes(&self) -> Vec<Self> {
        self.children().filter_map(ElementRef::wrap).collect()
    }

    fn descendant_nodes(&self) -> Vec<Self> {
        self.descendants().skip(1).filter_map(ElementRef::wrap).collect()
    }

    fn has_class(&self, class: &str) -> bool {
        self.value().has_class(class, CaseSensitivity::CaseSensitive)
    }

    fn find_all(&self, query: &NodeQuery) -> Vec<Self> {
        match query.css() {
            Some(selector) => self.select(selector).filter(|e| e != self).collect(),
            None => self
                .descendants()
                .skip(1)
                .filter_map(ElementRef::wrap)
                .filter(|e| query.matches(e))
                .collect(),
        }
    }

    fn find_first(&self, query: &NodeQuery) -> Option<Self> {
        match query.css() {
            Some(selector) => self.select(selector).find(|e| e != self),
            None => self
                .descendants()
                .skip(1)
                .filter_map(ElementRef::wrap)
                .find(|e| query.matches(e)),
        }
    }
}
