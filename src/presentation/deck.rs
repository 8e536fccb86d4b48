// Page storage for a loaded presentation

/// Line that separates two pages in deck source
pub const PAGE_SEPARATOR: &str = "---";

/// One slide's raw markup, re-interpreted on every visit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    text: String,
}

impl Page {
    pub fn new(text: impl Into<String>) -> Self {
        Page { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Ordered, immutable page sequence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    pages: Vec<Page>,
}

impl Deck {
    /// Split deck source into pages on `---` lines.
    ///
    /// Blank pages in the middle of a deck are kept (they render as empty
    /// slides); a blank tail after the last separator is dropped.
    pub fn parse(raw: &str) -> Self {
        let mut pages = Vec::new();
        let mut current = String::new();

        for line in raw.split('\n') {
            if line.trim_end() == PAGE_SEPARATOR {
                pages.push(Page::new(std::mem::take(&mut current)));
                continue;
            }
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }

        let tail = Page::new(current);
        if !tail.is_blank() {
            pages.push(tail);
        }

        Deck { pages }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_separator() {
        let deck = Deck::parse("title: One\n---\ntitle: Two\ntxt,1,1: x\n");
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.page(0).map(Page::text), Some("title: One"));
        assert_eq!(deck.page(1).map(Page::text), Some("title: Two\ntxt,1,1: x\n"));
    }

    #[test]
    fn test_empty_source_has_no_pages() {
        assert!(Deck::parse("").is_empty());
        assert!(Deck::parse("  \n\n").is_empty());
    }

    #[test]
    fn test_trailing_separator_and_blank_middle_page() {
        let deck = Deck::parse("a\n---\n---  \nb\n---\n");
        assert_eq!(deck.len(), 3);
        assert!(deck.page(1).is_some_and(Page::is_blank));
        assert_eq!(deck.page(2).map(Page::text), Some("b"));
    }

    #[test]
    fn test_separator_needs_whole_line() {
        let deck = Deck::parse("txt,1,1: ---\nmore");
        assert_eq!(deck.len(), 1);
    }
}
