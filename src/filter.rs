// Search filtering over task text

/// Case-insensitive substring filter.
///
/// Holds the search term verbatim (no trimming); an empty term matches
/// every task.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    term: String,
}

impl SearchFilter {
    pub fn new(term: impl Into<String>) -> Self {
        Self { term: term.into() }
    }

    /// The current search term, exactly as set
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Replace the search term verbatim
    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
    }

    /// Whether `text` contains the term, case-insensitively.
    ///
    /// Uses `to_lowercase` rather than ASCII folding so non-ASCII task text
    /// matches the way it would in a UI search box.
    pub fn matches(&self, text: &str) -> bool {
        if self.term.is_empty() {
            return true;
        }
        text.to_lowercase().contains(&self.term.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_term_matches_all() {
        let filter = SearchFilter::default();
        assert!(filter.matches("Buy milk"));
        assert!(filter.matches(""));
    }

    #[test]
    fn test_case_insensitive_match() {
        let filter = SearchFilter::new("MILK");
        assert!(filter.matches("Buy milk"));

        let filter = SearchFilter::new("milk");
        assert!(filter.matches("BUY MILK"));
    }

    #[test]
    fn test_substring_match() {
        let filter = SearchFilter::new("y m");
        assert!(filter.matches("Buy milk"));
        assert!(!filter.matches("Buy bread"));
    }

    #[test]
    fn test_term_not_trimmed() {
        // Term is stored verbatim; leading whitespace is significant
        let filter = SearchFilter::new(" milk");
        assert_eq!(filter.term(), " milk");
        assert!(filter.matches("Buy milk"));
        assert!(!filter.matches("milk first"));
    }

    #[test]
    fn test_non_ascii_match() {
        let filter = SearchFilter::new("CAFÉ");
        assert!(filter.matches("visit café"));
    }

    #[test]
    fn test_set_term_replaces() {
        let mut filter = SearchFilter::new("milk");
        filter.set_term("bread");
        assert_eq!(filter.term(), "bread");
        assert!(!filter.matches("Buy milk"));
        assert!(filter.matches("Buy bread"));
    }
}
