//! Tag collection widget logic — a reusable micro-state-machine for
//! array-of-string fields.
//!
//! Owns the committed tags plus the pending input buffer. Invariant: the
//! array never contains two equal strings (case-sensitive exact match).

/// State for one tag-input field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagField {
    tags: Vec<String>,
    buffer: String,
}

impl TagField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from already-collected tags (e.g. a prefilled value),
    /// dropping duplicates while preserving first-seen order.
    pub fn from_tags<I>(tags: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut field = Self::new();
        for tag in tags {
            field.commit(&tag);
        }
        field
    }

    /// The committed tags, in insertion order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// The pending (not yet committed) input text.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Replace the pending input text.
    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    /// Commit raw text as a tag.
    ///
    /// Trims whitespace; appends only when the trimmed text is non-empty and
    /// not already present. The pending buffer is cleared either way — an
    /// empty or duplicate commit is a silent no-op on the array.
    ///
    /// Returns whether a tag was appended.
    pub fn commit(&mut self, raw: &str) -> bool {
        self.buffer.clear();
        let trimmed = raw.trim();
        if trimmed.is_empty() || self.tags.iter().any(|t| t == trimmed) {
            return false;
        }
        self.tags.push(trimmed.to_string());
        true
    }

    /// Commit whatever is in the pending buffer.
    pub fn commit_buffer(&mut self) -> bool {
        let raw = std::mem::take(&mut self.buffer);
        self.commit(&raw)
    }

    /// Remove the exact tag. Returns whether it was present.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        // At most one match exists by the dedupe invariant.
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
            true
        } else {
            false
        }
    }

    /// Backspace pressed on an empty buffer: pop the last-added tag.
    ///
    /// A fast-correction affordance; does nothing when the buffer still has
    /// text or when there are no tags.
    pub fn backspace_on_empty(&mut self) -> Option<String> {
        if self.buffer.is_empty() {
            self.tags.pop()
        } else {
            None
        }
    }

    /// Consume the field, yielding the committed tags.
    pub fn into_tags(self) -> Vec<String> {
        self.tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_trims_appends_and_clears_buffer() {
        let mut field = TagField::new();
        field.set_buffer("  Physics  ");
        assert!(field.commit("  Physics  "));
        assert_eq!(field.tags(), ["Physics"]);
        assert_eq!(field.buffer(), "");
    }

    #[test]
    fn empty_and_whitespace_commits_are_no_ops() {
        let mut field = TagField::new();
        assert!(!field.commit(""));
        assert!(!field.commit("   "));
        assert!(field.tags().is_empty());
    }

    #[test]
    fn duplicates_are_rejected_case_sensitively() {
        let mut field = TagField::new();
        assert!(field.commit("Physics"));
        // Different case is a different tag.
        assert!(field.commit("physics"));
        assert_eq!(field.tags(), ["Physics", "physics"]);
        // Exact duplicate is a no-op.
        assert!(!field.commit("Physics"));
        assert_eq!(field.tags(), ["Physics", "physics"]);
    }

    #[test]
    fn duplicate_commit_still_clears_buffer() {
        let mut field = TagField::new();
        field.commit("Math");
        field.set_buffer("Math");
        assert!(!field.commit_buffer());
        assert_eq!(field.buffer(), "");
        assert_eq!(field.tags(), ["Math"]);
    }

    #[test]
    fn no_duplicates_for_any_commit_sequence() {
        let inputs = [
            "a", "b", "a", " b ", "c", "", "c", "A", "a ", "b", "d", "  ", "d",
        ];
        let mut field = TagField::new();
        for raw in inputs {
            field.commit(raw);
        }
        // First-seen order, no repeats.
        assert_eq!(field.tags(), ["a", "b", "c", "A", "d"]);
        for (i, tag) in field.tags().iter().enumerate() {
            assert!(!field.tags()[i + 1..].contains(tag));
        }
    }

    #[test]
    fn remove_tag_exact_match() {
        let mut field = TagField::from_tags(vec!["Rust".to_string(), "Go".to_string()]);
        assert!(field.remove_tag("Rust"));
        assert_eq!(field.tags(), ["Go"]);
        assert!(!field.remove_tag("rust"));
        assert!(!field.remove_tag("Rust"));
    }

    #[test]
    fn backspace_pops_only_when_buffer_empty() {
        let mut field = TagField::from_tags(vec!["one".to_string(), "two".to_string()]);

        field.set_buffer("pending");
        assert_eq!(field.backspace_on_empty(), None);
        assert_eq!(field.tags(), ["one", "two"]);

        field.set_buffer("");
        assert_eq!(field.backspace_on_empty(), Some("two".to_string()));
        assert_eq!(field.tags(), ["one"]);
        assert_eq!(field.backspace_on_empty(), Some("one".to_string()));
        assert_eq!(field.backspace_on_empty(), None);
    }

    #[test]
    fn from_tags_dedupes_preserving_order() {
        let field = TagField::from_tags(vec![
            "x".to_string(),
            "y".to_string(),
            "x".to_string(),
        ]);
        assert_eq!(field.tags(), ["x", "y"]);
    }
}
