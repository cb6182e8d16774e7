//! Lexicon types: the search vocabulary, grouped into categories.

/// One lexicon row: a term, the category it belongs to, and whether the
/// term may also appear with a trailing "s".
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LexiconEntry {
    pub term: String,
    pub category: String,
    pub plural: bool,
}

/// A loaded lexicon. Entries keep their source file order; categories are
/// the distinct category values in first-seen order.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
    categories: Vec<String>,
}

impl Lexicon {
    pub fn new(entries: Vec<LexiconEntry>) -> Self {
        let mut categories: Vec<String> = Vec::new();
        for entry in &entries {
            if !categories.contains(&entry.category) {
                categories.push(entry.category.clone());
            }
        }
        Self {
            entries,
            categories,
        }
    }

    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    /// Distinct category names, in file order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn contains_category(&self, name: &str) -> bool {
        self.categories.iter().any(|category| category == name)
    }

    /// Number of terms in a category.
    pub fn category_term_count(&self, category: &str) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.category == category)
            .count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
