use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Count vectorizer over whitespace-separated k-mer tokens.
///
/// The vocabulary keeps the `max_features` most frequent tokens of the
/// training corpus (ties broken alphabetically) and is stored in alphabetical
/// order, so column `i` always refers to the same token across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KmerVectorizer {
    max_features: usize,
    vocabulary: IndexSet<String>,
}

impl KmerVectorizer {
    pub fn new(max_features: usize) -> Self {
        Self {
            max_features,
            vocabulary: IndexSet::new(),
        }
    }

    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> &mut Self {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for doc in documents {
            for token in doc.as_ref().split_whitespace() {
                *counts.entry(token).or_insert(0) += 1;
            }
        }

        let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
        ranked.sort_by(|(ta, ca), (tb, cb)| cb.cmp(ca).then_with(|| ta.cmp(tb)));
        ranked.truncate(self.max_features);

        let mut tokens: Vec<&str> = ranked.into_iter().map(|(token, _)| token).collect();
        tokens.sort_unstable();

        self.vocabulary = tokens.into_iter().map(str::to_string).collect();
        tracing::debug!("Vectorizer fitted with {} features", self.vocabulary.len());
        self
    }

    /// Dense token counts; tokens outside the vocabulary are ignored.
    pub fn transform(&self, document: &str) -> Vec<f64> {
        let mut row = vec![0.0; self.vocabulary.len()];
        for token in document.split_whitespace() {
            if let Some(column) = self.vocabulary.get_index_of(token) {
                row[column] += 1.0;
            }
        }
        row
    }

    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.vocabulary.iter().map(String::as_str)
    }

    pub fn num_features(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn is_fitted(&self) -> bool {
        !self.vocabulary.is_empty()
    }
}
