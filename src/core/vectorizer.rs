use std::collections::{HashMap, HashSet};

use crate::core::text::tokenize;

/// TF-IDF vectorizer fitted over a single request's corpus.
///
/// The vectorizer is rebuilt from scratch for every ranking call: document
/// frequencies are computed over the job plus all candidate documents of
/// that request, so term weighting is tied to the request and never leaks
/// state between calls.
///
/// Weighting contract (pinned, since scores depend on it):
/// - `idf(t) = ln((1 + n) / (1 + df(t))) + 1` with `n` = corpus size
/// - document vector = raw term counts * idf, L2-normalized
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    /// Term -> column index in the feature space.
    vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per column.
    idf: Vec<f64>,
}

impl TfIdfVectorizer {
    /// Fit a vectorizer over the given corpus.
    ///
    /// An all-empty corpus yields an empty vocabulary; `transform` then
    /// produces zero-length vectors and every similarity downstream is 0.
    pub fn fit(corpus: &[String]) -> Self {
        let n_documents = corpus.len();
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut document_frequency: HashMap<String, usize> = HashMap::new();

        for document in corpus {
            let unique_terms: HashSet<String> = tokenize(document).into_iter().collect();
            for term in unique_terms {
                *document_frequency.entry(term.clone()).or_insert(0) += 1;
                let next_index = vocabulary.len();
                vocabulary.entry(term).or_insert(next_index);
            }
        }

        let mut idf = vec![0.0; vocabulary.len()];
        for (term, &index) in &vocabulary {
            let df = document_frequency.get(term).copied().unwrap_or(0);
            idf[index] = ((1.0 + n_documents as f64) / (1.0 + df as f64)).ln() + 1.0;
        }

        Self { vocabulary, idf }
    }

    /// Transform a document into an L2-normalized TF-IDF vector in the
    /// fitted feature space.
    ///
    /// Terms outside the fitted vocabulary are ignored. A document with no
    /// in-vocabulary terms comes back as the zero vector.
    pub fn transform(&self, document: &str) -> Vec<f64> {
        let mut weights = vec![0.0; self.vocabulary.len()];

        for token in tokenize(document) {
            if let Some(&index) = self.vocabulary.get(&token) {
                weights[index] += 1.0;
            }
        }

        for (index, weight) in weights.iter_mut().enumerate() {
            *weight *= self.idf[index];
        }

        let norm = weights.iter().map(|w| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for weight in &mut weights {
                *weight /= norm;
            }
        }

        weights
    }

    /// Number of distinct terms in the fitted vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}
