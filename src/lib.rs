//! Talent Algo - TF-IDF recommendation service for the freelancing platform
//!
//! This library provides the ranking core used by the platform backend to
//! order freelancer profiles by textual relevance to a job posting. Each
//! request fits its own TF-IDF feature space over the job plus all
//! candidates and scores candidates by cosine similarity.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{cosine_similarity, tokenize, Ranker, TfIdfVectorizer};
pub use crate::models::{FreelanceProfile, Job, RankedFreelance, RecommendRequest, RecommendResponse};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let tokens = tokenize("Rust Developer");
        assert_eq!(tokens.len(), 2);
    }
}
