// Core algorithm exports
pub mod ranker;
pub mod similarity;
pub mod text;
pub mod vectorizer;

pub use ranker::Ranker;
pub use similarity::{cosine_similarity, round_score};
pub use text::tokenize;
pub use vectorizer::TfIdfVectorizer;
