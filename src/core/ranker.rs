use crate::core::{
    similarity::{cosine_similarity, round_score},
    vectorizer::TfIdfVectorizer,
};
use crate::models::{FreelanceProfile, Job, RankedFreelance};

/// Ranks freelancer profiles against a job posting by textual similarity.
///
/// Each call is fully self-contained: a fresh TF-IDF feature space is
/// fitted over the request's own corpus (job + candidates), so concurrent
/// requests share nothing and need no locking.
#[derive(Debug, Clone, Default)]
pub struct Ranker;

impl Ranker {
    pub fn new() -> Self {
        Self
    }

    /// Rank `freelances` by descending TF-IDF cosine similarity to `job`.
    ///
    /// The result always has exactly one entry per input profile, in
    /// descending score order; equal scores keep their input order (stable
    /// sort). Empty input yields an empty result.
    pub fn rank(&self, job: &Job, freelances: &[FreelanceProfile]) -> Vec<RankedFreelance> {
        if freelances.is_empty() {
            return Vec::new();
        }

        // Document 0 is the job; document i+1 is freelance i. Field order
        // and the single-space separator are part of the scoring contract.
        let mut corpus = Vec::with_capacity(1 + freelances.len());
        corpus.push(job.combined_text());
        corpus.extend(freelances.iter().map(FreelanceProfile::combined_text));

        let vectorizer = TfIdfVectorizer::fit(&corpus);
        let job_vector = vectorizer.transform(&corpus[0]);

        let mut ranked: Vec<RankedFreelance> = freelances
            .iter()
            .zip(&corpus[1..])
            .map(|(freelance, text)| {
                let candidate_vector = vectorizer.transform(text);
                let score = round_score(cosine_similarity(&job_vector, &candidate_vector));

                RankedFreelance {
                    freelance_id: freelance.id,
                    score,
                }
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        ranked
    }
}
