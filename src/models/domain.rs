use serde::{Deserialize, Serialize};

/// Job posting to match freelancers against
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub title: String,
    pub description: String,
    pub skills: String,
}

impl Job {
    /// Combined document text: title, description, skills joined by single
    /// spaces, in that order. The order and separator are part of the
    /// scoring contract.
    pub fn combined_text(&self) -> String {
        format!("{} {} {}", self.title, self.description, self.skills)
    }
}

/// Freelancer profile submitted as a ranking candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreelanceProfile {
    pub id: i64,
    pub title: String,
    pub skills: String,
    pub bio: String,
}

impl FreelanceProfile {
    /// Combined document text: title, skills, bio joined by single spaces,
    /// in that order.
    pub fn combined_text(&self) -> String {
        format!("{} {} {}", self.title, self.skills, self.bio)
    }
}

/// Ranked result for one freelancer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedFreelance {
    pub freelance_id: i64,
    /// Cosine similarity in [0, 1], rounded to 4 decimals.
    pub score: f64,
}
