use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{FreelanceProfile, Job};

/// Request to rank freelancers against a job posting
///
/// Matches the wire format the platform backend sends:
/// `{"job": {...}, "freelances": [...]}`. Text fields may be empty; an
/// empty candidate list is valid and yields an empty ranking.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    pub job: Job,
    // Cap batch size to protect the server from unbounded requests
    #[validate(length(max = 10000))]
    #[serde(default)]
    pub freelances: Vec<FreelanceProfile>,
}
