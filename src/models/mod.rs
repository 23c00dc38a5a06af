// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{FreelanceProfile, Job, RankedFreelance};
pub use requests::RecommendRequest;
pub use responses::{ErrorResponse, HealthResponse, RecommendResponse};
