// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::Endpoint;
pub use requests::MatchPath;
pub use responses::{ErrorResponse, HealthResponse, ScorecardFallback, NO_SCORECARD_DEBUG};
