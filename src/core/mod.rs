// Core logic exports
pub mod scorecard;

pub use scorecard::{fallback_payload, fetch_scorecard, has_scorecard, ScorecardSource};
