//! Cricket Proxy - JSON proxy in front of the Cricbuzz cricket-data API
//!
//! Forwards browser requests to the upstream API with the RapidAPI credentials
//! attached, and resolves scorecards through a two-step endpoint fallback.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::config::Settings;
pub use crate::core::{fetch_scorecard, has_scorecard, ScorecardSource};
pub use models::{Endpoint, ErrorResponse, ScorecardFallback};
pub use routes::{configure_routes, AppState};
pub use services::{CricbuzzClient, CricbuzzError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        assert_eq!(Endpoint::Live.path(), "/matches/v1/live");
        assert!(!has_scorecard(&serde_json::json!({})));
    }
}
