use serde::Deserialize;

/// Path parameters for match-scoped routes
///
/// The identifier is opaque and deliberately unvalidated.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchPath {
    pub id: String,
}
