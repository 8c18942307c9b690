use std::fmt;

/// Upstream API endpoints this service forwards to
///
/// Match-scoped variants carry the caller's match identifier, which is
/// interpolated into the path as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    /// High-level scorecard, first step of the scorecard fallback chain
    HighLevelScorecard(&'a str),
    /// Detailed scorecard, second step of the scorecard fallback chain
    DetailedScorecard(&'a str),
    /// Match center: details, info, squads
    MatchCenter(&'a str),
    Commentary(&'a str),
    Recent,
    Live,
    Upcoming,
}

impl Endpoint<'_> {
    /// Path relative to the upstream base URL
    pub fn path(&self) -> String {
        match self {
            Endpoint::HighLevelScorecard(id) => format!("/mcenter/v1/{}/hscard", id),
            Endpoint::DetailedScorecard(id) => format!("/mcenter/v1/{}/scard", id),
            Endpoint::MatchCenter(id) => format!("/mcenter/v1/{}", id),
            Endpoint::Commentary(id) => format!("/mcenter/v1/{}/comm", id),
            Endpoint::Recent => "/matches/v1/recent".to_string(),
            Endpoint::Live => "/matches/v1/live".to_string(),
            Endpoint::Upcoming => "/matches/v1/upcoming".to_string(),
        }
    }

    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::HighLevelScorecard(_) => "hscard",
            Endpoint::DetailedScorecard(_) => "scard",
            Endpoint::MatchCenter(_) => "mcenter",
            Endpoint::Commentary(_) => "comm",
            Endpoint::Recent => "recent",
            Endpoint::Live => "live",
            Endpoint::Upcoming => "upcoming",
        }
    }
}

impl fmt::Display for Endpoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_scoped_paths() {
        assert_eq!(Endpoint::HighLevelScorecard("12345").path(), "/mcenter/v1/12345/hscard");
        assert_eq!(Endpoint::DetailedScorecard("12345").path(), "/mcenter/v1/12345/scard");
        assert_eq!(Endpoint::MatchCenter("12345").path(), "/mcenter/v1/12345");
        assert_eq!(Endpoint::Commentary("12345").path(), "/mcenter/v1/12345/comm");
    }

    #[test]
    fn test_collection_paths() {
        assert_eq!(Endpoint::Recent.path(), "/matches/v1/recent");
        assert_eq!(Endpoint::Live.path(), "/matches/v1/live");
        assert_eq!(Endpoint::Upcoming.path(), "/matches/v1/upcoming");
    }

    #[test]
    fn test_identifier_is_not_rewritten() {
        assert_eq!(Endpoint::MatchCenter("abc-9").to_string(), "/mcenter/v1/abc-9");
    }
}
