use crate::models::{Endpoint, ScorecardFallback, NO_SCORECARD_DEBUG};
use crate::services::{CricbuzzClient, CricbuzzError};
use serde_json::{json, Value};

/// Where a scorecard response came from
#[derive(Debug, Clone, PartialEq)]
pub enum ScorecardSource {
    /// First call (hscard) had innings, returned verbatim
    HighLevel(Value),
    /// Second call (scard) had innings, returned verbatim
    Detailed(Value),
    /// Neither had innings, normalized from the first payload
    Fallback(ScorecardFallback),
}

impl ScorecardSource {
    pub fn label(&self) -> &'static str {
        match self {
            ScorecardSource::HighLevel(_) => "hscard",
            ScorecardSource::Detailed(_) => "scard",
            ScorecardSource::Fallback(_) => "fallback",
        }
    }

    /// JSON body to return to the caller
    pub fn into_value(self) -> Value {
        match self {
            ScorecardSource::HighLevel(value) | ScorecardSource::Detailed(value) => value,
            ScorecardSource::Fallback(fallback) => json!(fallback),
        }
    }
}

/// True when the payload has a `scoreCard` array with at least one entry
pub fn has_scorecard(payload: &Value) -> bool {
    payload
        .get("scoreCard")
        .and_then(Value::as_array)
        .is_some_and(|innings| !innings.is_empty())
}

/// Normalize the first payload when no scorecard data was found anywhere
///
/// Present keys are carried over untouched; absent ones default to `[]` / `{}`.
pub fn fallback_payload(first: &Value) -> ScorecardFallback {
    ScorecardFallback {
        score_card: first.get("scoreCard").cloned().unwrap_or_else(|| json!([])),
        match_header: first.get("matchHeader").cloned().unwrap_or_else(|| json!({})),
        debug: NO_SCORECARD_DEBUG.to_string(),
    }
}

/// Resolve a scorecard through the two-step chain
///
/// The detailed endpoint is only consulted when the high-level payload is
/// empty. A failure of either call aborts the chain.
pub async fn fetch_scorecard(
    client: &CricbuzzClient,
    match_id: &str,
) -> Result<ScorecardSource, CricbuzzError> {
    let first = client.fetch(Endpoint::HighLevelScorecard(match_id)).await?;
    if has_scorecard(&first) {
        return Ok(ScorecardSource::HighLevel(first));
    }

    tracing::debug!("No innings in hscard for match {}, trying scard", match_id);

    let second = client.fetch(Endpoint::DetailedScorecard(match_id)).await?;
    if has_scorecard(&second) {
        return Ok(ScorecardSource::Detailed(second));
    }

    Ok(ScorecardSource::Fallback(fallback_payload(&first)))
}
