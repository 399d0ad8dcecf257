use serde::{Deserialize, Serialize};

/// A request for a single matchup prediction.
///
/// This is both the body the UI submits and the wire payload sent to a
/// remote scoring endpoint. Missing team names deserialize as empty strings;
/// the scoring formula accepts those without complaint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// League the matchup belongs to. The scoring formula never reads it,
    /// but it is forwarded to remote endpoints that do.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub league_id: Option<String>,
    #[serde(default)]
    pub home_team: String,
    #[serde(default)]
    pub away_team: String,
}

/// Win/draw/loss probabilities, each in [0, 1].
///
/// The triple sums to exactly 1.0 only when `home + away <= 1`; see the
/// residual rule in `scoring`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityTriple {
    pub home: f64,
    pub draw: f64,
    pub away: f64,
}

/// The single most-likely outcome derived from a probability triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Home,
    Draw,
    Away,
}

/// One past match result. Sequences are ordered most-recent-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormOutcome {
    W,
    D,
    L,
}

/// Recent results for one team, most-recent-first.
pub type FormSequence = Vec<FormOutcome>;

/// The normalized output of both the mock and the remote scoring paths.
///
/// Created fresh per request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub label: Outcome,
    pub probs: ProbabilityTriple,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_form: Option<FormSequence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_form: Option<FormSequence>,
}
