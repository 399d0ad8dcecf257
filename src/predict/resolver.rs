use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{header, Client};
use tracing::debug;

use crate::leagues;
use crate::predict::error::ResolveError;
use crate::predict::scoring::{self, ScoringPolicy};
use crate::predict::types::{PredictionRequest, PredictionResult};

/// Which backend a resolution should use.
///
/// Passed explicitly per call rather than read from a global flag, so either
/// branch can be forced in tests and the UI toggle stays a plain request
/// parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringMode {
    /// Score locally with the mock policy.
    Mock,
    /// POST the request to the configured scoring endpoint.
    Remote,
}

/// Resolves prediction requests against either backend, normalizing both
/// paths to one output shape.
///
/// Each call handles exactly one request: no retry, no de-duplication, no
/// shared state between resolutions. Superseding an in-flight request is the
/// caller's business.
#[derive(Clone)]
pub struct PredictionResolver {
    http: Client,
    base_url: String,
}

impl PredictionResolver {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(PredictionResolver {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve one request in the given mode.
    ///
    /// The mock branch cannot fail; the remote branch fails with a typed
    /// [`ResolveError`].
    pub async fn resolve(
        &self,
        mode: ScoringMode,
        request: &PredictionRequest,
    ) -> Result<PredictionResult, ResolveError> {
        match mode {
            ScoringMode::Mock => Ok(self.resolve_mock(request)),
            ScoringMode::Remote => self.resolve_remote(request).await,
        }
    }

    fn resolve_mock(&self, request: &PredictionRequest) -> PredictionResult {
        debug!(
            "Scoring '{} vs {}' with the local mock formula",
            request.home_team, request.away_team
        );
        scoring::score_with_form(
            ScoringPolicy::MOCK,
            &request.home_team,
            &request.away_team,
            leagues::recent_form(&request.home_team),
            leagues::recent_form(&request.away_team),
        )
    }

    async fn resolve_remote(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResult, ResolveError> {
        let url = format!("{}/api/predict", self.base_url);
        debug!("Requesting prediction from {}", url);

        let resp = self
            .http
            .post(&url)
            // Every call must reflect current server state, never a cached
            // response.
            .header(header::CACHE_CONTROL, "no-store")
            .json(request)
            .send()
            .await
            .map_err(ResolveError::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ResolveError::RemoteStatus {
                status: status.as_u16(),
            });
        }

        // Typed deserialization doubles as shape validation: an unknown label
        // or a malformed probs object fails here rather than leaking through.
        resp.json::<PredictionResult>()
            .await
            .map_err(ResolveError::Decode)
    }
}
