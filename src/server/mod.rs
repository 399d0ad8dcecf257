use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{debug, warn};

use crate::leagues;
use crate::predict::{
    scoring::{self, ScoringPolicy},
    PredictionRequest, PredictionResolver, ScoringMode,
};

#[derive(Clone)]
pub struct AppState {
    pub resolver: PredictionResolver,
    /// Default resolution mode; the page checkbox overrides it per request.
    pub use_mock: bool,
    /// Surfaced to the page header so users can see where remote calls go.
    pub scoring_api_url: String,
}

/// Build the Axum router for the predictor page and API.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/api/leagues", get(leagues_handler))
        .route("/api/predict", post(predict_handler))
        .route("/api/resolve", post(resolve_handler))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

/// Serve the predictor HTML page, injecting the configured defaults.
async fn index_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let html = PREDICTOR_HTML.replace(
        r#"<body>"#,
        &format!(
            r#"<body data-usemock="{}" data-api="{}">"#,
            state.use_mock, state.scoring_api_url
        ),
    );
    Html(html)
}

/// GET /health
async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok", "use_mock": state.use_mock }))
}

/// GET /api/leagues
async fn leagues_handler() -> impl IntoResponse {
    Json(leagues::LEAGUES)
}

/// POST /api/predict — the service-side scoring variant.
///
/// This is the endpoint a remote-mode resolver calls. It scores with the
/// service policy and never fails for well-formed JSON; absent team names
/// score as empty strings.
async fn predict_handler(Json(req): Json<PredictionRequest>) -> impl IntoResponse {
    Json(scoring::score(
        ScoringPolicy::SERVICE,
        &req.home_team,
        &req.away_team,
    ))
}

#[derive(Debug, Deserialize)]
struct ResolveBody {
    #[serde(flatten)]
    request: PredictionRequest,
    /// Per-request override of the configured default mode.
    use_mock: Option<bool>,
}

/// POST /api/resolve — UI-facing resolution through the configured backend.
///
/// Resolver failures map to 502 with the error text as the body; the page
/// renders it and retries by resubmission.
async fn resolve_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ResolveBody>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    if let Some(id) = body.request.league_id.as_deref() {
        if leagues::find_league(id).is_none() {
            debug!("Request references unknown league id '{}'", id);
        }
    }

    let mode = if body.use_mock.unwrap_or(state.use_mock) {
        ScoringMode::Mock
    } else {
        ScoringMode::Remote
    };

    match state.resolver.resolve(mode, &body.request).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            warn!(
                "Resolution failed for '{} vs {}': {}",
                body.request.home_team, body.request.away_team, e
            );
            Err((StatusCode::BAD_GATEWAY, e.to_string()))
        }
    }
}

/// Embedded single-file predictor page (HTML + CSS + JS)
const PREDICTOR_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Match Predictor</title>
<style>
  :root {
    --bg: #0f1117;
    --card: #1a1d27;
    --border: #2a2d3a;
    --accent: #6c63ff;
    --green: #00c896;
    --red: #ff4f6a;
    --text: #e0e0e0;
    --muted: #8888aa;
  }
  * { box-sizing: border-box; margin: 0; padding: 0; }
  body { background: var(--bg); color: var(--text); font-family: 'Segoe UI', system-ui, sans-serif; }
  header { display: flex; align-items: center; gap: 1rem; padding: 1rem 2rem; border-bottom: 1px solid var(--border); }
  header h1 { font-size: 1.4rem; font-weight: 700; }
  header .mode { margin-left: auto; display: flex; align-items: center; gap: 0.5rem; font-size: 0.85rem; color: var(--muted); }
  main { max-width: 720px; margin: 0 auto; padding: 1.5rem 2rem; display: grid; gap: 1.5rem; }
  .card { background: var(--card); border: 1px solid var(--border); border-radius: 12px; padding: 1.25rem; }
  .card h2 { font-size: 1.05rem; margin-bottom: 1rem; }
  .selects { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; }
  label { display: block; font-size: 0.8rem; color: var(--muted); margin-bottom: 0.3rem; }
  select { width: 100%; background: var(--bg); color: var(--text); border: 1px solid var(--border); border-radius: 8px; padding: 0.5rem; }
  button { margin-top: 1rem; background: var(--accent); color: #fff; border: none; border-radius: 8px; padding: 0.6rem 1.4rem; font-size: 0.95rem; cursor: pointer; }
  button:disabled { opacity: 0.5; cursor: default; }
  .error { display: none; margin-top: 1rem; padding: 0.75rem; border: 1px solid var(--red); border-radius: 8px; color: var(--red); font-size: 0.85rem; }
  .bar-row { margin-bottom: 0.9rem; }
  .bar-row .head { display: flex; justify-content: space-between; font-size: 0.85rem; margin-bottom: 0.3rem; }
  .bar { height: 8px; background: var(--border); border-radius: 4px; overflow: hidden; }
  .bar > div { height: 100%; background: var(--accent); border-radius: 4px; width: 0; transition: width 0.3s; }
  .bar-row.winner .bar > div { background: var(--green); }
  .form-line { font-size: 0.8rem; color: var(--muted); margin-top: 0.6rem; letter-spacing: 0.15em; }
  .placeholder { color: var(--muted); font-size: 0.85rem; }
</style>
</head>
<body>
<header>
  <h1>⚽ Match Predictor</h1>
  <div class="mode">
    <label style="display:flex;align-items:center;gap:0.4rem;margin:0;">
      <input type="checkbox" id="use-mock"> Use mock backend
    </label>
    <span id="api-base"></span>
  </div>
</header>
<main>
  <div class="card">
    <h2>Matchup</h2>
    <form id="predict-form">
      <div class="selects">
        <div>
          <label for="league">League</label>
          <select id="league"></select>
        </div>
        <div>
          <label for="home">Home</label>
          <select id="home"></select>
        </div>
        <div>
          <label for="away">Away</label>
          <select id="away"></select>
        </div>
      </div>
      <button id="submit" type="submit">Predict</button>
      <div class="error" id="error"></div>
    </form>
  </div>
  <div class="card">
    <h2>Prediction</h2>
    <div id="result">
      <p class="placeholder">No prediction yet. Pick a matchup and hit Predict.</p>
    </div>
  </div>
</main>
<script>
const $ = (id) => document.getElementById(id);
let leagues = [];
// Request generation counter: responses from superseded submissions are
// ignored so a slow remote call can never overwrite a newer result.
let generation = 0;

function currentLeague() {
  return leagues.find(l => l.id === $('league').value) || leagues[0];
}

function fillSelect(sel, values, keep) {
  sel.innerHTML = '';
  for (const v of values) {
    const opt = document.createElement('option');
    opt.value = v; opt.textContent = v;
    sel.appendChild(opt);
  }
  if (keep && values.includes(keep)) sel.value = keep;
}

function refreshTeams(resetHome) {
  const league = currentLeague();
  if (!league) return;
  fillSelect($('home'), league.teams, resetHome ? null : $('home').value);
  const home = $('home').value;
  fillSelect($('away'), league.teams.filter(t => t !== home), $('away').value);
}

async function loadLeagues() {
  const res = await fetch('/api/leagues');
  leagues = await res.json();
  $('league').innerHTML = '';
  for (const l of leagues) {
    const opt = document.createElement('option');
    opt.value = l.id; opt.textContent = l.name;
    $('league').appendChild(opt);
  }
  refreshTeams(true);
}

function renderForm(el, name, seq) {
  if (!seq || !seq.length) return;
  const line = document.createElement('div');
  line.className = 'form-line';
  line.textContent = name + ' form: ' + seq.join(' ');
  el.appendChild(line);
}

function renderResult(data) {
  const el = $('result');
  el.innerHTML = '';
  const names = { home: $('home').value, draw: 'Draw', away: $('away').value };
  for (const k of ['home', 'draw', 'away']) {
    const pct = Math.round(data.probs[k] * 100);
    const row = document.createElement('div');
    row.className = 'bar-row' + (data.label === k ? ' winner' : '');
    row.innerHTML = '<div class="head"><span>' + names[k] + '</span><span>' + pct + '%</span></div>' +
      '<div class="bar"><div style="width:' + pct + '%"></div></div>';
    el.appendChild(row);
  }
  renderForm(el, names.home, data.home_form);
  renderForm(el, names.away, data.away_form);
}

$('league').addEventListener('change', () => refreshTeams(true));
$('home').addEventListener('change', () => refreshTeams(false));

$('predict-form').addEventListener('submit', async (e) => {
  e.preventDefault();
  const gen = ++generation;
  $('submit').disabled = true;
  $('submit').textContent = 'Scoring…';
  $('error').style.display = 'none';
  try {
    const body = {
      league_id: $('league').value,
      home_team: $('home').value,
      away_team: $('away').value,
      use_mock: $('use-mock').checked,
    };
    const res = await fetch('/api/resolve', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(body),
    });
    if (gen !== generation) return; // superseded by a newer submission
    if (!res.ok) throw new Error(await res.text() || ('HTTP ' + res.status));
    renderResult(await res.json());
  } catch (err) {
    if (gen !== generation) return;
    $('error').textContent = err.message || 'Prediction request failed';
    $('error').style.display = 'block';
  } finally {
    if (gen === generation) {
      $('submit').disabled = false;
      $('submit').textContent = 'Predict';
    }
  }
});

$('use-mock').checked = document.body.dataset.usemock === 'true';
$('api-base').textContent = 'API: ' + document.body.dataset.api + '/api/predict';
loadLeagues();
</script>
</body>
</html>
"#;
