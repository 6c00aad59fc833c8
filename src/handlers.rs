use crate::errors::AppError;
use crate::models::{AnalysisResponse, AnalyzeRequest, ClientConfig, PredictionResult};
use crate::state::AppState;
use crate::ui::render_index;
use crate::view::{Phase, PredictionView};
use axum::{extract::State, response::Html, Json};
use tracing::{info, warn};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(state.variant))
}

pub async fn healthz() -> &'static str {
    "ok"
}

pub async fn get_config(State(state): State<AppState>) -> Json<ClientConfig> {
    let theme = state.variant.theme();
    Json(ClientConfig {
        variant: state.variant.to_string(),
        title: theme.title.to_string(),
        tagline: theme.tagline.to_string(),
        placeholder: theme.placeholder.to_string(),
        submit_label: theme.submit_label.to_string(),
    })
}

pub async fn analyze(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let mut view = PredictionView::new();
    view.set_text(payload.text);
    if !view.analyze(&state.predictor).await {
        return Err(AppError::bad_request("text must not be empty"));
    }

    match view.phase() {
        Phase::Success(result) => {
            info!(mood = %result.mood, score = result.score, "mood analyzed");
            Ok(Json(to_response(&state, result)))
        }
        Phase::Error(message) => {
            warn!("prediction failed: {message}");
            Err(AppError::bad_gateway(message))
        }
        Phase::Idle | Phase::Loading => Err(AppError::bad_gateway("prediction did not complete")),
    }
}

fn to_response(state: &AppState, result: &PredictionResult) -> AnalysisResponse {
    let style = state.variant.moods().lookup(&result.mood);
    AnalysisResponse {
        mood: result.mood.clone(),
        score: result.score,
        percent: result.percent_label(),
        emoji: style.emoji.to_string(),
        gradient: [style.gradient.from.to_string(), style.gradient.to.to_string()],
        variant: state.variant.to_string(),
    }
}
