use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub mood: String,
    pub score: f64,
}

impl PredictionResult {
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.score * 100.0)
    }
}

#[derive(Debug, Serialize)]
pub struct PredictRequest<'a> {
    pub text: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub mood: String,
    pub score: f64,
    pub percent: String,
    pub emoji: String,
    pub gradient: [String; 2],
    pub variant: String,
}

#[derive(Debug, Serialize)]
pub struct ClientConfig {
    pub variant: String,
    pub title: String,
    pub tagline: String,
    pub placeholder: String,
    pub submit_label: String,
}
