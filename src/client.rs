use crate::config::Config;
use crate::models::{PredictRequest, PredictionResult};
use crate::normalize::{normalize, normalize_bytes, NormalizeError};
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use thiserror::Error;
use tokio::time::sleep;
use tracing::debug;

/// Failure of a prediction call. `Display` is the message shown to the user.
#[derive(Debug, Error, PartialEq)]
pub enum PredictError {
    #[error("Could not reach the prediction service: {0}")]
    Network(String),
    #[error("Prediction request failed with status {status}{}", body_suffix(.body))]
    Status { status: u16, body: String },
    #[error("Unexpected response from the prediction service: {0}")]
    Malformed(#[from] NormalizeError),
}

fn body_suffix(body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!(": {body}")
    }
}

pub enum Predictor {
    Remote(RemoteClient),
    Demo(DemoPredictor),
}

impl Predictor {
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        if config.variant.is_simulated() {
            return Ok(Predictor::Demo(DemoPredictor::new(config.mock_delay)));
        }
        Ok(Predictor::Remote(RemoteClient::new(
            config.predict_url(),
            config.timeout,
        )?))
    }

    pub async fn predict(&self, text: &str) -> Result<PredictionResult, PredictError> {
        match self {
            Predictor::Remote(client) => client.predict(text).await,
            Predictor::Demo(demo) => demo.predict(text).await,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Predictor::Remote(client) => client.url.clone(),
            Predictor::Demo(demo) => format!("simulated ({}ms delay)", demo.delay.as_millis()),
        }
    }
}

pub struct RemoteClient {
    client: Client,
    url: String,
}

impl RemoteClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub async fn predict(&self, text: &str) -> Result<PredictionResult, PredictError> {
        let response = self
            .client
            .post(&self.url)
            .json(&PredictRequest { text })
            .send()
            .await
            .map_err(network)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.map_err(network)?;
            return Err(PredictError::Status {
                status: status.as_u16(),
                body: body.trim().to_string(),
            });
        }

        let body = response.bytes().await.map_err(network)?;
        debug!(bytes = body.len(), "prediction response received");
        Ok(normalize_bytes(&body)?)
    }
}

// reqwest's top-level message hides the cause and leaks the backend URL.
fn network(err: reqwest::Error) -> PredictError {
    let reason = if err.is_timeout() {
        "the request timed out".to_string()
    } else if err.is_connect() {
        "the connection could not be established".to_string()
    } else {
        err.without_url().to_string()
    };
    PredictError::Network(reason)
}

pub struct DemoPredictor {
    delay: Duration,
}

const MOOD_KEYWORDS: &[(&str, &[&str])] = &[
    ("happy", &["happy", "great", "good", "glad", "awesome", "joy", "excited", "wonderful"]),
    ("sad", &["sad", "down", "lonely", "cry", "unhappy", "depressed", "miss"]),
    ("angry", &["angry", "mad", "furious", "hate", "annoyed", "rage"]),
    ("fear", &["afraid", "scared", "fear", "anxious", "worried", "nervous"]),
    ("surprise", &["surprised", "wow", "unexpected", "shocked", "amazed"]),
    ("love", &["love", "adore", "darling", "sweet", "romantic"]),
];

impl DemoPredictor {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub async fn predict(&self, text: &str) -> Result<PredictionResult, PredictError> {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        Ok(normalize(&simulate(text))?)
    }
}

pub fn simulate(text: &str) -> serde_json::Value {
    let words: Vec<String> = text
        .split(|c: char| !c.is_alphanumeric() && c != '\'')
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect();

    let best = MOOD_KEYWORDS
        .iter()
        .map(|(mood, keywords)| {
            let hits = words
                .iter()
                .filter(|word| keywords.contains(&word.as_str()))
                .count();
            (*mood, hits)
        })
        .filter(|(_, hits)| *hits > 0)
        .fold(None::<(&str, usize)>, |best, candidate| match best {
            Some(current) if current.1 >= candidate.1 => Some(current),
            _ => Some(candidate),
        });

    match best {
        Some((mood, hits)) => json!({ "mood": mood, "prediction": (hits + 2).min(4) }),
        None => json!({ "mood": "neutral", "prediction": 2 }),
    }
}
