use crate::client::{PredictError, Predictor};
use crate::models::PredictionResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub shift: bool,
}

impl KeyPress {
    pub fn enter() -> Self {
        Self { key: Key::Enter, shift: false }
    }

    pub fn shift_enter() -> Self {
        Self { key: Key::Enter, shift: true }
    }
}

#[derive(Debug, PartialEq)]
pub enum Phase<'a> {
    Idle,
    Loading,
    Success(&'a PredictionResult),
    Error(&'a str),
}

#[derive(Debug, Default)]
pub struct PredictionView {
    pub text: String,
    pub result: Option<PredictionResult>,
    pub loading: bool,
    pub error: String,
    pub focus_input: bool,
}

impl PredictionView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn can_submit(&self) -> bool {
        !self.loading && !self.text.trim().is_empty()
    }

    // Shift+Enter inserts a newline and never submits.
    pub fn handle_key(&mut self, press: KeyPress) -> Option<String> {
        match press {
            KeyPress { key: Key::Enter, shift: false } => self.begin(),
            _ => None,
        }
    }

    pub fn begin(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        self.loading = true;
        self.result = None;
        self.error.clear();
        self.focus_input = false;
        Some(self.text.clone())
    }

    pub fn finish(&mut self, outcome: Result<PredictionResult, PredictError>) {
        self.loading = false;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error.clear();
            }
            Err(err) => {
                self.result = None;
                self.error = err.to_string();
            }
        }
    }

    /// Runs one submission against `predictor`. Returns false if nothing was sent.
    pub async fn analyze(&mut self, predictor: &Predictor) -> bool {
        let Some(text) = self.begin() else {
            return false;
        };
        let outcome = predictor.predict(&text).await;
        self.finish(outcome);
        true
    }

    pub fn reset(&mut self) {
        self.text.clear();
        self.result = None;
        self.error.clear();
        self.loading = false;
        self.focus_input = true;
    }

    pub fn phase(&self) -> Phase<'_> {
        if self.loading {
            Phase::Loading
        } else if !self.error.is_empty() {
            Phase::Error(&self.error)
        } else if let Some(result) = &self.result {
            Phase::Success(result)
        } else {
            Phase::Idle
        }
    }
}
