use crate::models::PredictionResult;
use serde_json::Value;
use thiserror::Error;

pub const PREDICTION_SCALE: f64 = 4.0;

#[derive(Debug, Error, PartialEq)]
pub enum NormalizeError {
    #[error("response body is not a JSON object")]
    NotAnObject,
    #[error("response is missing a `mood` label")]
    MissingMood,
    #[error("response `mood` must be a non-empty string")]
    InvalidMood,
    #[error("response is missing both `prediction` and `score`")]
    MissingScore,
    #[error("`{field}` is not a number")]
    NotANumber { field: &'static str },
    #[error("score {0} is outside 0..=1")]
    OutOfRange(f64),
    #[error("response body is not valid JSON: {0}")]
    Json(String),
}

pub fn normalize_bytes(body: &[u8]) -> Result<PredictionResult, NormalizeError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|err| NormalizeError::Json(err.to_string()))?;
    normalize(&value)
}

// `prediction` is on a 0..=4 scale and wins over `score` when both are present.
pub fn normalize(body: &Value) -> Result<PredictionResult, NormalizeError> {
    let object = body.as_object().ok_or(NormalizeError::NotAnObject)?;

    let mood = match object.get("mood") {
        None | Some(Value::Null) => return Err(NormalizeError::MissingMood),
        Some(Value::String(label)) => label.trim().to_lowercase(),
        Some(_) => return Err(NormalizeError::InvalidMood),
    };
    if mood.is_empty() {
        return Err(NormalizeError::InvalidMood);
    }

    let score = match (present(object.get("prediction")), present(object.get("score"))) {
        (Some(prediction), _) => numeric(prediction, "prediction")? / PREDICTION_SCALE,
        (None, Some(score)) => numeric(score, "score")?,
        (None, None) => return Err(NormalizeError::MissingScore),
    };

    if !(0.0..=1.0).contains(&score) {
        return Err(NormalizeError::OutOfRange(score));
    }

    Ok(PredictionResult { mood, score })
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|value| !value.is_null())
}

// Numeric strings are accepted; anything that does not parse to a finite number is NaN.
fn numeric(value: &Value, field: &'static str) -> Result<f64, NormalizeError> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };

    match number {
        Some(number) if number.is_finite() => Ok(number),
        _ => Err(NormalizeError::NotANumber { field }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prediction_scale_maps_onto_unit_interval() {
        for prediction in 0..=4 {
            let result = normalize(&json!({ "mood": "happy", "prediction": prediction })).unwrap();
            assert_eq!(result.score, f64::from(prediction) / 4.0);
            assert!((0.0..=1.0).contains(&result.score));
        }
    }

    #[test]
    fn score_field_is_used_directly() {
        let result = normalize(&json!({ "mood": "sad", "score": 0.42 })).unwrap();
        assert_eq!(result, PredictionResult { mood: "sad".into(), score: 0.42 });
    }

    #[test]
    fn prediction_wins_over_score() {
        let result = normalize(&json!({ "mood": "sad", "prediction": 2, "score": 0.9 })).unwrap();
        assert_eq!(result.score, 0.5);
    }

    #[test]
    fn mood_is_lowercased() {
        let result = normalize(&json!({ "mood": "  Happy ", "prediction": 3 })).unwrap();
        assert_eq!(result.mood, "happy");
        assert_eq!(result.score, 0.75);
    }

    #[test]
    fn missing_mood_is_rejected() {
        assert_eq!(
            normalize(&json!({ "prediction": 4 })),
            Err(NormalizeError::MissingMood)
        );
        assert_eq!(
            normalize(&json!({ "mood": null, "score": 0.1 })),
            Err(NormalizeError::MissingMood)
        );
    }

    #[test]
    fn non_string_or_blank_mood_is_rejected() {
        assert_eq!(
            normalize(&json!({ "mood": 3, "score": 0.1 })),
            Err(NormalizeError::InvalidMood)
        );
        assert_eq!(
            normalize(&json!({ "mood": "   ", "score": 0.1 })),
            Err(NormalizeError::InvalidMood)
        );
    }

    #[test]
    fn numeric_strings_are_parsed() {
        let result = normalize(&json!({ "mood": "love", "prediction": "1" })).unwrap();
        assert_eq!(result.score, 0.25);
    }

    #[test]
    fn non_numeric_score_is_rejected() {
        assert_eq!(
            normalize(&json!({ "mood": "happy", "prediction": "very" })),
            Err(NormalizeError::NotANumber { field: "prediction" })
        );
        assert_eq!(
            normalize(&json!({ "mood": "happy", "score": "NaN" })),
            Err(NormalizeError::NotANumber { field: "score" })
        );
        assert_eq!(
            normalize(&json!({ "mood": "happy", "score": [0.5] })),
            Err(NormalizeError::NotANumber { field: "score" })
        );
    }

    #[test]
    fn missing_score_fields_are_rejected() {
        assert_eq!(
            normalize(&json!({ "mood": "happy" })),
            Err(NormalizeError::MissingScore)
        );
        assert_eq!(
            normalize(&json!({ "mood": "happy", "prediction": null })),
            Err(NormalizeError::MissingScore)
        );
    }

    #[test]
    fn out_of_range_scores_are_rejected() {
        assert_eq!(
            normalize(&json!({ "mood": "happy", "prediction": 5 })),
            Err(NormalizeError::OutOfRange(1.25))
        );
        assert_eq!(
            normalize(&json!({ "mood": "happy", "score": -0.1 })),
            Err(NormalizeError::OutOfRange(-0.1))
        );
    }

    #[test]
    fn malformed_bodies_are_rejected() {
        assert!(matches!(
            normalize_bytes(b"<html>oops</html>"),
            Err(NormalizeError::Json(_))
        ));
        assert_eq!(normalize(&json!(["happy", 4])), Err(NormalizeError::NotAnObject));
    }
}
