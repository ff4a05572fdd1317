//! Raw shot payloads as returned by the search backend.
//!
//! The backend is not consistent about result shape: video-scoped search
//! wraps shots in an object, collection search may return a bare list, and
//! score fields vary by API version. Everything shape-specific is absorbed
//! here so the rest of the crate only ever sees `Vec<RawShot>`.

use serde::Deserialize;

/// A single time-bounded match as the backend reports it.
///
/// Every field is optional; missing or wrong-typed values are defaulted
/// downstream rather than rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawShot {
    #[serde(default)]
    pub start: Option<f64>,
    #[serde(default)]
    pub end: Option<f64>,
    #[serde(default)]
    pub text: Option<String>,
    /// Relevance under the newer field name.
    #[serde(default)]
    pub search_score: Option<serde_json::Value>,
    /// Relevance under the older field name.
    #[serde(default)]
    pub score: Option<serde_json::Value>,
}

impl RawShot {
    /// Extract the raw relevance score, preferring `search_score` over
    /// `score`. Missing or unparseable values yield 0.0.
    pub fn raw_score(&self) -> f64 {
        self.search_score
            .as_ref()
            .or(self.score.as_ref())
            .and_then(value_to_f64)
            .unwrap_or(0.0)
    }
}

fn value_to_f64(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// A raw search result: either an object carrying a shot list, or the
/// shot list itself.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ShotPayload {
    Wrapped { shots: Vec<RawShot> },
    Bare(Vec<RawShot>),
}

impl ShotPayload {
    /// Unwrap into the shot list, preserving backend order.
    pub fn into_shots(self) -> Vec<RawShot> {
        match self {
            ShotPayload::Wrapped { shots } => shots,
            ShotPayload::Bare(shots) => shots,
        }
    }

    /// An empty payload.
    pub fn empty() -> Self {
        ShotPayload::Bare(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_wrapped_payload() {
        let json = r#"{"shots": [{"start": 10.0, "text": "hello"}]}"#;
        let payload: ShotPayload = serde_json::from_str(json).unwrap();
        let shots = payload.into_shots();
        assert_eq!(shots.len(), 1);
        assert_eq!(shots[0].start, Some(10.0));
    }

    #[test]
    fn test_parses_bare_payload() {
        let json = r#"[{"start": 5.5}, {"start": 20.0, "end": 31.0}]"#;
        let payload: ShotPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.into_shots().len(), 2);
    }

    #[test]
    fn test_score_field_preference() {
        let json = r#"{"search_score": 0.9, "score": 0.1}"#;
        let shot: RawShot = serde_json::from_str(json).unwrap();
        assert_eq!(shot.raw_score(), 0.9);

        let json = r#"{"score": 0.4}"#;
        let shot: RawShot = serde_json::from_str(json).unwrap();
        assert_eq!(shot.raw_score(), 0.4);
    }

    #[test]
    fn test_score_tolerates_strings_and_garbage() {
        let json = r#"{"search_score": "0.75"}"#;
        let shot: RawShot = serde_json::from_str(json).unwrap();
        assert_eq!(shot.raw_score(), 0.75);

        let json = r#"{"search_score": "not a number"}"#;
        let shot: RawShot = serde_json::from_str(json).unwrap();
        assert_eq!(shot.raw_score(), 0.0);

        let shot = RawShot::default();
        assert_eq!(shot.raw_score(), 0.0);
    }
}
