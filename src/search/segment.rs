//! Normalization of raw shots into display-ready segments.

use super::shots::ShotPayload;
use serde::Serialize;
use std::collections::HashSet;

/// Maximum transcript excerpt length per segment.
pub const MAX_TEXT_CHARS: usize = 220;

/// Assumed shot length when the backend omits an end time.
const DEFAULT_SHOT_SECONDS: u32 = 30;

/// A normalized, time-coded match within a video.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    /// Start of the segment, in whole seconds.
    pub start_time: u32,
    /// End of the segment, in whole seconds.
    pub end_time: u32,
    /// Transcript excerpt (trimmed, at most [`MAX_TEXT_CHARS`] chars, may be empty).
    pub text: String,
    /// Relevance on a 0-100 scale, rounded to one decimal.
    pub score: f64,
}

impl Segment {
    /// Format the start time as an `MM:SS` display string.
    pub fn timestamp(&self) -> String {
        format_timestamp(self.start_time)
    }
}

/// Format whole seconds as `MM:SS`.
pub fn format_timestamp(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Scale a raw backend score onto 0-100.
///
/// Scores at or below 1.0 are treated as fractions and multiplied by 100;
/// anything larger is assumed to already be on a 0-100-like scale. Rounded
/// to one decimal either way.
pub fn normalize_score(raw: f64) -> f64 {
    let scaled = if raw <= 1.0 { raw * 100.0 } else { raw };
    (scaled * 10.0).round() / 10.0
}

/// Convert a raw search payload into at most `max_results` segments,
/// preserving backend order (earlier shots rank higher).
///
/// Missing fields fall back to defaults per shot; a malformed shot never
/// drops the rest of the batch.
pub fn shots_to_segments(payload: ShotPayload, max_results: usize) -> Vec<Segment> {
    payload
        .into_shots()
        .into_iter()
        .take(max_results)
        .map(|shot| {
            let start = shot.start.unwrap_or(0.0) as u32;
            let end = shot
                .end
                .map(|e| e as u32)
                .unwrap_or(start + DEFAULT_SHOT_SECONDS);
            let score = normalize_score(shot.raw_score());
            let text: String = shot
                .text
                .unwrap_or_default()
                .trim()
                .chars()
                .take(MAX_TEXT_CHARS)
                .collect();

            Segment {
                start_time: start,
                end_time: end,
                text,
                score,
            }
        })
        .collect()
}

/// Drop segments that repeat an already-seen integer start time.
///
/// Order-preserving and stable: the first occurrence of a start time wins,
/// so arrival order (tier, then candidate) acts as the ranking. Segments
/// are never re-sorted by score.
pub fn dedupe_by_start(segments: Vec<Segment>) -> Vec<Segment> {
    let mut seen = HashSet::new();
    segments
        .into_iter()
        .filter(|s| seen.insert(s.start_time))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::shots::RawShot;

    fn seg(start: u32, score: f64) -> Segment {
        Segment {
            start_time: start,
            end_time: start + 30,
            text: String::new(),
            score,
        }
    }

    #[test]
    fn test_timestamp_format() {
        assert_eq!(seg(0, 0.0).timestamp(), "00:00");
        assert_eq!(seg(65, 0.0).timestamp(), "01:05");
        assert_eq!(seg(3599, 0.0).timestamp(), "59:59");
    }

    #[test]
    fn test_score_normalization() {
        assert_eq!(normalize_score(0.87), 87.0);
        assert_eq!(normalize_score(42.3), 42.3);
        // Exactly 1.0 is treated as fractional.
        assert_eq!(normalize_score(1.0), 100.0);
        assert_eq!(normalize_score(0.456), 45.6);
        assert_eq!(normalize_score(0.0), 0.0);
    }

    #[test]
    fn test_shot_defaults() {
        let payload = ShotPayload::Bare(vec![RawShot::default()]);
        let segments = shots_to_segments(payload, 5);

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].start_time, 0);
        assert_eq!(segments[0].end_time, 30);
        assert_eq!(segments[0].text, "");
        assert_eq!(segments[0].score, 0.0);
    }

    #[test]
    fn test_end_defaults_relative_to_start() {
        let payload: ShotPayload = serde_json::from_str(r#"[{"start": 90.7}]"#).unwrap();
        let segments = shots_to_segments(payload, 5);
        assert_eq!(segments[0].start_time, 90);
        assert_eq!(segments[0].end_time, 120);
    }

    #[test]
    fn test_text_trimmed_and_truncated() {
        let long = format!("  {}  ", "x".repeat(400));
        let payload = ShotPayload::Bare(vec![RawShot {
            text: Some(long),
            ..Default::default()
        }]);

        let segments = shots_to_segments(payload, 1);
        assert_eq!(segments[0].text.chars().count(), MAX_TEXT_CHARS);
        assert!(!segments[0].text.starts_with(' '));
    }

    #[test]
    fn test_max_results_cap() {
        let shots: Vec<RawShot> = (0..30)
            .map(|i| RawShot {
                start: Some(i as f64 * 10.0),
                ..Default::default()
            })
            .collect();

        let segments = shots_to_segments(ShotPayload::Wrapped { shots }, 5);
        assert_eq!(segments.len(), 5);
        // Backend order preserved.
        assert_eq!(segments[0].start_time, 0);
        assert_eq!(segments[4].start_time, 40);
    }

    #[test]
    fn test_dedupe_first_occurrence_wins() {
        let input = vec![seg(10, 90.0), seg(20, 80.0), seg(30, 70.0), seg(10, 99.9)];
        let deduped = dedupe_by_start(input);

        assert_eq!(deduped.len(), 3);
        // The position-0 copy of start=10 survives, in place.
        assert_eq!(deduped[0].start_time, 10);
        assert_eq!(deduped[0].score, 90.0);
        assert_eq!(deduped[1].start_time, 20);
        assert_eq!(deduped[2].start_time, 30);
    }

    #[test]
    fn test_dedupe_idempotent() {
        let input = vec![seg(5, 1.0), seg(5, 2.0), seg(8, 3.0), seg(5, 4.0)];
        let once = dedupe_by_start(input);
        let twice = dedupe_by_start(once.clone());
        assert_eq!(once, twice);
    }
}
