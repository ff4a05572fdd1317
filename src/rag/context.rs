//! Context building from retrieved segments.

use crate::search::Segment;

/// Format segments as timestamped context lines for an LLM prompt.
///
/// Segments with empty text carry no usable context and are skipped.
pub fn format_context_for_prompt(segments: &[Segment]) -> String {
    segments
        .iter()
        .filter(|s| !s.text.is_empty())
        .map(|s| format!("{}: {}", s.timestamp(), s.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One-line fallback answer built from the best-matching segment.
pub fn best_segment_summary(segment: &Segment) -> String {
    format!(
        "Found at {} (score {}%)\n\n{}",
        segment.timestamp(),
        segment.score,
        segment.text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(start: u32, text: &str) -> Segment {
        Segment {
            start_time: start,
            end_time: start + 30,
            text: text.to_string(),
            score: 87.5,
        }
    }

    #[test]
    fn test_format_context_skips_empty_text() {
        let segments = vec![seg(65, "first point"), seg(120, ""), seg(185, "second point")];
        let context = format_context_for_prompt(&segments);

        assert_eq!(context, "01:05: first point\n03:05: second point");
    }

    #[test]
    fn test_format_context_empty_input() {
        assert_eq!(format_context_for_prompt(&[]), "");
    }

    #[test]
    fn test_best_segment_summary() {
        let summary = best_segment_summary(&seg(95, "the key insight"));
        assert!(summary.starts_with("Found at 01:35 (score 87.5%)"));
        assert!(summary.ends_with("the key insight"));
    }
}
