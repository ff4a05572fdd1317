//! Highlight reel timeline building.
//!
//! A reel collects the best segments for a handful of topics and plays them
//! back in video order as one stitched stream.

use crate::rag::VideoRag;
use crate::search::Segment;
use std::collections::HashSet;

/// Segments collected per reel topic.
const SEGMENTS_PER_TOPIC: usize = 3;

/// Split a comma-separated topic list, dropping blanks.
pub fn parse_topics(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Retrieve segments for every topic, in topic order.
pub async fn collect_topic_segments(rag: &VideoRag, topics: &[String]) -> Vec<Segment> {
    let mut all_segments = Vec::new();
    for topic in topics {
        all_segments.extend(rag.search_video_content(topic, SEGMENTS_PER_TOPIC).await);
    }
    all_segments
}

/// Build a playback timeline: chronological (start, end) pairs with one
/// entry per distinct start second.
///
/// Reels play in video order, not relevance order, so this is the one place
/// segments get re-sorted.
pub fn build_timeline(mut segments: Vec<Segment>) -> Vec<(u32, u32)> {
    segments.sort_by_key(|s| s.start_time);

    let mut seen = HashSet::new();
    segments
        .into_iter()
        .filter(|s| seen.insert(s.start_time))
        .map(|s| (s.start_time, s.end_time))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(start: u32, end: u32) -> Segment {
        Segment {
            start_time: start,
            end_time: end,
            text: String::new(),
            score: 0.0,
        }
    }

    #[test]
    fn test_parse_topics() {
        assert_eq!(
            parse_topics("overview, example, key concept"),
            vec!["overview", "example", "key concept"]
        );
        assert_eq!(parse_topics(" , ,overview,"), vec!["overview"]);
        assert!(parse_topics("").is_empty());
    }

    #[test]
    fn test_timeline_is_chronological() {
        let timeline = build_timeline(vec![seg(120, 150), seg(10, 40), seg(60, 90)]);
        assert_eq!(timeline, vec![(10, 40), (60, 90), (120, 150)]);
    }

    #[test]
    fn test_timeline_drops_repeated_starts() {
        let timeline = build_timeline(vec![seg(60, 90), seg(60, 95), seg(10, 40)]);
        assert_eq!(timeline, vec![(10, 40), (60, 90)]);
    }

    #[test]
    fn test_timeline_empty_input() {
        assert!(build_timeline(Vec::new()).is_empty());
    }
}
