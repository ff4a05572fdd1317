//! Query expansion for video search.
//!
//! Questions phrased conversationally ("what is this video about?") rarely
//! match spoken-word index entries verbatim. Expansion rewrites a question
//! into the short phrases that actually occur in transcripts.

/// Ordered rewrite table: the first rule whose trigger matches wins.
///
/// Matching is a case-insensitive substring test against the question.
const EXPANSION_RULES: &[(&[&str], &[&str])] = &[
    (
        &["main topic", "about", "overview", "summary"],
        &["overview", "introduction", "main idea", "summary"],
    ),
    (
        &["key concept", "concept", "definition"],
        &["key concept", "main concept", "definition", "core idea"],
    ),
    (
        &["example", "demo", "case"],
        &["example", "for example", "demonstration", "case study"],
    ),
];

/// Expand a question into an ordered list of candidate search queries.
///
/// Always returns at least one candidate; when no rule matches, the original
/// question is the sole candidate, unmodified.
pub fn expand(question: &str) -> Vec<String> {
    let q = question.to_lowercase();

    for (triggers, expansions) in EXPANSION_RULES {
        if triggers.iter().any(|t| q.contains(t)) {
            return expansions.iter().map(|e| e.to_string()).collect();
        }
    }

    vec![question.to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_topic_questions() {
        assert_eq!(
            expand("What is the main topic?"),
            vec!["overview", "introduction", "main idea", "summary"]
        );
        assert_eq!(
            expand("GIVE ME A SUMMARY"),
            vec!["overview", "introduction", "main idea", "summary"]
        );
    }

    #[test]
    fn test_expand_concept_questions() {
        assert_eq!(
            expand("What's the definition of entropy?"),
            vec!["key concept", "main concept", "definition", "core idea"]
        );
    }

    #[test]
    fn test_expand_example_questions() {
        assert_eq!(
            expand("Give me an example"),
            vec!["example", "for example", "demonstration", "case study"]
        );
    }

    #[test]
    fn test_first_matching_rule_wins() {
        // "about" (rule 1) and "example" (rule 3) both appear; rule order decides.
        assert_eq!(
            expand("Is this about an example?"),
            vec!["overview", "introduction", "main idea", "summary"]
        );
    }

    #[test]
    fn test_expand_falls_back_to_question() {
        assert_eq!(
            expand("random unrelated text"),
            vec!["random unrelated text"]
        );
        assert_eq!(expand(""), vec![""]);
    }
}
