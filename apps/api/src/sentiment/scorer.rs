//! Lexical sentiment scoring — counts marker hits per token and derives a
//! coarse label with a confidence percentage.
//!
//! Default: `LexiconScorer` with `MatchPolicy::Substring`, where a token
//! counts as a hit when any marker occurs anywhere inside it ("unhappy"
//! hits "happy", "badge" hits "bad"). `MatchPolicy::WholeWord` only counts
//! tokens that equal a marker once edge punctuation is stripped.
//!
//! `AppState` holds an `Arc<dyn SentimentScorer>`, built at startup from config.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::sentiment::lexicon::{NEGATIVE_MARKERS, POSITIVE_MARKERS};

/// Confidence reported for every neutral outcome.
pub const NEUTRAL_CONFIDENCE: f64 = 50.0;
/// Upper bound on reported confidence.
pub const MAX_CONFIDENCE: f64 = 95.0;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// Label plus confidence in [50, 95]. Neutral always carries exactly 50.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisResult {
    pub sentiment: Sentiment,
    pub confidence: f64,
}

impl AnalysisResult {
    pub const NEUTRAL: AnalysisResult = AnalysisResult {
        sentiment: Sentiment::Neutral,
        confidence: NEUTRAL_CONFIDENCE,
    };
}

/// Per-polarity token hit counts for one input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub positive: u32,
    pub negative: u32,
}

impl Tally {
    pub fn total(&self) -> u32 {
        self.positive + self.negative
    }

    /// Derives the label from the counts. Ties (including 0/0) are neutral.
    pub fn result(&self) -> AnalysisResult {
        let total = self.total();
        if total == 0 {
            return AnalysisResult::NEUTRAL;
        }

        let (sentiment, dominant) = match self.positive.cmp(&self.negative) {
            std::cmp::Ordering::Greater => (Sentiment::Positive, self.positive),
            std::cmp::Ordering::Less => (Sentiment::Negative, self.negative),
            std::cmp::Ordering::Equal => return AnalysisResult::NEUTRAL,
        };

        let share = f64::from(dominant) / f64::from(total);
        AnalysisResult {
            sentiment,
            confidence: (NEUTRAL_CONFIDENCE + share * 50.0).min(MAX_CONFIDENCE),
        }
    }
}

/// How a token is compared against the lexicon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    #[default]
    Substring,
    WholeWord,
}

impl MatchPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchPolicy::Substring => "substring",
            MatchPolicy::WholeWord => "whole_word",
        }
    }

    fn hits(&self, token: &str, markers: &[&str]) -> bool {
        match self {
            MatchPolicy::Substring => markers.iter().any(|m| token.contains(m)),
            MatchPolicy::WholeWord => {
                let word = token.trim_matches(|c: char| !c.is_alphanumeric());
                markers.iter().any(|&m| m == word)
            }
        }
    }
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown match policy '{0}'")]
pub struct UnknownMatchPolicy(String);

impl FromStr for MatchPolicy {
    type Err = UnknownMatchPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "substring" => Ok(MatchPolicy::Substring),
            "whole_word" | "whole-word" | "wholeword" => Ok(MatchPolicy::WholeWord),
            other => Err(UnknownMatchPolicy(other.to_string())),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

/// Token separator: Unicode whitespace plus the byte-order mark U+FEFF,
/// which browsers' `\s` also treats as a separator.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Counts marker hits. A token adds at most one to each polarity and may add
/// to both.
pub fn tally(text: &str, policy: MatchPolicy) -> Tally {
    let lowered = text.to_lowercase();
    let mut counts = Tally::default();

    for token in lowered.split(is_separator).filter(|t| !t.is_empty()) {
        if policy.hits(token, POSITIVE_MARKERS) {
            counts.positive += 1;
        }
        if policy.hits(token, NEGATIVE_MARKERS) {
            counts.negative += 1;
        }
    }

    counts
}

/// Scores `text` with the default substring policy.
pub fn analyze(text: &str) -> AnalysisResult {
    tally(text, MatchPolicy::Substring).result()
}

/// Implement this to swap scoring backends without touching handlers.
pub trait SentimentScorer: Send + Sync {
    fn policy(&self) -> MatchPolicy;

    fn tally(&self, text: &str) -> Tally;

    fn analyze(&self, text: &str) -> AnalysisResult {
        self.tally(text).result()
    }
}

/// Lexicon-backed scorer. Stateless apart from its policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer {
    pub policy: MatchPolicy,
}

impl LexiconScorer {
    pub fn new(policy: MatchPolicy) -> Self {
        Self { policy }
    }
}

impl SentimentScorer for LexiconScorer {
    fn policy(&self) -> MatchPolicy {
        self.policy
    }

    fn tally(&self, text: &str) -> Tally {
        tally(text, self.policy)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_neutral(result: AnalysisResult) {
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert_eq!(result.confidence, NEUTRAL_CONFIDENCE);
    }

    #[test]
    fn test_empty_input_is_neutral() {
        assert_neutral(analyze(""));
    }

    #[test]
    fn test_whitespace_only_is_neutral() {
        assert_neutral(analyze("   \t\n  "));
    }

    #[test]
    fn test_positive_sentence() {
        let r = analyze("This is a great and wonderful day");
        assert_eq!(r.sentiment, Sentiment::Positive);
        assert!(r.confidence > 50.0, "confidence was {}", r.confidence);
    }

    #[test]
    fn test_negative_sentence() {
        let r = analyze("This is terrible and awful");
        assert_eq!(r.sentiment, Sentiment::Negative);
        assert!(r.confidence > 50.0, "confidence was {}", r.confidence);
    }

    #[test]
    fn test_no_markers_is_neutral() {
        assert_neutral(analyze("The weather is fine today"));
    }

    #[test]
    fn test_tie_is_neutral() {
        assert_eq!(
            tally("good bad", MatchPolicy::Substring),
            Tally {
                positive: 1,
                negative: 1
            }
        );
        assert_neutral(analyze("good bad"));
    }

    #[test]
    fn test_unanimous_confidence_capped_at_95() {
        let r = analyze("great wonderful amazing");
        assert_eq!(r.confidence, MAX_CONFIDENCE);
    }

    #[test]
    fn test_mixed_confidence_uses_dominant_share() {
        // 2 positive, 1 negative → 50 + (2/3)*50
        let r = analyze("good great bad");
        assert_eq!(r.sentiment, Sentiment::Positive);
        assert!((r.confidence - 83.333).abs() < 0.01, "confidence was {}", r.confidence);
    }

    #[test]
    fn test_uppercase_input_is_normalized() {
        let r = analyze("TERRIBLE Awful");
        assert_eq!(r.sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_substring_policy_over_matches() {
        // "badge" contains "bad", "unhappy" contains "happy"
        assert_eq!(tally("badge", MatchPolicy::Substring).negative, 1);
        assert_eq!(tally("unhappy", MatchPolicy::Substring).positive, 1);
        assert_eq!(analyze("badge").sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_token_counts_once_per_polarity() {
        // "thanks" hits both "thank" and "thanks" but counts once
        let t = tally("thanks", MatchPolicy::Substring);
        assert_eq!(t, Tally { positive: 1, negative: 0 });
    }

    #[test]
    fn test_token_can_hit_both_polarities() {
        let t = tally("goodproblem", MatchPolicy::Substring);
        assert_eq!(t, Tally { positive: 1, negative: 1 });
        assert_neutral(t.result());
    }

    #[test]
    fn test_whole_word_ignores_embedded_markers() {
        let t = tally("badge unhappy", MatchPolicy::WholeWord);
        assert_eq!(t.total(), 0);
    }

    #[test]
    fn test_whole_word_strips_edge_punctuation() {
        let t = tally("Great! (awful)", MatchPolicy::WholeWord);
        assert_eq!(t, Tally { positive: 1, negative: 1 });
    }

    #[test]
    fn test_confidence_always_within_bounds() {
        let samples = [
            "",
            "good",
            "bad",
            "good good good bad",
            "bad bad good",
            "thanks for the helpful and outstanding advice, no problem at all",
            "broken useless waste of time, but the mentor was great",
            "lorem ipsum dolor",
        ];
        for s in samples {
            for policy in [MatchPolicy::Substring, MatchPolicy::WholeWord] {
                let r = tally(s, policy).result();
                assert!(
                    (50.0..=95.0).contains(&r.confidence),
                    "'{s}' under {policy} gave {}",
                    r.confidence
                );
            }
        }
    }

    #[test]
    fn test_byte_order_mark_separates_tokens() {
        let t = tally("good\u{FEFF}good bad", MatchPolicy::Substring);
        assert_eq!(t, Tally { positive: 2, negative: 1 });
        let r = t.result();
        assert_eq!(r.sentiment, Sentiment::Positive);
        assert!((r.confidence - 83.333).abs() < 0.01, "confidence was {}", r.confidence);
    }

    #[test]
    fn test_mixed_whitespace_runs_split_once() {
        let t = tally("  great\t\u{00A0}\n awful\u{3000}", MatchPolicy::Substring);
        assert_eq!(t, Tally { positive: 1, negative: 1 });
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let text = "I love this prediction but the map is broken";
        assert_eq!(analyze(text), analyze(text));
    }

    #[test]
    fn test_scorer_trait_matches_free_function() {
        let scorer = LexiconScorer::default();
        let text = "This is a great and wonderful day";
        assert_eq!(scorer.analyze(text), analyze(text));
        assert_eq!(scorer.policy(), MatchPolicy::Substring);
    }

    #[test]
    fn test_match_policy_parses() {
        assert_eq!("substring".parse::<MatchPolicy>().unwrap(), MatchPolicy::Substring);
        assert_eq!(" WHOLE_WORD ".parse::<MatchPolicy>().unwrap(), MatchPolicy::WholeWord);
        assert_eq!("whole-word".parse::<MatchPolicy>().unwrap(), MatchPolicy::WholeWord);
        assert!("fuzzy".parse::<MatchPolicy>().is_err());
    }

    #[test]
    fn test_sentiment_serializes_lowercase() {
        let json = serde_json::to_string(&Sentiment::Positive).unwrap();
        assert_eq!(json, "\"positive\"");
    }
}
