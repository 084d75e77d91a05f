//! Fixed marker lexicon. All entries are lowercase.

/// Substrings that signal a favourable reaction.
pub const POSITIVE_MARKERS: &[&str] = &[
    "good",
    "great",
    "love",
    "excellent",
    "amazing",
    "wonderful",
    "fantastic",
    "happy",
    "best",
    "awesome",
    "perfect",
    "beautiful",
    "helpful",
    "thank",
    "thanks",
    "appreciate",
    "satisfied",
    "pleased",
    "recommend",
    "outstanding",
];

/// Substrings that signal an unfavourable reaction.
pub const NEGATIVE_MARKERS: &[&str] = &[
    "bad",
    "hate",
    "terrible",
    "awful",
    "worst",
    "horrible",
    "poor",
    "disappointed",
    "frustrating",
    "annoying",
    "useless",
    "waste",
    "angry",
    "upset",
    "broken",
    "fail",
    "failed",
    "problem",
    "issue",
    "wrong",
];
