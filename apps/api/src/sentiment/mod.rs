// Sentiment analysis for free-text career feedback.
// Lexicon-based scoring only; no model calls.

pub mod handlers;
pub mod lexicon;
pub mod scorer;

pub use scorer::{LexiconScorer, MatchPolicy, SentimentScorer};
