// ABOUTME: Scoring constants for each conversation quality metric
// ABOUTME: Base values, penalties, bonuses, defaults and aggregation weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Scoring constants
//!
//! Each metric module holds the default returned when a transcript lacks the
//! data the metric needs, plus the adjustments applied per message.

/// Clarity of agent messages
pub mod clarity {
    /// Score when the transcript has no agent messages
    pub const DEFAULT: f64 = 0.5;
    /// Starting score for every agent message
    pub const BASE: f64 = 0.8;
    /// Messages with fewer words are penalized
    pub const MIN_WORDS: usize = 5;
    /// Messages with more words are penalized
    pub const MAX_WORDS: usize = 150;
    /// Penalty for too short or too long messages
    pub const LENGTH_PENALTY: f64 = 0.05;
    /// Bonus for asking a question
    pub const QUESTION_BONUS: f64 = 0.02;
    /// Bonus for starting with a capital letter
    pub const CAPITALIZATION_BONUS: f64 = 0.01;
}

/// Relevance of agent replies to the preceding human message
pub mod relevance {
    /// Score with fewer than two messages or no scorable pair
    pub const DEFAULT: f64 = 0.7;
    /// Minimum token length for a content word
    pub const MIN_CONTENT_WORD_LEN: usize = 4;
    /// Overlap ratio multiplier before capping at 1.0
    pub const OVERLAP_SCALE: f64 = 2.0;
    /// Minimum number of messages required to score relevance
    pub const MIN_MESSAGES: usize = 2;
}

/// Accuracy inferred from hedging and confident language
pub mod accuracy {
    /// Starting score
    pub const BASE: f64 = 0.75;
    /// Penalty per hedging word occurrence
    pub const HEDGING_PENALTY: f64 = 0.03;
    /// Bonus per confidence word occurrence
    pub const CONFIDENCE_BONUS: f64 = 0.02;
}

/// Completeness of answers to human questions
pub mod completeness {
    /// Score when the transcript has no human messages
    pub const DEFAULT: f64 = 0.5;
    /// Score when the human never asked a question
    pub const NO_QUESTIONS: f64 = 0.8;
    /// Mean agent word count below which answers are considered short
    pub const SHORT_ANSWER_WORDS: f64 = 10.0;
    /// Mean agent word count below which answers are considered medium
    pub const MEDIUM_ANSWER_WORDS: f64 = 30.0;
    /// Score for short answers
    pub const SHORT_ANSWER_SCORE: f64 = 0.4;
    /// Score for medium answers
    pub const MEDIUM_ANSWER_SCORE: f64 = 0.6;
    /// Score for long answers
    pub const LONG_ANSWER_SCORE: f64 = 0.85;
}

/// Sentiment classification of human messages
pub mod sentiment {
    /// One polarity dominates when it exceeds the other by this factor
    pub const DOMINANCE_RATIO: f64 = 1.5;
}

/// Empathy expressed by the agent
pub mod empathy {
    /// Score when the transcript has no agent messages
    pub const DEFAULT: f64 = 0.5;
    /// Multiplier applied to phrases-per-message
    pub const PHRASE_SCALE: f64 = 0.5;
    /// Floor once any agent message exists
    pub const FLOOR: f64 = 0.3;
}

/// Human-to-agent response latency
pub mod response_time {
    /// Average in seconds when no human message is followed by an agent reply
    pub const DEFAULT_SECONDS: f64 = 3.5;
}

/// Escalation triggers
pub mod escalation {
    /// Unresolved conversations with more human messages than this escalate
    pub const MAX_UNRESOLVED_HUMAN_MESSAGES: usize = 5;
}

/// Turn-taking coherence
pub mod coherence {
    /// Score with fewer than three messages
    pub const DEFAULT: f64 = 0.7;
    /// Minimum number of messages required to score coherence
    pub const MIN_MESSAGES: usize = 3;
}

/// Professional tone of agent messages
pub mod professionalism {
    /// Starting score, also the default without agent messages
    pub const BASE: f64 = 0.85;
    /// Bonus for starting with a capital letter
    pub const CAPITALIZATION_BONUS: f64 = 0.01;
    /// More exclamation marks than this are penalized
    pub const MAX_EXCLAMATIONS: usize = 2;
    /// More question marks than this are penalized
    pub const MAX_QUESTIONS: usize = 3;
    /// Penalty for excessive punctuation
    pub const PUNCTUATION_PENALTY: f64 = 0.05;
    /// Penalty for informal language
    pub const INFORMAL_PENALTY: f64 = 0.10;
}

/// Weighted aggregation into the overall score
pub mod aggregation {
    /// Weight of clarity
    pub const CLARITY_WEIGHT: f64 = 0.15;
    /// Weight of relevance
    pub const RELEVANCE_WEIGHT: f64 = 0.15;
    /// Weight of accuracy
    pub const ACCURACY_WEIGHT: f64 = 0.15;
    /// Weight of completeness
    pub const COMPLETENESS_WEIGHT: f64 = 0.15;
    /// Weight of empathy
    pub const EMPATHY_WEIGHT: f64 = 0.10;
    /// Weight of coherence
    pub const COHERENCE_WEIGHT: f64 = 0.10;
    /// Weight of professionalism
    pub const PROFESSIONALISM_WEIGHT: f64 = 0.10;
    /// Added when the conversation was resolved
    pub const RESOLUTION_BONUS: f64 = 0.05;
    /// Subtracted when escalation is needed
    pub const ESCALATION_PENALTY: f64 = 0.05;
    /// Subtracted when fallback count exceeds `FALLBACK_PENALTY_THRESHOLD`
    pub const FALLBACK_PENALTY: f64 = 0.05;
    /// Fallback count above which the penalty applies
    pub const FALLBACK_PENALTY_THRESHOLD: u32 = 2;
    /// Scale from the weighted [0, 1] sum to the reported range
    pub const SCORE_SCALE: f64 = 10.0;
    /// Upper bound of the overall score
    pub const MAX_OVERALL_SCORE: f64 = 10.0;
    /// Overall scores below this need attention
    pub const ATTENTION_THRESHOLD: f64 = 5.0;
}
