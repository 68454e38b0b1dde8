// ABOUTME: Independent per-metric scoring functions over a prepared transcript view
// ABOUTME: Each metric degrades to a fixed default when its inputs are missing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Conversation metrics
//!
//! Every function here is pure and independent of the others (escalation
//! reuses resolution and sentiment as inputs, see [`escalation_from_signals`]).
//! Phrase matching is substring containment against lowercased text.

use crate::config::intelligence::{Lexicon, PhraseCategory};
use crate::text::{
    contains_any, content_words, count_contained, count_occurrences, starts_uppercase, word_count,
    TranscriptView,
};
use analytics_core::constants::scoring::{
    accuracy, clarity, coherence, completeness, empathy, escalation, professionalism, relevance,
    response_time, sentiment as sentiment_rules,
};
use analytics_core::models::Sentiment;

fn mean(total: f64, count: usize) -> f64 {
    total / count as f64
}

/// Clarity of agent messages: length, questions and capitalization
#[must_use]
pub fn clarity_score(view: &TranscriptView<'_>) -> f64 {
    let agent_count = view.agent_count();
    if agent_count == 0 {
        return clarity::DEFAULT;
    }

    let total: f64 = view
        .agent()
        .map(|message| {
            let mut score = clarity::BASE;
            let words = word_count(message.text);
            if !(clarity::MIN_WORDS..=clarity::MAX_WORDS).contains(&words) {
                score -= clarity::LENGTH_PENALTY;
            }
            if message.text.contains('?') {
                score += clarity::QUESTION_BONUS;
            }
            if starts_uppercase(message.text) {
                score += clarity::CAPITALIZATION_BONUS;
            }
            score.clamp(0.0, 1.0)
        })
        .sum();

    mean(total, agent_count).clamp(0.0, 1.0)
}

/// Content-word overlap between each human message and the agent reply
/// that immediately follows it
#[must_use]
pub fn relevance_score(view: &TranscriptView<'_>) -> f64 {
    if view.len() < relevance::MIN_MESSAGES {
        return relevance::DEFAULT;
    }

    let pair_scores: Vec<f64> = view
        .messages()
        .windows(2)
        .filter(|pair| pair[0].is_human() && pair[1].is_agent())
        .filter_map(|pair| {
            let asked = content_words(&pair[0].lowered);
            if asked.is_empty() {
                return None;
            }
            let answered = content_words(&pair[1].lowered);
            let shared = asked.intersection(&answered).count();
            Some((relevance::OVERLAP_SCALE * shared as f64 / asked.len() as f64).min(1.0))
        })
        .collect();

    if pair_scores.is_empty() {
        relevance::DEFAULT
    } else {
        mean(pair_scores.iter().sum(), pair_scores.len())
    }
}

/// Agent confidence: hedging lowers the score, confident wording raises it
#[must_use]
pub fn accuracy_score(view: &TranscriptView<'_>, lexicon: &Lexicon) -> f64 {
    let hedging = lexicon.phrases(PhraseCategory::Hedging);
    let confidence = lexicon.phrases(PhraseCategory::Confidence);

    let (hedges, confident) = view.agent().fold((0_usize, 0_usize), |(h, c), message| {
        (
            h + count_occurrences(&message.lowered, hedging),
            c + count_occurrences(&message.lowered, confidence),
        )
    });

    (accuracy::BASE - hedges as f64 * accuracy::HEDGING_PENALTY
        + confident as f64 * accuracy::CONFIDENCE_BONUS)
        .clamp(0.0, 1.0)
}

/// Answer length relative to whether the human asked anything
#[must_use]
pub fn completeness_score(view: &TranscriptView<'_>) -> f64 {
    if view.human_count() == 0 {
        return completeness::DEFAULT;
    }
    if !view.human().any(|m| m.text.contains('?')) {
        return completeness::NO_QUESTIONS;
    }

    let agent_count = view.agent_count();
    let avg_words = if agent_count == 0 {
        0.0
    } else {
        let words: usize = view.agent().map(|m| word_count(m.text)).sum();
        mean(words as f64, agent_count)
    };

    if avg_words < completeness::SHORT_ANSWER_WORDS {
        completeness::SHORT_ANSWER_SCORE
    } else if avg_words < completeness::MEDIUM_ANSWER_WORDS {
        completeness::MEDIUM_ANSWER_SCORE
    } else {
        completeness::LONG_ANSWER_SCORE
    }
}

/// Classify sentiment from positive and negative phrase counts
#[must_use]
pub fn classify_sentiment(positive: usize, negative: usize) -> Sentiment {
    let (pos, neg) = (positive as f64, negative as f64);
    if pos > sentiment_rules::DOMINANCE_RATIO * neg {
        Sentiment::Positive
    } else if neg > sentiment_rules::DOMINANCE_RATIO * pos {
        Sentiment::Negative
    } else if positive > 0 && negative > 0 {
        Sentiment::Mixed
    } else {
        Sentiment::Neutral
    }
}

/// Sentiment of the human side of the conversation
#[must_use]
pub fn sentiment(view: &TranscriptView<'_>, lexicon: &Lexicon) -> Sentiment {
    let positive_phrases = lexicon.phrases(PhraseCategory::Positive);
    let negative_phrases = lexicon.phrases(PhraseCategory::Negative);

    let (positive, negative) = view.human().fold((0, 0), |(pos, neg), message| {
        (
            pos + count_contained(&message.lowered, positive_phrases),
            neg + count_contained(&message.lowered, negative_phrases),
        )
    });

    classify_sentiment(positive, negative)
}

/// Empathetic phrasing per agent message, floored
#[must_use]
pub fn empathy_score(view: &TranscriptView<'_>, lexicon: &Lexicon) -> f64 {
    let agent_count = view.agent_count();
    if agent_count == 0 {
        return empathy::DEFAULT;
    }

    let phrases = lexicon.phrases(PhraseCategory::Empathy);
    let hits: usize = view
        .agent()
        .map(|m| count_contained(&m.lowered, phrases))
        .sum();

    (mean(hits as f64, agent_count) * empathy::PHRASE_SCALE)
        .min(1.0)
        .max(empathy::FLOOR)
}

/// Mean seconds between a human message and the agent reply right after it
#[must_use]
pub fn avg_response_time(view: &TranscriptView<'_>) -> f64 {
    let deltas: Vec<f64> = view
        .messages()
        .windows(2)
        .filter(|pair| pair[0].is_human() && pair[1].is_agent())
        .map(|pair| {
            let delta = pair[1].timestamp - pair[0].timestamp;
            delta.num_microseconds().map_or_else(
                || delta.num_milliseconds() as f64 / 1_000.0,
                |micros| micros as f64 / 1_000_000.0,
            )
        })
        .collect();

    if deltas.is_empty() {
        response_time::DEFAULT_SECONDS
    } else {
        mean(deltas.iter().sum(), deltas.len())
    }
}

/// Whether the last human message closes the issue
#[must_use]
pub fn resolution(view: &TranscriptView<'_>, lexicon: &Lexicon) -> bool {
    view.human().last().is_some_and(|last| {
        contains_any(&last.lowered, lexicon.phrases(PhraseCategory::Closure))
    })
}

/// Whether a human should take over
#[must_use]
pub fn escalation_needed(view: &TranscriptView<'_>, lexicon: &Lexicon) -> bool {
    escalation_from_signals(
        view,
        lexicon,
        resolution(view, lexicon),
        sentiment(view, lexicon),
    )
}

/// Escalation decision from already computed resolution and sentiment
#[must_use]
pub fn escalation_from_signals(
    view: &TranscriptView<'_>,
    lexicon: &Lexicon,
    resolved: bool,
    sentiment: Sentiment,
) -> bool {
    let long_unresolved = !resolved && view.human_count() > escalation::MAX_UNRESOLVED_HUMAN_MESSAGES;
    let keywords = lexicon.phrases(PhraseCategory::Escalation);

    long_unresolved
        || sentiment == Sentiment::Negative
        || view.human().any(|m| contains_any(&m.lowered, keywords))
}

/// Number of fallback phrases across agent messages
#[must_use]
pub fn fallback_count(view: &TranscriptView<'_>, lexicon: &Lexicon) -> u32 {
    let phrases = lexicon.phrases(PhraseCategory::Fallback);
    let total: usize = view
        .agent()
        .map(|m| count_contained(&m.lowered, phrases))
        .sum();
    u32::try_from(total).unwrap_or(u32::MAX)
}

/// Fraction of consecutive messages that alternate sender
#[must_use]
pub fn coherence_score(view: &TranscriptView<'_>) -> f64 {
    if view.len() < coherence::MIN_MESSAGES {
        return coherence::DEFAULT;
    }

    let messages = view.messages();
    let alternations = messages
        .windows(2)
        .filter(|pair| pair[0].sender != pair[1].sender)
        .count();

    mean(alternations as f64, messages.len() - 1)
}

/// Professional tone of agent messages
#[must_use]
pub fn professionalism_score(view: &TranscriptView<'_>, lexicon: &Lexicon) -> f64 {
    let informal = lexicon.phrases(PhraseCategory::Informal);

    let score = view.agent().fold(professionalism::BASE, |score, message| {
        let mut score = score;
        if starts_uppercase(message.text) {
            score += professionalism::CAPITALIZATION_BONUS;
        }
        let exclamations = message.text.matches('!').count();
        let questions = message.text.matches('?').count();
        if exclamations > professionalism::MAX_EXCLAMATIONS
            || questions > professionalism::MAX_QUESTIONS
        {
            score -= professionalism::PUNCTUATION_PENALTY;
        }
        if contains_any(&message.lowered, informal) {
            score -= professionalism::INFORMAL_PENALTY;
        }
        score
    });

    score.clamp(0.0, 1.0)
}
