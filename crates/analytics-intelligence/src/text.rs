// ABOUTME: Lowercased message views and phrase matching helpers shared by all metrics
// ABOUTME: Lowercases each message once and partitions a transcript by sender
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Text preparation for the scoring engine
//!
//! Matching is case-insensitive throughout. A [`TranscriptView`] lowercases
//! every message exactly once up front; metrics then work on the borrowed
//! original text (for capitalization checks) and the lowered copy (for
//! phrase matching).

use analytics_core::constants::scoring::relevance::MIN_CONTENT_WORD_LEN;
use analytics_core::models::{Sender, Transcript};
use chrono::{DateTime, Utc};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Content words: four or more word characters between word boundaries
static CONTENT_WORD_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\b\w{4,}\b").ok());

/// A message prepared for matching
#[derive(Debug, Clone)]
pub struct MessageView<'a> {
    /// Message author
    pub sender: Sender,
    /// Original text
    pub text: &'a str,
    /// Lowercased text
    pub lowered: String,
    /// Send time
    pub timestamp: DateTime<Utc>,
}

impl MessageView<'_> {
    /// Whether the human sent this message
    #[must_use]
    pub fn is_human(&self) -> bool {
        self.sender == Sender::Human
    }

    /// Whether the agent sent this message
    #[must_use]
    pub fn is_agent(&self) -> bool {
        self.sender == Sender::Agent
    }
}

/// Ordered, lowercased view of a transcript
#[derive(Debug, Clone)]
pub struct TranscriptView<'a> {
    messages: Vec<MessageView<'a>>,
}

impl<'a> TranscriptView<'a> {
    /// Prepare a transcript for scoring
    #[must_use]
    pub fn new(transcript: &'a Transcript) -> Self {
        let messages = transcript
            .messages()
            .iter()
            .map(|m| MessageView {
                sender: m.sender,
                text: m.text.as_str(),
                lowered: m.text.to_lowercase(),
                timestamp: m.timestamp,
            })
            .collect();
        Self { messages }
    }

    /// All messages in transcript order
    #[must_use]
    pub fn messages(&self) -> &[MessageView<'a>] {
        &self.messages
    }

    /// Human messages in order
    pub fn human(&self) -> impl Iterator<Item = &MessageView<'a>> {
        self.messages.iter().filter(|m| m.is_human())
    }

    /// Agent messages in order
    pub fn agent(&self) -> impl Iterator<Item = &MessageView<'a>> {
        self.messages.iter().filter(|m| m.is_agent())
    }

    /// Number of human messages
    #[must_use]
    pub fn human_count(&self) -> usize {
        self.human().count()
    }

    /// Number of agent messages
    #[must_use]
    pub fn agent_count(&self) -> usize {
        self.agent().count()
    }

    /// Total number of messages
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the transcript has no messages
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Whitespace-delimited word count
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Whether the first character is uppercase
#[must_use]
pub fn starts_uppercase(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_uppercase)
}

/// Whether the text contains any of the phrases
#[must_use]
pub fn contains_any(text: &str, phrases: &[String]) -> bool {
    phrases.iter().any(|p| text.contains(p.as_str()))
}

/// Number of distinct phrases the text contains
#[must_use]
pub fn count_contained(text: &str, phrases: &[String]) -> usize {
    phrases.iter().filter(|p| text.contains(p.as_str())).count()
}

/// Total non-overlapping occurrences of all phrases in the text
#[must_use]
pub fn count_occurrences(text: &str, phrases: &[String]) -> usize {
    phrases
        .iter()
        .filter(|p| !p.is_empty())
        .map(|p| text.matches(p.as_str()).count())
        .sum()
}

/// Distinct content words of lowercased text
#[must_use]
pub fn content_words(lowered: &str) -> HashSet<&str> {
    CONTENT_WORD_PATTERN.as_ref().map_or_else(
        || {
            lowered
                .split(|c: char| !(c.is_alphanumeric() || c == '_'))
                .filter(|w| w.chars().count() >= MIN_CONTENT_WORD_LEN)
                .collect()
        },
        |pattern| pattern.find_iter(lowered).map(|m| m.as_str()).collect(),
    )
}
