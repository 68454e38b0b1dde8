// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, transcript builders, and seeded repositories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]
//! Shared test utilities for `conversation_analytics`

use chrono::{DateTime, Duration, TimeZone, Utc};
use conversation_analytics::models::{
    Conversation, ConversationId, Message, Sender, Transcript,
};
use conversation_analytics::storage::{ConversationRepository, InMemoryRepository};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Seconds between consecutive messages built by [`transcript`]
pub const MESSAGE_GAP_SECONDS: i64 = 2;

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixed instant the builders count from
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 4, 2, 10, 0, 0).unwrap()
}

/// Transcript with messages `MESSAGE_GAP_SECONDS` apart, in the given order
pub fn transcript(turns: &[(Sender, &str)]) -> Transcript {
    let start = base_time();
    Transcript::new(
        turns
            .iter()
            .enumerate()
            .map(|(i, (sender, text))| {
                Message::new(
                    *sender,
                    *text,
                    start + Duration::seconds(i as i64 * MESSAGE_GAP_SECONDS),
                    i as u64 + 1,
                )
            })
            .collect(),
    )
}

/// Transcript of human messages only
pub fn human_only(texts: &[&str]) -> Transcript {
    let turns: Vec<(Sender, &str)> = texts.iter().map(|t| (Sender::Human, *t)).collect();
    transcript(&turns)
}

/// Pending conversation holding the given turns
pub fn conversation(title: &str, turns: &[(Sender, &str)]) -> Conversation {
    Conversation::new(title, transcript(turns), base_time())
}

/// Pending conversation with no messages
pub fn empty_conversation(title: &str) -> Conversation {
    Conversation::new(title, Transcript::default(), base_time())
}

/// A short support exchange that ends with the customer satisfied
pub fn resolved_support_chat() -> Vec<(Sender, &'static str)> {
    vec![
        (Sender::Human, "My invoice shows the wrong billing address?"),
        (
            Sender::Agent,
            "I understand, sorry about that. I have updated the billing address on your invoice.",
        ),
        (Sender::Human, "Thanks, that solved it!"),
    ]
}

/// Repository seeded with conversations, returning their IDs in order
pub async fn seeded_repository(
    conversations: Vec<Conversation>,
) -> (Arc<InMemoryRepository>, Vec<ConversationId>) {
    let repository = Arc::new(InMemoryRepository::new());
    let mut ids = Vec::with_capacity(conversations.len());
    for conversation in conversations {
        ids.push(repository.insert_conversation(conversation).await.unwrap());
    }
    (repository, ids)
}
