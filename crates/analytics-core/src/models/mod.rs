// ABOUTME: Core data models for conversation analytics
// ABOUTME: Re-exports conversation, transcript and metrics record types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Messages, transcripts, conversations and imports
pub mod conversation;

/// Metrics records, sentiment and quality tiers
pub mod analysis;

pub use analysis::{MetricComponents, MetricsRecord, QualityTier, Sentiment};
pub use conversation::{
    Conversation, ConversationId, ConversationImport, ConversationStatus, ImportedMessage,
    Message, Sender, Transcript,
};
