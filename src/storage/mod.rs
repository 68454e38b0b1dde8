// ABOUTME: Storage abstraction for conversations and their analysis records
// ABOUTME: Defines the repository trait, stored analysis type, and batch selection scopes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Conversation storage
//!
//! The repository guarantees at most one [`StoredAnalysis`] per conversation:
//! [`ConversationRepository::upsert_analysis`] replaces any earlier record
//! atomically and keeps its original `created_at`.

/// In-memory repository backed by `DashMap`
pub mod memory;

pub use memory::InMemoryRepository;

use crate::errors::{AppError, AppResult};
use analytics_core::models::{
    Conversation, ConversationId, ConversationStatus, MetricsRecord, Transcript,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which conversations a batch run considers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchScope {
    /// Pending conversations that have messages
    #[default]
    Pending,
    /// Pending conversations, or any conversation without an analysis, that have messages
    Unanalyzed,
}

impl BatchScope {
    /// Configuration name of the scope
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Unanalyzed => "unanalyzed",
        }
    }
}

impl fmt::Display for BatchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BatchScope {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "unanalyzed" => Ok(Self::Unanalyzed),
            other => Err(AppError::invalid_input(format!(
                "Unknown batch scope '{other}', expected 'pending' or 'unanalyzed'"
            ))),
        }
    }
}

/// The single analysis record kept for a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredAnalysis {
    /// Conversation the record belongs to
    pub conversation_id: ConversationId,
    /// Engine output
    pub metrics: MetricsRecord,
    /// Free-form notes attached by the analysis run
    pub analysis_notes: String,
    /// When the conversation was first analyzed
    pub created_at: DateTime<Utc>,
    /// When the record was last replaced
    pub updated_at: DateTime<Utc>,
}

impl StoredAnalysis {
    /// Fresh record for a conversation analyzed at `now`
    #[must_use]
    pub fn new(
        conversation_id: ConversationId,
        metrics: MetricsRecord,
        analysis_notes: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            conversation_id,
            metrics,
            analysis_notes: analysis_notes.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Conversation and analysis storage
///
/// Implementations must make `upsert_analysis` atomic per conversation so
/// concurrent analyses of the same conversation leave exactly one record.
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    /// Store a new conversation, returning its ID
    async fn insert_conversation(&self, conversation: Conversation) -> AppResult<ConversationId>;

    /// Get a conversation by ID
    async fn get_conversation(&self, id: ConversationId) -> AppResult<Option<Conversation>>;

    /// Get the ordered transcript of a conversation
    async fn load_transcript(&self, id: ConversationId) -> AppResult<Option<Transcript>>;

    /// List all conversations
    async fn list_conversations(&self) -> AppResult<Vec<Conversation>>;

    /// IDs of conversations with messages selected by the scope
    async fn list_ids_for_batch(&self, scope: BatchScope) -> AppResult<Vec<ConversationId>>;

    /// Insert or replace the analysis of a conversation
    async fn upsert_analysis(&self, analysis: StoredAnalysis) -> AppResult<StoredAnalysis>;

    /// Get the analysis of a conversation
    async fn get_analysis(&self, id: ConversationId) -> AppResult<Option<StoredAnalysis>>;

    /// List all stored analyses
    async fn list_analyses(&self) -> AppResult<Vec<StoredAnalysis>>;

    /// Update the status of a conversation
    async fn set_status(&self, id: ConversationId, status: ConversationStatus) -> AppResult<()>;
}
