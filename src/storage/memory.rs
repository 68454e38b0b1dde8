// ABOUTME: In-memory conversation repository using DashMap for concurrent access
// ABOUTME: Analysis upserts go through the entry API so each conversation keeps one record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{BatchScope, ConversationRepository, StoredAnalysis};
use crate::errors::{AppError, AppResult};
use analytics_core::models::{Conversation, ConversationId, ConversationStatus, Transcript};
use async_trait::async_trait;
use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

/// In-memory repository
///
/// Cloning is cheap and clones share the same maps.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    conversations: Arc<DashMap<ConversationId, Conversation>>,
    analyses: Arc<DashMap<ConversationId, StoredAnalysis>>,
}

impl InMemoryRepository {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored analysis records
    #[must_use]
    pub fn analysis_count(&self) -> usize {
        self.analyses.len()
    }

    fn selected(&self, conversation: &Conversation, scope: BatchScope) -> bool {
        if conversation.transcript.is_empty() {
            return false;
        }
        let pending = conversation.status == ConversationStatus::Pending;
        match scope {
            BatchScope::Pending => pending,
            BatchScope::Unanalyzed => pending || !self.analyses.contains_key(&conversation.id),
        }
    }
}

#[async_trait]
impl ConversationRepository for InMemoryRepository {
    async fn insert_conversation(&self, conversation: Conversation) -> AppResult<ConversationId> {
        let id = conversation.id;
        match self.conversations.entry(id) {
            Entry::Occupied(_) => Err(AppError::invalid_input(format!(
                "Conversation {id} already exists"
            ))),
            Entry::Vacant(slot) => {
                slot.insert(conversation);
                debug!(conversation_id = %id, "Stored conversation");
                Ok(id)
            }
        }
    }

    async fn get_conversation(&self, id: ConversationId) -> AppResult<Option<Conversation>> {
        Ok(self.conversations.get(&id).map(|entry| entry.value().clone()))
    }

    async fn load_transcript(&self, id: ConversationId) -> AppResult<Option<Transcript>> {
        Ok(self
            .conversations
            .get(&id)
            .map(|entry| entry.value().transcript.clone()))
    }

    async fn list_conversations(&self) -> AppResult<Vec<Conversation>> {
        let mut conversations: Vec<Conversation> = self
            .conversations
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        conversations.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(conversations)
    }

    async fn list_ids_for_batch(&self, scope: BatchScope) -> AppResult<Vec<ConversationId>> {
        let mut selected: Vec<_> = self
            .conversations
            .iter()
            .filter(|entry| self.selected(entry.value(), scope))
            .map(|entry| (entry.value().created_at, *entry.key()))
            .collect();
        selected.sort();
        Ok(selected.into_iter().map(|(_, id)| id).collect())
    }

    async fn upsert_analysis(&self, analysis: StoredAnalysis) -> AppResult<StoredAnalysis> {
        let id = analysis.conversation_id;
        if !self.conversations.contains_key(&id) {
            return Err(AppError::not_found(format!("Conversation {id}")));
        }

        let stored = match self.analyses.entry(id) {
            Entry::Occupied(mut existing) => {
                let replacement = StoredAnalysis {
                    created_at: existing.get().created_at,
                    ..analysis
                };
                existing.insert(replacement.clone());
                replacement
            }
            Entry::Vacant(slot) => slot.insert(analysis).value().clone(),
        };
        Ok(stored)
    }

    async fn get_analysis(&self, id: ConversationId) -> AppResult<Option<StoredAnalysis>> {
        Ok(self.analyses.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list_analyses(&self) -> AppResult<Vec<StoredAnalysis>> {
        let mut analyses: Vec<StoredAnalysis> = self
            .analyses
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        analyses.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(analyses)
    }

    async fn set_status(&self, id: ConversationId, status: ConversationStatus) -> AppResult<()> {
        let mut conversation = self
            .conversations
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Conversation {id}")))?;
        conversation.status = status;
        conversation.updated_at = Utc::now();
        Ok(())
    }
}
