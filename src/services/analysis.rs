// ABOUTME: Analysis service scoring stored conversations and persisting one record per conversation
// ABOUTME: Single, outcome-reporting, and bounded-concurrency batch analysis over a repository
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::environment::{AnalyticsConfig, DEFAULT_BATCH_CONCURRENCY};
use crate::errors::{AppError, AppResult};
use crate::storage::{BatchScope, ConversationRepository, StoredAnalysis};
use analytics_core::constants::service::{EMPTY_CONVERSATION_ERROR, NO_MESSAGES_REASON};
use analytics_core::models::{ConversationId, ConversationStatus, Transcript};
use analytics_intelligence::{ConversationAnalyzer, IntelligenceConfig, Lexicon};
use chrono::{DateTime, Utc};
use futures_util::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// Result of analyzing one conversation without raising
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AnalysisOutcome {
    /// Scored and stored
    Success {
        /// Overall score of the new record
        overall_score: f64,
    },
    /// Nothing to score
    Skipped {
        /// Why the conversation was skipped
        reason: String,
    },
    /// Analysis failed
    Error {
        /// Failure description
        error: String,
    },
}

/// A conversation that failed during a batch run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchFailure {
    /// Failed conversation
    pub conversation_id: ConversationId,
    /// Failure description
    pub error: String,
}

/// Counts reported by a batch run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Conversations considered
    pub total: usize,
    /// Conversations scored and stored
    pub success: usize,
    /// Conversations that failed
    pub errors: usize,
    /// Conversations skipped for having no messages
    pub skipped: usize,
    /// When the run started
    pub started_at: DateTime<Utc>,
    /// When the run finished
    pub completed_at: DateTime<Utc>,
    /// Per-conversation failure details
    pub failures: Vec<BatchFailure>,
}

/// Scores conversations held by a repository
#[derive(Clone)]
pub struct AnalysisService {
    repository: Arc<dyn ConversationRepository>,
    lexicon: Arc<Lexicon>,
    concurrency: usize,
}

impl AnalysisService {
    /// Service using the process-wide lexicon and default concurrency
    #[must_use]
    pub fn new(repository: Arc<dyn ConversationRepository>) -> Self {
        Self {
            repository,
            lexicon: Arc::new(IntelligenceConfig::global().lexicon.clone()),
            concurrency: DEFAULT_BATCH_CONCURRENCY,
        }
    }

    /// Service configured from the environment settings
    #[must_use]
    pub fn from_config(
        repository: Arc<dyn ConversationRepository>,
        config: &AnalyticsConfig,
    ) -> Self {
        Self::new(repository).with_concurrency(config.batch.concurrency)
    }

    /// Use a specific lexicon
    #[must_use]
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = Arc::new(lexicon);
        self
    }

    /// Set batch concurrency, at least 1
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Score a conversation and store its record, replacing any earlier one
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown conversation, `InvalidInput`
    /// when it has no messages, or the repository's error if storing fails
    pub async fn analyze_conversation(&self, id: ConversationId) -> AppResult<StoredAnalysis> {
        let transcript = self.fetch_transcript(id).await?;
        if transcript.is_empty() {
            return Err(AppError::invalid_input(EMPTY_CONVERSATION_ERROR));
        }
        self.score_and_store(id, &transcript).await
    }

    /// Analyze one conversation, reporting the outcome instead of failing
    ///
    /// A failure after the conversation was found marks it `error`.
    pub async fn analyze_single(&self, id: ConversationId) -> AnalysisOutcome {
        let transcript = match self.fetch_transcript(id).await {
            Ok(transcript) => transcript,
            Err(e) => {
                warn!(conversation_id = %id, error = %e, "Could not load conversation");
                return AnalysisOutcome::Error {
                    error: e.to_string(),
                };
            }
        };

        if transcript.is_empty() {
            info!(conversation_id = %id, "Skipped conversation without messages");
            return AnalysisOutcome::Skipped {
                reason: NO_MESSAGES_REASON.to_owned(),
            };
        }

        match self.score_and_store(id, &transcript).await {
            Ok(stored) => AnalysisOutcome::Success {
                overall_score: stored.metrics.overall_score(),
            },
            Err(e) => {
                warn!(conversation_id = %id, error = %e, "Conversation analysis failed");
                if let Err(status_error) = self
                    .repository
                    .set_status(id, ConversationStatus::Error)
                    .await
                {
                    warn!(
                        conversation_id = %id,
                        error = %status_error,
                        "Could not mark conversation as failed"
                    );
                }
                AnalysisOutcome::Error {
                    error: e.to_string(),
                }
            }
        }
    }

    /// Analyze every conversation selected by the scope
    ///
    /// # Errors
    ///
    /// Returns an error only if the repository cannot list conversations;
    /// individual failures are counted in the summary
    pub async fn run_batch(&self, scope: BatchScope) -> AppResult<BatchSummary> {
        let started_at = Utc::now();
        let ids = self.repository.list_ids_for_batch(scope).await?;
        info!(scope = %scope, conversations = ids.len(), "Starting batch analysis");
        Ok(self.analyze_ids_since(ids, started_at).await)
    }

    /// Analyze the given conversations with bounded concurrency
    pub async fn analyze_ids(&self, ids: Vec<ConversationId>) -> BatchSummary {
        self.analyze_ids_since(ids, Utc::now()).await
    }

    async fn analyze_ids_since(
        &self,
        ids: Vec<ConversationId>,
        started_at: DateTime<Utc>,
    ) -> BatchSummary {
        let total = ids.len();
        let outcomes: Vec<(ConversationId, AnalysisOutcome)> = stream::iter(ids)
            .map(|id| async move { (id, self.analyze_single(id).await) })
            .buffer_unordered(self.concurrency)
            .collect()
            .await;

        let mut summary = BatchSummary {
            total,
            success: 0,
            errors: 0,
            skipped: 0,
            started_at,
            completed_at: started_at,
            failures: Vec::new(),
        };
        for (conversation_id, outcome) in outcomes {
            match outcome {
                AnalysisOutcome::Success { .. } => summary.success += 1,
                AnalysisOutcome::Skipped { .. } => summary.skipped += 1,
                AnalysisOutcome::Error { error } => {
                    summary.errors += 1;
                    summary.failures.push(BatchFailure {
                        conversation_id,
                        error,
                    });
                }
            }
        }
        summary
            .failures
            .sort_by(|a, b| a.conversation_id.cmp(&b.conversation_id));
        summary.completed_at = Utc::now();

        info!(
            total = summary.total,
            success = summary.success,
            errors = summary.errors,
            skipped = summary.skipped,
            "Batch analysis completed"
        );
        summary
    }

    async fn fetch_transcript(&self, id: ConversationId) -> AppResult<Transcript> {
        self.repository
            .load_transcript(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Conversation {id}")))
    }

    async fn score_and_store(
        &self,
        id: ConversationId,
        transcript: &Transcript,
    ) -> AppResult<StoredAnalysis> {
        let metrics = ConversationAnalyzer::with_lexicon(&self.lexicon).analyze(transcript);
        let stored = self
            .repository
            .upsert_analysis(StoredAnalysis::new(id, metrics, String::new(), Utc::now()))
            .await?;
        self.repository
            .set_status(id, ConversationStatus::Analyzed)
            .await?;

        info!(
            conversation_id = %id,
            overall_score = stored.metrics.overall_score(),
            needs_attention = stored.metrics.needs_attention(),
            "Conversation analyzed"
        );
        Ok(stored)
    }
}
