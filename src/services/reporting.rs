// ABOUTME: Reporting over stored analyses: per-conversation reports, dashboard totals, daily reports
// ABOUTME: Aggregations are pure functions over repository snapshots so they test without storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::storage::{ConversationRepository, StoredAnalysis};
use analytics_core::constants::service::NO_ANALYSIS_ERROR;
use analytics_core::models::analysis::round_to_hundredths;
use analytics_core::models::{
    Conversation, ConversationId, ConversationStatus, MetricsRecord, Sentiment,
};
use analytics_intelligence::ConversationInsights;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Conversation fields shown in a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationSummary {
    /// Conversation ID
    pub id: ConversationId,
    /// Title
    pub title: String,
    /// Lifecycle status
    pub status: ConversationStatus,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last status change
    pub updated_at: DateTime<Utc>,
}

impl From<&Conversation> for ConversationSummary {
    fn from(conversation: &Conversation) -> Self {
        Self {
            id: conversation.id,
            title: conversation.title.clone(),
            status: conversation.status,
            created_at: conversation.created_at,
            updated_at: conversation.updated_at,
        }
    }
}

/// Stored metrics with their derived fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisView {
    /// Engine output, flattened into the view
    #[serde(flatten)]
    pub metrics: MetricsRecord,
    /// Mean of the four quality scores
    pub quality_average: f64,
    /// Low score or escalation requested
    pub needs_attention: bool,
    /// Notes attached to the analysis
    pub analysis_notes: String,
    /// First analysis time
    pub created_at: DateTime<Utc>,
    /// Last re-analysis time
    pub updated_at: DateTime<Utc>,
}

impl From<&StoredAnalysis> for AnalysisView {
    fn from(stored: &StoredAnalysis) -> Self {
        Self {
            metrics: stored.metrics.clone(),
            quality_average: stored.metrics.quality_average(),
            needs_attention: stored.metrics.needs_attention(),
            analysis_notes: stored.analysis_notes.clone(),
            created_at: stored.created_at,
            updated_at: stored.updated_at,
        }
    }
}

/// Message counts and insight lines of a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportInsights {
    /// All messages
    pub total_messages: usize,
    /// Human messages
    pub user_messages: usize,
    /// Agent messages
    pub ai_messages: usize,
    /// Tier, strengths and improvements
    #[serde(flatten)]
    pub insights: ConversationInsights,
}

/// Full report for one analyzed conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationReport {
    /// Conversation summary
    pub conversation: ConversationSummary,
    /// Stored analysis
    pub analysis: AnalysisView,
    /// Derived insights
    pub insights: ReportInsights,
}

impl ConversationReport {
    /// Assemble a report from a conversation and its analysis
    #[must_use]
    pub fn build(conversation: &Conversation, stored: &StoredAnalysis) -> Self {
        Self {
            conversation: ConversationSummary::from(conversation),
            analysis: AnalysisView::from(stored),
            insights: ReportInsights {
                total_messages: conversation.message_count(),
                user_messages: conversation.human_message_count(),
                ai_messages: conversation.agent_message_count(),
                insights: ConversationInsights::from_record(&stored.metrics),
            },
        }
    }
}

/// Count of analyses per sentiment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentBreakdown {
    /// Positive analyses
    pub positive: usize,
    /// Neutral analyses
    pub neutral: usize,
    /// Negative analyses
    pub negative: usize,
    /// Mixed analyses
    pub mixed: usize,
}

impl SentimentBreakdown {
    /// Tally the sentiments of a set of records
    #[must_use]
    pub fn tally<'a>(records: impl IntoIterator<Item = &'a MetricsRecord>) -> Self {
        let mut breakdown = Self::default();
        for record in records {
            breakdown.add(record.components().sentiment);
        }
        breakdown
    }

    /// Count one more analysis with the given sentiment
    pub fn add(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Neutral => self.neutral += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Mixed => self.mixed += 1,
        }
    }

    /// Count for one sentiment
    #[must_use]
    pub const fn get(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
            Sentiment::Mixed => self.mixed,
        }
    }
}

/// Aggregate view over every conversation and analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Stored conversations
    pub total_conversations: usize,
    /// Stored analyses
    pub analyzed_conversations: usize,
    /// Conversations still pending
    pub pending_conversations: usize,
    /// Mean overall score, 0 when nothing is analyzed
    pub avg_overall_score: f64,
    /// Mean clarity score
    pub avg_clarity: f64,
    /// Mean relevance score
    pub avg_relevance: f64,
    /// Mean empathy score
    pub avg_empathy: f64,
    /// Analyses per sentiment
    pub sentiment_breakdown: SentimentBreakdown,
    /// Percent of analyses needing escalation, two decimals
    pub escalation_rate: f64,
    /// Percent of analyses resolved, two decimals
    pub resolution_rate: f64,
}

impl DashboardSummary {
    /// Aggregate conversation and analysis snapshots
    #[must_use]
    pub fn compute(conversations: &[Conversation], analyses: &[StoredAnalysis]) -> Self {
        let records: Vec<&MetricsRecord> = analyses.iter().map(|a| &a.metrics).collect();
        let analyzed = records.len();
        let escalations = records
            .iter()
            .filter(|r| r.components().escalation_needed)
            .count();
        let resolutions = records.iter().filter(|r| r.components().resolution).count();

        Self {
            total_conversations: conversations.len(),
            analyzed_conversations: analyzed,
            pending_conversations: conversations
                .iter()
                .filter(|c| c.status == ConversationStatus::Pending)
                .count(),
            avg_overall_score: mean(records.iter().map(|r| r.overall_score())),
            avg_clarity: mean(records.iter().map(|r| r.components().clarity_score)),
            avg_relevance: mean(records.iter().map(|r| r.components().relevance_score)),
            avg_empathy: mean(records.iter().map(|r| r.components().empathy_score)),
            sentiment_breakdown: SentimentBreakdown::tally(records.iter().copied()),
            escalation_rate: percent(escalations, analyzed),
            resolution_rate: percent(resolutions, analyzed),
        }
    }
}

/// Analyses created on one UTC day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReport {
    /// Reported day
    pub date: NaiveDate,
    /// Analyses created that day
    pub total_analyzed: usize,
    /// Mean overall score, absent when nothing was analyzed
    pub avg_score: Option<f64>,
    /// Analyses per sentiment
    pub sentiment_distribution: SentimentBreakdown,
    /// Analyses needing escalation
    pub escalations: usize,
    /// Resolved analyses
    pub resolutions: usize,
}

impl DailyReport {
    /// Report over the analyses first created on `date`
    #[must_use]
    pub fn compute(date: NaiveDate, analyses: &[StoredAnalysis]) -> Self {
        let records: Vec<&MetricsRecord> = analyses
            .iter()
            .filter(|a| a.created_at.date_naive() == date)
            .map(|a| &a.metrics)
            .collect();

        Self {
            date,
            total_analyzed: records.len(),
            avg_score: (!records.is_empty())
                .then(|| mean(records.iter().map(|r| r.overall_score()))),
            sentiment_distribution: SentimentBreakdown::tally(records.iter().copied()),
            escalations: records
                .iter()
                .filter(|r| r.components().escalation_needed)
                .count(),
            resolutions: records.iter().filter(|r| r.components().resolution).count(),
        }
    }
}

/// Builds reports from a repository
#[derive(Clone)]
pub struct ReportingService {
    repository: Arc<dyn ConversationRepository>,
}

impl ReportingService {
    /// Create a reporting service
    #[must_use]
    pub fn new(repository: Arc<dyn ConversationRepository>) -> Self {
        Self { repository }
    }

    /// Report for one analyzed conversation
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the conversation is unknown or has not
    /// been analyzed yet
    pub async fn conversation_report(&self, id: ConversationId) -> AppResult<ConversationReport> {
        let conversation = self
            .repository
            .get_conversation(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Conversation {id}")))?;
        let stored = self
            .repository
            .get_analysis(id)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::ResourceNotFound, NO_ANALYSIS_ERROR))?;

        debug!(conversation_id = %id, "Built conversation report");
        Ok(ConversationReport::build(&conversation, &stored))
    }

    /// Dashboard totals over the whole repository
    ///
    /// # Errors
    ///
    /// Returns the repository's error if listing fails
    pub async fn dashboard(&self) -> AppResult<DashboardSummary> {
        let conversations = self.repository.list_conversations().await?;
        let analyses = self.repository.list_analyses().await?;
        Ok(DashboardSummary::compute(&conversations, &analyses))
    }

    /// Report over the analyses created on `date`
    ///
    /// # Errors
    ///
    /// Returns the repository's error if listing fails
    pub async fn daily_report(&self, date: NaiveDate) -> AppResult<DailyReport> {
        let analyses = self.repository.list_analyses().await?;
        Ok(DailyReport::compute(date, &analyses))
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0_usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        round_to_hundredths(part as f64 / whole as f64 * 100.0)
    }
}
