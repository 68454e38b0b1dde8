// ABOUTME: Service layer running the scoring engine against stored conversations
// ABOUTME: Analysis (single, outcome, batch) and reporting (conversation, dashboard, daily)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Service layer
//!
//! Services own an `Arc<dyn ConversationRepository>` and never touch storage
//! internals, so any repository implementation can back them.

/// Scoring and persistence of conversation analyses
pub mod analysis;

/// Reports built from stored analyses
pub mod reporting;

pub use crate::storage::BatchScope;
pub use analysis::{AnalysisOutcome, AnalysisService, BatchFailure, BatchSummary};
pub use reporting::{
    AnalysisView, ConversationReport, ConversationSummary, DailyReport, DashboardSummary,
    ReportInsights, ReportingService, SentimentBreakdown,
};
