// ABOUTME: Batch command importing a list of conversations and analyzing them concurrently
// ABOUTME: Prints the batch summary plus optional dashboard and daily report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display::print_json;
use crate::helpers::input::{read_json, store_imports};
use anyhow::Result;
use chrono::Utc;
use conversation_analytics::config::AnalyticsConfig;
use conversation_analytics::models::ConversationImport;
use conversation_analytics::services::{
    AnalysisService, BatchSummary, DailyReport, DashboardSummary, ReportingService,
};
use conversation_analytics::storage::{BatchScope, InMemoryRepository};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

/// Flags of the batch command
pub struct BatchOptions {
    /// Conversations to analyze
    pub scope: BatchScope,
    /// Print dashboard totals
    pub dashboard: bool,
    /// Print today's report
    pub daily: bool,
}

#[derive(Serialize)]
struct BatchOutput {
    summary: BatchSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    dashboard: Option<DashboardSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    daily: Option<DailyReport>,
}

/// Import the conversations in `file`, run a batch and print the results
pub async fn run(config: &AnalyticsConfig, file: &Path, options: BatchOptions) -> Result<()> {
    let imports: Vec<ConversationImport> = read_json(file).await?;
    let repository = Arc::new(InMemoryRepository::new());
    store_imports(repository.as_ref(), imports).await?;

    let summary = AnalysisService::from_config(repository.clone(), config)
        .run_batch(options.scope)
        .await?;

    let reporting = ReportingService::new(repository);
    let dashboard = if options.dashboard {
        Some(reporting.dashboard().await?)
    } else {
        None
    };
    let daily = if options.daily {
        Some(reporting.daily_report(Utc::now().date_naive()).await?)
    } else {
        None
    };

    print_json(&BatchOutput {
        summary,
        dashboard,
        daily,
    })
}
