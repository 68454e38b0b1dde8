// ABOUTME: Analyze command scoring a single imported conversation
// ABOUTME: Prints the full conversation report, metrics included
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display::print_json;
use crate::helpers::input::{read_json, store_imports};
use anyhow::{Context, Result};
use conversation_analytics::config::AnalyticsConfig;
use conversation_analytics::models::ConversationImport;
use conversation_analytics::services::{AnalysisService, ReportingService};
use conversation_analytics::storage::InMemoryRepository;
use std::path::Path;
use std::sync::Arc;

/// Score the conversation in `file` and print its report
pub async fn run(config: &AnalyticsConfig, file: &Path) -> Result<()> {
    let import: ConversationImport = read_json(file).await?;
    let repository = Arc::new(InMemoryRepository::new());
    let ids = store_imports(repository.as_ref(), vec![import]).await?;
    let id = ids.first().copied().context("No conversation imported")?;

    AnalysisService::from_config(repository.clone(), config)
        .analyze_conversation(id)
        .await?;
    let report = ReportingService::new(repository)
        .conversation_report(id)
        .await?;

    print_json(&report)
}
