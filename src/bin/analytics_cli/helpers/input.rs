// ABOUTME: Import file loading for analytics-cli
// ABOUTME: Reads JSON conversation imports and stores them in a repository
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{Context, Result};
use chrono::Utc;
use conversation_analytics::models::{ConversationId, ConversationImport};
use conversation_analytics::storage::ConversationRepository;
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::info;

/// Read and parse a JSON file
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid JSON in {}", path.display()))
}

/// Validate imports and store them as pending conversations
pub async fn store_imports(
    repository: &dyn ConversationRepository,
    imports: Vec<ConversationImport>,
) -> Result<Vec<ConversationId>> {
    let now = Utc::now();
    let mut ids = Vec::with_capacity(imports.len());
    for (idx, import) in imports.into_iter().enumerate() {
        let conversation = import
            .into_conversation(now)
            .with_context(|| format!("Conversation at index {idx} is invalid"))?;
        ids.push(repository.insert_conversation(conversation).await?);
    }
    info!(conversations = ids.len(), "Imported conversations");
    Ok(ids)
}
