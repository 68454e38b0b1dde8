// ABOUTME: Insight rules deriving quality tier, strengths, and improvement areas from metrics
// ABOUTME: Threshold-based and deterministic, with a fallback line when no rule fires
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use analytics_core::constants::insights::{improvements, strengths};
use analytics_core::models::{MetricsRecord, QualityTier};
use serde::{Deserialize, Serialize};

/// Shown when no strength rule fires
pub const DEFAULT_STRENGTH: &str = "Basic functionality maintained";

/// Shown when no improvement rule fires
pub const DEFAULT_IMPROVEMENT: &str = "Continue maintaining quality";

/// Human-readable findings for one analyzed conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationInsights {
    /// Tier label of the overall score
    pub conversation_quality: QualityTier,
    /// What went well
    pub key_strengths: Vec<String>,
    /// What to work on
    pub areas_for_improvement: Vec<String>,
}

impl ConversationInsights {
    /// Apply every insight rule to a record
    #[must_use]
    pub fn from_record(record: &MetricsRecord) -> Self {
        Self {
            conversation_quality: record.quality_tier(),
            key_strengths: key_strengths(record),
            areas_for_improvement: areas_for_improvement(record),
        }
    }
}

/// Strength lines, never empty
#[must_use]
pub fn key_strengths(record: &MetricsRecord) -> Vec<String> {
    let c = record.components();
    let rules = [
        (c.clarity_score >= strengths::CLARITY, "Clear communication"),
        (c.empathy_score >= strengths::EMPATHY, "Empathetic responses"),
        (c.resolution, "Issue resolved"),
        (
            c.professionalism_score >= strengths::PROFESSIONALISM,
            "Professional tone",
        ),
    ];
    collect_or_default(&rules, DEFAULT_STRENGTH)
}

/// Improvement lines, never empty
#[must_use]
pub fn areas_for_improvement(record: &MetricsRecord) -> Vec<String> {
    let c = record.components();
    let rules = [
        (c.clarity_score < improvements::CLARITY, "Improve response clarity"),
        (c.relevance_score < improvements::RELEVANCE, "Stay more focused on topic"),
        (c.empathy_score < improvements::EMPATHY, "Add more empathetic language"),
        (
            c.fallback_count > improvements::FALLBACK_COUNT,
            "Reduce \"I don't know\" responses",
        ),
        (c.escalation_needed, "Consider human handoff"),
    ];
    collect_or_default(&rules, DEFAULT_IMPROVEMENT)
}

fn collect_or_default(rules: &[(bool, &str)], default: &str) -> Vec<String> {
    let fired: Vec<String> = rules
        .iter()
        .filter(|(applies, _)| *applies)
        .map(|(_, line)| (*line).to_owned())
        .collect();
    if fired.is_empty() {
        vec![default.to_owned()]
    } else {
        fired
    }
}
