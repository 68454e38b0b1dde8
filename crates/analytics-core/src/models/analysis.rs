// ABOUTME: Metrics record produced by the scoring engine and its weighted aggregation
// ABOUTME: Overall score is always derived from the component metrics, never set directly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Conversation metrics record
//!
//! [`MetricsRecord`] keeps its overall score private. Building a record (or
//! deserializing a persisted one) recomputes the score from the twelve
//! component metrics, so a stored record can never disagree with its inputs.

use crate::constants::insights::tiers;
use crate::constants::scoring::aggregation::{
    ACCURACY_WEIGHT, ATTENTION_THRESHOLD, CLARITY_WEIGHT, COHERENCE_WEIGHT, COMPLETENESS_WEIGHT,
    EMPATHY_WEIGHT, ESCALATION_PENALTY, FALLBACK_PENALTY, FALLBACK_PENALTY_THRESHOLD,
    MAX_OVERALL_SCORE, PROFESSIONALISM_WEIGHT, RELEVANCE_WEIGHT, RESOLUTION_BONUS, SCORE_SCALE,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall sentiment of the human side of a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// Positive language dominates
    Positive,
    /// No sentiment-bearing language
    #[default]
    Neutral,
    /// Negative language dominates
    Negative,
    /// Both polarities present, neither dominant
    Mixed,
}

impl Sentiment {
    /// Wire name of the sentiment
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
            Self::Mixed => "mixed",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Human-readable quality bucket of an overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualityTier {
    /// Overall score of 8 or more
    Excellent,
    /// Overall score of 6 or more
    Good,
    /// Overall score of 4 or more
    Fair,
    /// Overall score below 4
    Poor,
}

impl QualityTier {
    /// Bucket an overall score
    #[must_use]
    pub fn from_score(overall_score: f64) -> Self {
        if overall_score >= tiers::EXCELLENT {
            Self::Excellent
        } else if overall_score >= tiers::GOOD {
            Self::Good
        } else if overall_score >= tiers::FAIR {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The twelve independently computed metrics of a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricComponents {
    /// Clarity of agent messages, in [0, 1]
    pub clarity_score: f64,
    /// Word overlap between human questions and agent replies, in [0, 1]
    pub relevance_score: f64,
    /// Confidence of agent language, in [0, 1]
    pub accuracy_score: f64,
    /// Answer length relative to questions asked, in [0, 1]
    pub completeness_score: f64,
    /// Sentiment of human messages
    pub sentiment: Sentiment,
    /// Empathetic phrasing by the agent, in [0.3, 1] once the agent spoke
    pub empathy_score: f64,
    /// Mean human-to-agent latency in seconds
    pub avg_response_time: f64,
    /// Whether the last human message closed the issue
    pub resolution: bool,
    /// Whether a human should take over
    pub escalation_needed: bool,
    /// Number of fallback phrases used by the agent
    pub fallback_count: u32,
    /// Turn-taking regularity, in [0, 1]
    pub coherence_score: f64,
    /// Professional tone of agent messages, in [0, 1]
    pub professionalism_score: f64,
}

impl MetricComponents {
    /// Weighted aggregate on a 0-10 scale, rounded to two decimals
    #[must_use]
    pub fn overall_score(&self) -> f64 {
        let mut total = self.clarity_score * CLARITY_WEIGHT
            + self.relevance_score * RELEVANCE_WEIGHT
            + self.accuracy_score * ACCURACY_WEIGHT
            + self.completeness_score * COMPLETENESS_WEIGHT
            + self.empathy_score * EMPATHY_WEIGHT
            + self.coherence_score * COHERENCE_WEIGHT
            + self.professionalism_score * PROFESSIONALISM_WEIGHT;

        if self.resolution {
            total += RESOLUTION_BONUS;
        }
        if self.escalation_needed {
            total -= ESCALATION_PENALTY;
        }
        if self.fallback_count > FALLBACK_PENALTY_THRESHOLD {
            total -= FALLBACK_PENALTY;
        }

        round_to_hundredths((total * SCORE_SCALE).clamp(0.0, MAX_OVERALL_SCORE))
    }
}

/// Round to two decimal places
///
/// Rounds the exact binary value, so `5.725` (stored just below the tie)
/// becomes `5.72`. Scaling by 100 first would round it up.
#[must_use]
pub fn round_to_hundredths(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Sole output of the scoring engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "MetricComponents")]
pub struct MetricsRecord {
    #[serde(flatten)]
    components: MetricComponents,
    overall_score: f64,
}

impl MetricsRecord {
    /// Build a record, deriving the overall score
    #[must_use]
    pub fn from_components(components: MetricComponents) -> Self {
        let overall_score = components.overall_score();
        Self {
            components,
            overall_score,
        }
    }

    /// Component metrics
    #[must_use]
    pub const fn components(&self) -> &MetricComponents {
        &self.components
    }

    /// Weighted overall score in [0, 10]
    #[must_use]
    pub const fn overall_score(&self) -> f64 {
        self.overall_score
    }

    /// Mean of clarity, relevance, accuracy and completeness
    #[must_use]
    pub fn quality_average(&self) -> f64 {
        let c = &self.components;
        (c.clarity_score + c.relevance_score + c.accuracy_score + c.completeness_score) / 4.0
    }

    /// Low overall score or escalation requested
    #[must_use]
    pub fn needs_attention(&self) -> bool {
        self.overall_score < ATTENTION_THRESHOLD || self.components.escalation_needed
    }

    /// Quality bucket of the overall score
    #[must_use]
    pub fn quality_tier(&self) -> QualityTier {
        QualityTier::from_score(self.overall_score)
    }
}

impl From<MetricComponents> for MetricsRecord {
    fn from(components: MetricComponents) -> Self {
        Self::from_components(components)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn components() -> MetricComponents {
        MetricComponents {
            clarity_score: 0.8,
            relevance_score: 0.7,
            accuracy_score: 0.75,
            completeness_score: 0.65,
            sentiment: Sentiment::Neutral,
            empathy_score: 0.3,
            avg_response_time: 3.5,
            resolution: false,
            escalation_needed: false,
            fallback_count: 0,
            coherence_score: 1.0,
            professionalism_score: 0.86,
        }
    }

    #[test]
    fn test_overall_score_weighted_sum() {
        // 0.15 * (0.8 + 0.7 + 0.75 + 0.65) + 0.10 * (0.3 + 1.0 + 0.86) = 0.651
        let record = MetricsRecord::from_components(components());
        assert!((record.overall_score() - 6.51).abs() < 1e-9);
    }

    #[test]
    fn test_adjustments_apply_before_scaling() {
        let mut c = components();
        c.resolution = true;
        let resolved = MetricsRecord::from_components(c.clone()).overall_score();

        c.resolution = false;
        c.fallback_count = 3;
        let penalized = MetricsRecord::from_components(c).overall_score();

        assert!((resolved - 7.01).abs() < 1e-9);
        assert!((penalized - 6.01).abs() < 1e-9);
    }

    #[test]
    fn test_overall_score_clamped_at_zero() {
        let c = MetricComponents {
            clarity_score: 0.0,
            relevance_score: 0.0,
            accuracy_score: 0.0,
            completeness_score: 0.0,
            sentiment: Sentiment::Negative,
            empathy_score: 0.0,
            avg_response_time: 0.0,
            resolution: false,
            escalation_needed: true,
            fallback_count: 10,
            coherence_score: 0.0,
            professionalism_score: 0.0,
        };
        assert!(MetricsRecord::from_components(c).overall_score().abs() < f64::EPSILON);
    }

    #[test]
    fn test_round_to_hundredths_uses_stored_value() {
        assert!((round_to_hundredths(5.725) - 5.72).abs() < 1e-9);
        assert!((round_to_hundredths(6.516) - 6.52).abs() < 1e-9);
        assert!((round_to_hundredths(33.333_333) - 33.33).abs() < 1e-9);
        assert!(round_to_hundredths(0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_default_components_score_below_tie() {
        // 0.15 * (0.5 + 0.7 + 0.75 + 0.5) + 0.10 * (0.5 + 0.7 + 0.85) = 0.5725
        let c = MetricComponents {
            clarity_score: 0.5,
            relevance_score: 0.7,
            accuracy_score: 0.75,
            completeness_score: 0.5,
            sentiment: Sentiment::Neutral,
            empathy_score: 0.5,
            avg_response_time: 3.5,
            resolution: false,
            escalation_needed: false,
            fallback_count: 0,
            coherence_score: 0.7,
            professionalism_score: 0.85,
        };
        assert!((MetricsRecord::from_components(c).overall_score() - 5.72).abs() < 1e-9);
    }

    #[test]
    fn test_deserialize_recomputes_overall_score() {
        let mut value = serde_json::to_value(MetricsRecord::from_components(components())).unwrap();
        value["overall_score"] = serde_json::json!(9.99);
        let record: MetricsRecord = serde_json::from_value(value).unwrap();
        assert!((record.overall_score() - 6.51).abs() < 1e-9);
    }

    #[test]
    fn test_derived_fields() {
        let record = MetricsRecord::from_components(components());
        assert!((record.quality_average() - 0.725).abs() < 1e-9);
        assert!(!record.needs_attention());
        assert_eq!(record.quality_tier(), QualityTier::Good);

        let mut c = components();
        c.escalation_needed = true;
        assert!(MetricsRecord::from_components(c).needs_attention());
    }

    #[test]
    fn test_quality_tier_boundaries() {
        assert_eq!(QualityTier::from_score(8.0), QualityTier::Excellent);
        assert_eq!(QualityTier::from_score(7.99), QualityTier::Good);
        assert_eq!(QualityTier::from_score(6.0), QualityTier::Good);
        assert_eq!(QualityTier::from_score(4.0), QualityTier::Fair);
        assert_eq!(QualityTier::from_score(3.99), QualityTier::Poor);
    }
}
