// ABOUTME: Conversation scoring engine turning an ordered transcript into a metrics record
// ABOUTME: Stateless and thread-safe, batches score independent transcripts in parallel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Conversation analyzer
//!
//! ```rust,no_run
//! use analytics_core::models::{Message, Sender, Transcript};
//! use analytics_intelligence::ConversationAnalyzer;
//! use chrono::Utc;
//!
//! let now = Utc::now();
//! let transcript = Transcript::new(vec![
//!     Message::new(Sender::Human, "My invoice is wrong?", now, 1),
//!     Message::new(Sender::Agent, "Sorry about that, I have corrected your invoice.", now, 2),
//! ]);
//! let record = ConversationAnalyzer::new().analyze(&transcript);
//! println!("overall score {}", record.overall_score());
//! ```

use crate::config::intelligence::{IntelligenceConfig, Lexicon};
use crate::metrics;
use crate::text::TranscriptView;
use analytics_core::models::{MetricComponents, MetricsRecord, Transcript};
use rayon::prelude::*;
use tracing::debug;

/// Rule-based conversation scoring engine
#[derive(Debug, Clone, Copy)]
pub struct ConversationAnalyzer<'a> {
    lexicon: &'a Lexicon,
}

impl ConversationAnalyzer<'static> {
    /// Analyzer using the process-wide lexicon
    #[must_use]
    pub fn new() -> Self {
        Self {
            lexicon: &IntelligenceConfig::global().lexicon,
        }
    }
}

impl Default for ConversationAnalyzer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ConversationAnalyzer<'a> {
    /// Analyzer using a caller-supplied lexicon
    #[must_use]
    pub const fn with_lexicon(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Score one transcript
    ///
    /// Never fails: an empty transcript scores every metric at its default.
    #[must_use]
    pub fn analyze(&self, transcript: &Transcript) -> MetricsRecord {
        let view = TranscriptView::new(transcript);
        let lexicon = self.lexicon;

        let resolution = metrics::resolution(&view, lexicon);
        let sentiment = metrics::sentiment(&view, lexicon);

        let record = MetricsRecord::from_components(MetricComponents {
            clarity_score: metrics::clarity_score(&view),
            relevance_score: metrics::relevance_score(&view),
            accuracy_score: metrics::accuracy_score(&view, lexicon),
            completeness_score: metrics::completeness_score(&view),
            sentiment,
            empathy_score: metrics::empathy_score(&view, lexicon),
            avg_response_time: metrics::avg_response_time(&view),
            resolution,
            escalation_needed: metrics::escalation_from_signals(
                &view, lexicon, resolution, sentiment,
            ),
            fallback_count: metrics::fallback_count(&view, lexicon),
            coherence_score: metrics::coherence_score(&view),
            professionalism_score: metrics::professionalism_score(&view, lexicon),
        });

        debug!(
            messages = view.len(),
            overall_score = record.overall_score(),
            sentiment = %sentiment,
            escalation_needed = record.components().escalation_needed,
            "Analyzed transcript"
        );

        record
    }

    /// Score independent transcripts in parallel, preserving input order
    #[must_use]
    pub fn analyze_many(&self, transcripts: &[Transcript]) -> Vec<MetricsRecord> {
        transcripts
            .par_iter()
            .map(|transcript| self.analyze(transcript))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics_core::models::{Message, Sender, Sentiment};
    use chrono::{Duration, TimeZone, Utc};

    fn support_chat() -> Transcript {
        let start = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
        let turns = [
            (Sender::Human, "Hi, my password reset email never arrived?"),
            (
                Sender::Agent,
                "I understand how frustrating that is. Let me resend the password reset email now.",
            ),
            (Sender::Human, "Got it, thanks. That worked perfectly!"),
        ];
        Transcript::new(
            turns
                .iter()
                .enumerate()
                .map(|(i, (sender, text))| {
                    Message::new(*sender, *text, start + Duration::seconds(i as i64 * 2), i as u64 + 1)
                })
                .collect(),
        )
    }

    #[test]
    fn test_analyze_support_chat() {
        let lexicon = Lexicon::default();
        let record = ConversationAnalyzer::with_lexicon(&lexicon).analyze(&support_chat());
        let c = record.components();

        assert!(c.resolution);
        assert!(!c.escalation_needed);
        assert_eq!(c.sentiment, Sentiment::Positive);
        assert_eq!(c.fallback_count, 0);
        assert!((c.avg_response_time - 2.0).abs() < 1e-9);
        assert!((c.coherence_score - 1.0).abs() < 1e-9);
        assert!((c.relevance_score - 1.0).abs() < 1e-9);
        assert!(record.overall_score() > 7.0);
    }

    #[test]
    fn test_analyze_empty_transcript_uses_defaults() {
        let lexicon = Lexicon::default();
        let record = ConversationAnalyzer::with_lexicon(&lexicon).analyze(&Transcript::default());
        let c = record.components();

        assert!((c.clarity_score - 0.5).abs() < 1e-9);
        assert!((c.relevance_score - 0.7).abs() < 1e-9);
        assert!((c.completeness_score - 0.5).abs() < 1e-9);
        assert!((c.coherence_score - 0.7).abs() < 1e-9);
        assert!(!c.resolution);
        assert!(!c.escalation_needed);
        assert_eq!(c.sentiment, Sentiment::Neutral);
        assert!((record.overall_score() - 5.72).abs() < 1e-9);
    }

    #[test]
    fn test_analyze_many_preserves_order() {
        let lexicon = Lexicon::default();
        let analyzer = ConversationAnalyzer::with_lexicon(&lexicon);
        let transcripts = vec![support_chat(), Transcript::default(), support_chat()];

        let records = analyzer.analyze_many(&transcripts);

        assert_eq!(records.len(), 3);
        assert_eq!(records[0], analyzer.analyze(&transcripts[0]));
        assert_eq!(records[1], analyzer.analyze(&transcripts[1]));
        assert_eq!(records[0], records[2]);
    }

    #[test]
    fn test_custom_lexicon_changes_matching() {
        let lexicon = Lexicon::from_yaml_str("escalation:\n  - refund\n").unwrap();
        let start = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
        let transcript = Transcript::new(vec![Message::new(
            Sender::Human,
            "I want a refund",
            start,
            1,
        )]);

        let record = ConversationAnalyzer::with_lexicon(&lexicon).analyze(&transcript);
        assert!(record.components().escalation_needed);
    }
}
