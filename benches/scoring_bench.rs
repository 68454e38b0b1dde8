// ABOUTME: Criterion benchmarks for the conversation scoring engine
// ABOUTME: Measures single-transcript analysis and parallel batch scoring throughput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the scoring engine.
//!
//! Measures per-transcript analysis cost as conversations grow, and batch
//! throughput of `analyze_many`.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Duration, TimeZone, Utc};
use conversation_analytics::models::{Message, Sender, Transcript};
use conversation_analytics::{ConversationAnalyzer, Lexicon};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const HUMAN_LINES: [&str; 4] = [
    "My order has not arrived and the tracking page shows nothing?",
    "I am getting frustrated, this is the third time I ask",
    "Could you check whether the billing address is correct?",
    "Thanks, that fixed it!",
];

const AGENT_LINES: [&str; 4] = [
    "I understand, sorry about the delay. Let me check the tracking details for your order.",
    "I'm not sure yet, maybe the carrier has not scanned the parcel.",
    "Certainly, the billing address on your account matches the invoice.",
    "Glad to help you. Is there anything else I can do?",
];

/// Alternating transcript with `turns` messages
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn generate_transcript(turns: usize) -> Transcript {
    let start = Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).single().unwrap_or_default();
    Transcript::new(
        (0..turns)
            .map(|i| {
                let (sender, text) = if i % 2 == 0 {
                    (Sender::Human, HUMAN_LINES[(i / 2) % HUMAN_LINES.len()])
                } else {
                    (Sender::Agent, AGENT_LINES[(i / 2) % AGENT_LINES.len()])
                };
                Message::new(
                    sender,
                    text,
                    start + Duration::seconds(i as i64 * 3),
                    i as u64 + 1,
                )
            })
            .collect(),
    )
}

fn bench_analyze(c: &mut Criterion) {
    let lexicon = Lexicon::default();
    let analyzer = ConversationAnalyzer::with_lexicon(&lexicon);
    let mut group = c.benchmark_group("analyze");

    for turns in [4, 20, 100] {
        let transcript = generate_transcript(turns);
        group.throughput(Throughput::Elements(turns as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(turns),
            &transcript,
            |b, transcript| b.iter(|| analyzer.analyze(black_box(transcript))),
        );
    }

    group.finish();
}

fn bench_analyze_many(c: &mut Criterion) {
    let lexicon = Lexicon::default();
    let analyzer = ConversationAnalyzer::with_lexicon(&lexicon);
    let mut group = c.benchmark_group("analyze_many");

    for count in [10, 100] {
        let transcripts: Vec<Transcript> = (0..count)
            .map(|i| generate_transcript(4 + i % 16))
            .collect();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &transcripts,
            |b, transcripts| b.iter(|| analyzer.analyze_many(black_box(transcripts))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_analyze, bench_analyze_many);
criterion_main!(benches);
