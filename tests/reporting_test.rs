// ABOUTME: Integration tests for conversation reports, dashboard totals, and daily reports
// ABOUTME: Runs real analyses through the service before reading them back as reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{Duration, Utc};
use common::{conversation, init_test_logging, resolved_support_chat, seeded_repository};
use conversation_analytics::errors::ErrorCode;
use conversation_analytics::models::{QualityTier, Sender, Sentiment};
use conversation_analytics::services::{AnalysisService, ReportingService};

fn manager_request() -> Vec<(Sender, &'static str)> {
    vec![
        (Sender::Human, "I want to speak to a manager"),
        (
            Sender::Agent,
            "Certainly, I will connect you with a manager shortly.",
        ),
    ]
}

#[tokio::test]
async fn test_conversation_report_requires_analysis() {
    init_test_logging();
    let (repository, ids) =
        seeded_repository(vec![conversation("billing", &resolved_support_chat())]).await;
    let reporting = ReportingService::new(repository);

    let err = reporting.conversation_report(ids[0]).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert_eq!(err.message, "No analysis available. Please analyze first.");
}

#[tokio::test]
async fn test_conversation_report_contents() {
    init_test_logging();
    let (repository, ids) =
        seeded_repository(vec![conversation("billing", &resolved_support_chat())]).await;
    AnalysisService::new(repository.clone())
        .analyze_conversation(ids[0])
        .await
        .unwrap();

    let report = ReportingService::new(repository)
        .conversation_report(ids[0])
        .await
        .unwrap();

    assert_eq!(report.conversation.id, ids[0]);
    assert_eq!(report.conversation.title, "billing");
    assert_eq!(report.insights.total_messages, 3);
    assert_eq!(report.insights.user_messages, 2);
    assert_eq!(report.insights.ai_messages, 1);
    assert_eq!(
        report.insights.insights.conversation_quality,
        QualityTier::Excellent
    );
    assert!(report
        .insights
        .insights
        .key_strengths
        .contains(&"Issue resolved".to_owned()));
    assert!(!report.insights.insights.areas_for_improvement.is_empty());
    assert!(!report.analysis.needs_attention);

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["analysis"]["resolution"], serde_json::json!(true));
    assert_eq!(value["insights"]["conversation_quality"], "Excellent");
    assert_eq!(value["insights"]["user_messages"], 2);
}

#[tokio::test]
async fn test_dashboard_totals_and_rates() {
    init_test_logging();
    let (repository, ids) = seeded_repository(vec![
        conversation("resolved", &resolved_support_chat()),
        conversation("escalated", &manager_request()),
        conversation("untouched", &resolved_support_chat()),
    ])
    .await;
    let service = AnalysisService::new(repository.clone());
    service.analyze_conversation(ids[0]).await.unwrap();
    service.analyze_conversation(ids[1]).await.unwrap();

    let dashboard = ReportingService::new(repository).dashboard().await.unwrap();
    assert_eq!(dashboard.total_conversations, 3);
    assert_eq!(dashboard.analyzed_conversations, 2);
    assert_eq!(dashboard.pending_conversations, 1);
    assert!((dashboard.resolution_rate - 50.0).abs() < 1e-9);
    assert!((dashboard.escalation_rate - 50.0).abs() < 1e-9);
    assert_eq!(dashboard.sentiment_breakdown.get(Sentiment::Positive), 1);
    assert_eq!(dashboard.sentiment_breakdown.get(Sentiment::Neutral), 1);
    assert!(dashboard.avg_overall_score > 0.0);
}

#[tokio::test]
async fn test_dashboard_without_analyses_reports_zeroes() {
    init_test_logging();
    let (repository, _) =
        seeded_repository(vec![conversation("pending", &resolved_support_chat())]).await;

    let dashboard = ReportingService::new(repository).dashboard().await.unwrap();
    assert_eq!(dashboard.total_conversations, 1);
    assert_eq!(dashboard.analyzed_conversations, 0);
    assert_eq!(dashboard.pending_conversations, 1);
    assert!(dashboard.avg_overall_score.abs() < f64::EPSILON);
    assert!(dashboard.resolution_rate.abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_daily_report_covers_todays_analyses() {
    init_test_logging();
    let (repository, ids) = seeded_repository(vec![
        conversation("resolved", &resolved_support_chat()),
        conversation("escalated", &manager_request()),
    ])
    .await;
    let service = AnalysisService::new(repository.clone());
    for id in &ids {
        service.analyze_conversation(*id).await.unwrap();
    }

    let reporting = ReportingService::new(repository);
    let today = Utc::now().date_naive();
    let report = reporting.daily_report(today).await.unwrap();
    assert_eq!(report.date, today);
    assert_eq!(report.total_analyzed, 2);
    assert_eq!(report.escalations, 1);
    assert_eq!(report.resolutions, 1);
    assert!(report.avg_score.is_some());

    let last_week = reporting
        .daily_report(today - Duration::days(7))
        .await
        .unwrap();
    assert_eq!(last_week.total_analyzed, 0);
    assert!(last_week.avg_score.is_none());
}
