// ABOUTME: Insight thresholds for quality tiers, strengths and improvement areas
// ABOUTME: Published contract consumed by reports and dashboards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Overall score tier boundaries (inclusive lower bounds)
pub mod tiers {
    /// Excellent tier lower bound
    pub const EXCELLENT: f64 = 8.0;
    /// Good tier lower bound
    pub const GOOD: f64 = 6.0;
    /// Fair tier lower bound
    pub const FAIR: f64 = 4.0;
}

/// Thresholds that turn a metric into a strength
pub mod strengths {
    /// Minimum clarity for "Clear communication"
    pub const CLARITY: f64 = 0.8;
    /// Minimum empathy for "Empathetic responses"
    pub const EMPATHY: f64 = 0.7;
    /// Minimum professionalism for "Professional tone"
    pub const PROFESSIONALISM: f64 = 0.8;
}

/// Thresholds below which a metric needs improvement
pub mod improvements {
    /// Clarity below this needs improvement
    pub const CLARITY: f64 = 0.6;
    /// Relevance below this needs improvement
    pub const RELEVANCE: f64 = 0.6;
    /// Empathy below this needs improvement
    pub const EMPATHY: f64 = 0.5;
    /// Fallback counts above this need improvement
    pub const FALLBACK_COUNT: u32 = 2;
}
