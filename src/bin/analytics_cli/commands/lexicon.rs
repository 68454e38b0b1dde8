// ABOUTME: Lexicon command printing the phrase lists the engine scores with
// ABOUTME: Reflects ANALYTICS_LEXICON_FILE overrides when set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display::print_json;
use anyhow::Result;
use conversation_analytics::config::IntelligenceConfig;

/// Print the active lexicon
pub fn run() -> Result<()> {
    print_json(&IntelligenceConfig::global().lexicon)
}
