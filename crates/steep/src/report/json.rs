// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use serde_json::json;

use super::{ReportFormatter, RunReport};

/// JSON formatter: a summary object plus the full case list.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &RunReport) -> anyhow::Result<String> {
        let mut output = serde_json::Map::new();

        output.insert(
            "summary".to_string(),
            json!({
                "passed": report.passed(),
                "failed": report.failed(),
                "pending": report.pending(),
                "ok": report.ok(),
            }),
        );
        output.insert("cases".to_string(), serde_json::to_value(&report.cases)?);
        if !report.diagnostics.is_empty() {
            output.insert("diagnostics".to_string(), json!(report.diagnostics));
        }

        Ok(serde_json::to_string_pretty(&output)?)
    }
}
