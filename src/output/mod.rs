/// Formatter for analysis reports.
use crate::analyzers::types::{AnalysisReport, Grade, Severity};

/// Formatter for analysis reports.
pub struct ReportFormatter;

impl ReportFormatter {
    /// Format a report as human-readable text.
    pub fn format_text(report: &AnalysisReport) -> String {
        let mut output = Vec::new();

        output.push("Prompt Sustainability Report".to_string());
        output.push("=".repeat(50).to_string());
        output.push(String::new());

        output.push(format!(
            "Score: {}/100 (grade {})",
            report.score,
            grade_label(report.grade)
        ));
        output.push(format!("Retry Risk: {:.2}", report.retry_risk));
        output.push(String::new());

        // Metrics
        output.push("Metrics".to_string());
        output.push("-".repeat(50).to_string());
        output.push(format!("Task: {}", report.metrics.task));
        output.push(format!("Words: {}", report.metrics.text.word_count));
        output.push(format!("Sentences: {}", report.metrics.text.sentence_count));
        output.push(format!(
            "Estimated Tokens: {}",
            report.metrics.text.token_estimate
        ));
        output.push(format!(
            "Readability: {:.2}",
            report.metrics.text.readability_score
        ));
        output.push(String::new());

        // Issues
        if !report.issues.is_empty() {
            output.push(format!("Issues ({})", report.issues.len()));
            output.push("-".repeat(50).to_string());
            for issue in &report.issues {
                output.push(format!(
                    "[{}] {:?} - {}",
                    severity_label(issue.severity),
                    issue.id,
                    issue.message
                ));
            }
            output.push(String::new());
        }

        // Tips
        if !report.tips.is_empty() {
            output.push("Tips".to_string());
            output.push("-".repeat(50).to_string());
            for tip in &report.tips {
                output.push(format!("  - {}", tip));
            }
            output.push(String::new());
        }

        // Autofixes
        if !report.autofixes.is_empty() {
            output.push("Suggested Fixes".to_string());
            output.push("-".repeat(50).to_string());
            for fix in &report.autofixes {
                output.push(format!("{:?}: {}", fix.id, fix.payload));
            }
            output.push(String::new());
        }

        // Impact
        output.push("Estimated Impact (per invocation)".to_string());
        output.push("-".repeat(50).to_string());
        output.push(format!(
            "Energy: {:.4} kWh",
            report.impact_estimate.energy_kwh
        ));
        output.push(format!("CO2e: {:.4} kg", report.impact_estimate.co2e_kg));
        output.push(format!(
            "Water: {:.4} L",
            report.impact_estimate.water_liters
        ));
        output.push(String::new());

        output.push("Suggested Rewrite".to_string());
        output.push("-".repeat(50).to_string());
        output.push(report.suggested_prompt.clone());

        output.join("\n")
    }

    /// Format a report as pretty-printed JSON.
    pub fn format_json(report: &AnalysisReport) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(report)
    }
}

fn grade_label(grade: Grade) -> &'static str {
    match grade {
        Grade::A => "A",
        Grade::B => "B",
        Grade::C => "C",
        Grade::D => "D",
    }
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => "low",
        Severity::Med => "med",
        Severity::High => "high",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::types::AnalysisParams;
    use crate::analyzers::PromptAnalyzer;

    fn sample_report() -> AnalysisReport {
        PromptAnalyzer::with_defaults()
            .analyze("Write an essay about automation", &AnalysisParams::default())
    }

    #[test]
    fn test_format_text_sections() {
        let output = ReportFormatter::format_text(&sample_report());
        assert!(output.contains("Prompt Sustainability Report"));
        assert!(output.contains("Score: 67/100 (grade C)"));
        assert!(output.contains("Task: write"));
        assert!(output.contains("Estimated Impact"));
    }

    #[test]
    fn test_format_json_field_names() {
        let output = ReportFormatter::format_json(&sample_report()).unwrap();
        assert!(output.contains("\"retryRisk\""));
        assert!(output.contains("\"NO_MAX_TOKENS\""));
        assert!(output.contains("\"energyKwh\""));
        assert!(output.contains("\"suggestedPrompt\""));
    }
}
