/// The analyzer entry point: one prompt in, one report out.
use crate::analyzers::autofix;
use crate::analyzers::detectors::{run_detectors, DetectorContext};
use crate::analyzers::impact;
use crate::analyzers::rewrite;
use crate::analyzers::scoring;
use crate::analyzers::types::{AnalysisParams, AnalysisReport, ReportMetrics};
use crate::metrics::TextMetrics;
use crate::rules::CompiledRules;

/// Rule-based prompt analyzer.
///
/// A pure function of `(text, params, rules)`: identical inputs always
/// produce an identical report, and no input can make it fail. Holds only
/// the compiled rule set, so one instance may be shared across any number
/// of concurrent callers.
pub struct PromptAnalyzer {
    rules: CompiledRules,
}

impl PromptAnalyzer {
    /// Create an analyzer over a compiled rule set.
    pub fn new(rules: CompiledRules) -> Self {
        Self { rules }
    }

    /// Analyzer over the built-in default rules.
    #[allow(dead_code)] // Convenience constructor for tests and embedders
    pub fn with_defaults() -> Self {
        let rules = CompiledRules::compile(crate::rules::RuleConfig::new())
            .expect("built-in default patterns compile");
        Self::new(rules)
    }

    /// Analyze a prompt and assemble the full report.
    pub fn analyze(&self, text: &str, params: &AnalysisParams) -> AnalysisReport {
        let thresholds = &self.rules.config.thresholds;
        let metrics = TextMetrics::compute(text, thresholds.long_word_len);
        let task = self.rules.detect_task(text).to_string();

        let ctx = DetectorContext {
            text,
            metrics: &metrics,
            params,
            task: &task,
            rules: &self.rules,
        };
        let (issues, tips) = run_detectors(&ctx);

        let score = scoring::score(&issues);
        let output_cap = params
            .max_output_tokens
            .unwrap_or(thresholds.default_output_tokens);
        let impact_estimate =
            impact::estimate(metrics.token_estimate, output_cap, &self.rules.config.impact);
        let autofixes = autofix::generate(text, params, &task);

        AnalysisReport {
            score,
            grade: scoring::grade(score),
            retry_risk: scoring::retry_risk(&issues),
            metrics: ReportMetrics {
                text: metrics,
                task: task.clone(),
                max_output_tokens: params.max_output_tokens,
                temperature: params.temperature,
            },
            issues,
            tips,
            autofixes,
            impact_estimate,
            suggested_prompt: rewrite::suggested_rewrite(&task),
        }
    }
}
