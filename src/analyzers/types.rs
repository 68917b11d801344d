/// Data structures for prompt sustainability analysis.
use crate::metrics::TextMetrics;
use serde::Serialize;

/// Optional caller-supplied generation parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnalysisParams {
    /// Requested output-token cap, if any.
    pub max_output_tokens: Option<u32>,
    /// Requested sampling temperature, if any.
    pub temperature: Option<f64>,
}

/// Severity of a heuristic finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Med,
    High,
}

impl Severity {
    /// Penalty weight applied by the scorer.
    pub fn weight(self) -> u32 {
        match self {
            Severity::Low => 5,
            Severity::Med => 11,
            Severity::High => 22,
        }
    }
}

/// Fixed catalog of issue identifiers; no two detectors share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueId {
    PromptTooLong,
    TooManySentences,
    VagueLanguage,
    ForcedVerbosity,
    Readability,
    MissingSchema,
    NoMaxTokens,
    MissingFormat,
    Redundancy,
    HighTempDeterministic,
}

/// A named, severity-tagged heuristic finding about the prompt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    pub id: IssueId,
    pub severity: Severity,
    pub message: String,
}

/// Identifier of a machine-applicable parameter suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AutofixId {
    SetMaxTokens,
    LowerTemp,
    AddFormatHint,
}

/// A machine-applicable parameter change suggestion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Autofix {
    pub id: AutofixId,
    pub payload: serde_json::Value,
}

/// Projected energy/carbon/water cost, all non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactEstimate {
    pub energy_kwh: f64,
    pub co2e_kg: f64,
    pub water_liters: f64,
}

/// Letter grade derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
}

/// Text metrics plus the echoed request parameters and detected task.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetrics {
    #[serde(flatten)]
    pub text: TextMetrics,
    pub task: String,
    pub max_output_tokens: Option<u32>,
    pub temperature: Option<f64>,
}

/// The aggregate analysis result, constructed fresh per call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Overall prompt quality score in 0..=100.
    pub score: u32,
    pub grade: Grade,
    /// Heuristic probability of a follow-up/retry, in [0, 1].
    pub retry_risk: f64,
    pub metrics: ReportMetrics,
    /// Findings in detector-declaration order.
    pub issues: Vec<Issue>,
    pub tips: Vec<String>,
    pub autofixes: Vec<Autofix>,
    pub impact_estimate: ImpactEstimate,
    pub suggested_prompt: String,
}
