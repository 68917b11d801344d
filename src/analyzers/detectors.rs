/// Heuristic issue detectors.
///
/// The catalog is a fixed, ordered list of independent detector functions.
/// Every detector runs on every request; each may contribute at most one
/// issue plus any number of tips, and the output preserves declaration
/// order. Nothing here short-circuits.
use crate::analyzers::types::{AnalysisParams, Issue, IssueId, Severity};
use crate::metrics::TextMetrics;
use crate::rules::CompiledRules;
use once_cell::sync::Lazy;
use regex::Regex;

/// Weak verbs and adverbs counted toward the vagueness hit total.
/// Whole-word, case-insensitive; each matching term contributes one hit.
static WEAK_TERM_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    let terms = [
        // Weak verbs
        r"\bimprove\b",
        r"\boptimi[sz]e\b",
        r"\benhance\b",
        r"\brefine\b",
        r"\bfix\b",
        r"\bmake (it |this |them )?better\b",
        r"\bhelp\b",
        r"\belaborate\b",
        // Weak adverbs
        r"\breally\b",
        r"\bvery\b",
        r"\bextremely\b",
        r"\bsignificantly\b",
        r"\bhighly\b",
    ];
    terms
        .iter()
        .map(|t| Regex::new(&format!("(?i){t}")).expect("weak term pattern"))
        .collect()
});

/// Explicit numeric length directives such as "120-word" or "150 words".
static WORD_COUNT_DIRECTIVE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b\d{2,4}[ -]words?\b").expect("word directive pattern"));

/// Output-shape keywords that satisfy format-related detectors.
static FORMAT_KEYWORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(json|csv|table|bullets?|outline|headings?)\b").expect("format pattern")
});

/// Tasks where high temperature works against the goal.
const DETERMINISTIC_TASKS: &[&str] = &["summarize", "extract", "translate", "code"];

/// Tasks that should always state an output format.
const FORMAT_SENSITIVE_TASKS: &[&str] = &["summarize", "write"];

/// Everything a detector is allowed to look at.
pub struct DetectorContext<'a> {
    pub text: &'a str,
    pub metrics: &'a TextMetrics,
    pub params: &'a AnalysisParams,
    pub task: &'a str,
    pub rules: &'a CompiledRules,
}

/// Result of one detector: at most one issue, any number of tips.
pub struct Detection {
    pub issue: Option<Issue>,
    pub tips: Vec<String>,
}

impl Detection {
    fn none() -> Self {
        Self {
            issue: None,
            tips: Vec::new(),
        }
    }

    fn issue(id: IssueId, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            issue: Some(Issue {
                id,
                severity,
                message: message.into(),
            }),
            tips: Vec::new(),
        }
    }

    fn with_tip(mut self, tip: impl Into<String>) -> Self {
        self.tips.push(tip.into());
        self
    }
}

type Detector = fn(&DetectorContext) -> Detection;

/// The detector catalog in evaluation order.
const CATALOG: &[Detector] = &[
    prompt_too_long,
    too_many_sentences,
    vague_language,
    forced_verbosity,
    readability,
    missing_schema,
    no_max_tokens,
    missing_format,
    redundancy,
    high_temp_deterministic,
];

/// Run every detector and concatenate results in declaration order.
pub fn run_detectors(ctx: &DetectorContext) -> (Vec<Issue>, Vec<String>) {
    let mut issues = Vec::new();
    let mut tips = Vec::new();
    for detector in CATALOG {
        let detection = detector(ctx);
        if let Some(issue) = detection.issue {
            issues.push(issue);
        }
        tips.extend(detection.tips);
    }
    (issues, tips)
}

/// True if the prompt names any output-shape keyword.
pub fn has_format_keyword(text: &str) -> bool {
    FORMAT_KEYWORD_RE.is_match(text)
}

/// Whole-word weak verb/adverb hits plus configured vague-phrase hits.
pub fn vagueness_hits(text: &str, rules: &CompiledRules) -> usize {
    let weak = WEAK_TERM_PATTERNS
        .iter()
        .filter(|re| re.is_match(text))
        .count();
    let phrases = rules.vague.iter().filter(|re| re.is_match(text)).count();
    weak + phrases
}

/// True under the HIGH_TEMP_DETERMINISTIC condition; also drives LOWER_TEMP.
pub fn high_temp_for_task(params: &AnalysisParams, task: &str) -> bool {
    params.temperature.is_some_and(|t| t > 0.7) && DETERMINISTIC_TASKS.contains(&task)
}

fn prompt_too_long(ctx: &DetectorContext) -> Detection {
    let limit = ctx.rules.config.thresholds.max_prompt_words;
    if ctx.metrics.word_count > limit {
        Detection::issue(
            IssueId::PromptTooLong,
            Severity::Med,
            format!(
                "Prompt has {} words; above {} the model starts paying for context it rarely uses.",
                ctx.metrics.word_count, limit
            ),
        )
        .with_tip("Move background material out of the prompt and keep only the ask itself.")
    } else {
        Detection::none()
    }
}

fn too_many_sentences(ctx: &DetectorContext) -> Detection {
    let limit = ctx.rules.config.thresholds.max_sentences;
    if ctx.metrics.sentence_count > limit {
        Detection::issue(
            IssueId::TooManySentences,
            Severity::Low,
            format!(
                "Prompt spans {} sentences (limit {}); multiple asks dilute each other.",
                ctx.metrics.sentence_count, limit
            ),
        )
    } else {
        Detection::none()
    }
}

fn vague_language(ctx: &DetectorContext) -> Detection {
    let phrase_hit = ctx.rules.vague.iter().any(|re| re.is_match(ctx.text));
    let hits = vagueness_hits(ctx.text, ctx.rules);

    if !phrase_hit && hits < 2 {
        return Detection::none();
    }

    let severity = if hits >= 3 {
        Severity::High
    } else {
        Severity::Med
    };
    Detection::issue(
        IssueId::VagueLanguage,
        severity,
        "Vague wording leaves the model guessing what a good answer looks like.",
    )
    .with_tip("Name the exact change you want instead of 'improve' or 'make it better'.")
}

fn forced_verbosity(ctx: &DetectorContext) -> Detection {
    let phrase_hit = ctx.rules.verbose.iter().any(|re| re.is_match(ctx.text));
    let directive_hit = WORD_COUNT_DIRECTIVE_RE.is_match(ctx.text);

    if phrase_hit || directive_hit {
        Detection::issue(
            IssueId::ForcedVerbosity,
            Severity::High,
            "The prompt demands length for its own sake, which inflates output tokens.",
        )
        .with_tip("Ask for the shortest answer that covers the point, not a word count.")
    } else {
        Detection::none()
    }
}

fn readability(ctx: &DetectorContext) -> Detection {
    if ctx.metrics.word_count >= 40
        && (ctx.metrics.readability_score < 40.0 || ctx.metrics.long_word_ratio > 0.12)
    {
        Detection::issue(
            IssueId::Readability,
            Severity::Low,
            "Dense phrasing and long words make the instruction harder to follow.",
        )
    } else {
        Detection::none()
    }
}

fn missing_schema(ctx: &DetectorContext) -> Detection {
    if ctx.task == "extract" && !has_format_keyword(ctx.text) {
        Detection::issue(
            IssueId::MissingSchema,
            Severity::Med,
            "Extraction without a target schema invites free-form output.",
        )
        .with_tip("List the exact fields to extract, e.g. JSON with named keys.")
    } else {
        Detection::none()
    }
}

fn no_max_tokens(ctx: &DetectorContext) -> Detection {
    if ctx.params.max_output_tokens.is_none() {
        Detection::issue(
            IssueId::NoMaxTokens,
            Severity::High,
            "No output cap set; an uncapped reply is the single largest cost driver.",
        )
        .with_tip("Set max_output_tokens so the reply cannot run long.")
    } else {
        Detection::none()
    }
}

fn missing_format(ctx: &DetectorContext) -> Detection {
    if !has_format_keyword(ctx.text) && FORMAT_SENSITIVE_TASKS.contains(&ctx.task) {
        Detection::issue(
            IssueId::MissingFormat,
            Severity::Med,
            "No output format specified for a task that needs one.",
        )
        .with_tip("Say how the answer should be shaped: bullets, a table, or JSON.")
    } else {
        Detection::none()
    }
}

fn redundancy(ctx: &DetectorContext) -> Detection {
    if ctx.metrics.repeated_bigram_count >= 1 {
        Detection::issue(
            IssueId::Redundancy,
            Severity::Low,
            "Repeated phrases suggest the prompt restates itself.",
        )
    } else {
        Detection::none()
    }
}

fn high_temp_deterministic(ctx: &DetectorContext) -> Detection {
    if high_temp_for_task(ctx.params, ctx.task) {
        Detection::issue(
            IssueId::HighTempDeterministic,
            Severity::Med,
            format!(
                "Temperature above 0.7 adds randomness a {} task does not want.",
                ctx.task
            ),
        )
    } else {
        Detection::none()
    }
}
