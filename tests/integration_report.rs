/// Integration tests for the full analyzer report.
use greenprompt::analyzers::types::{AnalysisParams, Grade, IssueId, Severity};
use greenprompt::analyzers::PromptAnalyzer;
use greenprompt::output::ReportFormatter;
use greenprompt::rules::{CompiledRules, RuleConfig};
use std::fs;
use tempfile::TempDir;

fn analyzer() -> PromptAnalyzer {
    PromptAnalyzer::with_defaults()
}

fn issue_ids(report: &greenprompt::analyzers::types::AnalysisReport) -> Vec<IssueId> {
    report.issues.iter().map(|i| i.id).collect()
}

#[test]
fn test_reports_are_byte_identical_across_calls() {
    let analyzer = analyzer();
    let params = AnalysisParams {
        max_output_tokens: None,
        temperature: Some(0.9),
    };
    let text = "Summarize the attached notes and really make it better, any ideas?";

    let first = ReportFormatter::format_json(&analyzer.analyze(text, &params)).unwrap();
    let second = ReportFormatter::format_json(&analyzer.analyze(text, &params)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_prompt_report() {
    let report = analyzer().analyze("", &AnalysisParams::default());

    assert_eq!(report.metrics.text.word_count, 0);
    assert_eq!(report.metrics.text.sentence_count, 0);
    assert_eq!(report.metrics.text.token_estimate, 0);
    assert_eq!(issue_ids(&report), vec![IssueId::NoMaxTokens]);
    assert_eq!(report.metrics.task, "general");
}

#[test]
fn test_scenario_write_without_parameters() {
    let report = analyzer().analyze("Write an essay about automation", &AnalysisParams::default());

    assert_eq!(report.metrics.task, "write");
    assert_eq!(
        issue_ids(&report),
        vec![IssueId::NoMaxTokens, IssueId::MissingFormat]
    );
    assert_eq!(report.score, 67);
    assert_eq!(report.grade, Grade::C);
}

#[test]
fn test_scenario_vague_prompt_with_cap() {
    let params = AnalysisParams {
        max_output_tokens: Some(200),
        temperature: None,
    };
    let report = analyzer().analyze("improve this, make it better, any ideas?", &params);

    let vague = report
        .issues
        .iter()
        .find(|i| i.id == IssueId::VagueLanguage)
        .expect("vague issue fires");
    assert_eq!(vague.severity, Severity::High);
    assert!(!issue_ids(&report).contains(&IssueId::NoMaxTokens));
    assert!(report.retry_risk >= 0.35);
}

#[test]
fn test_scenario_extract_with_schema() {
    let report = analyzer().analyze("Extract JSON with keys: title, date", &AnalysisParams::default());

    assert_eq!(report.metrics.task, "extract");
    assert!(!issue_ids(&report).contains(&IssueId::MissingSchema));
    assert!(!issue_ids(&report).contains(&IssueId::MissingFormat));
}

#[test]
fn test_score_stays_within_documented_bounds() {
    let analyzer = analyzer();
    let prompts = vec![
        String::new(),
        "improve this, make it better, any ideas? cover everything in 500 words".to_string(),
        "Extract the totals. ".repeat(60),
        "Write write write. ".repeat(200),
    ];

    for text in &prompts {
        let report = analyzer.analyze(text, &AnalysisParams::default());
        assert!(report.score >= 30, "score {} for {:?}", report.score, text);
        assert!(report.score <= 100);
        assert!((0.0..=1.0).contains(&report.retry_risk));
    }
}

#[test]
fn test_impact_doubles_with_output_cap() {
    let analyzer = analyzer();
    let small = analyzer
        .analyze(
            "",
            &AnalysisParams {
                max_output_tokens: Some(10_000),
                temperature: None,
            },
        )
        .impact_estimate;
    let large = analyzer
        .analyze(
            "",
            &AnalysisParams {
                max_output_tokens: Some(20_000),
                temperature: None,
            },
        )
        .impact_estimate;

    assert_eq!(large.energy_kwh, small.energy_kwh * 2.0);
    assert_eq!(large.co2e_kg, small.co2e_kg * 2.0);
    assert_eq!(large.water_liters, small.water_liters * 2.0);
}

#[test]
fn test_rule_file_override_changes_one_threshold_only() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rules.toml");
    fs::write(
        &path,
        r#"
            [thresholds]
            max_prompt_words = 4
        "#,
    )
    .unwrap();

    let config = RuleConfig::from_file(&path).unwrap();
    let analyzer = PromptAnalyzer::new(CompiledRules::compile(config).unwrap());

    // Five words now exceed the lowered limit.
    let report = analyzer.analyze("Write an essay about automation", &AnalysisParams::default());
    assert!(issue_ids(&report).contains(&IssueId::PromptTooLong));

    // Everything not overridden still behaves as with defaults.
    assert!(issue_ids(&report).contains(&IssueId::MissingFormat));
    assert_eq!(report.metrics.task, "write");
}

#[test]
fn test_autofixes_for_unparameterized_prompt() {
    let report = analyzer().analyze("Tell me about composting", &AnalysisParams::default());

    let fix_ids: Vec<_> = report.autofixes.iter().map(|f| f.id).collect();
    assert!(fix_ids.contains(&greenprompt::analyzers::types::AutofixId::SetMaxTokens));
    assert!(fix_ids.contains(&greenprompt::analyzers::types::AutofixId::AddFormatHint));
}

#[test]
fn test_suggested_prompt_follows_detected_task() {
    let analyzer = analyzer();
    let summarize = analyzer.analyze("Summarize this memo", &AnalysisParams::default());
    let code = analyzer.analyze("Debug this function", &AnalysisParams::default());

    assert!(summarize.suggested_prompt.starts_with("Summarize"));
    assert_ne!(summarize.suggested_prompt, code.suggested_prompt);
}
