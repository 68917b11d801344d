/// Rule configuration: thresholds, phrase patterns and impact coefficients.
///
/// Built-in defaults live in `RuleConfig::new()`. An external TOML document
/// may override any subset of fields; the merge is field-by-field, so a
/// partial document never loses the defaults for omitted fields. Pattern
/// strings are compiled exactly once at startup via `CompiledRules`.
use crate::error::RuleError;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Numeric thresholds consumed by the issue detectors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Thresholds {
    /// Word count above which PROMPT_TOO_LONG fires.
    pub max_prompt_words: usize,
    /// Sentence count above which TOO_MANY_SENTENCES fires.
    pub max_sentences: usize,
    /// Character length at which a word counts as "long".
    pub long_word_len: usize,
    /// Output-token cap assumed when the caller supplies none.
    pub default_output_tokens: u32,
}

/// Coefficients for the linear impact projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactCoefficients {
    /// Midpoint energy draw per 1000 tokens, in kWh.
    pub kwh_per_1k_tokens_mid: f64,
    /// Grid carbon intensity, kg CO2e per kWh.
    pub grid_kg_co2_per_kwh: f64,
    /// Data-center water use, litres per kWh.
    pub water_l_per_kwh: f64,
}

/// One ordered task-detection rule: first matching pattern wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRule {
    pub task: String,
    pub pattern: String,
}

/// Process-wide rule document, immutable after startup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleConfig {
    pub thresholds: Thresholds,
    pub impact: ImpactCoefficients,
    /// Vague-language phrase patterns (regex source strings).
    pub vague_patterns: Vec<String>,
    /// Forced-verbosity phrase patterns (regex source strings).
    pub verbose_patterns: Vec<String>,
    /// Ordered task-detection rules; declaration order breaks ties.
    pub task_rules: Vec<TaskRule>,
}

impl RuleConfig {
    /// Create a rule configuration with built-in default values.
    pub fn new() -> Self {
        Self {
            thresholds: Thresholds {
                max_prompt_words: 300,
                max_sentences: 12,
                long_word_len: 14,
                default_output_tokens: 256,
            },
            impact: ImpactCoefficients {
                kwh_per_1k_tokens_mid: 0.0005,
                grid_kg_co2_per_kwh: 0.4,
                water_l_per_kwh: 1.8,
            },
            vague_patterns: vec![
                r"(?i)\bany (ideas|thoughts|suggestions)\b".to_string(),
                r"(?i)\byour thoughts\b".to_string(),
                r"(?i)\bsomething (like|about|around)\b".to_string(),
                r"(?i)\bkind of\b".to_string(),
                r"(?i)\bwhatever (works|you think)\b".to_string(),
            ],
            verbose_patterns: vec![
                r"(?i)\bin as much detail as possible\b".to_string(),
                r"(?i)\bas (long|detailed|thorough) as possible\b".to_string(),
                r"(?i)\bwrite at least\b".to_string(),
                r"(?i)\bdon'?t leave anything out\b".to_string(),
                r"(?i)\bcover everything\b".to_string(),
            ],
            task_rules: vec![
                TaskRule {
                    task: "summarize".to_string(),
                    pattern: r"(?i)\b(summari[sz]e|tl;?dr|condense|recap)\b".to_string(),
                },
                TaskRule {
                    task: "extract".to_string(),
                    pattern: r"(?i)\b(extract|pull (out|the)|scrape|parse)\b".to_string(),
                },
                TaskRule {
                    task: "translate".to_string(),
                    pattern: r"(?i)\btranslat(e|ion|ing)\b".to_string(),
                },
                TaskRule {
                    task: "code".to_string(),
                    pattern: r"(?i)\b(code|function|script|implement|refactor|debug|regex|sql)\b"
                        .to_string(),
                },
                TaskRule {
                    task: "write".to_string(),
                    pattern: r"(?i)\b(write|draft|compose|essay|article|blog|email|letter)\b"
                        .to_string(),
                },
            ],
        }
    }

    /// Load defaults and merge a TOML override document over them.
    ///
    /// # Errors
    ///
    /// Returns `RuleError::ConfigLoadFailed` if the file cannot be read or
    /// parsed. Unknown fields are ignored; omitted fields keep defaults.
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, RuleError> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            RuleError::ConfigLoadFailed(format!(
                "Failed to read {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        let overlay: RuleOverlay =
            toml::from_str(&content).map_err(|e| RuleError::ConfigLoadFailed(e.to_string()))?;
        Ok(Self::new().merged(overlay))
    }

    /// Merge an overlay over this configuration, field by field.
    pub fn merged(mut self, overlay: RuleOverlay) -> Self {
        if let Some(t) = overlay.thresholds {
            if let Some(v) = t.max_prompt_words {
                self.thresholds.max_prompt_words = v;
            }
            if let Some(v) = t.max_sentences {
                self.thresholds.max_sentences = v;
            }
            if let Some(v) = t.long_word_len {
                self.thresholds.long_word_len = v;
            }
            if let Some(v) = t.default_output_tokens {
                self.thresholds.default_output_tokens = v;
            }
        }
        if let Some(i) = overlay.impact {
            if let Some(v) = i.kwh_per_1k_tokens_mid {
                self.impact.kwh_per_1k_tokens_mid = v;
            }
            if let Some(v) = i.grid_kg_co2_per_kwh {
                self.impact.grid_kg_co2_per_kwh = v;
            }
            if let Some(v) = i.water_l_per_kwh {
                self.impact.water_l_per_kwh = v;
            }
        }
        if let Some(v) = overlay.vague_patterns {
            self.vague_patterns = v;
        }
        if let Some(v) = overlay.verbose_patterns {
            self.verbose_patterns = v;
        }
        if let Some(v) = overlay.task_rules {
            self.task_rules = v;
        }
        self
    }
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Partial rule document as read from TOML; every field optional.
#[derive(Debug, Default, Deserialize)]
pub struct RuleOverlay {
    pub thresholds: Option<ThresholdOverlay>,
    pub impact: Option<ImpactOverlay>,
    pub vague_patterns: Option<Vec<String>>,
    pub verbose_patterns: Option<Vec<String>>,
    pub task_rules: Option<Vec<TaskRule>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ThresholdOverlay {
    pub max_prompt_words: Option<usize>,
    pub max_sentences: Option<usize>,
    pub long_word_len: Option<usize>,
    pub default_output_tokens: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ImpactOverlay {
    pub kwh_per_1k_tokens_mid: Option<f64>,
    pub grid_kg_co2_per_kwh: Option<f64>,
    pub water_l_per_kwh: Option<f64>,
}

/// Rule configuration with all pattern strings compiled to regexes.
///
/// Built once at startup and shared read-only; the analyzer never compiles
/// a pattern per call.
pub struct CompiledRules {
    pub config: RuleConfig,
    pub vague: Vec<Regex>,
    pub verbose: Vec<Regex>,
    pub tasks: Vec<(String, Regex)>,
}

impl CompiledRules {
    /// Compile every configured pattern.
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidPattern` for the first pattern that fails
    /// to compile.
    pub fn compile(config: RuleConfig) -> Result<Self, RuleError> {
        let vague = compile_list(&config.vague_patterns)?;
        let verbose = compile_list(&config.verbose_patterns)?;
        let mut tasks = Vec::with_capacity(config.task_rules.len());
        for rule in &config.task_rules {
            tasks.push((rule.task.clone(), compile_pattern(&rule.pattern)?));
        }
        Ok(Self {
            config,
            vague,
            verbose,
            tasks,
        })
    }

    /// Return the first task whose pattern matches, else "general".
    ///
    /// Ties resolve to declaration order, never to match length.
    pub fn detect_task(&self, text: &str) -> &str {
        for (task, pattern) in &self.tasks {
            if pattern.is_match(text) {
                return task;
            }
        }
        "general"
    }
}

fn compile_list(patterns: &[String]) -> Result<Vec<Regex>, RuleError> {
    patterns.iter().map(|p| compile_pattern(p)).collect()
}

fn compile_pattern(pattern: &str) -> Result<Regex, RuleError> {
    Regex::new(pattern).map_err(|e| RuleError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_compile() {
        let rules = CompiledRules::compile(RuleConfig::new());
        assert!(rules.is_ok());
    }

    #[test]
    fn test_detect_task_first_match_wins() {
        let rules = CompiledRules::compile(RuleConfig::new()).unwrap();
        // "summarize" and "write" both match; summarize is declared first.
        assert_eq!(rules.detect_task("Summarize and write a recap"), "summarize");
        assert_eq!(rules.detect_task("Write an essay about automation"), "write");
        assert_eq!(rules.detect_task("hello there"), "general");
    }

    #[test]
    fn test_merged_partial_overlay_keeps_defaults() {
        let overlay = RuleOverlay {
            thresholds: Some(ThresholdOverlay {
                max_prompt_words: Some(50),
                ..Default::default()
            }),
            ..Default::default()
        };
        let config = RuleConfig::new().merged(overlay);
        let defaults = RuleConfig::new();

        assert_eq!(config.thresholds.max_prompt_words, 50);
        assert_eq!(
            config.thresholds.max_sentences,
            defaults.thresholds.max_sentences
        );
        assert_eq!(config.vague_patterns, defaults.vague_patterns);
        assert_eq!(config.impact, defaults.impact);
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let mut config = RuleConfig::new();
        config.vague_patterns.push("(unclosed".to_string());
        let result = CompiledRules::compile(config);
        assert!(matches!(result, Err(RuleError::InvalidPattern { .. })));
    }

    #[test]
    fn test_from_file() {
        let mut temp = tempfile::NamedTempFile::new().expect("create temp file");
        let content = r#"
            [thresholds]
            max_prompt_words = 80

            [impact]
            grid_kg_co2_per_kwh = 0.2
        "#;
        use std::io::Write;
        temp.write_all(content.as_bytes()).expect("write rule file");

        let config = RuleConfig::from_file(temp.path()).expect("load rule config");
        assert_eq!(config.thresholds.max_prompt_words, 80);
        assert_eq!(config.impact.grid_kg_co2_per_kwh, 0.2);
        // Omitted fields keep defaults.
        assert_eq!(config.thresholds.long_word_len, 14);
        assert_eq!(config.impact.water_l_per_kwh, 1.8);
    }

    #[test]
    fn test_from_file_missing() {
        let result = RuleConfig::from_file("/nonexistent/rules.toml");
        assert!(matches!(result, Err(RuleError::ConfigLoadFailed(_))));
    }
}
