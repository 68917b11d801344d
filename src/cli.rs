/// CLI argument parsing and command execution.
use crate::analyzers::types::AnalysisParams;
use crate::analyzers::PromptAnalyzer;
use crate::error::AppError;
use crate::output::ReportFormatter;
use crate::rules::{CompiledRules, RuleConfig};
use clap::{Parser, ValueEnum};
use std::io::{self, Read};

/// Greenprompt - Score LLM prompts for clarity and sustainability.
#[derive(Parser, Debug)]
#[command(name = "greenprompt")]
#[command(about = "Score LLM prompts for clarity, cost and estimated energy impact")]
#[command(
    long_about = r#"Greenprompt - Rule-based sustainability analyzer for LLM prompts

Runs a fixed pipeline of heuristic detectors over a prompt, aggregates the
findings into a score and grade, and projects an approximate energy/carbon/
water impact from a token-count proxy.

EXAMPLES:
  # Analyze a prompt file
  greenprompt prompt.txt

  # Analyze text from stdin, JSON output
  echo "Write an essay about automation" | greenprompt - --format json

  # Declare the intended output cap and temperature
  greenprompt prompt.txt --max-tokens 200 --temperature 0.3

  # Override rule thresholds from a TOML file
  greenprompt prompt.txt --rules rules.toml"#
)]
#[command(version)]
pub struct Cli {
    /// Input file path (use '-' or omit for stdin)
    #[arg(value_name = "FILE")]
    pub input: Option<String>,

    /// Output-token cap the request will be sent with
    #[arg(short = 'm', long, value_name = "N")]
    pub max_tokens: Option<u32>,

    /// Sampling temperature the request will be sent with
    #[arg(short = 't', long, value_name = "TEMP")]
    pub temperature: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Path to a rule-override configuration (TOML)
    #[arg(long, value_name = "FILE")]
    pub rules: Option<String>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    /// Execute the analysis and print the report.
    pub fn run(self) -> Result<(), AppError> {
        let config = match &self.rules {
            Some(path) => RuleConfig::from_file(path)?,
            None => RuleConfig::new(),
        };
        let rules = CompiledRules::compile(config)?;
        let analyzer = PromptAnalyzer::new(rules);

        let input = Self::get_input(&self.input)?;
        let params = AnalysisParams {
            max_output_tokens: self.max_tokens,
            temperature: self.temperature,
        };
        let report = analyzer.analyze(&input, &params);

        match self.format {
            OutputFormat::Text => println!("{}", ReportFormatter::format_text(&report)),
            OutputFormat::Json => println!("{}", ReportFormatter::format_json(&report)?),
        }

        Ok(())
    }

    /// Read the prompt from a file, or stdin for '-'/no argument.
    fn get_input(input: &Option<String>) -> Result<String, AppError> {
        if let Some(input) = input {
            if input == "-" {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                Ok(buffer)
            } else {
                std::fs::read_to_string(input).map_err(|e| {
                    AppError::Io(std::io::Error::other(format!(
                        "Failed to read file '{}': {}",
                        input, e
                    )))
                })
            }
        } else {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
