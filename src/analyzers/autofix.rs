/// Machine-applicable parameter suggestions.
///
/// Generated independently of the issues list, but driven by the same
/// predicates. `ADD_FORMAT_HINT` deliberately uses a broader condition
/// than the MISSING_FORMAT/MISSING_SCHEMA issues: any prompt without a
/// format keyword gets one, regardless of task.
use crate::analyzers::detectors::{has_format_keyword, high_temp_for_task};
use crate::analyzers::types::{AnalysisParams, Autofix, AutofixId};
use serde_json::json;

/// Output cap suggested when the caller supplied none.
const SUGGESTED_MAX_TOKENS: u32 = 200;

/// Temperature suggested for deterministic tasks running hot.
const SUGGESTED_TEMPERATURE: f64 = 0.3;

/// Generate all applicable autofixes for a request.
pub fn generate(text: &str, params: &AnalysisParams, task: &str) -> Vec<Autofix> {
    let mut fixes = Vec::new();

    if params.max_output_tokens.is_none() {
        fixes.push(Autofix {
            id: AutofixId::SetMaxTokens,
            payload: json!({ "maxOutputTokens": SUGGESTED_MAX_TOKENS }),
        });
    }

    if high_temp_for_task(params, task) {
        fixes.push(Autofix {
            id: AutofixId::LowerTemp,
            payload: json!({ "temperature": SUGGESTED_TEMPERATURE }),
        });
    }

    if !has_format_keyword(text) {
        fixes.push(Autofix {
            id: AutofixId::AddFormatHint,
            payload: json!({ "append": "Answer as at most 5 concise bullet points." }),
        });
    }

    fixes
}
