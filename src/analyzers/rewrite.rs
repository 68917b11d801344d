/// Canned rewrite templates, looked up by detected task.
///
/// Purely presentational; one static template per known task plus a
/// generic fallback.

/// Return the suggested rewrite template for a task.
pub fn suggested_rewrite(task: &str) -> String {
    match task {
        "summarize" => {
            "Summarize the text below in at most 5 bullet points of 20 words each. \
             Audience: a busy colleague. Text: <paste text here>"
        }
        "extract" => {
            "Extract the following fields from the text below and return them as JSON \
             with keys <field1>, <field2>. Return null for missing fields. \
             Text: <paste text here>"
        }
        "translate" => {
            "Translate the text below into <target language>. Preserve tone and \
             formatting; do not add commentary. Text: <paste text here>"
        }
        "code" => {
            "Write a <language> function named <name> that <does one specific thing>. \
             Include a short docstring and one usage example; no explanation outside \
             the code block."
        }
        _ => {
            "State the task in one sentence, list any constraints (length, format, \
             audience), and end with the exact output shape you expect."
        }
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tasks_have_distinct_templates() {
        let tasks = ["summarize", "extract", "translate", "code"];
        let templates: Vec<String> = tasks.iter().map(|t| suggested_rewrite(t)).collect();
        for (i, a) in templates.iter().enumerate() {
            for b in templates.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_unknown_task_falls_back_to_generic() {
        assert_eq!(suggested_rewrite("general"), suggested_rewrite("write"));
    }
}
