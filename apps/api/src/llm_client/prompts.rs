// Shared prompt fragments. Each feature that calls the model keeps its own
// templates next to it; this file only holds cross-cutting instructions.

/// Appended to every prompt whose reply is parsed as JSON.
pub const JSON_ONLY_INSTRUCTION: &str = "\
Respond with the JSON object ONLY. \
Do NOT include any text before or after the JSON object. \
Do NOT use markdown code fences. \
Do NOT include explanations or apologies.";

/// Fills `{name}` placeholders in one left-to-right pass. Substituted values
/// are never rescanned, so braces inside job or resume text stay literal.
/// Unknown `{...}` sequences (such as JSON examples) are copied unchanged.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (close, *value))
        });
        match value {
            Some((close, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
