use super::{TemplateError, UnitName, UnitParams};

const DISALLOWED_TOKENS: [&str; 2] = ["{%", "{#"];

/// Names of the `{{ Name }}` placeholders in `template`, in order of first use.
pub fn placeholder_names(template: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for expr in expressions(template) {
        if is_identifier(expr) && !names.contains(&expr) {
            names.push(expr);
        }
    }
    names
}

/// Check that `template` only uses plain placeholders and that `params` covers all of them.
///
/// `{%` and `{#` are rejected wherever they appear, because the renderer opens a
/// block or comment at either marker. Unit text that needs them literally, such as
/// shell length expansion `${#VAR}`, cannot be expressed in a template; put it in a
/// script and call that from `ExecStart` instead.
pub fn validate_template(
    unit: &UnitName,
    template: &str,
    params: &UnitParams,
) -> Result<(), TemplateError> {
    if let Some(token) = DISALLOWED_TOKENS.iter().find(|token| template.contains(**token)) {
        return Err(TemplateError::SyntaxNotAllowed {
            unit: unit.to_string(),
            token: (*token).to_string(),
        });
    }

    for expr in expressions(template) {
        if !is_identifier(expr) {
            return Err(TemplateError::SyntaxNotAllowed {
                unit: unit.to_string(),
                token: format!("{{{{{expr}}}}}"),
            });
        }
        if !params.contains_key(expr) {
            return Err(TemplateError::MissingParameter {
                unit: unit.to_string(),
                key: expr.to_string(),
            });
        }
    }

    Ok(())
}

/// Trimmed contents of every closed `{{ ... }}` pair.
fn expressions(template: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find("{{") {
        let after = &rest[open + 2..];
        let Some(close) = after.find("}}") else {
            break;
        };
        found.push(after[..close].trim());
        rest = &after[close + 2..];
    }
    found
}

fn is_identifier(expr: &str) -> bool {
    let mut chars = expr.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
