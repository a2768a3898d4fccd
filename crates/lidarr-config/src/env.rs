use std::sync::OnceLock;

use regex::Regex;

/// Failure while expanding placeholders in raw config text
#[derive(Debug, thiserror::Error)]
pub enum ExpandError {
    /// A referenced environment variable is unset and has no default
    #[error("environment variable not found: `{0}`")]
    MissingVar(String),
    /// A placeholder that is not `{{ env.VAR }}` shaped
    #[error("unsupported placeholder: `{0}`")]
    UnsupportedPlaceholder(String),
}

/// Matches `{{ env.VAR }}` and `{{ env.VAR | default("fallback") }}`
fn env_placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*env\.([A-Za-z0-9_]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
            .expect("placeholder pattern must be valid")
    })
}

/// Matches anything `{{ ... }}` shaped, used to reject leftovers
fn any_placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{\{[^}]*\}\}").expect("placeholder pattern must be valid"))
}

/// Expand `{{ env.VAR }}` placeholders in raw config text
///
/// Expansion runs before TOML deserialization so config structs stay
/// plain `String`/`SecretString`. When the variable is unset, an optional
/// `| default("fallback")` takes over; without one the expansion fails.
/// Comment lines pass through untouched.
pub fn expand(input: &str) -> Result<String, ExpandError> {
    let mut output = String::with_capacity(input.len());

    for (i, line) in input.lines().enumerate() {
        if i > 0 {
            output.push('\n');
        }

        if line.trim_start().starts_with('#') {
            output.push_str(line);
            continue;
        }

        output.push_str(&expand_line(line)?);
    }

    // Preserve a trailing newline if present
    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}

fn expand_line(line: &str) -> Result<String, ExpandError> {
    // Reject placeholders the env pattern will not consume, before
    // substitution so expanded values are never re-scanned
    for found in any_placeholder().find_iter(line) {
        if !env_placeholder().is_match(found.as_str()) {
            return Err(ExpandError::UnsupportedPlaceholder(found.as_str().to_owned()));
        }
    }

    let mut expanded = String::with_capacity(line.len());
    let mut last_end = 0;

    for captures in env_placeholder().captures_iter(line) {
        let whole = captures.get(0).expect("group 0 is the whole match");
        let var_name = &captures[1];
        let default_value = captures.get(2).map(|m| m.as_str());

        expanded.push_str(&line[last_end..whole.start()]);

        match std::env::var(var_name) {
            Ok(value) => expanded.push_str(&value),
            Err(_) => match default_value {
                Some(default) => expanded.push_str(default),
                None => return Err(ExpandError::MissingVar(var_name.to_owned())),
            },
        }

        last_end = whole.end();
    }

    expanded.push_str(&line[last_end..]);

    Ok(expanded)
}
