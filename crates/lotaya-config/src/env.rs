use std::sync::OnceLock;

use regex::Regex;

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // `{{ env.VAR }}` with an optional `| default("fallback")` clause
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*env\.([A-Za-z0-9_]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
            .expect("must be valid regex")
    })
}

/// Expand `{{ env.VAR }}` placeholders in a raw TOML string
///
/// A placeholder without a `default("…")` clause errors when the
/// variable is unset. Placeholders on commented-out lines are left
/// untouched so example config lines never fail the load.
pub(crate) fn expand_env(raw: &str) -> Result<String, String> {
    let mut output = String::with_capacity(raw.len());
    let mut tail = 0;

    for captures in placeholder_re().captures_iter(raw) {
        let placeholder = captures.get(0).expect("capture 0 always present");

        let line_start = raw[..placeholder.start()].rfind('\n').map_or(0, |i| i + 1);
        if raw[line_start..placeholder.start()].trim_start().starts_with('#') {
            continue;
        }

        output.push_str(&raw[tail..placeholder.start()]);

        let var_name = captures.get(1).expect("variable name group").as_str();
        match std::env::var(var_name) {
            Ok(value) => output.push_str(&value),
            Err(_) => match captures.get(2) {
                Some(fallback) => output.push_str(fallback.as_str()),
                None => return Err(format!("environment variable not found: `{var_name}`")),
            },
        }

        tail = placeholder.end();
    }

    output.push_str(&raw[tail..]);
    Ok(output)
}
