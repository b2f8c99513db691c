use crate::error::GatewayError;

pub(crate) const DEFAULT_SIZE: &str = "1024x1024";
pub(crate) const DEFAULT_COUNT: u32 = 1;
pub(crate) const DEFAULT_DURATION_SECS: u32 = 10;

/// Require a non-empty prompt, trimming surrounding whitespace
pub(crate) fn prompt(raw: &str) -> Result<&str, GatewayError> {
    non_empty(raw, "prompt")
}

/// Require a non-empty script, trimming surrounding whitespace
pub(crate) fn script(raw: &str) -> Result<&str, GatewayError> {
    non_empty(raw, "script")
}

fn non_empty<'a>(raw: &'a str, field: &str) -> Result<&'a str, GatewayError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(GatewayError::Validation(format!("{field} must not be empty")));
    }
    Ok(trimmed)
}

/// Validate a `"{width}x{height}"` dimension string, defaulting when absent
pub(crate) fn size(raw: Option<&str>) -> Result<String, GatewayError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_SIZE.to_owned());
    };

    let valid = raw
        .split_once('x')
        .and_then(|(w, h)| Some((w.parse::<u32>().ok()?, h.parse::<u32>().ok()?)))
        .is_some_and(|(w, h)| w > 0 && h > 0);

    if valid {
        Ok(raw.to_owned())
    } else {
        Err(GatewayError::Validation(format!(
            "size must be \"{{width}}x{{height}}\", got \"{raw}\""
        )))
    }
}

/// Validate the requested image count, defaulting when absent
pub(crate) fn count(raw: Option<u32>) -> Result<u32, GatewayError> {
    positive(raw, DEFAULT_COUNT, "num_images")
}

/// Validate the requested clip length, defaulting when absent
pub(crate) fn duration(raw: Option<u32>) -> Result<u32, GatewayError> {
    positive(raw, DEFAULT_DURATION_SECS, "duration")
}

fn positive(raw: Option<u32>, default: u32, field: &str) -> Result<u32, GatewayError> {
    match raw {
        None => Ok(default),
        Some(0) => Err(GatewayError::Validation(format!("{field} must be positive"))),
        Some(value) => Ok(value),
    }
}
