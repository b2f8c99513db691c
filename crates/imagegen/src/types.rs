use std::borrow::Cow;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Normalized image generation job handed to a provider adapter
///
/// The prompt is non-empty and the count positive by the time a job
/// reaches an adapter; adapters only clamp the count to their own
/// maximum.
#[derive(Debug, Clone)]
pub struct ImageJob {
    pub prompt: String,
    /// Requested image count, pre-clamp
    pub count: u32,
    /// Dimension string, `"{width}x{height}"`
    pub size: String,
    /// Free-text style hint, forwarded uninterpreted
    pub style: Option<String>,
}

impl ImageJob {
    /// Prompt with the style hint folded in
    ///
    /// None of the supported wire formats carry a separate style field,
    /// so the hint travels as a prompt suffix.
    pub fn styled_prompt(&self) -> Cow<'_, str> {
        match self.style.as_deref() {
            Some(style) => Cow::Owned(format!("{}, {style} style", self.prompt)),
            None => Cow::Borrowed(&self.prompt),
        }
    }
}

/// Inline a binary payload as a self-describing `data:` URI
pub fn inline_media(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Inline an already base64-encoded payload as a `data:` URI
pub fn inline_encoded(mime: &str, b64: &str) -> String {
    format!("data:{mime};base64,{b64}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_media_encodes_bytes() {
        let uri = inline_media("image/png", b"\x89PNG");
        assert!(uri.starts_with("data:image/png;base64,"));
        let payload = uri.strip_prefix("data:image/png;base64,").unwrap();
        assert_eq!(STANDARD.decode(payload).unwrap(), b"\x89PNG");
    }

    #[test]
    fn inline_encoded_keeps_payload_verbatim() {
        assert_eq!(
            inline_encoded("image/jpeg", "AAAA"),
            "data:image/jpeg;base64,AAAA"
        );
    }

    #[test]
    fn styled_prompt_appends_hint() {
        let job = ImageJob {
            prompt: "a sunset".to_owned(),
            count: 1,
            size: "1024x1024".to_owned(),
            style: Some("watercolor".to_owned()),
        };
        assert_eq!(job.styled_prompt(), "a sunset, watercolor style");
    }

    #[test]
    fn styled_prompt_without_hint_borrows() {
        let job = ImageJob {
            prompt: "a sunset".to_owned(),
            count: 1,
            size: "1024x1024".to_owned(),
            style: None,
        };
        assert!(matches!(job.styled_prompt(), Cow::Borrowed("a sunset")));
    }
}
