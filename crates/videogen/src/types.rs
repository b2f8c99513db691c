use std::borrow::Cow;

/// Normalized video generation job handed to a provider adapter
///
/// Script-to-video conversions arrive here too; the script rides in the
/// prompt field with the duration defaulted by the caller.
#[derive(Debug, Clone)]
pub struct VideoJob {
    pub prompt: String,
    /// Clip length in seconds
    pub duration: u32,
    /// Free-text style hint, forwarded uninterpreted
    pub style: Option<String>,
}

impl VideoJob {
    /// Prompt with the style hint folded in
    pub fn styled_prompt(&self) -> Cow<'_, str> {
        match self.style.as_deref() {
            Some(style) => Cow::Owned(format!("{}, {style} style", self.prompt)),
            None => Cow::Borrowed(&self.prompt),
        }
    }
}
