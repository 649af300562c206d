use super::{ExtractError, TextExtractor};

/// 纯文本成绩单（UTF-8）
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        Ok(String::from_utf8(bytes.to_vec())?)
    }

    fn name(&self) -> &'static str {
        "plain-text"
    }
}
