use super::{ExtractError, TextExtractor};
use tracing::debug;

/// 基于 pdf-extract 的文本提取，只处理带文字层的 PDF
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|e| ExtractError::PdfParsing(e.to_string()))?;

        debug!("PDF 共 {} 页", pages.len());

        let mut text = String::new();
        for page in pages {
            text.push_str(&page);
            text.push('\n');
        }
        Ok(text)
    }

    fn name(&self) -> &'static str {
        "pdf-extract"
    }
}
