//! 成绩单文本提取
//!
//! 把 PDF / 文本文件转换成一整段纯文本，供课程解析使用

mod pdf;
mod plain;

pub use pdf::PdfTextExtractor;
pub use plain::PlainTextExtractor;

use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("PDF 解析失败: {0}")]
    PdfParsing(String),
    #[error("文本编码错误: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// 文档 → 文本
pub trait TextExtractor {
    /// 提取文档全文，多页文档按页序拼接，每页之后跟一个换行
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractError>;

    /// 提取器名称，用于日志
    fn name(&self) -> &'static str;
}

/// 按文件扩展名选择提取器：`.pdf` 走 PDF，其余按 UTF-8 文本处理
pub fn extractor_for_path(path: &Path) -> Box<dyn TextExtractor + Send + Sync> {
    let is_pdf = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

    if is_pdf {
        Box::new(PdfTextExtractor)
    } else {
        Box::new(PlainTextExtractor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extractor_for_path_by_extension() {
        assert_eq!(extractor_for_path(Path::new("成績單.PDF")).name(), "pdf-extract");
        assert_eq!(extractor_for_path(Path::new("transcript.pdf")).name(), "pdf-extract");
        assert_eq!(extractor_for_path(Path::new("transcript.txt")).name(), "plain-text");
        assert_eq!(extractor_for_path(Path::new("transcript")).name(), "plain-text");
    }
}
