//! 日志工具模块
//!
//! 提供日志格式化和输出的辅助函数

use crate::models::summary::SummaryTable;
use tracing::info;

/// 记录程序启动信息
///
/// # 参数
/// - `transcript_path`: 成绩单路径
/// - `category_map_path`: 分类配置路径
pub fn log_startup(transcript_path: &str, category_map_path: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 学分审核启动 - {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    info!("📄 成绩单: {}", transcript_path);
    info!("📋 分类配置: {}", category_map_path);
    info!("{}", "=".repeat(60));
}

/// 记录文本提取信息
///
/// # 参数
/// - `extractor`: 提取器名称
/// - `text`: 提取出的全文
pub fn log_text_extracted(extractor: &str, text: &str) {
    info!(
        "✓ 文本提取完成 ({}): {} 行, {} 字",
        extractor,
        text.lines().count(),
        text.chars().count()
    );
}

/// 打印最终统计信息
///
/// # 参数
/// - `course_count`: 课程数量
/// - `summary`: 汇总表
/// - `report_path`: JSON 报告路径（未写文件时为 None）
pub fn print_final_stats(course_count: usize, summary: &SummaryTable, report_path: Option<&str>) {
    info!("📊 共 {} 门课程", course_count);
    if summary.all_satisfied() {
        info!("✅ 所有分类学分均已达标");
    } else {
        let missing: Vec<&str> = summary
            .rows()
            .iter()
            .filter(|row| !row.is_satisfied())
            .map(|row| row.category_zh)
            .collect();
        info!("❌ 未达标分类: {}", missing.join("、"));
    }
    if let Some(path) = report_path {
        info!("\n报告已保存至: {}", path);
    }
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text_counts_chars() {
        assert_eq!(truncate_text("資料結構", 10), "資料結構");
        assert_eq!(truncate_text("資料結構與演算法", 4), "資料結構...");
    }
}
