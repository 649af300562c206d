//! 报告输出服务
//!
//! 只负责把分析结果输出到终端和 JSON 文件，不关心分析流程

use crate::error::{AppError, AppResult};
use crate::services::analysis_service::Analysis;
use crate::utils::logging::truncate_text;
use serde::Serialize;
use tokio::fs;
use tracing::{debug, info};

/// 课程名称在终端表格中的最大显示长度
const NAME_DISPLAY_LEN: usize = 24;

/// 写入文件的 JSON 报告
#[derive(Serialize)]
struct Report<'a> {
    generated_at: String,
    transcript: &'a str,
    #[serde(flatten)]
    analysis: &'a Analysis,
}

/// 报告输出服务
pub struct ReportWriter {
    report_file_path: Option<String>,
}

impl ReportWriter {
    /// 只输出到终端
    pub fn new() -> Self {
        Self {
            report_file_path: None,
        }
    }

    /// 同时写入 JSON 报告文件，空路径表示不写文件
    pub fn with_path(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            report_file_path: (!path.trim().is_empty()).then_some(path),
        }
    }

    /// 输出课程表和汇总表
    pub fn print(&self, analysis: &Analysis) {
        for line in render_course_table(analysis).lines() {
            info!("{}", line);
        }
        for line in render_summary_table(analysis).lines() {
            info!("{}", line);
        }
    }

    /// 写入 JSON 报告，返回写入的路径
    pub async fn write(&self, analysis: &Analysis, transcript: &str) -> AppResult<Option<String>> {
        let Some(path) = &self.report_file_path else {
            return Ok(None);
        };

        let report = Report {
            generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            transcript,
            analysis,
        };
        let json = serde_json::to_string_pretty(&report).map_err(AppError::report_serialize_failed)?;

        debug!("写入报告: {} ({} 字节)", path, json.len());
        fs::write(path, json)
            .await
            .map_err(|e| AppError::file_write_failed(path.as_str(), e))?;

        Ok(Some(path.clone()))
    }
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn mark(flag: bool) -> &'static str {
    if flag {
        "✓"
    } else {
        ""
    }
}

fn format_gpa(gpa: Option<f64>) -> String {
    gpa.map(|g| format!("{:.2}", g)).unwrap_or_else(|| "-".to_string())
}

/// 课程表文本
pub fn render_course_table(analysis: &Analysis) -> String {
    if analysis.is_empty() {
        return "（没有课程记录）\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:<26} {:>6} {:>6} {:^4} {:^6} {:^6} {:^6} {:>8}\n",
        "课程名称", "学分", "GPA", "必修", "I類", "II類", "一般", "有效学分"
    ));
    out.push_str(&format!("{}\n", "─".repeat(80)));

    for course in &analysis.courses {
        let flags = &course.categories;
        out.push_str(&format!(
            "{:<26} {:>6.1} {:>6} {:^4} {:^6} {:^6} {:^6} {:>8.1}\n",
            truncate_text(&course.record.name, NAME_DISPLAY_LEN),
            course.record.credits,
            format_gpa(course.record.gpa),
            mark(flags.required),
            mark(flags.elective_i),
            mark(flags.elective_ii),
            mark(flags.general_elective),
            course.validated_credits,
        ));
    }
    out
}

/// 汇总表文本
pub fn render_summary_table(analysis: &Analysis) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "=".repeat(60)));
    out.push_str(&format!(
        "{:<12} {:>10} {:>10} {:>10}\n",
        "分類", "已修學分", "應修學分", "尚缺"
    ));

    for row in analysis.summary.rows() {
        let status = if row.is_satisfied() { "✅" } else { "❌" };
        out.push_str(&format!(
            "{:<12} {:>10.1} {:>10.1} {:>10.1} {}\n",
            row.category_zh,
            row.earned_credits,
            row.required_credits,
            row.remaining_credits(),
            status
        ));
    }
    out.push_str(&format!("{}\n", "=".repeat(60)));
    out
}
