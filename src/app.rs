use crate::config::Config;
use crate::extract::extractor_for_path;
use crate::models::{load_category_map, CategoryMap};
use crate::services::{analyze, Analysis, ReportWriter};
use crate::utils::logging::{log_startup, log_text_extracted, print_final_stats};
use crate::AppError;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;
use tracing::info;

/// 应用主结构
pub struct App {
    config: Config,
    category_map: CategoryMap,
    report_writer: ReportWriter,
}

impl App {
    /// 初始化应用：加载分类配置
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config.transcript_path, &config.category_map_path);

        let category_map = load_category_map(Path::new(&config.category_map_path))
            .await
            .with_context(|| format!("无法加载分类配置: {}", config.category_map_path))?;

        let report_writer = ReportWriter::with_path(config.report_file.as_str());

        Ok(Self {
            config,
            category_map,
            report_writer,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<Analysis> {
        let text = load_transcript_text(&self.config.transcript_path).await?;

        let analysis = analyze(&text, &self.category_map);

        self.report_writer.print(&analysis);
        let report_path = self
            .report_writer
            .write(&analysis, &self.config.transcript_path)
            .await
            .context("无法写入报告")?;

        print_final_stats(
            analysis.courses.len(),
            &analysis.summary,
            report_path.as_deref(),
        );

        Ok(analysis)
    }
}

/// 读取成绩单并提取全文
async fn load_transcript_text(path: &str) -> Result<String> {
    info!("\n📁 正在读取成绩单...");

    let bytes = fs::read(path)
        .await
        .map_err(|e| AppError::file_read_failed(path, e))?;

    let extractor = extractor_for_path(Path::new(path));
    let text = extractor
        .extract_text(&bytes)
        .map_err(AppError::from)
        .with_context(|| format!("无法提取成绩单文本: {}", path))?;

    log_text_extracted(extractor.name(), &text);

    Ok(text)
}
