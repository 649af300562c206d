//! # Credit Audit
//!
//! 从成绩单中抽取课程学分，并按课程分类政策统计学分是否达标
//!
//! ## 架构设计
//!
//! ### ① 外围适配（Adapters）
//! - `extract/` - 成绩单 → 纯文本（PDF / 文本文件）
//! - `models/loaders` - 分类配置加载（JSON / TOML）
//!
//! ### ② 核心能力（Services）
//! - `record_parser` - 逐行抽取 (课程名称, 学分, GPA)
//! - `classifier` - 分类标记、有效学分、四行汇总表
//! - `analysis_service` - 文本 + 分类配置 → `Analysis`，不会失败
//!
//! ### ③ 输出与编排
//! - `report_writer` - 终端表格 / JSON 报告
//! - `app` - 读取配置、提取文本、分析、输出
//!
//! ## 模块结构

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod logger;
pub mod models;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Category, CategoryMap, ClassifiedCourse, CourseRecord, SummaryLine, SummaryTable};
pub use services::{analyze, Analysis};
