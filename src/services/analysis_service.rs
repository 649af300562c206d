//! 成绩单分析服务
//!
//! 文本 + 分类配置 → 课程表 + 汇总表，单次同步完成，不会失败

use crate::models::category_map::CategoryMap;
use crate::models::course::ClassifiedCourse;
use crate::models::summary::SummaryTable;
use crate::services::{classifier, record_parser};
use serde::Serialize;
use tracing::{info, warn};

/// 一次分析的结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// 按成绩单顺序排列的课程
    pub courses: Vec<ClassifiedCourse>,
    pub summary: SummaryTable,
}

impl Analysis {
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

/// 分析成绩单全文
pub fn analyze(text: &str, category_map: &CategoryMap) -> Analysis {
    let records = record_parser::parse_courses(text);

    if records.is_empty() {
        warn!("⚠️ 成绩单中没有找到任何课程记录");
        return Analysis {
            courses: Vec::new(),
            summary: SummaryTable::empty(),
        };
    }

    info!("✓ 解析到 {} 门课程", records.len());

    let index = category_map.index();
    let courses = classifier::classify(records, &index);
    let summary = classifier::summarize(&courses);

    Analysis { courses, summary }
}
