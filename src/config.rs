/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 成绩单文件路径（PDF 或文本）
    pub transcript_path: String,
    /// 课程分类配置（JSON 或 TOML）
    pub category_map_path: String,
    /// JSON 报告输出路径，为空时不写文件
    pub report_file: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            transcript_path: "transcript.pdf".to_string(),
            category_map_path: "data/category_map.json".to_string(),
            report_file: "credit_report.json".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            transcript_path: std::env::var("TRANSCRIPT_PATH").unwrap_or(default.transcript_path),
            category_map_path: std::env::var("CATEGORY_MAP_PATH").unwrap_or(default.category_map_path),
            report_file: std::env::var("REPORT_FILE").unwrap_or(default.report_file),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }

    /// 用命令行传入的成绩单路径覆盖配置
    pub fn with_transcript(mut self, path: Option<String>) -> Self {
        if let Some(path) = path {
            self.transcript_path = path;
        }
        self
    }
}
