use crate::error::{AppError, AppResult, ConfigError};
use crate::models::category_map::CategoryMap;
use std::collections::BTreeMap;
use std::path::Path;
use tokio::fs;

/// 分类配置文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapFormat {
    Json,
    Toml,
}

impl MapFormat {
    /// 根据扩展名判断格式
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Some(MapFormat::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Some(MapFormat::Toml),
            _ => None,
        }
    }
}

/// 解析分类配置内容
///
/// 两种格式的结构相同：分类键 → 课程名称列表
pub fn parse_category_map(content: &str, format: MapFormat) -> AppResult<CategoryMap> {
    let raw: BTreeMap<String, Vec<String>> = match format {
        MapFormat::Json => serde_json::from_str(content)?,
        MapFormat::Toml => toml::from_str(content)?,
    };
    Ok(CategoryMap::from_raw(raw))
}

/// 从文件加载分类配置
pub async fn load_category_map(path: &Path) -> AppResult<CategoryMap> {
    let path_str = path.display().to_string();

    let format = MapFormat::from_path(path).ok_or_else(|| {
        AppError::Config(ConfigError::UnsupportedFormat {
            path: path_str.clone(),
        })
    })?;

    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file_read_failed(&path_str, e))?;

    // 解析错误补上文件路径
    let map = parse_category_map(&content, format).map_err(|e| match e {
        AppError::Config(ConfigError::CategoryMapParseFailed { source, .. }) => {
            AppError::Config(ConfigError::CategoryMapParseFailed {
                path: path_str.clone(),
                source,
            })
        }
        other => other,
    })?;

    tracing::info!("成功加载分类配置: {} ({} 门课程)", path_str, map.len());

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FileError;
    use crate::models::Category;
    use std::io::Write;

    #[test]
    fn test_parse_json_map() {
        let content = r#"{"必修": ["微積分", "普通物理"], "I類選修": ["機器學習"]}"#;
        let map = parse_category_map(content, MapFormat::Json).unwrap();

        assert!(map.contains(Category::Required, "普通物理"));
        assert!(map.contains(Category::ElectiveI, "機器學習"));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_parse_toml_map() {
        let content = r#"
"必修" = ["微積分"]
general_elective = ["電影賞析"]
"#;
        let map = parse_category_map(content, MapFormat::Toml).unwrap();

        assert!(map.contains(Category::Required, "微積分"));
        assert!(map.contains(Category::GeneralElective, "電影賞析"));
    }

    #[test]
    fn test_parse_malformed_json_is_config_error() {
        let result = parse_category_map(r#"{"必修": "微積分"}"#, MapFormat::Json);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_load_category_map_from_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"II類選修": ["作業系統"], "體育": ["游泳"]}}"#).unwrap();

        let map = tokio_test::block_on(load_category_map(file.path())).unwrap();

        assert!(map.contains(Category::ElectiveII, "作業系統"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let result = tokio_test::block_on(load_category_map(Path::new(
            "/definitely/not/here/category_map.json",
        )));
        assert!(matches!(
            result,
            Err(AppError::File(FileError::NotFound { .. }))
        ));
    }

    #[test]
    fn test_load_unsupported_extension() {
        let result = tokio_test::block_on(load_category_map(Path::new("category_map.yaml")));
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::UnsupportedFormat { .. }))
        ));
    }
}
