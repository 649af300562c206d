use super::category::{Category, CategoryFlags};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::warn;

/// 分类 → 课程名称集合
///
/// 从配置文件加载一次，之后只读
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryMap {
    entries: BTreeMap<Category, BTreeSet<String>>,
}

impl CategoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从原始键值表构建，无法识别的分类键会被忽略
    pub fn from_raw(raw: BTreeMap<String, Vec<String>>) -> Self {
        let mut map = Self::new();
        for (key, names) in raw {
            match Category::from_key(&key) {
                Some(category) => map.extend(category, names),
                None => warn!("⚠️ 忽略未知的课程分类: {}", key),
            }
        }
        map
    }

    /// 向某个分类追加课程名称
    pub fn extend<I, S>(&mut self, category: Category, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .entry(category)
            .or_default()
            .extend(names.into_iter().map(Into::into));
    }

    /// 链式添加单个课程，便于构造测试数据
    pub fn with(mut self, category: Category, name: impl Into<String>) -> Self {
        self.extend(category, [name.into()]);
        self
    }

    pub fn courses(&self, category: Category) -> Option<&BTreeSet<String>> {
        self.entries.get(&category)
    }

    pub fn contains(&self, category: Category, name: &str) -> bool {
        self.courses(category).is_some_and(|names| names.contains(name))
    }

    /// 所有分类中的课程总数（同名课程在不同分类中重复计数）
    pub fn len(&self) -> usize {
        self.entries.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 构建课程名 → 分类标记的索引
    pub fn index(&self) -> CategoryIndex {
        let mut by_name: HashMap<String, CategoryFlags> = HashMap::new();
        for (category, names) in &self.entries {
            for name in names {
                by_name.entry(name.clone()).or_default().insert(*category);
            }
        }
        CategoryIndex { by_name }
    }
}

/// 课程名 → 所属分类
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    by_name: HashMap<String, CategoryFlags>,
}

impl CategoryIndex {
    /// 按课程名精确查找；未登记的课程不属于任何分类
    pub fn lookup(&self, name: &str) -> CategoryFlags {
        self.by_name.get(name).copied().unwrap_or_default()
    }
}
