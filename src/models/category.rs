use phf::phf_map;

/// 课程分类（学分政策中的固定类别）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// 必修
    Required,
    /// I 類選修
    ElectiveI,
    /// II 類選修
    ElectiveII,
    /// 一般選修
    GeneralElective,
}

/// 配置文件中出现的分类键 → 分类
///
/// 标准键名为繁体，同时接受简体写法和英文别名
static CATEGORY_KEYS: phf::Map<&'static str, Category> = phf_map! {
    "必修" => Category::Required,
    "I類選修" => Category::ElectiveI,
    "II類選修" => Category::ElectiveII,
    "一般選修" => Category::GeneralElective,
    "I类选修" => Category::ElectiveI,
    "II类选修" => Category::ElectiveII,
    "一般选修" => Category::GeneralElective,
    "required" => Category::Required,
    "elective_i" => Category::ElectiveI,
    "elective_ii" => Category::ElectiveII,
    "general_elective" => Category::GeneralElective,
};

impl Category {
    /// 所有分类，按汇总表顺序排列
    pub const ALL: [Category; 4] = [
        Category::Required,
        Category::ElectiveI,
        Category::ElectiveII,
        Category::GeneralElective,
    ];

    /// 配置文件中的标准键名
    pub fn key(self) -> &'static str {
        match self {
            Category::Required => "必修",
            Category::ElectiveI => "I類選修",
            Category::ElectiveII => "II類選修",
            Category::GeneralElective => "一般選修",
        }
    }

    /// 英文名称
    pub fn name(self) -> &'static str {
        match self {
            Category::Required => "Required",
            Category::ElectiveI => "Elective-I",
            Category::ElectiveII => "Elective-II",
            Category::GeneralElective => "General-Elective",
        }
    }

    /// 从配置键解析分类（忽略首尾空白）
    pub fn from_key(key: &str) -> Option<Self> {
        CATEGORY_KEYS.get(key.trim()).copied()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 单门课程的分类标记，一门课可以同时属于多个分类
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct CategoryFlags {
    pub required: bool,
    pub elective_i: bool,
    pub elective_ii: bool,
    pub general_elective: bool,
}

impl CategoryFlags {
    pub fn contains(&self, category: Category) -> bool {
        match category {
            Category::Required => self.required,
            Category::ElectiveI => self.elective_i,
            Category::ElectiveII => self.elective_ii,
            Category::GeneralElective => self.general_elective,
        }
    }

    pub fn insert(&mut self, category: Category) {
        match category {
            Category::Required => self.required = true,
            Category::ElectiveI => self.elective_i = true,
            Category::ElectiveII => self.elective_ii = true,
            Category::GeneralElective => self.general_elective = true,
        }
    }

    /// 是否不属于任何分类
    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|c| !self.contains(*c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_accepts_all_spellings() {
        assert_eq!(Category::from_key("必修"), Some(Category::Required));
        assert_eq!(Category::from_key("I類選修"), Some(Category::ElectiveI));
        assert_eq!(Category::from_key("II类选修"), Some(Category::ElectiveII));
        assert_eq!(
            Category::from_key(" general_elective "),
            Some(Category::GeneralElective)
        );
        assert_eq!(Category::from_key("通識"), None);
    }

    #[test]
    fn test_key_round_trips_through_from_key() {
        for category in Category::ALL {
            assert_eq!(Category::from_key(category.key()), Some(category));
        }
    }

    #[test]
    fn test_flags_allow_multiple_categories() {
        let mut flags = CategoryFlags::default();
        assert!(flags.is_empty());

        flags.insert(Category::ElectiveI);
        flags.insert(Category::GeneralElective);

        assert!(flags.contains(Category::ElectiveI));
        assert!(flags.contains(Category::GeneralElective));
        assert!(!flags.contains(Category::Required));
        assert!(!flags.is_empty());
    }
}
