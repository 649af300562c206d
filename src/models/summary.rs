use super::category::Category;
use super::course::ClassifiedCourse;
use serde::Serialize;

/// 各分类的有效学分合计
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CategoryTotals {
    pub required: f64,
    pub elective_i: f64,
    pub elective_ii: f64,
    pub general_elective: f64,
}

impl CategoryTotals {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Required => self.required,
            Category::ElectiveI => self.elective_i,
            Category::ElectiveII => self.elective_ii,
            Category::GeneralElective => self.general_elective,
        }
    }

    fn add(&mut self, category: Category, credits: f64) {
        match category {
            Category::Required => self.required += credits,
            Category::ElectiveI => self.elective_i += credits,
            Category::ElectiveII => self.elective_ii += credits,
            Category::GeneralElective => self.general_elective += credits,
        }
    }

    /// 按分类累加有效学分，同属多个分类的课程在每个分类中都计入
    pub fn from_courses(courses: &[ClassifiedCourse]) -> Self {
        let mut totals = Self::default();
        for course in courses {
            for category in Category::ALL {
                if course.categories.contains(category) {
                    totals.add(category, course.validated_credits);
                }
            }
        }
        totals
    }

    /// 选修总学分 = I 類 + II 類 + 一般選修
    pub fn elective_total(&self) -> f64 {
        self.elective_i + self.elective_ii + self.general_elective
    }
}

/// 汇总表中的行
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryLine {
    Required,
    ElectiveI,
    ElectiveII,
    ElectiveTotal,
}

impl SummaryLine {
    /// 汇总表固定顺序
    pub const ALL: [SummaryLine; 4] = [
        SummaryLine::Required,
        SummaryLine::ElectiveI,
        SummaryLine::ElectiveII,
        SummaryLine::ElectiveTotal,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SummaryLine::Required => "Required",
            SummaryLine::ElectiveI => "Elective-I",
            SummaryLine::ElectiveII => "Elective-II",
            SummaryLine::ElectiveTotal => "Elective-Total",
        }
    }

    /// 中文显示名称
    pub fn label_zh(self) -> &'static str {
        match self {
            SummaryLine::Required => "必修",
            SummaryLine::ElectiveI => "I 類選修",
            SummaryLine::ElectiveII => "II 類選修",
            SummaryLine::ElectiveTotal => "選修總學分",
        }
    }

    /// 应修学分
    pub fn required_credits(self) -> f64 {
        match self {
            SummaryLine::Required => 84.0,
            SummaryLine::ElectiveI => 10.0,
            SummaryLine::ElectiveII => 10.0,
            SummaryLine::ElectiveTotal => 44.0,
        }
    }

    fn earned_from(self, totals: &CategoryTotals) -> f64 {
        match self {
            SummaryLine::Required => totals.get(Category::Required),
            SummaryLine::ElectiveI => totals.get(Category::ElectiveI),
            SummaryLine::ElectiveII => totals.get(Category::ElectiveII),
            SummaryLine::ElectiveTotal => totals.elective_total(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub category: &'static str,
    pub category_zh: &'static str,
    pub earned_credits: f64,
    pub required_credits: f64,
}

impl SummaryRow {
    fn new(line: SummaryLine, earned_credits: f64) -> Self {
        Self {
            category: line.label(),
            category_zh: line.label_zh(),
            earned_credits,
            required_credits: line.required_credits(),
        }
    }

    /// 尚缺学分，已达标时为 0
    pub fn remaining_credits(&self) -> f64 {
        (self.required_credits - self.earned_credits).max(0.0)
    }

    pub fn is_satisfied(&self) -> bool {
        self.earned_credits >= self.required_credits
    }
}

/// 四行固定顺序的学分汇总表
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SummaryTable {
    rows: Vec<SummaryRow>,
}

impl SummaryTable {
    pub fn from_totals(totals: &CategoryTotals) -> Self {
        let rows = SummaryLine::ALL
            .iter()
            .map(|line| SummaryRow::new(*line, line.earned_from(totals)))
            .collect();
        Self { rows }
    }

    /// 没有任何课程数据时的汇总表：已修学分全部为 0
    pub fn empty() -> Self {
        Self::from_totals(&CategoryTotals::default())
    }

    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    pub fn row(&self, line: SummaryLine) -> &SummaryRow {
        // rows 由 SummaryLine::ALL 按序生成
        &self.rows[line as usize]
    }

    pub fn all_satisfied(&self) -> bool {
        self.rows.iter().all(SummaryRow::is_satisfied)
    }
}
