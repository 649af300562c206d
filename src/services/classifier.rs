//! 课程分类与学分汇总 - 核心能力

use crate::models::category_map::CategoryIndex;
use crate::models::course::{ClassifiedCourse, CourseRecord};
use crate::models::summary::{CategoryTotals, SummaryTable};

/// 为每门课程标记所属分类并计算有效学分
pub fn classify(records: Vec<CourseRecord>, index: &CategoryIndex) -> Vec<ClassifiedCourse> {
    records
        .into_iter()
        .map(|record| {
            let categories = index.lookup(&record.name);
            let validated_credits = record.validated_credits();
            ClassifiedCourse {
                record,
                categories,
                validated_credits,
            }
        })
        .collect()
}

/// 汇总各分类有效学分，生成四行汇总表
pub fn summarize(courses: &[ClassifiedCourse]) -> SummaryTable {
    if courses.is_empty() {
        return SummaryTable::empty();
    }
    SummaryTable::from_totals(&CategoryTotals::from_courses(courses))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, CategoryMap, SummaryLine};

    fn sample_index() -> CategoryIndex {
        CategoryMap::new()
            .with(Category::Required, "Algebra")
            .with(Category::ElectiveI, "Compilers")
            .with(Category::ElectiveII, "Databases")
            .with(Category::GeneralElective, "Compilers")
            .with(Category::GeneralElective, "Film")
            .index()
    }

    #[test]
    fn test_classify_sets_flags_and_validated_credits() {
        let records = vec![
            CourseRecord::new("Algebra", 3.0, Some(4.0)),
            CourseRecord::new("Compilers", 3.0, Some(1.5)),
            CourseRecord::new("Unknown", 2.0, Some(4.0)),
        ];

        let courses = classify(records, &sample_index());

        assert!(courses[0].categories.required);
        assert_eq!(courses[0].validated_credits, 3.0);
        assert!(courses[1].categories.elective_i);
        assert!(courses[1].categories.general_elective);
        assert_eq!(courses[1].validated_credits, 0.0);
        assert!(courses[2].categories.is_empty());
        assert_eq!(courses[2].validated_credits, 2.0);
    }

    #[test]
    fn test_summarize_counts_multi_category_course_in_each() {
        let records = vec![
            CourseRecord::new("Algebra", 3.0, Some(4.0)),
            CourseRecord::new("Compilers", 3.0, Some(3.0)),
            CourseRecord::new("Databases", 2.0, Some(2.0)),
            CourseRecord::new("Film", 2.0, None),
        ];

        let summary = summarize(&classify(records, &sample_index()));

        assert_eq!(summary.row(SummaryLine::Required).earned_credits, 3.0);
        assert_eq!(summary.row(SummaryLine::ElectiveI).earned_credits, 3.0);
        assert_eq!(summary.row(SummaryLine::ElectiveII).earned_credits, 2.0);
        // Compilers 同时计入 I 類與一般選修
        assert_eq!(summary.row(SummaryLine::ElectiveTotal).earned_credits, 8.0);
    }

    #[test]
    fn test_summarize_empty_input() {
        let summary = summarize(&[]);
        assert_eq!(summary, SummaryTable::empty());
    }

    #[test]
    fn test_repeated_course_is_counted_each_time() {
        let records = vec![
            CourseRecord::new("Algebra", 3.0, Some(1.0)),
            CourseRecord::new("Algebra", 3.0, Some(2.7)),
            CourseRecord::new("Algebra", 3.0, Some(3.0)),
        ];

        let summary = summarize(&classify(records, &sample_index()));

        assert_eq!(summary.row(SummaryLine::Required).earned_credits, 6.0);
    }
}
