//! 课程记录解析 - 核心能力
//!
//! 逐行扫描成绩单文本，抽取 (课程名称, 学分, GPA)

use crate::models::course::{parse_grade, parse_number, CourseRecord};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// `<课程名称> <学分>學分 GPA[:：] <成绩>`
///
/// 课程名称为最短匹配，成绩记号可以缺失；`\d` 为 Unicode 数字，全角数字同样匹配
static COURSE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(.+?)\s+(\d+(?:\.\d+)?)學分\s+GPA[:：]?\s*(\S+)?")
        .expect("course line pattern is valid")
});

/// 行分隔符，除换行外也包含 PDF 提取时常见的换页符等
fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// 解析单行，不符合格式时返回 None
pub fn parse_line(line: &str) -> Option<CourseRecord> {
    let caps = COURSE_LINE.captures(line)?;

    let name = caps.get(1)?.as_str().trim();
    let credits = parse_number(caps.get(2)?.as_str())?;
    let gpa = caps.get(3).and_then(|m| parse_grade(m.as_str()));

    Some(CourseRecord::new(name, credits, gpa))
}

/// 解析成绩单全文
///
/// 按出现顺序返回所有课程，不去重；没有任何匹配时返回空列表
pub fn parse_courses(text: &str) -> Vec<CourseRecord> {
    let mut courses = Vec::new();
    let mut skipped = 0usize;

    for line in text.split(is_line_boundary) {
        match parse_line(line) {
            Some(course) => courses.push(course),
            None if !line.trim().is_empty() => skipped += 1,
            None => {}
        }
    }

    debug!("解析到 {} 门课程，跳过 {} 行", courses.len(), skipped);
    courses
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_basic() {
        let course = parse_line("Algebra 3學分 GPA:4.0").unwrap();
        assert_eq!(course, CourseRecord::new("Algebra", 3.0, Some(4.0)));
    }

    #[test]
    fn test_parse_line_decimal_credits_and_fullwidth_colon() {
        let course = parse_line("  資料結構與演算法   2.5學分   GPA：  3.7").unwrap();
        assert_eq!(course.name, "資料結構與演算法");
        assert_eq!(course.credits, 2.5);
        assert_eq!(course.gpa, Some(3.7));
    }

    #[test]
    fn test_parse_line_fullwidth_credits() {
        let course = parse_line("線性代數 ３學分 GPA:4.0").unwrap();
        assert_eq!(course, CourseRecord::new("線性代數", 3.0, Some(4.0)));

        let course = parse_line("線性代數 ２.５學分 GPA:3.0").unwrap();
        assert_eq!(course.credits, 2.5);
    }

    #[test]
    fn test_parse_line_fullwidth_grade() {
        let course = parse_line("線性代數 3學分 GPA:４.０").unwrap();
        assert_eq!(course, CourseRecord::new("線性代數", 3.0, Some(4.0)));
    }

    #[test]
    fn test_parse_line_without_colon() {
        let course = parse_line("微積分 4學分 GPA 2.3").unwrap();
        assert_eq!(course.gpa, Some(2.3));
    }

    #[test]
    fn test_parse_line_missing_grade() {
        let course = parse_line("Algebra 3學分 GPA:").unwrap();
        assert_eq!(course.name, "Algebra");
        assert_eq!(course.gpa, None);
    }

    #[test]
    fn test_parse_line_non_numeric_grade() {
        let course = parse_line("服務學習 0學分 GPA:通過").unwrap();
        assert_eq!(course.credits, 0.0);
        assert_eq!(course.gpa, None);
    }

    #[test]
    fn test_parse_line_name_with_digits_and_spaces() {
        let course = parse_line("Course 101 Part II 3學分 GPA:3.0").unwrap();
        assert_eq!(course.name, "Course 101 Part II");
        assert_eq!(course.credits, 3.0);
    }

    #[test]
    fn test_parse_line_rejects_other_shapes() {
        assert!(parse_line("學年度 112 第一學期").is_none());
        assert!(parse_line("Algebra 3學分").is_none());
        assert!(parse_line("3學分 GPA:4.0").is_none());
        assert!(parse_line("Algebra 3學分GPA:4.0").is_none());
        assert!(parse_line("").is_none());
    }

    #[test]
    fn test_parse_courses_keeps_order_and_duplicates() {
        let text = "國立某某大學 歷年成績單\n\
                    Algebra 3學分 GPA:4.0\n\
                    體育 0學分 GPA:A\r\n\
                    Algebra 3學分 GPA:1.0\x0c\
                    英文 2學分 GPA:3.3\n";

        let courses = parse_courses(text);
        let names: Vec<&str> = courses.iter().map(|c| c.name.as_str()).collect();

        assert_eq!(names, vec!["Algebra", "體育", "Algebra", "英文"]);
        assert_eq!(courses[2].gpa, Some(1.0));
    }

    #[test]
    fn test_parse_courses_no_matches_is_empty() {
        assert!(parse_courses("").is_empty());
        assert!(parse_courses("沒有任何課程\n第二行").is_empty());
    }
}
