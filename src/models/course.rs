use super::category::CategoryFlags;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// 学分认定的最低 GPA（含）
pub const GPA_THRESHOLD: f64 = 1.7;

/// 成绩单中的一门课程
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseRecord {
    pub name: String,
    pub credits: f64,
    /// 成绩缺失或无法识别时为 None
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<f64>,
}

impl CourseRecord {
    pub fn new(name: impl Into<String>, credits: f64, gpa: Option<f64>) -> Self {
        Self {
            name: name.into(),
            credits,
            gpa,
        }
    }

    /// 有效学分：GPA 达到门槛时计入全部学分，否则为 0
    pub fn validated_credits(&self) -> f64 {
        match self.gpa {
            Some(gpa) if gpa >= GPA_THRESHOLD => self.credits,
            _ => 0.0,
        }
    }
}

/// Unicode 十进制数字（Nd），包括全角 `０`–`９`
static DECIMAL_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d$").expect("decimal digit pattern is valid"));

fn is_decimal_digit(c: char) -> bool {
    if c.is_ascii_digit() {
        return true;
    }
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT.is_match(c.encode_utf8(&mut buf))
}

/// 十进制数字的数值
///
/// Nd 字符总是以 0..9 连续成组出现，向前数连续数字的个数即可得到数值
fn decimal_digit_value(c: char) -> Option<u32> {
    if let Some(value) = c.to_digit(10) {
        return Some(value);
    }
    if !is_decimal_digit(c) {
        return None;
    }
    let mut offset = 0u32;
    let mut code = c as u32;
    while let Some(prev) = code.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        offset += 1;
        code -= 1;
    }
    Some(offset % 10)
}

/// 把数字记号中的 Unicode 数字转换成 ASCII，便于 `parse::<f64>()`
///
/// 记号中出现数字和 `.` 以外的字符时返回 None
pub fn normalize_number(token: &str) -> Option<String> {
    token
        .chars()
        .map(|c| match c {
            '.' => Some('.'),
            _ => decimal_digit_value(c).and_then(|d| char::from_digit(d, 10)),
        })
        .collect()
}

/// 解析数字记号（整数或小数，允许全角数字）
pub fn parse_number(token: &str) -> Option<f64> {
    normalize_number(token)?.parse().ok()
}

/// 解析成绩字段
///
/// 只接受由数字和至多一个小数点组成的记号（如 `4.0`、`４.０`、`4.`、`.5`），
/// 其余情况（`A+`、`通過`、`4.0/4.3` 等）视为无成绩
pub fn parse_grade(token: &str) -> Option<f64> {
    let digits = token.replacen('.', "", 1);
    if digits.is_empty() || !digits.chars().all(is_decimal_digit) {
        return None;
    }
    parse_number(token)
}

/// 带分类标记和有效学分的课程
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedCourse {
    #[serde(flatten)]
    pub record: CourseRecord,
    pub categories: CategoryFlags,
    pub validated_credits: f64,
}
