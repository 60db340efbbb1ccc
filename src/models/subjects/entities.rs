use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学期
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub enum Semester {
    #[serde(rename = "1st")]
    First,
    #[serde(rename = "2nd")]
    Second,
    #[serde(rename = "Summer")]
    Summer,
}

impl Semester {
    pub const FIRST: &'static str = "1st";
    pub const SECOND: &'static str = "2nd";
    pub const SUMMER: &'static str = "Summer";
}

impl std::fmt::Display for Semester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Semester::First => write!(f, "{}", Semester::FIRST),
            Semester::Second => write!(f, "{}", Semester::SECOND),
            Semester::Summer => write!(f, "{}", Semester::SUMMER),
        }
    }
}

impl std::str::FromStr for Semester {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Semester::FIRST => Ok(Semester::First),
            Semester::SECOND => Ok(Semester::Second),
            Semester::SUMMER => Ok(Semester::Summer),
            _ => Err(format!("Invalid semester: {s}")),
        }
    }
}

// 科目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct Subject {
    pub id: i64,
    // 科目代码，全局唯一
    pub code: String,
    pub title: String,
    pub units: Option<i32>,
    pub semester: Option<Semester>,
    pub curriculum_year: Option<String>,
    pub department_id: i64,
    pub year_level_id: i64,
    pub teacher_id: Option<i64>,
    pub section_id: Option<i64>,
    // 排课信息，自由文本
    pub day: Option<String>,
    pub time: Option<String>,
    pub room: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semester_strings() {
        assert_eq!("1st".parse::<Semester>().unwrap(), Semester::First);
        assert_eq!("2nd".parse::<Semester>().unwrap(), Semester::Second);
        assert_eq!("Summer".parse::<Semester>().unwrap(), Semester::Summer);
        assert!("summer".parse::<Semester>().is_err());
        assert!("3rd".parse::<Semester>().is_err());
    }

    #[test]
    fn test_semester_serde_matches_display() {
        for semester in [Semester::First, Semester::Second, Semester::Summer] {
            let json = serde_json::to_string(&semester).unwrap();
            assert_eq!(json, format!("\"{semester}\""));
        }
        assert!(serde_json::from_str::<Semester>("\"Winter\"").is_err());
    }
}
