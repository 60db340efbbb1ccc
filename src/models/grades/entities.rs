use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 成绩考核阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub enum GradePeriod {
    Prelim,
    Midterm,
    Finals,
}

impl GradePeriod {
    pub const PRELIM: &'static str = "prelim";
    pub const MIDTERM: &'static str = "midterm";
    pub const FINALS: &'static str = "finals";
}

impl std::fmt::Display for GradePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GradePeriod::Prelim => write!(f, "{}", GradePeriod::PRELIM),
            GradePeriod::Midterm => write!(f, "{}", GradePeriod::MIDTERM),
            GradePeriod::Finals => write!(f, "{}", GradePeriod::FINALS),
        }
    }
}

impl std::str::FromStr for GradePeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            GradePeriod::PRELIM => Ok(GradePeriod::Prelim),
            GradePeriod::MIDTERM => Ok(GradePeriod::Midterm),
            GradePeriod::FINALS => Ok(GradePeriod::Finals),
            _ => Err(format!("Invalid grade period: {s}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct Grade {
    pub id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    pub period: GradePeriod,
    // 0 - 100
    pub score: f64,
    pub remark: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_strings() {
        assert_eq!("midterm".parse::<GradePeriod>().unwrap(), GradePeriod::Midterm);
        assert_eq!(GradePeriod::Finals.to_string(), "finals");
        assert!("final".parse::<GradePeriod>().is_err());
    }
}
