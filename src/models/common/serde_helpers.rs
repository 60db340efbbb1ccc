//! 反序列化辅助函数

use serde::{Deserialize, Deserializer};

/// 区分“字段缺失”与“显式 null”
///
/// 配合 `#[serde(default, deserialize_with = "deserialize_some")]` 用在
/// `Option<Option<T>>` 字段上：缺失 → `None`，`null` → `Some(None)`，
/// 有值 → `Some(Some(v))`。部分更新接口借此支持清空可空外键。
pub fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "deserialize_some")]
        section_id: Option<Option<i64>>,
    }

    #[test]
    fn test_missing_null_and_value_are_distinct() {
        let missing: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.section_id, None);

        let cleared: Patch = serde_json::from_str(r#"{"section_id": null}"#).unwrap();
        assert_eq!(cleared.section_id, Some(None));

        let set: Patch = serde_json::from_str(r#"{"section_id": 7}"#).unwrap();
        assert_eq!(set.section_id, Some(Some(7)));
    }
}
