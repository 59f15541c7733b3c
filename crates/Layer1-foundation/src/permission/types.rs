//! 권한 타입 정의
//!
//! Android 보호 수준(Category), 분류 결과(PermissionRecord),
//! 테이블 항목(PermissionDef)

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 알 수 없는 권한의 그룹 이름
pub const UNKNOWN_GROUP: &str = "UNKNOWN";

/// Android 권한 보호 수준
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Normal,
    Dangerous,
    Signature,
    Unknown,
}

impl Category {
    /// 모든 카테고리 (표시 순서)
    pub const ALL: [Category; 4] = [
        Category::Normal,
        Category::Dangerous,
        Category::Signature,
        Category::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Normal => "normal",
            Category::Dangerous => "dangerous",
            Category::Signature => "signature",
            Category::Unknown => "unknown",
        }
    }

    /// dangerous 또는 signature 수준인지
    pub fn is_sensitive(&self) -> bool {
        matches!(self, Category::Dangerous | Category::Signature)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| {
                Error::InvalidInput(format!(
                    "unknown category '{}' (expected one of: normal, dangerous, signature, unknown)",
                    s
                ))
            })
    }
}

/// 분류 테이블 항목 (내장 테이블 또는 사용자 정의)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionDef {
    /// 권한 이름 (예: "android.permission.CAMERA")
    pub name: String,

    /// 보호 수준
    pub category: Category,

    /// 그룹 라벨 (예: "CAMERA", "LOCATION")
    pub group: String,
}

impl PermissionDef {
    pub fn new(name: impl Into<String>, category: Category, group: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category,
            group: group.into(),
        }
    }
}

/// 분류된 권한
///
/// 분류 이후에는 변경되지 않는다. `sensitive`는 항상 `category`에서 파생된다.
/// 출력 전용이라 역직렬화는 지원하지 않는다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionRecord {
    pub name: String,
    pub category: Category,
    pub group: String,
    pub sensitive: bool,
}

impl PermissionRecord {
    pub fn new(name: impl Into<String>, category: Category, group: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category,
            group: group.into(),
            sensitive: category.is_sensitive(),
        }
    }

    /// 테이블에 없는 권한
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::new(name, Category::Unknown, UNKNOWN_GROUP)
    }
}

impl From<&PermissionDef> for PermissionRecord {
    fn from(def: &PermissionDef) -> Self {
        Self::new(def.name.clone(), def.category, def.group.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!("dangerous".parse::<Category>().unwrap(), Category::Dangerous);
        assert_eq!("Signature".parse::<Category>().unwrap(), Category::Signature);
        assert_eq!(" normal ".parse::<Category>().unwrap(), Category::Normal);
        assert!("critical".parse::<Category>().is_err());
    }

    #[test]
    fn test_sensitive_follows_category() {
        assert!(PermissionRecord::new("a", Category::Dangerous, "X").sensitive);
        assert!(PermissionRecord::new("a", Category::Signature, "X").sensitive);
        assert!(!PermissionRecord::new("a", Category::Normal, "X").sensitive);
        assert!(!PermissionRecord::unknown("a").sensitive);
    }

    #[test]
    fn test_record_serialization() {
        let record = PermissionRecord::new("android.permission.CAMERA", Category::Dangerous, "CAMERA");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "android.permission.CAMERA",
                "category": "dangerous",
                "group": "CAMERA",
                "sensitive": true
            })
        );
    }
}
