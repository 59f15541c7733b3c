//! apkperm 설정
//!
//! 글로벌(<config_dir>/apkperm/config.json) → 프로젝트(.apkperm/config.json)
//! → `--config` 파일 순으로 병합한다. 뒤에 오는 쪽이 우선.

use crate::permission::{Category, Classifier, PermissionDef};
use crate::storage::{read_json, JsonStore};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// 설정 파일명
pub const CONFIG_FILE: &str = "config.json";

/// 사용자 정의 권한 (customPermissions 값)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomPermission {
    pub category: Category,

    /// 생략 시 "CUSTOM"
    #[serde(default = "default_group")]
    pub group: String,
}

fn default_group() -> String {
    "CUSTOM".to_string()
}

/// apkperm 통합 설정
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApkpermConfig {
    /// 내장 테이블 확장/덮어쓰기 (name -> 분류)
    #[serde(default)]
    pub custom_permissions: BTreeMap<String, CustomPermission>,

    /// 색상 비활성화
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_color: Option<bool>,

    /// 새 dangerous 권한 발견 시 exit 3
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on_new_dangerous: Option<bool>,
}

impl ApkpermConfig {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Load
    // ========================================================================

    /// 글로벌 + 프로젝트 + (선택) 명시 파일 병합 로드
    ///
    /// 글로벌/프로젝트 파일 오류는 경고만 남기고 건너뛴다.
    /// 명시한 파일의 오류는 그대로 반환한다.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = Self::new();

        if let Ok(global) = JsonStore::global() {
            config.merge_store(&global);
        }
        if let Ok(project) = JsonStore::current_project() {
            config.merge_store(&project);
        }

        if let Some(path) = explicit {
            tracing::debug!("Loading config from {}", path.display());
            let file: ApkpermConfig = read_json(path)?;
            config.merge(file);
        }

        Ok(config)
    }

    fn merge_store(&mut self, store: &JsonStore) {
        match store.load_optional::<ApkpermConfig>(CONFIG_FILE) {
            Ok(Some(loaded)) => {
                tracing::debug!("Loaded config from {}", store.file_path(CONFIG_FILE).display());
                self.merge(loaded);
            }
            Ok(None) => {}
            Err(e) => tracing::warn!("Skipping config: {}", e),
        }
    }

    // ========================================================================
    // Merge
    // ========================================================================

    /// 다른 설정과 병합 (other가 우선)
    pub fn merge(&mut self, other: ApkpermConfig) {
        self.custom_permissions.extend(other.custom_permissions);
        if other.no_color.is_some() {
            self.no_color = other.no_color;
        }
        if other.fail_on_new_dangerous.is_some() {
            self.fail_on_new_dangerous = other.fail_on_new_dangerous;
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn no_color(&self) -> bool {
        self.no_color.unwrap_or(false)
    }

    pub fn fail_on_new_dangerous(&self) -> bool {
        self.fail_on_new_dangerous.unwrap_or(false)
    }

    /// 사용자 정의 항목을 테이블 항목으로 변환
    pub fn custom_defs(&self) -> Vec<PermissionDef> {
        self.custom_permissions
            .iter()
            .map(|(name, custom)| PermissionDef::new(name, custom.category, custom.group.clone()))
            .collect()
    }

    /// 설정이 반영된 분류기
    pub fn classifier(&self) -> Classifier {
        Classifier::with_overrides(self.custom_defs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "customPermissions": {
                "com.example.permission.PAY": { "category": "dangerous", "group": "PAYMENTS" },
                "com.example.permission.PING": { "category": "normal" }
            },
            "noColor": true
        }"#;
        let config: ApkpermConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.custom_permissions.len(), 2);
        assert_eq!(
            config.custom_permissions["com.example.permission.PING"].group,
            "CUSTOM"
        );
        assert!(config.no_color());
        assert!(!config.fail_on_new_dangerous());
    }

    #[test]
    fn test_unknown_category_rejected() {
        let json = r#"{ "customPermissions": { "x": { "category": "critical" } } }"#;
        assert!(serde_json::from_str::<ApkpermConfig>(json).is_err());
    }

    #[test]
    fn test_merge_later_wins() {
        let mut base: ApkpermConfig = serde_json::from_str(
            r#"{ "noColor": true, "failOnNewDangerous": true,
                 "customPermissions": { "a": { "category": "normal" } } }"#,
        )
        .unwrap();
        let other: ApkpermConfig = serde_json::from_str(
            r#"{ "noColor": false,
                 "customPermissions": { "a": { "category": "signature" }, "b": { "category": "dangerous" } } }"#,
        )
        .unwrap();

        base.merge(other);
        assert!(!base.no_color());
        assert!(base.fail_on_new_dangerous());
        assert_eq!(base.custom_permissions["a"].category, Category::Signature);
        assert_eq!(base.custom_permissions.len(), 2);
    }

    #[test]
    fn test_classifier_uses_custom_permissions() {
        let config: ApkpermConfig = serde_json::from_str(
            r#"{ "customPermissions": { "com.example.permission.PAY": { "category": "dangerous", "group": "PAYMENTS" } } }"#,
        )
        .unwrap();
        let record = config.classifier().classify("com.example.permission.PAY");
        assert_eq!(record.category, Category::Dangerous);
        assert_eq!(record.group, "PAYMENTS");
        assert!(record.sensitive);
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("apkperm.json");
        std::fs::write(&path, r#"{ "failOnNewDangerous": true }"#).unwrap();

        let config = ApkpermConfig::load(Some(&path)).unwrap();
        assert!(config.fail_on_new_dangerous());
    }

    #[test]
    fn test_load_explicit_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        assert!(ApkpermConfig::load(Some(&path)).is_err());
    }
}
