//! 권한 분류기
//!
//! 내장 테이블 위에 사용자 정의 항목(설정의 `customPermissions`)을 덮어쓴다.

use super::diff::PermissionDiff;
use super::table::{self, BUILTIN_PERMISSIONS};
use super::types::{PermissionDef, PermissionRecord};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// 권한 분류기
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    /// 사용자 정의 항목 (name -> PermissionDef), 내장 항목보다 우선
    overrides: HashMap<String, PermissionDef>,
}

impl Classifier {
    /// 내장 테이블만 사용
    pub fn builtin() -> Self {
        Self::default()
    }

    /// 사용자 정의 항목을 덮어쓴 분류기
    pub fn with_overrides(defs: impl IntoIterator<Item = PermissionDef>) -> Self {
        let overrides = defs
            .into_iter()
            .map(|def| (def.name.clone(), def))
            .collect();
        Self { overrides }
    }

    /// 사용자 정의 항목 개수
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    /// 권한 하나 분류. 테이블에 없으면 unknown.
    pub fn classify(&self, name: &str) -> PermissionRecord {
        if let Some(def) = self.overrides.get(name) {
            return PermissionRecord::from(def);
        }
        match table::lookup(name) {
            Some((category, group)) => PermissionRecord::new(name, category, group),
            None => PermissionRecord::unknown(name),
        }
    }

    /// 순서를 유지하며 여러 권한 분류
    pub fn classify_all<I, S>(&self, names: I) -> Vec<PermissionRecord>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| self.classify(name.as_ref()))
            .collect()
    }

    /// 두 권한 집합 비교 (이 분류기의 테이블로 newDangerous 판정)
    pub fn diff(&self, base: &BTreeSet<String>, target: &BTreeSet<String>) -> PermissionDiff {
        PermissionDiff::compute(base, target, self)
    }

    /// 알려진 모든 항목 (내장 + 사용자 정의), 이름순
    pub fn known(&self) -> Vec<PermissionRecord> {
        let mut all: BTreeMap<&str, PermissionRecord> = BUILTIN_PERMISSIONS
            .iter()
            .map(|&(name, category, group)| (name, PermissionRecord::new(name, category, group)))
            .collect();
        for (name, def) in &self.overrides {
            all.insert(name.as_str(), PermissionRecord::from(def));
        }
        all.into_values().collect()
    }
}
