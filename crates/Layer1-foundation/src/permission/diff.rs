//! 권한 집합 비교 (release gating 용)

use super::classifier::Classifier;
use super::types::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 두 버전 사이의 권한 변화
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionDiff {
    /// target에만 있는 권한
    pub added: BTreeSet<String>,

    /// base에만 있는 권한
    pub removed: BTreeSet<String>,

    /// added 중 dangerous 수준
    pub new_dangerous: BTreeSet<String>,
}

impl PermissionDiff {
    pub fn compute(
        base: &BTreeSet<String>,
        target: &BTreeSet<String>,
        classifier: &Classifier,
    ) -> Self {
        let added: BTreeSet<String> = target.difference(base).cloned().collect();
        let removed: BTreeSet<String> = base.difference(target).cloned().collect();
        let new_dangerous = added
            .iter()
            .filter(|name| classifier.classify(name).category == Category::Dangerous)
            .cloned()
            .collect();

        Self {
            added,
            removed,
            new_dangerous,
        }
    }

    /// 추가/삭제가 모두 없는지
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    pub fn has_new_dangerous(&self) -> bool {
        !self.new_dangerous.is_empty()
    }
}

/// 내장 테이블 기준 비교
pub fn diff(base: &BTreeSet<String>, target: &BTreeSet<String>) -> PermissionDiff {
    PermissionDiff::compute(base, target, &Classifier::builtin())
}
