//! JSON 리포트 (`-o` 출력)

use crate::permission::{PermissionDiff, PermissionRecord};
use crate::storage::write_json;
use crate::Result;
use serde::Serialize;
use std::path::Path;

/// 분석 리포트
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub permissions: Vec<PermissionRecord>,

    /// 비교 대상이 있을 때만 포함
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<PermissionDiff>,
}

impl Report {
    pub fn new(permissions: Vec<PermissionRecord>) -> Self {
        Self {
            permissions,
            diff: None,
        }
    }

    pub fn with_diff(mut self, diff: PermissionDiff) -> Self {
        self.diff = Some(diff);
        self
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        write_json(path, self)?;
        tracing::info!("Report written to {}", path.display());
        Ok(())
    }
}
