//! # apkperm-foundation
//!
//! Foundation layer for apkperm:
//! - Permission: 보호 수준 분류 (내장 테이블 + 사용자 정의), 비교, 필터
//! - Config: 글로벌/프로젝트/명시 파일 병합 설정
//! - Storage: JSON 파일 입출력
//! - Report: `-o` JSON 리포트
//!
//! ## 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  apkperm-cli  (analyze / known)                         │
//! │          │                         │                    │
//! │          ▼                         ▼                    │
//! │  apkperm-manifest           Report (JSON)               │
//! │  (APK / XML / AXML)                │                    │
//! │          │                         │                    │
//! │          ▼                         │                    │
//! │   Classifier ──► Diff ──► Filter ──┘                    │
//! │   (static table + customPermissions)                    │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod permission;
pub mod report;
pub mod storage;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Config (설정)
// ============================================================================
pub use config::{ApkpermConfig, CustomPermission, CONFIG_FILE};

// ============================================================================
// Permission (분류 / 비교 / 필터)
// ============================================================================
pub use permission::{
    classify, diff, filter, filter_any, Category, Classifier, PermissionDef, PermissionDiff,
    PermissionRecord,
};

// ============================================================================
// Report
// ============================================================================
pub use report::Report;
