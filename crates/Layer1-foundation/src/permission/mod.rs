//! Permission classification for apkperm
//!
//! - `types`: 보호 수준, 분류 결과, 테이블 항목
//! - `table`: 내장 분류 테이블 (static, 한 번만 인덱싱)
//! - `classifier`: 분류기 (내장 + 사용자 정의)
//! - `diff`: 두 버전 비교 (added / removed / newDangerous)
//! - `filter`: 카테고리 필터
//!
//! ## 사용 예시
//!
//! ```rust,ignore
//! use apkperm_foundation::permission::{classify, diff, filter, Category};
//!
//! let record = classify("android.permission.CAMERA");
//! assert_eq!(record.category, Category::Dangerous);
//!
//! let d = diff(&base, &target);
//! if d.has_new_dangerous() {
//!     // release 차단
//! }
//! ```

mod classifier;
mod diff;
mod filter;
mod table;
mod types;

pub use classifier::Classifier;
pub use diff::{diff, PermissionDiff};
pub use filter::{filter, filter_any};
pub use table::{lookup, BuiltinEntry, BUILTIN_PERMISSIONS};
pub use types::{Category, PermissionDef, PermissionRecord, UNKNOWN_GROUP};

/// 내장 테이블 기준 분류
pub fn classify(name: &str) -> PermissionRecord {
    Classifier::builtin().classify(name)
}
