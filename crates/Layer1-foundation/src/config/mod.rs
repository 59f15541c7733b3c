//! Config - 설정 관리
//!
//! - `settings.rs` - ApkpermConfig (사용자 정의 권한, 색상, gating 기본값)

mod settings;

pub use settings::{ApkpermConfig, CustomPermission, CONFIG_FILE};
