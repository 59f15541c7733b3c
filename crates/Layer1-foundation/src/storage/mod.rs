//! Storage module for apkperm
//!
//! - `json`: JSON - 설정 로드, 리포트 저장

mod json;

pub use json::{read_json, write_json, JsonStore};
