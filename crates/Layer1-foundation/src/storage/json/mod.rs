//! JSON 파일 입출력

mod store;

pub use store::{read_json, write_json, JsonStore};
