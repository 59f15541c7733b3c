//! 매니페스트 디코딩
//!
//! 바이너리 XML 청크 헤더(RES_XML_TYPE)로 시작하면 AXML, 아니면 텍스트 XML.

mod binary;
mod text;

#[cfg(test)]
#[path = "../../tests/support/axml.rs"]
mod axml;

use apkperm_foundation::Result;
use std::collections::BTreeSet;

/// Android 리소스 네임스페이스
pub const ANDROID_NAMESPACE: &str = "http://schemas.android.com/apk/res/android";

/// `<manifest>` 바로 아래에서 권한을 선언하는 태그
pub const PERMISSION_TAGS: [&str; 2] = ["uses-permission", "uses-permission-sdk-23"];

/// RES_XML_TYPE (0x0003) + header size (0x0008), little-endian
const AXML_MAGIC: [u8; 4] = [0x03, 0x00, 0x08, 0x00];

/// 바이너리 AXML 인지
pub fn is_binary_xml(data: &[u8]) -> bool {
    data.starts_with(&AXML_MAGIC)
}

/// 매니페스트 바이트에서 권한 이름 추출 (중복 제거, 정렬)
pub fn parse_permissions(data: &[u8]) -> Result<BTreeSet<String>> {
    if is_binary_xml(data) {
        tracing::debug!("Decoding binary AXML manifest ({} bytes)", data.len());
        binary::parse(data)
    } else {
        tracing::debug!("Parsing text XML manifest ({} bytes)", data.len());
        text::parse(data)
    }
}

fn is_permission_tag(tag: &str) -> bool {
    PERMISSION_TAGS.contains(&tag)
}

/// 공백 제거 후 비어 있지 않으면 추가
fn insert_name(out: &mut BTreeSet<String>, raw: &str) {
    let name = raw.trim();
    if !name.is_empty() {
        out.insert(name.to_string());
    }
}
