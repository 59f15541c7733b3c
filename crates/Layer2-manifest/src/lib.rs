//! # apkperm-manifest
//!
//! APK 또는 AndroidManifest.xml 에서 권한 목록을 추출한다.
//!
//! - `source`: 입력 종류 (APK / Manifest 파일)
//! - `archive`: APK(zip)에서 AndroidManifest.xml 꺼내기
//! - `parse`: 텍스트 XML(quick-xml) / 바이너리 AXML(axmldecoder) 디코딩
//!
//! ## 사용 예시
//!
//! ```rust,ignore
//! use apkperm_manifest::{extract, ManifestSource};
//!
//! let names = extract(&ManifestSource::Apk("app-release.apk".into()))?;
//! for name in &names {
//!     println!("{}", name);
//! }
//! ```

mod archive;
mod parse;
mod source;

pub use archive::{read_manifest_from_apk, ANDROID_MANIFEST};
pub use parse::{is_binary_xml, parse_permissions, ANDROID_NAMESPACE, PERMISSION_TAGS};
pub use source::ManifestSource;

use apkperm_foundation::Result;
use std::collections::BTreeSet;

/// 입력에서 권한 이름 추출 (중복 제거, 정렬)
pub fn extract(source: &ManifestSource) -> Result<BTreeSet<String>> {
    tracing::debug!("Extracting permissions from {}", source);
    let data = source.read_bytes()?;
    let permissions = parse_permissions(&data)?;
    tracing::debug!("Found {} permission(s) in {}", permissions.len(), source);
    Ok(permissions)
}
