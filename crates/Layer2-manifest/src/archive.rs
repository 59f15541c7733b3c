//! APK(zip) 에서 AndroidManifest.xml 꺼내기

use apkperm_foundation::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::result::ZipError;
use zip::ZipArchive;

/// APK 안의 매니페스트 경로
pub const ANDROID_MANIFEST: &str = "AndroidManifest.xml";

/// 매니페스트 크기 상한. zip 헤더의 선언 크기는 믿지 않는다.
const MAX_MANIFEST_BYTES: u64 = 16 * 1024 * 1024;

/// APK 파일에서 매니페스트 원본 바이트를 읽는다.
pub fn read_manifest_from_apk(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(Error::NotFound(format!("APK file {}", path.display())));
    }

    let file = File::open(path).map_err(|e| Error::archive(path.display().to_string(), e.to_string()))?;
    let mut archive =
        ZipArchive::new(file).map_err(|e| Error::archive(path.display().to_string(), e.to_string()))?;

    let mut entry = match archive.by_name(ANDROID_MANIFEST) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => {
            return Err(Error::archive(
                path.display().to_string(),
                format!("{} not found in archive", ANDROID_MANIFEST),
            ));
        }
        Err(e) => return Err(Error::archive(path.display().to_string(), e.to_string())),
    };

    let declared = entry.size();
    let data = read_bounded(&mut entry, declared)
        .map_err(|message| Error::archive(path.display().to_string(), message))?;

    tracing::debug!(
        "Read {} ({} bytes) from {}",
        ANDROID_MANIFEST,
        data.len(),
        path.display()
    );
    Ok(data)
}

/// 최대 [`MAX_MANIFEST_BYTES`] 까지만 읽는다
fn read_bounded(reader: impl Read, declared: u64) -> std::result::Result<Vec<u8>, String> {
    let mut data = Vec::with_capacity(declared.min(MAX_MANIFEST_BYTES) as usize);
    reader
        .take(MAX_MANIFEST_BYTES + 1)
        .read_to_end(&mut data)
        .map_err(|e| e.to_string())?;
    if data.len() as u64 > MAX_MANIFEST_BYTES {
        return Err(format!(
            "{} exceeds {} bytes",
            ANDROID_MANIFEST, MAX_MANIFEST_BYTES
        ));
    }
    Ok(data)
}
