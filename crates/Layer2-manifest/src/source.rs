//! 입력 종류

use crate::archive::read_manifest_from_apk;
use apkperm_foundation::{Error, Result};
use std::fmt;
use std::path::{Path, PathBuf};

/// 권한 추출 대상
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestSource {
    /// APK (zip) 파일
    Apk(PathBuf),
    /// AndroidManifest.xml (텍스트 또는 바이너리)
    Manifest(PathBuf),
}

impl ManifestSource {
    pub fn path(&self) -> &Path {
        match self {
            ManifestSource::Apk(path) | ManifestSource::Manifest(path) => path,
        }
    }

    /// 매니페스트 바이트 읽기
    pub fn read_bytes(&self) -> Result<Vec<u8>> {
        let path = self.path();
        match self {
            ManifestSource::Apk(_) => read_manifest_from_apk(path),
            ManifestSource::Manifest(_) => read_manifest_file(path),
        }
    }
}

fn read_manifest_file(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(Error::NotFound(format!("manifest file {}", path.display())));
    }
    std::fs::read(path).map_err(|e| {
        Error::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })
}

impl fmt::Display for ManifestSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            ManifestSource::Apk(_) => "APK",
            ManifestSource::Manifest(_) => "manifest",
        };
        write!(f, "{} {}", kind, self.path().display())
    }
}
