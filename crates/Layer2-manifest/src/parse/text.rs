//! 텍스트 XML 매니페스트 (quick-xml)

use super::{insert_name, is_permission_tag, ANDROID_NAMESPACE};
use apkperm_foundation::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;
use std::collections::BTreeSet;

pub(super) fn parse(data: &[u8]) -> Result<BTreeSet<String>> {
    let mut reader = NsReader::from_reader(data);
    let mut buf = Vec::new();
    let mut permissions = BTreeSet::new();
    let mut depth = 0usize;
    let mut saw_root = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(element)) => {
                if depth == 1 {
                    collect(&reader, &element, &mut permissions)?;
                }
                saw_root = true;
                depth += 1;
            }
            Ok(Event::Empty(element)) => {
                if depth == 1 {
                    collect(&reader, &element, &mut permissions)?;
                }
                saw_root = true;
            }
            Ok(Event::End(_)) => depth = depth.saturating_sub(1),
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(Error::ManifestParse(format!(
                    "XML error at byte {}: {}",
                    reader.buffer_position(),
                    e
                )));
            }
        }
        buf.clear();
    }

    if !saw_root {
        return Err(Error::ManifestParse("no root element".to_string()));
    }
    if depth != 0 {
        return Err(Error::ManifestParse(
            "unexpected end of document (unclosed element)".to_string(),
        ));
    }
    Ok(permissions)
}

/// `<uses-permission android:name="...">` 의 이름 수집
fn collect(
    reader: &NsReader<&[u8]>,
    element: &BytesStart<'_>,
    out: &mut BTreeSet<String>,
) -> Result<()> {
    let tag = element.name();
    let Ok(tag) = std::str::from_utf8(tag.as_ref()) else {
        return Ok(());
    };
    if !is_permission_tag(tag) {
        return Ok(());
    }

    for attr in element.attributes() {
        let attr = attr.map_err(|e| Error::ManifestParse(format!("bad attribute in <{}>: {}", tag, e)))?;
        let (namespace, local) = reader.resolve_attribute(attr.key);
        let in_android_ns = matches!(
            namespace,
            ResolveResult::Bound(Namespace(uri)) if uri == ANDROID_NAMESPACE.as_bytes()
        );
        if in_android_ns && local.as_ref() == b"name" {
            let value = attr
                .unescape_value()
                .map_err(|e| Error::ManifestParse(format!("bad android:name in <{}>: {}", tag, e)))?;
            insert_name(out, &value);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<manifest xmlns:android="http://schemas.android.com/apk/res/android"
    package="com.example.app">
    <uses-permission android:name="android.permission.INTERNET" />
    <uses-permission android:name="  android.permission.CAMERA  " />
    <uses-permission-sdk-23 android:name="android.permission.ACCESS_FINE_LOCATION" />
    <uses-permission android:name="android.permission.INTERNET"></uses-permission>
    <uses-permission android:name="" />
    <uses-feature android:name="android.hardware.camera" />
    <permission android:name="com.example.app.permission.OWN" />
    <application android:label="Example">
        <uses-permission android:name="android.permission.NESTED_IGNORED" />
        <activity android:name=".MainActivity" />
    </application>
</manifest>
"#;

    #[test]
    fn test_extracts_direct_children_only() {
        let names = parse(MANIFEST.as_bytes()).unwrap();
        let got: Vec<_> = names.iter().map(String::as_str).collect();
        assert_eq!(
            got,
            vec![
                "android.permission.ACCESS_FINE_LOCATION",
                "android.permission.CAMERA",
                "android.permission.INTERNET",
            ]
        );
    }

    #[test]
    fn test_namespace_prefix_is_resolved() {
        let xml = r#"<manifest xmlns:a="http://schemas.android.com/apk/res/android"
                               xmlns:other="urn:other">
            <uses-permission a:name="android.permission.READ_SMS"/>
            <uses-permission other:name="android.permission.SEND_SMS"/>
            <uses-permission name="android.permission.CALL_PHONE"/>
        </manifest>"#;
        let names = parse(xml.as_bytes()).unwrap();
        assert_eq!(names.len(), 1);
        assert!(names.contains("android.permission.READ_SMS"));
    }

    #[test]
    fn test_escaped_values() {
        let xml = r#"<manifest xmlns:android="http://schemas.android.com/apk/res/android">
            <uses-permission android:name="com.example.A&amp;B"/>
        </manifest>"#;
        let names = parse(xml.as_bytes()).unwrap();
        assert!(names.contains("com.example.A&B"));
    }

    #[test]
    fn test_manifest_without_permissions() {
        let names = parse(b"<manifest package=\"x\"><application/></manifest>").unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_malformed_xml() {
        assert!(parse(b"<manifest><uses-permission></manifest>").is_err());
        assert!(parse(b"<manifest>").is_err());
    }

    #[test]
    fn test_empty_document() {
        let err = parse(b"").unwrap_err();
        assert!(err.to_string().contains("no root element"));
    }
}
