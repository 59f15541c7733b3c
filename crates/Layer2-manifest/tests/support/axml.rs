//! 테스트용 바이너리 AXML 생성기
//!
//! aapt 가 만드는 배치(문자열 풀 UTF-16, 리소스 맵, 네임스페이스, 요소 청크)를 그대로 따른다.

#![allow(dead_code)]

const ANDROID_NS: &str = "http://schemas.android.com/apk/res/android";
const NO_INDEX: u32 = u32::MAX;

const RES_XML_TYPE: u16 = 0x0003;
const RES_STRING_POOL_TYPE: u16 = 0x0001;
const RES_XML_RESOURCE_MAP_TYPE: u16 = 0x0180;
const RES_XML_START_NAMESPACE_TYPE: u16 = 0x0100;
const RES_XML_END_NAMESPACE_TYPE: u16 = 0x0101;
const RES_XML_START_ELEMENT_TYPE: u16 = 0x0102;
const RES_XML_END_ELEMENT_TYPE: u16 = 0x0103;

/// android.R.attr.name
const ATTR_NAME_RES_ID: u32 = 0x0101_0003;

/// 요소 이벤트. `name` 은 `android:name` 속성 값
pub enum Event<'a> {
    Start { tag: &'a str, name: Option<&'a str> },
    End(&'a str),
}

pub fn start<'a>(tag: &'a str, name: Option<&'a str>) -> Event<'a> {
    Event::Start { tag, name }
}

pub fn end(tag: &str) -> Event<'_> {
    Event::End(tag)
}

/// `<manifest>` 바로 아래에 `uses-permission` 만 있는 문서
pub fn manifest(permissions: &[&str]) -> Vec<u8> {
    let mut events = vec![start("manifest", None)];
    for name in permissions {
        events.push(start("uses-permission", Some(*name)));
        events.push(end("uses-permission"));
    }
    events.push(end("manifest"));
    document(&events)
}

/// 이벤트 목록을 완전한 AXML 문서로 인코딩
pub fn document(events: &[Event]) -> Vec<u8> {
    let mut strings = Strings::default();
    let prefix = strings.index("android");
    let uri = strings.index(ANDROID_NS);
    let name_attr = strings.index("name");

    let mut namespace = Vec::new();
    push_u32(&mut namespace, prefix);
    push_u32(&mut namespace, uri);

    let mut nodes = node(RES_XML_START_NAMESPACE_TYPE, &namespace);
    for event in events {
        match event {
            Event::Start { tag, name } => {
                let tag = strings.index(tag);
                let mut ext = Vec::new();
                push_u32(&mut ext, NO_INDEX);
                push_u32(&mut ext, tag);
                push_u16(&mut ext, 20); // attributeStart
                push_u16(&mut ext, 20); // attributeSize
                push_u16(&mut ext, u16::from(name.is_some()));
                push_u16(&mut ext, 0);
                push_u16(&mut ext, 0);
                push_u16(&mut ext, 0);
                if let Some(value) = name {
                    let value = strings.index(value);
                    push_u32(&mut ext, uri);
                    push_u32(&mut ext, name_attr);
                    push_u32(&mut ext, value);
                    push_u16(&mut ext, 8);
                    ext.push(0);
                    ext.push(0x03); // TYPE_STRING
                    push_u32(&mut ext, value);
                }
                nodes.extend(node(RES_XML_START_ELEMENT_TYPE, &ext));
            }
            Event::End(tag) => {
                let tag = strings.index(tag);
                let mut ext = Vec::new();
                push_u32(&mut ext, NO_INDEX);
                push_u32(&mut ext, tag);
                nodes.extend(node(RES_XML_END_ELEMENT_TYPE, &ext));
            }
        }
    }
    nodes.extend(node(RES_XML_END_NAMESPACE_TYPE, &namespace));

    let mut resource_ids = Vec::new();
    for id in [0, 0, ATTR_NAME_RES_ID] {
        push_u32(&mut resource_ids, id);
    }

    let mut body = string_pool(&strings.0);
    body.extend(chunk(RES_XML_RESOURCE_MAP_TYPE, 8, &resource_ids));
    body.extend(nodes);
    chunk(RES_XML_TYPE, 8, &body)
}

/// 문자열 풀 청크의 styleCount 위치 (파일 헤더 8 + 청크 헤더 8 + stringCount 4)
pub const STYLE_COUNT_OFFSET: usize = 20;

#[derive(Default)]
struct Strings(Vec<String>);

impl Strings {
    fn index(&mut self, s: &str) -> u32 {
        let i = match self.0.iter().position(|x| x == s) {
            Some(i) => i,
            None => {
                self.0.push(s.to_string());
                self.0.len() - 1
            }
        };
        i as u32
    }
}

fn string_pool(strings: &[String]) -> Vec<u8> {
    let mut offsets = Vec::new();
    let mut data = Vec::new();
    for s in strings {
        push_u32(&mut offsets, data.len() as u32);
        let units: Vec<u16> = s.encode_utf16().collect();
        push_u16(&mut data, units.len() as u16);
        for unit in units {
            push_u16(&mut data, unit);
        }
        push_u16(&mut data, 0);
    }
    while data.len() % 4 != 0 {
        data.push(0);
    }

    let mut body = Vec::new();
    push_u32(&mut body, strings.len() as u32);
    push_u32(&mut body, 0); // styleCount
    push_u32(&mut body, 0); // flags: UTF-16
    push_u32(&mut body, (28 + offsets.len()) as u32); // stringsStart
    push_u32(&mut body, 0); // stylesStart
    body.extend(offsets);
    body.extend(data);
    chunk(RES_STRING_POOL_TYPE, 28, &body)
}

fn node(typ: u16, ext: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    push_u32(&mut body, 1); // lineNumber
    push_u32(&mut body, NO_INDEX); // comment
    body.extend_from_slice(ext);
    chunk(typ, 16, &body)
}

fn chunk(typ: u16, header_size: u16, body: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(8 + body.len());
    push_u16(&mut out, typ);
    push_u16(&mut out, header_size);
    push_u32(&mut out, (8 + body.len()) as u32);
    out.extend_from_slice(body);
    out
}

fn push_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_le_bytes());
}

fn push_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}
