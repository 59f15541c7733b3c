//! 바이너리 AXML 매니페스트 (axmldecoder)
//!
//! axmldecoder 는 청크 크기와 문자열 인덱스를 검사 없이 믿고 잘못된 입력에서 panic 한다.
//! 디코딩 전에 [`validate`] 로 청크 구조를 먼저 확인한다.

use super::{insert_name, is_permission_tag};
use apkperm_foundation::{Error, Result};
use axmldecoder::Node;
use std::collections::BTreeSet;

/// axmldecoder 는 네임스페이스 접두사를 붙인 속성 이름을 돌려준다
const ANDROID_NAME_ATTR: &str = "android:name";

const RES_XML_TYPE: u16 = 0x0003;
const RES_STRING_POOL_TYPE: u16 = 0x0001;
const RES_XML_RESOURCE_MAP_TYPE: u16 = 0x0180;
const RES_XML_START_NAMESPACE_TYPE: u16 = 0x0100;
const RES_XML_END_NAMESPACE_TYPE: u16 = 0x0101;
const RES_XML_START_ELEMENT_TYPE: u16 = 0x0102;
const RES_XML_END_ELEMENT_TYPE: u16 = 0x0103;
const RES_XML_CDATA_TYPE: u16 = 0x0104;

const CHUNK_HEADER_SIZE: usize = 8;
const STRING_POOL_HEADER_SIZE: usize = 28;
const NODE_HEADER_SIZE: usize = 16;
const ELEMENT_EXT_SIZE: usize = 20;
const ATTRIBUTE_SIZE: usize = 20;

const UTF8_FLAG: u32 = 1 << 8;
const TYPE_STRING: u8 = 0x03;

pub(super) fn parse(data: &[u8]) -> Result<BTreeSet<String>> {
    validate(data)?;

    let doc = axmldecoder::parse(data)
        .map_err(|e| Error::ManifestParse(format!("binary XML: {}", e)))?;

    let root = match doc.get_root() {
        Some(Node::Element(root)) => root,
        Some(other) => {
            return Err(Error::ManifestParse(format!(
                "unexpected root node: {:?}",
                other
            )));
        }
        None => return Err(Error::ManifestParse("no root element".to_string())),
    };

    let mut permissions = BTreeSet::new();
    for node in root.get_children() {
        if let Node::Element(element) = node {
            if !is_permission_tag(element.get_tag()) {
                continue;
            }
            if let Some(name) = element.get_attributes().get(ANDROID_NAME_ATTR) {
                insert_name(&mut permissions, name);
            }
        }
    }
    Ok(permissions)
}

fn malformed(message: impl std::fmt::Display) -> Error {
    Error::ManifestParse(format!("binary XML: {}", message))
}

fn u16_at(data: &[u8], offset: usize) -> Result<u16> {
    offset
        .checked_add(2)
        .and_then(|end| data.get(offset..end))
        .map(|b| u16::from_le_bytes([b[0], b[1]]))
        .ok_or_else(|| malformed(format!("truncated at offset {}", offset)))
}

fn u32_at(data: &[u8], offset: usize) -> Result<u32> {
    offset
        .checked_add(4)
        .and_then(|end| data.get(offset..end))
        .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .ok_or_else(|| malformed(format!("truncated at offset {}", offset)))
}

/// 청크 하나 (헤더 포함 전체 바이트)
struct Chunk<'a> {
    typ: u16,
    header_size: usize,
    bytes: &'a [u8],
}

fn chunk_at(data: &[u8], offset: usize) -> Result<Chunk<'_>> {
    let typ = u16_at(data, offset)?;
    let header_size = u16_at(data, offset + 2)? as usize;
    let size = u32_at(data, offset + 4)? as usize;

    if header_size < CHUNK_HEADER_SIZE || size < header_size {
        return Err(malformed(format!(
            "chunk 0x{:04x} at offset {} has invalid size",
            typ, offset
        )));
    }
    let bytes = offset
        .checked_add(size)
        .and_then(|end| data.get(offset..end))
        .ok_or_else(|| {
            malformed(format!(
                "chunk 0x{:04x} at offset {} exceeds document ({} > {} bytes)",
                typ,
                offset,
                size,
                data.len().saturating_sub(offset)
            ))
        })?;

    Ok(Chunk {
        typ,
        header_size,
        bytes,
    })
}

/// 문서 헤더 -> 문자열 풀 -> 리소스 맵 -> 노드 청크 순서와 각 크기 확인
fn validate(data: &[u8]) -> Result<()> {
    let document = chunk_at(data, 0)?;
    if document.typ != RES_XML_TYPE || document.header_size != CHUNK_HEADER_SIZE {
        return Err(malformed("not an XML document chunk"));
    }
    let data = document.bytes;
    let mut offset = document.header_size;

    let pool = chunk_at(data, offset)?;
    if pool.typ != RES_STRING_POOL_TYPE {
        return Err(malformed("missing string pool"));
    }
    let string_count = validate_string_pool(&pool)?;
    offset += pool.bytes.len();

    let map = chunk_at(data, offset)?;
    if map.typ != RES_XML_RESOURCE_MAP_TYPE
        || map.header_size != CHUNK_HEADER_SIZE
        || (map.bytes.len() - map.header_size) % 4 != 0
    {
        return Err(malformed("missing resource map"));
    }
    offset += map.bytes.len();

    validate_nodes(&data[offset..], string_count)
}

fn validate_string_pool(pool: &Chunk<'_>) -> Result<usize> {
    if pool.header_size != STRING_POOL_HEADER_SIZE {
        return Err(malformed("unsupported string pool header"));
    }
    let bytes = pool.bytes;
    let string_count = u32_at(bytes, 8)? as usize;
    let style_count = u32_at(bytes, 12)?;
    let flags = u32_at(bytes, 16)?;
    let strings_start = u32_at(bytes, 20)? as usize;

    if style_count != 0 {
        return Err(malformed("styled string pool is not supported"));
    }
    let strings = bytes
        .get(strings_start..)
        .filter(|_| strings_start >= STRING_POOL_HEADER_SIZE)
        .ok_or_else(|| malformed("string data out of bounds"))?;

    let utf8 = flags & UTF8_FLAG != 0;
    for i in 0..string_count {
        let offset = u32_at(bytes, STRING_POOL_HEADER_SIZE + i * 4)? as usize;
        let end = if utf8 {
            let len = *strings
                .get(offset + 1)
                .ok_or_else(|| malformed(format!("string {} out of bounds", i)))?;
            if len & 0x80 != 0 {
                return Err(malformed("long strings are not supported"));
            }
            offset + 2 + usize::from(len)
        } else {
            let len = u16_at(strings, offset)?;
            if len & 0x8000 != 0 {
                return Err(malformed("long strings are not supported"));
            }
            offset + 2 + 2 * usize::from(len)
        };
        if end > strings.len() {
            return Err(malformed(format!("string {} out of bounds", i)));
        }
    }
    Ok(string_count)
}

/// 노드 청크는 고정 길이로 읽히므로 선언된 크기가 정확히 맞아야 한다.
/// 루트가 닫힌 뒤의 노드는 디코더가 보지 않으므로 구조만 확인한다.
fn validate_nodes(data: &[u8], string_count: usize) -> Result<()> {
    let mut depth = 0usize;
    let mut closed = false;
    let mut offset = 0;

    while offset < data.len() {
        let node = chunk_at(data, offset)?;
        if node.header_size != NODE_HEADER_SIZE {
            return Err(malformed(format!("node at offset {} has bad header", offset)));
        }

        let expected = match node.typ {
            RES_XML_START_NAMESPACE_TYPE | RES_XML_END_NAMESPACE_TYPE | RES_XML_END_ELEMENT_TYPE => {
                NODE_HEADER_SIZE + 8
            }
            RES_XML_CDATA_TYPE => NODE_HEADER_SIZE + 12,
            RES_XML_START_ELEMENT_TYPE => {
                let count = u16_at(node.bytes, NODE_HEADER_SIZE + 12)? as usize;
                NODE_HEADER_SIZE + ELEMENT_EXT_SIZE + count * ATTRIBUTE_SIZE
            }
            other => {
                return Err(malformed(format!(
                    "unexpected chunk 0x{:04x} at offset {}",
                    other, offset
                )));
            }
        };
        if node.bytes.len() != expected {
            return Err(malformed(format!(
                "node at offset {} has size {} (expected {})",
                offset,
                node.bytes.len(),
                expected
            )));
        }

        if !closed {
            match node.typ {
                RES_XML_START_ELEMENT_TYPE => {
                    validate_attributes(&node, string_count)?;
                    depth += 1;
                }
                RES_XML_END_ELEMENT_TYPE => {
                    if depth == 0 {
                        return Err(malformed("end element without start"));
                    }
                    depth -= 1;
                    closed = depth == 0;
                }
                RES_XML_CDATA_TYPE if depth == 0 => {
                    return Err(malformed("text outside of root element"));
                }
                _ => {}
            }
        }
        offset += node.bytes.len();
    }
    Ok(())
}

/// 문자열 타입 값은 풀 인덱스여야 한다
fn validate_attributes(node: &Chunk<'_>, string_count: usize) -> Result<()> {
    let attributes = &node.bytes[NODE_HEADER_SIZE + ELEMENT_EXT_SIZE..];
    for attribute in attributes.chunks_exact(ATTRIBUTE_SIZE) {
        let data_type = attribute[15];
        let value = u32_at(attribute, 16)? as usize;
        if data_type == TYPE_STRING && value >= string_count {
            return Err(malformed(format!("string index {} out of range", value)));
        }
    }
    Ok(())
}
