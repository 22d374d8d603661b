// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary encoding primitives: varints and length-prefixed strings.
//!
//! Every string field is written as a varint byte length followed by the raw
//! UTF-8 bytes. Since nothing is delimited, nothing needs escaping: a title
//! full of quotes, pipes or newlines stores and loads unchanged.
//!
//! # References
//!
//! - **Varint (LEB128)**: Little-endian base-128 variable-length integer encoding.
//!   Originally from DWARF debugging format (1992+), popularized by Protocol Buffers.
//!   See: DWARF4 specification §7.6 "Variable Length Data", and
//!   Google Protocol Buffers encoding: <https://protobuf.dev/programming-guides/encoding/>

use std::io;

use super::header::MAX_VARINT_BYTES;
use crate::types::{count_words, Document};

// ============================================================================
// VARINT ENCODING
// ============================================================================

/// Encode a varint to bytes
pub fn encode_varint(mut value: u64, buf: &mut Vec<u8>) {
    loop {
        let byte = (value & 0x7F) as u8;
        value >>= 7;
        if value == 0 {
            buf.push(byte);
            break;
        } else {
            buf.push(byte | 0x80);
        }
    }
}

/// Decode a varint from bytes, returning (value, bytes_consumed)
///
/// Returns an error if:
/// - Buffer is empty
/// - Varint exceeds MAX_VARINT_BYTES (malformed/malicious input)
pub fn decode_varint(bytes: &[u8]) -> io::Result<(u64, usize)> {
    if bytes.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "Empty buffer for varint",
        ));
    }

    let mut result: u64 = 0;
    let mut shift = 0;
    let mut i = 0;

    while i < bytes.len() && i < MAX_VARINT_BYTES {
        let byte = bytes[i];
        // The tenth byte may only contribute the top bit of a u64
        if shift == 63 && byte > 1 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Varint overflows u64",
            ));
        }
        result |= ((byte & 0x7F) as u64) << shift;
        i += 1;
        if byte & 0x80 == 0 {
            return Ok((result, i));
        }
        shift += 7;
    }

    if i >= MAX_VARINT_BYTES {
        Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "Varint exceeds maximum length (possible corruption)",
        ))
    } else {
        Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "Incomplete varint",
        ))
    }
}

// ============================================================================
// STRINGS
// ============================================================================

/// Write a length-prefixed UTF-8 string
pub fn encode_string(s: &str, buf: &mut Vec<u8>) {
    let bytes = s.as_bytes();
    encode_varint(bytes.len() as u64, buf);
    buf.extend_from_slice(bytes);
}

/// Read a length-prefixed UTF-8 string, returning (string, bytes_consumed)
pub fn decode_string(bytes: &[u8]) -> io::Result<(String, usize)> {
    let (len, mut pos) = decode_varint(bytes)?;
    let len = usize::try_from(len).map_err(|_| {
        io::Error::new(io::ErrorKind::InvalidData, "String length overflows usize")
    })?;

    let end = pos.checked_add(len).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("String length {} causes overflow", len),
        )
    })?;
    let raw = bytes.get(pos..end).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!(
                "String of {} bytes truncated ({} available)",
                len,
                bytes.len().saturating_sub(pos)
            ),
        )
    })?;

    let s = std::str::from_utf8(raw)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("Invalid UTF-8: {}", e)))?
        .to_string();
    pos = end;
    Ok((s, pos))
}

// ============================================================================
// DOCUMENT SECTION
// ============================================================================

/// Encode documents in insertion order.
///
/// Format per document:
/// - title: varint_len + utf8
/// - body: varint_len + utf8
/// - path: varint_len + utf8
/// - word_count: varint
pub fn encode_documents(docs: &[Document], buf: &mut Vec<u8>) {
    for doc in docs {
        encode_string(&doc.title, buf);
        encode_string(&doc.body, buf);
        encode_string(&doc.path, buf);
        encode_varint(u64::from(doc.word_count), buf);
    }
}

/// Decode exactly `count` documents, requiring the section to be consumed
/// completely.
pub fn decode_documents(bytes: &[u8], count: usize) -> io::Result<Vec<Document>> {
    // Each document needs at least 4 bytes (three empty strings + a varint)
    if count > bytes.len() / 4 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "Document count {} exceeds what {} bytes can hold",
                count,
                bytes.len()
            ),
        ));
    }

    let mut docs = Vec::with_capacity(count);
    let mut pos = 0;

    for i in 0..count {
        let (title, used) = decode_string(&bytes[pos..]).map_err(|e| at_document(i, e))?;
        pos += used;
        let (body, used) = decode_string(&bytes[pos..]).map_err(|e| at_document(i, e))?;
        pos += used;
        let (path, used) = decode_string(&bytes[pos..]).map_err(|e| at_document(i, e))?;
        pos += used;
        let (word_count, used) = decode_varint(&bytes[pos..]).map_err(|e| at_document(i, e))?;
        pos += used;

        let word_count = u32::try_from(word_count).map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Document {} word count {} overflows u32", i, word_count),
            )
        })?;
        if word_count != count_words(&body) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Document {} word count {} disagrees with its body",
                    i, word_count
                ),
            ));
        }

        docs.push(Document {
            title,
            body,
            path,
            word_count,
        });
    }

    if pos != bytes.len() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "{} trailing bytes after {} documents",
                bytes.len() - pos,
                count
            ),
        ));
    }

    Ok(docs)
}

fn at_document(index: usize, e: io::Error) -> io::Error {
    io::Error::new(e.kind(), format!("Document {}: {}", index, e))
}
