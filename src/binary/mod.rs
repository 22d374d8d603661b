// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary format for persisted EDAoogle corpora.
//!
//! One file holds every document in insertion order. Order matters: the
//! ranker breaks score ties by it, so a corpus read back from disk must rank
//! exactly like the one that was written.
//!
//! The document section is brotli-compressed by default. HTML-derived text
//! is highly repetitive and a Wikipedia-style corpus shrinks to roughly a
//! fifth of its raw size.
//!
//! # Security Considerations
//!
//! The store is a local file, but it is still parsed defensively:
//! - All size fields are validated against MAX_* constants
//! - Bounds checking prevents buffer overreads
//! - CRC32 footer detects corruption/truncation
//! - Decompression is capped at the `raw_len` recorded in the header
//!
//! # Format Overview (v1)
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │ HEADER (24 bytes)                                          │
//! │   magic: [u8; 4] = "EDAO"                                  │
//! │   version: u8 = 1                                          │
//! │   flags: u8 (bit 0 = brotli)                               │
//! │   reserved: [u8; 2]                                        │
//! │   doc_count: u32, docs_len: u32, raw_len: u32              │
//! │   reserved: [u8; 4]                                        │
//! ├────────────────────────────────────────────────────────────┤
//! │ DOCS (per document: title, body, path, word_count)         │
//! ├────────────────────────────────────────────────────────────┤
//! │ FOOTER (8 bytes): crc32 + magic "OADE"                     │
//! └────────────────────────────────────────────────────────────┘
//! ```

mod encoding;
mod header;

pub use encoding::{
    decode_documents, decode_string, decode_varint, encode_documents, encode_string,
    encode_varint,
};
pub use header::{
    CorpusFooter, CorpusHeader, FormatFlags, FOOTER_MAGIC, FORMAT_NAME, MAGIC, MAX_DOC_COUNT,
    MAX_FILE_SIZE, MAX_RAW_SIZE, MAX_VARINT_BYTES, VERSION,
};

use std::io::{self, Read, Write};

use crate::types::Document;

/// Brotli quality used when writing the document section.
const BROTLI_QUALITY: u32 = 9;

/// Brotli window size (log2).
const BROTLI_LGWIN: u32 = 22;

const BROTLI_BUFFER: usize = 4096;

/// A complete corpus file, split into its sections.
#[derive(Debug)]
pub struct CorpusLayer {
    pub header: CorpusHeader,
    /// Document section exactly as stored (compressed when the flag is set)
    pub docs_bytes: Vec<u8>,
}

impl CorpusLayer {
    /// Encode `docs` into a layer ready to be written.
    pub fn build(docs: &[Document], compress: bool) -> io::Result<Self> {
        let doc_count = u32::try_from(docs.len())
            .ok()
            .filter(|&n| n <= MAX_DOC_COUNT)
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!(
                        "Too many documents: {} (max {})",
                        docs.len(),
                        MAX_DOC_COUNT
                    ),
                )
            })?;

        let mut raw = Vec::new();
        encode_documents(docs, &mut raw);
        let raw_len = section_len(raw.len(), "Document section")?;

        let (flags, docs_bytes) = if compress {
            (FormatFlags::new().with_compression(), compress_brotli(&raw)?)
        } else {
            (FormatFlags::new(), raw)
        };
        let docs_len = section_len(docs_bytes.len(), "Stored document section")?;

        Ok(Self {
            header: CorpusHeader {
                version: VERSION,
                flags,
                doc_count,
                docs_len,
                raw_len,
            },
            docs_bytes,
        })
    }

    /// Serialize header, document section and footer.
    pub fn to_bytes(&self) -> io::Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(self.header.total_size());
        self.header.write(&mut buf)?;
        buf.extend_from_slice(&self.docs_bytes);

        let footer = CorpusFooter {
            crc32: CorpusFooter::compute_crc32(&buf),
        };
        footer.write(&mut buf)?;

        if buf.len() > MAX_FILE_SIZE {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "Corpus too large: {} bytes (max {})",
                    buf.len(),
                    MAX_FILE_SIZE
                ),
            ));
        }
        Ok(buf)
    }

    /// Parse and integrity-check a corpus file without decoding documents.
    pub fn from_bytes(bytes: &[u8]) -> io::Result<Self> {
        // Security: Check file size limits
        if bytes.len() > MAX_FILE_SIZE {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "File too large: {} bytes (max {})",
                    bytes.len(),
                    MAX_FILE_SIZE
                ),
            ));
        }

        // Minimum size: header + footer
        let min_size = CorpusHeader::SIZE + CorpusFooter::SIZE;
        if bytes.len() < min_size {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!(
                    "File too small: {} bytes (minimum {})",
                    bytes.len(),
                    min_size
                ),
            ));
        }

        // Verify footer magic and read CRC32
        let footer = CorpusFooter::read(bytes)?;
        let content = &bytes[..bytes.len() - CorpusFooter::SIZE];
        let computed_crc32 = CorpusFooter::compute_crc32(content);

        if footer.crc32 != computed_crc32 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "CRC32 mismatch: expected {:#010x}, got {:#010x} (file corrupted)",
                    footer.crc32, computed_crc32
                ),
            ));
        }

        let header = CorpusHeader::read(&mut io::Cursor::new(content))?;

        if header.total_size() != bytes.len() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Section lengths describe {} bytes but file has {}",
                    header.total_size(),
                    bytes.len()
                ),
            ));
        }
        if !header.flags.is_compressed() && header.docs_len != header.raw_len {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Uncompressed section length {} disagrees with raw length {}",
                    header.docs_len, header.raw_len
                ),
            ));
        }

        let (start, end) = header.docs_range();
        Ok(Self {
            docs_bytes: bytes[start..end].to_vec(),
            header,
        })
    }

    /// Decode the document section back into documents, in stored order.
    pub fn documents(&self) -> io::Result<Vec<Document>> {
        let raw_len = self.header.raw_len as usize;
        if self.header.flags.is_compressed() {
            let raw = decompress_brotli(&self.docs_bytes, raw_len)?;
            decode_documents(&raw, self.header.doc_count as usize)
        } else {
            decode_documents(&self.docs_bytes, self.header.doc_count as usize)
        }
    }
}

/// Encode documents into a complete corpus file image.
pub fn encode_corpus(docs: &[Document], compress: bool) -> io::Result<Vec<u8>> {
    CorpusLayer::build(docs, compress)?.to_bytes()
}

/// Decode a complete corpus file image.
pub fn decode_corpus(bytes: &[u8]) -> io::Result<Vec<Document>> {
    CorpusLayer::from_bytes(bytes)?.documents()
}

fn section_len(len: usize, what: &str) -> io::Result<u32> {
    u32::try_from(len).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} too large: {} bytes", what, len),
        )
    })
}

fn compress_brotli(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut compressed = Vec::new();
    {
        let mut encoder = brotli::CompressorWriter::new(
            &mut compressed,
            BROTLI_BUFFER,
            BROTLI_QUALITY,
            BROTLI_LGWIN,
        );
        encoder.write_all(data)?;
        encoder.flush()?;
    }
    Ok(compressed)
}

fn decompress_brotli(data: &[u8], raw_len: usize) -> io::Result<Vec<u8>> {
    if raw_len > MAX_RAW_SIZE {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Raw section too large: {} bytes", raw_len),
        ));
    }

    // Read at most one byte past the declared length so overruns are caught
    let mut raw = Vec::with_capacity(raw_len.min(data.len().saturating_mul(16)));
    brotli::Decompressor::new(data, BROTLI_BUFFER)
        .take(raw_len as u64 + 1)
        .read_to_end(&mut raw)?;

    if raw.len() != raw_len {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "Decompressed {} bytes, header declares {}",
                raw.len(),
                raw_len
            ),
        ));
    }
    Ok(raw)
}
