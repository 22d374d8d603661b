// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus file header and footer structures.
//!
//! The header is 24 bytes of fixed-size fields, parsed in one read before
//! anything else. It says how many documents the file holds and how long the
//! document section is, both as stored and once decompressed.
//!
//! The footer is 8 bytes: a CRC32 checksum over everything before it, plus a
//! magic number ("OADE", the header magic reversed). If the footer is wrong,
//! the file was truncated or corrupted and nothing in it is trusted.

use std::io::{self, Read, Write};

use crc32fast::Hasher as Crc32Hasher;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Magic bytes: "EDAO" in ASCII (header)
pub const MAGIC: [u8; 4] = [0x45, 0x44, 0x41, 0x4F];

/// Footer magic: "OADE" (reversed, marks valid file end)
pub const FOOTER_MAGIC: [u8; 4] = [0x4F, 0x41, 0x44, 0x45];

/// Name shown by tooling
pub const FORMAT_NAME: &str = "EDAoogle corpus";

/// Current format version
pub const VERSION: u8 = 1;

// ============================================================================
// SECURITY LIMITS (prevent resource exhaustion from malicious input)
// ============================================================================

/// Maximum file size: 1 GiB
pub const MAX_FILE_SIZE: usize = 1024 * 1024 * 1024;

/// Maximum decompressed document section size: 4 GiB minus one byte
pub const MAX_RAW_SIZE: usize = u32::MAX as usize;

/// Maximum number of documents
pub const MAX_DOC_COUNT: u32 = 10_000_000;

/// Maximum varint bytes (u64 needs at most 10 bytes)
pub const MAX_VARINT_BYTES: usize = 10;

// ============================================================================
// FLAGS
// ============================================================================

/// Format flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatFlags(pub(crate) u8);

impl FormatFlags {
    pub const COMPRESSED: u8 = 0b0000_0001;

    pub fn new() -> Self {
        Self(0)
    }

    pub fn with_compression(mut self) -> Self {
        self.0 |= Self::COMPRESSED;
        self
    }

    pub fn is_compressed(self) -> bool {
        self.0 & Self::COMPRESSED != 0
    }

    /// Any bit this version does not know about.
    pub fn unknown_bits(self) -> u8 {
        self.0 & !Self::COMPRESSED
    }
}

// ============================================================================
// HEADER
// ============================================================================

/// Corpus file header (24 bytes fixed size)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusHeader {
    pub version: u8,
    pub flags: FormatFlags,
    pub doc_count: u32,
    /// Document section length as stored on disk
    pub docs_len: u32,
    /// Document section length after decompression
    pub raw_len: u32,
}

impl CorpusHeader {
    // 4 (magic) + 1 (version) + 1 (flags) + 2 (reserved) + 3*4 (u32s) + 4 (reserved) = 24
    pub const SIZE: usize = 24;

    /// Byte range of the document section within the file.
    pub fn docs_range(&self) -> (usize, usize) {
        (Self::SIZE, Self::SIZE + self.docs_len as usize)
    }

    /// Total file size including footer
    pub fn total_size(&self) -> usize {
        Self::SIZE + self.docs_len as usize + CorpusFooter::SIZE
    }

    pub fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&MAGIC)?;
        w.write_all(&[self.version])?;
        w.write_all(&[self.flags.0])?;
        w.write_all(&[0u8; 2])?; // reserved
        w.write_all(&self.doc_count.to_le_bytes())?;
        w.write_all(&self.docs_len.to_le_bytes())?;
        w.write_all(&self.raw_len.to_le_bytes())?;
        w.write_all(&[0u8; 4])?; // reserved
        Ok(())
    }

    pub fn read<R: Read>(r: &mut R) -> io::Result<Self> {
        let mut magic = [0u8; 4];
        r.read_exact(&mut magic)?;
        if magic != MAGIC {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Invalid magic: expected EDAO, got {:?}", magic),
            ));
        }

        let mut buf = [0u8; 20]; // 24 - 4 (magic)
        r.read_exact(&mut buf)?;

        let header = Self {
            version: buf[0],
            flags: FormatFlags(buf[1]),
            // buf[2..4] is reserved
            doc_count: u32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]),
            docs_len: u32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]),
            raw_len: u32::from_le_bytes([buf[12], buf[13], buf[14], buf[15]]),
            // buf[16..20] is reserved
        };

        if header.version != VERSION {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Unsupported corpus version {} (expected {})",
                    header.version, VERSION
                ),
            ));
        }
        if header.flags.unknown_bits() != 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Unknown format flags {:#010b}", header.flags.0),
            ));
        }
        if header.doc_count > MAX_DOC_COUNT {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Document count {} exceeds limit {}",
                    header.doc_count, MAX_DOC_COUNT
                ),
            ));
        }

        Ok(header)
    }
}

// ============================================================================
// FOOTER (8 bytes)
// ============================================================================

/// Footer with CRC32 checksum and magic number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusFooter {
    /// CRC32 checksum of header + document section (everything before footer)
    pub crc32: u32,
}

impl CorpusFooter {
    pub const SIZE: usize = 8; // 4 bytes CRC32 + 4 bytes magic

    pub fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&self.crc32.to_le_bytes())?;
        w.write_all(&FOOTER_MAGIC)?;
        Ok(())
    }

    pub fn read(bytes: &[u8]) -> io::Result<Self> {
        if bytes.len() < Self::SIZE {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "File too short for footer",
            ));
        }

        let footer_start = bytes.len() - Self::SIZE;

        let magic = &bytes[footer_start + 4..];
        if magic != FOOTER_MAGIC {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Invalid footer magic: expected OADE, got {:?}", magic),
            ));
        }

        let crc32 = u32::from_le_bytes([
            bytes[footer_start],
            bytes[footer_start + 1],
            bytes[footer_start + 2],
            bytes[footer_start + 3],
        ]);

        Ok(Self { crc32 })
    }

    /// Compute CRC32 over the given bytes
    pub fn compute_crc32(data: &[u8]) -> u32 {
        let mut hasher = Crc32Hasher::new();
        hasher.update(data);
        hasher.finalize()
    }
}
