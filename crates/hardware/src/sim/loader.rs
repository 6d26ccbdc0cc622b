//! Program Loader.
//!
//! This module turns files into program images. It performs:
//! 1. **Binary loading:** Reads raw bytes from disk.
//! 2. **Text parsing:** Decodes the LS8 text format, one binary byte per line.
//! 3. **Size checking:** Rejects images that do not fit in memory.
//!
//! # LS8 text format
//!
//! ```text
//! # print8.ls8
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! 01000111 # PRN R0
//! 00000000
//! 00000001 # HLT
//! ```
//!
//! Everything after `#` is a comment; blank lines are skipped. The first token of every
//! other line must be exactly eight `0`/`1` digits.

use std::fs;
use std::path::Path;

use crate::common::LoaderError;
use crate::common::constants::MEMORY_SIZE;

/// File extension that selects the text parser in [`load_program`].
pub const TEXT_EXTENSION: &str = "ls8";

/// Number of binary digits per byte in the text format.
const BITS_PER_LINE: usize = 8;

/// Loads a binary file from disk into a byte vector.
///
/// # Errors
///
/// [`LoaderError::Io`] if the file cannot be read.
pub fn load_binary(path: impl AsRef<Path>) -> Result<Vec<u8>, LoaderError> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses an LS8 text program into bytes.
///
/// # Errors
///
/// [`LoaderError::InvalidLine`] for the first line whose value is not 8 binary digits.
pub fn parse_program(text: &str) -> Result<Vec<u8>, LoaderError> {
    let mut program = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let code = raw.split('#').next().unwrap_or_default();
        let Some(token) = code.split_whitespace().next() else {
            continue;
        };
        program.push(parse_byte(token).ok_or_else(|| LoaderError::InvalidLine {
            line: idx + 1,
            text: token.to_string(),
        })?);
    }
    Ok(program)
}

/// Parses one 8-digit binary token.
fn parse_byte(token: &str) -> Option<u8> {
    if token.len() != BITS_PER_LINE || !token.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }
    u8::from_str_radix(token, 2).ok()
}

/// Loads a program image, choosing the parser by extension.
///
/// `.ls8` files are parsed as text; anything else is read as raw bytes.
///
/// # Errors
///
/// I/O and parse errors, or [`LoaderError::TooLarge`] if the image exceeds memory.
pub fn load_program(path: impl AsRef<Path>) -> Result<Vec<u8>, LoaderError> {
    let path = path.as_ref();
    let is_text = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(TEXT_EXTENSION));

    let image = if is_text {
        let text = fs::read_to_string(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse_program(&text)?
    } else {
        load_binary(path)?
    };

    if image.len() > MEMORY_SIZE {
        return Err(LoaderError::TooLarge { len: image.len() });
    }
    tracing::debug!(path = %path.display(), bytes = image.len(), "program image read");
    Ok(image)
}
