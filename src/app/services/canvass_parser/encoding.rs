//! Byte decoding for raw canvass report input
//!
//! Reports arrive as 8-bit extended ASCII from a DOS-era tabulation
//! system. Decoding maps each byte to the Unicode scalar with the same
//! value, so one byte stays one character and the fixed-width column
//! arithmetic remains aligned with the printed grid. Every byte
//! round-trips losslessly into the UTF-8 output.

use std::io::Read;
use std::path::Path;

use crate::error::Result;

/// Decode raw report bytes into a working string, one byte per character.
pub fn decode_report_bytes(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Read and decode a report file.
pub fn read_report_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(decode_report_bytes(&bytes))
}

/// Read and decode a report from any byte source (e.g. standard input).
pub fn read_report<R: Read>(mut reader: R) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(decode_report_bytes(&bytes))
}
