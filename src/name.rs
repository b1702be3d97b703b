//! DNS name codec (RFC 1035 §3.1, §4.1.4).
//!
//! Decoding chases compression pointers and is the crate's primary attack
//! surface, so every read is bounds-checked, pointers may only move toward
//! the start of the message, and the number of jumps is budgeted.

use crate::error::WireError;

/// Maximum bytes in a single label (RFC 1035 §2.3.4).
pub const MAX_LABEL_LEN: usize = 63;

/// Maximum wire bytes in a full name, terminator included.
pub const MAX_NAME_LEN: usize = 255;

/// Pointer-chase budget. The 256th jump fails the parse.
const MAX_POINTER_JUMPS: usize = 255;

/// Encode a dotted name as length-prefixed labels ending in a zero byte.
///
/// A trailing dot is accepted and ignored. Labels over 63 bytes and names
/// over 255 wire bytes are rejected; character-set rules live in
/// [`crate::validate`], not here.
pub fn encode_name(name: &str, buf: &mut Vec<u8>) -> Result<(), WireError> {
    let trimmed = name.strip_suffix('.').unwrap_or(name);
    let start = buf.len();
    let mut wire_len = 1; // terminator

    for label in trimmed.split('.').filter(|l| !l.is_empty()) {
        if label.len() > MAX_LABEL_LEN {
            return Err(WireError::LabelTooLong {
                offset: buf.len() - start,
                len: label.len(),
            });
        }
        wire_len += label.len() + 1;
        if wire_len > MAX_NAME_LEN {
            return Err(WireError::NameTooLong(buf.len() - start));
        }
        buf.push(label.len() as u8);
        buf.extend_from_slice(label.as_bytes());
    }

    buf.push(0);
    Ok(())
}

/// Decode a name starting at `start`, following compression pointers.
///
/// Returns the dotted name (ASCII-lowercased) and the offset at which the
/// caller resumes reading: the byte after the first pointer taken, or after
/// the root label if the name was not compressed.
pub fn parse_name(buf: &[u8], start: usize) -> Result<(String, usize), WireError> {
    let mut name = String::with_capacity(48);
    let mut offset = start;
    let mut resume = 0usize;
    let mut jumped = false;
    let mut jumps = 0usize;
    let mut wire_len = 0usize;

    loop {
        if offset >= buf.len() {
            return Err(WireError::Truncated(offset));
        }
        let len = buf[offset] as usize;

        match len & 0xC0 {
            // Compression pointer: two bytes, 14-bit offset.
            0xC0 => {
                if offset + 1 >= buf.len() {
                    return Err(WireError::Truncated(offset + 1));
                }
                if !jumped {
                    resume = offset + 2;
                    jumped = true;
                }
                let target = ((len & 0x3F) << 8) | buf[offset + 1] as usize;
                // Pointers may only reference earlier bytes; anything else
                // can never terminate.
                if target >= offset {
                    return Err(WireError::CompressionLoop(offset));
                }
                jumps += 1;
                if jumps > MAX_POINTER_JUMPS {
                    return Err(WireError::CompressionLoop(offset));
                }
                offset = target;
            }
            // Plain label (top bits 00 bound len to 0..=63).
            0x00 => {
                if len == 0 {
                    if !jumped {
                        resume = offset + 1;
                    }
                    break;
                }
                if offset + 1 + len > buf.len() {
                    return Err(WireError::Truncated(buf.len()));
                }
                wire_len += len + 1;
                if wire_len + 1 > MAX_NAME_LEN {
                    return Err(WireError::NameTooLong(offset));
                }
                let label = std::str::from_utf8(&buf[offset + 1..offset + 1 + len])
                    .map_err(|_| WireError::InvalidUtf8(offset + 1))?;
                if !name.is_empty() {
                    name.push('.');
                }
                name.extend(label.chars().map(|c| c.to_ascii_lowercase()));
                offset += len + 1;
            }
            // 01 and 10 are reserved (RFC 1035 §4.1.4).
            _ => return Err(WireError::ReservedLabel(offset)),
        }
    }

    Ok((name, resume))
}
