//! API-boundary validation: reject bad input before any packet is built or
//! any byte hits the wire.

use crate::error::MdnsError;
use crate::name::{MAX_LABEL_LEN, MAX_NAME_LEN};
use crate::records::RecordType;

/// Record types a query may ask for. AAAA is deliberately absent (IPv4
/// transport only); so is everything else.
const QUERYABLE: [RecordType; 4] = [
    RecordType::A,
    RecordType::PTR,
    RecordType::SRV,
    RecordType::TXT,
];

/// Check a query name: non-empty, wire form ≤255 bytes, labels 1..=63
/// bytes of letters/digits/hyphens/underscores with no edge hyphens.
///
/// Underscores are admitted because DNS-SD service names such as
/// `_http._tcp.local` are first-class PTR/SRV query targets. A single
/// trailing dot is accepted.
pub fn validate_name(name: &str) -> Result<(), MdnsError> {
    if name.is_empty() {
        return Err(MdnsError::validation("name", name, "must not be empty"));
    }

    let trimmed = name.strip_suffix('.').unwrap_or(name);
    if trimmed.is_empty() {
        return Err(MdnsError::validation(
            "name",
            name,
            "must contain at least one label",
        ));
    }

    // Encoded form: one length byte per label plus the terminator.
    let wire_len = trimmed.len() + 2;
    if wire_len > MAX_NAME_LEN {
        return Err(MdnsError::validation(
            "name",
            name,
            format!("wire form is {wire_len} bytes, limit is {MAX_NAME_LEN}"),
        ));
    }

    for label in trimmed.split('.') {
        if label.is_empty() {
            return Err(MdnsError::validation("name", name, "empty label"));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(MdnsError::validation(
                "name",
                name,
                format!("label {label:?} is {} bytes, limit is {MAX_LABEL_LEN}", label.len()),
            ));
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(MdnsError::validation(
                "name",
                name,
                format!("label {label:?} starts or ends with a hyphen"),
            ));
        }
        if let Some(bad) = label
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(MdnsError::validation(
                "name",
                name,
                format!("illegal character {bad:?} in label {label:?}"),
            ));
        }
    }

    Ok(())
}

/// Check that a record type is one this querier can ask for.
pub fn validate_record_type(rtype: RecordType) -> Result<(), MdnsError> {
    if QUERYABLE.contains(&rtype) {
        return Ok(());
    }
    Err(MdnsError::validation(
        "record_type",
        rtype.to_string(),
        "unsupported record type; queryable types are A, PTR, SRV, TXT",
    ))
}
