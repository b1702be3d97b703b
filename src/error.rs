use thiserror::Error;

/// Failures surfaced to callers of the querier.
///
/// Matchable by variant; no string parsing needed. Wire-format defects in
/// received packets never reach callers through `query` (those packets are
/// dropped and collection continues); the `Wire` variant exists for direct
/// users of the codec functions.
#[derive(Error, Debug)]
pub enum MdnsError {
    /// Socket-level failure: create, bind, join, send, receive.
    #[error("{op} {address}: {detail}")]
    Network {
        op: &'static str,
        address: String,
        detail: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Caller-supplied input rejected before any I/O, or a typed-data
    /// accessor applied to the wrong record variant.
    #[error("invalid {field} {value:?}: {reason}")]
    Validation {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// Malformed packet bytes.
    #[error(transparent)]
    Wire(#[from] WireError),

    /// The querier has been closed; no further queries are possible.
    #[error("querier is closed")]
    Closed,
}

impl MdnsError {
    pub(crate) fn network(
        op: &'static str,
        address: impl Into<String>,
        detail: impl Into<String>,
        source: Option<std::io::Error>,
    ) -> Self {
        Self::Network {
            op,
            address: address.into(),
            detail: detail.into(),
            source,
        }
    }

    pub(crate) fn validation(
        field: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Validation {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Wire-format defect detected while decoding or encoding a DNS message.
///
/// Every variant carries the byte offset at which the defect was found, so
/// a dropped packet can be diagnosed from a debug log alone.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("packet too short: {0} bytes (header is 12)")]
    TooShort(usize),

    #[error("packet truncated at offset {0}")]
    Truncated(usize),

    #[error("name compression loop at offset {0}")]
    CompressionLoop(usize),

    #[error("reserved label type at offset {0}")]
    ReservedLabel(usize),

    #[error("label of {len} bytes at offset {offset} exceeds 63")]
    LabelTooLong { offset: usize, len: usize },

    #[error("name at offset {0} exceeds 255 wire bytes")]
    NameTooLong(usize),

    #[error("invalid UTF-8 in label at offset {0}")]
    InvalidUtf8(usize),

    #[error("bad rdata at offset {offset}: {reason}")]
    InvalidRdata { offset: usize, reason: &'static str },
}

impl WireError {
    /// Byte offset at which the defect was detected.
    pub fn offset(&self) -> usize {
        match *self {
            Self::TooShort(n) => n,
            Self::Truncated(off)
            | Self::CompressionLoop(off)
            | Self::ReservedLabel(off)
            | Self::NameTooLong(off)
            | Self::InvalidUtf8(off) => off,
            Self::LabelTooLong { offset, .. } | Self::InvalidRdata { offset, .. } => offset,
        }
    }
}
