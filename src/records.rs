use std::fmt;
use std::net::Ipv4Addr;

use crate::error::MdnsError;

/// High bit of an mDNS record class: the cache-flush flag (RFC 6762 §10.2).
/// Masked off at parse; this querier keeps no cache to flush.
pub const CLASS_CACHE_FLUSH: u16 = 0x8000;

/// DNS record types seen on a local link.
///
/// The full code space round-trips through [`RecordType::from_u16`] /
/// [`RecordType::to_u16`]; the subset a query may ask for is enforced by
/// [`crate::validate::validate_record_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    PTR,
    TXT,
    AAAA,
    SRV,
    NSEC,
    ANY,
    Unknown(u16),
}

impl RecordType {
    pub fn from_u16(val: u16) -> Self {
        match val {
            1 => Self::A,
            12 => Self::PTR,
            16 => Self::TXT,
            28 => Self::AAAA,
            33 => Self::SRV,
            47 => Self::NSEC,
            255 => Self::ANY,
            other => Self::Unknown(other),
        }
    }

    pub fn to_u16(self) -> u16 {
        match self {
            Self::A => 1,
            Self::PTR => 12,
            Self::TXT => 16,
            Self::AAAA => 28,
            Self::SRV => 33,
            Self::NSEC => 47,
            Self::ANY => 255,
            Self::Unknown(v) => v,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::PTR => write!(f, "PTR"),
            Self::TXT => write!(f, "TXT"),
            Self::AAAA => write!(f, "AAAA"),
            Self::SRV => write!(f, "SRV"),
            Self::NSEC => write!(f, "NSEC"),
            Self::ANY => write!(f, "ANY"),
            Self::Unknown(v) => write!(f, "TYPE{}", v),
        }
    }
}

/// DNS record class. mDNS traffic is IN in practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordClass {
    IN,
    Unknown(u16),
}

impl RecordClass {
    /// Maps a wire class with the cache-flush bit already masked off.
    pub fn from_u16(val: u16) -> Self {
        match val {
            1 => Self::IN,
            other => Self::Unknown(other),
        }
    }

    pub fn to_u16(self) -> u16 {
        match self {
            Self::IN => 1,
            Self::Unknown(v) => v,
        }
    }
}

impl fmt::Display for RecordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IN => write!(f, "IN"),
            Self::Unknown(v) => write!(f, "CLASS{}", v),
        }
    }
}

/// Typed rdata for the record types this querier materializes.
///
/// Structural equality and hashing double as the rdata-bytes-equal test the
/// de-duplication pass needs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RData {
    A(Ipv4Addr),
    PTR(String),
    SRV {
        priority: u16,
        weight: u16,
        port: u16,
        target: String,
    },
    /// Ordered TXT strings, one per wire-level length-prefixed chunk.
    TXT(Vec<String>),
}

impl RData {
    fn kind(&self) -> RecordType {
        match self {
            Self::A(_) => RecordType::A,
            Self::PTR(_) => RecordType::PTR,
            Self::SRV { .. } => RecordType::SRV,
            Self::TXT(_) => RecordType::TXT,
        }
    }
}

/// Priority/weight/port/target of an SRV record (RFC 2782).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrvData {
    pub priority: u16,
    pub weight: u16,
    pub port: u16,
    pub target: String,
}

/// One answer record, name already lowercased by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: String,
    pub rtype: RecordType,
    pub class: RecordClass,
    pub ttl: u32,
    pub rdata: RData,
}

impl ResourceRecord {
    /// IPv4 address of an A record.
    pub fn as_a(&self) -> Result<Ipv4Addr, MdnsError> {
        match &self.rdata {
            RData::A(ip) => Ok(*ip),
            _ => Err(self.mismatch(RecordType::A)),
        }
    }

    /// Target domain name of a PTR record.
    pub fn as_ptr(&self) -> Result<&str, MdnsError> {
        match &self.rdata {
            RData::PTR(target) => Ok(target),
            _ => Err(self.mismatch(RecordType::PTR)),
        }
    }

    /// Priority, weight, port and target of an SRV record.
    pub fn as_srv(&self) -> Result<SrvData, MdnsError> {
        match &self.rdata {
            RData::SRV {
                priority,
                weight,
                port,
                target,
            } => Ok(SrvData {
                priority: *priority,
                weight: *weight,
                port: *port,
                target: target.clone(),
            }),
            _ => Err(self.mismatch(RecordType::SRV)),
        }
    }

    /// TXT strings in wire order.
    pub fn as_txt(&self) -> Result<&[String], MdnsError> {
        match &self.rdata {
            RData::TXT(strings) => Ok(strings),
            _ => Err(self.mismatch(RecordType::TXT)),
        }
    }

    fn mismatch(&self, wanted: RecordType) -> MdnsError {
        MdnsError::validation(
            "record_type",
            self.name.clone(),
            format!("record is {}, not {}", self.rdata.kind(), wanted),
        )
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} TTL={}",
            self.name, self.class, self.rtype, self.ttl
        )?;
        match &self.rdata {
            RData::A(ip) => write!(f, " {}", ip),
            RData::PTR(target) => write!(f, " {}", target),
            RData::SRV {
                priority,
                weight,
                port,
                target,
            } => write!(f, " {} {} {} {}", priority, weight, port, target),
            RData::TXT(strings) => {
                for s in strings {
                    write!(f, " {:?}", s)?;
                }
                Ok(())
            }
        }
    }
}
