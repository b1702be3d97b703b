//! One-shot multicast DNS querier (RFC 6762).
//!
//! Resolves `.local` hostnames and discovers services on the local link by
//! multicasting DNS questions to 224.0.0.251:5353 and aggregating the
//! replies that arrive within a bounded window. No central server, no
//! cache: every [`Querier::query`] call puts one question on the wire and
//! returns the de-duplicated answer records it heard.
//!
//! ```no_run
//! use mdns_querier::{Querier, QuerierOptions, RecordType};
//!
//! # async fn run() -> Result<(), mdns_querier::MdnsError> {
//! let querier = Querier::new(QuerierOptions::new())?;
//! let response = querier.query("printer.local", RecordType::A).await?;
//! for record in &response.records {
//!     println!("{} -> {}", record.name, record.as_a()?);
//! }
//! querier.close().await?;
//! # Ok(())
//! # }
//! ```

use std::net::Ipv4Addr;

pub mod error;
pub mod name;
pub mod packet;
pub mod querier;
pub mod records;
mod transport;
pub mod validate;

pub use error::{MdnsError, WireError};
pub use querier::{Querier, QuerierOptions, Response};
pub use records::{RData, RecordClass, RecordType, ResourceRecord, SrvData};

/// IPv4 multicast group all mDNS traffic uses (RFC 6762 §3).
pub const MDNS_GROUP: Ipv4Addr = Ipv4Addr::new(224, 0, 0, 251);

/// UDP port for mDNS, both source and destination.
pub const MDNS_PORT: u16 = 5353;

/// Largest payload accepted on receive (RFC 6762 §17).
pub const MAX_PAYLOAD_SIZE: usize = 9000;
