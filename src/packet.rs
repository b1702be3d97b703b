//! DNS message codec (RFC 1035 §4, RFC 6762 §18).
//!
//! The builder emits exactly the one-question query shape this querier
//! sends; the parser accepts arbitrary messages and is required to fail
//! cleanly (never panic) on any input.

use std::net::Ipv4Addr;

use rand::Rng;

use crate::error::WireError;
use crate::name;
use crate::records::{CLASS_CACHE_FLUSH, RData, RecordClass, RecordType, ResourceRecord};

/// Wire size of the fixed header.
pub const HEADER_LEN: usize = 12;

/// Fixed bytes between a record's name and its rdata: TYPE, CLASS, TTL,
/// RDLENGTH.
const RR_PREAMBLE_LEN: usize = 10;

/// QCLASS for queries: IN, with the RFC 6762 §18.12 unicast-response bit
/// clear (multicast replies only).
const QCLASS_IN: u16 = 0x0001;

/// Parsed DNS header (12 bytes, big-endian).
#[derive(Debug, Clone)]
pub struct DnsHeader {
    pub id: u16,
    pub flags: u16,
    pub qd_count: u16,
    pub an_count: u16,
    pub ns_count: u16,
    pub ar_count: u16,
}

impl DnsHeader {
    pub fn is_response(&self) -> bool {
        self.flags & 0x8000 != 0
    }
    pub fn opcode(&self) -> u8 {
        ((self.flags >> 11) & 0xF) as u8
    }
    pub fn is_authoritative(&self) -> bool {
        self.flags & 0x0400 != 0
    }
    pub fn is_truncated(&self) -> bool {
        self.flags & 0x0200 != 0
    }
    pub fn recursion_desired(&self) -> bool {
        self.flags & 0x0100 != 0
    }
    pub fn rcode(&self) -> u8 {
        (self.flags & 0xF) as u8
    }
}

/// A parsed question.
#[derive(Debug, Clone)]
pub struct DnsQuestion {
    pub name: String,
    pub qtype: RecordType,
    pub qclass: RecordClass,
    /// RFC 6762 §18.12: top bit of QCLASS asks for a unicast reply.
    pub unicast_response: bool,
}

/// A fully parsed message. All four sections are decoded; records of types
/// this querier does not materialize are skipped during the parse.
#[derive(Debug, Clone)]
pub struct DnsMessage {
    pub header: DnsHeader,
    pub questions: Vec<DnsQuestion>,
    pub answers: Vec<ResourceRecord>,
    pub authority: Vec<ResourceRecord>,
    pub additional: Vec<ResourceRecord>,
}

/// RFC 6762 §18 acceptance test for inbound messages: a response (QR=1)
/// with a standard-query opcode and a clean rcode. Everything else is
/// silently dropped by the receiver.
pub fn accepts_response(header: &DnsHeader) -> bool {
    header.is_response() && header.opcode() == 0 && header.rcode() == 0
}

/// Build a one-question multicast query.
///
/// Header bits per RFC 6762 §18: random ID, QR/OPCODE/AA/TC/RD/Z/RCODE all
/// zero, QDCOUNT=1. The name must already be validated.
pub fn build_query(qname: &str, rtype: RecordType) -> Result<Vec<u8>, WireError> {
    let id: u16 = rand::rng().random();
    let mut buf = Vec::with_capacity(HEADER_LEN + qname.len() + 6);

    buf.extend_from_slice(&id.to_be_bytes());
    buf.extend_from_slice(&0u16.to_be_bytes()); // flags: all zero for a query
    buf.extend_from_slice(&1u16.to_be_bytes()); // QDCOUNT
    buf.extend_from_slice(&0u16.to_be_bytes()); // ANCOUNT
    buf.extend_from_slice(&0u16.to_be_bytes()); // NSCOUNT
    buf.extend_from_slice(&0u16.to_be_bytes()); // ARCOUNT

    name::encode_name(qname, &mut buf)?;
    buf.extend_from_slice(&rtype.to_u16().to_be_bytes());
    buf.extend_from_slice(&QCLASS_IN.to_be_bytes());

    Ok(buf)
}

fn parse_header(buf: &[u8]) -> Result<DnsHeader, WireError> {
    if buf.len() < HEADER_LEN {
        return Err(WireError::TooShort(buf.len()));
    }
    Ok(DnsHeader {
        id: u16::from_be_bytes([buf[0], buf[1]]),
        flags: u16::from_be_bytes([buf[2], buf[3]]),
        qd_count: u16::from_be_bytes([buf[4], buf[5]]),
        an_count: u16::from_be_bytes([buf[6], buf[7]]),
        ns_count: u16::from_be_bytes([buf[8], buf[9]]),
        ar_count: u16::from_be_bytes([buf[10], buf[11]]),
    })
}

/// Parse a complete DNS message.
///
/// Section counts drive the loops; running out of bytes mid-section is a
/// hard error rather than a silent stop, so counts and consumed bytes can
/// never disagree on success.
pub fn parse_message(buf: &[u8]) -> Result<DnsMessage, WireError> {
    let header = parse_header(buf)?;
    let mut offset = HEADER_LEN;

    let mut questions = Vec::with_capacity(header.qd_count.min(16) as usize);
    for _ in 0..header.qd_count {
        let (qname, next) = name::parse_name(buf, offset)?;
        if next + 4 > buf.len() {
            return Err(WireError::Truncated(next));
        }
        let qtype = u16::from_be_bytes([buf[next], buf[next + 1]]);
        let qclass = u16::from_be_bytes([buf[next + 2], buf[next + 3]]);
        questions.push(DnsQuestion {
            name: qname,
            qtype: RecordType::from_u16(qtype),
            qclass: RecordClass::from_u16(qclass & !CLASS_CACHE_FLUSH),
            unicast_response: qclass & CLASS_CACHE_FLUSH != 0,
        });
        offset = next + 4;
    }

    let mut answers = Vec::new();
    let mut authority = Vec::new();
    let mut additional = Vec::new();
    for (count, section) in [
        (header.an_count, &mut answers),
        (header.ns_count, &mut authority),
        (header.ar_count, &mut additional),
    ] {
        for _ in 0..count {
            let (next, record) = parse_record(buf, offset)?;
            if let Some(record) = record {
                section.push(record);
            }
            offset = next;
        }
    }

    Ok(DnsMessage {
        header,
        questions,
        answers,
        authority,
        additional,
    })
}

/// Parse one resource record. Returns the offset past it and the record,
/// or `None` for types that are skipped over their RDLENGTH.
fn parse_record(buf: &[u8], offset: usize) -> Result<(usize, Option<ResourceRecord>), WireError> {
    let (rname, mut off) = name::parse_name(buf, offset)?;
    if off + RR_PREAMBLE_LEN > buf.len() {
        return Err(WireError::Truncated(off));
    }

    let rtype_raw = u16::from_be_bytes([buf[off], buf[off + 1]]);
    let class_raw = u16::from_be_bytes([buf[off + 2], buf[off + 3]]);
    let ttl = u32::from_be_bytes([buf[off + 4], buf[off + 5], buf[off + 6], buf[off + 7]]);
    let rdlength = u16::from_be_bytes([buf[off + 8], buf[off + 9]]) as usize;
    off += RR_PREAMBLE_LEN;

    let rdata_end = off + rdlength;
    if rdata_end > buf.len() {
        return Err(WireError::Truncated(buf.len()));
    }

    let rtype = RecordType::from_u16(rtype_raw);
    let rdata = parse_rdata(buf, off, rdata_end, rtype)?;

    Ok((
        rdata_end,
        rdata.map(|rdata| ResourceRecord {
            name: rname,
            rtype,
            // Cache-flush bit is masked off; this querier keeps no cache.
            class: RecordClass::from_u16(class_raw & !CLASS_CACHE_FLUSH),
            ttl,
            rdata,
        }),
    ))
}

/// Decode rdata for the supported types; `None` skips the record.
fn parse_rdata(
    buf: &[u8],
    offset: usize,
    rdata_end: usize,
    rtype: RecordType,
) -> Result<Option<RData>, WireError> {
    let rdlength = rdata_end - offset;
    match rtype {
        RecordType::A => {
            if rdlength != 4 {
                return Err(WireError::InvalidRdata {
                    offset,
                    reason: "A rdata must be exactly 4 bytes",
                });
            }
            Ok(Some(RData::A(Ipv4Addr::new(
                buf[offset],
                buf[offset + 1],
                buf[offset + 2],
                buf[offset + 3],
            ))))
        }
        RecordType::PTR => {
            let (target, next) = name::parse_name(buf, offset)?;
            if next > rdata_end {
                return Err(WireError::InvalidRdata {
                    offset,
                    reason: "PTR target overruns rdata",
                });
            }
            Ok(Some(RData::PTR(target)))
        }
        RecordType::SRV => {
            if rdlength < 7 {
                return Err(WireError::InvalidRdata {
                    offset,
                    reason: "SRV rdata shorter than 7 bytes",
                });
            }
            let priority = u16::from_be_bytes([buf[offset], buf[offset + 1]]);
            let weight = u16::from_be_bytes([buf[offset + 2], buf[offset + 3]]);
            let port = u16::from_be_bytes([buf[offset + 4], buf[offset + 5]]);
            if port == 0 {
                return Err(WireError::InvalidRdata {
                    offset: offset + 4,
                    reason: "SRV port must be nonzero",
                });
            }
            let (target, next) = name::parse_name(buf, offset + 6)?;
            if next > rdata_end {
                return Err(WireError::InvalidRdata {
                    offset: offset + 6,
                    reason: "SRV target overruns rdata",
                });
            }
            Ok(Some(RData::SRV {
                priority,
                weight,
                port,
                target,
            }))
        }
        RecordType::TXT => {
            // One or more <length><bytes> strings filling rdata exactly.
            let mut strings = Vec::new();
            let mut pos = offset;
            while pos < rdata_end {
                let len = buf[pos] as usize;
                pos += 1;
                if pos + len > rdata_end {
                    return Err(WireError::InvalidRdata {
                        offset: pos - 1,
                        reason: "TXT string overruns rdata",
                    });
                }
                strings.push(String::from_utf8_lossy(&buf[pos..pos + len]).into_owned());
                pos += len;
            }
            Ok(Some(RData::TXT(strings)))
        }
        // AAAA, NSEC and everything else: consumed via RDLENGTH, nothing
        // materialized.
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Response header + answer records supplied as closures writing rdata.
    fn response_packet(answers: &[(&str, u16, u16, u32, Vec<u8>)]) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&0u16.to_be_bytes()); // ID (ignored for multicast)
        buf.extend_from_slice(&0x8400u16.to_be_bytes()); // QR=1, AA=1
        buf.extend_from_slice(&0u16.to_be_bytes());
        buf.extend_from_slice(&(answers.len() as u16).to_be_bytes());
        buf.extend_from_slice(&0u16.to_be_bytes());
        buf.extend_from_slice(&0u16.to_be_bytes());
        for (rname, rtype, class, ttl, rdata) in answers {
            name::encode_name(rname, &mut buf).unwrap();
            buf.extend_from_slice(&rtype.to_be_bytes());
            buf.extend_from_slice(&class.to_be_bytes());
            buf.extend_from_slice(&ttl.to_be_bytes());
            buf.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
            buf.extend_from_slice(rdata);
        }
        buf
    }

    #[test]
    fn test_query_header_bits() {
        let buf = build_query("printer.local", RecordType::A).unwrap();
        let msg = parse_message(&buf).unwrap();

        assert!(!msg.header.is_response());
        assert_eq!(msg.header.opcode(), 0);
        assert!(!msg.header.is_authoritative());
        assert!(!msg.header.is_truncated());
        assert!(!msg.header.recursion_desired());
        assert_eq!(msg.header.flags & 0x0070, 0); // Z
        assert_eq!(msg.header.rcode(), 0);
        assert_eq!(msg.header.qd_count, 1);
        assert_eq!(msg.header.an_count, 0);
        assert_eq!(msg.header.ns_count, 0);
        assert_eq!(msg.header.ar_count, 0);

        let q = &msg.questions[0];
        assert_eq!(q.name, "printer.local");
        assert_eq!(q.qtype, RecordType::A);
        assert_eq!(q.qclass, RecordClass::IN);
        assert!(!q.unicast_response, "QU bit must be clear");
    }

    #[test]
    fn test_parse_a_answer() {
        let buf = response_packet(&[(
            "printer.local",
            1,
            1,
            120,
            vec![0xC0, 0xA8, 0x01, 0x64],
        )]);
        let msg = parse_message(&buf).unwrap();
        assert!(accepts_response(&msg.header));
        assert_eq!(msg.answers.len(), 1);

        let rr = &msg.answers[0];
        assert_eq!(rr.name, "printer.local");
        assert_eq!(rr.rtype, RecordType::A);
        assert_eq!(rr.class, RecordClass::IN);
        assert_eq!(rr.ttl, 120);
        assert_eq!(rr.rdata, RData::A(Ipv4Addr::new(192, 168, 1, 100)));
    }

    #[test]
    fn test_parse_compressed_answer_name() {
        // Question then an answer whose name is a pointer back to QNAME.
        let mut buf = Vec::new();
        buf.extend_from_slice(&0u16.to_be_bytes());
        buf.extend_from_slice(&0x8400u16.to_be_bytes());
        buf.extend_from_slice(&1u16.to_be_bytes());
        buf.extend_from_slice(&1u16.to_be_bytes());
        buf.extend_from_slice(&0u16.to_be_bytes());
        buf.extend_from_slice(&0u16.to_be_bytes());
        name::encode_name("printer.local", &mut buf).unwrap();
        buf.extend_from_slice(&1u16.to_be_bytes());
        buf.extend_from_slice(&1u16.to_be_bytes());
        buf.extend_from_slice(&[0xC0, 0x0C]); // pointer to offset 12
        buf.extend_from_slice(&1u16.to_be_bytes());
        buf.extend_from_slice(&1u16.to_be_bytes());
        buf.extend_from_slice(&120u32.to_be_bytes());
        buf.extend_from_slice(&4u16.to_be_bytes());
        buf.extend_from_slice(&[10, 0, 0, 5]);

        let msg = parse_message(&buf).unwrap();
        assert_eq!(msg.questions.len(), 1);
        assert_eq!(msg.answers.len(), 1);
        assert_eq!(msg.answers[0].name, "printer.local");
        assert_eq!(msg.answers[0].rdata, RData::A(Ipv4Addr::new(10, 0, 0, 5)));
    }

    #[test]
    fn test_cache_flush_bit_masked() {
        let buf = response_packet(&[("printer.local", 1, 0x8001, 120, vec![10, 0, 0, 5])]);
        let msg = parse_message(&buf).unwrap();
        assert_eq!(msg.answers[0].class, RecordClass::IN);
    }

    #[test]
    fn test_a_rdlength_must_be_four() {
        let buf = response_packet(&[("printer.local", 1, 1, 120, vec![10, 0, 0])]);
        let err = parse_message(&buf).unwrap_err();
        assert!(matches!(err, WireError::InvalidRdata { .. }));
    }

    #[test]
    fn test_parse_ptr_answer() {
        let mut rdata = Vec::new();
        name::encode_name("WebOne._http._tcp.local", &mut rdata).unwrap();
        let buf = response_packet(&[("_http._tcp.local", 12, 1, 4500, rdata)]);
        let msg = parse_message(&buf).unwrap();
        assert_eq!(
            msg.answers[0].rdata,
            RData::PTR("webone._http._tcp.local".into())
        );
    }

    #[test]
    fn test_parse_srv_answer() {
        let mut rdata = Vec::new();
        rdata.extend_from_slice(&0u16.to_be_bytes());
        rdata.extend_from_slice(&0u16.to_be_bytes());
        rdata.extend_from_slice(&8080u16.to_be_bytes());
        name::encode_name("server.local", &mut rdata).unwrap();
        let buf = response_packet(&[("webone._http._tcp.local", 33, 1, 120, rdata)]);
        let msg = parse_message(&buf).unwrap();
        assert_eq!(
            msg.answers[0].rdata,
            RData::SRV {
                priority: 0,
                weight: 0,
                port: 8080,
                target: "server.local".into(),
            }
        );
    }

    #[test]
    fn test_srv_too_short_rejected() {
        let buf = response_packet(&[("webone._http._tcp.local", 33, 1, 120, vec![0; 6])]);
        assert!(matches!(
            parse_message(&buf),
            Err(WireError::InvalidRdata { .. })
        ));
    }

    #[test]
    fn test_srv_zero_port_rejected() {
        let mut rdata = vec![0u8; 6];
        name::encode_name("server.local", &mut rdata).unwrap();
        let buf = response_packet(&[("webone._http._tcp.local", 33, 1, 120, rdata)]);
        assert!(matches!(
            parse_message(&buf),
            Err(WireError::InvalidRdata { reason: "SRV port must be nonzero", .. })
        ));
    }

    #[test]
    fn test_parse_txt_answer() {
        let mut rdata = Vec::new();
        rdata.push(9);
        rdata.extend_from_slice(b"path=/api");
        rdata.push(11);
        rdata.extend_from_slice(b"version=1.0");
        let buf = response_packet(&[("webone._http._tcp.local", 16, 1, 120, rdata)]);
        let msg = parse_message(&buf).unwrap();
        assert_eq!(
            msg.answers[0].rdata,
            RData::TXT(vec!["path=/api".into(), "version=1.0".into()])
        );
    }

    #[test]
    fn test_txt_length_accounting() {
        // Empty rdata: valid, no strings.
        let buf = response_packet(&[("a.local", 16, 1, 120, vec![])]);
        assert_eq!(
            parse_message(&buf).unwrap().answers[0].rdata,
            RData::TXT(vec![])
        );

        // Single zero byte: one empty string.
        let buf = response_packet(&[("a.local", 16, 1, 120, vec![0])]);
        assert_eq!(
            parse_message(&buf).unwrap().answers[0].rdata,
            RData::TXT(vec![String::new()])
        );

        // Length byte promising one byte more than rdata holds.
        let buf = response_packet(&[("a.local", 16, 1, 120, vec![4, b'a', b'b', b'c'])]);
        assert!(matches!(
            parse_message(&buf),
            Err(WireError::InvalidRdata { reason: "TXT string overruns rdata", .. })
        ));
    }

    #[test]
    fn test_unsupported_types_skipped() {
        // AAAA answer between two A answers: parse continues around it.
        let buf = response_packet(&[
            ("host.local", 1, 1, 120, vec![10, 0, 0, 5]),
            ("host.local", 28, 1, 120, vec![0; 16]),
            ("host.local", 1, 1, 120, vec![10, 0, 0, 6]),
        ]);
        let msg = parse_message(&buf).unwrap();
        assert_eq!(msg.header.an_count, 3);
        assert_eq!(msg.answers.len(), 2);
        assert_eq!(msg.answers[1].rdata, RData::A(Ipv4Addr::new(10, 0, 0, 6)));
    }

    #[test]
    fn test_all_sections_parsed_separately() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&0u16.to_be_bytes());
        buf.extend_from_slice(&0x8400u16.to_be_bytes());
        buf.extend_from_slice(&0u16.to_be_bytes());
        buf.extend_from_slice(&1u16.to_be_bytes());
        buf.extend_from_slice(&1u16.to_be_bytes());
        buf.extend_from_slice(&1u16.to_be_bytes());
        for ip in [[10, 0, 0, 1], [10, 0, 0, 2], [10, 0, 0, 3]] {
            name::encode_name("host.local", &mut buf).unwrap();
            buf.extend_from_slice(&1u16.to_be_bytes());
            buf.extend_from_slice(&1u16.to_be_bytes());
            buf.extend_from_slice(&120u32.to_be_bytes());
            buf.extend_from_slice(&4u16.to_be_bytes());
            buf.extend_from_slice(&ip);
        }

        let msg = parse_message(&buf).unwrap();
        assert_eq!(msg.answers.len(), 1);
        assert_eq!(msg.authority.len(), 1);
        assert_eq!(msg.additional.len(), 1);
        assert_eq!(msg.answers[0].rdata, RData::A(Ipv4Addr::new(10, 0, 0, 1)));
        assert_eq!(msg.authority[0].rdata, RData::A(Ipv4Addr::new(10, 0, 0, 2)));
        assert_eq!(msg.additional[0].rdata, RData::A(Ipv4Addr::new(10, 0, 0, 3)));
    }

    #[test]
    fn test_question_with_unicast_bit_parsed() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&0u16.to_be_bytes());
        buf.extend_from_slice(&0u16.to_be_bytes());
        buf.extend_from_slice(&1u16.to_be_bytes());
        buf.extend_from_slice(&0u16.to_be_bytes());
        buf.extend_from_slice(&0u16.to_be_bytes());
        buf.extend_from_slice(&0u16.to_be_bytes());
        name::encode_name("printer.local", &mut buf).unwrap();
        buf.extend_from_slice(&1u16.to_be_bytes());
        buf.extend_from_slice(&0x8001u16.to_be_bytes()); // IN with QU bit

        let msg = parse_message(&buf).unwrap();
        let q = &msg.questions[0];
        assert_eq!(q.qclass, RecordClass::IN);
        assert!(q.unicast_response);
    }

    #[test]
    fn test_txt_string_at_255_byte_limit() {
        let long = "v".repeat(255);
        let mut rdata = vec![255u8];
        rdata.extend_from_slice(long.as_bytes());
        let buf = response_packet(&[("a.local", 16, 1, 120, rdata)]);
        let msg = parse_message(&buf).unwrap();
        assert_eq!(msg.answers[0].rdata, RData::TXT(vec![long]));
    }

    #[test]
    fn test_section_count_overrun_is_error() {
        let mut buf = response_packet(&[("host.local", 1, 1, 120, vec![10, 0, 0, 5])]);
        buf[7] = 2; // claim a second answer that is not there
        assert!(matches!(
            parse_message(&buf),
            Err(WireError::Truncated(_))
        ));
    }

    #[test]
    fn test_rdlength_past_end_is_error() {
        let mut buf = response_packet(&[("host.local", 1, 1, 120, vec![10, 0, 0, 5])]);
        let len = buf.len();
        buf[len - 6] = 0xFF; // inflate RDLENGTH high byte
        assert!(matches!(parse_message(&buf), Err(WireError::Truncated(_))));
    }

    #[test]
    fn test_short_packet_rejected() {
        assert_eq!(parse_message(&[]).unwrap_err(), WireError::TooShort(0));
        assert_eq!(parse_message(&[0u8; 11]).unwrap_err(), WireError::TooShort(11));
    }

    #[test]
    fn test_response_acceptance() {
        let ok = DnsHeader {
            id: 0,
            flags: 0x8400,
            qd_count: 0,
            an_count: 0,
            ns_count: 0,
            ar_count: 0,
        };
        assert!(accepts_response(&ok));

        let query = DnsHeader { flags: 0x0000, ..ok.clone() };
        assert!(!accepts_response(&query));

        let bad_opcode = DnsHeader { flags: 0x8400 | (2 << 11), ..ok.clone() };
        assert!(!accepts_response(&bad_opcode));

        let servfail = DnsHeader { flags: 0x8402, ..ok.clone() };
        assert!(!accepts_response(&servfail));
    }

    #[test]
    fn test_parse_never_panics_on_random_input() {
        let mut rng = StdRng::seed_from_u64(0x6D444E53);
        for _ in 0..10_000 {
            let len = rng.random_range(0..512);
            let mut buf = vec![0u8; len];
            rng.fill(buf.as_mut_slice());
            if let Err(err) = parse_message(&buf) {
                assert!(err.offset() <= buf.len(), "{err} from {len}-byte input");
            }
        }
    }

    #[test]
    fn test_parse_never_panics_on_mutated_valid_packet() {
        let mut srv_rdata = Vec::new();
        srv_rdata.extend_from_slice(&[0, 0, 0, 0, 0x1F, 0x90]);
        name::encode_name("server.local", &mut srv_rdata).unwrap();
        let seed = response_packet(&[
            ("printer.local", 1, 1, 120, vec![192, 168, 1, 100]),
            ("webone._http._tcp.local", 33, 1, 120, srv_rdata),
            ("a.local", 16, 1, 120, vec![3, b'k', b'=', b'v']),
        ]);

        let mut rng = StdRng::seed_from_u64(0x52464336);
        for _ in 0..10_000 {
            let mut buf = seed.clone();
            for _ in 0..rng.random_range(1..8) {
                let pos = rng.random_range(0..buf.len());
                buf[pos] = rng.random();
            }
            if let Err(err) = parse_message(&buf) {
                assert!(err.offset() <= buf.len());
            }
        }
    }
}
