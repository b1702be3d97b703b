//! One-shot query engine.
//!
//! A [`Querier`] owns the multicast socket and a single receiver task that
//! parses and screens every inbound datagram, then fans accepted messages
//! out to the collectors of all in-flight queries. Each `query` call
//! registers a collector, multicasts one question, and aggregates matching
//! answer records until its window closes.

use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use rustc_hash::{FxHashMap, FxHashSet};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::MAX_PAYLOAD_SIZE;
use crate::error::MdnsError;
use crate::packet::{self, DnsMessage};
use crate::records::{RData, RecordClass, RecordType, ResourceRecord};
use crate::transport::MdnsSocket;
use crate::validate;

/// Receive window used when the caller does not configure one.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(1);

/// Shortest permitted receive window.
pub const MIN_QUERY_TIMEOUT: Duration = Duration::from_millis(100);

/// Longest permitted receive window.
pub const MAX_QUERY_TIMEOUT: Duration = Duration::from_secs(10);

/// Bound on waiting for the receiver task during `close`.
const CLOSE_GRACE: Duration = Duration::from_secs(5);

/// Per-collector message queue depth. Sized to absorb a burst from a few
/// hundred responders between polls; a full queue drops messages rather
/// than letting a multicast storm grow memory without bound.
const COLLECTOR_QUEUE: usize = 256;

/// Configuration for [`Querier::new`], applied builder-style.
#[derive(Debug, Clone)]
pub struct QuerierOptions {
    timeout: Duration,
    interface: Option<Ipv4Addr>,
}

impl QuerierOptions {
    pub const fn new() -> Self {
        Self {
            timeout: DEFAULT_QUERY_TIMEOUT,
            interface: None,
        }
    }

    /// Sets the default per-query receive window, clamped to
    /// [100 ms, 10 s].
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout.clamp(MIN_QUERY_TIMEOUT, MAX_QUERY_TIMEOUT);
        self
    }

    /// Sets the IPv4 interface that carries the multicast group join.
    /// The system default interface is used when unset.
    pub fn with_interface(mut self, interface: Ipv4Addr) -> Self {
        self.interface = Some(interface);
        self
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    pub const fn interface(&self) -> Option<Ipv4Addr> {
        self.interface
    }
}

impl Default for QuerierOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregated answer records for one query, in order of first sighting,
/// de-duplicated by (name, type, class, rdata).
#[derive(Debug, Clone, Default)]
pub struct Response {
    pub records: Vec<ResourceRecord>,
}

impl Response {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// IPv4 addresses of every A record, in record order.
    pub fn addresses(&self) -> Vec<Ipv4Addr> {
        self.records
            .iter()
            .filter_map(|rr| match &rr.rdata {
                RData::A(ip) => Some(*ip),
                _ => None,
            })
            .collect()
    }

    /// Targets of every PTR record, in record order. For a service-type
    /// query these are the discovered instance names.
    pub fn ptr_targets(&self) -> Vec<&str> {
        self.records
            .iter()
            .filter_map(|rr| match &rr.rdata {
                RData::PTR(target) => Some(target.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// In-flight query collectors, keyed by registration id. The only shared
/// mutable structure in the crate; its lock is never held across an await.
struct CollectorRegistry {
    collectors: Mutex<FxHashMap<u64, mpsc::Sender<Arc<DnsMessage>>>>,
    next_id: AtomicU64,
}

impl CollectorRegistry {
    fn new() -> Self {
        Self {
            collectors: Mutex::new(FxHashMap::default()),
            next_id: AtomicU64::new(0),
        }
    }

    fn register(self: &Arc<Self>) -> (CollectorGuard, mpsc::Receiver<Arc<DnsMessage>>) {
        let (tx, rx) = mpsc::channel(COLLECTOR_QUEUE);
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.collectors
            .lock()
            .expect("collector registry lock")
            .insert(id, tx);
        (
            CollectorGuard {
                registry: Arc::clone(self),
                id,
            },
            rx,
        )
    }

    /// Forward an accepted message to every in-flight query.
    fn dispatch(&self, msg: DnsMessage) {
        let msg = Arc::new(msg);
        let collectors = self.collectors.lock().expect("collector registry lock");
        for (id, tx) in collectors.iter() {
            if tx.try_send(Arc::clone(&msg)).is_err() {
                debug!(collector = id, "collector queue full, dropping message");
            }
        }
    }
}

/// Deregisters a collector on every exit path, including a dropped query
/// future.
struct CollectorGuard {
    registry: Arc<CollectorRegistry>,
    id: u64,
}

impl Drop for CollectorGuard {
    fn drop(&mut self) {
        self.registry
            .collectors
            .lock()
            .expect("collector registry lock")
            .remove(&self.id);
    }
}

/// One-shot mDNS querier. Cheap to share behind an `Arc`; all methods take
/// `&self` and are safe to call concurrently.
pub struct Querier {
    transport: Mutex<Option<Arc<MdnsSocket>>>,
    registry: Arc<CollectorRegistry>,
    shutdown_tx: watch::Sender<bool>,
    receiver: Mutex<Option<JoinHandle<()>>>,
    closed: AtomicBool,
    timeout: Duration,
}

impl Querier {
    /// Open the multicast socket and spawn the receiver task.
    ///
    /// Must be called from within a tokio runtime. Fails with a network
    /// error when UDP port 5353 cannot be bound or the group cannot be
    /// joined; the error text names the likely remediation.
    pub fn new(options: QuerierOptions) -> Result<Self, MdnsError> {
        let transport = Arc::new(MdnsSocket::bind_multicast(options.interface)?);
        Ok(Self::start(transport, options))
    }

    fn start(transport: Arc<MdnsSocket>, options: QuerierOptions) -> Self {
        let registry = Arc::new(CollectorRegistry::new());
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let receiver = tokio::spawn(receiver_loop(
            Arc::clone(&transport),
            Arc::clone(&registry),
            shutdown_rx,
        ));
        Self {
            transport: Mutex::new(Some(transport)),
            registry,
            shutdown_tx,
            receiver: Mutex::new(Some(receiver)),
            closed: AtomicBool::new(false),
            timeout: options.timeout,
        }
    }

    /// Resolve one question with the default receive window.
    pub async fn query(&self, name: &str, rtype: RecordType) -> Result<Response, MdnsError> {
        self.query_with_timeout(name, rtype, self.timeout).await
    }

    /// Resolve one question, collecting answers until `window` elapses.
    ///
    /// A window with no responders is a normal, empty `Response`. Dropping
    /// the returned future cancels the query and releases its collector.
    /// `Err(MdnsError::Closed)` is returned if the querier is closed before
    /// or during the window.
    pub async fn query_with_timeout(
        &self,
        name: &str,
        rtype: RecordType,
        window: Duration,
    ) -> Result<Response, MdnsError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(MdnsError::Closed);
        }
        validate::validate_name(name)?;
        validate::validate_record_type(rtype)?;

        let qname = name.strip_suffix('.').unwrap_or(name).to_ascii_lowercase();
        let window = window.clamp(MIN_QUERY_TIMEOUT, MAX_QUERY_TIMEOUT);

        let payload = packet::build_query(&qname, rtype)?;
        let transport = self
            .transport
            .lock()
            .expect("transport lock")
            .clone()
            .ok_or(MdnsError::Closed)?;

        // Register before sending so a reply racing the send is not lost.
        let (_guard, mut rx) = self.registry.register();
        transport.send(&payload).await?;

        let deadline = tokio::time::Instant::now() + window;
        let mut shutdown = self.shutdown_tx.subscribe();
        let mut seen = FxHashSet::default();
        let mut records = Vec::new();

        loop {
            tokio::select! {
                _ = tokio::time::sleep_until(deadline) => break,
                _ = shutdown.wait_for(|closed| *closed) => return Err(MdnsError::Closed),
                msg = rx.recv() => match msg {
                    Some(msg) => collect_answers(&msg, &qname, rtype, &mut seen, &mut records),
                    None => break,
                },
            }
        }

        debug!(name = %qname, %rtype, records = records.len(), "query window closed");
        Ok(Response { records })
    }

    /// Shut down: stop the receiver task, then release the socket.
    ///
    /// Idempotent; the second and later calls are no-ops. In-flight
    /// queries resolve to `Err(MdnsError::Closed)`.
    pub async fn close(&self) -> Result<(), MdnsError> {
        if self.closed.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        let _ = self.shutdown_tx.send(true);

        let receiver = self.receiver.lock().expect("receiver handle lock").take();
        if let Some(receiver) = receiver {
            if tokio::time::timeout(CLOSE_GRACE, receiver).await.is_err() {
                warn!("mdns receiver task did not exit within {:?}", CLOSE_GRACE);
            }
        }

        // The socket is released only after the receiver has drained.
        self.transport.lock().expect("transport lock").take();
        Ok(())
    }
}

impl Drop for Querier {
    fn drop(&mut self) {
        // Stops the receiver task even when the caller never closed.
        let _ = self.shutdown_tx.send(true);
    }
}

/// Long-lived receive loop: read, parse, screen, dispatch. Packet-level
/// defects are dropped here and never abort a query window.
async fn receiver_loop(
    transport: Arc<MdnsSocket>,
    registry: Arc<CollectorRegistry>,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut buf = vec![0u8; MAX_PAYLOAD_SIZE];
    loop {
        tokio::select! {
            _ = shutdown.wait_for(|closed| *closed) => break,
            res = transport.recv_from(&mut buf) => {
                let (len, src) = match res {
                    Ok(r) => r,
                    Err(e) => {
                        warn!("mdns receive error: {}", e);
                        continue;
                    }
                };
                let msg = match packet::parse_message(&buf[..len]) {
                    Ok(msg) => msg,
                    Err(e) => {
                        debug!("dropping malformed packet from {}: {}", src, e);
                        continue;
                    }
                };
                if !packet::accepts_response(&msg.header) {
                    debug!("ignoring non-response message from {}", src);
                    continue;
                }
                registry.dispatch(msg);
            }
        }
    }
    debug!("mdns receiver task exiting");
}

type DedupKey = (String, RecordType, RecordClass, RData);

/// Append this message's answer records that match the question, skipping
/// any (name, type, class, rdata) already seen. Order within a packet is
/// preserved.
fn collect_answers(
    msg: &DnsMessage,
    qname: &str,
    rtype: RecordType,
    seen: &mut FxHashSet<DedupKey>,
    out: &mut Vec<ResourceRecord>,
) {
    for rr in &msg.answers {
        if rr.name != qname || rr.rtype != rtype {
            continue;
        }
        let key = (rr.name.clone(), rr.rtype, rr.class, rr.rdata.clone());
        if seen.insert(key) {
            out.push(rr.clone());
        }
    }
}
