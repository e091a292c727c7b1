//! Per-packet framing for the asymmetric LZO codec.
//!
//! Every packet leads with a one-byte tag selecting raw, head/tail-swapped,
//! or LZO-compressed payload. Inbound packets are unframed (and decompressed
//! when tagged so); outbound packets are always tagged uncompressed, since
//! this codec never compresses. The swap variants exist so the tag byte can
//! take the place of the final payload byte without disturbing payload
//! alignment for the peer.

use andromalius_core::{Error, FramingTag, Metrics, PacketCodec, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::decode::decompress;

fn default_asym() -> bool {
    true
}

fn default_max_decompressed() -> usize {
    64 * 1024
}

/// Configuration for an [`LzoAsym`] session codec.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LzoAsymConfig {
    /// Tag outbound packets with the head/tail swap variant.
    #[serde(default)]
    pub support_swap: bool,

    /// Accepted for peer compatibility and ignored; this codec is
    /// asymmetric regardless.
    #[serde(default = "default_asym")]
    pub asym: bool,

    /// Largest decompressed payload a single packet may carry; sizes the
    /// session's reusable work buffer.
    #[serde(default = "default_max_decompressed")]
    pub max_decompressed: usize,
}

impl Default for LzoAsymConfig {
    fn default() -> Self {
        Self {
            support_swap: false,
            asym: true,
            max_decompressed: default_max_decompressed(),
        }
    }
}

/// Asymmetric LZO framing codec bound to one tunnel session.
///
/// Decompresses inbound LZO-tagged packets through a reusable work buffer;
/// tags every outbound packet as uncompressed. Not shareable across threads
/// without external exclusion, matching the one-session-one-thread model.
#[derive(Debug)]
pub struct LzoAsym {
    config: LzoAsymConfig,
    work: Vec<u8>,
    metrics: Metrics,
}

impl LzoAsym {
    /// Create a session codec; the work buffer is allocated once here.
    pub fn new(config: LzoAsymConfig) -> Self {
        debug!(swap = config.support_swap, asym = config.asym, "lzo-asym init");
        let work = vec![0u8; config.max_decompressed];
        Self {
            config,
            work,
            metrics: Metrics::new(),
        }
    }

    /// Session counters.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Decompress `packet` through the work buffer, replacing its contents.
    fn decompress_work(&mut self, packet: &mut Vec<u8>) -> Result<()> {
        let written = decompress(packet, &mut self.work)?;
        trace!(
            compressed = packet.len(),
            decompressed = written,
            "lzo-asym uncompress"
        );
        packet.clear();
        packet.extend_from_slice(&self.work[..written]);
        Ok(())
    }

    /// Drop-path bookkeeping: empty the packet and count the error.
    fn drop_packet(&mut self, packet: &mut Vec<u8>, err: &Error) {
        warn!(error = %err, category = err.category(), "lzo-asym dropping packet");
        packet.clear();
        self.metrics.record_error();
    }
}

impl PacketCodec for LzoAsym {
    fn name(&self) -> &'static str {
        "lzo-asym"
    }

    fn outbound(&mut self, packet: &mut Vec<u8>, _hint: bool) {
        // skip null packets
        if packet.is_empty() {
            return;
        }
        let payload_len = packet.len();
        // indicate that we didn't compress
        if self.config.support_swap {
            swap_ends(packet);
            packet.insert(0, FramingTag::NoCompressSwap.byte());
        } else {
            packet.insert(0, FramingTag::NoCompress.byte());
        }
        self.metrics.record(payload_len, packet.len());
    }

    fn inbound(&mut self, packet: &mut Vec<u8>) -> Result<()> {
        // skip null packets
        if packet.is_empty() {
            return Ok(());
        }
        let wire_len = packet.len();
        let op = packet.remove(0);
        let result = match FramingTag::from_byte(op) {
            Some(FramingTag::NoCompress) => Ok(()),
            Some(FramingTag::NoCompressSwap) => {
                swap_ends(packet);
                Ok(())
            }
            Some(FramingTag::LzoCompress) => self.decompress_work(packet),
            Some(FramingTag::LzoCompressSwap) => {
                // unswap, then exactly the non-swap path
                swap_ends(packet);
                self.decompress_work(packet)
            }
            None => Err(Error::UnknownOp { op }),
        };
        match result {
            Ok(()) => {
                self.metrics.record(wire_len, packet.len());
                Ok(())
            }
            Err(err) => {
                self.drop_packet(packet, &err);
                Err(err)
            }
        }
    }
}

/// Exchange the first and last bytes of a packet. Self-inverse; packets
/// shorter than two bytes pass through unchanged.
fn swap_ends(packet: &mut [u8]) {
    if packet.len() >= 2 {
        let last = packet.len() - 1;
        packet.swap(0, last);
    }
}
