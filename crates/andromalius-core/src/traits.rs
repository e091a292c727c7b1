//! Core trait for per-packet tunnel framing codecs.

use crate::error::Result;

/// Per-packet framing codec bound to a single tunnel session.
///
/// An implementation owns whatever scratch space it needs, so one instance
/// serves one session; sessions are single-threaded and instances are not
/// shared across threads.
pub trait PacketCodec {
    /// Short protocol name used in negotiation and logs.
    fn name(&self) -> &'static str;

    /// Frame an outbound packet in place.
    ///
    /// `hint` is the upstream compressibility hint; implementations are free
    /// to ignore it. Empty packets pass through untouched.
    fn outbound(&mut self, packet: &mut Vec<u8>, hint: bool);

    /// Unframe an inbound packet in place, replacing it with the payload.
    ///
    /// On error the packet is left empty and must be dropped by the caller;
    /// the codec itself remains usable for subsequent packets.
    fn inbound(&mut self, packet: &mut Vec<u8>) -> Result<()>;
}
