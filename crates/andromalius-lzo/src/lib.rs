//! # Andromalius LZO
//!
//! Asymmetric LZO1X endpoint for tunnel packet framing.
//!
//! This crate decompresses; it never compresses. Inbound packets carrying
//! the LZO framing tags are decoded by a safe, single-pass, bounded-memory
//! LZO1X decoder; outbound packets are tagged uncompressed and shipped
//! as-is. The asymmetry serves client endpoints that must interoperate with
//! peers sending LZO frames but have no need to emit them.
//!
//! ## Example
//!
//! ```
//! use andromalius_core::PacketCodec;
//! use andromalius_lzo::{LzoAsym, LzoAsymConfig};
//!
//! let mut codec = LzoAsym::new(LzoAsymConfig::default());
//! let mut packet = vec![1, 2, 3, 4];
//! codec.outbound(&mut packet, false);
//! assert_eq!(packet[0], 0xFA);
//! codec.inbound(&mut packet).unwrap();
//! assert_eq!(packet, [1, 2, 3, 4]);
//! ```

pub mod decode;
pub mod framing;

pub use decode::decompress;
pub use framing::{LzoAsym, LzoAsymConfig};
