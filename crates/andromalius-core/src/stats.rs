//! Session counters for framing operations.

/// Aggregate counters for one tunnel session.
///
/// The framing layer records every packet it handles here; a dropped packet
/// counts as an error but never tears down the session.
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    /// Total packets processed (both directions).
    pub total_packets: u64,

    /// Total bytes entering the codec.
    pub total_bytes_in: u64,

    /// Total bytes leaving the codec.
    pub total_bytes_out: u64,

    /// Number of packets dropped due to errors.
    pub error_count: u64,
}

impl Metrics {
    /// Create new empty counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed packet.
    pub fn record(&mut self, bytes_in: usize, bytes_out: usize) {
        self.total_packets += 1;
        self.total_bytes_in += bytes_in as u64;
        self.total_bytes_out += bytes_out as u64;
    }

    /// Record a dropped packet.
    pub fn record_error(&mut self) {
        self.error_count += 1;
    }

    /// Get expansion ratio (payload bytes per wire byte).
    pub fn expansion_ratio(&self) -> f64 {
        if self.total_bytes_in == 0 {
            return 1.0;
        }
        self.total_bytes_out as f64 / self.total_bytes_in as f64
    }

    /// Get error rate (0.0 to 1.0).
    pub fn error_rate(&self) -> f64 {
        if self.total_packets == 0 {
            return 0.0;
        }
        self.error_count as f64 / self.total_packets as f64
    }

    /// Reset all counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Get counters summary as string.
    pub fn summary(&self) -> String {
        format!(
            "Packets: {}, Bytes: {} -> {} (ratio: {:.2}x), Errors: {}",
            self.total_packets,
            self.total_bytes_in,
            self.total_bytes_out,
            self.expansion_ratio(),
            self.error_count,
        )
    }
}
