pub const DEFAULT_CHANNEL_CAPACITY: usize = 64 * 1024;

/// Configuration for the bidirectional search
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Slots in each peer-to-peer report channel (minimum 1)
    pub channel_capacity: usize,
}

impl SearchConfig {
    pub fn new(channel_capacity: usize) -> Self {
        Self {
            channel_capacity: channel_capacity.max(1),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}
