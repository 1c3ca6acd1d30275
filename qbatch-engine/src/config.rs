//! Batch engine configuration

/// Configuration for the batch expectation engine
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Number of circuits each construction worker builds per chunk
    ///
    /// Chunking uses a fixed per-item cost unit rather than inspecting the
    /// circuits, so the partition is independent of the batch's content.
    ///
    /// Default: 16
    pub chunk_size: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { chunk_size: 16 }
    }
}

impl BatchConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the construction chunk size (clamped to at least 1)
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BatchConfig::default();
        assert_eq!(config.chunk_size, 16);
    }

    #[test]
    fn test_builder_pattern() {
        let config = BatchConfig::new().with_chunk_size(4);
        assert_eq!(config.chunk_size, 4);
    }

    #[test]
    fn test_chunk_size_clamped() {
        let config = BatchConfig::new().with_chunk_size(0);
        assert_eq!(config.chunk_size, 1);
    }
}
