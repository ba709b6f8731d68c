use thiserror::Error;

/// Errors that can occur while configuring or allocating a ring buffer
///
/// Steady-state transfers never produce these; they report a frame count instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingBufferError {
    // ===== Configuration Errors =====
    /// The audio format cannot be stored in the buffer
    #[error("unsupported audio format: {reason}")]
    UnsupportedFormat {
        /// Why the format was rejected
        reason: &'static str,
    },

    /// Requested capacity lies outside the supported range
    #[error("capacity {requested} out of range ({min}..={max})")]
    CapacityOutOfRange {
        /// The requested minimum capacity in frames
        requested: usize,
        /// Smallest supported capacity
        min: usize,
        /// Largest supported capacity
        max: usize,
    },

    /// Rounded capacity does not fit the buffer list or allocation limits
    #[error("capacity {rounded} (requested {requested}) exceeds limit of {ceiling} frames")]
    CapacityExceeded {
        /// The requested minimum capacity in frames
        requested: usize,
        /// The requested capacity rounded up to a power of two
        rounded: usize,
        /// Largest capacity the format allows
        ceiling: usize,
    },

    /// Configuration builder was missing a required value
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the problem
        message: String,
    },

    // ===== Resource Errors =====
    /// The allocator could not provide the channel storage
    #[error("failed to allocate {bytes} bytes")]
    AllocationFailed {
        /// Size of the failed allocation
        bytes: usize,
    },
}

impl RingBufferError {
    /// Check if this error was caused by the requested format or capacity
    #[must_use]
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedFormat { .. }
                | Self::CapacityOutOfRange { .. }
                | Self::CapacityExceeded { .. }
                | Self::InvalidConfig { .. }
        )
    }

    /// Check if this error was caused by memory exhaustion
    #[must_use]
    pub fn is_allocation_failure(&self) -> bool {
        matches!(self, Self::AllocationFailed { .. })
    }
}

/// Result type alias for ring buffer operations
pub type Result<T> = std::result::Result<T, RingBufferError>;
