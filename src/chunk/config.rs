use crate::protocol::MAX_USER_DATA_LENGTH;
use crate::{Error, Result};

/// Encode and decode policy for DATA chunks.
///
/// The default is permissive: only the minimum chunk length is enforced on decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Zero the padding bytes after the user data on encode
    pub zero_padding: bool,

    /// Reject chunks whose type is not DATA
    pub verify_chunk_type: bool,

    /// Reject chunks with reserved flag bits set
    pub reject_reserved_flags: bool,

    /// Require padding to be present in the source buffer and all zero
    pub verify_padding: bool,

    /// Largest user data accepted on encode and decode
    pub max_user_data: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        CodecConfig {
            zero_padding: true,
            verify_chunk_type: false,
            reject_reserved_flags: false,
            verify_padding: false,
            max_user_data: MAX_USER_DATA_LENGTH,
        }
    }
}

impl CodecConfig {
    /// Create config builder
    pub fn builder() -> CodecConfigBuilder {
        CodecConfigBuilder::new()
    }

    /// All verification enabled
    pub fn strict() -> Self {
        CodecConfig {
            zero_padding: true,
            verify_chunk_type: true,
            reject_reserved_flags: true,
            verify_padding: true,
            max_user_data: MAX_USER_DATA_LENGTH,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_user_data > MAX_USER_DATA_LENGTH {
            return Err(Error::config(format!(
                "max_user_data must not exceed {}",
                MAX_USER_DATA_LENGTH
            )));
        }

        Ok(())
    }
}

/// Builder for CodecConfig
pub struct CodecConfigBuilder {
    config: CodecConfig,
}

impl CodecConfigBuilder {
    /// Create new builder
    pub fn new() -> Self {
        CodecConfigBuilder {
            config: CodecConfig::default(),
        }
    }

    /// Set padding zero-fill
    pub fn zero_padding(mut self, enabled: bool) -> Self {
        self.config.zero_padding = enabled;
        self
    }

    /// Set chunk type verification
    pub fn verify_chunk_type(mut self, enabled: bool) -> Self {
        self.config.verify_chunk_type = enabled;
        self
    }

    /// Set reserved flag rejection
    pub fn reject_reserved_flags(mut self, enabled: bool) -> Self {
        self.config.reject_reserved_flags = enabled;
        self
    }

    /// Set padding verification
    pub fn verify_padding(mut self, enabled: bool) -> Self {
        self.config.verify_padding = enabled;
        self
    }

    /// Set user data limit
    pub fn max_user_data(mut self, max: usize) -> Self {
        self.config.max_user_data = max;
        self
    }

    /// Build configuration
    pub fn build(self) -> Result<CodecConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for CodecConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
