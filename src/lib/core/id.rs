use std::fmt;

use chrono::Utc;
use uuid::Uuid;

use crate::core::ApiError;

const RAW_LEN: usize = 12;
const ENCODED_LEN: usize = 24;

/// Opaque object-id style identifier for a todo document: 12 raw bytes,
/// canonically encoded as 24 hex characters on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TodoId([u8; RAW_LEN]);

impl TodoId {
    /// A fresh identifier: unix-seconds prefix for rough insertion ordering,
    /// followed by 8 random bytes.
    pub fn generate() -> Self {
        let mut bytes = [0u8; RAW_LEN];
        let secs = Utc::now().timestamp() as u32;
        bytes[..4].copy_from_slice(&secs.to_be_bytes());
        bytes[4..].copy_from_slice(&Uuid::new_v4().as_bytes()[..8]);
        Self(bytes)
    }

    /// Decodes a client-supplied identifier string. Anything that is not
    /// exactly 24 hex characters is a validation error, checked before the
    /// store is ever contacted.
    pub fn parse(s: &str) -> Result<Self, ApiError> {
        if s.len() != ENCODED_LEN || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ApiError::InvalidId(s.to_string()));
        }
        let mut bytes = [0u8; RAW_LEN];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&s[2 * i..2 * i + 2], 16)
                .map_err(|_| ApiError::InvalidId(s.to_string()))?;
        }
        Ok(Self(bytes))
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
