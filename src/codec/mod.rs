mod decoder;
mod encoder;

use crate::error::{PeersError, Result};
use crate::peer::Peer;

/// Bytes taken by the host octets and the port of every record
pub const ADDR_LEN: usize = 6;

/// Compact peer list codec
///
/// Every peer is written as a fixed-size record: an optional peer id of
/// `id_len` bytes, four IPv4 octets and a big-endian port. Records are
/// concatenated with no framing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Codec {
    /// 6-byte records, no peer id
    #[default]
    Compact,
    /// `id_len + 6`-byte records
    WithId { id_len: usize },
}

impl Codec {
    pub fn new() -> Self {
        Codec::Compact
    }

    /// Codec whose records start with a peer id of `id_len` bytes
    pub fn with_id_length(id_len: usize) -> Result<Self> {
        if id_len == 0 {
            return Err(PeersError::InvalidConfiguration(
                "peers id length must be greater than zero".to_string(),
            ));
        }
        if id_len > usize::MAX - ADDR_LEN {
            return Err(PeersError::InvalidConfiguration(format!(
                "peers id length {} is too large",
                id_len
            )));
        }
        Ok(Codec::WithId { id_len })
    }

    pub fn id_len(&self) -> Option<usize> {
        match self {
            Codec::Compact => None,
            Codec::WithId { id_len } => Some(*id_len),
        }
    }

    /// Size of a single encoded peer
    pub fn record_len(&self) -> usize {
        self.id_len().unwrap_or(0).saturating_add(ADDR_LEN)
    }

    /// Number of bytes needed to encode `peers`
    ///
    /// A missing list is an error, an empty one encodes to zero bytes.
    pub fn encoding_length(&self, peers: Option<&[Peer]>) -> Result<usize> {
        let peers = peers.ok_or(PeersError::MissingPeerList)?;
        peers.len().checked_mul(self.record_len()).ok_or_else(|| {
            PeersError::LengthOverflow(format!(
                "{} peers of {} bytes each",
                peers.len(),
                self.record_len()
            ))
        })
    }
}
