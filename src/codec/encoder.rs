use super::Codec;
use crate::error::{PeersError, Result};
use crate::peer::{parse_octets, Peer};
use bytes::BufMut;
use tracing::{debug, trace};

impl Codec {
    /// Encode `peers` into a freshly allocated buffer
    pub fn encode(&self, peers: &[Peer]) -> Result<Vec<u8>> {
        self.encode_with_offset(peers, 0)
    }

    /// Encode `peers` into a fresh buffer, leaving `offset` zeroed bytes in front
    pub fn encode_with_offset(&self, peers: &[Peer], offset: usize) -> Result<Vec<u8>> {
        let length = self.encoding_length(Some(peers))?;
        let size = offset.checked_add(length).ok_or_else(|| {
            PeersError::LengthOverflow(format!("offset {} plus {} bytes of peers", offset, length))
        })?;
        let mut buf = vec![0u8; size];
        self.encode_into(peers, &mut buf, offset)?;
        Ok(buf)
    }

    /// Encode `peers` into a caller-owned buffer starting at `offset`
    ///
    /// Returns the offset just past the last record written. If a peer fails
    /// to encode, the records written before it stay in `buf`.
    pub fn encode_into(&self, peers: &[Peer], buf: &mut [u8], offset: usize) -> Result<usize> {
        let length = self.encoding_length(Some(peers))?;
        let end = offset.saturating_add(length);
        if buf.len() < end {
            return Err(PeersError::BufferTooSmall {
                needed: end,
                available: buf.len(),
            });
        }

        debug!(
            "Encoding {} peers into bytes {}..{} of a {} byte buffer",
            peers.len(),
            offset,
            end,
            buf.len()
        );

        let mut dst = &mut buf[offset..end];
        for peer in peers {
            self.write_record(peer, &mut dst)?;
        }

        Ok(end)
    }

    /// Append the records for `peers` to a growable buffer
    pub fn encode_buf<B: BufMut>(&self, peers: &[Peer], dst: &mut B) -> Result<()> {
        let length = self.encoding_length(Some(peers))?;
        if dst.remaining_mut() < length {
            return Err(PeersError::BufferTooSmall {
                needed: length,
                available: dst.remaining_mut(),
            });
        }

        debug!("Appending {} peers ({} bytes)", peers.len(), length);

        for peer in peers {
            self.write_record(peer, dst)?;
        }

        Ok(())
    }

    /// Write one record. Nothing is written if the peer is invalid.
    fn write_record<B: BufMut>(&self, peer: &Peer, dst: &mut B) -> Result<()> {
        let id = match self.id_len() {
            Some(expected) => {
                let id = peer.id.as_deref().unwrap_or_default();
                if id.len() != expected {
                    return Err(PeersError::InvalidIdentifier {
                        expected,
                        actual: id.len(),
                    });
                }
                Some(id)
            }
            None => None,
        };
        let octets = parse_octets(&peer.host)?;

        trace!("Writing peer {}", peer);

        if let Some(id) = id {
            dst.put_slice(id);
        }
        dst.put_slice(&octets);
        dst.put_u16(peer.port);

        Ok(())
    }
}
