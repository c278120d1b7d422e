use super::Codec;
use crate::error::{PeersError, Result};
use crate::peer::{format_octets, Peer};
use bytes::Buf;
use tracing::{debug, trace};

impl Codec {
    /// Decode every complete record in `buf`
    pub fn decode(&self, buf: &[u8]) -> Result<Vec<Peer>> {
        self.decode_range(buf, 0, None)
    }

    /// Decode the records in `buf[offset..end]`
    ///
    /// `end` defaults to the buffer length. Trailing bytes that do not fill a
    /// whole record are ignored. A record with port 0 fails the whole decode.
    pub fn decode_range(&self, buf: &[u8], offset: usize, end: Option<usize>) -> Result<Vec<Peer>> {
        let end = end.unwrap_or(buf.len());
        if offset > end || end > buf.len() {
            return Err(PeersError::InvalidRange {
                offset,
                end,
                len: buf.len(),
            });
        }

        let record_len = self.record_len();
        let count = (end - offset) / record_len;

        debug!(
            "Decoding {} peers from bytes {}..{} ({} trailing bytes ignored)",
            count,
            offset,
            end,
            (end - offset) % record_len
        );

        buf[offset..end]
            .chunks_exact(record_len)
            .enumerate()
            .map(|(i, record)| self.read_record(record, offset + i * record_len))
            .collect()
    }

    fn read_record(&self, mut record: &[u8], at: usize) -> Result<Peer> {
        let id = self.id_len().map(|id_len| {
            let mut id = vec![0u8; id_len];
            record.copy_to_slice(&mut id);
            id
        });

        let mut octets = [0u8; 4];
        record.copy_to_slice(&mut octets);
        let port = record.get_u16();

        if port == 0 {
            return Err(PeersError::InvalidPort { offset: at });
        }

        let peer = Peer {
            id,
            host: format_octets(octets),
            port,
        };
        trace!("Read peer {} at offset {}", peer, at);

        Ok(peer)
    }
}
