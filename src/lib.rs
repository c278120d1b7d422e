//! Compact IPv4 peer lists.
//!
//! A compact peer list is a run of fixed-size records, one per peer: an
//! optional peer id, four IPv4 octets and a big-endian port.
//!
//! ```
//! use ipv4_peers::{Codec, Peer};
//!
//! let codec = Codec::new();
//! let peers = vec![Peer::new("127.0.0.1", 80), Peer::new("127.0.0.1", 8080)];
//!
//! let encoded = codec.encode(&peers).unwrap();
//! assert_eq!(encoded.len(), 12);
//! assert_eq!(codec.decode(&encoded).unwrap(), peers);
//! ```

mod codec;
mod config;
mod error;
mod peer;

pub use codec::{Codec, ADDR_LEN};
pub use config::CodecConfig;
pub use error::{PeersError, Result};
pub use peer::Peer;
