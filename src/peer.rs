use crate::error::{PeersError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{Ipv4Addr, SocketAddrV4};

/// A single entry of a compact peer list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Peer {
    /// Fixed-length peer id, only carried when the codec is configured with one
    pub id: Option<Vec<u8>>,
    /// Dotted-quad IPv4 address
    pub host: String,
    pub port: u16,
}

impl Peer {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            id: None,
            host: host.into(),
            port,
        }
    }

    pub fn with_id(id: impl Into<Vec<u8>>, host: impl Into<String>, port: u16) -> Self {
        Self {
            id: Some(id.into()),
            host: host.into(),
            port,
        }
    }

    /// Parse the host into a socket address
    pub fn socket_addr(&self) -> Result<SocketAddrV4> {
        let [a, b, c, d] = parse_octets(&self.host)?;
        Ok(SocketAddrV4::new(Ipv4Addr::new(a, b, c, d), self.port))
    }
}

impl From<SocketAddrV4> for Peer {
    fn from(addr: SocketAddrV4) -> Self {
        Self::new(addr.ip().to_string(), addr.port())
    }
}

impl From<(Ipv4Addr, u16)> for Peer {
    fn from((ip, port): (Ipv4Addr, u16)) -> Self {
        Self::new(ip.to_string(), port)
    }
}

impl fmt::Display for Peer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(id) = &self.id {
            write!(f, "{}@", hex::encode(id))?;
        }
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Split a dotted-quad host into its four octets
pub(crate) fn parse_octets(host: &str) -> Result<[u8; 4]> {
    let mut octets = [0u8; 4];
    let mut parts = host.split('.');

    for (i, octet) in octets.iter_mut().enumerate() {
        let part = parts
            .next()
            .ok_or_else(|| invalid_host(host, format!("expected 4 octets, found {}", i)))?;

        *octet = part.parse::<u8>().map_err(|_| {
            invalid_host(host, format!("octet {} ({:?}) is not a number in 0-255", i, part))
        })?;
    }

    if parts.next().is_some() {
        return Err(invalid_host(host, "expected 4 octets, found more".to_string()));
    }

    Ok(octets)
}

/// Format four octets as a dotted quad
pub(crate) fn format_octets(octets: [u8; 4]) -> String {
    Ipv4Addr::from(octets).to_string()
}

fn invalid_host(host: &str, reason: String) -> PeersError {
    PeersError::InvalidHost {
        host: host.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_octets() {
        assert_eq!(parse_octets("127.0.0.1").unwrap(), [127, 0, 0, 1]);
        assert_eq!(parse_octets("255.255.255.255").unwrap(), [255; 4]);
    }

    #[test]
    fn test_parse_octets_rejects_bad_hosts() {
        for host in ["", "127.0.0", "127.0.0.1.5", "256.0.0.1", "a.b.c.d", "1..2.3", "-1.0.0.0"] {
            let err = parse_octets(host).unwrap_err();
            assert!(
                matches!(err, PeersError::InvalidHost { host: ref h, .. } if h == host),
                "unexpected error for {:?}: {:?}",
                host,
                err
            );
        }
    }

    #[test]
    fn test_format_octets() {
        assert_eq!(format_octets([10, 0, 255, 1]), "10.0.255.1");
    }

    #[test]
    fn test_socket_addr() {
        let peer = Peer::new("192.168.1.20", 6881);
        assert_eq!(
            peer.socket_addr().unwrap(),
            SocketAddrV4::new(Ipv4Addr::new(192, 168, 1, 20), 6881)
        );
        assert!(Peer::new("localhost", 80).socket_addr().is_err());
    }

    #[test]
    fn test_from_socket_addr() {
        let addr = SocketAddrV4::new(Ipv4Addr::new(10, 1, 2, 3), 51413);
        let peer = Peer::from(addr);
        assert_eq!(peer, Peer::new("10.1.2.3", 51413));
        assert_eq!(Peer::from((Ipv4Addr::LOCALHOST, 80)), Peer::new("127.0.0.1", 80));
    }

    #[test]
    fn test_serde_roundtrip() {
        let peer = Peer::with_id(b"hello".to_vec(), "127.0.0.1", 8080);
        let json = serde_json::to_string(&peer).unwrap();
        assert_eq!(serde_json::from_str::<Peer>(&json).unwrap(), peer);

        let peer: Peer =
            serde_json::from_str(r#"{"id": null, "host": "10.0.0.1", "port": 6881}"#).unwrap();
        assert_eq!(peer, Peer::new("10.0.0.1", 6881));
    }

    #[test]
    fn test_display() {
        assert_eq!(Peer::new("127.0.0.1", 80).to_string(), "127.0.0.1:80");
        assert_eq!(
            Peer::with_id(b"hi".to_vec(), "127.0.0.1", 8080).to_string(),
            "6869@127.0.0.1:8080"
        );
    }
}
