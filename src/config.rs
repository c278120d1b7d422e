use crate::codec::Codec;
use crate::error::{PeersError, Result};
use serde::{Deserialize, Serialize};

/// Codec settings as they appear in a caller's configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Length of the peer id preceding every record, if any
    pub id_length: Option<i64>,
}

impl CodecConfig {
    pub fn build(&self) -> Result<Codec> {
        match self.id_length {
            None => Ok(Codec::new()),
            Some(len) if len <= 0 => Err(PeersError::InvalidConfiguration(format!(
                "peers id length must be greater than zero, got {}",
                len
            ))),
            Some(len) => {
                let len = usize::try_from(len).map_err(|_| {
                    PeersError::InvalidConfiguration(format!("peers id length {} is too large", len))
                })?;
                Codec::with_id_length(len)
            }
        }
    }
}

impl TryFrom<CodecConfig> for Codec {
    type Error = PeersError;

    fn try_from(config: CodecConfig) -> Result<Self> {
        config.build()
    }
}

impl TryFrom<Codec> for CodecConfig {
    type Error = PeersError;

    fn try_from(codec: Codec) -> Result<Self> {
        let id_length = codec
            .id_len()
            .map(|len| {
                i64::try_from(len).map_err(|_| {
                    PeersError::InvalidConfiguration(format!(
                        "peers id length {} does not fit in a config value",
                        len
                    ))
                })
            })
            .transpose()?;
        Ok(Self { id_length })
    }
}
