use crate::error::{GatewayError, Result};
use ripemd::Ripemd160;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};
use std::fmt;
use std::str::FromStr;

/// Digest algorithms the gateway accepts for request signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Md5,
    Ripemd160,
    Sha1,
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 6] = [
        Self::Md5,
        Self::Ripemd160,
        Self::Sha1,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Ripemd160 => "ripemd160",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
        }
    }

    /// Length of the hex rendering of this digest.
    pub fn hex_len(self) -> usize {
        match self {
            Self::Md5 => 32,
            Self::Ripemd160 | Self::Sha1 => 40,
            Self::Sha256 => 64,
            Self::Sha384 => 96,
            Self::Sha512 => 128,
        }
    }

    /// Hashes `input` and renders the digest as uppercase hex.
    pub fn digest(self, input: &str) -> String {
        let bytes = input.as_bytes();
        match self {
            Self::Md5 => hex::encode_upper(md5::compute(bytes).0),
            Self::Ripemd160 => hex::encode_upper(Ripemd160::digest(bytes)),
            Self::Sha1 => hex::encode_upper(Sha1::digest(bytes)),
            Self::Sha256 => hex::encode_upper(Sha256::digest(bytes)),
            Self::Sha384 => hex::encode_upper(Sha384::digest(bytes)),
            Self::Sha512 => hex::encode_upper(Sha512::digest(bytes)),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|alg| alg.name() == s)
            .ok_or_else(|| GatewayError::UnsupportedAlgorithm(s.to_owned()))
    }
}

/// Hashes `input` with the algorithm called `algorithm`.
///
/// The name is checked against [`HashAlgorithm::ALL`] before anything is
/// hashed; there is no fallback to a default algorithm.
pub fn hash(input: &str, algorithm: &str) -> Result<String> {
    let algorithm: HashAlgorithm = algorithm.parse()?;
    Ok(algorithm.digest(input))
}
