// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The closed `uco-vocabulary:HashNameVocab` subset this crate understands.

use std::fmt;
use std::str::FromStr;

use crate::IdentError;

/// Hash algorithm named by a `uco-types:hashMethod` literal.
///
/// Labels are parsed at the boundary ([`FromStr`]); everything past that point
/// works with this closed set. Ordering follows declaration order, which keeps
/// maps keyed by method deterministic.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HashMethod {
    /// MD5 (16-byte digest).
    #[cfg_attr(feature = "serde", serde(rename = "MD5"))]
    Md5,
    /// SHA-1 (20-byte digest).
    #[cfg_attr(feature = "serde", serde(rename = "SHA1"))]
    Sha1,
    /// SHA-256 (32-byte digest).
    #[cfg_attr(feature = "serde", serde(rename = "SHA256"))]
    Sha256,
    /// SHA3-256 (32-byte digest).
    #[cfg_attr(feature = "serde", serde(rename = "SHA3-256"))]
    Sha3_256,
    /// SHA3-512 (64-byte digest).
    #[cfg_attr(feature = "serde", serde(rename = "SHA3-512"))]
    Sha3_512,
    /// SHA-384 (48-byte digest).
    #[cfg_attr(feature = "serde", serde(rename = "SHA384"))]
    Sha384,
    /// SHA-512 (64-byte digest).
    #[cfg_attr(feature = "serde", serde(rename = "SHA512"))]
    Sha512,
    /// Context-triggered piecewise hash; variable length.
    #[cfg_attr(feature = "serde", serde(rename = "SSDEEP"))]
    Ssdeep,
}

impl HashMethod {
    /// Every method in the vocabulary.
    pub const ALL: [Self; 8] = [
        Self::Md5,
        Self::Sha1,
        Self::Sha256,
        Self::Sha3_256,
        Self::Sha3_512,
        Self::Sha384,
        Self::Sha512,
        Self::Ssdeep,
    ];

    /// Digests a file observation carries unless told otherwise.
    pub const FILE_DEFAULT: [Self; 6] = [
        Self::Md5,
        Self::Sha1,
        Self::Sha256,
        Self::Sha3_256,
        Self::Sha3_512,
        Self::Sha512,
    ];

    /// Vocabulary label as it appears in the graph, e.g. `SHA3-256`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA1",
            Self::Sha256 => "SHA256",
            Self::Sha3_256 => "SHA3-256",
            Self::Sha3_512 => "SHA3-512",
            Self::Sha384 => "SHA384",
            Self::Sha512 => "SHA512",
            Self::Ssdeep => "SSDEEP",
        }
    }

    /// Lowercase spelling used inside `urn:hash::` names.
    pub const fn urn_name(self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha3_256 => "sha3-256",
            Self::Sha3_512 => "sha3-512",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
            Self::Ssdeep => "ssdeep",
        }
    }

    /// Digest length in bytes, or `None` for variable-length methods.
    pub const fn digest_len(self) -> Option<usize> {
        match self {
            Self::Md5 => Some(16),
            Self::Sha1 => Some(20),
            Self::Sha256 | Self::Sha3_256 => Some(32),
            Self::Sha384 => Some(48),
            Self::Sha512 | Self::Sha3_512 => Some(64),
            Self::Ssdeep => None,
        }
    }
}

impl fmt::Display for HashMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for HashMethod {
    type Err = IdentError;

    /// Parses a vocabulary label. Matching is exact: the vocabulary is
    /// case-sensitive, so `sha256` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.label() == s)
            .ok_or_else(|| IdentError::UnknownHashMethod(s.to_owned()))
    }
}
