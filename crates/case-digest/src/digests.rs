// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Which digests a pass computes, and what a pass produced.

use std::collections::BTreeMap;

use case_ident::HashMethod;
use digest::DynDigest;

use crate::DigestError;

/// An ordered, duplicate-free set of streaming hash methods.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct DigestSet {
    methods: Vec<HashMethod>,
}

impl DigestSet {
    /// Builds a set from `methods`, ignoring duplicates.
    ///
    /// # Errors
    ///
    /// [`DigestError::UnsupportedMethod`] for fuzzy hashes such as SSDEEP,
    /// which are not computed by streaming a cryptographic digest.
    pub fn new<I>(methods: I) -> Result<Self, DigestError>
    where
        I: IntoIterator<Item = HashMethod>,
    {
        let mut methods: Vec<HashMethod> = methods.into_iter().collect();
        if let Some(bad) = methods.iter().find(|m| m.digest_len().is_none()) {
            return Err(DigestError::UnsupportedMethod(*bad));
        }
        methods.sort_unstable();
        methods.dedup();
        Ok(Self { methods })
    }

    /// [`HashMethod::FILE_DEFAULT`]: MD5, SHA1, SHA256, SHA3-256, SHA3-512
    /// and SHA512.
    pub fn file_default() -> Self {
        Self {
            methods: HashMethod::FILE_DEFAULT.to_vec(),
        }
    }

    /// Methods in canonical order.
    pub fn methods(&self) -> &[HashMethod] {
        &self.methods
    }

    /// True when no digest is requested; a pass then only counts bytes.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    pub(crate) fn hashers(&self) -> Vec<(HashMethod, Box<dyn DynDigest>)> {
        self.methods
            .iter()
            .filter_map(|&m| hasher_for(m).map(|h| (m, h)))
            .collect()
    }
}

fn hasher_for(method: HashMethod) -> Option<Box<dyn DynDigest>> {
    Some(match method {
        HashMethod::Md5 => Box::new(md5::Md5::default()),
        HashMethod::Sha1 => Box::new(sha1::Sha1::default()),
        HashMethod::Sha256 => Box::new(sha2::Sha256::default()),
        HashMethod::Sha384 => Box::new(sha2::Sha384::default()),
        HashMethod::Sha512 => Box::new(sha2::Sha512::default()),
        HashMethod::Sha3_256 => Box::new(sha3::Sha3_256::default()),
        HashMethod::Sha3_512 => Box::new(sha3::Sha3_512::default()),
        HashMethod::Ssdeep => return None,
    })
}

/// Byte count and digests from one full read of a source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PassDigests {
    pub(crate) byte_count: u64,
    pub(crate) digests: BTreeMap<HashMethod, Vec<u8>>,
}

impl PassDigests {
    /// Bytes read during the pass.
    pub fn byte_count(&self) -> u64 {
        self.byte_count
    }

    /// Raw digest for `method`, if it was computed.
    pub fn digest(&self, method: HashMethod) -> Option<&[u8]> {
        self.digests.get(&method).map(Vec::as_slice)
    }
}

/// Digests two consecutive passes agreed on. Only the convergent hashers
/// construct this.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmedHashes(pub(crate) PassDigests);

impl ConfirmedHashes {
    /// Bytes hashed.
    pub fn byte_count(&self) -> u64 {
        self.0.byte_count
    }

    /// Raw digest for `method`, if it was requested.
    pub fn digest(&self, method: HashMethod) -> Option<&[u8]> {
        self.0.digest(method)
    }

    /// Upper-case hex digest for `method`, the form written to graphs.
    pub fn hex_upper(&self, method: HashMethod) -> Option<String> {
        self.digest(method).map(hex::encode_upper)
    }

    /// `(method, digest)` pairs in canonical method order.
    pub fn iter(&self) -> impl Iterator<Item = (HashMethod, &[u8])> + '_ {
        self.0.digests.iter().map(|(m, d)| (*m, d.as_slice()))
    }
}
