// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Identifiers for `uco-types:Hash` nodes.
//!
//! A hash node is wholly specified by its method and value, so its UUID is
//! derived from nothing else: the pair is written as a `urn:hash::` name
//! (draft-thiemann-hash-urn) and hashed under the URL namespace. The value is
//! always rendered in lowercase hex, which makes the identifier independent of
//! the casing used in the source literal.

use uuid::Uuid;

use crate::vocab::{XSD_HEX_BINARY, XSD_HEX_BINARY_CANONICAL, XSD_STRING};
use crate::{HashMethod, IdentError};

/// Datatype of an RDF literal, as far as hash values are concerned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Datatype {
    /// `xsd:hexBinary`.
    HexBinary,
    /// `xsd:hexBinaryCanonical`.
    HexBinaryCanonical,
    /// `xsd:string`, or a plain literal.
    String,
    /// Any other datatype IRI.
    Other(String),
}

impl Datatype {
    /// Classifies a datatype IRI.
    pub fn from_iri(iri: &str) -> Self {
        match iri {
            XSD_HEX_BINARY => Self::HexBinary,
            XSD_HEX_BINARY_CANONICAL => Self::HexBinaryCanonical,
            XSD_STRING => Self::String,
            other => Self::Other(other.to_owned()),
        }
    }

    /// The datatype IRI.
    pub fn iri(&self) -> &str {
        match self {
            Self::HexBinary => XSD_HEX_BINARY,
            Self::HexBinaryCanonical => XSD_HEX_BINARY_CANONICAL,
            Self::String => XSD_STRING,
            Self::Other(iri) => iri,
        }
    }
}

/// A typed literal carrying a `uco-types:hashValue`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashLiteral {
    /// Lexical form as written in the graph.
    pub lexical: String,
    /// Declared datatype.
    pub datatype: Datatype,
}

impl HashLiteral {
    /// An `xsd:hexBinary` literal with the given lexical form.
    pub fn hex_binary(lexical: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: Datatype::HexBinary,
        }
    }

    /// Decodes the literal into digest bytes.
    ///
    /// # Errors
    ///
    /// [`IdentError::UnexpectedEncoding`] unless the literal is `xsd:hexBinary`
    /// with an even-length hex lexical form.
    pub fn to_bytes(&self) -> Result<Vec<u8>, IdentError> {
        let unexpected = || IdentError::UnexpectedEncoding {
            datatype: self.datatype.iri().to_owned(),
            lexical: self.lexical.clone(),
        };
        if self.datatype != Datatype::HexBinary {
            return Err(unexpected());
        }
        hex::decode(&self.lexical).map_err(|_| unexpected())
    }
}

/// The `urn:hash::<method>:<lowercase hex>` name of a digest.
pub fn hash_urn(method: HashMethod, digest: &[u8]) -> String {
    format!("urn:hash::{}:{}", method.urn_name(), hex::encode(digest))
}

/// UUID of the hash node for `digest` computed with `method`.
///
/// # Errors
///
/// [`IdentError::DigestLengthMismatch`] if `method` has a fixed digest length
/// and `digest` does not match it.
pub fn content_uuid_from_bytes(method: HashMethod, digest: &[u8]) -> Result<Uuid, IdentError> {
    if let Some(expected) = method.digest_len() {
        if digest.len() != expected {
            return Err(IdentError::DigestLengthMismatch {
                method,
                expected,
                actual: digest.len(),
            });
        }
    }
    Ok(Uuid::new_v5(
        &Uuid::NAMESPACE_URL,
        hash_urn(method, digest).as_bytes(),
    ))
}

/// UUID of the hash node with the given `uco-types:hashMethod` and
/// `uco-types:hashValue`.
///
/// ```
/// use case_ident::{content_uuid, HashLiteral, HashMethod};
///
/// let upper = HashLiteral::hex_binary("098F6BCD4621D373CADE4E832627B4F6");
/// let lower = HashLiteral::hex_binary("098f6bcd4621d373cade4e832627b4f6");
/// assert_eq!(
///     content_uuid(HashMethod::Md5, &upper)?,
///     content_uuid(HashMethod::Md5, &lower)?,
/// );
/// # Ok::<(), case_ident::IdentError>(())
/// ```
///
/// # Errors
///
/// [`IdentError::UnexpectedEncoding`] for values that are not valid
/// `xsd:hexBinary`; [`IdentError::DigestLengthMismatch`] for values of the
/// wrong length.
pub fn content_uuid(method: HashMethod, value: &HashLiteral) -> Result<Uuid, IdentError> {
    content_uuid_from_bytes(method, &value.to_bytes()?)
}
