// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error type shared by the derivation functions.

use crate::HashMethod;

/// Errors raised while deriving identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentError {
    /// A trailing UUID was required but the identifier does not end in one.
    #[error("[IDENT_MALFORMED] {iri:?} does not end in a well-formed UUID")]
    MalformedIdentifier {
        /// The offending identifier.
        iri: String,
    },

    /// The terminal relation label is a classification-only (non-leaf) class.
    #[error("[IDENT_NON_LEAF] {label} is not a leaf class and cannot name a derived node")]
    InvalidDerivationTarget {
        /// The rejected label.
        label: String,
    },

    /// A hash value was not an `xsd:hexBinary` literal with a valid lexical form.
    #[error("[IDENT_ENCODING] expected xsd:hexBinary, got {datatype} {lexical:?}")]
    UnexpectedEncoding {
        /// Datatype IRI (or short name) of the literal.
        datatype: String,
        /// Lexical form of the literal.
        lexical: String,
    },

    /// A digest does not have the byte length its method prescribes.
    #[error("[IDENT_DIGEST_LEN] {method} digests are {expected} bytes, got {actual}")]
    DigestLengthMismatch {
        /// Hash method the value was declared under.
        method: HashMethod,
        /// Byte length required by `method`.
        expected: usize,
        /// Byte length actually supplied.
        actual: usize,
    },

    /// A hash method label outside the fixed vocabulary.
    #[error("[IDENT_HASH_METHOD] unknown hash method {0:?}")]
    UnknownHashMethod(String),
}
