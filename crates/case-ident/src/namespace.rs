// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! UUID namespaces for arbitrary node identifiers.
//!
//! Every node that other nodes inhere in needs a UUID to serve as the RFC 4122
//! namespace of those derivations. Identifiers that already end in a UUID
//! contribute that UUID, so renaming the knowledge-base prefix of a node keeps
//! all of its derived children stable. Anything else is hashed whole under the
//! URL namespace.

use uuid::Uuid;

use crate::IdentError;

/// Length of a hyphenated UUID in text form.
pub const UUID_TEXT_LEN: usize = 36;

/// Identifiers shorter than this cannot hold a scheme plus a UUID.
pub const MIN_EMBEDDING_IRI_LEN: usize = 40;

/// Derivation scheme revision.
///
/// Two incompatible revisions of the inherence scheme exist in published
/// data. Callers pin one explicitly; there is deliberately no default.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SchemeVersion {
    /// Embedded UUIDs are reused as-is; facets derive from `object → class`.
    V1,
    /// Embedded UUIDs are re-hashed under the OID namespace; facets derive
    /// from `object → uco-core:hasFacet → class`.
    V2,
}

impl SchemeVersion {
    /// Short name used on command lines and in config files.
    pub const fn name(self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
        }
    }
}

impl std::fmt::Display for SchemeVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for SchemeVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "v1" | "1" => Ok(Self::V1),
            "v2" | "2" => Ok(Self::V2),
            other => Err(format!("unknown derivation scheme {other:?} (expected v1 or v2)")),
        }
    }
}

/// Returns the UUID an identifier ends with, if it ends with one, together
/// with the suffix text it was parsed from.
///
/// The suffix must be hyphenated hex (any case) with a version nibble of 1–5.
fn trailing_uuid(iri: &str) -> Option<(Uuid, &str)> {
    if iri.chars().count() < MIN_EMBEDDING_IRI_LEN {
        return None;
    }
    let suffix = iri.get(iri.len() - UUID_TEXT_LEN..)?;
    let uuid = Uuid::parse_str(suffix).ok()?;
    matches!(uuid.get_version_num(), 1..=5).then_some((uuid, suffix))
}

/// Extracts the UUID embedded at the end of `iri`.
///
/// This is the strict path: identifiers without a well-formed UUID suffix are
/// rejected instead of hashed.
///
/// # Errors
///
/// Returns [`IdentError::MalformedIdentifier`] when no UUID suffix is present.
pub fn embedded_uuid(iri: &str) -> Result<Uuid, IdentError> {
    trailing_uuid(iri)
        .map(|(uuid, _)| uuid)
        .ok_or_else(|| IdentError::MalformedIdentifier {
            iri: iri.to_owned(),
        })
}

/// Computes the UUID namespace of the node named `iri`.
///
/// ```
/// use case_ident::{inherence_namespace, SchemeVersion};
///
/// let ns = inherence_namespace(
///     "http://example.org/kb/File-ac6b44cf-dc6b-4f2c-a09d-c9beb0a345a9",
///     SchemeVersion::V1,
/// );
/// assert_eq!(ns.to_string(), "ac6b44cf-dc6b-4f2c-a09d-c9beb0a345a9");
///
/// let homepage = inherence_namespace("https://caseontology.org/", SchemeVersion::V1);
/// assert_eq!(homepage.to_string(), "2c6406b7-3396-5fdd-b9bf-c6e21273e40a");
/// ```
pub fn inherence_namespace(iri: &str, scheme: SchemeVersion) -> Uuid {
    match (trailing_uuid(iri), scheme) {
        (None, _) => Uuid::new_v5(&Uuid::NAMESPACE_URL, iri.as_bytes()),
        (Some((uuid, _)), SchemeVersion::V1) => uuid,
        // The suffix is hashed as written, so its casing is significant.
        (Some((_, suffix)), SchemeVersion::V2) => {
            Uuid::new_v5(&Uuid::NAMESPACE_OID, suffix.as_bytes())
        }
    }
}
