// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Identifiers for nodes that inhere in another node.
//!
//! A facet exists only in reference to the object that links it through
//! `uco-core:hasFacet`, so its identity is fully determined by the object's
//! namespace and the relation labels leading to it. Each label is one UUIDv5
//! step keyed on the previous step's output; the fold is order sensitive.

use std::collections::BTreeSet;

use uuid::Uuid;

use crate::namespace::{inherence_namespace, SchemeVersion};
use crate::vocab::{UCO_CORE_FACET, UCO_CORE_HAS_FACET};
use crate::IdentError;

/// Classes that exist only for classification and never name a concrete node.
///
/// Deriving an identifier whose terminal label is in this set fails with
/// [`IdentError::InvalidDerivationTarget`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NonLeafClasses {
    labels: BTreeSet<String>,
}

impl NonLeafClasses {
    /// The UCO base set: `uco-core:Facet`.
    pub fn uco() -> Self {
        Self {
            labels: BTreeSet::from([UCO_CORE_FACET.to_owned()]),
        }
    }

    /// An empty set; every label is accepted.
    pub fn none() -> Self {
        Self {
            labels: BTreeSet::new(),
        }
    }

    /// Adds `label` (e.g. an extension's abstract facet class).
    pub fn with(mut self, label: impl Into<String>) -> Self {
        self.labels.insert(label.into());
        self
    }

    /// Returns `true` if `label` may not terminate a derivation.
    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }
}

impl Default for NonLeafClasses {
    fn default() -> Self {
        Self::uco()
    }
}

/// Folds `labels` into `namespace`, one UUIDv5 step per label, in order.
///
/// An empty chain returns `namespace` unchanged.
pub fn derive_chain<I, S>(namespace: Uuid, labels: I) -> Uuid
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    labels.into_iter().fold(namespace, |ns, label| {
        Uuid::new_v5(&ns, label.as_ref().as_bytes())
    })
}

/// Short name of a class or property IRI: the text after the last `/` or `#`.
pub fn local_name(label: &str) -> &str {
    label.rsplit(['/', '#']).next().unwrap_or(label)
}

fn facet_chain(facet_class: &str, scheme: SchemeVersion) -> Vec<&str> {
    match scheme {
        SchemeVersion::V1 => vec![facet_class],
        SchemeVersion::V2 => vec![UCO_CORE_HAS_FACET, facet_class],
    }
}

/// UUID of the `facet_class` facet of the object whose namespace is
/// `object_namespace`.
///
/// # Errors
///
/// [`IdentError::InvalidDerivationTarget`] if `facet_class` is non-leaf.
pub fn facet_uuid(
    object_namespace: Uuid,
    facet_class: &str,
    scheme: SchemeVersion,
    non_leaf: &NonLeafClasses,
) -> Result<Uuid, IdentError> {
    if non_leaf.contains(facet_class) {
        return Err(IdentError::InvalidDerivationTarget {
            label: facet_class.to_owned(),
        });
    }
    Ok(derive_chain(object_namespace, facet_chain(facet_class, scheme)))
}

/// IRI of a node reached from `object_iri` through `chain`.
///
/// The last label of `chain` is the node's class; its local name prefixes the
/// derived UUID and `base` prefixes the whole. `base` does not influence the
/// UUID, so rebasing a knowledge base keeps every derived identifier's UUID.
///
/// # Errors
///
/// [`IdentError::InvalidDerivationTarget`] if `chain` is empty or ends in a
/// non-leaf class.
pub fn inherent_iri<S: AsRef<str>>(
    object_iri: &str,
    chain: &[S],
    base: &str,
    scheme: SchemeVersion,
    non_leaf: &NonLeafClasses,
) -> Result<String, IdentError> {
    let terminal = match chain.last() {
        Some(label) if !non_leaf.contains(label.as_ref()) => label.as_ref(),
        Some(label) => {
            return Err(IdentError::InvalidDerivationTarget {
                label: label.as_ref().to_owned(),
            })
        }
        None => {
            return Err(IdentError::InvalidDerivationTarget {
                label: String::new(),
            })
        }
    };
    let uuid = derive_chain(inherence_namespace(object_iri, scheme), chain);
    Ok(format!("{base}{}-{uuid}", local_name(terminal)))
}

/// IRI of the `facet_class` facet of `object_iri`, under `base`.
///
/// ```
/// use case_ident::{facet_iri, vocab, NonLeafClasses, SchemeVersion};
///
/// let iri = facet_iri(
///     "http://example.org/kb/File-ac6b44cf-dc6b-4f2c-a09d-c9beb0a345a9",
///     vocab::UCO_FILE_FACET,
///     "urn:example:kb:",
///     SchemeVersion::V1,
///     &NonLeafClasses::uco(),
/// )?;
/// assert_eq!(iri, "urn:example:kb:FileFacet-01d292e3-0f38-5974-868d-006ef07f5186");
/// # Ok::<(), case_ident::IdentError>(())
/// ```
///
/// # Errors
///
/// [`IdentError::InvalidDerivationTarget`] if `facet_class` is non-leaf.
pub fn facet_iri(
    object_iri: &str,
    facet_class: &str,
    base: &str,
    scheme: SchemeVersion,
    non_leaf: &NonLeafClasses,
) -> Result<String, IdentError> {
    inherent_iri(object_iri, &facet_chain(facet_class, scheme), base, scheme, non_leaf)
}
