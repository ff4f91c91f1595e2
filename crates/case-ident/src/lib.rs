// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Deterministic identifiers for UCO/CASE graph nodes.
//!
//! Three derivations live here, all RFC 4122 version 5 UUIDs:
//!
//! - [`inherence_namespace`] turns any node IRI into a UUID namespace, reusing
//!   a UUID the IRI already ends with.
//! - [`derive_chain`], [`facet_iri`] and [`inherent_iri`] name nodes that only
//!   exist in reference to a parent (facets), from the parent's namespace and
//!   the relation labels leading to the child.
//! - [`content_uuid`] names `uco-types:Hash` nodes from their method and value.
//!
//! # Scheme Versions
//!
//! Published data uses two incompatible revisions of the inherence scheme.
//! Every derivation that differs between them takes a [`SchemeVersion`]; the
//! crate never picks one on the caller's behalf.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]

mod content;
mod error;
mod hash_method;
mod namespace;
mod relation;
pub mod vocab;

pub use content::{content_uuid, content_uuid_from_bytes, hash_urn, Datatype, HashLiteral};
pub use error::IdentError;
pub use hash_method::HashMethod;
pub use namespace::{
    embedded_uuid, inherence_namespace, SchemeVersion, MIN_EMBEDDING_IRI_LEN, UUID_TEXT_LEN,
};
pub use relation::{derive_chain, facet_iri, facet_uuid, inherent_iri, local_name, NonLeafClasses};

/// Re-exported so callers can name namespace values without a direct dependency.
pub use uuid::Uuid;
