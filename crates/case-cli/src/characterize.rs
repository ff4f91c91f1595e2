// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! File characterization: one `ObservableObject` with its file and content
//! facets, and one hash node per confirmed digest.

use std::path::Path;

use anyhow::{Context, Result};
use case_app_core::prefs::CaseFilePrefs;
use case_digest::{hash_file, DigestSet};
use case_ident::vocab::{
    UCO_CONTENT_DATA_FACET, UCO_CORE, UCO_FILE_FACET, UCO_HASH, UCO_HASH_NAME_VOCAB,
    UCO_OBSERVABLE, UCO_OBSERVABLE_OBJECT, UCO_TYPES, XSD_DATE_TIME, XSD_HEX_BINARY,
};
use case_ident::{content_uuid_from_bytes, facet_iri, NonLeafClasses};
use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::debug;

use crate::graph::{id_ref, typed, Node};

fn prop(ns: &str, local: &str) -> String {
    format!("{ns}{local}")
}

/// Nodes describing the file at `path`, anchored at `node_iri`.
///
/// Facet identifiers are derived from `node_iri`, so a stable `node_iri`
/// yields stable facet identifiers. Hash node identifiers depend only on the
/// digests.
pub fn characterize_file(path: &Path, node_iri: &str, prefs: &CaseFilePrefs) -> Result<Vec<Node>> {
    let base = prefs.base_prefix.as_str();
    let non_leaf = NonLeafClasses::uco();

    let metadata = std::fs::metadata(path)
        .with_context(|| format!("hashing: cannot stat {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let file_facet_iri = facet_iri(node_iri, UCO_FILE_FACET, base, prefs.scheme, &non_leaf)
        .context("derivation: file facet")?;
    let mut file_facet = Node::new(file_facet_iri.as_str(), UCO_FILE_FACET)
        .with(&prop(UCO_OBSERVABLE, "fileName"), Value::from(file_name))
        .with(&prop(UCO_OBSERVABLE, "sizeInBytes"), Value::from(metadata.len()));
    if !prefs.disable_mtime {
        let modified = metadata
            .modified()
            .with_context(|| format!("hashing: no modification time for {}", path.display()))?;
        let stamp = OffsetDateTime::from(modified)
            .format(&Rfc3339)
            .context("output: formatting modification time")?;
        file_facet = file_facet.with(&prop(UCO_OBSERVABLE, "modifiedTime"), typed(XSD_DATE_TIME, stamp));
    }

    let mut facets = vec![id_ref(&file_facet_iri)];
    let mut trailing = Vec::new();

    if !prefs.disable_hashes {
        let set = DigestSet::new(prefs.hash_methods.iter().copied())
            .context("configuration: hash methods")?;
        let confirmed = hash_file(path, &set, prefs.max_attempts)
            .with_context(|| format!("hashing: {}", path.display()))?;
        debug!(bytes = confirmed.byte_count(), digests = set.methods().len(), "hashes confirmed");

        let content_iri = facet_iri(node_iri, UCO_CONTENT_DATA_FACET, base, prefs.scheme, &non_leaf)
            .context("derivation: content data facet")?;
        let mut hash_refs = Vec::new();
        for (method, digest) in confirmed.iter() {
            let uuid = content_uuid_from_bytes(method, digest)
                .with_context(|| format!("derivation: {method} hash node"))?;
            let hash_iri = format!("{base}Hash-{uuid}");
            hash_refs.push(id_ref(&hash_iri));
            trailing.push(
                Node::new(hash_iri, UCO_HASH)
                    .with(&prop(UCO_TYPES, "hashMethod"), typed(UCO_HASH_NAME_VOCAB, method.label()))
                    .with(
                        &prop(UCO_TYPES, "hashValue"),
                        typed(XSD_HEX_BINARY, hex::encode_upper(digest)),
                    ),
            );
        }
        let mut content = Node::new(content_iri.as_str(), UCO_CONTENT_DATA_FACET).with(
            &prop(UCO_OBSERVABLE, "sizeInBytes"),
            Value::from(confirmed.byte_count()),
        );
        if !hash_refs.is_empty() {
            content = content.with(&prop(UCO_OBSERVABLE, "hash"), Value::Array(hash_refs));
        }
        facets.push(id_ref(&content_iri));
        trailing.insert(0, content);
    }

    let object = Node::new(node_iri, UCO_OBSERVABLE_OBJECT)
        .with(&prop(UCO_CORE, "hasFacet"), Value::Array(facets));
    let mut nodes = vec![object, file_facet];
    nodes.extend(trailing);
    Ok(nodes)
}
