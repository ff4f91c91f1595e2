// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Minimal JSON-LD document model for the nodes this tool emits.

use std::collections::BTreeMap;

use case_ident::vocab::{UCO_CORE, UCO_OBSERVABLE, UCO_TYPES, UCO_VOCABULARY, XSD};
use serde::Serialize;
use serde_json::{json, Value};

/// Prefixes bound in every emitted document, besides `kb`.
pub const PREFIXES: [(&str, &str); 5] = [
    ("uco-core", UCO_CORE),
    ("uco-observable", UCO_OBSERVABLE),
    ("uco-types", UCO_TYPES),
    ("uco-vocabulary", UCO_VOCABULARY),
    ("xsd", XSD),
];

/// A node with its `@id`, `@type` and remaining properties in key order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    /// Node IRI.
    #[serde(rename = "@id")]
    pub id: String,
    /// Compacted class name.
    #[serde(rename = "@type")]
    pub kind: String,
    /// Compacted property name → JSON-LD value.
    #[serde(flatten)]
    pub properties: BTreeMap<String, Value>,
}

impl Node {
    /// Node `id` of class `class_iri`.
    pub fn new(id: impl Into<String>, class_iri: &str) -> Self {
        Self {
            id: id.into(),
            kind: compact(class_iri),
            properties: BTreeMap::new(),
        }
    }

    /// Sets property `property_iri` to `value`.
    pub fn with(mut self, property_iri: &str, value: Value) -> Self {
        self.properties.insert(compact(property_iri), value);
        self
    }
}

/// A complete document: context plus a flat `@graph`.
#[derive(Debug, Serialize)]
pub struct Document {
    #[serde(rename = "@context")]
    context: BTreeMap<String, String>,
    #[serde(rename = "@graph")]
    graph: Vec<Node>,
}

impl Document {
    /// Document over `graph`, binding `kb` to `base_prefix`.
    pub fn new(base_prefix: &str, graph: Vec<Node>) -> Self {
        let mut context: BTreeMap<String, String> = PREFIXES
            .iter()
            .map(|(p, ns)| ((*p).to_owned(), (*ns).to_owned()))
            .collect();
        context.insert("kb".to_owned(), base_prefix.to_owned());
        Self { context, graph }
    }
}

/// `prefix:Local` for IRIs under a bound namespace; anything else unchanged.
pub fn compact(iri: &str) -> String {
    PREFIXES
        .iter()
        .find_map(|(prefix, ns)| {
            iri.strip_prefix(ns)
                .filter(|local| !local.is_empty())
                .map(|local| format!("{prefix}:{local}"))
        })
        .unwrap_or_else(|| iri.to_owned())
}

/// Inverse of [`compact`]. Bare names are taken as `uco-observable` classes,
/// so `FileFacet` and `uco-observable:FileFacet` expand alike.
pub fn expand(label: &str) -> String {
    if label.contains("://") || label.starts_with("urn:") {
        return label.to_owned();
    }
    match label.split_once(':') {
        Some((prefix, local)) => PREFIXES
            .iter()
            .find(|(p, _)| *p == prefix)
            .map_or_else(|| label.to_owned(), |(_, ns)| format!("{ns}{local}")),
        None => format!("{UCO_OBSERVABLE}{label}"),
    }
}

/// `{"@id": iri}`.
pub fn id_ref(iri: &str) -> Value {
    json!({ "@id": iri })
}

/// `{"@type": datatype, "@value": value}` with the datatype compacted.
pub fn typed(datatype_iri: &str, value: impl Into<Value>) -> Value {
    json!({ "@type": compact(datatype_iri), "@value": value.into() })
}
