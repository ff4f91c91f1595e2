// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! IRIs of the UCO terms the derivations and the file characterizer use.

/// `uco-core:` namespace.
pub const UCO_CORE: &str = "https://ontology.unifiedcyberontology.org/uco/core/";
/// `uco-observable:` namespace.
pub const UCO_OBSERVABLE: &str = "https://ontology.unifiedcyberontology.org/uco/observable/";
/// `uco-types:` namespace.
pub const UCO_TYPES: &str = "https://ontology.unifiedcyberontology.org/uco/types/";
/// `uco-vocabulary:` namespace.
pub const UCO_VOCABULARY: &str = "https://ontology.unifiedcyberontology.org/uco/vocabulary/";
/// `xsd:` namespace.
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

/// `uco-core:Facet`, the abstract facet base class.
pub const UCO_CORE_FACET: &str = "https://ontology.unifiedcyberontology.org/uco/core/Facet";
/// `uco-core:hasFacet`, the predicate linking an object to its facets.
pub const UCO_CORE_HAS_FACET: &str = "https://ontology.unifiedcyberontology.org/uco/core/hasFacet";

/// `uco-observable:ObservableObject`.
pub const UCO_OBSERVABLE_OBJECT: &str =
    "https://ontology.unifiedcyberontology.org/uco/observable/ObservableObject";
/// `uco-observable:FileFacet`.
pub const UCO_FILE_FACET: &str = "https://ontology.unifiedcyberontology.org/uco/observable/FileFacet";
/// `uco-observable:ContentDataFacet`.
pub const UCO_CONTENT_DATA_FACET: &str =
    "https://ontology.unifiedcyberontology.org/uco/observable/ContentDataFacet";
/// `uco-observable:URLFacet`.
pub const UCO_URL_FACET: &str = "https://ontology.unifiedcyberontology.org/uco/observable/URLFacet";
/// `uco-types:Hash`.
pub const UCO_HASH: &str = "https://ontology.unifiedcyberontology.org/uco/types/Hash";
/// `uco-vocabulary:HashNameVocab`.
pub const UCO_HASH_NAME_VOCAB: &str =
    "https://ontology.unifiedcyberontology.org/uco/vocabulary/HashNameVocab";

/// `xsd:hexBinary`.
pub const XSD_HEX_BINARY: &str = "http://www.w3.org/2001/XMLSchema#hexBinary";
/// `xsd:hexBinaryCanonical` (not an XSD built-in, but seen in the wild).
pub const XSD_HEX_BINARY_CANONICAL: &str = "http://www.w3.org/2001/XMLSchema#hexBinaryCanonical";
/// `xsd:string`.
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
/// `xsd:dateTime`.
pub const XSD_DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
