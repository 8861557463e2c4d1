//! Domain constants for DDS-XML documents.

/// Namespace URI every DDS-XML element is bound to.
pub const DDS_XML_NAMESPACE: &str = "http://www.omg.org/spec/DDS-XML";

/// Separator between qualified name segments (`Outer::Inner::Point`).
pub const SEPARATOR: &str = "::";

/// Leading marker that makes a reference absolute (`::Outer::Point`).
pub const ROOT_MARKER: &str = "::";

/// Attribute carrying an element's declared name.
pub const NAME_ATTRIBUTE: &str = "name";

/// Extension of documents picked up by directory discovery.
pub const DEFAULT_EXTENSION: &str = "xml";

// ============================================================================
// TYPES
// ============================================================================

pub const MODULE_TAG: &str = "module";

/// Elements that declare a named data type.
pub const TYPE_TAGS: &[&str] = &[
    "struct",
    "enum",
    "union",
    "bitset",
    "bitmask",
    "typedef",
    "exception",
];

/// Elements that may name a data type through one of [`TYPE_REFERENCE_ATTRIBUTES`].
pub const TYPE_REFERENCE_TAGS: &[&str] = &[
    "struct",
    "enum",
    "union",
    "bitset",
    "bitmask",
    "typedef",
    "exception",
    "member",
    "discriminator",
    "register_type",
];

pub const TYPE_REFERENCE_ATTRIBUTES: &[&str] = &["type_ref", "nonBasicTypeName", "baseType"];

// ============================================================================
// QOS
// ============================================================================

pub const QOS_LIBRARY_TAG: &str = "qos_library";
pub const QOS_PROFILE_TAG: &str = "qos_profile";
pub const QOS_SNIPPET_TAG: &str = "qos_snippet";

/// Elements that inherit from a profile through `base_name`.
pub const QOS_PROFILE_REFERENCE_TAGS: &[&str] = &[
    "qos_profile",
    "datawriter_qos",
    "datareader_qos",
    "topic_qos",
    "participant_qos",
    "publisher_qos",
    "subscriber_qos",
];

pub const QOS_SNIPPET_REFERENCE_TAGS: &[&str] = &["qos_snippet"];

pub const BASE_NAME_ATTRIBUTE: &str = "base_name";
