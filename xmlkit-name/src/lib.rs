//! Namespace support for xmlkit.
//!
//! [`NamespaceMapping`] binds prefixes to namespace URIs and back. It is
//! built once and handed to the XPath compiler whenever a query uses
//! prefixed names.
mod namespaces;

pub use namespaces::{
    NamespaceMapping, NO_NAMESPACE, XMLNS_NAMESPACE, XMLNS_PREFIX, XML_NAMESPACE, XML_PREFIX,
};
