use ahash::{HashMap, HashMapExt};
use indexmap::IndexMap;

pub const XML_PREFIX: &str = "xml";
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";
pub const XMLNS_PREFIX: &str = "xmlns";
pub const XMLNS_NAMESPACE: &str = "http://www.w3.org/2000/xmlns/";
/// The namespace URI of names that are not in a namespace.
pub const NO_NAMESPACE: &str = "";

const RESERVED_NAMESPACES: [(&str, &str); 2] =
    [(XML_PREFIX, XML_NAMESPACE), (XMLNS_PREFIX, XMLNS_NAMESPACE)];

/// A bidirectional mapping between namespace prefixes and namespace URIs.
///
/// The `xml` and `xmlns` prefixes are always bound to their well-known
/// URIs, whatever the caller supplied for them.
///
/// When several prefixes are bound to the same URI, the reverse lookup
/// returns the one that comes last in the mapping. Caller bindings keep
/// their insertion order and the reserved prefixes come after them.
#[derive(Debug, Clone)]
pub struct NamespaceMapping {
    forward: IndexMap<String, String>,
    reverse: HashMap<String, String>,
}

impl NamespaceMapping {
    /// Build a mapping from `(prefix, uri)` pairs.
    ///
    /// A later pair for a prefix replaces an earlier one.
    pub fn new<I, P, U>(mappings: I) -> Self
    where
        I: IntoIterator<Item = (P, U)>,
        P: Into<String>,
        U: Into<String>,
    {
        let mut forward = IndexMap::new();
        for (prefix, uri) in mappings {
            forward.insert(prefix.into(), uri.into());
        }
        for (prefix, uri) in RESERVED_NAMESPACES {
            forward.shift_remove(prefix);
            forward.insert(prefix.to_string(), uri.to_string());
        }

        let mut reverse = HashMap::with_capacity(forward.len());
        for (prefix, uri) in &forward {
            reverse.insert(uri.clone(), prefix.clone());
        }

        Self { forward, reverse }
    }

    /// The namespace URI bound to `prefix`, or [`NO_NAMESPACE`] if the prefix
    /// is unknown.
    pub fn namespace_uri(&self, prefix: &str) -> &str {
        self.forward
            .get(prefix)
            .map(String::as_str)
            .unwrap_or(NO_NAMESPACE)
    }

    /// The prefix bound to `uri`, if any.
    pub fn prefix(&self, uri: &str) -> Option<&str> {
        self.reverse.get(uri).map(String::as_str)
    }

    /// All prefixes for `uri` known to the reverse lookup. This is at most
    /// one prefix.
    pub fn prefixes<'a>(&'a self, uri: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.prefix(uri).into_iter()
    }

    /// The `(prefix, uri)` bindings in mapping order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.forward
            .iter()
            .map(|(prefix, uri)| (prefix.as_str(), uri.as_str()))
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

impl Default for NamespaceMapping {
    fn default() -> Self {
        Self::new(std::iter::empty::<(String, String)>())
    }
}

impl<P, U> FromIterator<(P, U)> for NamespaceMapping
where
    P: Into<String>,
    U: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (P, U)>>(iter: I) -> Self {
        Self::new(iter)
    }
}
