use std::io::Read;

use tracing::{debug, trace};
use xee_xpath::{DocumentHandle, Documents, Queries};
use xmlkit_name::NamespaceMapping;
use xot::{Node, Xot};

use crate::error::{Error, Result};
use crate::kind::{elements, Element};
use crate::sequence::{nodes, NodeSequence, Sequence};
use crate::serialize::Serialization;
use crate::stream::Events;
use crate::xpath::{self, XPath};

/// A parsed document held by a [`Toolkit`].
#[derive(Debug, Clone, Copy)]
pub struct Document {
    handle: DocumentHandle,
    root: Node,
}

impl Document {
    /// The document node.
    pub fn root(&self) -> Node {
        self.root
    }

    pub fn handle(&self) -> DocumentHandle {
        self.handle
    }
}

/// Entry point for parsing, querying and serializing XML.
///
/// Construct one toolkit up front and pass it to whatever needs it. It
/// holds every document parsed through it, together with the XPath
/// compiler used for expressions without namespace prefixes.
pub struct Toolkit {
    documents: Documents,
    queries: Queries<'static>,
}

impl Toolkit {
    pub fn new() -> Self {
        Self {
            documents: Documents::new(),
            queries: Queries::default(),
        }
    }

    pub fn xot(&self) -> &Xot {
        self.documents.xot()
    }

    /// Parse a document from text.
    pub fn parse(&mut self, xml: &str) -> Result<Document> {
        let handle = self.documents.add_string_without_uri(xml)?;
        let root = self
            .documents
            .document_node(handle)
            .ok_or(Error::MissingDocumentNode)?;
        debug!(bytes = xml.len(), "parsed document");
        Ok(Document { handle, root })
    }

    /// Parse a document from a byte stream.
    pub fn parse_reader<R: Read>(&mut self, mut reader: R) -> Result<Document> {
        let mut xml = String::new();
        reader.read_to_string(&mut xml)?;
        self.parse(&xml)
    }

    /// Read the tokens of `xml` one at a time, without building a tree.
    pub fn events<'a>(&self, xml: &'a str) -> Events<'a> {
        trace!(bytes = xml.len(), "streaming document");
        Events::new(xml)
    }

    /// The children of `node`, as they are now.
    pub fn children(&self, node: Node) -> NodeSequence<Vec<Node>> {
        nodes(self.xot().children(node).collect())
    }

    /// The descendants of `node` in document order, not including `node`
    /// itself.
    pub fn descendants(&self, node: Node) -> NodeSequence<Vec<Node>> {
        nodes(
            self.xot()
                .descendants(node)
                .filter(|descendant| *descendant != node)
                .collect(),
        )
    }

    /// Descendant elements of `parent` with qualified name `name`, such as
    /// `item` or `a:item`, in document order. The name `*` matches every
    /// element.
    pub fn elements_by_tag_name<'a>(
        &'a self,
        parent: Node,
        name: &'a str,
    ) -> impl Sequence<Item = Element> + 'a {
        let xot = self.xot();
        elements(self.descendants(parent), xot)
            .filter(move |element| {
            name == "*" || element.qualified_name(xot).as_deref() == Some(name)
        })
    }

    /// Compile an XPath expression that uses no namespace prefixes.
    pub fn xpath(&self, expression: &str) -> Result<XPath> {
        let xpath = XPath::compile(&self.queries, expression)?;
        debug!(expression = expression, "compiled XPath expression");
        Ok(xpath)
    }

    /// Compile an XPath expression, resolving its prefixes through
    /// `namespaces`.
    pub fn xpath_with_namespaces(
        &self,
        expression: &str,
        namespaces: &NamespaceMapping,
    ) -> Result<XPath> {
        let xpath = XPath::compile_with_namespaces(expression, namespaces)?;
        debug!(
            expression = expression,
            namespaces = namespaces.len(),
            "compiled XPath expression"
        );
        Ok(xpath)
    }

    /// Evaluate `xpath` against `context` and expose the resulting nodes as
    /// a sequence.
    pub fn nodes(&mut self, xpath: &XPath, context: Node) -> Result<NodeSequence<Vec<Node>>> {
        let items = xpath.items(&mut self.documents, context)?;
        let found = xpath::to_nodes(&items)?;
        debug!(
            expression = xpath.expression(),
            nodes = found.len(),
            "evaluated XPath expression"
        );
        Ok(nodes(found))
    }

    /// Evaluate `xpath` against `context` to the string value of its first
    /// item. An empty result gives the empty string.
    pub fn string(&mut self, xpath: &XPath, context: Node) -> Result<String> {
        let items = xpath.items(&mut self.documents, context)?;
        xpath::to_string(&items, self.documents.xot())
    }

    /// Evaluate `xpath` against `context` to a boolean. An empty result is
    /// false, more than one item is true, a single item gives its effective
    /// boolean value.
    pub fn boolean(&mut self, xpath: &XPath, context: Node) -> Result<bool> {
        let items = xpath.items(&mut self.documents, context)?;
        xpath::to_boolean(&items)
    }

    /// Evaluate `xpath` against `context` to a number. Results that are not
    /// numeric give NaN.
    pub fn number(&mut self, xpath: &XPath, context: Node) -> Result<f64> {
        let items = xpath.items(&mut self.documents, context)?;
        xpath::to_number(&items, self.documents.xot())
    }

    pub fn serialize(&self, node: Node, serialization: &Serialization) -> Result<String> {
        trace!(?serialization, "serializing node");
        Ok(self
            .xot()
            .serialize_xml_string(serialization.parameters(), node)?)
    }

    /// Serialize `node` indented and without an XML declaration.
    pub fn to_pretty_string(&self, node: Node) -> Result<String> {
        self.serialize(node, &Serialization::pretty())
    }

    /// Parse `xml` and write it out again as configured.
    ///
    /// The document is parsed into a scratch arena and is not added to the
    /// toolkit.
    pub fn transform(&self, xml: &str, serialization: &Serialization) -> Result<String> {
        let mut xot = Xot::new();
        let root = xot.parse(xml)?;
        Ok(xot.serialize_xml_string(serialization.parameters(), root)?)
    }
}

impl Default for Toolkit {
    fn default() -> Self {
        Self::new()
    }
}
