use xot::{Node, ValueType, Xot};

use crate::sequence::Sequence;

/// A node handle that is known to be of a particular kind.
pub trait NodeKind: Copy {
    /// The kind of node this handle stands for.
    const KIND: ValueType;

    /// Wrap a node. Only called for nodes already checked to be of
    /// [`NodeKind::KIND`].
    fn from_node(node: Node) -> Self;

    fn node(self) -> Node;
}

macro_rules! node_kind {
    ($(#[$doc:meta])* $name:ident, $kind:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(Node);

        impl NodeKind for $name {
            const KIND: ValueType = ValueType::$kind;

            fn from_node(node: Node) -> Self {
                Self(node)
            }

            fn node(self) -> Node {
                self.0
            }
        }

        impl From<$name> for Node {
            fn from(value: $name) -> Node {
                value.0
            }
        }
    };
}

node_kind!(
    /// An element node.
    Element,
    Element
);
node_kind!(
    /// A text node.
    Text,
    Text
);
node_kind!(Comment, Comment);
node_kind!(ProcessingInstruction, ProcessingInstruction);
node_kind!(
    /// An attribute node.
    Attribute,
    Attribute
);

impl Element {
    pub fn local_name<'x>(&self, xot: &'x Xot) -> &'x str {
        xot.element(self.0)
            .map(|element| xot.local_name_str(element.name()))
            .unwrap_or_default()
    }

    /// The name as written with its in-scope prefix, for instance `a:item`.
    /// An element in the default namespace or in no namespace gives just
    /// its local name.
    pub fn qualified_name(&self, xot: &Xot) -> Option<String> {
        let element = xot.element(self.0)?;
        xot.full_name(self.0, element.name()).ok()
    }

    pub fn namespace_uri<'x>(&self, xot: &'x Xot) -> &'x str {
        xot.element(self.0)
            .map(|element| xot.uri_str(element.name()))
            .unwrap_or_default()
    }
}

impl Text {
    pub fn get<'x>(&self, xot: &'x Xot) -> &'x str {
        xot.text_str(self.0).unwrap_or_default()
    }
}

/// The nodes of `nodes` that are of kind `K`, as `K` handles.
///
/// Nodes of other kinds are left out.
pub fn of_kind<'x, K, S>(nodes: S, xot: &'x Xot) -> impl Sequence<Item = K> + 'x
where
    K: NodeKind + 'x,
    S: Sequence<Item = Node> + 'x,
{
    nodes
        .filter(move |node| xot.value_type(*node) == K::KIND)
        .map(K::from_node)
}

/// The element nodes of `nodes`.
pub fn elements<'x, S>(nodes: S, xot: &'x Xot) -> impl Sequence<Item = Element> + 'x
where
    S: Sequence<Item = Node> + 'x,
{
    of_kind::<Element, S>(nodes, xot)
}
