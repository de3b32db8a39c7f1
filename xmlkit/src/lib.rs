//! Ergonomic iteration over XML trees.
//!
//! The [`sequence`] module turns indexed node collections into lazy,
//! restartable [`Sequence`]s that compose through `map` and `filter`;
//! [`of_kind`] and [`elements`] narrow node sequences to typed handles.
//!
//! Everything else is a thin layer over existing crates, gathered in
//! [`Toolkit`]: `xot` parses and serializes documents, `xee-xpath`
//! evaluates XPath, and `xmlparser` provides streaming reads.
//!
//! ```rust
//! use xmlkit::{NamespaceMapping, Sequence, Toolkit};
//!
//! let mut toolkit = Toolkit::new();
//! let document = toolkit
//!     .parse(r#"<root xmlns="http://example.com/ns/1.0"><item/></root>"#)
//!     .unwrap();
//! let namespaces = NamespaceMapping::new([("s", "http://example.com/ns/1.0")]);
//! let xpath = toolkit
//!     .xpath_with_namespaces("//s:item", &namespaces)
//!     .unwrap();
//! let found = toolkit.nodes(&xpath, document.root()).unwrap();
//! assert_eq!(found.iter().count(), 1);
//! ```
mod error;
mod kind;
pub mod sequence;
mod serialize;
mod stream;
mod toolkit;
mod xpath;

pub use crate::error::{Error, Result};
pub use crate::kind::{
    elements, of_kind, Attribute, Comment, Element, NodeKind, ProcessingInstruction, Text,
};
pub use crate::sequence::{nodes, NodeList, NodeSequence, Sequence};
pub use crate::serialize::Serialization;
pub use crate::stream::Events;
pub use crate::toolkit::{Document, Toolkit};
pub use crate::xpath::XPath;
pub use xmlkit_name::NamespaceMapping;
pub use xmlparser::Token;
pub use xot::Node;
