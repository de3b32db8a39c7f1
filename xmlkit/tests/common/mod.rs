// disable dead code warning for this module as each test file only uses
// part of it
#![allow(dead_code)]

use xmlkit::{Document, NamespaceMapping, Toolkit};

pub(crate) const SAMPLE_NAMESPACE: &str = "http://example.com/ns/1.0";

pub(crate) const SAMPLE: &str = r#"<root xmlns="http://example.com/ns/1.0">
  <item n="1">one</item>
  <item n="2">two</item>
  <!-- note -->
  <other/>
</root>"#;

pub(crate) fn sample() -> (Toolkit, Document) {
    let mut toolkit = Toolkit::new();
    let document = toolkit.parse(SAMPLE).unwrap();
    (toolkit, document)
}

pub(crate) fn sample_namespaces() -> NamespaceMapping {
    NamespaceMapping::new([("sample", SAMPLE_NAMESPACE)])
}
