use std::fmt;

use xee_xpath::context::StaticContextBuilder;
use xee_xpath::error::Result as XPathResult;
use xee_xpath::{Documents, Item, Queries, Query};
use xmlkit_name::NamespaceMapping;
use xot::{Node, Xot};

use crate::error::{Error, Result};

type Evaluate = Box<dyn Fn(&mut Documents, Node) -> XPathResult<Vec<Item>>>;

fn convert_item(_: &mut Documents, item: &Item) -> XPathResult<Item> {
    Ok(item.clone())
}

/// A compiled XPath expression.
///
/// Compile one through [`crate::Toolkit::xpath`] or
/// [`crate::Toolkit::xpath_with_namespaces`] and evaluate it as often as
/// needed.
pub struct XPath {
    expression: String,
    evaluate: Evaluate,
}

impl XPath {
    pub(crate) fn compile(queries: &Queries, expression: &str) -> Result<Self> {
        let query = queries
            .many(expression, convert_item)
            .map_err(Error::QueryCompilationFailed)?;
        Ok(Self {
            expression: expression.to_string(),
            evaluate: Box::new(move |documents: &mut Documents, node: Node| {
                query.execute(documents, node)
            }),
        })
    }

    pub(crate) fn compile_with_namespaces(
        expression: &str,
        namespaces: &NamespaceMapping,
    ) -> Result<Self> {
        let mut static_context_builder = StaticContextBuilder::default();
        static_context_builder.namespaces(namespaces.iter());
        let queries = Queries::new(static_context_builder);
        Self::compile(&queries, expression)
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub(crate) fn items(&self, documents: &mut Documents, context: Node) -> Result<Vec<Item>> {
        (self.evaluate)(documents, context).map_err(Error::QueryEvaluationFailed)
    }
}

impl fmt::Debug for XPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XPath")
            .field("expression", &self.expression)
            .finish_non_exhaustive()
    }
}

pub(crate) fn to_nodes(items: &[Item]) -> Result<Vec<Node>> {
    items
        .iter()
        .map(|item| {
            item.to_node()
                .map_err(|e| Error::QueryEvaluationFailed(e.into()))
        })
        .collect()
}

// the string value of the first item, as XPath 1.0 string() does for
// node-sets
pub(crate) fn to_string(items: &[Item], xot: &Xot) -> Result<String> {
    match items.first() {
        Some(item) => item
            .string_value(xot)
            .map_err(|e| Error::QueryEvaluationFailed(e.into())),
        None => Ok(String::new()),
    }
}

pub(crate) fn to_boolean(items: &[Item]) -> Result<bool> {
    match items {
        [] => Ok(false),
        [item] => item
            .effective_boolean_value()
            .map_err(|e| Error::QueryEvaluationFailed(e.into())),
        _ => Ok(true),
    }
}

pub(crate) fn to_number(items: &[Item], xot: &Xot) -> Result<f64> {
    let s = to_string(items, xot)?;
    Ok(match s.trim() {
        "INF" => f64::INFINITY,
        "-INF" => f64::NEG_INFINITY,
        s if is_numeric(s) => s.parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    })
}

// optional minus, digits with at most one `.`, optional exponent; rejects
// the `inf`, `NaN` and leading `+` spellings Rust's float parser accepts
fn is_numeric(s: &str) -> bool {
    let unsigned = s.strip_prefix('-').unwrap_or(s);
    let (mantissa, exponent) = match unsigned.split_once(|c| c == 'e' || c == 'E') {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (unsigned, None),
    };
    let mantissa_ok = mantissa.bytes().any(|b| b.is_ascii_digit())
        && mantissa.bytes().all(|b| b.is_ascii_digit() || b == b'.')
        && mantissa.matches('.').count() <= 1;
    let exponent_ok = exponent.map_or(true, |exponent| {
        let digits = exponent
            .strip_prefix(|c| c == '+' || c == '-')
            .unwrap_or(exponent);
        !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
    });
    mantissa_ok && exponent_ok
}
