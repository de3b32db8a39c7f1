use thiserror::Error;
use xee_xpath::error::DocumentsError;

/// Errors raised by xmlkit.
///
/// Failures of the underlying XML crates are passed through unchanged.
#[derive(Debug, Error)]
pub enum Error {
    /// The next element of a filtered sequence was requested without a
    /// preceding successful `has_next`.
    #[error("invalid sequence state: no element was prepared by has_next")]
    InvalidSequenceState,
    #[error("XPath expression could not be compiled: {0}")]
    QueryCompilationFailed(#[source] xee_xpath::error::Error),
    #[error("XPath evaluation failed: {0}")]
    QueryEvaluationFailed(#[source] xee_xpath::error::Error),
    /// The document collection refused a document for a reason other than
    /// malformed XML.
    #[error(transparent)]
    Documents(DocumentsError),
    #[error("no document node for loaded document")]
    MissingDocumentNode,
    #[error(transparent)]
    Parse(#[from] xot::ParseError),
    #[error(transparent)]
    Serialize(#[from] xot::Error),
    #[error(transparent)]
    Stream(#[from] xmlparser::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// malformed XML is reported as `Parse` whichever way it was read
impl From<DocumentsError> for Error {
    fn from(error: DocumentsError) -> Self {
        match error {
            DocumentsError::Parse(error) => Error::Parse(error),
            error => Error::Documents(error),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
