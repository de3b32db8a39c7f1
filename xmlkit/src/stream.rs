use xmlparser::{Token, Tokenizer};

use crate::error::Result;

/// A pull reader over the tokens of an XML text.
///
/// Tokens are produced as the text is scanned; no tree is built. After a
/// malformed token is reported the reader yields nothing more.
pub struct Events<'a> {
    tokenizer: Tokenizer<'a>,
    failed: bool,
}

impl<'a> Events<'a> {
    pub fn new(xml: &'a str) -> Self {
        Self {
            tokenizer: Tokenizer::from(xml),
            failed: false,
        }
    }
}

impl<'a> Iterator for Events<'a> {
    type Item = Result<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.tokenizer.next()? {
            Ok(token) => Some(Ok(token)),
            Err(e) => {
                self.failed = true;
                Some(Err(e.into()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;

    use super::*;

    #[test]
    fn test_element_starts() {
        let names = Events::new(r#"<a x="1"><b/><c>text</c></a>"#)
            .filter_map(|token| match token {
                Ok(Token::ElementStart { local, .. }) => Some(local.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_stops_after_error() {
        let mut events = Events::new("<a x=1/>");
        let results = events.by_ref().collect::<Vec<_>>();
        assert!(matches!(results.last(), Some(Err(Error::Stream(_)))));
        assert!(events.next().is_none());
    }
}
