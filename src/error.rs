/// Cardinality failures reported by [`parse_first`](crate::parse_first) and
/// [`parse_single`](crate::parse_single).
///
/// Parsing itself never fails; these only signal that the caller's
/// expectation about the number of documents was not met.
#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected at least one document, but found none")]
    NoDocuments,
    #[error("expected exactly one document, but found {0}")]
    WrongDocumentCount(usize),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Utf8(#[from] std::str::Utf8Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    /// True if the error is one of the document count expectations, as
    /// opposed to a failure to read the input.
    #[inline]
    pub fn is_cardinality(&self) -> bool {
        matches!(self, Error::Parse(_))
    }
}

impl PartialEq<ParseError> for Error {
    fn eq(&self, other: &ParseError) -> bool {
        if let Error::Parse(err) = self {
            *err == *other
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            ParseError::NoDocuments.to_string(),
            "expected at least one document, but found none"
        );
        assert_eq!(
            ParseError::WrongDocumentCount(0).to_string(),
            "expected exactly one document, but found 0"
        );
        assert_eq!(
            ParseError::WrongDocumentCount(3).to_string(),
            "expected exactly one document, but found 3"
        );
    }

    #[test]
    fn transparent_wrapping() {
        let err = Error::from(ParseError::WrongDocumentCount(2));
        assert!(err.is_cardinality());
        assert_eq!(err, ParseError::WrongDocumentCount(2));
        assert_eq!(err.to_string(), "expected exactly one document, but found 2");

        let err = Error::from(std::io::Error::from(std::io::ErrorKind::UnexpectedEof));
        assert!(!err.is_cardinality());
        assert_ne!(err, ParseError::NoDocuments);
    }
}
