use crate::{Comment, Document, ParseError, Scanner, Span, Spanned, SpannedExt, Stream, Token};

/// Incremental parser that turns [`Token`]s into [`Document`]s.
///
/// Every segment between separators becomes exactly one document, so a
/// non-empty input with `n` separators yields `n + 1` documents and the
/// empty input yields none. Each document carries the span of input it was
/// read from.
pub struct ParseStream<'r> {
    scanner: Scanner<'r>,
    /// The document being assembled, once any of its input has been seen.
    current: Option<Spanned<Document>>,
}

impl<'r> ParseStream<'r> {
    pub fn new(input: &'r str) -> Self {
        Self {
            scanner: Scanner::new(input),
            current: None,
        }
    }

    fn current_at(&mut self, span: Span) -> &mut Spanned<Document> {
        let current = self
            .current
            .get_or_insert_with(|| Document::default().in_span(Span::empty(span.start)));
        // Tokens arrive in input order.
        current.span.end = span.end;
        current
    }
}

impl<'r> Iterator for ParseStream<'r> {
    type Item = Spanned<Document>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some(Spanned { value: token, span }) = self.scanner.next() else {
                return self.current.take().inspect(log_document);
            };

            match token {
                Token::Comment { text, style } => {
                    self.current_at(span).value.comment = Some(Comment {
                        text: text.to_owned(),
                        style,
                    });
                }
                Token::Content(content) => {
                    self.current_at(span).value.content = Some(content.to_owned());
                }
                Token::Separator => {
                    let finished = self
                        .current
                        .replace(Document::default().in_span(Span::empty(span.end)))
                        .unwrap_or_else(|| Document::default().in_span(Span::empty(span.start)));
                    log_document(&finished);
                    return Some(finished);
                }
            }
        }
    }
}

fn log_document(document: &Spanned<Document>) {
    tracing::trace!(
        start = %document.span.start,
        end = %document.span.end,
        comment = document.comment.is_some(),
        content = document.content.is_some(),
        "parsed document"
    );
}

/// Parse every document in `input`. Never fails.
pub fn parse_all(input: &str) -> Stream {
    let stream: Stream = ParseStream::new(input).map(Spanned::into_inner).collect();
    tracing::debug!(
        documents = stream.len(),
        bytes = input.len(),
        "parsed stream"
    );
    stream
}

/// Parse `input` and return its first document, ignoring any that follow.
pub fn parse_first(input: &str) -> Result<Document, ParseError> {
    match ParseStream::new(input).next() {
        Some(document) => Ok(document.into_inner()),
        None => {
            tracing::debug!("no documents in input");
            Err(ParseError::NoDocuments)
        }
    }
}

/// Parse `input`, which must hold exactly one document.
pub fn parse_single(input: &str) -> Result<Document, ParseError> {
    let mut documents = parse_all(input).into_documents();
    if documents.len() != 1 {
        tracing::debug!(documents = documents.len(), "expected a single document");
        return Err(ParseError::WrongDocumentCount(documents.len()));
    }
    Ok(documents.swap_remove(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic() {
        let input = "# first\nsome: content\n---\nplain\n---\n# last";
        let stream = parse_all(input);

        assert_eq!(
            stream.documents(),
            [
                Document::new()
                    .with_comment(Comment::new("first"))
                    .with_content("\nsome: content"),
                Document::new().with_content("plain"),
                Document::new().with_comment(Comment::new("last")),
            ]
        );
        assert_eq!(stream.render(), input);
    }

    #[test]
    fn empty_segments_become_empty_documents() {
        assert_eq!(parse_all("\n---\n").documents(), [Document::new(), Document::new()]);
        assert_eq!(
            parse_all("a\n---\n").documents(),
            [Document::new().with_content("a"), Document::new()]
        );
    }

    #[test]
    fn document_spans() {
        let spans: Vec<_> = ParseStream::new("# a\nb\n---\n\n---\nc")
            .map(|doc| doc.span.range())
            .collect();
        assert_eq!(spans, [0..5, 10..10, 15..16]);
    }

    #[test]
    fn leading_separator_gives_empty_first_document() {
        let mut documents = ParseStream::new("\n---\nx");
        let first = documents.next().unwrap();
        assert_eq!(first.value, Document::new());
        assert_eq!(first.span.range(), 0..0);
        assert_eq!(documents.next().unwrap().value, Document::new().with_content("x"));
        assert!(documents.next().is_none());
    }

    #[test]
    fn cardinality() {
        assert_eq!(parse_first(""), Err(ParseError::NoDocuments));
        assert_eq!(parse_single(""), Err(ParseError::WrongDocumentCount(0)));
        assert_eq!(
            parse_single("a\n---\nb\n---\nc"),
            Err(ParseError::WrongDocumentCount(3))
        );
        assert_eq!(
            parse_first("a\n---\nb"),
            Ok(Document::new().with_content("a"))
        );
        assert_eq!(parse_single(" "), Ok(Document::new().with_content(" ")));
    }
}
