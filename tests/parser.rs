use docstream::*;
use pretty_assertions::assert_eq;

/// An input together with what each entry point should make of it.
struct Fixture {
    input: &'static str,
    documents: Vec<Document>,
}

fn comment_only(text: &str) -> Document {
    Document::new().with_comment(Comment::new(text))
}

fn fixtures() -> Vec<Fixture> {
    vec![
        Fixture {
            input: "",
            documents: vec![],
        },
        Fixture {
            input: " ",
            documents: vec![Document::new().with_content(" ")],
        },
        Fixture {
            input: "# test comment",
            documents: vec![comment_only("test comment")],
        },
        Fixture {
            input: "# test comment\n---\n# test comment 2",
            documents: vec![comment_only("test comment"), comment_only("test comment 2")],
        },
        Fixture {
            input: "# a\n---\n# b\n---\n# c",
            documents: vec![comment_only("a"), comment_only("b"), comment_only("c")],
        },
        Fixture {
            input: "# heading\n\nbody text\n  indented\n",
            documents: vec![Document::new()
                .with_comment(Comment::new("heading"))
                .with_content("\n\nbody text\n  indented\n")],
        },
    ]
}

#[test]
fn parse_all_fixtures() {
    for fixture in fixtures() {
        let stream = parse_all(fixture.input);
        assert_eq!(stream.documents(), &fixture.documents[..], "{:?}", fixture.input);
        assert_eq!(stream.render(), fixture.input);
    }
}

#[test]
fn parse_first_fixtures() {
    for fixture in fixtures() {
        let result = parse_first(fixture.input);
        match fixture.documents.first() {
            Some(expected) => assert_eq!(result.as_ref(), Ok(expected)),
            None => assert_eq!(result, Err(ParseError::NoDocuments)),
        }
    }
}

#[test]
fn parse_single_fixtures() {
    for fixture in fixtures() {
        let result = parse_single(fixture.input);
        match fixture.documents.as_slice() {
            [expected] => assert_eq!(result.as_ref(), Ok(expected)),
            documents => assert_eq!(
                result,
                Err(ParseError::WrongDocumentCount(documents.len()))
            ),
        }
    }
}

#[test]
fn cardinality() {
    assert_eq!(parse_all("").documents().len(), 0);
    assert_eq!(parse_all(" ").documents().len(), 1);
    assert_eq!(parse_all("# c\n---\n# d").documents().len(), 2);
}

#[test]
fn error_messages() {
    assert_eq!(
        parse_first("").unwrap_err().to_string(),
        "expected at least one document, but found none"
    );
    assert_eq!(
        parse_single("").unwrap_err().to_string(),
        "expected exactly one document, but found 0"
    );
    assert_eq!(
        parse_single("# a\n---\n# b").unwrap_err().to_string(),
        "expected exactly one document, but found 2"
    );
}

#[test]
fn parse_first_ignores_later_documents() {
    let document = parse_first("# test comment\n---\n# test comment 2").unwrap();
    assert_eq!(document, comment_only("test comment"));
}

#[test]
fn comment_extraction() {
    let stream = parse_all("# test comment");
    let comment = stream.documents()[0].comment().unwrap();
    assert_eq!(comment.text(), "test comment");
    assert_eq!(comment.style(), CommentStyle::Spaced);

    let stream = parse_all("#   spaced   out  ");
    assert_eq!(
        stream.documents()[0].comment().map(Comment::text),
        Some("  spaced   out  ")
    );
}

#[test]
fn tight_comment_round_trips() {
    let input = "#no space\nrest";
    let document = parse_single(input).unwrap();
    assert_eq!(
        document,
        Document::new()
            .with_comment(Comment::tight("no space"))
            .with_content("\nrest")
    );
    assert_eq!(document.render(), input);
}

#[test]
fn blank_lines_after_comment_are_kept() {
    let input = "# c\n\n\ncontent\n\n";
    let document = parse_single(input).unwrap();
    assert_eq!(document.content(), Some("\n\n\ncontent\n\n"));
    assert_eq!(document.to_string(), input);
}

#[test]
fn separator_lookalikes_are_content() {
    for input in ["---", "---\nfoo", "foo\n---", "foo\n ---\nbar", "foo\n----\nbar"] {
        let document = parse_single(input).unwrap();
        assert_eq!(document, Document::new().with_content(input));
    }
}

#[test]
fn stream_from_reader() {
    let stream = Stream::parse(std::io::Cursor::new("# a\n---\n")).unwrap();
    assert_eq!(stream.documents(), [comment_only("a"), Document::new()]);
    assert_eq!(stream.to_string(), "# a\n---\n");
}

#[test]
fn errors_convert_into_crate_error() {
    fn first_comment(input: &str) -> Result<String, Error> {
        let document = parse_first(input)?;
        Ok(document.comment().map(|c| c.text().to_owned()).unwrap_or_default())
    }

    assert_eq!(first_comment("# hi").unwrap(), "hi");
    let err = first_comment("").unwrap_err();
    assert!(err.is_cardinality());
    assert_eq!(err, ParseError::NoDocuments);
}
