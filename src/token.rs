use crate::CommentStyle;

/// The marker line between two documents, including both newlines that
/// delimit it.
pub const SEPARATOR: &str = "\n---\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token<'r> {
    /// The first line of a document when it starts with `#`. The text
    /// excludes the marker and the line terminator.
    Comment { text: &'r str, style: CommentStyle },
    /// Everything in a document that isn't its leading comment, verbatim.
    /// When following a comment this starts with the newline that ended the
    /// comment line.
    Content(&'r str),
    /// The `---` line between two documents.
    Separator,
}

impl<'r> Token<'r> {
    #[inline]
    pub fn comment(text: &'r str) -> Self {
        Self::Comment {
            text,
            style: CommentStyle::Spaced,
        }
    }

    #[inline]
    pub fn content(content: &'r str) -> Self {
        Self::Content(content)
    }
}

impl<'r> std::fmt::Display for Token<'r> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Comment { text, style } => write!(f, "{}{}", style.marker(), text),
            Token::Content(content) => f.write_str(content),
            Token::Separator => f.write_str(SEPARATOR),
        }
    }
}
