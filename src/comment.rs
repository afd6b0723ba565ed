/// A single comment line leading a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comment {
    /// The comment text, excluding the `#` marker, the single space that
    /// follows it (if any), and the line terminator. Any further spaces are
    /// part of the text.
    pub text: String,
    /// How the marker was written, used to reproduce the line exactly.
    #[cfg_attr(feature = "serde", serde(default))]
    pub style: CommentStyle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommentStyle {
    /// `# text`
    #[default]
    Spaced,
    /// `#text`, or a bare `#`.
    Tight,
}

impl CommentStyle {
    #[inline]
    pub fn marker(self) -> &'static str {
        match self {
            CommentStyle::Spaced => "# ",
            CommentStyle::Tight => "#",
        }
    }
}

impl Comment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: CommentStyle::Spaced,
        }
    }

    pub fn tight(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: CommentStyle::Tight,
        }
    }

    /// Split a comment line (without its terminator) into marker style and
    /// text. Returns `None` if the line is not a comment.
    pub(crate) fn split_line(line: &str) -> Option<(CommentStyle, &str)> {
        let rest = line.strip_prefix('#')?;
        Some(match rest.strip_prefix(' ') {
            Some(text) => (CommentStyle::Spaced, text),
            None => (CommentStyle::Tight, rest),
        })
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn style(&self) -> CommentStyle {
        self.style
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Comment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::Emitter::new(f).emit_comment(self)
    }
}
