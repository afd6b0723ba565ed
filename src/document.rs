use crate::Comment;

/// One document of a stream: an optional leading comment line followed by
/// optional free-form content.
///
/// Content is kept verbatim. When a comment is present the content starts
/// with the newline that terminated the comment line, so rendering is plain
/// concatenation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub comment: Option<Comment>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub content: Option<String>,
}

impl Document {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_comment(mut self, comment: Comment) -> Self {
        self.comment = Some(comment);
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    #[inline]
    pub fn comment(&self) -> Option<&Comment> {
        self.comment.as_ref()
    }

    #[inline]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// True if the document has neither a comment nor content.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.comment.is_none() && self.content.is_none()
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::Emitter::new(f).emit_document(self)
    }
}
