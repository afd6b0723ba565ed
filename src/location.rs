/// A position in the input, as reached by the scanner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceLocation {
    /// Offset in bytes from the beginning of the input.
    pub offset: usize,
    /// Line, counting from 0.
    pub line: usize,
    /// Column in Unicode chars, counting from 0.
    pub column: usize,
}

impl SourceLocation {
    /// Move past `text`. A lone `\r` does not count as a column.
    pub fn advance_str(&mut self, text: &str) {
        self.offset += text.len();
        for ch in text.chars() {
            match ch {
                '\n' => {
                    self.line += 1;
                    self.column = 0;
                }
                '\r' => {}
                _ => self.column += 1,
            }
        }
    }

    #[inline]
    pub fn until(self, end: Self) -> Span {
        Span { start: self, end }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// The stretch of input between two locations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: SourceLocation,
    pub end: SourceLocation,
}

impl Span {
    /// A zero-length span, used for documents of an empty segment.
    #[inline]
    pub fn empty(at: SourceLocation) -> Self {
        at.until(at)
    }

    /// Byte range of the span within the input it was produced from.
    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start.offset..self.end.offset
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }
}

/// A value together with the region of input it was read from.
///
/// Equality ignores the span, so a parsed value compares equal to one built
/// by hand.
#[derive(Debug, Clone, Copy)]
pub struct Spanned<T> {
    pub value: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn into_inner(self) -> T {
        self.value
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Spanned<U> {
        Spanned {
            value: f(self.value),
            span: self.span,
        }
    }
}

impl<T> std::ops::Deref for Spanned<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: PartialEq> PartialEq for Spanned<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

pub(crate) trait SpannedExt: Sized {
    #[inline]
    fn in_span(self, span: Span) -> Spanned<Self> {
        Spanned { value: self, span }
    }
}

impl<T> SpannedExt for T {}
