use crate::{Comment, SourceLocation, Spanned, SpannedExt, Token, SEPARATOR};

/// Tokenizer over an in-memory document stream.
///
/// The input is cut into segments at every [`SEPARATOR`]. Each segment
/// produces at most one [`Token::Comment`] (its first line, if that line
/// starts with `#`) followed by at most one [`Token::Content`] holding the
/// rest verbatim. Concatenating the [`Display`](std::fmt::Display) output of
/// all tokens reproduces the input exactly.
pub struct Scanner<'r> {
    input: &'r str,
    location: SourceLocation,
    state: State,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// At the start of a segment.
    SegmentStart,
    /// Comment line consumed, the rest of the segment ends at `end`.
    SegmentRest { end: usize },
    /// Segment fully consumed. `separator` is true if a separator follows.
    SegmentEnd { separator: bool },
    Done,
}

impl<'r> Scanner<'r> {
    pub fn new(input: &'r str) -> Self {
        Self {
            input,
            location: SourceLocation::default(),
            state: if input.is_empty() {
                State::Done
            } else {
                State::SegmentStart
            },
        }
    }

    #[inline]
    pub fn current_location(&self) -> SourceLocation {
        self.location
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.state == State::Done
    }

    /// Consume input up to the byte offset `end`, returning it with its span.
    fn take(&mut self, end: usize) -> Spanned<&'r str> {
        let input = self.input;
        let start = self.location;
        let text = &input[start.offset..end];
        self.location.advance_str(text);
        text.in_span(start.until(self.location))
    }

    /// End offset of the current segment, and whether a separator follows.
    fn segment_end(&self) -> (usize, bool) {
        let offset = self.location.offset;
        match self.input[offset..].find(SEPARATOR) {
            Some(found) => (offset + found, true),
            None => (self.input.len(), false),
        }
    }

    fn scan_segment_start(&mut self) -> Option<Spanned<Token<'r>>> {
        let input = self.input;
        let (end, separator) = self.segment_end();
        let segment = &input[self.location.offset..end];

        let line_end = segment.find('\n').unwrap_or(segment.len());
        if let Some((style, _)) = Comment::split_line(&segment[..line_end]) {
            let line = self.take(self.location.offset + line_end);
            self.state = if line_end < segment.len() {
                State::SegmentRest { end }
            } else {
                State::SegmentEnd { separator }
            };
            // The marker is ASCII, so the text is a suffix of the line.
            let text = &line.value[style.marker().len()..];
            return Some(Token::Comment { text, style }.in_span(line.span));
        }

        self.state = State::SegmentEnd { separator };
        if segment.is_empty() {
            None
        } else {
            Some(self.take(end).map(Token::Content))
        }
    }

    fn scan_segment_end(&mut self, separator: bool) -> Option<Spanned<Token<'r>>> {
        if separator {
            let end = self.location.offset + SEPARATOR.len();
            self.state = State::SegmentStart;
            Some(self.take(end).map(|_| Token::Separator))
        } else {
            self.state = State::Done;
            None
        }
    }
}

impl<'r> Iterator for Scanner<'r> {
    type Item = Spanned<Token<'r>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let token = match self.state {
                State::SegmentStart => self.scan_segment_start(),
                State::SegmentRest { end } => {
                    self.state = State::SegmentEnd {
                        separator: end < self.input.len(),
                    };
                    Some(self.take(end).map(Token::Content))
                }
                State::SegmentEnd { separator } => self.scan_segment_end(separator),
                State::Done => return None,
            };

            if let Some(token) = token {
                tracing::trace!(token = ?token.value, at = %token.span.start, "scanned token");
                return Some(token);
            }
        }
    }
}
