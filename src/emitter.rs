use crate::{Comment, Document, Stream, SEPARATOR};

/// Writes the text form of comments, documents and streams.
///
/// Output is the exact inverse of parsing: emitting a parsed stream
/// reproduces its input byte for byte. Nothing is normalized.
pub struct Emitter<W> {
    writer: W,
}

mod private {
    pub struct FmtWriter<W>(pub W);
    impl<W: std::io::Write> std::fmt::Write for FmtWriter<W> {
        #[inline]
        fn write_str(&mut self, s: &str) -> std::fmt::Result {
            self.0.write_all(s.as_bytes()).map_err(|_| std::fmt::Error)
        }
    }
}

impl<W: std::io::Write> Emitter<private::FmtWriter<W>> {
    /// Emit into an [`std::io::Write`] writer. Only valid UTF-8 is written.
    pub fn with_io_writer(writer: W) -> Self {
        Self {
            writer: private::FmtWriter(writer),
        }
    }
}

impl<W: std::fmt::Write> Emitter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn emit_comment(&mut self, comment: &Comment) -> Result<(), std::fmt::Error> {
        self.writer.write_str(comment.style.marker())?;
        self.writer.write_str(&comment.text)
    }

    pub fn emit_document(&mut self, document: &Document) -> Result<(), std::fmt::Error> {
        if let Some(ref comment) = document.comment {
            self.emit_comment(comment)?;
        }
        if let Some(ref content) = document.content {
            self.writer.write_str(content)?;
        }
        Ok(())
    }

    pub fn emit_stream(&mut self, stream: &Stream) -> Result<(), std::fmt::Error> {
        for (index, document) in stream.iter().enumerate() {
            if index > 0 {
                self.writer.write_str(SEPARATOR)?;
            }
            self.emit_document(document)?;
        }
        Ok(())
    }
}
