use std::io::BufRead;

use crate::{parse_all, Document, Error};

/// An ordered sequence of documents read from one input.
///
/// An empty stream (zero documents) is what the empty string parses to. It is
/// distinct from a stream holding one empty document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Stream {
    documents: Vec<Document>,
}

impl Stream {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, document: Document) {
        self.documents.push(document);
    }

    pub fn with_document(mut self, document: Document) -> Self {
        self.push(document);
        self
    }

    #[inline]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    #[inline]
    pub fn into_documents(self) -> Vec<Document> {
        self.documents
    }

    #[inline]
    pub fn first(&self) -> Option<&Document> {
        self.documents.first()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Read all of `reader` and parse it as a stream.
    pub fn parse<R: BufRead>(mut reader: R) -> Result<Self, Error> {
        let mut bytes = Vec::new();
        std::io::Read::read_to_end(&mut reader, &mut bytes)?;
        let input = std::str::from_utf8(&bytes)?;
        Ok(parse_all(input))
    }
}

impl std::str::FromStr for Stream {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_all(s))
    }
}

impl std::fmt::Display for Stream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::Emitter::new(f).emit_stream(self)
    }
}

impl FromIterator<Document> for Stream {
    fn from_iter<T: IntoIterator<Item = Document>>(iter: T) -> Self {
        Self {
            documents: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Stream {
    type Item = Document;
    type IntoIter = std::vec::IntoIter<Document>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.documents.into_iter()
    }
}

impl<'a> IntoIterator for &'a Stream {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}
