//! Multi-document text streams with exact round-tripping.
//!
//! A stream is one or more documents separated by `---` lines. Each document
//! may start with a `#` comment line, followed by free-form content. Parsing
//! keeps every byte, so rendering a parsed [`Stream`] gives back its input.

mod comment;
mod document;
mod emitter;
mod error;
mod location;
mod parser;
mod scanner;
mod stream;
mod token;

pub use comment::*;
pub use document::*;
pub use emitter::*;
pub use error::*;
pub use location::*;
pub use parser::*;
pub use scanner::*;
pub use stream::*;
pub use token::*;
