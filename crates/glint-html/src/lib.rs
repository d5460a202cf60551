//! glint HTML - fragment parsing
//!
//! Parses markup fragments with html5ever and converts the result into
//! detached glint-dom nodes.

mod parser;

pub use parser::FragmentParser;
