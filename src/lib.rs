//! Quince - A Rust library for converting Markdown with embedded LaTeX math
//! into Word documents
//!
//! Quince parses a small Markdown dialect (headings, paragraphs, bold spans,
//! inline `$...$` math, and fenced ```` ```math ```` blocks) into a document
//! model, renders LaTeX fragments as OMML (Office Math Markup Language), and
//! packages the result as a `.docx` container.
//!
//! # Features
//!
//! - **Markdown parser**: Line-oriented block recognition with inline span
//!   scanning (plain text, bold, inline math)
//! - **LaTeX to OMML**: Fractions, super/subscripts, roots, vectors, bracket
//!   groups, and Unicode symbol substitution
//! - **DOCX packaging**: Generates a complete WordprocessingML package with
//!   heading styles and centered display math
//! - **Graceful degradation**: Malformed markup never fails; it renders as
//!   literal text
//!
//! # Example - Converting Markdown to a document body
//!
//! ```
//! let body = quince::convert("# Title\n\nEinstein wrote $E=mc^2$ in 1905.");
//! assert!(body.contains("<w:pStyle w:val=\"Heading1\"/>"));
//! assert!(body.contains("<m:oMath>"));
//! ```
//!
//! # Example - Writing a .docx file
//!
//! ```no_run
//! # fn main() -> quince::Result<()> {
//! quince::convert_to_docx("# Report\n\nSee $x^{n+1}$.", "report.docx")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Inspecting the parsed model
//!
//! ```
//! use quince::{Block, Inline, markdown::parse_blocks};
//!
//! let doc = parse_blocks("Some **bold** text.");
//! match &doc.blocks[0] {
//!     Block::Paragraph { inlines } => {
//!         assert!(matches!(&inlines[1], Inline::Bold(_)));
//!     }
//!     _ => unreachable!(),
//! }
//! ```

use std::path::Path;

/// Common types and utilities shared across modules
pub mod common;

/// Document model produced by the Markdown parser
///
/// Plain data types with no behavior beyond their variant tags. The model is
/// fully constructed in one parsing pass and consumed read-only afterwards.
pub mod document;

/// Markdown parsing (block and inline recognition)
pub mod markdown;

/// Mathematical formula conversion (LaTeX to OMML)
pub mod formula;

/// OOXML generation (WordprocessingML serialization and DOCX packaging)
pub mod ooxml;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use document::{Block, Document, Inline};
pub use ooxml::docx::DocxPackage;

/// Convert Markdown source text into a WordprocessingML document part.
///
/// This is the two-stage pipeline in one call: the text is parsed into a
/// [`Document`] and serialized to the `word/document.xml` markup, with every
/// math span rendered as OMML. Use [`convert_to_docx`] to additionally wrap
/// the part in a `.docx` container.
pub fn convert(markdown: &str) -> String {
    let doc = markdown::parse_blocks(markdown);
    ooxml::docx::document_xml(&doc)
}

/// Convert Markdown source text and write a `.docx` file to `path`.
///
/// # Example
///
/// ```no_run
/// # fn main() -> quince::Result<()> {
/// quince::convert_to_docx("# Hello", "hello.docx")?;
/// # Ok(())
/// # }
/// ```
pub fn convert_to_docx<P: AsRef<Path>>(markdown: &str, path: P) -> Result<()> {
    let doc = markdown::parse_blocks(markdown);
    DocxPackage::from_document(&doc).write(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_produces_document_envelope() {
        let xml = convert("# Title\n\nHello world.");
        assert!(xml.starts_with("<?xml version=\"1.0\""));
        assert!(xml.contains("<w:body>"));
        assert!(xml.ends_with("</w:body></w:document>"));
    }

    #[test]
    fn test_convert_empty_input() {
        let xml = convert("");
        assert!(xml.contains("<w:body>"));
        assert!(!xml.contains("<w:p>"));
    }
}
