//! WordprocessingML serialization.
//!
//! [`DocumentXmlWriter`] walks a parsed [`Document`] and produces the
//! `word/document.xml` part: headings carry a `Heading{level}` paragraph
//! style, bold spans become `<w:b/>` runs, and math spans embed the OMML
//! produced by [`latex_to_omml`]. Display math additionally gets a centered
//! paragraph; inline math is embedded mid-paragraph as-is.
//!
//! # Known limitation
//!
//! Literal text is embedded without XML escaping: source text containing
//! `<` or `&` passes straight through into the markup and can yield a part
//! that Word rejects. Escaping would change the byte-for-byte output
//! contract for every existing document, so the behavior is documented here
//! instead of changed.

mod package;

pub use package::DocxPackage;

use crate::document::{Block, Document, Inline};
use crate::formula::latex_to_omml;

/// XML declaration and document envelope with the namespace set Word
/// expects on a main document part.
const DOCUMENT_PROLOGUE: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document
    xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"
    xmlns:m="http://schemas.openxmlformats.org/officeDocument/2006/math"
    xmlns:mc="http://schemas.openxmlformats.org/markup-compatibility/2006"
    xmlns:mo="http://schemas.microsoft.com/office/math/2006/math"
    xmlns:mv="urn:schemas-microsoft-com:mac:vml"
    xmlns:o="urn:schemas-microsoft-com:office:office"
    xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"
    xmlns:v="urn:schemas-microsoft-com:vml"
    xmlns:w10="urn:schemas-microsoft-com:office:word"
    xmlns:w14="http://schemas.microsoft.com/office/word/2010/wordml"
    xmlns:w15="http://schemas.microsoft.com/office/word/2012/wordml"
    mc:Ignorable="w14 w15 mv">
    <w:body>"#;

/// Low-level writer for the main document part.
///
/// Provides buffered, allocation-conscious generation of WordprocessingML
/// from the document model.
pub struct DocumentXmlWriter {
    /// The output buffer
    buffer: String,
}

impl DocumentXmlWriter {
    /// Create a new writer.
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(4096),
        }
    }

    /// Serialize a whole document, envelope included.
    pub fn write_document(&mut self, doc: &Document) {
        log::debug!("serializing document with {} blocks", doc.len());
        self.buffer.push_str(DOCUMENT_PROLOGUE);
        for block in &doc.blocks {
            self.write_block(block);
        }
        self.buffer.push_str("</w:body></w:document>");
    }

    fn write_block(&mut self, block: &Block) {
        match block {
            Block::Heading { level, text } => self.write_heading(*level, text),
            Block::Paragraph { inlines } => self.write_paragraph(inlines),
            Block::MathBlock { latex } => self.write_math_block(latex),
        }
    }

    /// Write a heading paragraph.
    ///
    /// The style id carries the level verbatim; levels beyond the styles
    /// shipped in the package (1-3) still emit `Heading{level}` and rely on
    /// the consuming application's fallback.
    fn write_heading(&mut self, level: usize, text: &str) {
        let mut level_buf = itoa::Buffer::new();
        self.buffer.push_str("<w:p><w:pPr><w:pStyle w:val=\"Heading");
        self.buffer.push_str(level_buf.format(level));
        self.buffer.push_str("\"/></w:pPr><w:r><w:t>");
        self.buffer.push_str(text);
        self.buffer.push_str("</w:t></w:r></w:p>");
    }

    fn write_paragraph(&mut self, inlines: &[Inline]) {
        self.buffer.push_str("<w:p><w:pPr><w:rPr></w:rPr></w:pPr>");
        for inline in inlines {
            self.write_inline(inline);
        }
        self.buffer.push_str("</w:p>");
    }

    fn write_inline(&mut self, inline: &Inline) {
        match inline {
            Inline::Text(content) => {
                self.buffer.push_str("<w:r><w:t>");
                self.buffer.push_str(content);
                self.buffer.push_str("</w:t></w:r>");
            }
            Inline::Bold(inner) => {
                // The parser only nests plain text inside bold; any other
                // nested span renders nothing.
                if let Inline::Text(content) = inner.as_ref() {
                    self.buffer.push_str("<w:r><w:rPr><w:b/></w:rPr><w:t>");
                    self.buffer.push_str(content);
                    self.buffer.push_str("</w:t></w:r>");
                }
            }
            Inline::Math { latex } => {
                self.buffer.push_str(&latex_to_omml(latex));
            }
        }
    }

    /// Write a display-math paragraph: centered, with the OMML inside.
    fn write_math_block(&mut self, latex: &str) {
        self.buffer.push_str("<w:p><w:pPr><w:jc w:val=\"center\"/></w:pPr>");
        self.buffer.push_str(&latex_to_omml(latex));
        self.buffer.push_str("</w:p>");
    }

    /// Consume the writer and return the generated markup.
    pub fn finish(self) -> String {
        self.buffer
    }
}

impl Default for DocumentXmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize a document into the `word/document.xml` markup.
pub fn document_xml(doc: &Document) -> String {
    let mut writer = DocumentXmlWriter::new();
    writer.write_document(doc);
    writer.finish()
}
