//! DOCX container packaging.
//!
//! A `.docx` file is a ZIP archive holding the generated document part next
//! to a handful of fixed parts: the content-type map, the package and part
//! relationships, and a minimal style sheet. The fixed parts never vary
//! with the input, so they live here as static templates; this module does
//! no transformation of the document markup it is handed.

use std::io::Write;
use std::path::Path;

use zip::CompressionMethod;
use zip::write::{SimpleFileOptions, ZipWriter};

use crate::common::{Error, Result};
use crate::document::Document;

/// Content-type map for the package.
const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="xml" ContentType="application/xml"/>
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
    <Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
</Types>"#;

/// Package-level relationships (`_rels/.rels`).
const PACKAGE_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#;

/// Document-part relationships (`word/_rels/document.xml.rels`).
const DOCUMENT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#;

/// Minimal style sheet with the first three heading styles.
const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
    <w:style w:type="paragraph" w:styleId="Heading1">
        <w:name w:val="Heading 1"/>
        <w:pPr>
            <w:spacing w:before="240" w:after="120"/>
            <w:outlineLvl w:val="0"/>
        </w:pPr>
        <w:rPr>
            <w:b/>
            <w:sz w:val="36"/>
        </w:rPr>
    </w:style>
    <w:style w:type="paragraph" w:styleId="Heading2">
        <w:name w:val="Heading 2"/>
        <w:pPr>
            <w:spacing w:before="240" w:after="120"/>
            <w:outlineLvl w:val="1"/>
        </w:pPr>
        <w:rPr>
            <w:b/>
            <w:sz w:val="32"/>
        </w:rPr>
    </w:style>
    <w:style w:type="paragraph" w:styleId="Heading3">
        <w:name w:val="Heading 3"/>
        <w:pPr>
            <w:spacing w:before="240" w:after="120"/>
            <w:outlineLvl w:val="2"/>
        </w:pPr>
        <w:rPr>
            <w:b/>
            <w:sz w:val="28"/>
        </w:rPr>
    </w:style>
</w:styles>"#;

/// Builder for `.docx` packages.
///
/// # Example
///
/// ```no_run
/// use quince::DocxPackage;
///
/// # fn main() -> quince::Result<()> {
/// let pkg = DocxPackage::from_markdown("# Hello\n\nWorld with $x^2$.");
/// pkg.write("hello.docx")?;
/// # Ok(())
/// # }
/// ```
pub struct DocxPackage {
    document_xml: String,
}

impl DocxPackage {
    /// Build a package from a parsed document.
    pub fn from_document(doc: &Document) -> Self {
        Self {
            document_xml: super::document_xml(doc),
        }
    }

    /// Build a package straight from Markdown source text.
    pub fn from_markdown(markdown: &str) -> Self {
        Self::from_document(&crate::markdown::parse_blocks(markdown))
    }

    /// The generated `word/document.xml` markup.
    pub fn document_xml(&self) -> &str {
        &self.document_xml
    }

    /// Serialize the package to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = ZipWriter::new(std::io::Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for (name, content) in [
            ("[Content_Types].xml", CONTENT_TYPES_XML),
            ("_rels/.rels", PACKAGE_RELS_XML),
            ("word/_rels/document.xml.rels", DOCUMENT_RELS_XML),
            ("word/styles.xml", STYLES_XML),
            ("word/document.xml", self.document_xml.as_str()),
        ] {
            writer
                .start_file(name, options)
                .map_err(|e| Error::ZipError(e.to_string()))?;
            writer.write_all(content.as_bytes())?;
        }

        let cursor = writer
            .finish()
            .map_err(|e| Error::ZipError(e.to_string()))?;
        Ok(cursor.into_inner())
    }

    /// Write the package to a stream.
    pub fn write_to_stream<W: Write>(&self, mut writer: W) -> Result<()> {
        let bytes = self.to_bytes()?;
        writer.write_all(&bytes)?;
        Ok(())
    }

    /// Write the package to a file.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        log::debug!("writing docx package to {}", path.as_ref().display());
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn part_names(bytes: &[u8]) -> Vec<String> {
        let cursor = std::io::Cursor::new(bytes.to_vec());
        let archive = zip::ZipArchive::new(cursor).unwrap();
        archive.file_names().map(str::to_string).collect()
    }

    fn read_part(bytes: &[u8], name: &str) -> String {
        let cursor = std::io::Cursor::new(bytes.to_vec());
        let mut archive = zip::ZipArchive::new(cursor).unwrap();
        let mut part = archive.by_name(name).unwrap();
        let mut content = String::new();
        part.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_package_contains_all_parts() {
        let bytes = DocxPackage::from_markdown("# Title").to_bytes().unwrap();
        let mut names = part_names(&bytes);
        names.sort();
        assert_eq!(
            names,
            vec![
                "[Content_Types].xml",
                "_rels/.rels",
                "word/_rels/document.xml.rels",
                "word/document.xml",
                "word/styles.xml",
            ]
        );
    }

    #[test]
    fn test_document_part_round_trips_unchanged() {
        let pkg = DocxPackage::from_markdown("# Title\n\nBody with $x^2$.");
        let bytes = pkg.to_bytes().unwrap();
        assert_eq!(read_part(&bytes, "word/document.xml"), pkg.document_xml());
    }

    #[test]
    fn test_content_types_references_both_overrides() {
        let bytes = DocxPackage::from_markdown("x").to_bytes().unwrap();
        let content_types = read_part(&bytes, "[Content_Types].xml");
        assert!(content_types.contains("/word/document.xml"));
        assert!(content_types.contains("/word/styles.xml"));
    }

    #[test]
    fn test_styles_cover_three_heading_levels() {
        let bytes = DocxPackage::from_markdown("x").to_bytes().unwrap();
        let styles = read_part(&bytes, "word/styles.xml");
        for id in ["Heading1", "Heading2", "Heading3"] {
            assert!(styles.contains(id));
        }
    }

    #[test]
    fn test_write_creates_readable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.docx");
        DocxPackage::from_markdown("# Hello\n\nWorld.")
            .write(&path)
            .unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let document = read_part(&bytes, "word/document.xml");
        assert!(document.contains("<w:t>Hello</w:t>"));
        assert!(document.contains("<w:t>World.</w:t>"));
    }

    #[test]
    fn test_write_to_stream_matches_to_bytes() {
        let pkg = DocxPackage::from_markdown("stream me");
        let mut out = Vec::new();
        pkg.write_to_stream(&mut out).unwrap();
        assert_eq!(out, pkg.to_bytes().unwrap());
    }
}
