//! Document model for parsed Markdown.
//!
//! The model is a closed set of tagged variants: the parser will never grow
//! new block or inline kinds without a matching serializer change, so both
//! enums are matched exhaustively throughout the crate.
//!
//! A [`Document`] is built in a single pass by
//! [`parse_blocks`](crate::markdown::parse_blocks) and is never mutated
//! afterwards; the serializer consumes it read-only.

use serde::{Deserialize, Serialize};

/// A parsed document: an ordered sequence of blocks.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    /// Top-level blocks in source order
    pub blocks: Vec<Block>,
}

impl Document {
    /// Number of top-level blocks.
    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the document contains no blocks.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// A top-level structural unit of the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    /// Heading with its `#`-run level and raw text.
    ///
    /// The level has no upper bound; it is carried through to the output
    /// verbatim. Heading text is not scanned for inline spans.
    Heading { level: usize, text: String },

    /// Paragraph made of an ordered sequence of inline spans.
    Paragraph { inlines: Vec<Inline> },

    /// Display-mode math block holding one LaTeX fragment.
    MathBlock { latex: String },
}

/// A unit of content within a paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Inline {
    /// Literal text, rendered verbatim.
    Text(String),

    /// Bold span wrapping exactly one nested span.
    ///
    /// The parser only ever produces a [`Inline::Text`] inside; nested bold
    /// or math markers within a bold span are not recognized.
    Bold(Box<Inline>),

    /// Inline math span holding one LaTeX fragment (no `$` delimiters).
    Math { latex: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_len() {
        let doc = Document {
            blocks: vec![Block::Heading {
                level: 1,
                text: "Title".to_string(),
            }],
        };
        assert_eq!(doc.len(), 1);
        assert!(!doc.is_empty());
        assert!(Document::default().is_empty());
    }

    #[test]
    fn test_model_serialization_round_trip() {
        let doc = Document {
            blocks: vec![
                Block::Heading {
                    level: 2,
                    text: "Results".to_string(),
                },
                Block::Paragraph {
                    inlines: vec![
                        Inline::Text("mass-energy: ".to_string()),
                        Inline::Bold(Box::new(Inline::Text("important".to_string()))),
                        Inline::Math {
                            latex: "E=mc^2".to_string(),
                        },
                    ],
                },
                Block::MathBlock {
                    latex: "\\frac{a}{b}".to_string(),
                },
            ],
        };

        let json = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, back);
    }
}
