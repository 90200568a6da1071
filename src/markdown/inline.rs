//! Inline span parsing for paragraph text.

use memchr::{memchr, memchr2};

use crate::document::Inline;

/// Parse one logical line of paragraph text into inline spans.
///
/// The scan moves left to right with explicit lookahead:
///
/// - `**...**` becomes a bold span wrapping the enclosed text. The enclosed
///   substring is always a single plain-text span; markers inside it are not
///   recognized.
/// - `$...$` becomes an inline math span holding the enclosed LaTeX.
/// - Everything else is literal text, split at the next `*` or `$`.
///
/// An opening `**` or `$` with no matching close is not an error: the
/// remainder of the line, opening delimiter included, becomes one literal
/// text span. Concatenating the content of all produced spans therefore
/// reconstructs the input with balanced delimiter pairs removed and
/// unterminated delimiters preserved.
pub fn parse_inline(text: &str) -> Vec<Inline> {
    let mut inlines = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix("**") {
            match after.find("**") {
                Some(end) => {
                    inlines.push(Inline::Bold(Box::new(Inline::Text(after[..end].to_string()))));
                    rest = &after[end + 2..];
                }
                None => {
                    // Unterminated bold marker: the rest, `**` included,
                    // is literal text.
                    inlines.push(Inline::Text(rest.to_string()));
                    break;
                }
            }
        } else if let Some(after) = rest.strip_prefix('$') {
            match memchr(b'$', after.as_bytes()) {
                Some(end) => {
                    inlines.push(Inline::Math {
                        latex: after[..end].to_string(),
                    });
                    rest = &after[end + 1..];
                }
                None => {
                    inlines.push(Inline::Text(rest.to_string()));
                    break;
                }
            }
        } else {
            // A leading lone `*` is not a marker. The scan for the next
            // marker starts past it so every iteration makes progress.
            let skip = usize::from(rest.as_bytes()[0] == b'*');
            match memchr2(b'*', b'$', rest[skip..].as_bytes()) {
                Some(found) => {
                    let next = skip + found;
                    inlines.push(Inline::Text(rest[..next].to_string()));
                    rest = &rest[next..];
                }
                None => {
                    inlines.push(Inline::Text(rest.to_string()));
                    break;
                }
            }
        }
    }

    inlines
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn text(s: &str) -> Inline {
        Inline::Text(s.to_string())
    }

    fn bold(s: &str) -> Inline {
        Inline::Bold(Box::new(Inline::Text(s.to_string())))
    }

    fn math(s: &str) -> Inline {
        Inline::Math {
            latex: s.to_string(),
        }
    }

    /// Concatenate span contents the way a reader would see them.
    fn flatten(spans: &[Inline]) -> String {
        let mut out = String::new();
        for span in spans {
            match span {
                Inline::Text(s) => out.push_str(s),
                Inline::Bold(inner) => match inner.as_ref() {
                    Inline::Text(s) => out.push_str(s),
                    _ => unreachable!("parser only nests Text inside Bold"),
                },
                Inline::Math { latex } => out.push_str(latex),
            }
        }
        out
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(parse_inline("just words"), vec![text("just words")]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_inline("").is_empty());
    }

    #[test]
    fn test_bold_span() {
        assert_eq!(
            parse_inline("this is **strong** text"),
            vec![text("this is "), bold("strong"), text(" text")]
        );
    }

    #[test]
    fn test_bold_at_start_and_end() {
        assert_eq!(
            parse_inline("**a** mid **b**"),
            vec![bold("a"), text(" mid "), bold("b")]
        );
    }

    #[test]
    fn test_markers_inside_bold_are_not_recognized() {
        assert_eq!(
            parse_inline("**a $x$ b**"),
            vec![bold("a $x$ b")]
        );
    }

    #[test]
    fn test_inline_math() {
        assert_eq!(
            parse_inline("equation: $E=mc^2$"),
            vec![text("equation: "), math("E=mc^2")]
        );
    }

    #[test]
    fn test_adjacent_math_spans() {
        assert_eq!(
            parse_inline("$a$$b$"),
            vec![math("a"), math("b")]
        );
    }

    #[test]
    fn test_unterminated_bold_keeps_delimiter() {
        assert_eq!(
            parse_inline("a **b"),
            vec![text("a "), text("**b")]
        );
    }

    #[test]
    fn test_unterminated_math_keeps_delimiter() {
        assert_eq!(
            parse_inline("cost: $5"),
            vec![text("cost: "), text("$5")]
        );
    }

    #[test]
    fn test_lone_asterisk_is_literal() {
        assert_eq!(parse_inline("a*b"), vec![text("a"), text("*b")]);
        assert_eq!(parse_inline("*"), vec![text("*")]);
    }

    #[test]
    fn test_lone_asterisk_before_math() {
        assert_eq!(
            parse_inline("2*3 is $6$"),
            vec![text("2"), text("*3 is "), math("6")]
        );
    }

    #[test]
    fn test_round_trip_with_balanced_markers() {
        let input = "Some **bold** and $x^2$ text.";
        assert_eq!(flatten(&parse_inline(input)), "Some bold and x^2 text.");
    }

    proptest! {
        /// For inputs assembled from marker-free segments and balanced
        /// delimiter pairs, flattening the spans reconstructs the input
        /// with the markers removed.
        #[test]
        fn round_trip_balanced(
            segments in proptest::collection::vec("[a-z A-Z0-9+=^_.,]{0,12}", 1..6),
            kinds in proptest::collection::vec(0u8..3, 1..6),
        ) {
            let mut source = String::new();
            let mut expected = String::new();
            for (segment, kind) in segments.iter().zip(kinds.iter().copied()) {
                match kind {
                    0 => source.push_str(segment),
                    1 => {
                        source.push_str("**");
                        source.push_str(segment);
                        source.push_str("**");
                    }
                    _ => {
                        source.push('$');
                        source.push_str(segment);
                        source.push('$');
                    }
                }
                expected.push_str(segment);
            }
            prop_assert_eq!(flatten(&parse_inline(&source)), expected);
        }

        /// The scanner terminates and never drops characters on arbitrary
        /// marker soup (unterminated delimiters stay literal).
        #[test]
        fn terminates_on_arbitrary_input(input in "[a-z*$ ]{0,40}") {
            let spans = parse_inline(&input);
            // Every non-marker character must survive in some span.
            let flat = flatten(&spans);
            let strip = |s: &str| s.replace(['*', '$'], "");
            prop_assert_eq!(strip(&flat), strip(&input));
        }
    }
}
